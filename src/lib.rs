// Bank Ledger - Core Library
// Builds the manager → client → action → pay graph and answers the ledger queries

pub mod error;
pub mod tree;
pub mod xml;
pub mod entities;
pub mod builder;
pub mod aggregator;
pub mod report;
pub mod config;
pub mod loader;

// Re-export commonly used types
pub use error::{ParseError, QueryError};
pub use tree::{parse_decimal, Node};
pub use entities::{
    ActionKind, ActionStatus, BankAction, Client, Manager, Pay,
};
pub use builder::{build, Ledger};
pub use aggregator::{
    AggregationEngine, RankedClient, RankedManager, DEFAULT_TOP_MANAGERS,
};
pub use report::{ClientSummary, LedgerReport, ManagerSummary};
pub use config::{Config, InputFormat, OutputFormat};
pub use loader::{load_ledger, parse_document};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
