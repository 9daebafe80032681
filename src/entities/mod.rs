// Record Types - the typed ledger graph
//
// Manager → Client → BankAction → Pay, each level owning the next exclusively.
// Records are built once by the model builder and only read afterwards:
// fields are private and there are no mutators.

pub mod action;
pub mod client;
pub mod manager;
pub mod pay;

pub use action::{ActionKind, ActionStatus, BankAction};
pub use client::Client;
pub use manager::Manager;
pub use pay::Pay;
