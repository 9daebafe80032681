// 🚨 Error Taxonomy - what can go wrong while building or querying a ledger
//
// ParseError  → input could not be turned into a model (fatal, nothing is returned)
// QueryError  → the model exists but has nothing to answer the question with

use thiserror::Error;

// ============================================================================
// PARSE ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A node is missing an attribute the model requires
    #[error("<{tag}> is missing required attribute '{attribute}'")]
    MissingAttribute { tag: String, attribute: String },

    /// A numeric attribute did not parse as a decimal
    #[error("<{tag}> attribute '{attribute}' is not a decimal: {value:?}")]
    InvalidDecimal {
        tag: String,
        attribute: String,
        value: String,
    },

    /// The source document itself is malformed (bad XML, bad JSON, no root)
    #[error("malformed document: {0}")]
    Document(String),
}

// ============================================================================
// QUERY ERRORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No managers or no clients to rank
    #[error("ledger has no clients to rank")]
    EmptyModel,

    /// Average requested over zero active deposits
    #[error("no active deposits to average (division by zero)")]
    DivideByZero,

    /// A running total left the representable decimal range
    #[error("decimal overflow while totalling {0}")]
    Overflow(&'static str),
}
