// 🏦 BankAction - a credit or a deposit held by a client
//
// Credits carry repayments (Pays). Deposits may structurally carry an empty
// pay list but never repayments in practice.

use super::pay::Pay;
use crate::error::QueryError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

// ============================================================================
// ACTION KIND / STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionKind {
    /// Money lent to the client
    Credit,

    /// Money held for the client
    Deposit,
}

impl ActionKind {
    /// "credit" is a credit, any other tag is a deposit
    pub fn from_tag(tag: &str) -> Self {
        if tag == "credit" {
            ActionKind::Credit
        } else {
            ActionKind::Deposit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Credit => "credit",
            ActionKind::Deposit => "deposit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionStatus {
    Active,
    Closed,
}

impl ActionStatus {
    /// "active" is active, anything else counts as closed
    pub fn from_status(status: &str) -> Self {
        if status == "active" {
            ActionStatus::Active
        } else {
            ActionStatus::Closed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Active => "active",
            ActionStatus::Closed => "closed",
        }
    }
}

// ============================================================================
// BANK ACTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankAction {
    kind: ActionKind,
    status: ActionStatus,
    value: Decimal,
    pays: Vec<Pay>,
}

impl BankAction {
    pub fn new(kind: ActionKind, status: ActionStatus, value: Decimal, pays: Vec<Pay>) -> Self {
        BankAction {
            kind,
            status,
            value,
            pays,
        }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn status(&self) -> ActionStatus {
        self.status
    }

    pub fn is_credit(&self) -> bool {
        self.kind == ActionKind::Credit
    }

    pub fn is_active(&self) -> bool {
        self.status == ActionStatus::Active
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn pays(&self) -> &[Pay] {
        &self.pays
    }

    /// Sum of all repayments made against this action
    pub fn total_paid(&self) -> Result<Decimal, QueryError> {
        self.pays.iter().try_fold(Decimal::ZERO, |total, pay| {
            total
                .checked_add(pay.value())
                .ok_or(QueryError::Overflow("pays"))
        })
    }
}

impl fmt::Display for BankAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BankAction {} ({}), value={}, pays={}",
            self.kind.as_str(),
            self.status.as_str(),
            self.value,
            self.pays.len()
        )
    }
}
