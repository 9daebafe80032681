// 👤 Client - owns credits and deposits

use super::action::BankAction;
use crate::error::QueryError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    /// Opaque identifier, not necessarily numeric
    id: String,
    name: String,
    actions: Vec<BankAction>,
}

impl Client {
    pub fn new(id: impl Into<String>, name: impl Into<String>, actions: Vec<BankAction>) -> Self {
        Client {
            id: id.into(),
            name: name.into(),
            actions,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[BankAction] {
        &self.actions
    }

    /// Outstanding balance over active credits
    ///
    /// sum(active credit values) - sum(pays on those credits).
    /// Deposits and closed credits contribute to neither term. No lower bound:
    /// overpaid credits make the balance negative.
    pub fn balance_sum_of_active_credit(&self) -> Result<Decimal, QueryError> {
        let mut credits = Decimal::ZERO;
        let mut paid = Decimal::ZERO;

        for action in self
            .actions
            .iter()
            .filter(|action| action.is_credit() && action.is_active())
        {
            credits = credits
                .checked_add(action.value())
                .ok_or(QueryError::Overflow("active credits"))?;
            paid = paid
                .checked_add(action.total_paid()?)
                .ok_or(QueryError::Overflow("pays"))?;
        }

        credits
            .checked_sub(paid)
            .ok_or(QueryError::Overflow("active credit balance"))
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client: id={}, name={}, actions={}",
            self.id,
            self.name,
            self.actions.len()
        )
    }
}
