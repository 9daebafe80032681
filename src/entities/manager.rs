// 🧑‍💼 Manager - owns a book of clients

use super::client::Client;
use crate::error::QueryError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manager {
    name: String,
    email: String,
    phone: String,
    clients: Vec<Client>,
}

impl Manager {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        clients: Vec<Client>,
    ) -> Self {
        Manager {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            clients,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Total value of every closed action across this manager's clients
    ///
    /// Closed deposits count too: only the status is checked, never the kind.
    pub fn sum_of_closed_credits(&self) -> Result<Decimal, QueryError> {
        self.clients
            .iter()
            .flat_map(Client::actions)
            .filter(|action| !action.is_active())
            .try_fold(Decimal::ZERO, |total, action| {
                total
                    .checked_add(action.value())
                    .ok_or(QueryError::Overflow("closed actions"))
            })
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Manager: name={}, email={}, phone={}, clients={}",
            self.name,
            self.email,
            self.phone,
            self.clients.len()
        )
    }
}
