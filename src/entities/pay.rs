// 💸 Pay - one repayment applied against a credit

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pay {
    value: Decimal,

    /// Kept verbatim from the source, never parsed
    date: String,
}

impl Pay {
    pub fn new(value: Decimal, date: impl Into<String>) -> Self {
        Pay {
            value,
            date: date.into(),
        }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for Pay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pay value={}, date={}", self.value, self.date)
    }
}
