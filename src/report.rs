// 🧾 Ledger Report - all three query answers in one value
//
// Produced by running every AggregationEngine query over a Ledger. Rendered
// either as the plain three-block text the CLI prints, or as JSON.

use crate::aggregator::AggregationEngine;
use crate::builder::Ledger;
use crate::error::QueryError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerSummary {
    pub name: String,
    pub email: String,
    pub closed_total: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerReport {
    pub top_client: ClientSummary,
    pub top_managers: Vec<ManagerSummary>,
    pub avg_active_deposit: Decimal,
    pub manager_count: usize,
    pub client_count: usize,
    pub action_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl LedgerReport {
    /// Run every query; the first failing one aborts the report
    pub fn generate(engine: &AggregationEngine, ledger: &Ledger) -> Result<Self, QueryError> {
        let top = engine.top_client(ledger)?;
        let avg_active_deposit = engine.avg_sum_of_active_deposit(ledger)?;

        let top_managers = engine
            .top_managers(ledger)?
            .into_iter()
            .map(|ranked| ManagerSummary {
                name: ranked.manager.name().to_string(),
                email: ranked.manager.email().to_string(),
                closed_total: ranked.closed_total,
            })
            .collect();

        Ok(LedgerReport {
            top_client: ClientSummary {
                id: top.client.id().to_string(),
                name: top.client.name().to_string(),
                balance: top.balance,
            },
            top_managers,
            avg_active_deposit,
            manager_count: ledger.manager_count(),
            client_count: ledger.client_count(),
            action_count: ledger.action_count(),
            generated_at: Utc::now(),
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Ledger: {} managers, {} clients, {} actions; top client {} ({}), avg active deposit {}",
            self.manager_count,
            self.client_count,
            self.action_count,
            self.top_client.name,
            self.top_client.balance,
            self.avg_active_deposit
        )
    }

    /// Three-block text output
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for LedgerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#1:")?;
        writeln!(
            f,
            " top client = {} ({})",
            self.top_client.name, self.top_client.balance
        )?;

        writeln!(f, "#2:")?;
        for manager in &self.top_managers {
            writeln!(f, " {} = {}", manager.name, manager.closed_total)?;
        }

        writeln!(f, "#3:")?;
        writeln!(
            f,
            " avg sum of all active deposits = {}",
            self.avg_active_deposit
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
