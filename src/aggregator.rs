// 📊 Aggregation Engine - the three ledger queries
//
// 1. top_client                → highest outstanding active-credit balance
// 2. top_managers              → top N by value of closed actions
// 3. avg_sum_of_active_deposit → mean value of active deposits
//
// All queries are read-only passes over a built Ledger. Empty inputs are
// reported as QueryError instead of defaulting to an arbitrary value.

use crate::builder::Ledger;
use crate::entities::{Client, Manager};
use crate::error::QueryError;
use rust_decimal::Decimal;

/// Default number of managers returned by top_managers
pub const DEFAULT_TOP_MANAGERS: usize = 3;

// ============================================================================
// QUERY RESULTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedClient<'a> {
    pub client: &'a Client,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedManager<'a> {
    pub manager: &'a Manager,
    pub closed_total: Decimal,
}

// ============================================================================
// AGGREGATION ENGINE
// ============================================================================

pub struct AggregationEngine {
    /// How many managers top_managers returns (default: 3)
    pub top_managers_limit: usize,
}

impl AggregationEngine {
    pub fn new() -> Self {
        AggregationEngine {
            top_managers_limit: DEFAULT_TOP_MANAGERS,
        }
    }

    pub fn with_limit(top_managers_limit: usize) -> Self {
        AggregationEngine { top_managers_limit }
    }

    /// Client with the highest balance_sum_of_active_credit
    ///
    /// Ties go to the client seen first in build order. Negative balances can
    /// win when every client is overpaid.
    pub fn top_client<'a>(&self, ledger: &'a Ledger) -> Result<RankedClient<'a>, QueryError> {
        let mut best: Option<RankedClient<'a>> = None;

        for client in ledger.clients() {
            let balance = client.balance_sum_of_active_credit()?;

            // Strictly greater keeps the earliest client on ties
            let improves = best.map_or(true, |current| balance > current.balance);
            if improves {
                best = Some(RankedClient { client, balance });
            }
        }

        best.ok_or(QueryError::EmptyModel)
    }

    /// Managers ordered by descending sum_of_closed_credits, at most `limit`
    ///
    /// The sort is stable, so equal totals keep document order. Fewer managers
    /// than the limit simply returns all of them.
    pub fn top_managers<'a>(&self, ledger: &'a Ledger) -> Result<Vec<RankedManager<'a>>, QueryError> {
        let mut ranked = ledger
            .managers()
            .iter()
            .map(|manager| {
                Ok(RankedManager {
                    manager,
                    closed_total: manager.sum_of_closed_credits()?,
                })
            })
            .collect::<Result<Vec<_>, QueryError>>()?;

        ranked.sort_by(|a, b| b.closed_total.cmp(&a.closed_total));
        ranked.truncate(self.top_managers_limit);
        Ok(ranked)
    }

    /// Arithmetic mean of active deposit values
    pub fn avg_sum_of_active_deposit(&self, ledger: &Ledger) -> Result<Decimal, QueryError> {
        let (total, count) = ledger
            .actions()
            .filter(|action| !action.is_credit() && action.is_active())
            .try_fold((Decimal::ZERO, 0u64), |(total, count), action| {
                total
                    .checked_add(action.value())
                    .map(|total| (total, count + 1))
                    .ok_or(QueryError::Overflow("active deposits"))
            })?;

        if count == 0 {
            return Err(QueryError::DivideByZero);
        }

        total
            .checked_div(Decimal::from(count))
            .ok_or(QueryError::Overflow("active deposits"))
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ActionKind, ActionStatus, BankAction, Pay};
    use rust_decimal_macros::dec;

    fn credit(status: ActionStatus, value: Decimal, pays: &[Decimal]) -> BankAction {
        let pays = pays.iter().map(|v| Pay::new(*v, "2020-01-01")).collect();
        BankAction::new(ActionKind::Credit, status, value, pays)
    }

    fn deposit(status: ActionStatus, value: Decimal) -> BankAction {
        BankAction::new(ActionKind::Deposit, status, value, vec![])
    }

    fn manager(name: &str, clients: Vec<Client>) -> Manager {
        Manager::new(name, format!("{}@bank.test", name), "000", clients)
    }

    /// M1 → C1 (active credit 100 paid 30, closed deposit 50), C2 (active deposit 40)
    fn scenario_ledger() -> Ledger {
        Ledger::new(vec![manager(
            "M1",
            vec![
                Client::new(
                    "C1",
                    "Bob",
                    vec![
                        credit(ActionStatus::Active, dec!(100), &[dec!(30)]),
                        deposit(ActionStatus::Closed, dec!(50)),
                    ],
                ),
                Client::new("C2", "Eve", vec![deposit(ActionStatus::Active, dec!(40))]),
            ],
        )])
    }

    #[test]
    fn test_scenario() {
        let ledger = scenario_ledger();
        let engine = AggregationEngine::new();

        let top = engine.top_client(&ledger).unwrap();
        assert_eq!(top.client.id(), "C1");
        assert_eq!(top.balance, dec!(70));

        let managers = engine.top_managers(&ledger).unwrap();
        assert_eq!(managers.len(), 1);
        assert_eq!(managers[0].manager.name(), "M1");
        assert_eq!(managers[0].closed_total, dec!(50));

        assert_eq!(engine.avg_sum_of_active_deposit(&ledger).unwrap(), dec!(40));
    }

    #[test]
    fn test_top_client_single_negative_client() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![Client::new(
                "C1",
                "Bob",
                vec![credit(ActionStatus::Active, dec!(10), &[dec!(25)])],
            )],
        )]);

        let top = AggregationEngine::new().top_client(&ledger).unwrap();
        assert_eq!(top.client.id(), "C1");
        assert_eq!(top.balance, dec!(-15));
    }

    #[test]
    fn test_top_client_across_managers() {
        let ledger = Ledger::new(vec![
            manager(
                "M1",
                vec![Client::new("C1", "Bob", vec![credit(ActionStatus::Active, dec!(10), &[])])],
            ),
            manager("M2", vec![]),
            manager(
                "M3",
                vec![Client::new("C3", "Ann", vec![credit(ActionStatus::Active, dec!(80), &[])])],
            ),
        ]);

        let top = AggregationEngine::new().top_client(&ledger).unwrap();
        assert_eq!(top.client.id(), "C3");
        assert_eq!(top.balance, dec!(80));
    }

    #[test]
    fn test_top_client_tie_keeps_first() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![
                Client::new("first", "A", vec![credit(ActionStatus::Active, dec!(60), &[dec!(10)])]),
                Client::new("second", "B", vec![credit(ActionStatus::Active, dec!(50), &[])]),
            ],
        )]);

        let top = AggregationEngine::new().top_client(&ledger).unwrap();
        assert_eq!(top.client.id(), "first");
    }

    #[test]
    fn test_top_client_empty_model() {
        let engine = AggregationEngine::new();

        assert_eq!(
            engine.top_client(&Ledger::default()).unwrap_err(),
            QueryError::EmptyModel
        );

        // Managers without clients are still empty
        let ledger = Ledger::new(vec![manager("M1", vec![]), manager("M2", vec![])]);
        assert_eq!(engine.top_client(&ledger).unwrap_err(), QueryError::EmptyModel);
    }

    #[test]
    fn test_top_managers_fewer_than_limit() {
        let ledger = Ledger::new(vec![
            manager(
                "Low",
                vec![Client::new("C1", "A", vec![credit(ActionStatus::Closed, dec!(10), &[])])],
            ),
            manager(
                "High",
                vec![Client::new("C2", "B", vec![deposit(ActionStatus::Closed, dec!(300))])],
            ),
        ]);

        let top = AggregationEngine::new().top_managers(&ledger).unwrap();
        let names: Vec<&str> = top.iter().map(|r| r.manager.name()).collect();

        assert_eq!(names, vec!["High", "Low"]);
        assert_eq!(top[0].closed_total, dec!(300));
        assert_eq!(top[1].closed_total, dec!(10));
    }

    #[test]
    fn test_top_managers_limit_and_stable_ties() {
        let closed = |value| {
            vec![Client::new("C", "X", vec![credit(ActionStatus::Closed, value, &[])])]
        };
        let ledger = Ledger::new(vec![
            manager("A", closed(dec!(5))),
            manager("B", closed(dec!(20))),
            manager("C", closed(dec!(5))),
            manager("D", closed(dec!(20))),
            manager("E", closed(dec!(1))),
        ]);

        let top = AggregationEngine::new().top_managers(&ledger).unwrap();
        let names: Vec<&str> = top.iter().map(|r| r.manager.name()).collect();
        assert_eq!(names, vec!["B", "D", "A"]);

        let top = AggregationEngine::with_limit(10).top_managers(&ledger).unwrap();
        let names: Vec<&str> = top.iter().map(|r| r.manager.name()).collect();
        assert_eq!(names, vec!["B", "D", "A", "C", "E"]);
    }

    #[test]
    fn test_top_managers_empty() {
        assert!(AggregationEngine::new()
            .top_managers(&Ledger::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_avg_active_deposit() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![Client::new(
                "C1",
                "Bob",
                vec![
                    deposit(ActionStatus::Active, dec!(10)),
                    deposit(ActionStatus::Active, dec!(25)),
                    deposit(ActionStatus::Closed, dec!(1000)),
                    credit(ActionStatus::Active, dec!(1000), &[]),
                ],
            )],
        )]);

        let avg = AggregationEngine::new().avg_sum_of_active_deposit(&ledger).unwrap();
        assert_eq!(avg, dec!(17.5));
    }

    #[test]
    fn test_avg_without_active_deposits() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![Client::new(
                "C1",
                "Bob",
                vec![
                    deposit(ActionStatus::Closed, dec!(10)),
                    credit(ActionStatus::Active, dec!(20), &[]),
                ],
            )],
        )]);

        let engine = AggregationEngine::new();
        assert_eq!(
            engine.avg_sum_of_active_deposit(&ledger).unwrap_err(),
            QueryError::DivideByZero
        );
        assert_eq!(
            engine.avg_sum_of_active_deposit(&Ledger::default()).unwrap_err(),
            QueryError::DivideByZero
        );
    }

    #[test]
    fn test_top_client_overflow() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![
                Client::new("C1", "Bob", vec![credit(ActionStatus::Active, dec!(5), &[])]),
                Client::new(
                    "C2",
                    "Eve",
                    vec![
                        credit(ActionStatus::Active, Decimal::MAX, &[]),
                        credit(ActionStatus::Active, Decimal::MAX, &[]),
                    ],
                ),
            ],
        )]);

        assert_eq!(
            AggregationEngine::new().top_client(&ledger).unwrap_err(),
            QueryError::Overflow("active credits")
        );
    }

    #[test]
    fn test_top_managers_overflow() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![Client::new(
                "C1",
                "Bob",
                vec![
                    deposit(ActionStatus::Closed, Decimal::MAX),
                    deposit(ActionStatus::Closed, Decimal::MAX),
                ],
            )],
        )]);

        assert_eq!(
            AggregationEngine::new().top_managers(&ledger).unwrap_err(),
            QueryError::Overflow("closed actions")
        );
    }

    #[test]
    fn test_avg_overflow() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![
                Client::new("C1", "Bob", vec![deposit(ActionStatus::Active, Decimal::MAX)]),
                Client::new("C2", "Eve", vec![deposit(ActionStatus::Active, Decimal::MAX)]),
            ],
        )]);

        assert_eq!(
            AggregationEngine::new()
                .avg_sum_of_active_deposit(&ledger)
                .unwrap_err(),
            QueryError::Overflow("active deposits")
        );
    }

    #[test]
    fn test_avg_of_max_value() {
        let ledger = Ledger::new(vec![manager(
            "M1",
            vec![Client::new("C1", "Bob", vec![deposit(ActionStatus::Active, Decimal::MAX)])],
        )]);

        assert_eq!(
            AggregationEngine::new().avg_sum_of_active_deposit(&ledger).unwrap(),
            Decimal::MAX
        );
    }
}
