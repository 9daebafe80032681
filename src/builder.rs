// 🏗️ Model Builder - Node tree → typed ledger graph
//
// Nesting is positional, four levels under the root:
//
//   root → manager → client → action (credit | anything else = deposit) → pay
//
// Tags of managers, clients and pays are not checked. Only the action tag
// carries meaning. Document order is preserved at every level.
//
// The first missing or malformed attribute aborts the whole build: callers
// get either a complete Ledger or a ParseError, never a partial model.

use crate::entities::{ActionKind, ActionStatus, BankAction, Client, Manager, Pay};
use crate::error::ParseError;
use crate::tree::Node;
use serde::Serialize;
use tracing::{debug, info};

// ============================================================================
// LEDGER
// ============================================================================

/// The complete graph built from one document
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Ledger {
    managers: Vec<Manager>,
}

impl Ledger {
    pub fn new(managers: Vec<Manager>) -> Self {
        Ledger { managers }
    }

    pub fn managers(&self) -> &[Manager] {
        &self.managers
    }

    /// Every client, in build order
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.managers.iter().flat_map(Manager::clients)
    }

    /// Every action, in build order
    pub fn actions(&self) -> impl Iterator<Item = &BankAction> {
        self.clients().flat_map(Client::actions)
    }

    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }

    pub fn client_count(&self) -> usize {
        self.clients().count()
    }

    pub fn action_count(&self) -> usize {
        self.actions().count()
    }
}

// ============================================================================
// BUILD
// ============================================================================

/// Build the ledger graph from a document root
pub fn build(root: &Node) -> Result<Ledger, ParseError> {
    let managers = root
        .children
        .iter()
        .map(build_manager)
        .collect::<Result<Vec<_>, _>>()?;

    let ledger = Ledger::new(managers);

    info!(
        managers = ledger.manager_count(),
        clients = ledger.client_count(),
        actions = ledger.action_count(),
        "ledger built"
    );

    Ok(ledger)
}

fn build_manager(node: &Node) -> Result<Manager, ParseError> {
    let clients = node
        .children
        .iter()
        .map(build_client)
        .collect::<Result<Vec<_>, _>>()?;

    let manager = Manager::new(
        node.attr("name")?,
        node.attr("email")?,
        node.attr("phone")?,
        clients,
    );

    debug!(manager = manager.name(), clients = manager.clients().len(), "built manager");

    Ok(manager)
}

fn build_client(node: &Node) -> Result<Client, ParseError> {
    let actions = node
        .children
        .iter()
        .map(build_action)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Client::new(node.attr("id")?, node.attr("name")?, actions))
}

fn build_action(node: &Node) -> Result<BankAction, ParseError> {
    let pays = node
        .children
        .iter()
        .map(build_pay)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BankAction::new(
        ActionKind::from_tag(&node.tag),
        ActionStatus::from_status(node.attr("status")?),
        node.decimal_attr("value")?,
        pays,
    ))
}

fn build_pay(node: &Node) -> Result<Pay, ParseError> {
    Ok(Pay::new(node.decimal_attr("value")?, node.attr("date")?))
}

// ============================================================================
// TESTS
// ============================================================================
