// 🌳 Document Tree - the typed intermediate representation
//
// The model builder never touches a concrete document API. Every input format
// (XML today, JSON for fixtures) is first lowered into this small node type:
//
//   Node { tag, attributes, children }
//
// Attribute access goes through validated accessors that return either the
// typed value or a ParseError naming the offending node and attribute.

use crate::error::ParseError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

// ============================================================================
// NODE
// ============================================================================

/// One element of the source document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    pub tag: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Node {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder pattern: set an attribute
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder pattern: append a child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Required string attribute
    pub fn attr(&self, name: &str) -> Result<&str, ParseError> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ParseError::MissingAttribute {
                tag: self.tag.clone(),
                attribute: name.to_string(),
            })
    }

    /// Required decimal attribute
    pub fn decimal_attr(&self, name: &str) -> Result<Decimal, ParseError> {
        let raw = self.attr(name)?;

        parse_decimal(raw).ok_or_else(|| ParseError::InvalidDecimal {
            tag: self.tag.clone(),
            attribute: name.to_string(),
            value: raw.to_string(),
        })
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

/// Parse a decimal the way the input files write them
///
/// Accepts "100", " 12.50 ", "-3", "+7" and scientific "1.5e3". Digits past
/// the 28th fractional place are rounded away in both notations, so "1e-30"
/// and its plain-digit spelling give the same value.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => parse_scientific(mantissa, exponent),
        None => Decimal::from_str(trimmed).ok(),
    }
}

fn parse_scientific(mantissa: &str, exponent: &str) -> Option<Decimal> {
    let mut value = Decimal::from_str(mantissa).ok()?;
    let exponent: i32 = exponent.parse().ok()?;

    // Zero stops the loop early on huge exponents; overflow ends it on growth
    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
    }

    Some(value)
}

// ============================================================================
// TESTS
// ============================================================================
