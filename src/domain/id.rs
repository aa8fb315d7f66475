//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Instrument symbol - newtype for type safety.
///
/// Symbols are stored upper-cased so lookups against catalogs and the
/// whitelist never depend on the caller's casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Create a new `Symbol`, normalising to upper case.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into().trim().to_ascii_uppercase())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Reference-catalog primary key for one listing.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositeId(String);

impl CompositeId {
    /// Create a new `CompositeId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the key used for rows synthesised without a catalog.
    #[must_use]
    pub fn synthetic(symbol: &Symbol, exchange: &str) -> Self {
        Self(format!("{symbol}:{exchange}"))
    }

    /// Get the composite ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CompositeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CompositeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
