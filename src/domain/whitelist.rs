//! Symbols eligible for direct trading.

use std::collections::BTreeSet;

use super::id::Symbol;

/// Gate applied to listed (equity and ETF) candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Whitelist {
    /// Every symbol is eligible.
    #[default]
    All,
    /// Only the listed symbols are eligible; an empty set admits nothing.
    Only(BTreeSet<Symbol>),
}

impl Whitelist {
    /// Parse a comma-separated list such as `"EWP, EA,SPY"`.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::from_symbols(list.split(','))
    }

    /// Build a restricted whitelist from symbols; blanks are skipped.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Only(
            symbols
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty())
                .map(Symbol::new)
                .collect(),
        )
    }

    #[must_use]
    pub fn allows(&self, symbol: &Symbol) -> bool {
        match self {
            Self::All => true,
            Self::Only(symbols) => symbols.contains(symbol),
        }
    }

    /// True only when `symbol` is named in a restricted list.
    #[must_use]
    pub fn lists(&self, symbol: &Symbol) -> bool {
        matches!(self, Self::Only(symbols) if symbols.contains(symbol))
    }

    /// Number of listed symbols, `None` when unrestricted.
    #[must_use]
    pub fn restricted_count(&self) -> Option<usize> {
        match self {
            Self::All => None,
            Self::Only(symbols) => Some(symbols.len()),
        }
    }
}
