//! Entities found in headline text.

use std::fmt;

use super::id::Symbol;

/// What kind of real-world referent an entity points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A listed security (ticker, local code, ISIN, alternate id).
    Equity,
    /// A crypto spot pair such as `BTCUSD`.
    Crypto,
    /// A commodity or currency keyword family.
    Macro,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Equity => "EQUITY",
            Self::Crypto => "CRYPTO",
            Self::Macro => "MACRO",
        };
        f.write_str(s)
    }
}

/// A candidate referent extracted from one line of text.
///
/// Entities are immutable once built. `raw` is the deduplication key and
/// `offset` records where the span first occurred in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntity {
    raw: String,
    kind: EntityKind,
    symbol: Option<Symbol>,
    exchange: Option<String>,
    isin: Option<String>,
    alt_id: Option<String>,
    offset: usize,
}

impl RawEntity {
    /// An ISIN-shaped code.
    pub fn isin(code: impl Into<String>, offset: usize) -> Self {
        let code = code.into();
        Self {
            raw: code.clone(),
            kind: EntityKind::Equity,
            symbol: None,
            exchange: None,
            isin: Some(code),
            alt_id: None,
            offset,
        }
    }

    /// A `<code> <exchange>` token such as `005930 KS`.
    pub fn listed(
        raw: impl Into<String>,
        symbol: impl Into<Symbol>,
        exchange: impl Into<String>,
        offset: usize,
    ) -> Self {
        Self {
            raw: raw.into(),
            kind: EntityKind::Equity,
            symbol: Some(symbol.into()),
            exchange: Some(exchange.into()),
            isin: None,
            alt_id: None,
            offset,
        }
    }

    /// A `<symbol>.<suffix>` alternate id such as `NVDA.O`.
    pub fn alternate(raw: impl Into<String>, symbol: impl Into<Symbol>, offset: usize) -> Self {
        let raw = raw.into();
        Self {
            alt_id: Some(raw.clone()),
            raw,
            kind: EntityKind::Equity,
            symbol: Some(symbol.into()),
            exchange: None,
            isin: None,
            offset,
        }
    }

    /// A bare alphabetic token with no venue information.
    pub fn bare(symbol: impl Into<Symbol>, offset: usize) -> Self {
        let symbol = symbol.into();
        Self {
            raw: symbol.to_string(),
            kind: EntityKind::Equity,
            symbol: Some(symbol),
            exchange: None,
            isin: None,
            alt_id: None,
            offset,
        }
    }

    /// Equity referenced by a configured display name (e.g. `ELECTRONIC ARTS`).
    pub fn alias(name: impl Into<String>, symbol: impl Into<Symbol>, offset: usize) -> Self {
        Self {
            raw: name.into(),
            kind: EntityKind::Equity,
            symbol: Some(symbol.into()),
            exchange: None,
            isin: None,
            alt_id: None,
            offset,
        }
    }

    /// A crypto spot pair cue.
    pub fn crypto(pair: impl Into<String>, offset: usize) -> Self {
        let pair = pair.into();
        Self {
            symbol: Some(Symbol::new(pair.clone())),
            raw: pair,
            kind: EntityKind::Crypto,
            exchange: None,
            isin: None,
            alt_id: None,
            offset,
        }
    }

    /// A commodity or currency keyword family cue.
    pub fn macro_cue(family: impl Into<String>, offset: usize) -> Self {
        Self {
            raw: family.into(),
            kind: EntityKind::Macro,
            symbol: None,
            exchange: None,
            isin: None,
            alt_id: None,
            offset,
        }
    }

    /// The matched span (deduplication key).
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }

    #[must_use]
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Short exchange code (`US`, `KS`, `GY`, ...), if the text carried one.
    #[must_use]
    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    #[must_use]
    pub fn isin_code(&self) -> Option<&str> {
        self.isin.as_deref()
    }

    #[must_use]
    pub fn alt_id(&self) -> Option<&str> {
        self.alt_id.as_deref()
    }

    /// Byte offset of the first occurrence in the source text.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// True for a symbol-carrying equity with no venue or the `US` composite.
    #[must_use]
    pub fn is_us_style(&self) -> bool {
        self.kind == EntityKind::Equity
            && self.symbol.is_some()
            && self.alt_id.is_none()
            && matches!(self.exchange.as_deref(), None | Some("US"))
    }
}

impl fmt::Display for RawEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.raw)
    }
}
