//! Keyword families shared by the entity extractor and the macro router.
//!
//! A family is a set of words that all point at the same underlying
//! exposure (e.g. `OIL`, `WTI`, `CRUDE`). Matching is whole-word so that
//! `ETH` never fires inside `METHOD` and `EUR` never fires inside `EUROPE`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::EntityKind;

/// Stable identifiers for the supported families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Bitcoin,
    Ether,
    Oil,
    Gold,
    Dollar,
    Yen,
    Euro,
}

impl Family {
    /// Raw span of the synthetic entity emitted for this family.
    #[must_use]
    pub const fn entity_name(self) -> &'static str {
        match self {
            Self::Bitcoin => "BTCUSD",
            Self::Ether => "ETHUSD",
            Self::Oil => "OIL",
            Self::Gold => "GOLD",
            Self::Dollar => "DOLLAR",
            Self::Yen => "YEN",
            Self::Euro => "EURO",
        }
    }

    #[must_use]
    pub const fn kind(self) -> EntityKind {
        match self {
            Self::Bitcoin | Self::Ether => EntityKind::Crypto,
            _ => EntityKind::Macro,
        }
    }
}

/// One family and its whole-word pattern.
pub struct KeywordFamily {
    pub family: Family,
    pub words: &'static [&'static str],
    pattern: Regex,
}

impl KeywordFamily {
    fn new(family: Family, words: &'static [&'static str]) -> Self {
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{alternation})\b"))
            .unwrap_or_else(|e| panic!("invalid keyword pattern for {family:?}: {e}"));
        Self {
            family,
            words,
            pattern,
        }
    }

    /// Byte offset of the first whole-word hit in upper-cased `text`.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<usize> {
        self.pattern.find(text).map(|m| m.start())
    }
}

lazy_static! {
    /// Families in emission order: crypto first, then macro.
    pub static ref FAMILIES: Vec<KeywordFamily> = vec![
        KeywordFamily::new(Family::Bitcoin, &["BITCOIN", "BTC"]),
        KeywordFamily::new(Family::Ether, &["ETHEREUM", "ETHER", "ETH"]),
        KeywordFamily::new(Family::Oil, &["OIL", "WTI", "OPEC", "CRUDE", "BRENT"]),
        KeywordFamily::new(Family::Gold, &["GOLD", "BULLION"]),
        KeywordFamily::new(Family::Dollar, &["DOLLAR", "USD INDEX", "DXY"]),
        KeywordFamily::new(Family::Yen, &["YEN", "JPY"]),
        KeywordFamily::new(Family::Euro, &["EURO", "EUR"]),
    ];
}

/// Families present in upper-cased `text`, with the offset of their first hit.
#[must_use]
pub fn matching_families(text: &str) -> Vec<(Family, usize)> {
    FAMILIES
        .iter()
        .filter_map(|kf| kf.find(text).map(|offset| (kf.family, offset)))
        .collect()
}

/// True when `word` is one of the single-word family keywords.
#[must_use]
pub fn is_family_word(word: &str) -> bool {
    FAMILIES.iter().any(|kf| kf.words.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_matching_only() {
        assert!(matching_families("NEW METHOD FOR EUROPEAN TRADE").is_empty());
    }

    #[test]
    fn finds_families_with_offsets() {
        let hits = matching_families("GOLD RALLIES AS YEN SLIDES");
        assert_eq!(hits, vec![(Family::Gold, 0), (Family::Yen, 16)]);
    }

    #[test]
    fn multi_word_keyword_matches() {
        let hits = matching_families("USD INDEX JUMPS");
        assert_eq!(hits, vec![(Family::Dollar, 0)]);
    }

    #[test]
    fn family_words_cover_crypto_and_macro() {
        assert!(is_family_word("BTC"));
        assert!(is_family_word("CRUDE"));
        assert!(!is_family_word("NVDA"));
    }
}
