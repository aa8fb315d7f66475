//! Entity extraction from a single headline line.
//!
//! Passes run in a fixed order and each one claims the byte spans it
//! matched, so later, looser passes never re-read a token that an earlier
//! pass already explained (the `NVDA` inside `NVDA US`, the `O` inside
//! `NVDA.O`).

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::keywords::{is_family_word, matching_families, Family};
use crate::domain::{EntityKind, RawEntity, Symbol};

lazy_static! {
    static ref ISIN: Regex = Regex::new(r"\b([A-Z]{2}[A-Z0-9]{9}[0-9])\b").unwrap();
    static ref LISTED: Regex = Regex::new(
        r"\b([A-Z0-9][A-Z0-9.\-]{0,14})\s+(US|LN|FP|GY|SW|IM|AU|HK|KS|KQ|TT|TW|JP|CN|SS|SZ|SM|PA|DE|L|T)\b"
    )
    .unwrap();
    static ref ALTERNATE: Regex = Regex::new(
        r"\b([A-Z0-9]{1,15})\.(O|N|KQ|KS|HK|SS|SZ|L|PA|DE|SW|MI|VX|TO|T|TW)\b"
    )
    .unwrap();
    static ref BARE: Regex = Regex::new(r"\b[A-Z]{1,6}\b").unwrap();

    static ref STOP_WORDS: HashSet<&'static str> = [
        // English
        "A", "AN", "AND", "ARE", "AS", "AT", "BE", "BY", "FOR", "FROM", "HAS", "HAVE",
        "HE", "HIS", "I", "IN", "INTO", "IS", "IT", "ITS", "NO", "NOT", "OF", "ON",
        "OR", "OUT", "OVER", "THE", "THAT", "THIS", "TO", "UP", "WAS", "WILL", "WITH",
        "AFTER", "AMID", "UNDER", "WHILE", "ABOUT", "MORE", "LESS", "NEW", "SAYS",
        "SAID", "SEES", "SET", "ALL", "BUT", "CAN", "MAY", "WE", "OUR",
        // fragments of S&P, U.S., MOODY'S
        "S", "P", "U", "US", "UK", "EU",
        // corporate suffixes
        "CO", "INC", "CORP", "LTD", "PLC", "AG", "SA", "NV", "GROUP",
        // market jargon
        "NEWS", "HOT", "HEADLINES", "SHARES", "STOCK", "STOCKS", "JUMP", "JUMPS",
        "SURGE", "SURGES", "FALL", "FALLS", "DROP", "DROPS", "RISE", "RISES", "SINK",
        "SINKS", "SOAR", "SOARS", "DEAL", "SUPPLY", "CUT", "CUTS", "RAISE", "RAISES",
        "IPO", "ETF", "SEC", "FED", "ECB", "BOJ", "CPI", "GDP", "FOMC", "CEO", "CFO",
        "FY", "Q", "EPS", "BUY", "SELL", "HOLD", "TALKS", "NEAR", "NEARS", "BID",
        "SALE", "MAJOR", "PLAN", "PLANS", "REPORT", "SOURCE", "AGREES", "AGREED",
        "WEIGHS", "BUYOUT", "PRICE", "PRICES", "MARKET", "TRADE", "HALT", "HALTED",
        "PROBE", "RATING", "FITCH", "MOODY", "BLN", "MLN", "BN", "MN", "PCT", "YOY",
        "DATA", "RATE", "RATES", "BANK", "BOND", "BONDS", "YIELD", "SAFE", "HAVEN",
        "RECORD", "HIGH", "LOW", "OPEN", "CLOSE", "TARGET", "CHIEF", "ORDER",
        "ORDERS", "RALLY", "SLIDES", "SLUMP", "GAINS", "LOSS",
        // countries
        "CHINA", "JAPAN", "KOREA", "INDIA", "SPAIN", "ITALY", "FRANCE", "BRAZIL",
        "MEXICO", "RUSSIA", "GREECE", "TAIWAN",
    ]
    .into_iter()
    .collect();
}

/// A configured display name that stands for a ticker.
struct Alias {
    symbol: Symbol,
    pattern: Regex,
}

/// Entity extractor with optional name aliases.
///
/// Aliases (e.g. `ELECTRONIC ARTS` -> `EA`) are matched whole-word after the
/// coded passes and before bare tokens, so the words of a matched name are
/// never re-read as tickers.
#[derive(Default)]
pub struct EntityExtractor {
    aliases: Vec<Alias>,
}

impl EntityExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add display-name aliases. Names are matched case-insensitively.
    #[must_use]
    pub fn with_aliases<I, N, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: Into<Symbol>,
    {
        for (name, symbol) in aliases {
            let name = name.as_ref().trim().to_uppercase();
            if name.is_empty() {
                continue;
            }
            if let Ok(pattern) = Regex::new(&format!(r"\b{}\b", regex::escape(&name))) {
                self.aliases.push(Alias {
                    symbol: symbol.into(),
                    pattern,
                });
            }
        }
        self
    }

    /// Extract entities from one line of headline text.
    ///
    /// The input is upper-cased before matching. The result is deduplicated
    /// by raw span and ordered by first occurrence; an empty result means
    /// nothing in the text looked tradeable.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<RawEntity> {
        let text = text.to_uppercase();
        let mut claimed = Claims::default();
        let mut found = Vec::new();

        for m in ISIN.find_iter(&text) {
            claimed.claim(m.start(), m.end());
            found.push(RawEntity::isin(m.as_str(), m.start()));
        }

        for caps in LISTED.captures_iter(&text) {
            let (Some(whole), Some(symbol), Some(exchange)) =
                (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if claimed.overlaps(whole.start(), whole.end()) || is_stop_word(symbol.as_str()) {
                continue;
            }
            claimed.claim(whole.start(), whole.end());
            found.push(RawEntity::listed(
                whole.as_str(),
                symbol.as_str(),
                exchange.as_str(),
                whole.start(),
            ));
        }

        for caps in ALTERNATE.captures_iter(&text) {
            let (Some(whole), Some(symbol)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if claimed.overlaps(whole.start(), whole.end()) {
                continue;
            }
            claimed.claim(whole.start(), whole.end());
            found.push(RawEntity::alternate(
                whole.as_str(),
                symbol.as_str(),
                whole.start(),
            ));
        }

        for alias in &self.aliases {
            for m in alias.pattern.find_iter(&text) {
                if claimed.overlaps(m.start(), m.end()) {
                    continue;
                }
                claimed.claim(m.start(), m.end());
                found.push(RawEntity::alias(m.as_str(), alias.symbol.clone(), m.start()));
            }
        }

        for m in BARE.find_iter(&text) {
            if claimed.overlaps(m.start(), m.end()) || is_stop_word(m.as_str()) {
                continue;
            }
            found.push(RawEntity::bare(m.as_str(), m.start()));
        }

        for (family, offset) in matching_families(&text) {
            found.push(family_entity(family, offset));
        }

        dedup_by_first_occurrence(found)
    }
}

/// Extract entities with no aliases configured.
#[must_use]
pub fn extract_entities(text: &str) -> Vec<RawEntity> {
    EntityExtractor::default().extract(text)
}

fn family_entity(family: Family, offset: usize) -> RawEntity {
    match family.kind() {
        EntityKind::Crypto => RawEntity::crypto(family.entity_name(), offset),
        _ => RawEntity::macro_cue(family.entity_name(), offset),
    }
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token) || is_family_word(token)
}

fn dedup_by_first_occurrence(mut entities: Vec<RawEntity>) -> Vec<RawEntity> {
    entities.sort_by_key(RawEntity::offset);
    let mut seen = HashSet::new();
    entities.retain(|e| seen.insert(e.raw().to_string()));
    entities
}

/// Byte ranges already explained by an earlier pass.
#[derive(Default)]
struct Claims(Vec<(usize, usize)>);

impl Claims {
    fn claim(&mut self, start: usize, end: usize) {
        self.0.push((start, end));
    }

    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.0.iter().any(|&(s, e)| start < e && s < end)
    }
}
