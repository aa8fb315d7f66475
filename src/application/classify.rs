//! Headline event classification.
//!
//! Rules are evaluated in declaration order and the first match wins.
//! Specific, high-conviction archetypes come first; the macro catch-all
//! is always last.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::domain::EventLabel;

const AGENCIES: &str = r"FITCH|MOODY'S|MOODYS|S&P";
// No exchange suffixes (`US`, `LN`): in alert rows they follow tickers.
const COUNTRIES: &str = r"SPAIN|ITALY|FRANCE|GERMANY|GREECE|PORTUGAL|IRELAND|BELGIUM|JAPAN|CHINA|KOREA|INDIA|BRAZIL|MEXICO|TURKEY|ISRAEL|POLAND|BRITAIN|UNITED KINGDOM|UNITED STATES";

/// One ordered classification rule.
pub struct Rule {
    label: &'static str,
    pattern: Regex,
}

impl Rule {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

fn sovereign_rating(action: &str, agency_verb: &str) -> String {
    format!(
        r"\b({COUNTRIES})\b.*\b({action})\b.*\b({AGENCIES})|\b({AGENCIES})\b.*\b({agency_verb})\b.*\b({COUNTRIES})\b"
    )
}

lazy_static! {
    static ref STANDARD_RULES: Vec<Rule> = vec![
        Rule::new(
            EventLabel::COUNTRY_RATINGS_UP,
            &sovereign_rating("UPGRADED|RAISED TO|UPGRADE", "UPGRADES|RAISES"),
        ),
        Rule::new(
            EventLabel::COUNTRY_RATINGS_DOWN,
            &sovereign_rating("DOWNGRADED|CUT TO|DOWNGRADE", "DOWNGRADES|CUTS"),
        ),
        Rule::new(
            EventLabel::MA_CONFIRMED,
            r"\b(AGREES TO BE ACQUIRED|AGREED TO ACQUIRE|AGREES TO ACQUIRE|GOING PRIVATE|BUYOUT|TAKEOVER|ACQUIRED BY)\b",
        ),
        Rule::new(
            EventLabel::MA_RUMOR,
            r"\b(NEAR DEAL|NEARS DEAL|IN TALKS|WEIGHING SALE|EXPLORING SALE|REPORTEDLY IN TALKS)\b",
        ),
        Rule::new(
            EventLabel::GUIDE_CUT,
            r"\b(CUTS|LOWERS|SLASHES|REDUCES)\b.*\b(GUIDANCE|OUTLOOK|FORECAST)\b|\b(PROFIT WARNING|WARNS ON)\b",
        ),
        Rule::new(
            EventLabel::DOWNGRADE,
            r"\b(DOWNGRADED|DOWNGRADES|DOWNGRADE|CUT TO (SELL|UNDERWEIGHT|UNDERPERFORM|NEUTRAL))\b",
        ),
        Rule::new(
            EventLabel::REGULATORY_PROBE,
            r"\b(PROBE|INVESTIGATION|SUBPOENA|ANTITRUST|SEC CHARGES|DOJ SUES|FTC SUES|RAIDED)\b",
        ),
        Rule::new(
            EventLabel::HALT_NEGATIVE,
            r"\b(HALTED|TRADING HALT|SUSPENDS TRADING|DELISTED|DELISTING|BANKRUPTCY|CHAPTER 11)\b",
        ),
        Rule::new(
            EventLabel::SUPPLY_SHOCK_NEG,
            r"\b(RECALL|RECALLS|PLANT FIRE|FACTORY FIRE|OUTAGE|PRODUCTION HALT|SUPPLY DISRUPTION)\b",
        ),
        Rule::new(
            EventLabel::SUPPLIER_POP_KOREA_SEMI,
            r"\b(SAMSUNG|SK HYNIX|HYNIX|KOREA)\b.*\b(HBM|CHIP|CHIPS|MEMORY|SEMICONDUCTOR|SEMICONDUCTORS|FOUNDRY)\b",
        ),
        Rule::new(
            EventLabel::BIGTECH_PIVOT,
            r"\b(APPLE|GOOGLE|ALPHABET|MICROSOFT|AMAZON|META|NVIDIA)\b.*\b(ABANDONS|SCRAPS|SHELVES|CANCELS|EXITS|PULLS OUT|DROPS PLAN)\b",
        ),
        Rule::new(
            EventLabel::POP_POSITIVE,
            r"\b(BEATS|RAISES (GUIDANCE|OUTLOOK|FORECAST)|RECORD (REVENUE|PROFIT)|FDA APPROVAL|APPROVED BY FDA|WINS CONTRACT|UPGRADED TO BUY)\b",
        ),
        Rule::new(
            EventLabel::MACRO_AMBIGUOUS,
            r"\b(SUPREME COURT|FED|CPI|OPEC|UN SECURITY COUNCIL)\b",
        ),
    ];
}

/// Ordered rule list over upper-cased headline text.
#[derive(Clone, Copy)]
pub struct Classifier {
    rules: &'static [Rule],
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            rules: &STANDARD_RULES,
        }
    }
}

impl Classifier {
    /// First matching label, or `None` when no rule fires.
    ///
    /// Callers treat `None` as [`EventLabel::ambiguous`].
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<EventLabel> {
        let text = text.to_uppercase();
        let label = self
            .rules
            .iter()
            .find(|rule| rule.matches(&text))
            .map(|rule| EventLabel::new(rule.label()));
        debug!(label = ?label.as_ref().map(EventLabel::as_str), "Headline classified");
        label
    }

    /// Labels in evaluation order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::label)
    }
}

/// Classify with the standard rule set.
#[must_use]
pub fn classify(text: &str) -> Option<EventLabel> {
    Classifier::default().classify(text)
}
