//! Headline-agnostic domain types.
//!
//! Everything here is plain data plus invariants: identifiers, extracted
//! entities, catalog rows, candidates and their confidence scores, and the
//! final trade plans. No module in `domain` performs I/O.

pub mod candidate;
pub mod entity;
pub mod error;
pub mod etf;
pub mod id;
pub mod label;
pub mod liquidity;
pub mod mode;
pub mod plan;
pub mod security;
pub mod session;
pub mod whitelist;

pub use candidate::{AssetClass, Candidate, Confidence, ProxyCandidate, Side};
pub use entity::{EntityKind, RawEntity};
pub use error::DomainError;
pub use etf::{EtfKind, EtfRow};
pub use id::{CompositeId, Symbol};
pub use label::EventLabel;
pub use liquidity::{LiquidityGuardConfig, LiquidityStats};
pub use mode::OperatingMode;
pub use plan::TradePlan;
pub use security::{is_us_venue, SecurityFlags, SecurityRecord, US_PRIMARY_VENUES};
pub use session::{SessionPolicy, SessionState, SessionWindow};
pub use whitelist::Whitelist;
