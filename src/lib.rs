//! Headline reactor - turns one news headline into ranked trade-candidate lines.
//!
//! A headline goes through entity extraction, event classification, security
//! resolution, the proxy waterfall, liquidity gating, the options overlay and
//! macro routing, and comes out as at most three deduplicated, score-ordered
//! lines such as `NVDA BUY $1500 IOC TTL=10m (NEWS: ma_rumor)`.
//!
//! # Architecture
//!
//! - **`domain`** - Value types and invariants, no I/O
//! - **`port`** - Catalog, price and calendar traits
//! - **`application`** - The synchronous pipeline and the stateful reactor
//! - **`adapter`** - CLI (inbound) plus in-memory catalogs, JSON snapshots
//!   and the exchange calendar (outbound)
//! - **`infrastructure`** - Configuration and runtime wiring
//!
//! # Example
//!
//! ```no_run
//! use headline_reactor::application::catalog::CatalogSet;
//! use headline_reactor::application::pipeline::{Pipeline, ResolutionRequest};
//!
//! let pipeline = Pipeline::default();
//! let resolution = pipeline.run(
//!     &ResolutionRequest::new("GOLD SURGES TO RECORD HIGH"),
//!     &CatalogSet::empty(),
//! );
//! for plan in &resolution.plans {
//!     println!("{}", plan.line);
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
