//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to plug external data into the
//! resolution core.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │                         │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              │                         │              │
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Catalog │            │    Price    │              │ Calendar  │
//! │ Adapter │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`SecurityMaster`], [`EtfCatalog`], [`LiquidityCatalog`] - Reference data
//! - [`PriceSource`] - Last traded prices for the options overlay
//! - [`TradingCalendar`] - Session bounds for the market session gate

pub mod outbound;

pub use outbound::calendar::TradingCalendar;
pub use outbound::catalog::{EtfCatalog, LiquidityCatalog, SecurityMaster};
pub use outbound::price::PriceSource;
