//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to turn one headline into a bounded, ranked list of trade plans.
//!
//! Leaf stages ([`extract`], [`classify`], [`resolve`], [`proxy`],
//! [`macro_router`], [`options`], [`liquidity`], [`ranker`]) are pure
//! functions over a [`catalog::CatalogSet`] snapshot. [`pipeline`] wires
//! them together; [`reactor`] adds the circuit breaker and session gate.

pub mod banding;
pub mod catalog;
pub mod circuit;
pub mod classify;
pub mod extract;
pub mod keywords;
pub mod liquidity;
pub mod macro_router;
pub mod options;
pub mod pipeline;
pub mod proxy;
pub mod ranker;
pub mod reactor;
pub mod render;
pub mod resolve;
pub mod session;
