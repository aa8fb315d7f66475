//! Outbound adapters (driven side).

pub mod calendar;
pub mod catalog;
