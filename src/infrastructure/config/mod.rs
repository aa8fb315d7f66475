//! Infrastructure configuration modules.

pub mod catalogs;
pub mod guard;
pub mod logging;
pub mod session;
pub mod settings;
pub mod universe;
