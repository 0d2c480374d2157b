//! External inputs for Warehouse Compare.
//!
//! - [`intake`] - JSON intake files replayed through the record store
//!
//! Adapters translate outside formats into store operations; the core never
//! reads files itself.

pub mod intake;
