//! Psicat Core Library
//!
//! Entry store, facet filters, list index, sublist, renderer and router for
//! the psicat psionics catalog. A [`session::Session`] owns all of it.

pub mod config;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod exclude;
pub mod filter;
pub mod format;
pub mod list;
pub mod logging;
pub mod records;
pub mod render;
pub mod router;
pub mod session;
pub mod store;
pub mod sublist;

#[cfg(test)]
pub(crate) mod testing;
