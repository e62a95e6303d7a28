//! Command implementations for psicat

pub mod book;
pub mod dispatch;
pub mod facets;
pub mod format;
pub mod link;
pub mod list;
pub mod pins;
pub mod random;
pub mod show;
pub mod view;
