//! Projection module
//!
//! Read models for cliente queries: KPIs, list views with derived fields,
//! lookups and searches.

mod service;

pub use service::{ClienteView, ProjectionService};
