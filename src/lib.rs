//! Static status page generator for feature stabilization tracking.
//!
//! Given ordered tables of feature-status records, statusboard classifies
//! each stabilization release against a release timeline and renders an HTML
//! page of linked status lines. See [`models`] for the domain types,
//! [`render`] for list rendering, and [`page`] for page assembly and output.

pub mod data;
pub mod error;
pub mod links;
pub mod models;
pub mod page;
pub mod render;
