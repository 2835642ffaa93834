//! Request and response shapes for the multi-generation API.
//!
//! Callers speak in money (stake and desired win); the search speaks in
//! odds. [`MultiRequest`] converts one into the other and [`MultiResponse`]
//! converts a [`MultiResult`](crate::search::MultiResult) back into money.

mod request;
mod response;

pub use request::{MultiRequest, ValidatedRequest};
pub use response::{AlternativeView, CombinationView, MultiResponse};
