//! Adapters around the search core.
//!
//! `inbound` turns caller input (CLI arguments, request bodies) into search
//! requests; `outbound` loads the bet catalog the search runs over.

pub mod inbound;
pub mod outbound;
