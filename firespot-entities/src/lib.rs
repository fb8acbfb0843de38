#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # firespot-entities
//!
//! Reusable, agnostic domain entities for firespot.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod facility;
pub mod geo;
pub mod linestring;
pub mod location;
pub mod map;
pub mod session;
pub mod weather;
