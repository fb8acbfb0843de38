//! The location session controller of firespot and the
//! interfaces of the external services it depends on.

pub use firespot_entities as entities;

pub mod gateways;
pub mod usecases;
pub mod util;
