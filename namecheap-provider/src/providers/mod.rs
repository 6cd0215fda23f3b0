//! Registrar provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod namecheap;

pub use namecheap::{NamecheapProvider, NamecheapProviderBuilder};
