//! Core components of the `quandl-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`QuandlClient`] and its builder.
//! - The primary [`QuandlError`] type.
//! - Format negotiation and the [`Payload`]/[`Fetched`] call results.

/// The main client (`QuandlClient`), builder, and configuration.
pub mod client;
pub(crate) mod decode;
/// The primary error type (`QuandlError`) for the crate.
pub mod error;
/// Caller-facing and wire formats.
pub mod format;
/// Call results shared by every endpoint module.
pub mod models;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::QuandlClient`
pub use client::{QuandlClient, QuandlClientBuilder};
pub use error::QuandlError;
pub use format::{Format, WireFormat};
pub use models::{Fetched, Payload};
