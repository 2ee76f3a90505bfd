//! MotorAPI.dk domain module.
//!
//! This module owns the outbound HTTP concern: the client that talks to the
//! MotorAPI.dk vehicle registry and the normalized result type its lookups
//! produce. Vehicle data itself is opaque to this server - payloads are
//! passed through verbatim.

pub mod client;
pub mod result;

pub use client::{AUTH_HEADER, MotorApiClient};
pub use result::{LookupFailure, LookupResult};
