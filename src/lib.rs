//! Tapwire - Session-bracketed HTTP request capture filter
//!
//! Observes requests flowing through an intercepting proxy and records the
//! stretch of traffic between a start marker and a stop marker to a JSON log.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::cargo)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::multiple_crate_versions
)]

pub mod capture;
pub mod config;
pub mod error;
pub mod network;
pub mod storage;

pub use error::{Result, TapwireError};
