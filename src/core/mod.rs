//! Tuning constants and configuration.

#![allow(unused_imports)]

pub mod config;
pub mod constants;

pub use config::*;
pub use constants::*;
