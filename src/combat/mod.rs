//! Combat units, party construction, and encounter resolution.

#![allow(unused_imports)]

pub mod logic;
pub mod rules;
pub mod types;

pub use logic::*;
pub use rules::*;
pub use types::*;
