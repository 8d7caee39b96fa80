//! Save persistence: the progression record, its JSON document, and the
//! key-value stores it lives in.

#![allow(unused_imports)]

pub mod manager;
pub mod record;
pub mod store;

pub use manager::*;
pub use record::*;
pub use store::*;
