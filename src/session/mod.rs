//! Session controller.

#![allow(unused_imports)]

pub mod controller;

pub use controller::*;
