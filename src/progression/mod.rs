//! Hero progression: stat scaling and the gacha draw.

#![allow(unused_imports)]

pub mod gacha;
pub mod leveling;

pub use gacha::*;
pub use leveling::*;
