//! Keycard Arena - progression and combat core for a card-collecting rhythm
//! game.
//!
//! The crate covers the gacha draw, hero leveling, save persistence and
//! reconciliation, and key-press combat. Rendering and input wiring live in
//! the host; it talks to the core through [`session::Session`].

pub mod catalog;
pub mod combat;
pub mod core;
pub mod progression;
pub mod save;
pub mod session;
pub mod utils;
