//! # Dungeon Engine
//!
//! The text-adventure interpreter that plays a [`dungeon_world::World`].
//!
//! ## Core Components
//!
//! - **command**: One-line player command parser
//! - **config**: TOML game settings (prompt, scripted unlock, teleport, victory room)
//! - **events**: The scripted unlock event and the `xyzzy` teleport
//! - **interpreter**: The turn loop, room descriptions and the debug world dump
//! - **logutil**: Log-safe rendering of player input

pub mod command;
pub mod config;
pub mod events;
pub mod interpreter;
pub mod logutil;

pub use command::*;
pub use config::*;
pub use events::*;
pub use interpreter::*;
