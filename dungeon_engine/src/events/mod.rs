//! Scripted world events triggered by player commands.
//!
//! - **unlock**: two items meeting in one room open a new exit elsewhere
//! - **teleport**: the `xyzzy` shortcut between two fixed rooms

mod teleport;
mod unlock;

pub use teleport::*;
pub use unlock::*;
