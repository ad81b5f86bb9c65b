//! Interpreter - the turn-by-turn command state machine.
//!
//! Each turn:
//! 1. **Describe**: show the current room (long text only on the first visit)
//! 2. **Win check**: stop if the current room is the victory room
//! 3. **Read**: one command line
//! 4. **Dispatch**: mutate location, inventory or the world, and narrate
//!
//! Bad command lines are narrated back and never abort the loop.

mod describe;
#[cfg(test)]
mod scenarios;

pub use describe::*;

use dungeon_world::{Item, Sequence, World, WorldError};
use log::{debug, info, warn};
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use crate::command::{Command, Target};
use crate::config::{GameConfig, TakeAllPolicy};
use crate::events::{teleport, try_unlock, TeleportOutcome};
use crate::logutil::command_preview;

pub const VICTORY: &str = "Congratulations! You have won the game.";
pub const FAREWELL: &str = "Thanks for playing. Visit again soon.";
pub const HELP: &str =
    "Commands are: help, quit, look, drop, take, go, inv, and the exit directions";

/// Narration produced by one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    pub lines: Vec<String>,
    /// The player asked to end the game.
    pub ends_game: bool,
}

impl Turn {
    fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ends_game: false,
        }
    }

    fn quit() -> Self {
        Self {
            lines: Vec::new(),
            ends_game: true,
        }
    }
}

/// How a game session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Quit,
    EndOfInput,
}

/// Plays one session over a borrowed world.
///
/// Owns the player's location and inventory; every room lookup goes through
/// the world by id.
pub struct Interpreter<'w> {
    world: &'w mut World,
    config: GameConfig,
    current_room: String,
    inventory: Sequence<Item>,
}

impl<'w> Interpreter<'w> {
    /// Create an interpreter starting in the world's starting room.
    pub fn new(world: &'w mut World, config: GameConfig) -> Result<Self, WorldError> {
        let current_room = world.finalize()?.to_string();
        Ok(Self {
            world,
            config,
            current_room,
            inventory: Sequence::new(),
        })
    }

    /// Id of the room the player is in.
    pub fn current_room_id(&self) -> &str {
        &self.current_room
    }

    /// Items the player carries, oldest first.
    pub fn inventory(&self) -> &Sequence<Item> {
        &self.inventory
    }

    pub fn world(&self) -> &World {
        &*self.world
    }

    /// Check if the player stands in the victory room.
    pub fn has_won(&self) -> bool {
        self.config.is_victory_room(&self.current_room)
    }

    /// Describe the current room and mark it visited.
    pub fn describe_current_room(&mut self) -> Vec<String> {
        match self.world.find_room_mut(&self.current_room) {
            Some(room) => {
                let lines = describe_room(room);
                room.visited = true;
                lines
            }
            None => vec![format!("You are in {}", self.current_room)],
        }
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str) -> Turn {
        debug!("in '{}': {}", self.current_room, command_preview(line.as_bytes()));
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => return Turn::say(err.to_string()),
        };

        match command {
            Command::Take(target) => self.take(&target),
            Command::Drop(target) => self.drop(&target),
            Command::Inventory => Turn::say(self.inventory_line()),
            Command::Quit => Turn::quit(),
            Command::Exit => Turn::say("Use 'quit' to end the game."),
            Command::Help => Turn::say(HELP),
            Command::Look => {
                if let Some(room) = self.world.find_room_mut(&self.current_room) {
                    room.forget_visit();
                }
                Turn::default()
            }
            Command::Xyzzy => self.teleport(),
            Command::Move(direction) => self.travel(&direction),
        }
    }

    /// Play until the player wins, quits or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<Ending> {
        let ending = loop {
            writeln!(output)?;
            for line in self.describe_current_room() {
                writeln!(output, "{}", line)?;
            }
            if self.has_won() {
                writeln!(output, "{}", VICTORY)?;
                break Ending::Won;
            }

            write!(output, "{}", self.config.game.prompt)?;
            output.flush()?;
            let mut raw = Vec::new();
            if input.read_until(b'\n', &mut raw)? == 0 {
                writeln!(output)?;
                break Ending::EndOfInput;
            }
            let line = String::from_utf8_lossy(&raw);
            if matches!(line, Cow::Owned(_)) {
                warn!("command line is not valid UTF-8: {}", command_preview(&raw));
            }

            let turn = self.execute(&line);
            for text in &turn.lines {
                writeln!(output, "{}", text)?;
            }
            if turn.ends_game {
                break Ending::Quit;
            }
        };

        writeln!(output, "{}", FAREWELL)?;
        output.flush()?;
        info!("session ended ({:?}) in '{}'", ending, self.current_room);
        Ok(ending)
    }

    fn take(&mut self, target: &Target) -> Turn {
        let take_every = *target == Target::All && self.config.game.take_all == TakeAllPolicy::Every;
        let Some(room) = self.world.find_room_mut(&self.current_room) else {
            return Turn::default();
        };
        while let Some(item) = room.items.remove_last_where(|item| target.matches(item)) {
            debug!("took '{}'", item.name);
            self.inventory.push_back(item);
            if !take_every {
                break;
            }
        }
        Turn::default()
    }

    fn drop(&mut self, target: &Target) -> Turn {
        let Some(room) = self.world.find_room_mut(&self.current_room) else {
            return Turn::default();
        };
        let mut dropped = 0;
        while let Some(item) = self.inventory.remove_last_where(|item| target.matches(item)) {
            debug!("dropped '{}'", item.name);
            room.add_item(item);
            dropped += 1;
            if *target != Target::All {
                break;
            }
        }
        if dropped == 0 {
            return Turn::default();
        }

        match try_unlock(&mut *self.world, &self.current_room, &self.config.unlock) {
            Some(lines) => Turn {
                lines,
                ends_game: false,
            },
            None => Turn::default(),
        }
    }

    fn inventory_line(&self) -> String {
        if self.inventory.is_empty() {
            return "You are carrying: nothing".to_string();
        }
        let names: Vec<&str> = self.inventory.iter().map(|item| item.name.as_str()).collect();
        format!("You are carrying: {}", names.join(", "))
    }

    fn teleport(&mut self) -> Turn {
        match teleport(
            &*self.world,
            &self.current_room,
            &self.inventory,
            &self.config.teleport,
        ) {
            TeleportOutcome::Moved(room) => {
                info!("teleported from '{}' to '{}'", self.current_room, room);
                self.current_room = room;
                Turn::default()
            }
            TeleportOutcome::NothingHappens => Turn::say("Nothing happens."),
            TeleportOutcome::Taunt => Turn::say("Does this look like a colossal cave?"),
        }
    }

    fn travel(&mut self, direction: &str) -> Turn {
        let Some(path) = self.world.find_path(&self.current_room, direction) else {
            return Turn::say("Unknown command. Try again.");
        };
        match self.world.find_room(&path.destination) {
            Some(room) => {
                debug!("moving '{}' to '{}'", direction, room.id);
                self.current_room = room.id.clone();
                Turn::default()
            }
            None => Turn::say("Path doesn't lead to a known room."),
        }
    }
}
