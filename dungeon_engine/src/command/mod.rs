//! Player commands and the one-line parser that produces them.

use dungeon_world::Item;
use thiserror::Error;

/// What a `take` or `drop` applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The word `all`.
    All,
    /// A single item name.
    Named(String),
}

impl Target {
    fn from_word(word: &str) -> Self {
        if word == "all" {
            Target::All
        } else {
            Target::Named(word.to_string())
        }
    }

    /// Check if `item` is selected by this target.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Target::All => true,
            Target::Named(name) => item.is_named(name),
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Take(Target),
    Drop(Target),
    Inventory,
    Quit,
    /// Not a way out; only reminds the player about `quit`.
    Exit,
    Help,
    Look,
    Xyzzy,
    /// Anything else is taken as an exit direction.
    Move(String),
}

/// Command lines the parser refuses. Displayed to the player as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Zero tokens, or more than two.
    #[error("Command not understood")]
    NotUnderstood,

    #[error("You must specify an object to {verb}")]
    MissingObject { verb: &'static str },
}

impl Command {
    /// Parse one command line.
    ///
    /// The line is lower-cased and split on whitespace into an action and at
    /// most one object. `go <direction>` is the same as `<direction>`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim().to_lowercase();
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (mut action, mut object) = match tokens.as_slice() {
            [action] => (*action, None),
            [action, object] => (*action, Some(*object)),
            _ => return Err(CommandError::NotUnderstood),
        };

        if action == "go" {
            action = object.unwrap_or_default();
            object = None;
        }

        let command = match action {
            "take" => Command::Take(Target::from_word(
                object.ok_or(CommandError::MissingObject { verb: "take" })?,
            )),
            "drop" => Command::Drop(Target::from_word(
                object.ok_or(CommandError::MissingObject { verb: "drop" })?,
            )),
            "inv" => Command::Inventory,
            "quit" => Command::Quit,
            "exit" => Command::Exit,
            "help" => Command::Help,
            "look" => Command::Look,
            "xyzzy" => Command::Xyzzy,
            direction => Command::Move(direction.to_string()),
        };
        Ok(command)
    }
}
