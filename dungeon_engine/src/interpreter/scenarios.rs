//! Whole-session playthroughs of the bundled `dungeon.txt`.

use super::*;
use crate::config::TakeAllPolicy;

const CAMPUS: &str = include_str!("../../../dungeon.txt");

fn play(config: GameConfig, input: &str) -> (Ending, String, World) {
    let mut world = World::load(CAMPUS.as_bytes()).unwrap();
    let mut output = Vec::new();
    let ending = {
        let mut interpreter = Interpreter::new(&mut world, config).unwrap();
        interpreter.run(input.as_bytes(), &mut output).unwrap()
    };
    (ending, String::from_utf8(output).unwrap(), world)
}

#[test]
fn test_unlock_then_walk_outside_wins() {
    let input = "n\ntake regalia\nxyzzy\ntake instructor\nw\nw\ndrop instructor\ne\ns\n";
    let (ending, transcript, world) = play(GameConfig::default(), input);

    assert_eq!(ending, Ending::Won);
    assert!(transcript.contains("You are in A-1374"));
    assert!(transcript.contains("The instructor wakes up and gets on the bike."));
    assert!(transcript.contains("A heavy door to the south is now unlocked."));
    assert!(transcript.contains("Exits are: w, s"));
    assert!(transcript.contains("You are in outside\nFresh air at last.\nThere are no exits\n"));
    assert!(transcript.ends_with(&format!("{}\n{}\n", VICTORY, FAREWELL)));

    let lobby = world.find_room("lobby").unwrap();
    assert!(!lobby.has_item("bike"));
    assert!(!lobby.has_item("instructor"));
}

#[test]
fn test_locked_door_blocks_until_unlocked() {
    let (ending, transcript, _) = play(GameConfig::default(), "e\ns\nquit\n");
    assert_eq!(ending, Ending::Quit);
    assert!(transcript.contains("Unknown command. Try again."));
    assert!(!transcript.contains("You are in outside"));
}

#[test]
fn test_xyzzy_outcomes() {
    let input = "xyzzy\nn\ntake regalia\ns\nxyzzy\nn\nxyzzy\nxyzzy\n";
    let (ending, transcript, _) = play(GameConfig::default(), input);

    assert_eq!(ending, Ending::EndOfInput);
    assert!(transcript.contains("Does this look like a colossal cave?"));
    assert!(transcript.contains("Nothing happens."));
    // A-1342 -> A-1374 -> A-1342
    assert_eq!(transcript.matches("You are in A-1374").count(), 1);
    assert_eq!(transcript.matches("You are in A-1342").count(), 3);
}

#[test]
fn test_take_all_policies() {
    let mut every = GameConfig::default();
    every.game.take_all = TakeAllPolicy::Every;
    let den = "ROOM: den : Den : A den.\nITEM: cup : A cup. : den\nITEM: pen : A pen. : den\n";

    for (config, expected) in [
        (GameConfig::default(), "You are carrying: pen"),
        (every, "You are carrying: pen, cup"),
    ] {
        let mut world = World::load(den.as_bytes()).unwrap();
        let mut interpreter = Interpreter::new(&mut world, config).unwrap();
        interpreter.execute("take all");
        assert_eq!(interpreter.execute("inv").lines, vec![expected]);
    }
}

#[test]
fn test_revisit_uses_short_description() {
    let (_, transcript, _) = play(GameConfig::default(), "e\nw\nlook\n");
    let long = "You stand in the lobby of the engineering building.";
    assert_eq!(transcript.matches(long).count(), 2);
    assert_eq!(transcript.matches("You are in lobby").count(), 3);
}

#[test]
fn test_bad_lines_do_not_end_the_game() {
    let input = "\ntake the bike\ngo\nfly\nexit\nquit\n";
    let (ending, transcript, _) = play(GameConfig::default(), input);

    assert_eq!(ending, Ending::Quit);
    assert_eq!(transcript.matches("Command not understood").count(), 2);
    assert_eq!(transcript.matches("Unknown command. Try again.").count(), 2);
    assert!(transcript.contains("Use 'quit' to end the game."));
}

const DOORWAY: &str = "\
ROOM: start : Start : A quiet lobby.
ROOM: east hall south : East Hall South : The door is locked.
ROOM: outside : Outside : Fresh air.
PATH: e : start : east hall south
PATH: w : east hall south : start
ITEM: bike : A bike. : start
ITEM: instructor : An instructor. : start
";

fn play_world(source: &str, config: GameConfig, input: &[u8]) -> (Ending, String) {
    let mut world = World::load(source.as_bytes()).unwrap();
    let mut interpreter = Interpreter::new(&mut world, config).unwrap();
    let mut output = Vec::new();
    let ending = interpreter.run(input, &mut output).unwrap();
    (ending, String::from_utf8(output).unwrap())
}

#[test]
fn test_unlock_fires_once_in_either_drop_order() {
    let narration = "The instructor wakes up and gets on the bike.";
    for (first, second) in [("bike", "instructor"), ("instructor", "bike")] {
        let input = format!("take bike\ntake instructor\ne\ndrop {first}\ndrop {second}\ns\n");
        let (ending, transcript) = play_world(DOORWAY, GameConfig::default(), input.as_bytes());
        assert_eq!(ending, Ending::Won);
        assert_eq!(transcript.matches(narration).count(), 1);

        // One chunk per command, following the prompt that read it.
        let chunks: Vec<&str> = transcript.split("Enter command: ").collect();
        assert_eq!(chunks.len(), 7);
        assert!(!chunks[4].contains(narration));
        assert!(chunks[4].contains("Exits are: w\n"));
        assert!(chunks[5].starts_with(narration));
        assert!(chunks[5].contains("You are in east hall south\nThe door is now unlocked.\n"));
        assert!(chunks[5].contains("Exits are: w, s"));
        assert!(chunks[6].contains("You are in outside"));
        assert!(!chunks[6].contains("A bike."));
    }
}

#[test]
fn test_drop_all_items_listed_on_return() {
    let attic = "\
ROOM: den : Den : A den.
ROOM: attic : Attic : Dusty.
PATH: u : den : attic
PATH: d : attic : den
ITEM: cup : A cup. : den
ITEM: pen : A pen. : den
";
    let mut config = GameConfig::default();
    config.game.take_all = TakeAllPolicy::Every;
    let (ending, transcript) = play_world(attic, config, b"take all\nu\ndrop all\nd\nu\ninv\n");

    assert_eq!(ending, Ending::EndOfInput);
    let chunks: Vec<&str> = transcript.split("Enter command: ").collect();
    assert_eq!(chunks.len(), 7);
    assert!(chunks[4].contains("You are in den\nExits are: u\n"));
    assert!(chunks[5].contains("You are in attic\nA cup.\nA pen.\nExits are: d\n"));
    assert!(chunks[6].starts_with("You are carrying: nothing\n"));
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let (ending, transcript) = play_world(DOORWAY, GameConfig::default(), b"\xff\xfe\nquit\n");

    assert_eq!(ending, Ending::Quit);
    assert!(transcript.contains("Unknown command. Try again."));
    assert!(transcript.ends_with(&format!("{}\n", FAREWELL)));
}
