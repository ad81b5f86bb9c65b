//! The unlock event: when every trigger item lies in one room, they are
//! consumed and a new exit opens in the configured room.

use dungeon_world::{Path, World};
use log::{info, warn};

use crate::config::UnlockConfig;

/// Fire the unlock event if all trigger items lie in room `room_id`.
///
/// Returns the narration to show when the event fired, `None` otherwise.
pub fn try_unlock(world: &mut World, room_id: &str, config: &UnlockConfig) -> Option<Vec<String>> {
    let room = world.find_room_mut(room_id)?;
    if config.trigger_items.is_empty()
        || !config.trigger_items.iter().all(|name| room.has_item(name))
    {
        return None;
    }
    for name in &config.trigger_items {
        room.remove_item(name);
    }
    info!("unlock event fired in '{}'", room_id);

    match world.find_room_mut(&config.room) {
        Some(target) => {
            let path = Path::new(config.direction.as_str(), config.destination.as_str());
            if let Err(err) = target.add_path(path) {
                warn!("unlock event could not add exit: {}", err);
            }
            if !target.rewrite_description(&config.find, &config.replace) {
                warn!(
                    "unlock event found no '{}' in the description of '{}'",
                    config.find, target.id
                );
            }
            target.forget_visit();
        }
        None => warn!("unlock event target room '{}' does not exist", config.room),
    }

    Some(config.narration.clone())
}
