use serde_json::Value;

use crate::character::Character;
use crate::settings::Settings;

// The narrow capability set the extension needs from its host. Everything
// else about the host (DOM, render pipeline, persistence mechanics) stays on
// the host's side of this boundary.
pub trait HostContext {
    // The stored settings blob, possibly absent or missing keys. Read fresh
    // on every event; the extension never caches it.
    fn raw_settings(&self) -> Option<Value>;

    // Current character list. May no longer contain an id the settings
    // reference.
    fn characters(&self) -> Vec<Character>;

    // Hand fully-populated settings back for the host's debounced save.
    fn request_save(&mut self, settings: &Settings);

    fn lookup_character_name(&self, avatar: &str) -> Option<String> {
        self.characters()
            .into_iter()
            .find(|c| c.avatar == avatar)
            .map(|c| c.name)
    }
}
