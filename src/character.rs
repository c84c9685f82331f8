use serde::{Deserialize, Serialize};

// A character known to the host. The avatar string is the host's stable
// identifier for the character; settings store it, never the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub avatar: String,
    pub name: String,
}

impl Character {
    pub fn new(avatar: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            avatar: avatar.into(),
            name: name.into(),
        }
    }
}

// Snapshot of the host's character list, refreshed whenever a character is
// edited, deleted, or a character page loads. An id stored in settings may
// reference a character no longer present here; lookups just return None.
#[derive(Debug, Clone, Default)]
pub struct CharacterRoster {
    characters: Vec<Character>,
}

impl CharacterRoster {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn refresh(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    pub fn lookup(&self, avatar: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.avatar == avatar)
    }

    pub fn lookup_name(&self, avatar: &str) -> Option<&str> {
        self.lookup(avatar).map(|c| c.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }
}
