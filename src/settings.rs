// Import necessary libraries and modules for file I/O and serialization.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::{self, Write};

// Delimiter style used for the partner's out-of-character commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentaryStyle {
    Parentheses,
    Asterisks,
}

impl fmt::Display for CommentaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentaryStyle::Parentheses => write!(f, "parentheses"),
            CommentaryStyle::Asterisks => write!(f, "asterisks"),
        }
    }
}

// How the controlled character's spoken lines are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogStyle {
    Quotes,
    None,
}

impl fmt::Display for DialogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogStyle::Quotes => write!(f, "quotes"),
            DialogStyle::None => write!(f, "none"),
        }
    }
}

// Define a structure to hold extension settings with serialization and
// deserialization capabilities. Character identifiers are stored avatar ids;
// an empty string means no character is selected yet. Every field carries a
// serde default so a partial or older stored blob deserializes into a fully
// populated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub partner_character_id: String,
    #[serde(default)]
    pub controlled_character_id: String,
    #[serde(default = "default_true")]
    pub show_partner_name: bool,
    #[serde(default = "default_true")]
    pub allow_meta_commentary: bool,
    #[serde(default = "default_commentary_style")]
    pub meta_commentary_style: CommentaryStyle,
    #[serde(default = "default_dialog_style")]
    pub controlled_char_dialog: DialogStyle,
}

fn default_true() -> bool {
    true
}

fn default_commentary_style() -> CommentaryStyle {
    CommentaryStyle::Parentheses
}

fn default_dialog_style() -> DialogStyle {
    DialogStyle::Quotes
}

// Keys of the stored settings object, used to detect an incomplete blob.
const SETTINGS_KEYS: [&str; 7] = [
    "enabled",
    "partner_character_id",
    "controlled_character_id",
    "show_partner_name",
    "allow_meta_commentary",
    "meta_commentary_style",
    "controlled_char_dialog",
];

// Implement the Default trait for Settings to provide defaults matching a
// fresh installation.
impl Default for Settings {
    fn default() -> Self {
        Settings {
            enabled: false,
            partner_character_id: String::new(),
            controlled_character_id: String::new(),
            show_partner_name: true,
            allow_meta_commentary: true,
            meta_commentary_style: CommentaryStyle::Parentheses,
            controlled_char_dialog: DialogStyle::Quotes,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    // Build settings from the host's stored blob. An absent, unreadable, or
    // partial blob backfills every missing key with its default; the second
    // return value reports whether any backfill happened so the caller can
    // request a save.
    pub fn from_stored(stored: Option<&Value>) -> (Self, bool) {
        match stored {
            Some(value) => {
                let settings: Settings =
                    serde_json::from_value(value.clone()).unwrap_or_default();
                (settings, !Self::is_complete(value))
            }
            None => (Self::default(), true),
        }
    }

    // True when the stored blob is an object carrying every settings key.
    pub fn is_complete(value: &Value) -> bool {
        match value.as_object() {
            Some(map) => SETTINGS_KEYS.iter().all(|key| map.contains_key(*key)),
            None => false,
        }
    }

    // True when both character roles have been assigned.
    pub fn characters_selected(&self) -> bool {
        !self.partner_character_id.is_empty() && !self.controlled_character_id.is_empty()
    }

    // Load settings from a specified file path.
    pub fn load_settings_from_file(path: &str) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    // Save current settings to a specified file path.
    pub fn save_to_file(&self, path: &str) -> io::Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = std::path::Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }
}
