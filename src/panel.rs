// Settings-surface binding: each panel control maps 1:1 to a settings field.
// The markup and styles are shipped as embedded assets; the host renders
// them, feeds edits back through PanelControl::apply, and requests a save.

use crate::character::CharacterRoster;
use crate::settings::{CommentaryStyle, DialogStyle, Settings};

pub const SETTINGS_TEMPLATE: &str = include_str!("../assets/template.html");
pub const STYLESHEET: &str = include_str!("../assets/style.css");

pub const SELECT_PLACEHOLDER: &str = "Select a character";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelControl {
    Enabled,
    PartnerCharacter,
    ControlledCharacter,
    ShowPartnerName,
    AllowMetaCommentary,
    MetaCommentaryStyle,
    ControlledCharDialog,
}

impl PanelControl {
    pub const ALL: [PanelControl; 7] = [
        PanelControl::Enabled,
        PanelControl::PartnerCharacter,
        PanelControl::ControlledCharacter,
        PanelControl::ShowPartnerName,
        PanelControl::AllowMetaCommentary,
        PanelControl::MetaCommentaryStyle,
        PanelControl::ControlledCharDialog,
    ];

    // Stable element ids, shared with assets/template.html.
    pub fn element_id(&self) -> &'static str {
        match self {
            PanelControl::Enabled => "nested_roleplay_enabled",
            PanelControl::PartnerCharacter => "nested_roleplay_partner",
            PanelControl::ControlledCharacter => "nested_roleplay_controlled",
            PanelControl::ShowPartnerName => "nested_roleplay_show_partner_name",
            PanelControl::AllowMetaCommentary => "nested_roleplay_allow_commentary",
            PanelControl::MetaCommentaryStyle => "nested_roleplay_commentary_style",
            PanelControl::ControlledCharDialog => "nested_roleplay_dialog_style",
        }
    }

    // The control's current value for panel population.
    pub fn current_value(&self, settings: &Settings) -> String {
        match self {
            PanelControl::Enabled => settings.enabled.to_string(),
            PanelControl::PartnerCharacter => settings.partner_character_id.clone(),
            PanelControl::ControlledCharacter => settings.controlled_character_id.clone(),
            PanelControl::ShowPartnerName => settings.show_partner_name.to_string(),
            PanelControl::AllowMetaCommentary => settings.allow_meta_commentary.to_string(),
            PanelControl::MetaCommentaryStyle => settings.meta_commentary_style.to_string(),
            PanelControl::ControlledCharDialog => settings.controlled_char_dialog.to_string(),
        }
    }

    // Parse a raw control value into its target field. An unrecognized
    // choice value leaves the field untouched; character selects accept any
    // string because the empty value is the placeholder.
    pub fn apply(&self, settings: &mut Settings, value: &str) {
        match self {
            PanelControl::Enabled => {
                settings.enabled = parse_checkbox(value);
            }
            PanelControl::PartnerCharacter => {
                settings.partner_character_id = value.to_string();
            }
            PanelControl::ControlledCharacter => {
                settings.controlled_character_id = value.to_string();
            }
            PanelControl::ShowPartnerName => {
                settings.show_partner_name = parse_checkbox(value);
            }
            PanelControl::AllowMetaCommentary => {
                settings.allow_meta_commentary = parse_checkbox(value);
            }
            PanelControl::MetaCommentaryStyle => match value {
                "parentheses" => settings.meta_commentary_style = CommentaryStyle::Parentheses,
                "asterisks" => settings.meta_commentary_style = CommentaryStyle::Asterisks,
                _ => log::warn!("Nested Roleplay: unknown commentary style: {}", value),
            },
            PanelControl::ControlledCharDialog => match value {
                "quotes" => settings.controlled_char_dialog = DialogStyle::Quotes,
                "none" => settings.controlled_char_dialog = DialogStyle::None,
                _ => log::warn!("Nested Roleplay: unknown dialog style: {}", value),
            },
        }
    }
}

fn parse_checkbox(value: &str) -> bool {
    matches!(value, "true" | "on" | "1" | "checked")
}

// One entry of a character dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

// Build the option list for one of the two character selects: placeholder
// first, unnamed characters skipped, the configured id marked selected.
pub fn character_options(roster: &CharacterRoster, selected_id: &str) -> Vec<CharacterOption> {
    let mut options = vec![CharacterOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
        selected: false,
    }];

    for character in roster.iter() {
        if character.name.is_empty() {
            continue;
        }
        options.push(CharacterOption {
            value: character.avatar.clone(),
            label: character.name.clone(),
            selected: !selected_id.is_empty() && character.avatar == selected_id,
        });
    }

    options
}
