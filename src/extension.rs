use std::time::Duration;

use serde_json::Value;

use crate::character::CharacterRoster;
use crate::error::{ExtensionError, Result};
use crate::formatter::format_message;
use crate::highlighter::highlight_dialog;
use crate::host::HostContext;
use crate::message::ChatMessage;
use crate::panel::PanelControl;
use crate::prompt::system_prompt;
use crate::settings::Settings;

// Host lifecycle events the extension subscribes to. The three character
// kinds all trigger the same roster refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    MessageReceived,
    CharacterEdited,
    CharacterDeleted,
    CharacterPageLoaded,
    BeforeCombinePrompts,
}

// Delay between message insertion and the dialogue-highlight pass, so the
// host's own render of the rewritten text finishes first.
pub const HIGHLIGHT_DELAY: Duration = Duration::from_millis(10);

// Dialogue highlighting operates on rendered markup, which does not exist
// yet when the message event fires. The dispatcher hands this back and the
// host applies it to the newest message element after `delay`. Best effort:
// an independent host re-render can race it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingHighlight {
    pub controlled_name: String,
    pub delay: Duration,
}

impl PendingHighlight {
    pub fn apply(&self, rendered_html: &str) -> String {
        highlight_dialog(rendered_html, &self.controlled_name)
    }
}

pub struct Extension<H: HostContext> {
    host: H,
    roster: CharacterRoster,
}

impl<H: HostContext> Extension<H> {
    // Discover the host context, once, at startup. Failure is fatal to
    // initialization: it is logged and the extension stays inert. There is
    // no rediscovery or retry after this point.
    pub fn bootstrap<F>(discover: F) -> Result<Self>
    where
        F: FnOnce() -> Option<H>,
    {
        let mut host = match discover() {
            Some(host) => host,
            None => {
                log::error!("Nested Roleplay: could not discover host context");
                return Err(ExtensionError::MissingCollaborator);
            }
        };

        // Backfill any missing settings key with its default and hand the
        // completed object back for the host's debounced save.
        let (settings, backfilled) = Settings::from_stored(host.raw_settings().as_ref());
        if backfilled {
            log::info!("Nested Roleplay: applied default settings");
            host.request_save(&settings);
        }

        let roster = CharacterRoster::new(host.characters());
        log::info!("Nested Roleplay: extension loaded");
        Ok(Self { host, roster })
    }

    // Route one host event. Runs synchronously to completion, never
    // propagates a failure to the host: anything that goes wrong degrades to
    // "no-op for this event" plus a log entry. The returned highlight, if
    // any, is for the host to apply once its render settles.
    pub fn dispatch(&mut self, kind: EventKind, payload: &mut Value) -> Option<PendingHighlight> {
        match kind {
            EventKind::MessageReceived => match self.on_message_received(payload) {
                Ok(pending) => pending,
                Err(err) => {
                    log::debug!("Nested Roleplay: message event skipped: {}", err);
                    None
                }
            },
            EventKind::CharacterEdited
            | EventKind::CharacterDeleted
            | EventKind::CharacterPageLoaded => {
                self.refresh_characters();
                None
            }
            EventKind::BeforeCombinePrompts => {
                if let Err(err) = self.on_before_combine_prompts(payload) {
                    log::debug!("Nested Roleplay: prompt event skipped: {}", err);
                }
                None
            }
        }
    }

    // Settings are read fresh from the host on every event, never cached.
    pub fn settings(&self) -> Settings {
        Settings::from_stored(self.host.raw_settings().as_ref()).0
    }

    pub fn roster(&self) -> &CharacterRoster {
        &self.roster
    }

    pub fn refresh_characters(&mut self) {
        self.roster.refresh(self.host.characters());
        log::debug!("Nested Roleplay: character list refreshed");
    }

    // A settings-panel edit: parse the control's raw value into its field
    // and request a save. The host persists; the extension never writes
    // storage itself.
    pub fn apply_panel_edit(&mut self, control: PanelControl, value: &str) {
        let mut settings = self.settings();
        control.apply(&mut settings, value);
        self.host.request_save(&settings);
    }

    fn on_message_received(&mut self, payload: &mut Value) -> Result<Option<PendingHighlight>> {
        let message: ChatMessage = serde_json::from_value(payload.clone())
            .map_err(|_| ExtensionError::MalformedPayload("text"))?;

        // Only rewrite AI messages while the extension is active and both
        // roles resolve to live characters.
        if message.is_user {
            return Ok(None);
        }
        let settings = self.settings();
        if !settings.enabled {
            return Ok(None);
        }
        if !settings.characters_selected() {
            log::debug!("Nested Roleplay: no characters selected, skipping message processing");
            return Ok(None);
        }
        let (partner_name, controlled_name) = self.resolve_names(&settings)?;

        let processed = format_message(&message.text, &partner_name, &controlled_name, &settings);
        if processed == message.text {
            return Ok(None);
        }

        let object = payload
            .as_object_mut()
            .ok_or(ExtensionError::MalformedPayload("text"))?;
        object.insert("text".to_string(), Value::String(processed));

        Ok(Some(PendingHighlight {
            controlled_name,
            delay: HIGHLIGHT_DELAY,
        }))
    }

    fn on_before_combine_prompts(&mut self, payload: &mut Value) -> Result<()> {
        let settings = self.settings();
        if !settings.enabled {
            return Ok(());
        }
        if !settings.characters_selected() {
            log::debug!("Nested Roleplay: no characters selected, skipping prompt modification");
            return Ok(());
        }
        let (partner_name, controlled_name) = self.resolve_names(&settings)?;

        let fragment = system_prompt(&partner_name, &controlled_name, &settings);
        let object = payload
            .as_object_mut()
            .ok_or(ExtensionError::MalformedPayload("system_prompt"))?;

        let existing = object
            .get("system_prompt")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let combined = if existing.is_empty() {
            fragment
        } else {
            format!("{}\n\n{}", existing, fragment)
        };
        object.insert("system_prompt".to_string(), Value::String(combined));

        log::debug!("Nested Roleplay: added nested roleplay system prompt");
        Ok(())
    }

    // Both lookups go against the host's current list, not the cached
    // roster, so a rename between refreshes is picked up immediately. A
    // missing character skips the event with no partial mutation.
    fn resolve_names(&self, settings: &Settings) -> Result<(String, String)> {
        let partner = self
            .host
            .lookup_character_name(&settings.partner_character_id)
            .ok_or_else(|| {
                ExtensionError::UnresolvedCharacter(settings.partner_character_id.clone())
            })?;
        let controlled = self
            .host
            .lookup_character_name(&settings.controlled_character_id)
            .ok_or_else(|| {
                ExtensionError::UnresolvedCharacter(settings.controlled_character_id.clone())
            })?;
        Ok((partner, controlled))
    }
}
