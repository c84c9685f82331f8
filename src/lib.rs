pub mod character;
pub mod error;
pub mod extension;
pub mod formatter;
pub mod highlighter;
pub mod host;
pub mod logging;
pub mod message;
pub mod panel;
pub mod prompt;
pub mod settings;

// Re-export commonly used items for easier access
pub use character::{Character, CharacterRoster};
pub use error::ExtensionError;
pub use extension::{EventKind, Extension, HIGHLIGHT_DELAY, PendingHighlight};
pub use formatter::{COMMENTARY_CLASS, format_message, wrap_commentary};
pub use highlighter::{CONTROLLED_DIALOG_CLASS, PARTNER_MESSAGE_CLASS, highlight_dialog};
pub use host::HostContext;
pub use message::ChatMessage;
pub use panel::{CharacterOption, PanelControl, character_options};
pub use prompt::system_prompt;
pub use settings::{CommentaryStyle, DialogStyle, Settings};
