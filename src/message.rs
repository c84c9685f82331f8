use serde::{Deserialize, Serialize};

// Incoming chat message as delivered by the host's message-received event.
// The host owns it; the extension rewrites `text` in place when formatting
// applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    // Hosts omit this on character messages; absent means not user-authored.
    #[serde(default)]
    pub is_user: bool,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, is_user: bool) -> Self {
        Self {
            text: text.into(),
            is_user,
        }
    }
}
