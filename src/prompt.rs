use crate::settings::{CommentaryStyle, DialogStyle, Settings};

// Render the instruction block that establishes the nested-roleplay
// convention for the model. The wording below is sent to the model verbatim
// and is what actually steers the behavior; keep the text, ordering, and
// separators stable. The trailing space after "for the user. " is part of
// the shipped wording.
pub fn system_prompt(partner_name: &str, controlled_name: &str, settings: &Settings) -> String {
    let commentary_style = match settings.meta_commentary_style {
        CommentaryStyle::Parentheses => "(like this)",
        CommentaryStyle::Asterisks => "*like this*",
    };

    let dialog_style = match settings.controlled_char_dialog {
        DialogStyle::Quotes => format!("{}: \"Like this\"", controlled_name),
        DialogStyle::None => format!("{}: Like this", controlled_name),
    };

    let example = match settings.meta_commentary_style {
        CommentaryStyle::Parentheses => format!(
            "(I think this scene is going well!) I guide {controlled} toward you. {controlled}: \"Hello there, I've been waiting to meet you.\"",
            controlled = controlled_name
        ),
        CommentaryStyle::Asterisks => format!(
            "*I think this scene is going well!* I guide {controlled} toward you. {controlled}: \"Hello there, I've been waiting to meet you.\"",
            controlled = controlled_name
        ),
    };

    format!(
        "\nIMPORTANT INSTRUCTION: Nested Roleplay Mode\n\
         ---------------------------------------------\n\
         In this chat, you are playing as {partner}, who is controlling the character {controlled}.\n\
         \n\
         You must act as though you ({partner}) are the roleplayer controlling {controlled} for the user. \n\
         This means:\n\
         \n\
         1. Respond primarily as {partner}, expressing your thoughts about the roleplay.\n\
         \n\
         2. When appropriate, make {controlled} speak or act within the scene.\n\
         \n\
         3. For meta-commentary as {partner} (your thoughts about the roleplay itself), use {commentary_style}\n\
         \n\
         4. When having {controlled} speak, format it as: {dialog_style}\n\
         \n\
         5. Your responses should seamlessly blend:\n\
         \x20  - Your OOC (out-of-character) commentary as {partner}\n\
         \x20  - Your descriptions of what {controlled} is doing\n\
         \x20  - Direct speech from {controlled}\n\
         \n\
         Example response format:\n\
         {example}\n\
         \n\
         Remember, you ({partner}) are the roleplayer controlling {controlled} for the user.\n",
        partner = partner_name,
        controlled = controlled_name,
        commentary_style = commentary_style,
        dialog_style = dialog_style,
        example = example,
    )
}
