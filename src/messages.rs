//! Text printed by the terminal editor.
//!
//! Prompt labels live in [`crate::labels`]; this module only holds the
//! editor's own help and feedback strings.

pub const HELP_TEXT: &str = "Edit the generated prompt, then copy it for your target model.\n\n\
     Commands:\n\
     show - Show the prompt panel.\n\
     status - Show the target, copy state and assembled prompt.\n\
     targets - List the supported target models.\n\
     target <name> - Select Midjourney, Stable Diffusion or DALL-E.\n\
     set <field> [text] - Replace one field of a structured prompt.\n\
     text <prompt> - Replace the text of a compact prompt.\n\
     load <file> [mode] - Load a generated prompt (JSON string or object).\n\
     copy - Copy the final prompt.\n\
     help - Show this text.\n\
     quit - Leave the editor.";

pub const FIELDS_HINT: &str =
    "Fields: subject, scene, mood, style, lighting, camera, details, negativePrompt.";

pub fn unknown_command(input: &str) -> String {
    format!("Unknown command '{input}'. Type 'help' for the list of commands.")
}

pub fn field_updated(field: &str) -> String {
    format!("Updated {field}.")
}

pub fn target_selected(target: &str) -> String {
    format!("Target set to {target}.")
}

pub const COMPACT_UPDATED: &str = "Updated compact prompt.";
