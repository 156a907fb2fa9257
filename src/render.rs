//! Plain-text rendering of a [`View`] for the terminal editor.

use crate::view::{Body, ExportControls, View};

struct ViewFormatter;

impl ViewFormatter {
    fn format(view: &View) -> String {
        let mut text = format!("== {} ==\n", view.heading);
        Self::format_body(&mut text, &view.body);
        if let Some(export) = &view.export {
            Self::format_export(&mut text, export);
        }
        text
    }

    fn format_body(text: &mut String, body: &Body) {
        match body {
            Body::Loading {
                output_title,
                title,
                subtitle,
            } => {
                text.push_str(&format!("[{output_title}]\n{title}\n{subtitle}\n"));
            }
            Body::Placeholder { title, subtitle } => {
                text.push_str(&format!("{title}\n{subtitle}\n"));
            }
            Body::Error(message) => {
                text.push_str(&format!("! {message}\n"));
            }
            Body::Compact { label, text: prompt } => {
                text.push_str(&format!("[{label}]\n{prompt}\n"));
            }
            Body::Structured(fields) => {
                for field in fields {
                    let value = if field.value.is_empty() {
                        "-"
                    } else {
                        field.value.as_str()
                    };
                    text.push_str(&format!("{} ({}): {}\n", field.label, field.field, value));
                }
            }
        }
    }

    fn format_export(text: &mut String, export: &ExportControls) {
        let choices: Vec<String> = export
            .choices
            .iter()
            .map(|&t| {
                if t == export.selected {
                    format!("[{t}]")
                } else {
                    t.to_string()
                }
            })
            .collect();
        text.push_str(&format!("{}: {}\n", export.target_label, choices.join(" | ")));
        let mark = if export.copied { "✅" } else { "📋" };
        text.push_str(&format!("{mark} {}\n", export.button_label));
    }
}

pub fn format_view(view: &View) -> String {
    ViewFormatter::format(view)
}
