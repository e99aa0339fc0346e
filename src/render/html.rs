use std::collections::HashMap;

use crate::models::{ChatMessage, StyleRule, DEFAULT_COLOR};

/// Message-shaping rules supplied by the caller.
///
/// A rule is active when present: the ignore rule excludes matching
/// messages from the output entirely, the italicize rule renders them
/// italic with the delimiters stripped and a marker glyph in front.
#[derive(Debug, Clone, Default)]
pub struct RenderRules {
    pub ignore: Option<StyleRule>,
    pub italicize: Option<StyleRule>,
}

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body {
            background-color: #1a1a1a;
            color: #ffffff;
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
        }
        .chat-container {
            max-width: 800px;
            margin: 0 auto;
        }
        .message {
            margin-bottom: 10px;
            padding: 8px;
            border-radius: 5px;
            background-color: #2a2a2a;
        }
        .timestamp {
            color: #888888;
            font-size: 0.8em;
            margin-bottom: 4px;
        }
        .nickname {
            font-weight: bold;
            margin-right: 8px;
        }
        .content {
            word-wrap: break-word;
        }
        .italicized {
            font-style: italic;
        }
        .asterisk {
            color: #888888;
        }
    </style>
</head>
<body>
    <div class="chat-container">
"#;

const DOCUMENT_FOOT: &str = r#"    </div>
</body>
</html>
"#;

/// Build the complete HTML transcript for the given messages.
///
/// Messages arrive already time-filtered; this stage only applies the
/// shaping rules and speaker colors. Speakers without an assigned color
/// fall back to white.
pub fn render_document(
    messages: &[&ChatMessage],
    colors: &HashMap<String, String>,
    rules: &RenderRules,
) -> String {
    let mut document = String::from(DOCUMENT_HEAD);

    for message in messages {
        if let Some(ignore) = &rules.ignore {
            if ignore.matches(&message.text) {
                continue;
            }
        }

        let color = colors
            .get(&message.speaker)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR);

        document.push_str(&format_message(message, color, rules.italicize.as_ref()));
    }

    document.push_str(DOCUMENT_FOOT);
    document
}

fn format_message(message: &ChatMessage, color: &str, italicize: Option<&StyleRule>) -> String {
    let (content_class, prefix, text) = match italicize {
        Some(rule) if rule.matches(&message.text) => (
            "content italicized",
            r#"<span class="asterisk">* </span>"#,
            rule.strip(&message.text),
        ),
        _ => ("content", "", message.text.as_str()),
    };

    format!(
        r#"        <div class="message">
            <div class="timestamp">{date} {time}</div>
            <div>
                {prefix}<span class="nickname" style="color: {color}">{nickname}</span>
                <span class="{content_class}">{text}</span>
            </div>
        </div>
"#,
        date = message.date(),
        time = message.time(),
        color = escape(color),
        nickname = escape(&message.speaker),
        text = escape(text),
    )
}

/// Minimal HTML entity escaping for text interpolated into the template.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
