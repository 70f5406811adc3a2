//! # Text Cleaner
//!
//! Strips terminal artifacts from swarm output so it reads as plain text.
//!
//! ## What gets rewritten
//!
//! - ANSI SGR sequences (`ESC [ ... m`), both as the raw control byte and
//!   as the `\u001b[...m` text some loggers leave behind after escaping it
//! - Box Drawing glyphs (U+2500..U+257F), mapped onto `+ - | =`
//!
//! Everything else is preserved verbatim.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::TEXT_KEY;

/// Raw or textually escaped SGR sequence
static ANSI_SGR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\x1b|\\u001b)\[[0-9;]*m").expect("valid ANSI pattern"));

// ============================================================================
// Single Values
// ============================================================================

/// Clean one piece of text.
///
/// Idempotent: `clean_text(&clean_text(s)) == clean_text(s)` for every `s`.
pub fn clean_text(text: &str) -> String {
    // Box glyphs go first: `╲` becomes a backslash, which could otherwise
    // complete a `\u001b[..m` sequence after stripping already ran.
    let mut cleaned: String = text.chars().map(box_to_ascii).collect();

    // Removing one sequence can splice two halves into a new one.
    while ANSI_SGR.is_match(&cleaned) {
        cleaned = ANSI_SGR.replace_all(&cleaned, "").into_owned();
    }

    cleaned
}

/// Clean a JSON value if it is a string, otherwise return it unchanged
pub fn clean_value(value: &Value) -> Value {
    match value {
        Value::String(text) => Value::String(clean_text(text)),
        other => other.clone(),
    }
}

/// ASCII stand-in for a Box Drawing character; other characters pass through
fn box_to_ascii(c: char) -> char {
    if !('\u{2500}'..='\u{257F}').contains(&c) {
        return c;
    }

    match c {
        '═' => '=',
        '║' => '|',
        '─' | '━' | '┄' | '┅' | '┈' | '┉' | '╌' | '╍' | '╴' | '╶' | '╸' | '╺' | '╼' | '╾' => {
            '-'
        }
        '│' | '┃' | '┆' | '┇' | '┊' | '┋' | '╎' | '╏' | '╵' | '╷' | '╹' | '╻' | '╽' | '╿' => {
            '|'
        }
        '╱' => '/',
        '╲' => '\\',
        '╳' => 'X',
        // corners, tees, crosses
        _ => '+',
    }
}

// ============================================================================
// Fragment Batches
// ============================================================================

/// Clean the `text` of every fragment.
///
/// Mappings with a `text` key get that value cleaned; every other element
/// is copied as is. Length and order always match the input.
pub fn clean_fragments(fragments: &[Value]) -> Vec<Value> {
    fragments.iter().map(clean_fragment).collect()
}

fn clean_fragment(fragment: &Value) -> Value {
    match fragment {
        Value::Object(map) if map.contains_key(TEXT_KEY) => {
            let mut cleaned = map.clone();
            if let Some(text) = cleaned.get_mut(TEXT_KEY) {
                *text = clean_value(text);
            }
            Value::Object(cleaned)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strips_ansi_and_box_drawing() {
        assert_eq!(clean_text("\x1b[31m╭─╮\x1b[0m"), "+-+");
    }

    #[test]
    fn test_strips_escaped_ansi() {
        assert_eq!(clean_text(r"\u001b[1;32mok\u001b[0m"), "ok");
    }

    #[test]
    fn test_box_drawing_mapping() {
        assert_eq!(clean_text("╔═╗"), "+=+");
        assert_eq!(clean_text("║x│"), "|x|");
        assert_eq!(clean_text("├┼┤└┴┘"), "++++++");
        assert_eq!(clean_text("┏━┓"), "+-+");
        assert_eq!(clean_text("╱╳╲"), "/X\\");
    }

    #[test]
    fn test_preserves_other_text() {
        let text = "Agent agent_1 Response: naïve café ✓\n\tdone [1;2]";
        assert_eq!(clean_text(text), text);
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "\x1b[31m╭─╮\x1b[0m",
            "\x1b[\x1b[0m31mred",
            "\\u001\x1b[0mb[1mhidden",
            "╲u001b[0mtail",
            "plain",
            "",
        ];
        for sample in samples {
            let once = clean_text(sample);
            assert_eq!(clean_text(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_spliced_sequence_is_removed() {
        assert_eq!(clean_text("\x1b[\x1b[0m31mred"), "red");
    }

    #[test]
    fn test_clean_value_passthrough() {
        assert_eq!(clean_value(&json!(42)), json!(42));
        assert_eq!(clean_value(&json!(null)), json!(null));
        assert_eq!(clean_value(&json!({"a": "─"})), json!({"a": "─"}));
        assert_eq!(clean_value(&json!("─")), json!("-"));
    }

    #[test]
    fn test_clean_fragments_preserves_shape() {
        let fragments = vec![
            json!({"text": "\x1b[1m│\x1b[0m", "type": "text"}),
            json!({"type": "image"}),
            json!("loose string ─"),
            json!({"text": 7}),
        ];

        let cleaned = clean_fragments(&fragments);

        assert_eq!(cleaned.len(), fragments.len());
        assert_eq!(cleaned[0], json!({"text": "|", "type": "text"}));
        assert_eq!(cleaned[1], fragments[1]);
        assert_eq!(cleaned[2], fragments[2]);
        assert_eq!(cleaned[3], fragments[3]);
    }

    #[test]
    fn test_clean_fragments_keeps_field_order() {
        let fragments = vec![json!({"z": 1, "text": "─", "a": 2})];
        let cleaned = clean_fragments(&fragments);
        let keys: Vec<&String> = cleaned[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "text", "a"]);
    }
}
