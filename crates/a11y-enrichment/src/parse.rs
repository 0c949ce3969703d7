//! Recovering per-item texts from one combined model reply.
//!
//! The reply is expected to repeat the prompt's numbering:
//!
//! ```text
//! 1. Изображение без альтернативного текста.
//!    Решение: добавьте атрибут alt.
//! 2. ...
//! ```
//!
//! A line starting with `<n>.` (for `n` within the batch) opens item `n`; the
//! rest of that line is its first fragment. Any other non-blank line is
//! appended to the open item. Text before the first numbered line is dropped.
//! Slots that stay empty are filled with [`NEEDS_ATTENTION_PLACEHOLDER`], so
//! the result always has exactly one non-empty text per input.

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Fills any slot the reply did not cover.
pub const NEEDS_ATTENTION_PLACEHOLDER: &str =
    "Требует внимания и исправления согласно стандартам WCAG 2.1.";

/// Remove `<think>...</think>` reasoning blocks. An unterminated block is cut
/// to the end of the text. The result is trimmed.
pub fn strip_think_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(THINK_OPEN) {
        out.push_str(&rest[..start]);
        match rest[start..].find(THINK_CLOSE) {
            Some(end) => rest = &rest[start + end + THINK_CLOSE.len()..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

/// Split `content` into exactly `expected` texts aligned with the prompt
/// numbering. Never returns an empty slot.
pub fn parse_numbered_reply(content: &str, expected: usize) -> Vec<String> {
    let mut slots = vec![String::new(); expected];
    let mut open: Option<usize> = None;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if let Some((number, first_fragment)) = numbered_item(line, expected) {
            let slot = &mut slots[number - 1];
            // A repeated number restarts that item.
            slot.clear();
            slot.push_str(first_fragment.trim());
            open = Some(number - 1);
            continue;
        }

        if line.is_empty() {
            continue;
        }
        if let Some(index) = open {
            let slot = &mut slots[index];
            if !slot.is_empty() {
                slot.push(' ');
            }
            slot.push_str(line);
        }
    }

    for slot in &mut slots {
        if slot.trim().is_empty() {
            *slot = NEEDS_ATTENTION_PLACEHOLDER.to_string();
        }
    }
    slots
}

/// `Some((n, rest))` if `line` starts with `<n>.` and `1 <= n <= max`.
fn numbered_item(line: &str, max: usize) -> Option<(usize, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || line.as_bytes().get(digits) != Some(&b'.') {
        return None;
    }
    let number: usize = line[..digits].parse().ok()?;
    if (1..=max).contains(&number) {
        Some((number, &line[digits + 1..]))
    } else {
        None
    }
}
