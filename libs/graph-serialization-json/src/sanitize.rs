//! Repair for payloads that carry raw control characters inside strings.
//!
//! Some mail and document bodies arrive with unescaped bytes below `0x20`
//! inside string literals, which strict JSON rejects. Only bytes inside strings
//! are touched; structure and already-escaped sequences pass through unchanged.

use std::borrow::Cow;

/// Escape raw control characters that appear inside JSON string literals.
///
/// Returns the input unchanged (borrowed) when nothing needed escaping.
#[must_use]
pub fn sanitize_json_bytes(input: &[u8]) -> Cow<'_, [u8]> {
    let mut output: Option<Vec<u8>> = None;
    let mut in_string = false;
    let mut escaped = false;

    for (index, &byte) in input.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            } else if byte < 0x20 {
                let buffer = output.get_or_insert_with(|| {
                    let mut buffer = Vec::with_capacity(input.len() + 16);
                    buffer.extend_from_slice(&input[..index]);
                    buffer
                });
                push_escape(buffer, byte);
                continue;
            }
        } else if byte == b'"' {
            in_string = true;
        }
        if let Some(buffer) = output.as_mut() {
            buffer.push(byte);
        }
    }

    match output {
        Some(buffer) => Cow::Owned(buffer),
        None => Cow::Borrowed(input),
    }
}

fn push_escape(buffer: &mut Vec<u8>, byte: u8) {
    match byte {
        0x08 => buffer.extend_from_slice(b"\\b"),
        b'\t' => buffer.extend_from_slice(b"\\t"),
        b'\n' => buffer.extend_from_slice(b"\\n"),
        0x0c => buffer.extend_from_slice(b"\\f"),
        b'\r' => buffer.extend_from_slice(b"\\r"),
        other => buffer.extend_from_slice(format!("\\u{other:04x}").as_bytes()),
    }
}
