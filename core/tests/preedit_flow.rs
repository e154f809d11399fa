//! Integration checks for the core plumbing: buffer, encoder, and context
//! working together the way an engine drives them.

use libsinhala_core::{ImeContext, KeyEvent, KeySym, PreeditBuffer, TextEncoder, Utf8Encoder};

#[test]
fn test_buffer_to_commit_flow() {
    let mut buffer = PreeditBuffer::new();
    buffer.push('\u{0D9A}');
    buffer.push('\u{0DCF}');

    let text = Utf8Encoder.encode(buffer.as_slice()).expect("encode");
    buffer.clear();

    let mut context = ImeContext::new();
    context.commit_text = text;
    assert_eq!(context.take_commit(), "\u{0D9A}\u{0DCF}");
    assert!(buffer.is_empty());
}

#[test]
fn test_preview_does_not_consume_the_buffer() {
    let mut buffer = PreeditBuffer::new();
    buffer.push('\u{0DC0}');

    let preview = Utf8Encoder.encode(buffer.as_slice()).expect("encode");
    assert_eq!(preview, "\u{0DC0}");
    assert_eq!(buffer.len(), 1);
}

#[test]
fn test_key_events_survive_the_host_boundary() {
    // The host hands over raw (sym, state) pairs; printable keys must map
    // onto the characters the tables are keyed by.
    let event = KeyEvent::from_char('k');
    assert_eq!(event.sym.to_char(), Some('k'));

    let space = KeyEvent::from_char(' ');
    assert_eq!(space.sym, KeySym::SPACE);
}
