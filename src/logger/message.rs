//! Bounded message rendering.

use std::fmt::{self, Write};

/// Maximum rendered message length in bytes.
pub const MESSAGE_CAPACITY: usize = 1023;

/// Maximum process name length in characters.
pub const MAX_PROCESS_NAME_LEN: usize = 127;

/// Render `args` into a string of at most `capacity` bytes.
///
/// Output past the capacity is dropped without error. The cut never splits a
/// UTF-8 character.
pub fn render_bounded(args: fmt::Arguments<'_>, capacity: usize) -> String {
    // Fast path for plain literals.
    if let Some(s) = args.as_str() {
        return truncate_bytes(s, capacity).to_string();
    }

    let mut buf = BoundedWriter {
        buf: String::new(),
        capacity,
    };
    // Err here only means the writer filled up.
    let _ = buf.write_fmt(args);
    buf.buf
}

/// Truncate `s` to at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn truncate_bytes(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut cut = max_bytes;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    &s[..cut]
}

struct BoundedWriter {
    buf: String,
    capacity: usize,
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.capacity - self.buf.len();
        if s.len() <= remaining {
            self.buf.push_str(s);
            return Ok(());
        }
        self.buf.push_str(truncate_bytes(s, remaining));
        Err(fmt::Error)
    }
}
