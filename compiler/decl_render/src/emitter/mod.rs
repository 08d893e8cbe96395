//! Output Emitter
//!
//! In-memory output buffer for rendering, plus the indentation helper used
//! for member blocks.

/// Indentation applied to every member block.
pub const INDENT: &str = "  ";

/// String-based emitter.
///
/// Renders build their text incrementally and take the result with
/// [`StringEmitter::output`].
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a text fragment.
    pub fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Emit a single space.
    pub fn emit_space(&mut self) {
        self.buffer.push(' ');
    }

    /// Emit a newline (Unix-style `\n`).
    pub fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Emit `items` with `separator` between consecutive items.
    pub fn emit_separated<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        separator: &str,
        mut emit_item: impl FnMut(&mut Self, T),
    ) {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.emit(separator);
            }
            emit_item(self, item);
        }
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

/// Prefix every line of `text` with `indent`.
///
/// Blank lines shorter than `indent` become `indent` itself; longer blank
/// lines are kept as they are. `\r\n`, `\n` and `\r` all end a line, and the
/// result joins lines with `\n`.
pub fn prepend_indent(text: &str, indent: &str) -> String {
    let mut result = String::with_capacity(text.len() + indent.len());
    for (i, line) in split_lines(text).enumerate() {
        if i > 0 {
            result.push('\n');
        }
        if line.trim().is_empty() {
            if line.chars().count() < indent.chars().count() {
                result.push_str(indent);
            } else {
                result.push_str(line);
            }
        } else {
            result.push_str(indent);
            result.push_str(line);
        }
    }
    result
}

/// Split on `\r\n`, `\n` or `\r`, keeping a trailing empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                let skip = if current[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[pos + skip..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
