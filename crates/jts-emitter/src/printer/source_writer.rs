//! Indentation-aware text buffer.

/// Output buffer that inserts indentation at the start of each line.
#[derive(Debug, Clone)]
pub struct SourceWriter {
    output: String,
    indent_unit: String,
    indent_level: usize,
    at_line_start: bool,
}

impl SourceWriter {
    /// `indent_width` spaces per indentation level.
    pub fn new(indent_width: usize) -> Self {
        SourceWriter {
            output: String::new(),
            indent_unit: " ".repeat(indent_width),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Write text that contains no newline.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write `text` followed by a newline.
    pub fn write_str_line(&mut self, text: &str) {
        self.write(text);
        self.write_line();
    }

    /// End the current line unless nothing has been written on it yet.
    pub fn ensure_line_start(&mut self) {
        if !self.at_line_start {
            self.write_line();
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.output
    }
}
