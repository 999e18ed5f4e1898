//! Source spans.
//!
//! Spans are byte offsets into the Java source as reported by the
//! front end. Nodes synthesized by transform passes carry the empty span.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in the Java source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Span used for nodes that do not come from source text.
    pub const fn synthetic() -> Self {
        Span { start: 0, end: 0 }
    }

    /// Whether this span was produced by a transform rather than the parser.
    pub const fn is_synthetic(&self) -> bool {
        self.start == 0 && self.end == 0
    }

    /// Whether `other` lies entirely within this span.
    pub const fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
