// Comment emission, attached and orphan.

use super::Printer;
use jts_ast::{Comment, CommentKind};
use jts_common::Span;

/// Orphan comments of one container, consumed in source order as its
/// children are printed.
pub(super) struct OrphanComments<'c> {
    pending: Vec<&'c Comment>,
    next: usize,
}

impl<'c> OrphanComments<'c> {
    pub(super) fn new(comments: &'c [Comment]) -> Self {
        let mut pending: Vec<&Comment> = comments.iter().collect();
        pending.sort_by_key(|c| c.span.start);
        OrphanComments { pending, next: 0 }
    }

    /// Comments that start before `span`. Synthesized children have no
    /// position and take nothing.
    pub(super) fn take_before(&mut self, span: Span) -> &[&'c Comment] {
        let start = self.next;
        if !span.is_synthetic() {
            while self.next < self.pending.len() && self.pending[self.next].span.start < span.start
            {
                self.next += 1;
            }
        }
        &self.pending[start..self.next]
    }

    pub(super) fn take_rest(&mut self) -> &[&'c Comment] {
        let start = self.next;
        self.next = self.pending.len();
        &self.pending[start..]
    }
}

impl<'a> Printer<'a> {
    /// Print `comment` on its own line(s).
    pub(super) fn print_comment(&mut self, comment: &Comment) {
        self.writer.ensure_line_start();
        match comment.kind {
            CommentKind::Line => {
                let text = format!("//{}", comment.content.trim_end());
                self.write_str_line(&text);
            }
            CommentKind::Block => self.print_block_comment("/*", &comment.content),
            CommentKind::Javadoc => self.print_block_comment("/**", &comment.content),
        }
    }

    /// Continuation lines are re-indented; a leading `*` is aligned under
    /// the opening delimiter.
    fn print_block_comment(&mut self, open: &str, content: &str) {
        self.write(open);
        let mut lines = content.split('\n');
        let first = lines.next().unwrap_or_default();
        let mut last_line_empty = false;
        if content.contains('\n') {
            self.write(first.trim_end());
            for line in lines {
                self.write_line();
                let line = line.trim();
                last_line_empty = line.is_empty();
                if line.starts_with('*') {
                    self.write(" ");
                }
                self.write(line);
            }
        } else {
            self.write(content);
        }
        if last_line_empty {
            self.write(" ");
        }
        self.write("*/");
        self.write_line();
    }

    pub(super) fn print_orphans_before(&mut self, orphans: &mut OrphanComments<'_>, span: Span) {
        for comment in orphans.take_before(span) {
            self.print_comment(comment);
        }
    }

    pub(super) fn print_remaining_orphans(&mut self, orphans: &mut OrphanComments<'_>) {
        for comment in orphans.take_rest() {
            self.print_comment(comment);
        }
    }
}
