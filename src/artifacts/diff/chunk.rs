use crate::artifacts::diff::config::Granularity;
use crate::artifacts::diff::edit::{Edit, Operation};
use crate::artifacts::diff::token::Token;

/// Maximal run of tokens sharing one operation
///
/// `Equal` chunks carry the same tokens on both sides, `Insert` chunks have
/// an empty `a_tokens` and `Delete` chunks an empty `b_tokens`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffChunk<T = Token> {
    pub op: Operation,
    pub a_tokens: Vec<T>,
    pub b_tokens: Vec<T>,
}

impl<T: Clone> DiffChunk<T> {
    fn start(op: Operation) -> Self {
        Self {
            op,
            a_tokens: Vec::new(),
            b_tokens: Vec::new(),
        }
    }

    fn push(&mut self, value: T) {
        match self.op {
            Operation::Equal => {
                self.a_tokens.push(value.clone());
                self.b_tokens.push(value);
            }
            Operation::Delete => self.a_tokens.push(value),
            Operation::Insert => self.b_tokens.push(value),
        }
    }

    /// Number of tokens this chunk spans on its own side.
    pub fn len(&self) -> usize {
        match self.op {
            Operation::Insert => self.b_tokens.len(),
            Operation::Equal | Operation::Delete => self.a_tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The same chunk seen from the other direction (`b` against `a`).
    pub fn inverted(&self) -> Self {
        Self {
            op: self.op.inverse(),
            a_tokens: self.b_tokens.clone(),
            b_tokens: self.a_tokens.clone(),
        }
    }
}

/// Run-length compaction of a per-token edit script.
pub fn merge<T: Clone>(edits: impl IntoIterator<Item = Edit<T>>) -> Vec<DiffChunk<T>> {
    let mut chunks: Vec<DiffChunk<T>> = Vec::new();

    for edit in edits {
        let op = edit.operation();
        match chunks.last_mut() {
            Some(chunk) if chunk.op == op => chunk.push(edit.into_value()),
            _ => {
                let mut chunk = DiffChunk::start(op);
                chunk.push(edit.into_value());
                chunks.push(chunk);
            }
        }
    }

    chunks
}

/// Tokens of the old text, in order, recovered from the chunks.
pub fn old_tokens<T: Clone>(chunks: &[DiffChunk<T>]) -> Vec<T> {
    chunks
        .iter()
        .filter(|chunk| chunk.op != Operation::Insert)
        .flat_map(|chunk| chunk.a_tokens.iter().cloned())
        .collect()
}

/// Tokens of the new text, in order, recovered from the chunks.
pub fn new_tokens<T: Clone>(chunks: &[DiffChunk<T>]) -> Vec<T> {
    chunks
        .iter()
        .filter(|chunk| chunk.op != Operation::Delete)
        .flat_map(|chunk| chunk.b_tokens.iter().cloned())
        .collect()
}

/// Regroups chunks into whole-line chunks for the line-oriented views.
///
/// Line chunks are returned as they are. Word and char chunks are replayed
/// piece by piece, carrying partial lines across chunk boundaries: a line stays
/// `Equal` only when both texts end it together and no token on it was
/// inserted or deleted. Every other line is reported once as deleted from
/// the old text and once as inserted into the new one.
pub fn line_chunks(chunks: &[DiffChunk], granularity: Granularity) -> Vec<DiffChunk> {
    if granularity == Granularity::Line {
        return chunks.to_vec();
    }

    let mut projector = LineProjector::default();
    for chunk in chunks {
        let tokens = match chunk.op {
            Operation::Insert => &chunk.b_tokens,
            Operation::Equal | Operation::Delete => &chunk.a_tokens,
        };
        projector.push(chunk.op, &tokens.concat());
    }

    merge(projector.finish())
}

/// The line of one text currently being assembled
#[derive(Debug, Default)]
struct PartialLine {
    text: String,
    changed: bool,
    /// The text has at least one token, hence at least one line
    seen: bool,
}

impl PartialLine {
    fn append(&mut self, piece: &str, changed: bool) {
        self.seen = true;
        self.text.push_str(piece);
        self.changed |= changed && !piece.is_empty();
    }

    /// Closes the line at a `\n`, dropping the `\r` of a `\r\n` break.
    fn end(&mut self) -> String {
        if self.text.ends_with('\r') {
            self.text.pop();
        }
        self.rest()
    }

    fn rest(&mut self) -> String {
        self.changed = false;
        std::mem::take(&mut self.text)
    }

    /// The other text ended its line alone, so this one can no longer match it.
    fn detach(&mut self) {
        if !self.text.is_empty() {
            self.changed = true;
        }
    }
}

#[derive(Debug, Default)]
struct LineProjector {
    old: PartialLine,
    new: PartialLine,
    deleted: Vec<String>,
    inserted: Vec<String>,
    edits: Vec<Edit<String>>,
}

impl LineProjector {
    fn push(&mut self, op: Operation, text: &str) {
        let mut pieces = text.split('\n').peekable();

        while let Some(piece) = pieces.next() {
            match op {
                Operation::Equal => {
                    self.old.append(piece, false);
                    self.new.append(piece, false);
                }
                Operation::Delete => self.old.append(piece, true),
                Operation::Insert => self.new.append(piece, true),
            }

            if pieces.peek().is_some() {
                self.end_line(op);
            }
        }
    }

    fn end_line(&mut self, op: Operation) {
        match op {
            Operation::Equal => self.pair(PartialLine::end),
            Operation::Delete => {
                self.deleted.push(self.old.end());
                self.new.detach();
            }
            Operation::Insert => {
                self.inserted.push(self.new.end());
                self.old.detach();
            }
        }
    }

    fn pair(&mut self, take: fn(&mut PartialLine) -> String) {
        if self.old.changed || self.new.changed {
            self.deleted.push(take(&mut self.old));
            self.inserted.push(take(&mut self.new));
        } else {
            self.flush_changes();
            let line = take(&mut self.old);
            take(&mut self.new);
            self.edits.push(Edit::Equal { value: line });
        }
    }

    fn flush_changes(&mut self) {
        self.edits
            .extend(self.deleted.drain(..).map(|value| Edit::Delete { value }));
        self.edits
            .extend(self.inserted.drain(..).map(|value| Edit::Insert { value }));
    }

    fn finish(mut self) -> Vec<Edit<String>> {
        match (self.old.seen, self.new.seen) {
            (true, true) => self.pair(PartialLine::rest),
            (true, false) => self.deleted.push(self.old.rest()),
            (false, true) => self.inserted.push(self.new.rest()),
            (false, false) => {}
        }
        self.flush_changes();

        self.edits
    }
}
