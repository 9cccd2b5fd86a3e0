//! Table block builder.
//!
//! Buffers consecutive pipe-delimited lines and turns them into a [`Table`]
//! once the block ends. Row 0 is the header, row 1 is the dashed separator
//! and is always dropped, everything after is body.

use crate::cell::{build_cell, normalize, verbatim_cell};
use crate::classify::{classify, is_commentary_header};
use crate::ir::{Table, TableCell};
use crate::options::{Dialect, RenderOptions};

/// A trimmed line that both starts and ends with a pipe.
pub fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Splits a row on unescaped pipes.
///
/// `\|` is kept as a literal pipe. The empty fields produced by the row's
/// outer pipes are dropped and every field is trimmed.
pub fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.trim().chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                current.push('|');
            }
            '|' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    if fields.first().is_some_and(|f| f.trim().is_empty()) {
        fields.remove(0);
    }
    if fields.last().is_some_and(|f| f.trim().is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Outside,
    InTable(Vec<Vec<String>>),
}

/// Outcome of offering one line to the builder.
#[derive(Debug)]
pub enum Feed {
    /// The line was a table row and has been buffered.
    Consumed,
    /// The line is not part of a table. `flushed` holds the table the line
    /// just terminated, if one was open.
    Passed { flushed: Option<Table> },
}

/// Two-state machine over reply lines: `Outside` and `InTable`.
#[derive(Debug)]
pub struct TableBlockBuilder<'a> {
    options: &'a RenderOptions,
    state: State,
}

impl<'a> TableBlockBuilder<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            state: State::Outside,
        }
    }

    pub fn in_table(&self) -> bool {
        matches!(self.state, State::InTable(_))
    }

    pub fn feed(&mut self, line: &str) -> Feed {
        if is_table_line(line) {
            let row = split_row(line);
            match &mut self.state {
                State::InTable(rows) => rows.push(row),
                State::Outside => self.state = State::InTable(vec![row]),
            }
            return Feed::Consumed;
        }
        Feed::Passed {
            flushed: self.finish(),
        }
    }

    /// Flushes whatever is buffered. Call at end of input so an unterminated
    /// block is not lost.
    pub fn finish(&mut self) -> Option<Table> {
        match std::mem::take(&mut self.state) {
            State::Outside => None,
            State::InTable(rows) => Some(self.build(rows)),
        }
    }

    fn build(&self, rows: Vec<Vec<String>>) -> Table {
        let mut rows = rows.into_iter();
        let header = rows.next().unwrap_or_default();
        let commentary: Vec<bool> = header
            .iter()
            .map(|h| {
                self.options.dialect == Dialect::Analysis
                    && is_commentary_header(h, &self.options.commentary_marker)
            })
            .collect();

        let body = rows
            .skip(1)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(column, raw)| self.build_cell(raw, commentary.get(column).copied()))
                    .collect()
            })
            .collect();

        Table { header, rows: body }
    }

    fn build_cell(&self, raw: &str, commentary: Option<bool>) -> TableCell {
        match (self.options.dialect, commentary) {
            (Dialect::Understanding, _) => TableCell::Plain(verbatim_cell(raw)),
            (Dialect::Analysis, Some(true)) => TableCell::Commentary(classify(raw, &normalize(raw))),
            (Dialect::Analysis, _) => TableCell::Plain(build_cell(raw)),
        }
    }
}
