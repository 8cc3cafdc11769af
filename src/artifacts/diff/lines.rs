//! Line tokenizer for the line-mode speedup
//!
//! Every distinct line is mapped to one synthetic `char` so the character
//! level engine can diff whole lines at a time. Index `i` of the line table is
//! encoded as the scalar value `i`, stepping over the surrogate gap, which
//! leaves room for about a million distinct lines per call.

use crate::artifacts::diff::edit::Edit;
use std::collections::HashMap;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

/// Lines seen by one tokenizer call; index 0 is an empty placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    lines: Vec<String>,
}

/// Output of [`lines_to_chars`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinesToChars {
    pub chars1: String,
    pub chars2: String,
    pub line_table: LineTable,
}

impl LineTable {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line encoded by `token`, or `None` for a char this table never issued
    pub fn line(&self, token: char) -> Option<&str> {
        self.lines.get(token_to_index(token)).map(String::as_str)
    }
}

/// Encode both texts as one token per line over a shared line table
pub fn lines_to_chars(text1: &str, text2: &str) -> LinesToChars {
    let mut builder = LineTableBuilder::default();
    let chars1 = builder.munge(text1);
    let chars2 = builder.munge(text2);

    LinesToChars {
        chars1,
        chars2,
        line_table: LineTable {
            lines: builder.lines,
        },
    }
}

/// Rewrite every edit's tokens back into the lines they stand for
pub fn chars_to_lines(diffs: &mut [Edit], line_table: &LineTable) {
    for edit in diffs.iter_mut() {
        edit.text = edit
            .text
            .chars()
            .filter_map(|token| line_table.line(token))
            .collect();
    }
}

struct LineTableBuilder {
    lines: Vec<String>,
    index: HashMap<String, char>,
}

impl Default for LineTableBuilder {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            index: HashMap::new(),
        }
    }
}

impl LineTableBuilder {
    fn munge(&mut self, text: &str) -> String {
        let mut tokens = String::new();
        let mut rest = text;

        while !rest.is_empty() {
            // Once the token space runs out, the remainder becomes one last line.
            let line_end = if self.is_full() {
                rest.len()
            } else {
                rest.find('\n').map_or(rest.len(), |i| i + 1)
            };
            let (line, tail) = rest.split_at(line_end);
            if let Some(token) = self.intern(line) {
                tokens.push(token);
            }
            rest = tail;
        }

        tokens
    }

    fn intern(&mut self, line: &str) -> Option<char> {
        if let Some(&token) = self.index.get(line) {
            return Some(token);
        }

        let token = index_to_token(self.lines.len())?;
        self.lines.push(line.to_string());
        self.index.insert(line.to_string(), token);
        Some(token)
    }

    // One slot stays reserved for the catch-all remainder line.
    fn is_full(&self) -> bool {
        index_to_token(self.lines.len() + 1).is_none()
    }
}

fn index_to_token(index: usize) -> Option<char> {
    let value = u32::try_from(index).ok()?;
    let value = if value >= SURROGATE_START {
        value.checked_add(SURROGATE_LEN)?
    } else {
        value
    };
    char::from_u32(value)
}

fn token_to_index(token: char) -> usize {
    let value = token as u32;
    let value = if value >= SURROGATE_START + SURROGATE_LEN {
        value - SURROGATE_LEN
    } else {
        value
    };
    value as usize
}
