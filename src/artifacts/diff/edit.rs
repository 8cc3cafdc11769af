//! Edit operations and edit scripts
//!
//! An edit script is an ordered `Vec<Edit>`. Reading the script front to back,
//! the non-insert runs spell out the source text and the non-delete runs spell
//! out the destination text. All lengths are counted in `char`s.

use derive_new::new;
use std::fmt::Display;

/// The kind of an edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Delete,
    Insert,
    Equal,
}

impl Operation {
    /// Single-character marker used when printing an edit
    pub fn marker(&self) -> char {
        match self {
            Operation::Delete => '-',
            Operation::Insert => '+',
            Operation::Equal => ' ',
        }
    }
}

/// A contiguous run of text tagged with the operation applied to it
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Edit {
    pub operation: Operation,
    pub text: String,
}

impl Edit {
    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(Operation::Delete, text.into())
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(Operation::Insert, text.into())
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(Operation::Equal, text.into())
    }

    pub(crate) fn from_chars(operation: Operation, text: &[char]) -> Self {
        Self::new(operation, text.iter().collect())
    }

    /// Length of the run in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_equal(&self) -> bool {
        self.operation == Operation::Equal
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.operation.marker(), self.text)
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Rebuild the source text of an edit script
pub fn text1(diffs: &[Edit]) -> String {
    diffs
        .iter()
        .filter(|edit| edit.operation != Operation::Insert)
        .map(|edit| edit.text.as_str())
        .collect()
}

/// Rebuild the destination text of an edit script
pub fn text2(diffs: &[Edit]) -> String {
    diffs
        .iter()
        .filter(|edit| edit.operation != Operation::Delete)
        .map(|edit| edit.text.as_str())
        .collect()
}

/// Levenshtein distance implied by an edit script
///
/// Each block of changes between two equalities counts as many edits as the
/// larger of its inserted and deleted char counts.
pub fn levenshtein(diffs: &[Edit]) -> usize {
    let mut distance = 0;
    let mut insertions = 0;
    let mut deletions = 0;

    for edit in diffs {
        match edit.operation {
            Operation::Insert => insertions += edit.len(),
            Operation::Delete => deletions += edit.len(),
            Operation::Equal => {
                distance += insertions.max(deletions);
                insertions = 0;
                deletions = 0;
            }
        }
    }

    distance + insertions.max(deletions)
}

/// Translate a char offset in the source text to the equivalent offset in the
/// destination text
///
/// An offset falling inside a deletion maps to the position where the deleted
/// run used to start.
pub fn x_index(diffs: &[Edit], loc: usize) -> usize {
    let mut chars1 = 0;
    let mut chars2 = 0;
    let mut last_chars1 = 0;
    let mut last_chars2 = 0;
    let mut overshoot = None;

    for edit in diffs {
        if edit.operation != Operation::Insert {
            chars1 += edit.len();
        }
        if edit.operation != Operation::Delete {
            chars2 += edit.len();
        }
        if chars1 > loc {
            overshoot = Some(edit.operation);
            break;
        }
        last_chars1 = chars1;
        last_chars2 = chars2;
    }

    match overshoot {
        Some(Operation::Delete) => last_chars2,
        _ => last_chars2 + (loc - last_chars1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn jumps_over() -> Vec<Edit> {
        vec![
            Edit::equal("jump"),
            Edit::delete("s"),
            Edit::insert("ed"),
            Edit::equal(" over "),
            Edit::delete("the"),
            Edit::insert("a"),
            Edit::equal(" lazy"),
        ]
    }

    #[rstest]
    fn rebuilds_source_and_destination(jumps_over: Vec<Edit>) {
        assert_eq!(text1(&jumps_over), "jumps over the lazy");
        assert_eq!(text2(&jumps_over), "jumped over a lazy");
    }

    #[rstest]
    #[case(vec![Edit::delete("abc"), Edit::insert("1234"), Edit::equal("xyz")], 4)]
    #[case(vec![Edit::equal("xyz"), Edit::delete("abc"), Edit::insert("1234")], 4)]
    #[case(vec![Edit::delete("abc"), Edit::equal("xyz"), Edit::insert("1234")], 7)]
    fn levenshtein_counts_change_blocks(#[case] diffs: Vec<Edit>, #[case] expected: usize) {
        assert_eq!(levenshtein(&diffs), expected);
    }

    #[test]
    fn x_index_translates_through_equality() {
        let diffs = vec![Edit::delete("a"), Edit::insert("1234"), Edit::equal("xyz")];
        assert_eq!(x_index(&diffs, 2), 5);
    }

    #[test]
    fn x_index_snaps_to_start_of_deletion() {
        let diffs = vec![Edit::equal("a"), Edit::delete("1234"), Edit::equal("xyz")];
        assert_eq!(x_index(&diffs, 3), 1);
    }

    #[test]
    fn edit_length_counts_chars_not_bytes() {
        let edit = Edit::insert("\u{0682}ab");
        assert_eq!(edit.len(), 3);
        assert_eq!(edit.to_string(), "+\u{0682}ab");
    }
}
