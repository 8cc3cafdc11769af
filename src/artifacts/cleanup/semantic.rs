//! Semantic cleanup
//!
//! Trades minimality for readability. Short equalities wedged between larger
//! edits are folded into the edits, single edits are slid onto word and line
//! boundaries, and a delete/insert pair whose ends overlap gives the overlap
//! back as an equality.

use crate::artifacts::cleanup::merge::cleanup_merge;
use crate::artifacts::diff::edit::{Edit, Operation};
use crate::artifacts::diff::similarity::{common_overlap, common_suffix};

/// Reduce the number of edits by eliminating semantically trivial equalities
pub fn cleanup_semantic(diffs: &mut Vec<Edit>) {
    if eliminate_trivial_equalities(diffs) {
        cleanup_merge(diffs);
    }
    cleanup_semantic_lossless(diffs);
    resolve_overlaps(diffs);
}

/// Edit sizes seen on one side of an equality
#[derive(Debug, Clone, Copy, Default)]
struct ChangeLengths {
    insertions: usize,
    deletions: usize,
}

impl ChangeLengths {
    fn largest(&self) -> usize {
        self.insertions.max(self.deletions)
    }
}

/// Fold every equality that is no longer than the edits on both of its sides
/// into those edits. Returns whether any equality was folded.
fn eliminate_trivial_equalities(diffs: &mut Vec<Edit>) -> bool {
    let mut changed = false;
    // Indices of candidate equalities, the latest on top.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    let mut before = ChangeLengths::default();
    let mut after = ChangeLengths::default();
    let mut pointer = 0;

    while pointer < diffs.len() {
        let edit = &diffs[pointer];
        match edit.operation {
            Operation::Equal => {
                equalities.push(pointer);
                before = after;
                after = ChangeLengths::default();
                last_equality = Some(edit.text.clone());
            }
            Operation::Insert => after.insertions += edit.len(),
            Operation::Delete => after.deletions += edit.len(),
        }

        let eliminate = match (&last_equality, equalities.last()) {
            (Some(equality), Some(_)) if !edit.is_equal() => {
                let length = equality.chars().count();
                length <= before.largest() && length <= after.largest()
            }
            _ => false,
        };

        if eliminate {
            if let (Some(equality), Some(index)) = (last_equality.take(), equalities.pop()) {
                log::trace!("folding equality {equality:?} into its neighbours");
                diffs.insert(index, Edit::delete(equality));
                diffs[index + 1].operation = Operation::Insert;
            }
            // The previous equality needs to be reevaluated.
            equalities.pop();
            before = ChangeLengths::default();
            after = ChangeLengths::default();
            changed = true;
            pointer = equalities.last().map_or(0, |&index| index + 1);
            continue;
        }

        pointer += 1;
    }

    changed
}

/// Slide single edits surrounded by equalities sideways so that they line up
/// with a word or line boundary
///
/// e.g: `The c<ins>at c</ins>ame.` -> `The <ins>cat </ins>came.`
pub fn cleanup_semantic_lossless(diffs: &mut Vec<Edit>) {
    let mut removed_equality = false;
    let mut pointer = 1;

    while pointer + 1 < diffs.len() {
        if !(diffs[pointer - 1].is_equal() && diffs[pointer + 1].is_equal()) {
            pointer += 1;
            continue;
        }

        let mut equality1: Vec<char> = diffs[pointer - 1].text.chars().collect();
        let mut edit: Vec<char> = diffs[pointer].text.chars().collect();
        let mut equality2: Vec<char> = diffs[pointer + 1].text.chars().collect();

        // First, shift the edit as far left as possible.
        let common_offset = common_suffix(&equality1, &edit);
        if common_offset != 0 {
            let common = edit.split_off(edit.len() - common_offset);
            equality1.truncate(equality1.len() - common_offset);
            edit = [common.as_slice(), edit.as_slice()].concat();
            equality2 = [common.as_slice(), equality2.as_slice()].concat();
        }

        // Second, step right one char at a time, keeping the best fit.
        let mut best = (equality1.clone(), edit.clone(), equality2.clone());
        let mut best_score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
        while !edit.is_empty() && !equality2.is_empty() && edit[0] == equality2[0] {
            let moved = equality2.remove(0);
            equality1.push(edit.remove(0));
            edit.push(moved);

            let score = boundary_score(&equality1, &edit) + boundary_score(&edit, &equality2);
            // The later position wins a tie.
            if score >= best_score {
                best_score = score;
                best = (equality1.clone(), edit.clone(), equality2.clone());
            }
        }

        let (best_equality1, best_edit, best_equality2) = best;
        let best_equality1: String = best_equality1.into_iter().collect();
        if diffs[pointer - 1].text == best_equality1 {
            pointer += 1;
            continue;
        }

        if best_equality1.is_empty() {
            diffs.remove(pointer - 1);
            pointer -= 1;
            removed_equality = true;
        } else {
            diffs[pointer - 1].text = best_equality1;
        }
        diffs[pointer].text = best_edit.into_iter().collect();
        if best_equality2.is_empty() {
            diffs.remove(pointer + 1);
            removed_equality = true;
        } else {
            diffs[pointer + 1].text = best_equality2.into_iter().collect();
            pointer += 1;
        }
        pointer = pointer.max(1);
    }

    // A removed equality can leave two edits of the same kind side by side.
    if removed_equality {
        cleanup_merge(diffs);
    }
}

/// How well the seam between `one` and `two` falls on a logical boundary
///
/// 5 at an edge of the text, otherwise one point each for a non-alphanumeric
/// char, whitespace, a line break and a blank line, each level requiring the
/// previous one.
fn boundary_score(one: &[char], two: &[char]) -> u8 {
    let (Some(&char1), Some(&char2)) = (one.last(), two.first()) else {
        return 5;
    };

    let mut score = 0;
    if !char1.is_ascii_alphanumeric() || !char2.is_ascii_alphanumeric() {
        score += 1;
        if char1.is_whitespace() || char2.is_whitespace() {
            score += 1;
            if is_line_break(char1) || is_line_break(char2) {
                score += 1;
                if ends_with_blank_line(one) || starts_with_blank_line(two) {
                    score += 1;
                }
            }
        }
    }
    score
}

fn is_line_break(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn ends_with_blank_line(text: &[char]) -> bool {
    text.ends_with(&['\n', '\n']) || text.ends_with(&['\n', '\r', '\n'])
}

fn starts_with_blank_line(text: &[char]) -> bool {
    let text = text.strip_prefix(&['\r']).unwrap_or(text);
    let Some(text) = text.strip_prefix(&['\n']) else {
        return false;
    };
    let text = text.strip_prefix(&['\r']).unwrap_or(text);
    text.starts_with(&['\n'])
}

/// Give back the overlap of every delete/insert pair as an equality
///
/// e.g: `<del>abcxxx</del><ins>xxxdef</ins>` -> `<del>abc</del>xxx<ins>def</ins>`
fn resolve_overlaps(diffs: &mut Vec<Edit>) {
    let mut emptied = false;
    let mut pointer = 1;

    while pointer < diffs.len() {
        if diffs[pointer - 1].operation == Operation::Delete
            && diffs[pointer].operation == Operation::Insert
        {
            let deletion: Vec<char> = diffs[pointer - 1].text.chars().collect();
            let insertion: Vec<char> = diffs[pointer].text.chars().collect();
            let overlap = common_overlap(&deletion, &insertion);

            if overlap > 0 {
                diffs.insert(
                    pointer,
                    Edit::from_chars(Operation::Equal, &insertion[..overlap]),
                );
                diffs[pointer - 1] =
                    Edit::from_chars(Operation::Delete, &deletion[..deletion.len() - overlap]);
                diffs[pointer + 1] = Edit::from_chars(Operation::Insert, &insertion[overlap..]);
                emptied |= overlap == deletion.len() || overlap == insertion.len();
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }

    if emptied {
        diffs.retain(|edit| !edit.is_empty());
        cleanup_merge(diffs);
    }
}
