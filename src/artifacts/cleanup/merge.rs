//! Merge cleanup
//!
//! Normalizes a raw script: runs of edits between two equalities collapse into
//! at most one delete followed by one insert, text shared by both ends of such
//! a pair moves into the neighbouring equalities, and single edits slide over
//! an equality when that lets two equalities merge.

use crate::artifacts::diff::edit::{Edit, Operation};
use crate::artifacts::diff::similarity::{common_prefix, common_suffix};
use std::iter;

/// Merge like edits, factor out shared text and slide edits to merge equalities
pub fn cleanup_merge(diffs: &mut Vec<Edit>) {
    let mut passes = 0;
    loop {
        passes += 1;
        *diffs = coalesce(std::mem::take(diffs));
        if !slide(diffs) {
            break;
        }
    }
    log::trace!("merge cleanup settled after {passes} passes");
}

/// Rebuild the script with every run of edits reduced to one delete and one insert
fn coalesce(diffs: Vec<Edit>) -> Vec<Edit> {
    let mut merged: Vec<Edit> = Vec::with_capacity(diffs.len());
    let mut text_delete: Vec<char> = Vec::new();
    let mut text_insert: Vec<char> = Vec::new();

    // Empty edits mark no boundary. The trailing empty equality flushes the last run.
    let edits = diffs.into_iter().filter(|edit| !edit.is_empty());
    for edit in edits.chain(iter::once(Edit::equal(""))) {
        match edit.operation {
            Operation::Insert => text_insert.extend(edit.text.chars()),
            Operation::Delete => text_delete.extend(edit.text.chars()),
            Operation::Equal => {
                let mut equality = edit.text;

                if !text_delete.is_empty() && !text_insert.is_empty() {
                    let prefix_length = common_prefix(&text_insert, &text_delete);
                    if prefix_length != 0 {
                        append_equality(&mut merged, text_insert[..prefix_length].iter().collect());
                        text_insert.drain(..prefix_length);
                        text_delete.drain(..prefix_length);
                    }

                    let suffix_length = common_suffix(&text_insert, &text_delete);
                    if suffix_length != 0 {
                        let suffix: String =
                            text_insert[text_insert.len() - suffix_length..].iter().collect();
                        equality.insert_str(0, &suffix);
                        text_insert.truncate(text_insert.len() - suffix_length);
                        text_delete.truncate(text_delete.len() - suffix_length);
                    }
                }

                if !text_delete.is_empty() {
                    merged.push(Edit::from_chars(Operation::Delete, &text_delete));
                }
                if !text_insert.is_empty() {
                    merged.push(Edit::from_chars(Operation::Insert, &text_insert));
                }
                text_delete.clear();
                text_insert.clear();

                if !equality.is_empty() {
                    append_equality(&mut merged, equality);
                }
            }
        }
    }

    merged
}

fn append_equality(merged: &mut Vec<Edit>, text: String) {
    if let Some(previous) = merged.last_mut().filter(|edit| edit.is_equal()) {
        previous.text.push_str(&text);
    } else {
        merged.push(Edit::equal(text));
    }
}

/// Slide single edits surrounded by equalities over one of their neighbours
///
/// e.g: `A<ins>BA</ins>C` -> `<ins>AB</ins>AC`. Returns whether anything moved.
fn slide(diffs: &mut Vec<Edit>) -> bool {
    let mut changed = false;
    let mut pointer = 1;

    while pointer + 1 < diffs.len() {
        if diffs[pointer - 1].is_equal() && diffs[pointer + 1].is_equal() {
            let previous = diffs[pointer - 1].text.clone();
            let next = diffs[pointer + 1].text.clone();
            let text = diffs[pointer].text.clone();

            if text.ends_with(&previous) {
                // Shift the edit over the previous equality.
                let kept = &text[..text.len() - previous.len()];
                diffs[pointer].text = format!("{previous}{kept}");
                diffs[pointer + 1].text = format!("{previous}{next}");
                diffs.remove(pointer - 1);
                changed = true;
            } else if text.starts_with(&next) {
                // Shift the edit over the next equality.
                let kept = &text[next.len()..];
                diffs[pointer].text = format!("{kept}{next}");
                diffs[pointer - 1].text.push_str(&next);
                diffs.remove(pointer + 1);
                changed = true;
            }
        }
        pointer += 1;
    }

    changed
}
