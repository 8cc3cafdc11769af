//! Diff driver
//!
//! `Differ` strips the common prefix and suffix, then picks the cheapest
//! strategy for what is left: trivial scripts for empty or contained texts,
//! the half-match split, line mode for large texts, and finally the bisect
//! search. Every script it returns has been through merge cleanup.

use crate::areas::options::DiffOptions;
use crate::artifacts::cleanup::merge::cleanup_merge;
use crate::artifacts::cleanup::semantic::cleanup_semantic;
use crate::artifacts::diff::bisect::Bisect;
use crate::artifacts::diff::deadline::Deadline;
use crate::artifacts::diff::edit::{Edit, Operation};
use crate::artifacts::diff::lines::{LinesToChars, chars_to_lines, lines_to_chars};
use crate::artifacts::diff::similarity::{common_prefix, common_suffix, find};
use derive_new::new;
use std::iter;

/// Texts longer than this (in chars, on both sides) are diffed line by line first
pub const LINE_MODE_THRESHOLD: usize = 100;

#[derive(Debug, Clone, Default, new)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Diff two texts with the line-mode speedup enabled
    pub fn diff(&self, text1: &str, text2: &str) -> Vec<Edit> {
        self.diff_main(text1, text2, true)
    }

    /// Diff two texts
    ///
    /// `check_lines` allows the line-mode speedup for large inputs; it is faster
    /// but can produce a less minimal script.
    pub fn diff_main(&self, text1: &str, text2: &str, check_lines: bool) -> Vec<Edit> {
        let deadline = Deadline::after(self.options.timeout);
        let text1: Vec<char> = text1.chars().collect();
        let text2: Vec<char> = text2.chars().collect();

        self.diff_chars(&text1, &text2, check_lines, deadline)
    }

    pub(crate) fn diff_chars(
        &self,
        text1: &[char],
        text2: &[char],
        check_lines: bool,
        deadline: Deadline,
    ) -> Vec<Edit> {
        if text1 == text2 {
            return if text1.is_empty() {
                Vec::new()
            } else {
                vec![Edit::from_chars(Operation::Equal, text1)]
            };
        }

        let prefix_length = common_prefix(text1, text2);
        let (prefix, text1) = text1.split_at(prefix_length);
        let text2 = &text2[prefix_length..];

        let suffix_length = common_suffix(text1, text2);
        let (text1, suffix) = text1.split_at(text1.len() - suffix_length);
        let text2 = &text2[..text2.len() - suffix_length];

        let mut diffs = Vec::new();
        if !prefix.is_empty() {
            diffs.push(Edit::from_chars(Operation::Equal, prefix));
        }
        diffs.extend(self.compute(text1, text2, check_lines, deadline));
        if !suffix.is_empty() {
            diffs.push(Edit::from_chars(Operation::Equal, suffix));
        }

        cleanup_merge(&mut diffs);
        diffs
    }

    /// Diff two texts that share no common prefix or suffix
    fn compute(
        &self,
        text1: &[char],
        text2: &[char],
        check_lines: bool,
        deadline: Deadline,
    ) -> Vec<Edit> {
        if text1.is_empty() {
            return vec![Edit::from_chars(Operation::Insert, text2)];
        }
        if text2.is_empty() {
            return vec![Edit::from_chars(Operation::Delete, text1)];
        }

        let (long_text, short_text) = if text1.len() > text2.len() {
            (text1, text2)
        } else {
            (text2, text1)
        };

        if let Some(i) = find(long_text, short_text, 0) {
            // The shorter text sits inside the longer one.
            let operation = if text1.len() > text2.len() {
                Operation::Delete
            } else {
                Operation::Insert
            };
            return [
                Edit::from_chars(operation, &long_text[..i]),
                Edit::from_chars(Operation::Equal, short_text),
                Edit::from_chars(operation, &long_text[i + short_text.len()..]),
            ]
            .into_iter()
            .filter(|edit| !edit.is_empty())
            .collect();
        }

        if short_text.len() == 1 {
            // Not contained, so nothing can be shared.
            return vec![
                Edit::from_chars(Operation::Delete, text1),
                Edit::from_chars(Operation::Insert, text2),
            ];
        }

        if let Some(half_match) = self.half_match(text1, text2) {
            let mut diffs =
                self.diff_chars(half_match.text1_a, half_match.text2_a, check_lines, deadline);
            diffs.push(Edit::from_chars(Operation::Equal, half_match.common));
            diffs.extend(self.diff_chars(
                half_match.text1_b,
                half_match.text2_b,
                check_lines,
                deadline,
            ));
            return diffs;
        }

        if check_lines && text1.len() > LINE_MODE_THRESHOLD && text2.len() > LINE_MODE_THRESHOLD {
            return self.diff_line_mode(text1, text2, deadline);
        }

        Bisect::new(self, text1, text2, deadline).run()
    }

    /// Diff line by line, then re-diff every replaced block char by char
    fn diff_line_mode(&self, text1: &[char], text2: &[char], deadline: Deadline) -> Vec<Edit> {
        let text1: String = text1.iter().collect();
        let text2: String = text2.iter().collect();
        let LinesToChars {
            chars1,
            chars2,
            line_table,
        } = lines_to_chars(&text1, &text2);
        log::debug!(
            "line mode over {} distinct lines",
            line_table.lines().len() - 1
        );

        let chars1: Vec<char> = chars1.chars().collect();
        let chars2: Vec<char> = chars2.chars().collect();
        let mut diffs = self.diff_chars(&chars1, &chars2, false, deadline);

        chars_to_lines(&mut diffs, &line_table);
        // Drop freak matches like blank lines.
        cleanup_semantic(&mut diffs);

        // A replaced block of lines may hide small edits inside its lines, so
        // it is diffed again at char granularity. The trailing empty equality
        // flushes the last block.
        let mut rediffed = Vec::with_capacity(diffs.len());
        let mut text_delete = String::new();
        let mut text_insert = String::new();

        for edit in diffs.into_iter().chain(iter::once(Edit::equal(""))) {
            match edit.operation {
                Operation::Insert => text_insert.push_str(&edit.text),
                Operation::Delete => text_delete.push_str(&edit.text),
                Operation::Equal => {
                    if !text_delete.is_empty() && !text_insert.is_empty() {
                        let deleted: Vec<char> = text_delete.chars().collect();
                        let inserted: Vec<char> = text_insert.chars().collect();
                        rediffed.extend(self.diff_chars(&deleted, &inserted, false, deadline));
                    } else if !text_delete.is_empty() {
                        rediffed.push(Edit::delete(text_delete.clone()));
                    } else if !text_insert.is_empty() {
                        rediffed.push(Edit::insert(text_insert.clone()));
                    }
                    text_delete.clear();
                    text_insert.clear();

                    if !edit.is_empty() {
                        rediffed.push(edit);
                    }
                }
            }
        }

        cleanup_merge(&mut rediffed);
        rediffed
    }
}
