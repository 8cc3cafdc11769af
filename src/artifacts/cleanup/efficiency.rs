//! Efficiency cleanup
//!
//! Folds short equalities into the surrounding edits when keeping them costs
//! more than it saves. An edit operation is priced at `edit_cost` chars, so an
//! equality surrounded by changes on all four sides (or a very short one with
//! changes on three sides) is cheaper to express as part of the edits.

use crate::artifacts::cleanup::merge::cleanup_merge;
use crate::artifacts::diff::differ::Differ;
use crate::artifacts::diff::edit::{Edit, Operation};
use bitflags::bitflags;

bitflags! {
    /// Which kinds of edit border the candidate equality
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Surroundings: u8 {
        const INSERT_BEFORE = 0b0001;
        const DELETE_BEFORE = 0b0010;
        const INSERT_AFTER = 0b0100;
        const DELETE_AFTER = 0b1000;

        const BEFORE = Self::INSERT_BEFORE.bits() | Self::DELETE_BEFORE.bits();
        const AFTER = Self::INSERT_AFTER.bits() | Self::DELETE_AFTER.bits();
    }
}

impl Surroundings {
    /// Move the flags seen after an equality into the "before" slots of the next one
    fn shift_after_to_before(self) -> Self {
        let mut shifted = Self::empty();
        shifted.set(Self::INSERT_BEFORE, self.contains(Self::INSERT_AFTER));
        shifted.set(Self::DELETE_BEFORE, self.contains(Self::DELETE_AFTER));
        shifted
    }
}

impl Differ {
    /// Efficiency cleanup priced with this differ's edit cost
    pub fn cleanup_efficiency(&self, diffs: &mut Vec<Edit>) {
        cleanup_efficiency(diffs, self.options().edit_cost);
    }
}

/// Reduce the number of edits by eliminating operationally trivial equalities
pub fn cleanup_efficiency(diffs: &mut Vec<Edit>, edit_cost: usize) {
    let mut changed = false;
    // Indices of candidate equalities, the latest on top.
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    let mut flags = Surroundings::empty();
    let mut pointer = 0;

    while pointer < diffs.len() {
        let edit = &diffs[pointer];
        if edit.is_equal() {
            if edit.len() < edit_cost && flags.intersects(Surroundings::AFTER) {
                // Candidate found.
                equalities.push(pointer);
                flags = flags.shift_after_to_before();
                last_equality = Some(edit.text.clone());
            } else {
                // Not a candidate, and can never become one.
                equalities.clear();
                last_equality = None;
            }
            flags.remove(Surroundings::AFTER);
            pointer += 1;
            continue;
        }

        if edit.operation == Operation::Delete {
            flags.insert(Surroundings::DELETE_AFTER);
        } else {
            flags.insert(Surroundings::INSERT_AFTER);
        }

        // Fold on four surrounding edit kinds, or on three when the equality
        // costs less than half an edit.
        let eliminate = last_equality.as_ref().is_some_and(|equality| {
            flags.is_all()
                || (2 * equality.chars().count() < edit_cost && flags.bits().count_ones() == 3)
        });

        if eliminate {
            if let (Some(equality), Some(index)) = (last_equality.take(), equalities.pop()) {
                log::trace!("folding equality {equality:?} into its neighbours");
                diffs.insert(index, Edit::delete(equality));
                diffs[index + 1].operation = Operation::Insert;
            }
            changed = true;

            if flags.contains(Surroundings::BEFORE) {
                flags = Surroundings::AFTER;
                equalities.clear();
            } else {
                // The previous equality needs to be reevaluated.
                equalities.pop();
                pointer = equalities.last().map_or(0, |&index| index + 1);
                flags.remove(Surroundings::AFTER);
                continue;
            }
        }

        pointer += 1;
    }

    if changed {
        cleanup_merge(diffs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::options::DiffOptions;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn four_edits(equality: &str) -> Vec<Edit> {
        vec![
            Edit::delete("ab"),
            Edit::insert("12"),
            Edit::equal(equality),
            Edit::delete("cd"),
            Edit::insert("34"),
        ]
    }

    #[rstest]
    #[case::null(vec![], vec![])]
    #[case::no_elimination(four_edits("wxyz"), four_edits("wxyz"))]
    #[case::four_edit_elimination(
        four_edits("xyz"),
        vec![Edit::delete("abxyzcd"), Edit::insert("12xyz34")]
    )]
    #[case::three_edit_elimination(
        vec![Edit::insert("12"), Edit::equal("x"), Edit::delete("cd"), Edit::insert("34")],
        vec![Edit::delete("xcd"), Edit::insert("12x34")]
    )]
    #[case::backpass_elimination(
        vec![
            Edit::delete("ab"),
            Edit::insert("12"),
            Edit::equal("xy"),
            Edit::insert("34"),
            Edit::equal("z"),
            Edit::delete("cd"),
            Edit::insert("56"),
        ],
        vec![Edit::delete("abxyzcd"), Edit::insert("12xy34z56")]
    )]
    fn eliminates_cheap_equalities(#[case] mut diffs: Vec<Edit>, #[case] expected: Vec<Edit>) {
        Differ::new(DiffOptions::default()).cleanup_efficiency(&mut diffs);
        assert_eq!(diffs, expected);
    }

    #[test]
    fn higher_edit_cost_folds_longer_equalities() {
        let mut diffs = four_edits("wxyz");

        cleanup_efficiency(&mut diffs, 5);

        assert_eq!(
            diffs,
            vec![Edit::delete("abwxyzcd"), Edit::insert("12wxyz34")]
        );
    }

    #[test]
    fn shifts_after_flags_into_before() {
        let flags = Surroundings::INSERT_AFTER | Surroundings::DELETE_BEFORE;
        assert_eq!(flags.shift_after_to_before(), Surroundings::INSERT_BEFORE);
    }
}
