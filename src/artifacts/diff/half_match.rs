//! Half-match speedup
//!
//! If the two texts share a substring at least half as long as the longer
//! text, the problem splits cleanly into the parts before and after it. The
//! split can yield a non-minimal script, so it is only attempted when the diff
//! runs under a deadline.

use crate::artifacts::diff::differ::Differ;
use crate::artifacts::diff::similarity::{common_prefix, common_suffix, find};
use derive_new::new;

/// Two texts split around a long shared substring
///
/// `text1_*` always belong to the first text passed to [`Differ::half_match`],
/// regardless of which one was longer.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HalfMatch<'t> {
    pub text1_a: &'t [char],
    pub text1_b: &'t [char],
    pub text2_a: &'t [char],
    pub text2_b: &'t [char],
    pub common: &'t [char],
}

impl HalfMatch<'_> {
    /// `[text1_a, text1_b, text2_a, text2_b, common]` as owned strings
    pub fn to_strings(&self) -> [String; 5] {
        [
            self.text1_a,
            self.text1_b,
            self.text2_a,
            self.text2_b,
            self.common,
        ]
        .map(|part| part.iter().collect())
    }
}

impl Differ {
    /// Look for a substring shared by both texts covering at least half of the
    /// longer one
    pub fn half_match<'t>(&self, text1: &'t [char], text2: &'t [char]) -> Option<HalfMatch<'t>> {
        if self.options().timeout.is_none() {
            return None;
        }

        let (long_text, short_text) = if text1.len() > text2.len() {
            (text1, text2)
        } else {
            (text2, text1)
        };
        if long_text.len() < 4 || short_text.len() * 2 < long_text.len() {
            return None;
        }

        // Seed from the second and the third quarter of the long text.
        let quarter = half_match_at(long_text, short_text, long_text.len().div_ceil(4));
        let half = half_match_at(long_text, short_text, long_text.len().div_ceil(2));

        let best = match (quarter, half) {
            (None, None) => return None,
            (Some(found), None) | (None, Some(found)) => found,
            (Some(quarter), Some(half)) => {
                if half.common.len() > quarter.common.len() {
                    half
                } else {
                    quarter
                }
            }
        };

        log::debug!("half-match found a {} char common run", best.common.len());

        // `best` is laid out as (long_a, long_b, short_a, short_b).
        if text1.len() > text2.len() {
            Some(best)
        } else {
            Some(HalfMatch::new(
                best.text2_a,
                best.text2_b,
                best.text1_a,
                best.text1_b,
                best.common,
            ))
        }
    }
}

/// Half-match seeded by the quarter-length substring of `long_text` starting at `i`
///
/// The result is laid out as (long_a, long_b, short_a, short_b, common).
fn half_match_at<'t>(
    long_text: &'t [char],
    short_text: &'t [char],
    i: usize,
) -> Option<HalfMatch<'t>> {
    let seed = &long_text[i..i + long_text.len() / 4];
    let mut best: Option<HalfMatch<'t>> = None;
    let mut best_len = 0;

    let mut from = 0;
    while let Some(j) = find(short_text, seed, from) {
        let prefix_length = common_prefix(&long_text[i..], &short_text[j..]);
        let suffix_length = common_suffix(&long_text[..i], &short_text[..j]);

        if best_len < suffix_length + prefix_length {
            best_len = suffix_length + prefix_length;
            best = Some(HalfMatch::new(
                &long_text[..i - suffix_length],
                &long_text[i + prefix_length..],
                &short_text[..j - suffix_length],
                &short_text[j + prefix_length..],
                &short_text[j - suffix_length..j + prefix_length],
            ));
        }
        from = j + 1;
    }

    best.filter(|found| found.common.len() * 2 >= long_text.len())
}

#[cfg(test)]
mod tests {
    use crate::areas::options::DiffOptions;
    use crate::artifacts::diff::differ::Differ;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn differ() -> Differ {
        Differ::new(DiffOptions::default())
    }

    fn half_match(differ: &Differ, a: &str, b: &str) -> Option<[String; 5]> {
        let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
        differ.half_match(&a, &b).map(|found| found.to_strings())
    }

    #[rstest]
    #[case::no_match("1234567890", "abcdef")]
    #[case::too_short("12345", "23")]
    fn rejects_texts_without_half_match(differ: Differ, #[case] a: &str, #[case] b: &str) {
        assert_eq!(half_match(&differ, a, b), None);
    }

    #[rstest]
    #[case::single("1234567890", "a345678z", ["12", "90", "a", "z", "345678"])]
    #[case::single_swapped("a345678z", "1234567890", ["a", "z", "12", "90", "345678"])]
    #[case::single_left("abc56789z", "1234567890", ["abc", "z", "1234", "0", "56789"])]
    #[case::single_right("a23456xyz", "1234567890", ["a", "xyz", "1", "7890", "23456"])]
    #[case::multiple(
        "121231234123451234123121",
        "a1234123451234z",
        ["12123", "123121", "a", "z", "1234123451234"]
    )]
    #[case::multiple_leading(
        "x-=-=-=-=-=-=-=-=-=-=-=-=",
        "xx-=-=-=-=-=-=-=",
        ["", "-=-=-=-=-=", "x", "", "x-=-=-=-=-=-=-="]
    )]
    #[case::multiple_trailing(
        "-=-=-=-=-=-=-=-=-=-=-=-=y",
        "-=-=-=-=-=-=-=yy",
        ["-=-=-=-=-=", "", "", "y", "-=-=-=-=-=-=-=y"]
    )]
    #[case::non_optimal(
        "qHilloHelloHew",
        "xHelloHeHulloy",
        ["qHillo", "w", "x", "Hulloy", "HelloHe"]
    )]
    fn splits_around_half_match(
        differ: Differ,
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: [&str; 5],
    ) {
        assert_eq!(half_match(&differ, a, b), Some(expected.map(String::from)));
    }

    #[test]
    fn disabled_without_timeout() {
        let differ = Differ::new(DiffOptions::unbounded());
        assert_eq!(half_match(&differ, "qHilloHelloHew", "xHelloHeHulloy"), None);
        assert_eq!(half_match(&differ, "1234567890", "a345678z"), None);
    }
}
