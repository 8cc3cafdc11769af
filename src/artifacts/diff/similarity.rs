//! String-similarity primitives
//!
//! Pure functions over char slices used throughout the engine. Prefix and
//! suffix lengths are found with a binary search over candidate split points,
//! so long shared runs cost O(log n) slice comparisons instead of a char walk.

/// Length of the longest common prefix of two texts
pub fn common_prefix(text1: &[char], text2: &[char]) -> usize {
    if text1.is_empty() || text2.is_empty() || text1[0] != text2[0] {
        return 0;
    }

    let mut pointer_min = 0;
    let mut pointer_max = text1.len().min(text2.len());
    let mut pointer_mid = pointer_max;
    let mut pointer_start = 0;

    while pointer_min < pointer_mid {
        if text1[pointer_start..pointer_mid] == text2[pointer_start..pointer_mid] {
            pointer_min = pointer_mid;
            pointer_start = pointer_min;
        } else {
            pointer_max = pointer_mid;
        }
        pointer_mid = (pointer_max - pointer_min) / 2 + pointer_min;
    }

    pointer_mid
}

/// Length of the longest common suffix of two texts
pub fn common_suffix(text1: &[char], text2: &[char]) -> usize {
    let (len1, len2) = (text1.len(), text2.len());
    if len1 == 0 || len2 == 0 || text1[len1 - 1] != text2[len2 - 1] {
        return 0;
    }

    let mut pointer_min = 0;
    let mut pointer_max = len1.min(len2);
    let mut pointer_mid = pointer_max;
    let mut pointer_end = 0;

    while pointer_min < pointer_mid {
        if text1[len1 - pointer_mid..len1 - pointer_end]
            == text2[len2 - pointer_mid..len2 - pointer_end]
        {
            pointer_min = pointer_mid;
            pointer_end = pointer_min;
        } else {
            pointer_max = pointer_mid;
        }
        pointer_mid = (pointer_max - pointer_min) / 2 + pointer_min;
    }

    pointer_mid
}

/// Length of the longest suffix of `text1` that is also a prefix of `text2`
pub fn common_overlap(text1: &[char], text2: &[char]) -> usize {
    if text1.is_empty() || text2.is_empty() {
        return 0;
    }

    // Only the last `text_length` chars of text1 can overlap the first
    // `text_length` chars of text2.
    let text_length = text1.len().min(text2.len());
    let text1 = &text1[text1.len() - text_length..];
    let text2 = &text2[..text_length];

    if text1 == text2 {
        return text_length;
    }

    let mut best = 0;
    let mut length = 1;
    loop {
        let pattern = &text1[text_length - length..];
        let Some(found) = find(text2, pattern, 0) else {
            return best;
        };

        length += found;
        if found == 0 || text1[text_length - length..] == text2[..length] {
            best = length;
            length += 1;
        }
    }
}

/// Position of the first occurrence of `needle` in `haystack` at or after `from`
pub(crate) fn find(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= haystack.len()).then_some(from);
    }

    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| position + from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[rstest]
    #[case::null("abc", "xyz", 0)]
    #[case::non_null("1234abcdef", "1234xyz", 4)]
    #[case::whole("1234", "1234xyz", 4)]
    #[case::empty("", "abc", 0)]
    fn detects_common_prefix(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(common_prefix(&chars(a), &chars(b)), expected);
    }

    #[rstest]
    #[case::null("abc", "xyz", 0)]
    #[case::non_null("abcdef1234", "xyz1234", 4)]
    #[case::whole("1234", "xyz1234", 4)]
    #[case::empty("abc", "", 0)]
    fn detects_common_suffix(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(common_suffix(&chars(a), &chars(b)), expected);
    }

    #[rstest]
    #[case::null("", "abcd", 0)]
    #[case::whole("abc", "abcd", 3)]
    #[case::no_overlap("123456", "abcd", 0)]
    #[case::overlap("123456xxx", "xxxabcd", 3)]
    #[case::ligature("fi", "\u{fb01}i", 0)]
    fn detects_common_overlap(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(common_overlap(&chars(a), &chars(b)), expected);
    }

    #[test]
    fn find_respects_start_offset() {
        let haystack = chars("abcabc");
        assert_eq!(find(&haystack, &chars("bc"), 0), Some(1));
        assert_eq!(find(&haystack, &chars("bc"), 2), Some(4));
        assert_eq!(find(&haystack, &chars("bc"), 5), None);
        assert_eq!(find(&haystack, &chars("abcabcd"), 0), None);
    }

    proptest! {
        #[test]
        fn prop_common_prefix_matches_linear_scan(a in "[ab]{0,12}", b in "[ab]{0,12}") {
            let (a, b) = (chars(&a), chars(&b));
            let linear = a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count();
            prop_assert_eq!(common_prefix(&a, &b), linear);
        }

        #[test]
        fn prop_common_suffix_matches_linear_scan(a in "[ab]{0,12}", b in "[ab]{0,12}") {
            let (a, b) = (chars(&a), chars(&b));
            let linear = a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| x == y).count();
            prop_assert_eq!(common_suffix(&a, &b), linear);
        }

        #[test]
        fn prop_common_overlap_is_the_longest_overlap(a in "[ab]{0,10}", b in "[ab]{0,10}") {
            let (a, b) = (chars(&a), chars(&b));
            let brute = (0..=a.len().min(b.len()))
                .rev()
                .find(|&n| a[a.len() - n..] == b[..n])
                .unwrap_or(0);
            prop_assert_eq!(common_overlap(&a, &b), brute);
        }
    }
}
