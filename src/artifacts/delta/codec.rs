use crate::artifacts::delta::error::{DeltaError, Result};
use crate::artifacts::diff::edit::{Edit, Operation};

/// Punctuation left as-is in inserted text, on top of ASCII letters and digits
const UNESCAPED_PUNCTUATION: &str = " -_.!~*'()/?:@&=+$,#";

/// Crush an edit script into a delta
///
/// e.g: `=3\t-2\t+ing` keeps 3 chars, deletes 2 chars and inserts "ing".
pub fn to_delta(diffs: &[Edit]) -> String {
    diffs
        .iter()
        .map(|edit| match edit.operation {
            Operation::Insert => format!("+{}", escape(&edit.text)),
            Operation::Delete => format!("-{}", edit.len()),
            Operation::Equal => format!("={}", edit.len()),
        })
        .collect::<Vec<_>>()
        .join("\t")
}

/// Rebuild the full edit script from the source text and its delta
pub fn from_delta(text1: &str, delta: &str) -> Result<Vec<Edit>> {
    let source: Vec<char> = text1.chars().collect();
    let mut diffs = Vec::new();
    let mut pointer: usize = 0;

    for token in delta.split('\t') {
        let mut chars = token.chars();
        // Blank tokens are ok (from a trailing \t).
        let Some(operation) = chars.next() else {
            continue;
        };
        let param = chars.as_str();

        match operation {
            '+' => {
                let text = urlencoding::decode(param)
                    .map_err(|_| DeltaError::InvalidEscape(param.to_string()))?;
                diffs.push(Edit::insert(text.into_owned()));
            }
            '-' | '=' => {
                let length: usize = param
                    .parse()
                    .map_err(|_| DeltaError::InvalidLength(param.to_string()))?;
                let start = pointer.min(source.len());
                let end = pointer.saturating_add(length).min(source.len());
                pointer = pointer.saturating_add(length);

                let operation = if operation == '=' {
                    Operation::Equal
                } else {
                    Operation::Delete
                };
                diffs.push(Edit::from_chars(operation, &source[start..end]));
            }
            unknown => return Err(DeltaError::UnknownOperation(unknown)),
        }
    }

    if pointer != source.len() {
        return Err(DeltaError::LengthMismatch {
            consumed: pointer,
            expected: source.len(),
        });
    }

    Ok(diffs)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut buffer = [0u8; 4];

    for c in text.chars() {
        if c.is_ascii_alphanumeric() || UNESCAPED_PUNCTUATION.contains(c) {
            escaped.push(c);
        } else {
            escaped.push_str(&urlencoding::encode(c.encode_utf8(&mut buffer)));
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::edit::{text1, text2};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
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
            Edit::insert("old dog"),
        ]
    }

    #[rstest]
    fn encodes_and_decodes_script(jumps_over: Vec<Edit>) {
        let source = text1(&jumps_over);
        assert_eq!(source, "jumps over the lazy");

        let delta = to_delta(&jumps_over);

        assert_eq!(delta, "=4\t-1\t+ed\t=6\t-3\t+a\t=5\t+old dog");
        assert_eq!(from_delta(&source, &delta), Ok(jumps_over));
    }

    #[rstest]
    fn rejects_longer_source(jumps_over: Vec<Edit>) {
        let source = text1(&jumps_over) + "x";
        let delta = to_delta(&jumps_over);

        assert_eq!(
            from_delta(&source, &delta),
            Err(DeltaError::LengthMismatch {
                consumed: 19,
                expected: 20
            })
        );
    }

    #[rstest]
    fn rejects_shorter_source(jumps_over: Vec<Edit>) {
        let source = text1(&jumps_over)[1..].to_string();
        let delta = to_delta(&jumps_over);

        assert_eq!(
            from_delta(&source, &delta),
            Err(DeltaError::LengthMismatch {
                consumed: 19,
                expected: 18
            })
        );
    }

    #[test]
    fn escapes_special_characters() {
        let diffs = vec![
            Edit::equal("\u{0680} \u{0} \t %"),
            Edit::delete("\u{0681} \u{1} \n ^"),
            Edit::insert("\u{0682} \u{2} \\ |"),
        ];
        let source = text1(&diffs);
        assert_eq!(source, "\u{0680} \u{0} \t %\u{0681} \u{1} \n ^");

        let delta = to_delta(&diffs);

        assert_eq!(delta, "=7\t-7\t+%DA%82 %02 %5C %7C");
        assert_eq!(from_delta(&source, &delta), Ok(diffs));
    }

    #[test]
    fn leaves_unreserved_characters_alone() {
        let diffs = vec![Edit::insert(
            "A-Z a-z 0-9 - _ . ! ~ * ' ( )  / ? : @ & = + $ , # ",
        )];
        let destination = text2(&diffs);

        let delta = to_delta(&diffs);

        assert_eq!(delta, format!("+{destination}"));
        assert_eq!(from_delta("", &delta), Ok(diffs));
    }

    #[rstest]
    #[case::invalid_utf8("", "+%FF", DeltaError::InvalidEscape("%FF".to_string()))]
    #[case::negative_length("abc", "=-3", DeltaError::InvalidLength("-3".to_string()))]
    #[case::missing_length("abc", "=", DeltaError::InvalidLength(String::new()))]
    #[case::unknown_operation("abc", "*3", DeltaError::UnknownOperation('*'))]
    #[case::overrun("abc", "=5", DeltaError::LengthMismatch { consumed: 5, expected: 3 })]
    fn reports_malformed_deltas(
        #[case] source: &str,
        #[case] delta: &str,
        #[case] expected: DeltaError,
    ) {
        assert_eq!(from_delta(source, delta), Err(expected));
    }

    #[test]
    fn skips_blank_tokens() {
        assert_eq!(
            from_delta("abc", "=3\t"),
            Ok(vec![Edit::equal("abc")])
        );
    }

    proptest! {
        #[test]
        fn prop_delta_round_trips_through_differ(a in "\\PC{0,30}", b in "\\PC{0,30}") {
            use crate::areas::options::DiffOptions;
            use crate::artifacts::diff::differ::Differ;

            let diffs = Differ::new(DiffOptions::default()).diff(&a, &b);
            let decoded = from_delta(&a, &to_delta(&diffs));

            prop_assert_eq!(decoded, Ok(diffs));
        }
    }
}
