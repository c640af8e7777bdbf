// The answer-key file format.
//
// The external test harness captures rendered puzzles and records their
// answers as a plain-text file, one line per puzzle:
//
//   2d_test_1: 14
//   3d_test_1: B
//
// The identifier is `<modality>_test_<index>` and the format is the one
// persisted artifact tied to this engine, so it must stay a stable,
// greppable `key: value` line format. Entries are sorted by modality then
// index (`2d` before `3d`, lexicographic on the modality string).
//
// Parsing is provided for tooling that consumes the key file; errors carry
// the 1-based line number.

use crate::puzzle::Modality;
use std::error::Error;
use std::fmt;

/// One line of the answer key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerKeyEntry {
    pub modality: Modality,
    /// 1-based index within the modality.
    pub index: u32,
    /// The recorded answer: an option label for 3D, a node id for 2D.
    pub answer: String,
}

impl AnswerKeyEntry {
    /// Stable puzzle identifier, e.g. `3d_test_7`.
    pub fn identifier(&self) -> String {
        format!("{}_test_{}", self.modality, self.index)
    }

    /// The `key: value` line as persisted.
    pub fn line(&self) -> String {
        format!("{}: {}", self.identifier(), self.answer)
    }
}

/// Render entries as the answer-key file: sorted, one line per entry,
/// trailing newline.
pub fn format_answer_key(entries: &[AnswerKeyEntry]) -> String {
    let mut sorted: Vec<&AnswerKeyEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| (e.modality.as_str(), e.index));

    let mut out = String::new();
    for entry in sorted {
        out.push_str(&entry.line());
        out.push('\n');
    }
    out
}

/// Parse an answer-key file produced by `format_answer_key` (or the
/// external harness). Blank lines are ignored.
pub fn parse_answer_key(text: &str) -> Result<Vec<AnswerKeyEntry>, AnswerKeyError> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let (identifier, answer) = line
            .split_once(": ")
            .ok_or(AnswerKeyError::MissingSeparator { line_no })?;
        let (modality_str, index_str) = identifier
            .split_once("_test_")
            .ok_or(AnswerKeyError::BadIdentifier { line_no })?;
        let modality = match modality_str {
            "3d" => Modality::ThreeD,
            "2d" => Modality::TwoD,
            _ => return Err(AnswerKeyError::BadIdentifier { line_no }),
        };
        let index: u32 = index_str
            .parse()
            .map_err(|_| AnswerKeyError::BadIdentifier { line_no })?;
        entries.push(AnswerKeyEntry {
            modality,
            index,
            answer: answer.to_string(),
        });
    }
    Ok(entries)
}

/// Why an answer-key file failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerKeyError {
    /// A non-blank line has no `": "` separator.
    MissingSeparator { line_no: usize },
    /// The identifier is not `<modality>_test_<index>`.
    BadIdentifier { line_no: usize },
}

impl fmt::Display for AnswerKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { line_no } => {
                write!(f, "line {line_no}: missing ': ' separator")
            }
            Self::BadIdentifier { line_no } => {
                write!(f, "line {line_no}: identifier is not <modality>_test_<index>")
            }
        }
    }
}

impl Error for AnswerKeyError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(modality: Modality, index: u32, answer: &str) -> AnswerKeyEntry {
        AnswerKeyEntry {
            modality,
            index,
            answer: answer.to_string(),
        }
    }

    #[test]
    fn lines_are_stable_key_value_pairs() {
        let e = entry(Modality::ThreeD, 7, "B");
        assert_eq!(e.identifier(), "3d_test_7");
        assert_eq!(e.line(), "3d_test_7: B");
        assert_eq!(entry(Modality::TwoD, 14, "3").line(), "2d_test_14: 3");
    }

    #[test]
    fn format_sorts_by_modality_then_index() {
        let entries = vec![
            entry(Modality::ThreeD, 2, "C"),
            entry(Modality::TwoD, 10, "4"),
            entry(Modality::ThreeD, 1, "A"),
            entry(Modality::TwoD, 2, "17"),
        ];
        let text = format_answer_key(&entries);
        assert_eq!(
            text,
            "2d_test_2: 17\n2d_test_10: 4\n3d_test_1: A\n3d_test_2: C\n"
        );
    }

    #[test]
    fn roundtrip_through_text() {
        let entries = vec![
            entry(Modality::TwoD, 1, "12"),
            entry(Modality::ThreeD, 1, "D"),
            entry(Modality::ThreeD, 2, "A"),
        ];
        let parsed = parse_answer_key(&format_answer_key(&entries)).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let parsed = parse_answer_key("\n3d_test_1: A\n\n").unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn missing_separator_is_reported_with_line_number() {
        let err = parse_answer_key("3d_test_1: A\nnonsense").unwrap_err();
        assert_eq!(err, AnswerKeyError::MissingSeparator { line_no: 2 });
    }

    #[test]
    fn bad_identifier_is_reported() {
        assert_eq!(
            parse_answer_key("4d_test_1: A").unwrap_err(),
            AnswerKeyError::BadIdentifier { line_no: 1 }
        );
        assert_eq!(
            parse_answer_key("3d_round_1: A").unwrap_err(),
            AnswerKeyError::BadIdentifier { line_no: 1 }
        );
        assert_eq!(
            parse_answer_key("3d_test_x: A").unwrap_err(),
            AnswerKeyError::BadIdentifier { line_no: 1 }
        );
    }
}
