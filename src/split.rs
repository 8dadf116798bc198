//! Field splitting for a single record.
//!
//! Two modes, chosen once from the input field separator:
//!
//! - whitespace runs (`" "` or `""`): any run of whitespace is one delimiter and
//!   leading/trailing whitespace is ignored, so a blank line has no fields;
//! - literal (anything else): every exact occurrence of the separator delimits,
//!   adjacent separators produce empty fields, and an empty line has no fields.

/// Separator value that selects whitespace-run splitting
pub const WHITESPACE: &str = " ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldSplitter {
    #[default]
    Whitespace,
    Literal(String),
}

impl FieldSplitter {
    pub fn new(fs: &str) -> Self {
        if fs.is_empty() || fs == WHITESPACE {
            FieldSplitter::Whitespace
        } else {
            FieldSplitter::Literal(fs.to_string())
        }
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, FieldSplitter::Whitespace)
    }

    /// Split `record` and append the fields to `out`. Returns the number of
    /// fields appended.
    pub fn split_into(&self, record: &str, out: &mut Vec<String>) -> usize {
        let before = out.len();

        match self {
            FieldSplitter::Whitespace => {
                out.extend(record.split_whitespace().map(String::from));
            }
            // An empty record has no fields even though `"".split(sep)` yields one
            FieldSplitter::Literal(_) if record.is_empty() => {}
            FieldSplitter::Literal(sep) if sep.len() == 1 => {
                // Single-byte separator is necessarily ASCII, so byte offsets
                // are always char boundaries.
                let sep = sep.as_bytes()[0];
                let mut start = 0;
                for (i, &b) in record.as_bytes().iter().enumerate() {
                    if b == sep {
                        out.push(record[start..i].to_string());
                        start = i + 1;
                    }
                }
                out.push(record[start..].to_string());
            }
            FieldSplitter::Literal(sep) => {
                out.extend(record.split(sep.as_str()).map(String::from));
            }
        }

        out.len() - before
    }

    /// Convenience wrapper returning the fields as a fresh vector.
    pub fn split(&self, record: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.split_into(record, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection() {
        assert!(FieldSplitter::new(" ").is_whitespace());
        assert!(FieldSplitter::new("").is_whitespace());
        assert_eq!(FieldSplitter::new(","), FieldSplitter::Literal(",".to_string()));
        // A tab is a literal separator, not whitespace mode
        assert_eq!(FieldSplitter::new("\t"), FieldSplitter::Literal("\t".to_string()));
    }

    #[test]
    fn test_whitespace_runs() {
        let ws = FieldSplitter::Whitespace;
        assert_eq!(ws.split("one two three"), vec!["one", "two", "three"]);
        assert_eq!(ws.split("  a \t b  "), vec!["a", "b"]);
        assert!(ws.split("").is_empty());
        assert!(ws.split("   \t  ").is_empty());
    }

    #[test]
    fn test_literal_single_byte() {
        let comma = FieldSplitter::new(",");
        assert_eq!(comma.split("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(comma.split("a,,c"), vec!["a", "", "c"]);
        assert_eq!(comma.split(",a,"), vec!["", "a", ""]);
        assert_eq!(comma.split(","), vec!["", ""]);
        assert_eq!(comma.split("no separator"), vec!["no separator"]);
    }

    #[test]
    fn test_literal_empty_record_has_no_fields() {
        assert!(FieldSplitter::new(",").split("").is_empty());
        assert!(FieldSplitter::new("::").split("").is_empty());
    }

    #[test]
    fn test_literal_multi_char() {
        let sep = FieldSplitter::new("::");
        assert_eq!(sep.split("a::b::c"), vec!["a", "b", "c"]);
        assert_eq!(sep.split("a::::b"), vec!["a", "", "b"]);
        // Non-overlapping: ":::" holds one separator and a leftover colon
        assert_eq!(sep.split("a:::b"), vec!["a", ":b"]);
    }

    #[test]
    fn test_literal_multibyte_separator() {
        let sep = FieldSplitter::new("→");
        assert_eq!(sep.split("α→β→γ"), vec!["α", "β", "γ"]);
    }

    #[test]
    fn test_split_into_appends() {
        let mut out = vec!["whole".to_string()];
        let n = FieldSplitter::new("|").split_into("x|y", &mut out);
        assert_eq!(n, 2);
        assert_eq!(out, vec!["whole", "x", "y"]);
    }
}
