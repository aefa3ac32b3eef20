//! Normalisation of generated summaries into a numbered list.
//!
//! The summary generator answers with free text where points are introduced by
//! ordinal markers (`1. `, `2. `, ...), often wrapped in bold markup and broken
//! across lines, sometimes after an unnumbered preamble. [`format_summary`] turns
//! that into one `"{n}. {point}"` line per point, renumbered from 1.

use std::sync::LazyLock;

use regex::Regex;

/// An ordinal marker: digits at a word boundary, a period, then whitespace.
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\.\s+").expect("valid marker regex"));

static NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid newline regex"));

/// Reformat a raw summary into newline-separated, renumbered points.
///
/// Text before the first marker is dropped, as are points that are empty after
/// trimming, so text without any marker formats to an empty string.
pub fn format_summary(raw: &str) -> String {
    let unbolded = raw.replace("**", "");
    let flattened = NEWLINES_RE.replace_all(&unbolded, " ");
    let flattened = flattened.trim();

    MARKER_RE
        .split(flattened)
        .skip(1)
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .enumerate()
        .map(|(i, point)| format!("{}. {}", i + 1, point))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(format_summary(""), "");
        assert_eq!(format_summary(" \n\n "), "");
        assert_eq!(format_summary("****"), "");
    }

    #[test]
    fn test_already_formatted() {
        assert_eq!(format_summary("1. Alpha\n2. Beta"), "1. Alpha\n2. Beta");
    }

    #[test]
    fn test_preamble_and_bold_dropped() {
        assert_eq!(
            format_summary("**Bold** intro 1. Alpha 2. Beta"),
            "1. Alpha\n2. Beta"
        );
    }

    #[test]
    fn test_generator_style_output() {
        let raw = "Here are the points:\n\n\
                   1. **Potential:** Strong\nanalytical skills.\n\
                   2. **Growth:** Time management.\r\n\
                   3. **Next steps:** Join a study group.\n\
                   4. **Encouragement:** Keep going!";
        assert_eq!(
            format_summary(raw),
            "1. Potential: Strong analytical skills.\n\
             2. Growth: Time management.\n\
             3. Next steps: Join a study group.\n\
             4. Encouragement: Keep going!"
        );
    }

    #[test]
    fn test_renumbers_sequentially() {
        assert_eq!(format_summary("3. Gamma 7. Delta"), "1. Gamma\n2. Delta");
    }

    #[test]
    fn test_empty_points_dropped() {
        assert_eq!(format_summary("1. 2. Beta 3. 4. Delta"), "1. Beta\n2. Delta");
    }

    #[test]
    fn test_line_count_matches_markers() {
        for n in 1..=9 {
            let raw = (1..=n)
                .map(|i| format!("{i}. point number {i}"))
                .collect::<Vec<_>>()
                .join(" ");
            let formatted = format_summary(&raw);
            let lines: Vec<&str> = formatted.lines().collect();
            assert_eq!(lines.len(), n);
            for (i, line) in lines.iter().enumerate() {
                assert_eq!(*line, format!("{}. point number {}", i + 1, i + 1));
            }
        }
    }

    #[test]
    fn test_double_digit_markers() {
        let raw = (1..=11)
            .map(|i| format!("{i}. p{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let formatted = format_summary(&raw);
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[9], "10. p10");
        assert_eq!(lines[10], "11. p11");
    }

    #[test]
    fn test_decimals_are_not_markers() {
        assert_eq!(
            format_summary("1. GPA of 3.8 overall 2. Done"),
            "1. GPA of 3.8 overall\n2. Done"
        );
    }

    #[test]
    fn test_text_without_markers_is_dropped() {
        assert_eq!(format_summary("Intro with no markers at all."), "");
        assert_eq!(format_summary("A **great**\nstudent."), "");
        assert_eq!(format_summary("Scored 3.8 overall."), "");
    }
}
