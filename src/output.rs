//! Plain-text report formatting for the command line.

/// Column width used when wrapping comma-separated entries.
pub const WRAP_WIDTH: usize = 78;

/// Format entries either one per line or as comma-separated text wrapped at
/// [`WRAP_WIDTH`] columns.
pub fn format_entries(entries: &[String], one_per_line: bool) -> String {
    if one_per_line {
        return entries.join("\n");
    }
    wrap(&entries.join(", "), WRAP_WIDTH)
}

/// Greedy word wrap on spaces; a single overlong word stays on its own line.
fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split(' ') {
        if line.is_empty() {
            line = word.to_string();
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_per_line() {
        let text = format_entries(&words(&["AAA", "BBB"]), true);
        assert_eq!(text, "AAA\nBBB");
    }

    #[test]
    fn test_comma_separated() {
        let text = format_entries(&words(&["AAA", "BBB"]), false);
        assert_eq!(text, "AAA, BBB");
    }

    #[test]
    fn test_wrapping_stays_under_width() {
        let entries: Vec<String> = (0..40).map(|i| format!("TERM{:02}", i)).collect();
        let text = format_entries(&entries, false);
        assert!(text.lines().count() > 1);
        for line in text.lines() {
            assert!(line.chars().count() <= WRAP_WIDTH);
        }
    }

    #[test]
    fn test_empty_entries() {
        assert_eq!(format_entries(&[], false), "");
        assert_eq!(format_entries(&[], true), "");
    }
}
