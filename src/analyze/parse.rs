use crate::model::Commit;

/// Parses `hash|author|email|subject` lines, newest first as git prints them.
///
/// Blank lines are skipped. The subject keeps any further `|` characters.
pub fn parse_commits(log: &str) -> Vec<Commit> {
    log.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Commit {
    let mut fields = line.splitn(4, '|');
    let hash = fields.next().unwrap_or("").to_string();
    let author = fields
        .next()
        .filter(|a| !a.is_empty())
        .unwrap_or("unknown")
        .to_string();
    let email = fields.next().unwrap_or("").to_string();
    let message = fields.next().unwrap_or("").to_string();

    Commit { hash, author, email, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_fields_in_order() {
        let commits = parse_commits("abc123|Alice|a@x.com|Add parser\ndef456|Bob|b@x.com|Fix tests\n");
        assert_eq!(
            commits,
            vec![
                Commit {
                    hash: "abc123".into(),
                    author: "Alice".into(),
                    email: "a@x.com".into(),
                    message: "Add parser".into(),
                },
                Commit {
                    hash: "def456".into(),
                    author: "Bob".into(),
                    email: "b@x.com".into(),
                    message: "Fix tests".into(),
                },
            ]
        );
    }

    #[test]
    fn subject_keeps_embedded_delimiters() {
        let commits = parse_commits("abc|Alice|a@x.com|feat: a | b | c");
        assert_eq!(commits[0].message, "feat: a | b | c");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let commits = parse_commits("abc\ndef||\n");
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].author, "unknown");
        assert_eq!(commits[0].email, "");
        assert_eq!(commits[0].message, "");
        assert_eq!(commits[1].hash, "def");
        assert_eq!(commits[1].author, "unknown");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let commits = parse_commits("\n  \na|A|a@x|one\n\n\t\nb|B|b@x|two\n");
        assert_eq!(commits.len(), 2);
    }

    #[test]
    fn empty_text_has_no_commits() {
        assert!(parse_commits("").is_empty());
    }
}
