//! Validates the PR description against the pull-request template.
//!
//! The description must name exactly one changelog category and, unless the
//! category is exempt, a non-empty changelog entry. Parsing is a single pass
//! over normalized lines driven by a small state machine.
use regex::Regex;

use crate::{check::types::ParsedDescription, result::Result};

/// Upper bound on the composed error message, matching the commit status
/// description limit.
const MAX_MESSAGE_LEN: usize = 140;

/// Scanner states. Header lines move the scanner out of `Scanning`; blank
/// lines move it back.
#[derive(Clone, Copy)]
enum State {
    /// Looking for a category or entry header.
    Scanning,
    /// Category header seen; at most one blank line may precede the category.
    AwaitCategory { seen_blank: bool },
    /// Category captured; a non-blank line here is a second category.
    AfterCategory,
    /// Entry header seen; at most one blank line may precede the entry.
    AwaitEntry { seen_blank: bool },
    /// Collecting entry lines until the next blank line.
    InEntry,
}

fn truncate_chars(s: String, max: usize) -> String {
    if s.chars().count() <= max {
        return s;
    }
    s.chars().take(max).collect()
}

/// Extract the changelog category and entry from the PR body.
///
/// Returns the category (possibly empty) and an error message when the body
/// does not match the template. A partially parsed category is returned even
/// on failure so the caller can still sync labels.
pub fn check_description(body: &str) -> Result<ParsedDescription> {
    let whitespace_re = Regex::new(r"\s+")?;
    let category_header_re =
        Regex::new(r"(?i)^[#>*_ ]*change\s*log\s*category")?;
    let entry_header_re =
        Regex::new(r"(?i)^[#>*_ ]*(short\s*description|change\s*log\s*entry)")?;
    let list_prefix_re = Regex::new(r"^[-*\s]*")?;
    // Rejects placeholder entries like "..." by deleting these characters
    // wherever they occur, not just at the ends.
    let entry_strip_re = Regex::new(r"[#>*_.\- ]")?;

    let lines: Vec<String> = body
        .lines()
        .map(|l| whitespace_re.replace_all(l.trim(), " ").to_string())
        .collect();

    let mut category = String::new();
    let mut entry = String::new();
    let mut entry_lines: Vec<String> = vec![];
    let mut state = State::Scanning;

    for line in &lines {
        match state {
            State::Scanning => {
                if category_header_re.is_match(line) {
                    state = State::AwaitCategory { seen_blank: false };
                } else if entry_header_re.is_match(line) {
                    // A later entry header restarts collection.
                    entry_lines.clear();
                    state = State::AwaitEntry { seen_blank: false };
                }
            }
            State::AwaitCategory { seen_blank } => {
                if line.is_empty() && !seen_blank {
                    state = State::AwaitCategory { seen_blank: true };
                } else {
                    category = list_prefix_re.replace(line, "").to_string();
                    state = State::AfterCategory;
                }
            }
            State::AfterCategory => {
                if line.is_empty() {
                    state = State::Scanning;
                } else {
                    // Only the line immediately after the category is
                    // inspected; a second category further down is not
                    // detected.
                    let second = list_prefix_re.replace(line, "").to_string();
                    let message = truncate_chars(
                        format!(
                            "More than one changelog category specified: '{category}', '{second}'"
                        ),
                        MAX_MESSAGE_LEN,
                    );
                    return Ok(ParsedDescription {
                        category,
                        error: Some(message),
                    });
                }
            }
            State::AwaitEntry { seen_blank } => {
                if line.is_empty() && !seen_blank {
                    state = State::AwaitEntry { seen_blank: true };
                } else if line.is_empty() {
                    entry = String::new();
                    state = State::Scanning;
                } else {
                    entry_lines.push(line.clone());
                    state = State::InEntry;
                }
            }
            State::InEntry => {
                if line.is_empty() {
                    entry = entry_strip_re
                        .replace_all(&entry_lines.join(" "), "")
                        .to_string();
                    entry_lines.clear();
                    state = State::Scanning;
                } else {
                    entry_lines.push(line.clone());
                }
            }
        }
    }

    // An entry still being collected at end of input is finalized; an entry
    // header with nothing after it leaves the entry empty.
    if matches!(state, State::InEntry | State::AwaitEntry { .. }) {
        entry = entry_strip_re
            .replace_all(&entry_lines.join(" "), "")
            .to_string();
    }

    if category.is_empty() {
        return Ok(ParsedDescription {
            category,
            error: Some("Changelog category is empty".to_string()),
        });
    }

    // Documentation, non-significant, and not-for-changelog categories are
    // exempt from requiring an entry.
    let exempt_re = Regex::new(
        r"(?i)^(doc|(non|in|not|un)[-\s]*significant|not[ ]*for[ ]*changelog)",
    )?;
    if exempt_re.is_match(&category) {
        return Ok(ParsedDescription {
            category,
            error: None,
        });
    }

    if entry.is_empty() {
        let message =
            format!("Changelog entry required for category '{category}'");
        return Ok(ParsedDescription {
            category,
            error: Some(message),
        });
    }

    Ok(ParsedDescription {
        category,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(body: &str) -> ParsedDescription {
        check_description(body).unwrap()
    }

    #[test]
    fn empty_body_has_no_category() {
        let parsed = check("");

        assert_eq!(parsed.category, "");
        assert_eq!(
            parsed.error.as_deref(),
            Some("Changelog category is empty")
        );
    }

    #[test]
    fn body_without_headers_has_no_category() {
        let parsed = check("Fixes a bug.\n\nCloses #123.\n");

        assert_eq!(parsed.category, "");
        assert_eq!(
            parsed.error.as_deref(),
            Some("Changelog category is empty")
        );
    }

    #[test]
    fn parses_category_and_entry() {
        let body = "### Changelog category (leave one):\n\
                    - Bug Fix\n\
                    \n\
                    ### Changelog entry (a user-readable short description):\n\
                    Fixed incorrect handling of empty arrays.\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "Bug Fix");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn header_matching_is_case_insensitive_and_tolerates_markup() {
        let body = "> ## CHANGE LOG CATEGORY\n\
                    * New Feature\n\
                    \n\
                    __Short description__\n\
                    Adds a new aggregate function.\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "New Feature");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn one_blank_line_allowed_between_header_and_category() {
        let body = "Changelog category:\n\n- Improvement\n\n\
                    Changelog entry:\n\nBetter error messages.\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "Improvement");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn second_category_on_next_line_fails_with_both_names() {
        let body = "Changelog category:\n- Bug Fix\n- New Feature\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "Bug Fix");
        let error = parsed.error.unwrap();
        assert_eq!(
            error,
            "More than one changelog category specified: 'Bug Fix', 'New Feature'"
        );
    }

    #[test]
    fn second_category_message_is_truncated_to_140_chars() {
        let long_a = "A".repeat(120);
        let long_b = "B".repeat(120);
        let body =
            format!("Changelog category:\n- {long_a}\n- {long_b}\n");
        let parsed = check(&body);

        let error = parsed.error.unwrap();
        assert_eq!(error.chars().count(), 140);
        assert!(
            error.starts_with("More than one changelog category specified:")
        );
    }

    #[test]
    fn second_category_after_blank_line_is_not_detected() {
        // Preserved limitation: only the line immediately after the first
        // category is inspected. The later header overwrites the category.
        let body = "Changelog category:\n- Bug Fix\n\n\
                    Changelog category:\n- New Feature\n\n\
                    Changelog entry:\nSomething user visible.\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "New Feature");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn documentation_category_needs_no_entry() {
        let body = "Changelog category:\n- Documentation\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "Documentation");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn non_significant_spellings_are_exempt() {
        for cat in [
            "Non-significant (changelog entry is not required)",
            "non significant",
            "Insignificant change",
            "Not for changelog",
        ] {
            let body = format!("Changelog category:\n- {cat}\n");
            let parsed = check(&body);

            assert_eq!(parsed.category, cat);
            assert!(parsed.error.is_none(), "category {cat:?} should be exempt");
        }
    }

    #[test]
    fn missing_entry_fails_for_regular_category() {
        let body = "Changelog category:\n- Bug Fix\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "Bug Fix");
        assert_eq!(
            parsed.error.as_deref(),
            Some("Changelog entry required for category 'Bug Fix'")
        );
    }

    #[test]
    fn punctuation_only_entry_is_treated_as_empty() {
        let body = "Changelog category:\n- Bug Fix\n\n\
                    Changelog entry:\n...\n";
        let parsed = check(body);

        assert_eq!(
            parsed.error.as_deref(),
            Some("Changelog entry required for category 'Bug Fix'")
        );
    }

    #[test]
    fn multi_line_entry_is_joined() {
        let body = "Changelog category:\n- Improvement\n\n\
                    Changelog entry:\n\
                    First line of the entry\n\
                    second line of the entry\n\
                    \n\
                    This trailing paragraph is not part of the entry.\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "Improvement");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn later_entry_header_overwrites_earlier_entry() {
        // The second "Changelog entry" header with nothing after it resets
        // the entry, so the description fails.
        let body = "Changelog category:\n- Bug Fix\n\n\
                    Changelog entry:\nReal entry text\n\n\
                    Changelog entry:\n";
        let parsed = check(body);

        assert_eq!(
            parsed.error.as_deref(),
            Some("Changelog entry required for category 'Bug Fix'")
        );
    }

    #[test]
    fn entry_collapses_internal_whitespace() {
        let body = "Changelog category:\n- Performance    Improvement\n\n\
                    Changelog entry:\nSpeeds   up    merges.\n";
        let parsed = check(body);

        // internal whitespace runs collapse to single spaces before matching
        assert_eq!(parsed.category, "Performance Improvement");
        assert!(parsed.error.is_none());
    }

    #[test]
    fn category_header_at_end_of_input_keeps_prior_category() {
        let body = "Changelog category:\n- Bug Fix\n\n\
                    Changelog entry:\nFixes things.\n\n\
                    Changelog category:\n";
        let parsed = check(body);

        assert_eq!(parsed.category, "Bug Fix");
        assert!(parsed.error.is_none());
    }
}
