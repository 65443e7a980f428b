//! Static policy tables: trusted authors, control labels, and the
//! changelog-category to label mapping.
//!
//! Everything in here is an immutable constant. The tables are intentionally
//! small enough that lookups are plain slice scans.

/// Context string attached to every commit status this tool creates.
pub const CHECK_NAME: &str = "Run Check (actions)";

/// Label that lets an untrusted author's PR into the check pipeline.
pub const CAN_BE_TESTED_LABEL: &str = "can be tested";
/// Label that skips checks entirely while reporting success.
pub const DO_NOT_TEST_LABEL: &str = "do not test";
/// Label that forces checks to run no matter what else is set.
pub const FORCE_TESTS_LABEL: &str = "force tests";
/// Marker label kept in sync with whether the PR touches submodules.
pub const SUBMODULE_CHANGED_LABEL: &str = "submodule changed";

/// Labels for PR flavors that never need the new checks.
pub const OK_SKIP_LABELS: [&str; 3] = ["release", "pr-backport", "pr-cherrypick"];

/// Labels marking documentation-only PRs, which get a free pass.
pub const DOCUMENTATION_LABELS: [&str; 2] = ["pr-documentation", "pr-doc-fix"];

/// Organization ids whose members are trusted to run checks without the
/// "can be tested" label.
pub const TRUSTED_ORG_IDS: [u64; 3] = [
    7409213,  // yandex
    28471076, // altinity
    54801242, // clickhouse
];

/// Individually trusted contributor logins, lowercase.
pub const TRUSTED_CONTRIBUTORS: [&str; 36] = [
    "achimbab",
    "adevyatova",
    "akazz",
    "akuzm",
    "alesapin",
    "alexey-milovidov",
    "artpaul",
    "azat",
    "bharatnc",
    "blinkov",
    "bobrik",
    "bohutang",
    "codyrobert",
    "damozhaeva",
    "den-crane",
    "enmk",
    "filimonov",
    "gyuton",
    "hagen1778",
    "hczhcz",
    "hexiaoting",
    "ildus",
    "javisantana",
    "kitaisreal",
    "kochetovnicolai",
    "kreuzerkrieg",
    "lehasm",
    "nikitamikhaylov",
    "nvartolomei",
    "olgarev",
    "qoega",
    "s-mx",
    "taiyang-li",
    "vdimir",
    "yiurule",
    "zlobober",
];

/// Changelog category spellings mapped to their classification label.
/// Many-to-one: several spellings share a label. "Other" maps to nothing.
pub const CATEGORY_TO_LABEL: [(&str, &str); 15] = [
    ("New Feature", "pr-feature"),
    ("Bug Fix", "pr-bugfix"),
    (
        "Bug Fix (user-visible misbehaviour in official stable or prestable release)",
        "pr-bugfix",
    ),
    ("Improvement", "pr-improvement"),
    ("Performance Improvement", "pr-performance"),
    ("Backward Incompatible Change", "pr-backward-incompatible"),
    ("Build/Testing/Packaging Improvement", "pr-build"),
    ("Build Improvement", "pr-build"),
    ("Build/Testing Improvement", "pr-build"),
    ("Build", "pr-build"),
    ("Packaging Improvement", "pr-build"),
    (
        "Not for changelog (changelog entry is not required)",
        "pr-not-for-changelog",
    ),
    ("Not for changelog", "pr-not-for-changelog"),
    (
        "Documentation (changelog entry is not required)",
        "pr-documentation",
    ),
    ("Documentation", "pr-documentation"),
];

/// Look up the classification label for a changelog category.
pub fn label_for_category(category: &str) -> Option<&'static str> {
    CATEGORY_TO_LABEL
        .iter()
        .find(|(cat, _)| *cat == category)
        .map(|(_, label)| *label)
}

/// Whether a label is one of the changelog classification labels.
pub fn is_category_label(label: &str) -> bool {
    CATEGORY_TO_LABEL.iter().any(|(_, l)| *l == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_categories() {
        assert_eq!(label_for_category("New Feature"), Some("pr-feature"));
        assert_eq!(label_for_category("Build"), Some("pr-build"));
        assert_eq!(
            label_for_category("Documentation (changelog entry is not required)"),
            Some("pr-documentation")
        );
    }

    #[test]
    fn several_spellings_share_a_label() {
        for cat in [
            "Build/Testing/Packaging Improvement",
            "Build Improvement",
            "Build/Testing Improvement",
            "Build",
            "Packaging Improvement",
        ] {
            assert_eq!(label_for_category(cat), Some("pr-build"));
        }
    }

    #[test]
    fn unknown_category_maps_to_nothing() {
        assert_eq!(label_for_category("Other"), None);
        assert_eq!(label_for_category(""), None);
        // lookups are case sensitive, matching the PR template exactly
        assert_eq!(label_for_category("new feature"), None);
    }

    #[test]
    fn recognizes_category_labels() {
        assert!(is_category_label("pr-bugfix"));
        assert!(is_category_label("pr-not-for-changelog"));
        assert!(!is_category_label("can be tested"));
        assert!(!is_category_label("submodule changed"));
    }
}
