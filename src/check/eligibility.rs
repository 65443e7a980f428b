//! Decides whether automated checks should run for a PR at all.
//!
//! Pure function over the PR's label set and author identity. Rules are
//! evaluated in strict priority order; the first match wins.
use log::*;
use std::collections::HashSet;

use crate::{
    check::types::{StatusState, Verdict},
    config::{
        CAN_BE_TESTED_LABEL, DO_NOT_TEST_LABEL, FORCE_TESTS_LABEL,
        OK_SKIP_LABELS, TRUSTED_CONTRIBUTORS, TRUSTED_ORG_IDS,
    },
};

/// Whether the author is exempt from needing the "can be tested" label.
///
/// Trusted means the login appears in the trusted-contributor list or the
/// author belongs to one of the trusted organizations.
pub fn is_trusted_author(user_login: &str, user_org_ids: &[u64]) -> bool {
    if TRUSTED_CONTRIBUTORS.contains(&user_login.to_lowercase().as_str()) {
        info!("user '{user_login}' is trusted");
        return true;
    }

    info!("user '{user_login}' is not trusted");

    for org_id in user_org_ids {
        if TRUSTED_ORG_IDS.contains(org_id) {
            info!(
                "org '{org_id}' is trusted; will mark user {user_login} as trusted"
            );
            return true;
        }
        info!("org '{org_id}' is not trusted");
    }

    false
}

/// Evaluate the label and trust policy for a PR.
pub fn evaluate(
    labels: &HashSet<String>,
    user_login: &str,
    user_org_ids: &[u64],
) -> Verdict {
    if labels.contains(FORCE_TESTS_LABEL) {
        return Verdict {
            can_run: true,
            reason: format!("Labeled '{FORCE_TESTS_LABEL}'"),
            state: StatusState::Pending,
        };
    }

    if labels.contains(DO_NOT_TEST_LABEL) {
        return Verdict {
            can_run: false,
            reason: format!("Labeled '{DO_NOT_TEST_LABEL}'"),
            state: StatusState::Success,
        };
    }

    if !labels.contains(CAN_BE_TESTED_LABEL)
        && !is_trusted_author(user_login, user_org_ids)
    {
        return Verdict {
            can_run: false,
            reason: format!("Needs '{CAN_BE_TESTED_LABEL}' label"),
            state: StatusState::Failure,
        };
    }

    if OK_SKIP_LABELS.iter().any(|l| labels.contains(*l)) {
        return Verdict {
            can_run: false,
            reason: "Don't try new checks for release/backports/cherry-picks"
                .to_string(),
            state: StatusState::Success,
        };
    }

    Verdict {
        can_run: true,
        reason: "No special conditions apply".to_string(),
        state: StatusState::Pending,
    }
}
