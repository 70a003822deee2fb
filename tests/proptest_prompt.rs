// SPDX-License-Identifier: MIT
//! Property-based tests for prompt composition and model resolution.
//!
//! 1. Composition layout is exact for arbitrary system/user text.
//! 2. A task identifier only prepends its header — the rest is unchanged.
//! 3. Model resolution is total and lands in the table or on the default.
//!
//! Run with: cargo test --test proptest_prompt

use codex_delegate::{compose_prompt, resolve_model, DEFAULT_MODEL, MODEL_TIERS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn compose_layout_is_exact(sys in ".*", user in ".*") {
        let composed = compose_prompt(&sys, &user, None);
        prop_assert_eq!(composed, format!("{sys}\n\n---\n\n{user}"));
    }

    #[test]
    fn task_id_only_prepends_its_header(
        sys in ".*",
        user in ".*",
        id in "[A-Za-z0-9_-]{1,16}",
    ) {
        let bare = compose_prompt(&sys, &user, None);
        let tagged = compose_prompt(&sys, &user, Some(&id));
        prop_assert_eq!(tagged, format!("TASK_ID: {id}\n\n{bare}"));
    }

    #[test]
    fn resolution_is_total(tier in ".*") {
        let model = resolve_model(&tier);
        let in_table = MODEL_TIERS.iter().any(|(_, m)| *m == model);
        prop_assert!(in_table || model == DEFAULT_MODEL);
    }

    #[test]
    fn unknown_tiers_always_get_the_default(tier in "[a-z]{1,12}") {
        prop_assume!(MODEL_TIERS.iter().all(|(t, _)| *t != tier.as_str()));
        prop_assert_eq!(resolve_model(&tier), DEFAULT_MODEL);
    }
}
