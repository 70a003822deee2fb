//! Capability-tier → Codex model resolution.
//!
//! Agents declare a coarse cost/quality preference ("haiku", "sonnet",
//! "opus"); the table below maps each to a concrete Codex model. Resolution
//! is total: unknown tiers fall back to [`DEFAULT_MODEL`] instead of erroring.

/// Model used when a tier has no entry in [`MODEL_TIERS`].
pub const DEFAULT_MODEL: &str = "gpt-5.2-codex";

/// Static tier → model table.
pub const MODEL_TIERS: &[(&str, &str)] = &[
    ("haiku", "gpt-5.1-codex-mini"), // scout/scribe/review — cheaper, faster
    ("sonnet", "gpt-5.2-codex"),     // latest frontier
    ("opus", "gpt-5.1-codex-max"),   // deep reasoning
];

/// Resolve a capability tier to a Codex model identifier.
///
/// Exact string match only; anything else — unknown tiers, casing variants,
/// the empty string — resolves to [`DEFAULT_MODEL`].
pub fn resolve_model(tier: &str) -> &'static str {
    MODEL_TIERS
        .iter()
        .find(|(t, _)| *t == tier)
        .map_or(DEFAULT_MODEL, |(_, model)| *model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiers_resolve_to_mapped_models() {
        assert_eq!(resolve_model("haiku"), "gpt-5.1-codex-mini");
        assert_eq!(resolve_model("sonnet"), "gpt-5.2-codex");
        assert_eq!(resolve_model("opus"), "gpt-5.1-codex-max");
    }

    #[test]
    fn every_table_entry_resolves_to_itself() {
        for (tier, model) in MODEL_TIERS {
            assert_eq!(resolve_model(tier), *model);
        }
    }

    #[test]
    fn unknown_tier_falls_back_to_default() {
        assert_eq!(resolve_model("gpt-6"), DEFAULT_MODEL);
        assert_eq!(resolve_model(""), DEFAULT_MODEL);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(resolve_model("Haiku"), DEFAULT_MODEL);
        assert_eq!(resolve_model("OPUS"), DEFAULT_MODEL);
    }
}
