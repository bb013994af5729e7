//! The closed set of legal transition guard labels.
//!
//! Changing this list is a recompile-level configuration change, not a
//! runtime option. Membership is exact and case-sensitive; an edge whose
//! condition is empty after trimming is "unlabelled", which is distinct
//! from an explicit `always`.

/// Legal guard labels, in display order.
pub const ALLOWED_CONDITIONS: [&str; 7] = [
    "always",
    "if_yes",
    "if_no",
    "valid_account",
    "account_created",
    "on_error",
    "user_silence",
];

/// Condition assigned to edges created interactively via `connect`.
pub const DEFAULT_CONDITION: &str = "always";

/// Exact, case-sensitive membership test against [`ALLOWED_CONDITIONS`].
pub fn is_allowed_condition(condition: &str) -> bool {
    ALLOWED_CONDITIONS.contains(&condition)
}
