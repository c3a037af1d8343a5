//! Entity name normalization.
//!
//! Every target dialect stores agents, commands and skills under file or
//! directory names derived from the source name, so all of them go through
//! the same slug rules.

use std::sync::LazyLock;

use regex::Regex;

/// Used when a name normalizes to nothing.
pub const FALLBACK_NAME: &str = "item";

static PATH_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\\/]+").unwrap());
static COLONS_AND_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[:\s]+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").unwrap());
static DASH_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Turn an arbitrary entity name into a lowercase `[a-z0-9_-]` slug.
///
/// `"workflows:plan"` becomes `"workflows-plan"` and `"My Agent Name"`
/// becomes `"my-agent-name"`. Names with no usable characters map to
/// [`FALLBACK_NAME`]. The function is idempotent.
pub fn normalize_name(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FALLBACK_NAME.to_owned();
    }

    let lowered = trimmed.to_lowercase();
    let slug = PATH_SEPARATORS.replace_all(&lowered, "-");
    let slug = COLONS_AND_SPACE.replace_all(&slug, "-");
    let slug = DISALLOWED.replace_all(&slug, "-");
    let slug = DASH_RUNS.replace_all(&slug, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_NAME.to_owned()
    } else {
        slug.to_owned()
    }
}
