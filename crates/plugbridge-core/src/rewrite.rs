//! Rewriting of per-user configuration paths inside document bodies.
//!
//! Agent and command bodies often point at the source tool's config
//! directory (`~/.claude/settings.json`, `.claude/commands/`). Each dialect
//! pair declares an ordered rule list; rules run in order and replace every
//! occurrence.

/// A literal `pattern` → `replacement` substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRewrite {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl PathRewrite {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }
}

/// Claude Code → Qoder. The home-relative form must run before the bare
/// form, which it contains as a substring.
pub const CLAUDE_TO_QODER_PATHS: &[PathRewrite] = &[
    PathRewrite::new("~/.claude/", "~/.qoder/"),
    PathRewrite::new(".claude/", ".qoder/"),
];

/// Apply `rules` to `body` in order.
pub fn rewrite_paths(body: &str, rules: &[PathRewrite]) -> String {
    rules.iter().fold(body.to_owned(), |text, rule| {
        text.replace(rule.pattern, rule.replacement)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_relative_form() {
        let out = rewrite_paths(
            "Use ~/.claude/settings.json for configuration",
            CLAUDE_TO_QODER_PATHS,
        );
        assert_eq!(out, "Use ~/.qoder/settings.json for configuration");
        assert!(!out.contains(".qoder/.qoder/"));
    }

    #[test]
    fn bare_relative_form() {
        let out = rewrite_paths("See .claude/commands/plan.md", CLAUDE_TO_QODER_PATHS);
        assert_eq!(out, "See .qoder/commands/plan.md");
    }

    #[test]
    fn rewrites_every_occurrence() {
        let out = rewrite_paths(
            "~/.claude/a and ~/.claude/b and .claude/c",
            CLAUDE_TO_QODER_PATHS,
        );
        assert_eq!(out, "~/.qoder/a and ~/.qoder/b and .qoder/c");
    }

    #[test]
    fn leaves_unrelated_text() {
        let body = "claude is mentioned but no config path";
        assert_eq!(rewrite_paths(body, CLAUDE_TO_QODER_PATHS), body);
    }

    #[test]
    fn empty_rule_set_is_identity() {
        assert_eq!(rewrite_paths("~/.claude/x", &[]), "~/.claude/x");
    }
}
