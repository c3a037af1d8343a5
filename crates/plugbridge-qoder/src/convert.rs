//! Claude Code plugin → Qoder bundle conversion.
//!
//! Pure and total: no I/O, and missing optional fields fall back to defaults
//! instead of failing.

use plugbridge_core::{
    CLAUDE_TO_QODER_PATHS, ClaudeAgent, ClaudeCommand, ClaudePlugin, ClaudeSkill,
    ConvertOptions, Frontmatter, format_frontmatter, normalize_name, rewrite_paths,
};
use tracing::{debug, info};

use crate::types::{QoderAgentFile, QoderBundle, QoderCommandFile, QoderSkillDir};

/// Qoder's name for a Claude tool token, matched case-insensitively.
pub fn map_tool_name(token: &str) -> Option<&'static str> {
    let mapped = match token.to_ascii_lowercase().as_str() {
        "bash" => "Bash",
        "read" => "Read",
        "write" => "Write",
        "edit" => "Edit",
        "grep" => "Grep",
        "glob" => "Glob",
        "webfetch" => "WebFetch",
        "websearch" => "WebSearch",
        "patch" => "Patch",
        "task" => "Task",
        "question" => "Question",
        "todowrite" => "TodoWrite",
        "todoread" => "TodoRead",
        _ => return None,
    };
    Some(mapped)
}

/// Convert a plugin into a Qoder bundle.
///
/// `options` is accepted for parity with the other targets; Qoder has no use
/// for agent framing, temperature hints or permission policies.
pub fn convert_claude_to_qoder(plugin: &ClaudePlugin, options: &ConvertOptions) -> QoderBundle {
    debug!(plugin = %plugin.manifest.name, ?options, "converting plugin to qoder");

    let bundle = QoderBundle {
        agents: plugin.agents.iter().map(convert_agent).collect(),
        commands: plugin.commands.iter().map(convert_command).collect(),
        skill_dirs: plugin.skills.iter().map(convert_skill).collect(),
    };

    info!(
        plugin = %plugin.manifest.name,
        agents = bundle.agents.len(),
        commands = bundle.commands.len(),
        skills = bundle.skill_dirs.len(),
        "converted plugin to qoder"
    );
    bundle
}

fn convert_agent(agent: &ClaudeAgent) -> QoderAgentFile {
    let name = normalize_name(&agent.name);

    let mut header = Frontmatter::new();
    header.insert("name", name.as_str());
    header.insert(
        "description",
        agent
            .description
            .clone()
            .unwrap_or_else(|| format!("Converted from Claude agent {}", agent.name)),
    );

    let tools: Vec<String> = agent
        .capabilities
        .iter()
        .flatten()
        .map(|token| map_tool_name(token).map_or_else(|| token.clone(), str::to_owned))
        .collect();
    if !tools.is_empty() {
        header.insert("tools", tools);
    }

    let body = rewrite_paths(agent.body.trim(), CLAUDE_TO_QODER_PATHS);
    debug!(source = %agent.name, name = %name, "converted agent");

    QoderAgentFile {
        content: format_frontmatter(&header, &body),
        name,
    }
}

fn convert_command(command: &ClaudeCommand) -> QoderCommandFile {
    let name = normalize_name(&command.name);

    let mut header = Frontmatter::new();
    header.insert("name", name.as_str());
    header.insert(
        "description",
        command
            .description
            .clone()
            .unwrap_or_else(|| format!("Converted from Claude command {}", command.name)),
    );
    if let Some(hint) = &command.argument_hint {
        header.insert("argument-hint", hint.as_str());
    }
    if let Some(allowed) = &command.allowed_tools {
        header.insert("allowed-tools", allowed.clone());
    }

    let body = rewrite_paths(command.body.trim(), CLAUDE_TO_QODER_PATHS);
    debug!(source = %command.name, name = %name, "converted command");

    QoderCommandFile {
        content: format_frontmatter(&header, &body),
        name,
    }
}

fn convert_skill(skill: &ClaudeSkill) -> QoderSkillDir {
    QoderSkillDir {
        name: normalize_name(&skill.name),
        source_dir: skill.source_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_tools_case_insensitively() {
        assert_eq!(map_tool_name("bash"), Some("Bash"));
        assert_eq!(map_tool_name("BASH"), Some("Bash"));
        assert_eq!(map_tool_name("WebFetch"), Some("WebFetch"));
        assert_eq!(map_tool_name("todoread"), Some("TodoRead"));
    }

    #[test]
    fn unknown_tools_are_unmapped() {
        assert_eq!(map_tool_name("customtool"), None);
        assert_eq!(map_tool_name(""), None);
    }

    #[test]
    fn agent_without_capabilities_has_no_tools() {
        let agent = ClaudeAgent {
            name: "Plain".into(),
            capabilities: Some(Vec::new()),
            body: "Do it.".into(),
            ..Default::default()
        };
        let file = convert_agent(&agent);
        assert!(!file.content.contains("tools"));
        assert!(
            file.content
                .contains("description: Converted from Claude agent Plain")
        );
    }

    #[test]
    fn blank_skill_name_falls_back() {
        let skill = ClaudeSkill {
            name: "  ".into(),
            source_dir: "/tmp/skill".into(),
            ..Default::default()
        };
        assert_eq!(convert_skill(&skill).name, "item");
    }
}
