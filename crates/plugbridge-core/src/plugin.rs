//! Source plugin model — a Claude Code plugin as handed over by a loader.
//!
//! A plugin bundles three kinds of entities:
//!
//! - **agents** — markdown files under `agents/` with a YAML header and a
//!   free-text instruction body.
//! - **commands** — markdown files under `commands/`, possibly nested, whose
//!   names carry a `group:item` namespace.
//! - **skills** — directories containing a `SKILL.md` plus supporting files.
//!
//! The model is read-only input to the converters. Field names serialize in
//! camelCase so a loader written in another tool can hand the plugin over as
//! JSON.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A fully loaded Claude Code plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudePlugin {
    /// Root directory the plugin was loaded from.
    pub root: PathBuf,

    /// Contents of `.claude-plugin/plugin.json`.
    pub manifest: PluginManifest,

    #[serde(default)]
    pub agents: Vec<ClaudeAgent>,

    #[serde(default)]
    pub commands: Vec<ClaudeCommand>,

    #[serde(default)]
    pub skills: Vec<ClaudeSkill>,

    /// Raw hook configuration. Not consumed by any converter yet.
    #[serde(default)]
    pub hooks: Option<serde_json::Value>,

    /// MCP servers declared by the plugin, keyed by server name.
    #[serde(default)]
    pub mcp_servers: BTreeMap<String, McpServer>,
}

/// Plugin manifest metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

/// A named behavioral profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeAgent {
    pub name: String,
    pub description: Option<String>,

    /// Tool tokens the agent may use (e.g. `bash`, `read`).
    pub capabilities: Option<Vec<String>>,

    pub model: Option<String>,

    /// Markdown body without the header block.
    #[serde(default)]
    pub body: String,

    pub source_path: PathBuf,
}

/// An invocable instruction template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeCommand {
    /// Command name, possibly namespaced (`workflows:plan`).
    pub name: String,
    pub description: Option<String>,
    pub argument_hint: Option<String>,
    pub model: Option<String>,
    pub allowed_tools: Option<Vec<String>>,

    #[serde(default)]
    pub body: String,

    pub source_path: PathBuf,
}

/// A skill directory. Skills are relocated, never rewritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeSkill {
    pub name: String,
    pub description: Option<String>,

    /// Directory holding `SKILL.md` and its supporting files.
    pub source_dir: PathBuf,

    /// Path to the skill's `SKILL.md`.
    pub skill_path: PathBuf,
}

/// An MCP server entry from the plugin's `.mcp.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServer {
    pub command: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub env: BTreeMap<String, String>,

    pub url: Option<String>,
}
