//! Conversion options shared by every target dialect.
//!
//! Each target reads the keys it understands and ignores the rest, so one
//! options record can drive several writers. Unknown keys in a TOML file are
//! accepted silently.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How agents are framed in the target tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    /// Agents become top-level assistants.
    Primary,
    /// Agents become delegated sub-agents.
    #[default]
    Subagent,
}

/// Coarse permission policy for generated agents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionMode {
    #[default]
    None,
    Broad,
    /// Derive permissions from each command's allowed tools.
    FromCommands,
}

/// Options accepted by every `convert_*` entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    #[serde(alias = "agentMode")]
    pub agent_mode: AgentMode,

    /// Derive a sampling temperature hint from agent descriptions.
    #[serde(alias = "inferTemperature")]
    pub infer_temperature: bool,

    pub permissions: PermissionMode,
}

impl ConvertOptions {
    /// Load options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ConvertOptions::default();
        assert_eq!(options.agent_mode, AgentMode::Subagent);
        assert!(!options.infer_temperature);
        assert_eq!(options.permissions, PermissionMode::None);
    }

    #[test]
    fn parses_toml() {
        let options = ConvertOptions::from_toml_str(
            "agent_mode = \"primary\"\ninfer_temperature = true\npermissions = \"from-commands\"\n",
        )
        .unwrap();
        assert_eq!(options.agent_mode, AgentMode::Primary);
        assert!(options.infer_temperature);
        assert_eq!(options.permissions, PermissionMode::FromCommands);
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let options =
            ConvertOptions::from_toml_str("agentMode = \"subagent\"\ninferTemperature = true\n")
                .unwrap();
        assert_eq!(options.agent_mode, AgentMode::Subagent);
        assert!(options.infer_temperature);
    }

    #[test]
    fn ignores_unknown_keys() {
        let options = ConvertOptions::from_toml_str(
            "permissions = \"broad\"\nmodel_overrides = { default = \"fast\" }\nextra = 3\n",
        )
        .unwrap();
        assert_eq!(options.permissions, PermissionMode::Broad);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ConvertOptions::from_toml_str("agent_mode = \"sideways\"").is_err());
    }
}
