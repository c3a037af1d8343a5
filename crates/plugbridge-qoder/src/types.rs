//! Qoder bundle types — the converter's output and the writer's input.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A rendered agent document, written to `agents/<name>.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QoderAgentFile {
    pub name: String,
    pub content: String,
}

/// A rendered command document, written to `commands/<name>.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QoderCommandFile {
    pub name: String,
    pub content: String,
}

/// A skill directory to copy verbatim into `skills/<name>/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QoderSkillDir {
    pub name: String,
    pub source_dir: PathBuf,
}

/// Everything a Qoder install needs. Names are already normalized slugs and
/// each list keeps the order of the source plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QoderBundle {
    pub agents: Vec<QoderAgentFile>,
    pub commands: Vec<QoderCommandFile>,
    pub skill_dirs: Vec<QoderSkillDir>,
}

impl QoderBundle {
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty() && self.commands.is_empty() && self.skill_dirs.is_empty()
    }
}
