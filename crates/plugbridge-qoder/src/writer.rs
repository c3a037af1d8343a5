//! Materializes a [`QoderBundle`] on disk.
//!
//! Layout, relative to the resolved `.qoder` directory:
//!
//! ```text
//! agents/<name>.md
//! commands/<name>.md
//! skills/<name>/...
//! ```
//!
//! Categories are written in that order and only touch the filesystem when
//! they have entries, so an empty bundle creates nothing. The first failure
//! aborts the call; files written before it are left in place.

use std::path::{Path, PathBuf};

use plugbridge_core::{Result, copy_dir, ensure_dir, write_text};
use tracing::{debug, info};

use crate::types::QoderBundle;

/// Name of Qoder's configuration directory.
pub const QODER_DIR: &str = ".qoder";

/// Resolved output directories for one write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QoderPaths {
    pub qoder_dir: PathBuf,
    pub agents_dir: PathBuf,
    pub commands_dir: PathBuf,
    pub skills_dir: PathBuf,
}

/// Use `output_root` directly when it already names a `.qoder` directory,
/// otherwise nest `.qoder` beneath it.
pub fn resolve_qoder_paths(output_root: &Path) -> QoderPaths {
    let qoder_dir = if output_root.file_name().is_some_and(|name| name == QODER_DIR) {
        output_root.to_path_buf()
    } else {
        output_root.join(QODER_DIR)
    };

    QoderPaths {
        agents_dir: qoder_dir.join("agents"),
        commands_dir: qoder_dir.join("commands"),
        skills_dir: qoder_dir.join("skills"),
        qoder_dir,
    }
}

/// Write every agent, command and skill of `bundle` under `output_root`.
pub async fn write_qoder_bundle(output_root: &Path, bundle: &QoderBundle) -> Result<()> {
    let paths = resolve_qoder_paths(output_root);
    debug!(root = %paths.qoder_dir.display(), "writing qoder bundle");

    if !bundle.agents.is_empty() {
        ensure_dir(&paths.agents_dir).await?;
        for agent in &bundle.agents {
            let path = paths.agents_dir.join(format!("{}.md", agent.name));
            write_text(&path, &format!("{}\n", agent.content)).await?;
        }
    }

    if !bundle.commands.is_empty() {
        ensure_dir(&paths.commands_dir).await?;
        for command in &bundle.commands {
            let path = paths.commands_dir.join(format!("{}.md", command.name));
            write_text(&path, &format!("{}\n", command.content)).await?;
        }
    }

    if !bundle.skill_dirs.is_empty() {
        ensure_dir(&paths.skills_dir).await?;
        for skill in &bundle.skill_dirs {
            let target = paths.skills_dir.join(&skill.name);
            debug!(
                name = %skill.name,
                from = %skill.source_dir.display(),
                "copying skill"
            );
            copy_dir(&skill.source_dir, &target).await?;
        }
    }

    info!(
        root = %paths.qoder_dir.display(),
        agents = bundle.agents.len(),
        commands = bundle.commands.len(),
        skills = bundle.skill_dirs.len(),
        "qoder bundle written"
    );
    Ok(())
}
