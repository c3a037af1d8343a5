//! Qoder target for plugbridge.
//!
//! Converts a Claude Code plugin into Qoder's layout and writes it out:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use plugbridge_core::{ClaudePlugin, ConvertOptions};
//! use plugbridge_qoder::{convert_claude_to_qoder, write_qoder_bundle};
//!
//! # async fn run(plugin: ClaudePlugin) -> plugbridge_core::Result<()> {
//! let bundle = convert_claude_to_qoder(&plugin, &ConvertOptions::default());
//! write_qoder_bundle(Path::new("/home/me"), &bundle).await?;
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod types;
pub mod writer;

pub use convert::{convert_claude_to_qoder, map_tool_name};
pub use types::{QoderAgentFile, QoderBundle, QoderCommandFile, QoderSkillDir};
pub use writer::{QODER_DIR, QoderPaths, resolve_qoder_paths, write_qoder_bundle};
