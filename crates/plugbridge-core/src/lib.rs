//! Shared building blocks for converting Claude Code plugins into other
//! assistant tools' layouts.
//!
//! This crate provides:
//!
//! - **Plugin model** — the in-memory Claude Code plugin (agents, commands,
//!   skills) that every converter reads.
//!
//! - **Frontmatter** — formatting and parsing of markdown documents with a
//!   YAML header block.
//!
//! - **Naming and path rewriting** — the slug rules and config-path
//!   substitutions every dialect applies identically.
//!
//! - **Options** — the conversion options record shared across targets.
//!
//! - **Filesystem helpers** — async `ensure_dir`, `write_text` and
//!   `copy_dir` for bundle writers.
//!
//! Target dialects live in their own crates (e.g. `plugbridge-qoder`) and
//! build on these pieces.

pub mod error;
pub mod frontmatter;
pub mod fs;
pub mod naming;
pub mod options;
pub mod plugin;
pub mod rewrite;

pub use error::{BridgeError, Result};
pub use frontmatter::{FieldValue, Frontmatter, format_frontmatter, parse_frontmatter};
pub use fs::{copy_dir, ensure_dir, write_text};
pub use naming::{FALLBACK_NAME, normalize_name};
pub use options::{AgentMode, ConvertOptions, PermissionMode};
pub use plugin::{
    ClaudeAgent, ClaudeCommand, ClaudePlugin, ClaudeSkill, McpServer, PluginManifest,
};
pub use rewrite::{CLAUDE_TO_QODER_PATHS, PathRewrite, rewrite_paths};
