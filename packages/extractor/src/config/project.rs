use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::file_system::{AbsoluteFsPath, PathManipulation};

/// File looked up in the working directory when no `--project` is given.
pub const DEFAULT_CONFIG_FILE: &str = "component-metadata.json";

const DEFAULT_OUT_DIR: &str = "dist";

/// `component-metadata.json` as written by the user. Paths are relative to the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Base directory for thumbnails and `env.context`.
    pub context: Option<String>,
    /// Glob patterns selecting the source files.
    #[serde(default)]
    pub include: Vec<String>,
    /// Glob patterns, matched against paths relative to the project root.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Where rewritten sources go.
    pub out_dir: Option<String>,
    /// Where `<Name>.component.json` artifacts go. Defaults to `outDir`.
    pub artifact_dir: Option<String>,
    /// Treat metadata diagnostics as a failed run.
    #[serde(default)]
    pub fail_on_diagnostics: bool,
}

impl ProjectConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid configuration in {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: ProjectConfig = serde_json::from_str(content)?;
        Ok(config)
    }
}

/// Configuration with every path made absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub root: AbsoluteFsPath,
    pub context: AbsoluteFsPath,
    pub out_dir: AbsoluteFsPath,
    pub artifact_dir: AbsoluteFsPath,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub fail_on_diagnostics: bool,
}

impl ProjectOptions {
    /// Resolve `config` against `root`, the directory holding the configuration file.
    pub fn resolve<P: PathManipulation + ?Sized>(
        config: &ProjectConfig,
        root: &AbsoluteFsPath,
        fs: &P,
    ) -> Self {
        let root = fs.resolve(&[root.as_str()]);
        let context = match &config.context {
            Some(context) => fs.resolve(&[root.as_str(), context.as_str()]),
            None => root.clone(),
        };
        let out_dir = fs.resolve(&[
            root.as_str(),
            config.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR),
        ]);
        let artifact_dir = match &config.artifact_dir {
            Some(dir) => fs.resolve(&[root.as_str(), dir.as_str()]),
            None => out_dir.clone(),
        };
        ProjectOptions {
            root,
            context,
            out_dir,
            artifact_dir,
            include: config.include.clone(),
            exclude: config.exclude.clone(),
            fail_on_diagnostics: config.fail_on_diagnostics,
        }
    }
}
