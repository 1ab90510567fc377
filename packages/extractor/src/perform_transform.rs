//! Perform Transform
//!
//! Project-level driver: expands the configured sources, transforms them in
//! parallel and writes rewritten sources plus metadata artifacts.

use anyhow::Context;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::ProjectOptions;
use crate::diagnostics::Diagnostic;
use crate::file_system::{AbsoluteFsPath, FileSystem};
use crate::transform::{transform_with_fs, CapturingHost, TransformOptions};

/// What happened to one source file.
#[derive(Debug, Clone, Default)]
pub struct FileOutcome {
    pub source_file: AbsoluteFsPath,
    /// Rewritten source location. `None` when the file failed.
    pub output_file: Option<AbsoluteFsPath>,
    pub artifacts: Vec<AbsoluteFsPath>,
    pub diagnostics: Vec<Diagnostic>,
    /// Read or parse failure. The file was not written.
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TransformSummary {
    pub files: Vec<FileOutcome>,
}

impl TransformSummary {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.files.iter().flat_map(|file| file.diagnostics.iter())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&AbsoluteFsPath, &str)> {
        self.files
            .iter()
            .filter_map(|file| file.failure.as_deref().map(|f| (&file.source_file, f)))
    }

    pub fn artifact_count(&self) -> usize {
        self.files.iter().map(|file| file.artifacts.len()).sum()
    }

    /// Whether the run should end with a non-zero exit status.
    pub fn is_failure(&self, fail_on_diagnostics: bool) -> bool {
        self.failures().next().is_some()
            || (fail_on_diagnostics && self.diagnostics().next().is_some())
    }
}

/// Expand `include` globs under the project root, drop `exclude` matches and add
/// `explicit` files. The result is deduplicated and sorted.
pub fn collect_source_files<F: FileSystem + ?Sized>(
    options: &ProjectOptions,
    explicit: &[String],
    fs: &F,
) -> anyhow::Result<Vec<AbsoluteFsPath>> {
    let excludes = options
        .exclude
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern).with_context(|| format!("invalid exclude pattern '{pattern}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut files = BTreeSet::new();
    for pattern in &options.include {
        let absolute = fs.join(options.root.as_str(), &[pattern.as_str()]);
        let entries =
            glob::glob(&absolute).with_context(|| format!("invalid include pattern '{pattern}'"))?;
        for entry in entries {
            let path = AbsoluteFsPath::from(entry?);
            let relative = fs
                .relative(options.root.as_str(), path.as_str())
                .unwrap_or_else(|| path.as_str().to_string());
            if excludes.iter().any(|exclude| exclude.matches(&relative)) {
                debug!(file = %path, "excluded");
                continue;
            }
            if fs.stat(&path).map(|stats| stats.is_file).unwrap_or(false) {
                files.insert(path);
            }
        }
    }
    for file in explicit {
        files.insert(fs.resolve(&[file.as_str()]));
    }
    Ok(files.into_iter().collect())
}

/// Where a source file's rewritten form goes: its path below the project root,
/// re-rooted at `out_dir`. Files outside the root keep only their base name.
pub fn output_path_for<F: FileSystem + ?Sized>(
    source_file: &AbsoluteFsPath,
    options: &ProjectOptions,
    fs: &F,
) -> AbsoluteFsPath {
    let relative = fs
        .relative(options.root.as_str(), source_file.as_str())
        .unwrap_or_else(|| fs.basename(source_file.as_str()));
    fs.resolve(&[options.out_dir.as_str(), relative.as_str()])
}

struct Transformed {
    source_file: AbsoluteFsPath,
    result: Result<(String, CapturingHost), String>,
}

fn transform_file<F: FileSystem + Sync + ?Sized>(
    source_file: &AbsoluteFsPath,
    options: &ProjectOptions,
    fs: &F,
) -> Transformed {
    let result = fs
        .read_file(source_file)
        .map_err(|err| format!("Failed to read {source_file}: {err}"))
        .and_then(|source| {
            let transform_options =
                TransformOptions::new(options.context.clone()).with_file_name(source_file.as_str());
            let mut host = CapturingHost::new();
            transform_with_fs(&source, &transform_options, fs, &mut host)
                .map(|code| (code, host))
                .map_err(|err| err.to_string())
        });
    Transformed {
        source_file: source_file.clone(),
        result,
    }
}

/// Transform `files` in parallel, then write the results in input order.
///
/// A file that cannot be read or parsed is recorded in its [`FileOutcome`] and
/// leaves no output. Write failures abort the run.
pub fn perform_transform<F: FileSystem + Sync + ?Sized>(
    files: &[AbsoluteFsPath],
    options: &ProjectOptions,
    fs: &F,
) -> anyhow::Result<TransformSummary> {
    let start = Instant::now();
    info!("Transforming {} files", files.len());

    let transformed: Vec<Transformed> = files
        .par_iter()
        .map(|file| transform_file(file, options, fs))
        .collect();

    let mut summary = TransformSummary::default();
    let mut written_artifacts: HashSet<AbsoluteFsPath> = HashSet::new();

    for Transformed {
        source_file,
        result,
    } in transformed
    {
        let mut outcome = FileOutcome {
            source_file: source_file.clone(),
            ..FileOutcome::default()
        };
        match result {
            Ok((code, host)) => {
                let output_file = output_path_for(&source_file, options, fs);
                write(fs, &output_file, &code)?;
                debug!(file = %source_file, output = %output_file, "wrote source");
                outcome.output_file = Some(output_file);

                for artifact in host.files {
                    let path = fs.resolve(&[options.artifact_dir.as_str(), artifact.name.as_str()]);
                    if !written_artifacts.insert(path.clone()) {
                        warn!(artifact = %path, file = %source_file, "artifact overwritten by a later class with the same name");
                    }
                    write(fs, &path, &artifact.content)?;
                    outcome.artifacts.push(path);
                }
                outcome.diagnostics = host.diagnostics;
            }
            Err(message) => {
                warn!(file = %source_file, "{message}");
                outcome.failure = Some(message);
            }
        }
        summary.files.push(outcome);
    }

    info!(
        artifacts = summary.artifact_count(),
        diagnostics = summary.diagnostics().count(),
        "Transform finished in {:?}",
        start.elapsed()
    );
    Ok(summary)
}

fn write<F: FileSystem + ?Sized>(fs: &F, path: &AbsoluteFsPath, content: &str) -> anyhow::Result<()> {
    let dir = AbsoluteFsPath::new(fs.dirname(path.as_str()));
    fs.ensure_dir(&dir)
        .with_context(|| format!("failed to create {dir}"))?;
    fs.write_file(path, content.as_bytes())
        .with_context(|| format!("failed to write {path}"))
}
