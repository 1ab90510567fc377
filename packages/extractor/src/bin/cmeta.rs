/**
 * cmeta - component metadata extractor
 *
 * Rewrites a project's sources without their `@Metadata` decorators and
 * writes one `<name>.component.json` per annotated class.
 */
use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use std::path::Path;
use std::process;

use component_metadata::config::{ProjectConfig, ProjectOptions, DEFAULT_CONFIG_FILE};
use component_metadata::file_system::{AbsoluteFsPath, NativeFileSystem, PathManipulation};
use component_metadata::logging::init_logging;
use component_metadata::perform_transform::{collect_source_files, perform_transform};

fn cli() -> Command {
    Command::new("cmeta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract component metadata from @Metadata class decorators")
        .arg(
            Arg::new("files")
                .value_name("FILES")
                .num_args(0..)
                .help("Source files to transform, in addition to the configured includes"),
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("PATH")
                .help("Path to component-metadata.json"),
        )
        .arg(
            Arg::new("context")
                .short('c')
                .long("context")
                .value_name("DIR")
                .help("Directory thumbnails are resolved against"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Output directory for rewritten sources"),
        )
        .arg(
            Arg::new("artifact-dir")
                .long("artifact-dir")
                .value_name("DIR")
                .help("Output directory for metadata artifacts (defaults to --out-dir)"),
        )
        .arg(
            Arg::new("fail-on-diagnostics")
                .long("fail-on-diagnostics")
                .action(ArgAction::SetTrue)
                .help("Exit with an error when any metadata is rejected"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase logging (-v info, -vv debug)"),
        )
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<bool> {
    let fs = NativeFileSystem::new();

    let config_path = match matches.get_one::<String>("project") {
        Some(project) => {
            let path = fs.resolve(&[project.as_str()]);
            let is_dir = Path::new(path.as_str()).is_dir();
            Some(if is_dir {
                fs.resolve(&[path.as_str(), DEFAULT_CONFIG_FILE])
            } else {
                path
            })
        }
        None => {
            let candidate = fs.resolve(&[DEFAULT_CONFIG_FILE]);
            Path::new(candidate.as_str()).exists().then_some(candidate)
        }
    };

    let (mut config, root) = match &config_path {
        Some(path) => (
            ProjectConfig::load(path.as_path())?,
            AbsoluteFsPath::new(fs.dirname(path.as_str())),
        ),
        None => (ProjectConfig::default(), fs.pwd()),
    };

    // Command line paths are relative to the working directory, not the config file.
    let absolute = |value: &String| fs.resolve(&[value.as_str()]).into_string();
    if let Some(context) = matches.get_one::<String>("context") {
        config.context = Some(absolute(context));
    }
    if let Some(out_dir) = matches.get_one::<String>("out-dir") {
        config.out_dir = Some(absolute(out_dir));
    }
    if let Some(artifact_dir) = matches.get_one::<String>("artifact-dir") {
        config.artifact_dir = Some(absolute(artifact_dir));
    }
    if matches.get_flag("fail-on-diagnostics") {
        config.fail_on_diagnostics = true;
    }

    let options = ProjectOptions::resolve(&config, &root, &fs);
    let explicit: Vec<String> = matches
        .get_many::<String>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();

    let files = collect_source_files(&options, &explicit, &fs)?;
    if files.is_empty() {
        anyhow::bail!("no input files (pass FILES or set \"include\" in {DEFAULT_CONFIG_FILE})");
    }

    let summary = perform_transform(&files, &options, &fs).context("transform failed")?;

    for (file, failure) in summary.failures() {
        eprintln!("{}: {}", file, failure);
    }
    for diagnostic in summary.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    println!(
        "Transformed {} files, emitted {} artifacts, {} diagnostics",
        summary.files.len(),
        summary.artifact_count(),
        summary.diagnostics().count()
    );

    Ok(!summary.is_failure(options.fail_on_diagnostics))
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}
