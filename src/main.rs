//! CLI entry point for the Go import reviser.
//!
//! Expands path arguments into Go files, revises them in parallel and either
//! rewrites them in place, prints them, or lists the ones that would change.

use anyhow::Context;
use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use rayon::prelude::*;
use reviser::config::{OutputMode, Settings};
use reviser::io::{ExitCode, FileWalker, OutputManager};
use reviser::project_resolver::ModuleResolver;
use reviser::revise::{GofmtPrinter, Options, Revision, Reviser};
use reviser::ReviseError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Parser)]
#[command(
    name = "reviser",
    version,
    about = "Sort, group and clean up Go import declarations",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Go files or directories (a trailing `/...` is accepted)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Path to a custom .reviser.toml file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Module path of the project (detected from go.mod when omitted)
    #[arg(long)]
    project_name: Option<String>,

    /// Comma separated import path prefixes that get their own groups
    #[arg(long, value_delimiter = ',')]
    local: Vec<String>,

    /// Remove unused imports
    #[arg(long)]
    rm_unused: bool,

    /// Alias versioned imports such as `.../pg/v9` as `pg`
    #[arg(long)]
    set_alias: bool,

    /// Run the formatter over the whole file
    #[arg(long)]
    format: bool,

    /// Where revised files go
    #[arg(long, value_enum)]
    output: Option<OutputMode>,

    /// Print the files that would change without writing them
    #[arg(long)]
    list_diff: bool,

    /// Exit with a non-zero status when --list-diff found changes
    #[arg(long, requires = "list_diff")]
    set_exit_status: bool,

    /// Number of threads to use (overrides config)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// CLI flags take precedence over every other configuration layer.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(project) = &self.project_name {
            settings.project_name = project.clone();
        }
        if !self.local.is_empty() {
            settings.local_prefixes = self.local.clone();
        }
        settings.remove_unused |= self.rm_unused;
        settings.set_alias |= self.set_alias;
        settings.format |= self.format;
        if let Some(output) = self.output {
            settings.output = output;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
    }
}

fn options(settings: &Settings) -> Options {
    let mut options = Options::empty();
    options.set(Options::REMOVE_UNUSED, settings.remove_unused);
    options.set(Options::ALIAS_VERSION_SUFFIX, settings.set_alias);
    options.set(Options::FORMAT, settings.format);
    options
}

fn build_reviser(project: &str, settings: &Settings) -> Reviser {
    Reviser::new(project)
        .with_local_prefixes(&settings.local_prefixes)
        .with_options(options(settings))
        .with_printer(GofmtPrinter::new(settings.gofmt_command.clone()))
}

/// Shared state of one run
struct Job<'a> {
    settings: &'a Settings,
    shared: Option<Reviser>,
    resolver: ModuleResolver,
    write: bool,
}

impl Job<'_> {
    fn revise_file(&self, path: &Path) -> Result<Revision, ReviseError> {
        let source = std::fs::read_to_string(path).map_err(|e| ReviseError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let revision = match &self.shared {
            Some(reviser) => reviser.revise(path, &source)?,
            None => {
                let project = self
                    .resolver
                    .module_for(path)
                    .ok_or_else(|| ReviseError::ModuleNotFound {
                        path: path.to_path_buf(),
                    })?;
                build_reviser(&project, self.settings).revise(path, &source)?
            }
        };

        if self.write && revision.changed {
            std::fs::write(path, &revision.text).map_err(|e| ReviseError::FileWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
            debug!("rewrote {}", path.display());
        }
        Ok(revision)
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let directive = if verbose { "reviser=debug" } else { "reviser=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut output = OutputManager::new();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            let error = ReviseError::ConfigError {
                reason: e.to_string(),
            };
            return output.error(&error).context("failed to report error");
        }
    };
    cli.apply_to(&mut settings);

    if settings.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(settings.threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let files = FileWalker::new().collect(&cli.paths);
    if files.is_empty() {
        warn!("no Go files found");
        return Ok(ExitCode::Success);
    }

    let list_diff = cli.list_diff;
    let to_stdout = settings.output == OutputMode::Stdout;
    let job = Job {
        settings: &settings,
        shared: settings.project().map(|project| build_reviser(project, &settings)),
        resolver: ModuleResolver::new(),
        write: !list_diff && !to_stdout,
    };

    let results: Vec<(&PathBuf, Result<Revision, ReviseError>)> = files
        .par_iter()
        .map(|path| (path, job.revise_file(path)))
        .collect();

    let mut code = ExitCode::Success;
    let mut changed = 0usize;
    for (path, result) in &results {
        match result {
            Ok(revision) => {
                if revision.changed {
                    changed += 1;
                }
                if list_diff {
                    if revision.changed {
                        output.would_change(path)?;
                    }
                } else if to_stdout {
                    output.revised_text(&revision.text)?;
                }
            }
            Err(error) => code = code.combine(output.error(error)?),
        }
    }

    if cli.verbose {
        output.progress(&format!(
            "{changed} of {} files {}",
            results.len(),
            if list_diff { "would change" } else { "changed" }
        ))?;
    }

    if list_diff && cli.set_exit_status && changed > 0 {
        code = code.combine(ExitCode::ChangesFound);
    }
    Ok(code)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: failed to initialize logging: {e}");
        std::process::exit(ExitCode::GeneralError.into());
    }

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::GeneralError
        }
    };
    std::process::exit(code.into());
}
