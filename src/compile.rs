use crate::config::BuildConfig;
use crate::constants::{COMPILE_PASSES, FALLBACK_COMPILER, KEEP_SUFFIXES};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Strategies for locating the compiler executable, tried in order.
#[derive(Debug, Clone, Copy)]
enum Resolution {
    /// The configured command name, as given
    Configured,
    /// The configured command resolved through the PATH
    PathLookup,
    /// The hard-coded TeX Live installation path
    Fallback,
}

const STRATEGIES: &[Resolution] =
    &[Resolution::Configured, Resolution::PathLookup, Resolution::Fallback];

/// Compiles the saved document with the configured external compiler.
///
/// Compilation is best effort: every failure is reported on the console and
/// absorbed, so the caller always gets its generated text regardless of the
/// compiler's fate. Does nothing when compilation is switched off.
///
/// # Arguments
/// * `path` - Path of the saved document file
/// * `config` - The build section of the configuration
pub fn compile(path: &Path, config: &BuildConfig) {
    if !config.compile {
        return;
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // Snapshot taken before the compiler gets a chance to create anything.
    let before = config.remove_files.then(|| list_files(&dir));

    let compiled = STRATEGIES.iter().any(|strategy| {
        match resolve(*strategy, &config.command) {
            Some(program) => run_passes(&program, config, path),
            None => false,
        }
    });

    if !compiled {
        log::error!(
            "The document was not compiled. Please check the files produced in \
             the directory: {}.",
            dir.display()
        );
    }

    if let Some(before) = before {
        remove_auxiliary_files(&dir, &before);
    }
}

/// Resolves a strategy to a runnable program path, if it yields one.
fn resolve(strategy: Resolution, command: &str) -> Option<PathBuf> {
    match strategy {
        Resolution::Configured => Some(PathBuf::from(command)),
        Resolution::PathLookup => match which::which(command) {
            Ok(resolved) => Some(resolved),
            Err(_) => {
                log::warn!(
                    "The compilation command \"{}\" was not found on the PATH. \
                     Alternative commands will be used.",
                    command
                );
                None
            }
        },
        Resolution::Fallback => Some(PathBuf::from(FALLBACK_COMPILER)),
    }
}

/// Runs the compiler over the document for the configured number of passes.
///
/// Every pass must exit successfully; the first non-zero exit or spawn
/// failure stops the loop and fails the whole attempt.
fn run_passes(program: &Path, config: &BuildConfig, path: &Path) -> bool {
    for pass in 1..=COMPILE_PASSES {
        log::info!(
            "Compiling {} with {} ({}/{})",
            path.display(),
            program.display(),
            pass,
            COMPILE_PASSES
        );

        let mut command = Command::new(program);
        command.args(&config.flags);
        if config.shell_escape {
            command.arg("-shell-escape");
        }
        command.arg(path);

        match command.output() {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                log::warn!(
                    "The command {} exited with {}. Error log:\n{}",
                    program.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr)
                );
                return false;
            }
            Err(err) => {
                log::warn!(
                    "The command {} could not be run: {}.",
                    program.display(),
                    err
                );
                return false;
            }
        }
    }

    true
}

/// Lists the files directly inside `dir`.
///
/// Unreadable entries are skipped, so a listing failure degrades to an
/// empty snapshot instead of aborting the compile step.
fn list_files(dir: &Path) -> HashSet<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

/// Deletes every file created since the `before` snapshot whose name does
/// not end in one of the retained suffixes.
fn remove_auxiliary_files(dir: &Path, before: &HashSet<PathBuf>) {
    let after = list_files(dir);
    for file in after.difference(before) {
        let keep = file
            .to_str()
            .is_some_and(|f| KEEP_SUFFIXES.iter().any(|suffix| f.ends_with(suffix)));
        if keep {
            continue;
        }

        if let Err(err) = std::fs::remove_file(file) {
            log::warn!(
                "Failed to remove the auxiliary file {}: {}.",
                file.display(),
                err
            );
        } else {
            log::debug!("Removed the auxiliary file {}.", file.display());
        }
    }
}
