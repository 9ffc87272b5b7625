use crate::config::SaveConfig;
use crate::constants::TEX_SUFFIX;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Saves the generated text to disk and/or echoes it to the console.
///
/// Returns the absolute path of the written file, or `None` when saving is
/// disabled. The file name must end with ".tex" and the target directory
/// must exist; unless overwriting was requested, an existing file is never
/// replaced and a numbered sibling is written instead.
///
/// # Arguments
/// * `text` - The generated document text
/// * `config` - The save section of the configuration
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The absolute path of the file, if written
pub fn save(text: &str, config: &SaveConfig) -> Result<Option<PathBuf>> {
    if config.print {
        println!("{}", text);
    }

    if !config.save {
        log::info!("The generated text will not be saved to a file.");
        return Ok(None);
    }

    if !config.name.ends_with(TEX_SUFFIX) {
        return Err(Error::FileNameError { name: config.name.clone() });
    }

    let dir = resolve_dir(&config.path)?;
    let target = unique_path(&dir, &config.name, config.overwrite);

    std::fs::write(&target, text)?;
    log::info!("File has been saved to the path: {}", target.display());

    Ok(Some(target))
}

/// Resolves the destination directory to an absolute path.
///
/// A blank path or "." means the current working directory.
fn resolve_dir(path: &str) -> Result<PathBuf> {
    let trimmed = path.trim();
    let dir = if trimmed.is_empty() || trimmed == "." {
        std::env::current_dir()?
    } else {
        PathBuf::from(trimmed)
    };

    if !dir.is_dir() {
        return Err(Error::SavePathError { path: dir.display().to_string() });
    }

    Ok(dir.canonicalize()?)
}

/// Picks a non-colliding file path inside `dir`.
///
/// Collisions are resolved by probing `name_0.tex`, `name_1.tex`, ... until
/// a free name turns up. The probe is existence-based and racy under
/// concurrent writers, which is accepted for a single-process tool.
fn unique_path(dir: &Path, name: &str, overwrite: bool) -> PathBuf {
    let target = dir.join(name);
    if overwrite || !target.exists() {
        return target;
    }

    let stem = name.strip_suffix(TEX_SUFFIX).unwrap_or(name);
    let mut counter = 0;
    loop {
        let candidate = dir.join(format!("{}_{}{}", stem, counter, TEX_SUFFIX));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
