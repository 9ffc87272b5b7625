use crate::config::Config;
use crate::error::Result;
use crate::{compile, format, save, validate};

/// Validates the raw configuration value and runs the generation pipeline.
///
/// # Arguments
/// * `value` - The configuration value, usually loaded from a yaml file
///
/// # Returns
/// * `Result<Option<String>>` - The generated text, if the configuration
///   asks for it to be returned
pub fn generate(value: serde_yaml::Value) -> Result<Option<String>> {
    run(validate::validate(value)?)
}

/// Runs the generation pipeline over a validated configuration.
///
/// Formats the document, saves it when requested and hands the saved file
/// to the external compiler. Requesting compilation while saving is
/// disabled is contradictory: the contradiction is reported as a warning
/// and the compile step is skipped, never silently resolved.
pub fn run(config: Config) -> Result<Option<String>> {
    let text = format::render(&config.main);
    let path = save::save(&text, &config.save)?;

    match path {
        Some(path) if config.build.compile => compile::compile(&path, &config.build),
        None if config.build.compile => log::warn!(
            "Compilation was requested but saving is disabled. The document \
             will not be compiled."
        ),
        _ => {}
    }

    Ok(config.save.return_text.then_some(text))
}
