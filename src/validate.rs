use crate::config::Config;
use crate::error::{Error, Result};

/// Validates a raw configuration value against the expected schema.
///
/// The value must be a mapping with exactly the `build`, `main` and `save`
/// sections, every section key present with the declared type, and document
/// class and package entries shaped as a name or a `[name, [options, ...]]`
/// pair. Success returns the typed configuration; any mismatch is reported
/// as a schema error carrying the offending location.
///
/// # Arguments
/// * `value` - The configuration value, usually loaded from a yaml file
///
/// # Returns
/// * `Result<Config>` - The validated configuration
pub fn validate(value: serde_yaml::Value) -> Result<Config> {
    if !value.is_mapping() {
        return Err(Error::ConfigSchemaError(format!(
            "the configuration must be a mapping with the sections \"build\", \
             \"main\" and \"save\". Current value: {}",
            describe(&value)
        )));
    }

    let config: Config = serde_yaml::from_value(value)
        .map_err(|e| Error::ConfigSchemaError(e.to_string()))?;

    if config.build.command.trim().is_empty() {
        return Err(Error::ConfigSchemaError(
            "the build command must not be blank".to_string(),
        ));
    }

    Ok(config)
}

/// Short description of a yaml value's type, for error messages.
fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
