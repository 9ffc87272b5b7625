use crate::constants::CONFIG_SUFFIXES;
use crate::error::{Error, Result};
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// A document class or package entry.
///
/// Configured either as a bare name, or as a `[name, [options, ...]]` pair
/// where the options end up inside the bracket group of the emitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Name(String),
    WithOptions(String, Vec<String>),
}

impl Entry {
    /// The class or package name.
    pub fn name(&self) -> &str {
        match self {
            Entry::Name(name) | Entry::WithOptions(name, _) => name,
        }
    }

    /// The bracket options, if any were configured.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Entry::Name(_) => None,
            Entry::WithOptions(_, options) => Some(options),
        }
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = Entry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    "a name, or a pair of a name and a list of option strings",
                )
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Entry, E>
            where
                E: de::Error,
            {
                Ok(Entry::Name(value.to_string()))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Entry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let options: Vec<String> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(
                        "the pair must have exactly two entries: the name and the list of options",
                    ));
                }
                Ok(Entry::WithOptions(name, options))
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

impl Serialize for Entry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Entry::Name(name) => serializer.serialize_str(name),
            Entry::WithOptions(name, options) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(name)?;
                seq.serialize_element(options)?;
                seq.end()
            }
        }
    }
}

/// Settings of the external compilation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Compiler executable to invoke
    pub command: String,
    /// Whether to run the compiler after saving
    pub compile: bool,
    /// Extra command-line flags passed to the compiler
    pub flags: Vec<String>,
    /// Whether to prune auxiliary files once compilation is over
    pub remove_files: bool,
    /// Whether to append -shell-escape to the compiler invocation
    #[serde(rename = "shell-escape")]
    pub shell_escape: bool,
}

/// Content of the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MainConfig {
    pub author: String,
    pub date: String,
    pub document_class: Entry,
    /// Free-form text appended to the preamble
    pub other_preamble: String,
    pub packages: Vec<Entry>,
    /// Document body
    pub text: String,
    pub title: String,
}

/// Destination and reporting settings of the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveConfig {
    /// Output file name, must end with ".tex"
    pub name: String,
    pub overwrite: bool,
    /// Target directory; blank or "." means the current directory
    pub path: String,
    /// Whether to echo the generated text to stdout
    pub print: bool,
    /// Whether the generated text is yielded back to the caller
    #[serde(rename = "return")]
    pub return_text: bool,
    /// Whether the text is written to disk at all
    pub save: bool,
}

/// Main configuration structure holding all three sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub build: BuildConfig,
    pub main: MainConfig,
    pub save: SaveConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: "pdflatex".to_string(),
            compile: false,
            flags: Vec::new(),
            remove_files: false,
            shell_escape: false,
        }
    }
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            date: String::new(),
            document_class: Entry::Name("article".to_string()),
            other_preamble: String::new(),
            packages: Vec::new(),
            text: String::new(),
            title: String::new(),
        }
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            name: "test.tex".to_string(),
            overwrite: false,
            path: ".".to_string(),
            print: false,
            return_text: true,
            save: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            main: MainConfig::default(),
            save: SaveConfig::default(),
        }
    }
}

fn has_config_suffix(path: &Path) -> bool {
    path.to_str()
        .is_some_and(|p| CONFIG_SUFFIXES.iter().any(|suffix| p.ends_with(suffix)))
}

/// Loads the raw configuration value from a yaml file.
///
/// # Arguments
/// * `path` - Path to the configuration file; must end with ".yaml" or ".yml"
///
/// # Returns
/// * `Result<serde_yaml::Value>` - The unvalidated configuration value
pub fn load_value<P: AsRef<Path>>(path: P) -> Result<serde_yaml::Value> {
    let path = path.as_ref();
    if !has_config_suffix(path) || !path.is_file() {
        return Err(Error::ConfigNotFound { path: path.display().to_string() });
    }

    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Prints the default configuration to the console as yaml.
pub fn print_default() -> Result<()> {
    print!("{}", serde_yaml::to_string(&Config::default())?);
    Ok(())
}

/// Writes the default configuration to the given yaml file.
///
/// The path must carry a yaml suffix and point into an existing directory.
pub fn dump_default<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let parent_exists = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => true,
        Some(parent) => parent.is_dir(),
        None => false,
    };
    if !has_config_suffix(path) || !parent_exists {
        return Err(Error::DumpPathError { path: path.display().to_string() });
    }

    std::fs::write(path, serde_yaml::to_string(&Config::default())?)?;
    println!("Saved the default configuration to {}.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_bare_name() {
        let entry: Entry = serde_yaml::from_str("amsmath").unwrap();
        assert_eq!(entry, Entry::Name("amsmath".to_string()));
        assert_eq!(entry.name(), "amsmath");
        assert!(entry.options().is_none());
    }

    #[test]
    fn test_entry_from_pair() {
        let entry: Entry = serde_yaml::from_str(r#"["geometry", ["margin=1in"]]"#).unwrap();
        assert_eq!(
            entry,
            Entry::WithOptions("geometry".to_string(), vec!["margin=1in".to_string()])
        );
        assert_eq!(entry.name(), "geometry");
        assert_eq!(entry.options(), Some(&["margin=1in".to_string()][..]));
    }

    #[test]
    fn test_entry_rejects_long_sequence() {
        let result: std::result::Result<Entry, _> =
            serde_yaml::from_str(r#"["geometry", ["margin=1in"], "extra"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_rejects_short_sequence() {
        let result: std::result::Result<Entry, _> = serde_yaml::from_str(r#"["geometry"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_rejects_number() {
        let result: std::result::Result<Entry, _> = serde_yaml::from_str("12");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_round_trips() {
        let dumped = serde_yaml::to_string(&Config::default()).unwrap();
        let reloaded: Config = serde_yaml::from_str(&dumped).unwrap();
        assert_eq!(reloaded, Config::default());
    }

    #[test]
    fn test_load_value_rejects_wrong_suffix() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "build: {}").unwrap();

        assert!(matches!(load_value(&path), Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_value_rejects_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.yaml");

        assert!(matches!(load_value(&path), Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_dump_default_rejects_missing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("config.yaml");

        assert!(matches!(dump_default(&path), Err(Error::DumpPathError { .. })));
    }

    #[test]
    fn test_dump_default_writes_reloadable_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        dump_default(&path).unwrap();

        let value = load_value(&path).unwrap();
        let config: Config = serde_yaml::from_value(value).unwrap();
        assert_eq!(config, Config::default());
    }
}
