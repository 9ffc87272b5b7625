//! Constants used throughout the texgen application

/// Suffix every generated document file must carry
pub const TEX_SUFFIX: &str = ".tex";

/// Accepted configuration file suffixes
pub const CONFIG_SUFFIXES: &[&str] = &[".yaml", ".yml"];

/// Absolute path of the TeX Live pdflatex binary, tried when the configured
/// command cannot be resolved by name or through the PATH
pub const FALLBACK_COMPILER: &str = "/usr/local/texlive/2023/bin/x86_64-linux/pdflatex";

/// Compiler passes per attempt, enough to settle cross-references
pub const COMPILE_PASSES: usize = 3;

/// Suffixes of files that survive auxiliary-file pruning
pub const KEEP_SUFFIXES: &[&str] = &[".tex", ".pdf", ".dvi", ".ps"];

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
