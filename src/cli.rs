//! CLI argument parsing.
//!
//! The CLI only collects flags; all manifest policy lives in `patch`.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pkgjson-patch",
    version,
    about = "Patch a Node.js package.json with recommended scripts (prebuild/postbuild) and optional pkg config.",
    after_help = "Exit codes:\n  0  patched or already up to date\n  1  manifest could not be read, parsed, or has the wrong shape\n  2  manifest file not found\n\nExamples:\n  pkgjson-patch\n  pkgjson-patch --path web/package.json --nextjs true\n  pkgjson-patch --force"
)]
pub struct RootArgs {
    /// Path to package.json
    #[arg(long, value_name = "FILE", default_value = "package.json")]
    pub path: PathBuf,

    /// Overwrite existing values when they differ from the recommended defaults
    #[arg(long)]
    pub force: bool,

    /// Treat the project as Next.js (true/false) or auto-detect
    #[arg(long, value_enum, default_value_t = NextjsMode::Auto)]
    pub nextjs: NextjsMode,

    /// Log rule decisions to stderr (RUST_LOG takes precedence)
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NextjsMode {
    Auto,
    True,
    False,
}

impl NextjsMode {
    /// The forced detection answer, or `None` to detect from the manifest.
    pub fn as_override(self) -> Option<bool> {
        match self {
            NextjsMode::Auto => None,
            NextjsMode::True => Some(true),
            NextjsMode::False => Some(false),
        }
    }
}
