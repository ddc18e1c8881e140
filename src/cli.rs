//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

use crate::report::OutputFormat;
use crate::update::{DEFAULT_BASE_URL, DEFAULT_LATEST_URL};

/// binowner - find the bundle that owns each binary
///
/// Reads every bundle manifest of a release from the update server and
/// credits each binary in /usr/bin to one bundle.
#[derive(Parser, Debug)]
#[command(
    name = "binowner",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve which bundle owns each binary in /usr/bin",
    long_about = "binowner reads the bundle manifests of a release from the update server \
                  and credits each binary installed in /usr/bin to the bundle that should \
                  provide it. The result is printed as one binary<TAB>bundle line per binary.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  binowner\n    \
                  binowner resolve --release 31960\n    \
                  binowner resolve --format json\n    \
                  binowner completions --shell bash"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Base URL of release content
    #[arg(
        long,
        global = true,
        env = "BINOWNER_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        value_name = "URL"
    )]
    pub base_url: String,

    /// URL of the latest release identifier
    #[arg(
        long,
        global = true,
        env = "BINOWNER_LATEST_URL",
        default_value = DEFAULT_LATEST_URL,
        value_name = "URL"
    )]
    pub latest_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve binary owners for a release (default)
    Resolve(ResolveArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve the latest release:\n    binowner resolve\n\n\
                  Resolve a specific release:\n    binowner resolve --release 31960\n\n\
                  Print JSON with scores:\n    binowner resolve --format json")]
pub struct ResolveArgs {
    /// Release to resolve (defaults to the latest release)
    #[arg(long, value_name = "RELEASE")]
    pub release: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    /// Do not show a progress bar while fetching manifests
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
