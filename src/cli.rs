use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version = CliArgs::unstable_version(), about, long_about = None)]
#[command(name = "git-uri")]
#[command(next_line_help = true)]
/// Parse compact git references like `org/repo/subdir#ref`
pub struct CliArgs {
    /// Path to a config file, instead of searching for one.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    subcommand: Command,
}

#[allow(unused)]
impl CliArgs {
    /// Surface current version together with the current git revision and date, if available
    fn unstable_version() -> &'static str {
        const VERSION: &str = env!("CARGO_PKG_VERSION");
        let date = option_env!("GIT_DATE").unwrap_or("no_date");
        let rev = option_env!("GIT_REV").unwrap_or("no_rev");
        // This is a memory leak, only use sparingly.
        Box::leak(format!("{VERSION} - {date} - {rev}").into_boxed_str())
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn subcommand(&self) -> &Command {
        &self.subcommand
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse references and print their parts.
    #[clap(alias = "p")]
    #[command(arg_required_else_help = true)]
    Parse {
        /// References of the form `[provider:]owner/name[/subdir][#ref]`.
        #[arg(required = true)]
        inputs: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::default())]
        format: OutputFormat,
    },
    /// Print the provider url of a reference.
    #[clap(alias = "u")]
    #[command(arg_required_else_help = true)]
    Url {
        input: String,
        #[arg(long, value_enum, default_value_t = UrlKind::default())]
        kind: UrlKind,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, ValueEnum)]
/// How parsed references are printed
pub enum OutputFormat {
    /// `provider:owner/name[/subdir]#ref`, one per line.
    Simple,
    /// One block per reference with its parts.
    #[default]
    Detailed,
    /// A JSON array of records.
    Json,
    /// The debug representation.
    Raw,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Simple => write!(f, "simple"),
            OutputFormat::Detailed => write!(f, "detailed"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Raw => write!(f, "raw"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, ValueEnum)]
/// Which url should be rendered
pub enum UrlKind {
    #[default]
    Web,
    #[value(alias = "tar")]
    Tarball,
}

impl Display for UrlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlKind::Web => write!(f, "web"),
            UrlKind::Tarball => write!(f, "tarball"),
        }
    }
}
