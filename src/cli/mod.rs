//! Command-line interface.

pub mod crypt;
pub mod init;
pub mod output;
pub mod status;
pub mod sync;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::error::Result;

/// gcp-encrypt - keep repository secrets encrypted with Google Cloud KMS.
#[derive(Parser)]
#[command(
    name = "gcp-encrypt",
    about = "Keep repository secrets encrypted with Google Cloud KMS and out of git",
    version,
    after_help = "Configuration lives in .gcp-encrypt.yml at the repository root."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository root containing .gcp-encrypt.yml
    #[arg(
        short = 'C',
        long = "dir",
        global = true,
        env = "GCP_ENCRYPT_DIR",
        default_value = "."
    )]
    pub dir: PathBuf,

    /// git executable
    #[arg(long, global = true, env = "GCP_ENCRYPT_GIT", default_value = "git")]
    pub git: String,

    /// gcloud executable
    #[arg(
        long,
        global = true,
        env = "GCP_ENCRYPT_GCLOUD",
        default_value = "gcloud"
    )]
    pub gcloud: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create .gcp-encrypt.yml from the template
    Init,

    /// Untrack configured files and list them in .gitignore
    GitConfig,

    /// Encrypt configured files to <file>.encrypted
    Encrypt {
        /// Only these configured files (default: all)
        files: Vec<String>,
    },

    /// Decrypt <file>.encrypted back to configured files
    Decrypt {
        /// Only these configured files (default: all)
        files: Vec<String>,
    },

    /// Show the state of every configured file
    Status,

    /// Print the version
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where and with which tools a command runs.
#[derive(Debug, Clone)]
pub struct Context {
    pub root: PathBuf,
    pub git: String,
    pub gcloud: String,
}

impl From<&Cli> for Context {
    fn from(cli: &Cli) -> Self {
        Self {
            root: cli.dir.clone(),
            git: cli.git.clone(),
            gcloud: cli.gcloud.clone(),
        }
    }
}

/// Positional file arguments, where none means every configured file.
fn selection(files: Vec<String>) -> Option<Vec<String>> {
    if files.is_empty() {
        None
    } else {
        Some(files)
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let ctx = Context::from(&cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Init => init::execute(&ctx),
        Command::GitConfig => sync::execute(&ctx),
        Command::Encrypt { files } => crypt::encrypt(&ctx, selection(files)),
        Command::Decrypt { files } => crypt::decrypt(&ctx, selection(files)),
        Command::Status => status::execute(&ctx),
        Command::Version => {
            println!("gcp-encrypt v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "gcp-encrypt", &mut std::io::stdout());
            Ok(())
        }
    }
}
