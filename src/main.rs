//! gcp-encrypt - keep repository secrets encrypted with Google Cloud KMS.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gcp_encrypt::cli::output;
use gcp_encrypt::cli::{execute, Cli};
use gcp_encrypt::error::{ConfigError, Error, GitError, KmsError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GCP_ENCRYPT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gcp_encrypt=debug")
        } else {
            EnvFilter::new("gcp_encrypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound) => Some("run: gcp-encrypt init"),
            Error::Config(ConfigError::MissingSetting { .. }) => {
                Some("fill in settings in .gcp-encrypt.yml")
            }
            Error::Git(GitError::NotFound) => Some("install git or pass --git <path>"),
            Error::Kms(KmsError::GcloudNotFound) => {
                Some("install gcloud from https://cloud.google.com/sdk/docs/install")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
