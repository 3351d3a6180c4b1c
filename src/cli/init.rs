//! Init command - create the configuration file.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::config::ConfigStore;
use crate::core::constants;
use crate::error::Result;

/// Write `.gcp-encrypt.yml` from the template.
pub fn execute(ctx: &Context) -> Result<()> {
    info!(root = %ctx.root.display(), "initializing");

    ConfigStore::new(&ctx.root).initialize()?;

    output::success(&format!("initialized {}", output::path(constants::CONFIG_FILE)));
    output::hint("edit settings and files, then run: gcp-encrypt git-config");
    Ok(())
}
