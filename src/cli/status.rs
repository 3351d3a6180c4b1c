//! Status command - show the state of every configured file.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::config::ConfigStore;
use crate::core::crypto::encrypted_path;
use crate::core::gitignore;
use crate::error::Result;

/// Show settings, then plaintext / ciphertext / ignored state per file.
pub fn execute(ctx: &Context) -> Result<()> {
    info!(root = %ctx.root.display(), "showing status");

    let config = ConfigStore::new(&ctx.root).load()?;
    let ignored = gitignore::managed_entries(&gitignore::read(&ctx.root)?);

    output::section("Settings");
    let settings = &config.settings;
    for (label, value) in [
        ("project: ", &settings.project),
        ("location:", &settings.location),
        ("keyring: ", &settings.keyring),
        ("key:     ", &settings.key),
    ] {
        output::kv(label, value.as_deref().unwrap_or("(missing)"));
    }

    output::section("Files");
    if config.files.is_empty() {
        output::dimmed("no files configured");
        return Ok(());
    }

    for file in &config.files {
        let plain = ctx.root.join(file).exists();
        let encrypted = ctx.root.join(encrypted_path(file)).exists();
        let is_ignored = ignored
            .as_ref()
            .is_some_and(|entries| entries.iter().any(|e| e == file));

        output::list_item(&format!(
            "{}  plaintext: {}  encrypted: {}  ignored: {}",
            output::path(file),
            yes_no(plain),
            yes_no(encrypted),
            yes_no(is_ignored)
        ));
    }

    if ignored.is_none() {
        println!();
        output::warn(".gitignore has no managed block");
        output::hint("run: gcp-encrypt git-config");
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
