//! Encrypt and decrypt commands.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::command::System;
use crate::core::crypto::{encrypted_path, CryptoReport, CryptoRunner};
use crate::error::Result;

/// Encrypt configured files.
pub fn encrypt(ctx: &Context, files: Option<Vec<String>>) -> Result<()> {
    info!(root = %ctx.root.display(), selected = ?files, "encrypting");

    let runner = System::new(&ctx.root);
    let report =
        CryptoRunner::new(&ctx.root, &runner, &ctx.gcloud).encrypt(files.as_deref())?;

    for file in &report.processed {
        output::success(&format!(
            "encrypted {} → {}",
            output::path(file),
            output::path(&encrypted_path(file))
        ));
    }
    summarize(&report, "no plaintext");
    Ok(())
}

/// Decrypt configured files.
pub fn decrypt(ctx: &Context, files: Option<Vec<String>>) -> Result<()> {
    info!(root = %ctx.root.display(), selected = ?files, "decrypting");

    let runner = System::new(&ctx.root);
    let report =
        CryptoRunner::new(&ctx.root, &runner, &ctx.gcloud).decrypt(files.as_deref())?;

    for file in &report.processed {
        output::success(&format!(
            "decrypted {} → {}",
            output::path(&encrypted_path(file)),
            output::path(file)
        ));
    }
    summarize(&report, "no ciphertext");
    Ok(())
}

fn summarize(report: &CryptoReport, reason: &str) {
    for file in &report.skipped {
        output::dimmed(&format!("  skipped {} ({})", file, reason));
    }
    if report.processed.is_empty() && report.skipped.is_empty() {
        output::dimmed("no files to process");
    }
}
