//! Git-config command - untrack configured files and update .gitignore.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::command::System;
use crate::core::sync::SyncCoordinator;
use crate::error::Result;

/// Untrack configured files and rewrite the managed `.gitignore` block.
pub fn execute(ctx: &Context) -> Result<()> {
    info!(root = %ctx.root.display(), "running git-config");

    let runner = System::new(&ctx.root);
    let report = SyncCoordinator::new(&ctx.root, &runner, &ctx.git).sync()?;

    for file in &report.untracked {
        output::success(&format!("untracked {}", output::path(file)));
    }

    if report.gitignore_changed {
        output::success(&format!(
            ".gitignore updated ({} file{})",
            report.ignored.len(),
            if report.ignored.len() == 1 { "" } else { "s" }
        ));
    } else {
        output::success(".gitignore already up to date");
    }

    Ok(())
}
