//! `tmc save` – persist the effective configuration.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tmc_core::config::{self, StoredConfig};

use crate::cli::AppContext;

/// Writes the resolved profile (including any prompted or URL-derived
/// credentials) to `path`, announcing the destination on `status` first.
pub fn run_save<C, W: Write>(ctx: &AppContext<C>, path: &Path, status: &mut W) -> Result<()> {
    writeln!(status, "Save configuration to {}", path.display())?;
    config::save_to(path, &StoredConfig::from(&ctx.profile))
        .context("failed to save configuration")
}
