//! `tmc add <FILE_OR_URL>...` – add jobs from URLs, magnet links or local torrent files.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use tmc_core::job::{format_job, JobSource};
use tmc_core::rpc::JobClient;

use crate::cli::AppContext;

/// Adds each source in order and prints the new job's ID (or full status line
/// with `detail`). Stops at the first failure; lines already printed stay.
/// With `delete`, a local torrent file is removed once the daemon accepted it.
pub fn run_add<C: JobClient, W: Write>(
    ctx: &mut AppContext<C>,
    out: &mut W,
    sources: &[String],
    detail: bool,
    delete: bool,
) -> Result<()> {
    for arg in sources {
        let job = match JobSource::classify(arg) {
            JobSource::Remote(locator) => ctx.client.add_from_remote(locator),
            JobSource::LocalFile(path) => {
                let added = ctx.client.add_from_local_file(path);
                if added.is_ok() && delete {
                    fs::remove_file(path)
                        .with_context(|| format!("failed to delete torrent file {arg:?}"))?;
                    tracing::debug!(path = %path.display(), "deleted torrent file");
                }
                added
            }
        }
        .with_context(|| format!("failed to add job from {arg:?}"))?;

        tracing::info!(source = %arg, id = ?job.id, "job added");
        if detail {
            writeln!(out, "{}", format_job(&job))?;
        } else {
            match job.id {
                Some(id) => writeln!(out, "{id}")?,
                None => writeln!(out, "-")?,
            }
        }
    }
    Ok(())
}
