//! `tmc remove [ID]...` – remove jobs; without IDs, every stopped and finished job.

use anyhow::{Context, Result};
use std::io::Write;
use tmc_core::job::{parse_job_ids, select_done};
use tmc_core::rpc::JobClient;

use crate::cli::AppContext;

/// Removes the jobs in a single request and prints each removed ID. When no
/// job qualifies, no request is sent and nothing is printed.
pub fn run_remove<C: JobClient, W: Write>(
    ctx: &mut AppContext<C>,
    out: &mut W,
    ids: &[String],
    delete_data: bool,
) -> Result<()> {
    let mut ids = parse_job_ids(ids)?;
    if ids.is_empty() {
        let jobs = ctx.client.list_jobs(&[]).context("failed to list jobs")?;
        ids = select_done(&jobs);
        tracing::debug!(count = ids.len(), "selected finished jobs");
    }

    if !ids.is_empty() {
        ctx.client
            .remove_jobs(&ids, delete_data)
            .with_context(|| format!("failed to remove jobs {ids:?}"))?;
        tracing::info!(?ids, delete_data, "jobs removed");
    }

    for id in &ids {
        writeln!(out, "{id}")?;
    }
    Ok(())
}
