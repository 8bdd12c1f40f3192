//! `tmc ls [ID]...` – print one status line per job.

use anyhow::{Context, Result};
use std::io::Write;
use tmc_core::job::{format_job, parse_job_ids};
use tmc_core::rpc::JobClient;

use crate::cli::AppContext;

pub fn run_ls<C: JobClient, W: Write>(
    ctx: &mut AppContext<C>,
    out: &mut W,
    ids: &[String],
) -> Result<()> {
    let ids = parse_job_ids(ids)?;
    let jobs = ctx.client.list_jobs(&ids).context("failed to list jobs")?;
    for job in &jobs {
        writeln!(out, "{}", format_job(job))?;
    }
    Ok(())
}
