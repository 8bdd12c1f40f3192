//! The daemon as seen by the commands.
//!
//! Commands only talk to [`JobClient`]; [`TransmissionClient`] is the real
//! implementation and tests substitute an in-memory one.

mod error;
mod transmission;

pub use error::RpcError;
pub use transmission::{endpoint_url, TransmissionClient, DEFAULT_RPC_PATH, DEFAULT_RPC_PORT};

use std::path::Path;

use crate::job::{JobId, JobSummary};

/// Job-control operations offered by the daemon.
pub trait JobClient {
    /// Asks the daemon to fetch a URL or magnet link.
    fn add_from_remote(&mut self, locator: &str) -> Result<JobSummary, RpcError>;

    /// Uploads the contents of a local torrent file.
    fn add_from_local_file(&mut self, path: &Path) -> Result<JobSummary, RpcError>;

    /// Jobs with the given IDs, or every job when `ids` is empty, in daemon order.
    fn list_jobs(&mut self, ids: &[JobId]) -> Result<Vec<JobSummary>, RpcError>;

    /// Removes jobs, optionally deleting their downloaded data. `ids` is never empty.
    fn remove_jobs(&mut self, ids: &[JobId], delete_data: bool) -> Result<(), RpcError>;
}
