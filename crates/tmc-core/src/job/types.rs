//! Job types as reported by the daemon.

/// Job identifier assigned by the daemon.
pub type JobId = i64;

/// Run state of a job, using the daemon's numeric status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Stopped,
    CheckWait,
    Checking,
    DownloadWait,
    Downloading,
    SeedWait,
    Seeding,
    /// A status code this client does not know about.
    Unknown(i64),
}

impl From<i64> for JobStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => JobStatus::Stopped,
            1 => JobStatus::CheckWait,
            2 => JobStatus::Checking,
            3 => JobStatus::DownloadWait,
            4 => JobStatus::Downloading,
            5 => JobStatus::SeedWait,
            6 => JobStatus::Seeding,
            other => JobStatus::Unknown(other),
        }
    }
}

/// Partial view of a job. Every field is optional because the daemon only
/// returns the fields that were requested (and `torrent-add` returns just a few).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobSummary {
    pub id: Option<JobId>,
    pub name: Option<String>,
    pub status: Option<JobStatus>,
    /// Fraction in `[0, 1]`.
    pub percent_done: Option<f64>,
    pub have_valid: Option<i64>,
    pub have_unchecked: Option<i64>,
    pub desired_available: Option<i64>,
    pub left_until_done: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert_eq!(JobStatus::from(0), JobStatus::Stopped);
        assert_eq!(JobStatus::from(2), JobStatus::Checking);
        assert_eq!(JobStatus::from(4), JobStatus::Downloading);
        assert_eq!(JobStatus::from(6), JobStatus::Seeding);
        assert_eq!(JobStatus::from(42), JobStatus::Unknown(42));
    }
}
