//! Auto-selection of finished jobs for `remove` without explicit IDs.

use super::{JobId, JobStatus, JobSummary};

/// A job is done when it is stopped with nothing left to download.
/// Missing status or byte counter means "not done".
pub fn is_done(job: &JobSummary) -> bool {
    job.status == Some(JobStatus::Stopped) && job.left_until_done == Some(0)
}

/// IDs of all done jobs, in the order the daemon returned them.
pub fn select_done(jobs: &[JobSummary]) -> Vec<JobId> {
    jobs.iter()
        .filter(|job| is_done(job))
        .filter_map(|job| job.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, status: Option<JobStatus>, left: Option<i64>) -> JobSummary {
        JobSummary {
            id: Some(id),
            status,
            left_until_done: left,
            ..Default::default()
        }
    }

    #[test]
    fn stopped_and_complete_is_done() {
        assert!(is_done(&job(1, Some(JobStatus::Stopped), Some(0))));
    }

    #[test]
    fn stopped_with_bytes_left_is_not_done() {
        assert!(!is_done(&job(1, Some(JobStatus::Stopped), Some(5))));
    }

    #[test]
    fn downloading_is_not_done() {
        assert!(!is_done(&job(1, Some(JobStatus::Downloading), Some(0))));
    }

    #[test]
    fn absent_fields_are_not_done() {
        assert!(!is_done(&job(1, None, Some(0))));
        assert!(!is_done(&job(1, Some(JobStatus::Stopped), None)));
    }

    #[test]
    fn select_keeps_daemon_order_and_skips_missing_ids() {
        let mut anonymous = job(0, Some(JobStatus::Stopped), Some(0));
        anonymous.id = None;
        let jobs = vec![
            job(9, Some(JobStatus::Stopped), Some(0)),
            job(3, Some(JobStatus::Seeding), Some(0)),
            anonymous,
            job(4, Some(JobStatus::Stopped), Some(0)),
        ];
        assert_eq!(select_done(&jobs), vec![9, 4]);
    }
}
