//! One-line status rendering: `[ <id> ][ <avail> ][ <progress> ][ <state> ] <name>`.

use super::{JobStatus, JobSummary};

/// Shown when a percentage cannot be computed.
const UNKNOWN_PERCENT: &str = "---";
/// Shown for a complete (100%) value.
const COMPLETE: &str = "OK!";

/// Renders a job as a fixed-shape status line.
pub fn format_job(job: &JobSummary) -> String {
    let id = job
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let name = job.name.as_deref().unwrap_or("-");

    format!(
        "[ {:>4} ][ {} ][ {} ][ {} ] {}",
        id,
        availability(job),
        progress(job.percent_done),
        state_token(job.status),
        name
    )
}

/// Download progress; the fraction is truncated so only a finished job reads `OK!`.
pub fn progress(percent_done: Option<f64>) -> String {
    match percent_done {
        Some(fraction) => percent_token((100.0 * fraction) as i64),
        None => UNKNOWN_PERCENT.to_string(),
    }
}

/// Share of the job that is either local or obtainable from connected peers.
///
/// Needs all four byte counters; an empty job (`all <= 0`) has no meaningful
/// ratio and renders as unknown.
pub fn availability(job: &JobSummary) -> String {
    let (Some(valid), Some(unchecked), Some(desired), Some(left)) = (
        job.have_valid,
        job.have_unchecked,
        job.desired_available,
        job.left_until_done,
    ) else {
        return UNKNOWN_PERCENT.to_string();
    };

    let have = valid + unchecked;
    let avail = have + desired;
    let all = have + left;
    if all <= 0 {
        return UNKNOWN_PERCENT.to_string();
    }
    percent_token(100 * avail / all)
}

/// Two-character run-state token.
pub fn state_token(status: Option<JobStatus>) -> &'static str {
    match status {
        Some(JobStatus::Stopped) => "||",
        Some(
            JobStatus::Downloading
            | JobStatus::DownloadWait
            | JobStatus::Checking
            | JobStatus::CheckWait,
        ) => ">>",
        Some(JobStatus::Seeding | JobStatus::SeedWait) => "<<",
        Some(JobStatus::Unknown(_)) | None => "--",
    }
}

fn percent_token(value: i64) -> String {
    if value == 100 {
        COMPLETE.to_string()
    } else {
        format!("{:>2}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_job() -> JobSummary {
        JobSummary {
            id: Some(12),
            name: Some("ubuntu.iso".to_string()),
            status: Some(JobStatus::Downloading),
            percent_done: Some(0.5),
            have_valid: Some(40),
            have_unchecked: Some(10),
            desired_available: Some(25),
            left_until_done: Some(50),
        }
    }

    #[test]
    fn progress_tokens() {
        assert_eq!(progress(Some(1.0)), "OK!");
        assert_eq!(progress(Some(0.5)), "50%");
        assert_eq!(progress(Some(0.05)), " 5%");
        assert_eq!(progress(Some(0.999)), "99%");
        assert_eq!(progress(None), "---");
    }

    #[test]
    fn availability_ratio() {
        // have = 50, avail = 75, all = 100
        assert_eq!(availability(&full_job()), "75%");

        let complete = JobSummary {
            desired_available: Some(50),
            ..full_job()
        };
        assert_eq!(availability(&complete), "OK!");
    }

    #[test]
    fn availability_needs_every_counter() {
        let job = JobSummary {
            have_unchecked: None,
            ..full_job()
        };
        assert_eq!(availability(&job), "---");
    }

    #[test]
    fn availability_of_empty_job_does_not_divide_by_zero() {
        let job = JobSummary {
            have_valid: Some(0),
            have_unchecked: Some(0),
            desired_available: Some(0),
            left_until_done: Some(0),
            ..full_job()
        };
        assert_eq!(availability(&job), "---");
    }

    #[test]
    fn every_status_maps_to_one_token() {
        assert_eq!(state_token(Some(JobStatus::Stopped)), "||");
        for s in [
            JobStatus::Downloading,
            JobStatus::DownloadWait,
            JobStatus::Checking,
            JobStatus::CheckWait,
        ] {
            assert_eq!(state_token(Some(s)), ">>", "{:?}", s);
        }
        assert_eq!(state_token(Some(JobStatus::Seeding)), "<<");
        assert_eq!(state_token(Some(JobStatus::SeedWait)), "<<");
        assert_eq!(state_token(Some(JobStatus::Unknown(9))), "--");
        assert_eq!(state_token(None), "--");
    }

    #[test]
    fn full_line_shape() {
        assert_eq!(
            format_job(&full_job()),
            "[   12 ][ 75% ][ 50% ][ >> ] ubuntu.iso"
        );
    }

    #[test]
    fn missing_fields_use_placeholders() {
        assert_eq!(
            format_job(&JobSummary::default()),
            "[    - ][ --- ][ --- ][ -- ] -"
        );
    }
}
