//! Job ID argument parsing.

use std::num::ParseIntError;

use super::JobId;

/// A command-line token that is not a decimal job ID.
#[derive(Debug, thiserror::Error)]
#[error("invalid job id {token:?}")]
pub struct IdParseError {
    pub token: String,
    #[source]
    pub source: ParseIntError,
}

/// Parses every token as a base-10 `i64`.
///
/// Stops at the first bad token and returns only the error, so callers never
/// act on a partial list. An empty input yields an empty list.
pub fn parse_job_ids<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<JobId>, IdParseError> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            token.parse::<JobId>().map_err(|source| IdParseError {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}
