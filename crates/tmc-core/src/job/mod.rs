//! Job model and the pure logic the commands apply to it: ID parsing,
//! status formatting, done-job selection, and `add` argument classification.

mod format;
mod ids;
mod select;
mod source;
mod types;

pub use format::{availability, format_job, progress, state_token};
pub use ids::{parse_job_ids, IdParseError};
pub use select::{is_done, select_done};
pub use source::JobSource;
pub use types::*;
