//! Classification of `add` arguments.

use std::path::Path;

/// Where a new job comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSource<'a> {
    /// A link the daemon fetches itself (HTTP(S) URL or magnet link).
    Remote(&'a str),
    /// A torrent file on this machine; its contents are uploaded.
    LocalFile(&'a Path),
}

impl<'a> JobSource<'a> {
    pub fn classify(arg: &'a str) -> Self {
        if arg.starts_with("http") || arg.starts_with("magnet:") {
            JobSource::Remote(arg)
        } else {
            JobSource::LocalFile(Path::new(arg))
        }
    }
}
