//! Transmission daemon client.
//!
//! The wire protocol, session handshake and authentication belong to the
//! `transmission-rpc` crate. This adapter builds its endpoint from a profile,
//! drives its async calls on a private current-thread runtime, and maps
//! torrents onto [`JobSummary`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;
use tokio::runtime::{Builder, Runtime};
use transmission_rpc::types::{
    BasicAuth, Id, Torrent, TorrentAddArgs, TorrentAddedOrDuplicate, TorrentGetField,
};
use transmission_rpc::TransClient;
use url::Url;

use super::{JobClient, RpcError};
use crate::job::{JobId, JobStatus, JobSummary};
use crate::profile::ConnectionProfile;

/// Port the daemon listens on when the profile leaves it unset.
pub const DEFAULT_RPC_PORT: u16 = 9091;
/// RPC path when the profile names none.
pub const DEFAULT_RPC_PATH: &str = "/transmission/rpc";

pub struct TransmissionClient {
    endpoint: Url,
    runtime: Runtime,
    client: TransClient,
}

impl TransmissionClient {
    /// Prepares a client for `profile`. Does not contact the daemon.
    pub fn new(profile: &ConnectionProfile) -> Result<Self, RpcError> {
        let endpoint = endpoint_url(profile)?;
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(RpcError::Runtime)?;

        let client = match &profile.username {
            Some(user) => TransClient::with_auth(
                endpoint.clone(),
                BasicAuth {
                    user: user.clone(),
                    password: profile.password.clone().unwrap_or_default(),
                },
            ),
            None => TransClient::new(endpoint.clone()),
        };

        tracing::debug!(endpoint = %endpoint, "rpc client ready");
        Ok(Self {
            endpoint,
            runtime,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn add(&mut self, args: TorrentAddArgs) -> Result<JobSummary, RpcError> {
        let response = self
            .runtime
            .block_on(self.client.torrent_add(args))
            .map_err(RpcError::Transport)?;

        check(&response.result)?;
        match response.arguments {
            TorrentAddedOrDuplicate::TorrentAdded(torrent) => Ok(summary(torrent)),
            TorrentAddedOrDuplicate::TorrentDuplicate(torrent) => {
                tracing::info!(id = ?torrent.id, "torrent already present on daemon");
                Ok(summary(torrent))
            }
            #[allow(unreachable_patterns)]
            _ => Err(RpcError::MissingTorrent),
        }
    }
}

impl JobClient for TransmissionClient {
    fn add_from_remote(&mut self, locator: &str) -> Result<JobSummary, RpcError> {
        self.add(TorrentAddArgs {
            filename: Some(locator.to_string()),
            ..TorrentAddArgs::default()
        })
    }

    fn add_from_local_file(&mut self, path: &Path) -> Result<JobSummary, RpcError> {
        let data = fs::read(path).map_err(|source| RpcError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.add(TorrentAddArgs {
            metainfo: Some(STANDARD.encode(data)),
            ..TorrentAddArgs::default()
        })
    }

    fn list_jobs(&mut self, ids: &[JobId]) -> Result<Vec<JobSummary>, RpcError> {
        // No ids means every job.
        let ids = (!ids.is_empty()).then(|| ids.iter().copied().map(Id::Id).collect());
        let response = self
            .runtime
            .block_on(self.client.torrent_get(Some(summary_fields()), ids))
            .map_err(RpcError::Transport)?;

        check(&response.result)?;
        let torrents = response.arguments.torrents;
        tracing::debug!(count = torrents.len(), "torrent-get ok");
        Ok(torrents.into_iter().map(summary).collect())
    }

    fn remove_jobs(&mut self, ids: &[JobId], delete_data: bool) -> Result<(), RpcError> {
        let ids = ids.iter().copied().map(Id::Id).collect();
        let response = self
            .runtime
            .block_on(self.client.torrent_remove(ids, delete_data))
            .map_err(RpcError::Transport)?;
        check(&response.result)
    }
}

/// Maps the `result` field of a reply; anything but `"success"` is the daemon's error text.
fn check(result: &str) -> Result<(), RpcError> {
    if result == "success" {
        Ok(())
    } else {
        Err(RpcError::Rejected(result.to_string()))
    }
}

/// Torrent fields `summary` reads.
fn summary_fields() -> Vec<TorrentGetField> {
    vec![
        TorrentGetField::Id,
        TorrentGetField::Name,
        TorrentGetField::Status,
        TorrentGetField::PercentDone,
        TorrentGetField::HaveValid,
        TorrentGetField::HaveUnchecked,
        TorrentGetField::DesiredAvailable,
        TorrentGetField::LeftUntilDone,
    ]
}

fn summary(torrent: Torrent) -> JobSummary {
    JobSummary {
        id: torrent.id,
        name: torrent.name,
        status: torrent.status.map(|status| JobStatus::from(status as i64)),
        percent_done: torrent.percent_done.map(f64::from),
        have_valid: torrent.have_valid.map(|n| n as i64),
        have_unchecked: torrent.have_unchecked.map(|n| n as i64),
        desired_available: torrent.desired_available.map(|n| n as i64),
        left_until_done: torrent.left_until_done,
    }
}

/// `http(s)://host:port/path` for a profile.
pub fn endpoint_url(profile: &ConnectionProfile) -> Result<Url, RpcError> {
    let scheme = if profile.use_tls { "https" } else { "http" };
    let port = if profile.port == 0 {
        DEFAULT_RPC_PORT
    } else {
        profile.port
    };
    let host = if profile.host.contains(':') && !profile.host.starts_with('[') {
        format!("[{}]", profile.host)
    } else {
        profile.host.clone()
    };
    let path = profile.request_path.as_deref().unwrap_or(DEFAULT_RPC_PATH);
    let slash = if path.starts_with('/') { "" } else { "/" };

    let raw = format!("{scheme}://{host}:{port}{slash}{path}");
    Url::parse(&raw).map_err(|source| RpcError::InvalidEndpoint {
        endpoint: raw,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(host: &str) -> ConnectionProfile {
        ConnectionProfile {
            host: host.to_string(),
            port: 0,
            use_tls: false,
            username: None,
            password: None,
            request_path: None,
            user_agent: "TorrentCLI".to_string(),
        }
    }

    #[test]
    fn endpoint_defaults() {
        let url = endpoint_url(&profile("localhost")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9091/transmission/rpc");
    }

    #[test]
    fn endpoint_uses_tls_port_and_path() {
        let p = ConnectionProfile {
            use_tls: true,
            port: 8443,
            request_path: Some("rpc".to_string()),
            ..profile("nas")
        };
        assert_eq!(endpoint_url(&p).unwrap().as_str(), "https://nas:8443/rpc");
    }

    #[test]
    fn endpoint_keeps_query_in_request_path() {
        let p = ConnectionProfile {
            request_path: Some("/transmission/rpc?x=1".to_string()),
            ..profile("nas")
        };
        let url = endpoint_url(&p).unwrap();
        assert_eq!(url.path(), "/transmission/rpc");
        assert_eq!(url.query(), Some("x=1"));
    }

    #[test]
    fn endpoint_brackets_ipv6_hosts() {
        let url = endpoint_url(&profile("::1")).unwrap();
        assert_eq!(url.host_str(), Some("[::1]"));
    }

    #[test]
    fn endpoint_rejects_garbage_host() {
        let err = endpoint_url(&profile("bad host")).unwrap_err();
        assert!(matches!(err, RpcError::InvalidEndpoint { .. }));
    }

    #[test]
    fn construction_does_not_connect() {
        // Nothing listens on port 1; construction must still succeed.
        let p = ConnectionProfile {
            port: 1,
            username: Some("alice".to_string()),
            password: Some("pw".to_string()),
            ..profile("127.0.0.1")
        };
        let client = TransmissionClient::new(&p).unwrap();
        assert_eq!(client.endpoint().port(), Some(1));
    }

    #[test]
    fn unreachable_daemon_is_a_transport_error() {
        let p = ConnectionProfile {
            port: 1,
            ..profile("127.0.0.1")
        };
        let mut client = TransmissionClient::new(&p).unwrap();
        let err = client.list_jobs(&[]).unwrap_err();
        assert!(matches!(err, RpcError::Transport(_)));
    }

    #[test]
    fn missing_local_file_fails_before_any_request() {
        let mut client = TransmissionClient::new(&profile("127.0.0.1")).unwrap();
        let err = client
            .add_from_local_file(Path::new("/nonexistent/file.torrent"))
            .unwrap_err();
        assert!(matches!(err, RpcError::ReadFile { .. }));
    }

    #[test]
    fn torrent_maps_onto_summary() {
        let torrent: Torrent = serde_json::from_value(json!({
            "id": 7,
            "name": "debian-12.iso",
            "status": 4,
            "percentDone": 0.25,
            "haveValid": 100,
            "haveUnchecked": 0,
            "desiredAvailable": 300,
            "leftUntilDone": 300
        }))
        .unwrap();

        let job = summary(torrent);
        assert_eq!(job.id, Some(7));
        assert_eq!(job.name.as_deref(), Some("debian-12.iso"));
        assert_eq!(job.status, Some(JobStatus::Downloading));
        assert_eq!(job.percent_done, Some(0.25));
        assert_eq!(job.have_valid, Some(100));
        assert_eq!(job.left_until_done, Some(300));
    }

    #[test]
    fn torrent_with_only_id_leaves_the_rest_unknown() {
        let torrent: Torrent = serde_json::from_value(json!({ "id": 3 })).unwrap();
        let job = summary(torrent);
        assert_eq!(job.id, Some(3));
        assert!(job.name.is_none());
        assert!(job.status.is_none());
        assert!(job.percent_done.is_none());
    }

    #[test]
    fn non_success_result_is_rejected() {
        assert!(check("success").is_ok());
        let err = check("duplicate torrent").unwrap_err();
        assert!(matches!(err, RpcError::Rejected(ref msg) if msg == "duplicate torrent"));
    }
}
