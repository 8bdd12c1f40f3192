//! Effective connection profile.
//!
//! Layers, lowest precedence first: the stored config file, environment
//! variables, command-line flags, and finally a connection URL which replaces
//! host, credentials, TLS, port and request path in one go. Environment and
//! flags arrive already merged in [`ProfileArgs`].

use percent_encoding::percent_decode_str;
use std::io;
use url::Url;

use crate::config::{ConfigError, StoredConfig};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_USER_AGENT: &str = "TorrentCLI";
/// Port used when TLS is on and nothing else names a port.
pub const DEFAULT_TLS_PORT: u16 = 443;

/// Where and how to reach the daemon. Built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub host: String,
    /// `0` leaves the choice to the RPC client.
    pub port: u16,
    pub use_tls: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub request_path: Option<String>,
    pub user_agent: String,
}

/// Flag and environment layer. `None` (or an empty string, or port `0`)
/// means the value was not given and the stored config applies. `https`
/// stays `None` unless set, so an explicit `false` can override the file.
#[derive(Debug, Clone, Default)]
pub struct ProfileArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub https: Option<bool>,
    pub user_agent: Option<String>,
}

/// Merges all layers into one profile.
///
/// `prompt` is called only when a username ended up without a password.
pub fn resolve<F>(
    stored: &StoredConfig,
    args: &ProfileArgs,
    prompt: F,
) -> Result<ConnectionProfile, ConfigError>
where
    F: FnOnce() -> io::Result<String>,
{
    let mut profile = ConnectionProfile {
        host: pick(&args.host, &stored.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: args
            .port
            .filter(|p| *p != 0)
            .or(stored.port.filter(|p| *p != 0))
            .unwrap_or(0),
        use_tls: args.https.or(stored.https).unwrap_or(false),
        username: pick(&args.user, &stored.user),
        password: pick(&args.password, &stored.password),
        request_path: non_empty(&stored.rpcpath),
        user_agent: pick(&args.user_agent, &stored.useragent)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    };

    if let Some(url) = pick(&args.url, &stored.url) {
        apply_url(&mut profile, &url)?;
    }

    if profile.use_tls && profile.port == 0 {
        profile.port = DEFAULT_TLS_PORT;
    }

    if profile.username.is_some() && profile.password.is_none() {
        tracing::debug!("username without password, prompting");
        profile.password = Some(prompt().map_err(ConfigError::Prompt)?);
    }

    Ok(profile)
}

/// Overrides profile fields with whatever the URL carries.
fn apply_url(profile: &mut ConnectionProfile, raw: &str) -> Result<(), ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    profile.host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ConfigError::UrlWithoutHost(raw.to_string()))?
        .to_string();

    if !url.username().is_empty() {
        profile.username = Some(decode(url.username()));
    }
    if let Some(password) = url.password() {
        profile.password = Some(decode(password));
    }

    profile.use_tls = url.scheme() == "https";

    // `Url` hides a port equal to the scheme default.
    if let Some(port) = url.port() {
        profile.port = port;
    }

    let mut request_path = url.path().to_string();
    if let Some(query) = url.query() {
        request_path.push('?');
        request_path.push_str(query);
    }
    if !request_path.is_empty() && request_path != "/" {
        profile.request_path = Some(request_path);
    }

    Ok(())
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn pick(high: &Option<String>, low: &Option<String>) -> Option<String> {
    non_empty(high).or_else(|| non_empty(low))
}

impl From<&ConnectionProfile> for StoredConfig {
    /// The document `save` writes: the resolved values, not the layers they came from.
    fn from(profile: &ConnectionProfile) -> Self {
        StoredConfig {
            host: Some(profile.host.clone()),
            port: (profile.port != 0).then_some(profile.port),
            url: None,
            user: profile.username.clone(),
            password: profile.password.clone(),
            https: Some(profile.use_tls),
            useragent: Some(profile.user_agent.clone()),
            rpcpath: profile.request_path.clone(),
        }
    }
}
