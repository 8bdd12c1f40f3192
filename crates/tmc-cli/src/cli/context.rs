//! Per-invocation application state handed to every command.

use tmc_core::profile::ConnectionProfile;

/// The resolved profile and the client built from it.
pub struct AppContext<C> {
    pub profile: ConnectionProfile,
    pub client: C,
}

impl<C> AppContext<C> {
    pub fn new(profile: ConnectionProfile, client: C) -> Self {
        Self { profile, client }
    }
}
