//! Core of `tmc`, a command-line client for a remote Transmission daemon.
//!
//! The binary resolves a [`profile::ConnectionProfile`] from the stored
//! [`config`], builds an [`rpc::TransmissionClient`] from it, and runs one job
//! command through the [`rpc::JobClient`] seam, rendering results with
//! [`job::format_job`].

pub mod config;
pub mod job;
pub mod logging;
pub mod profile;
pub mod rpc;
