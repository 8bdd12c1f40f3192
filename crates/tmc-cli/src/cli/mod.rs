//! CLI for tmc.

mod commands;
mod context;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use tmc_core::config;
use tmc_core::profile::{self, ProfileArgs};
use tmc_core::rpc::{JobClient, TransmissionClient};

use commands::{run_add, run_ls, run_remove, run_save};
pub use context::AppContext;

/// Top-level CLI for tmc.
#[derive(Debug, Parser)]
#[command(name = "tmc", version)]
#[command(about = "Transmission client: add, list and remove jobs on a remote daemon", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// How to reach the daemon. Accepted before or after the subcommand; each flag
/// falls back to its `TRANSMISSION_*` variable, then to `~/.tmc/config.yml`.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// Transmission server host [default: localhost]
    #[arg(short = 's', long, global = true, env = "TRANSMISSION_HOST")]
    pub host: Option<String>,

    /// Transmission server port (0 = unset)
    #[arg(short = 'p', long, global = true, env = "TRANSMISSION_PORT")]
    pub port: Option<u16>,

    /// Transmission RPC URL; overrides host, port, user, password, https and path.
    #[arg(long, global = true, env = "TRANSMISSION_URL")]
    pub url: Option<String>,

    /// Transmission user name
    #[arg(short = 'u', long, global = true, env = "TRANSMISSION_USER")]
    pub user: Option<String>,

    /// Transmission password (prompted for when a user is set without one)
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "TRANSMISSION_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Use TLS for the connection; `--https=false` turns off a stored `https: true`
    #[arg(
        short = 't',
        long,
        global = true,
        env = "TRANSMISSION_HTTPS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub https: Option<bool>,

    /// Client name kept in the profile and saved configuration [default: TorrentCLI]
    #[arg(long, global = true, env = "TRANSMISSION_USERAGENT")]
    pub useragent: Option<String>,
}

impl ConnectionArgs {
    pub fn profile_args(&self) -> ProfileArgs {
        ProfileArgs {
            host: self.host.clone(),
            port: self.port,
            url: self.url.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            https: self.https,
            user_agent: self.useragent.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add torrent files, URLs or magnet links.
    Add {
        /// Local .torrent file, http(s) URL or magnet link.
        #[arg(required = true, value_name = "FILE_OR_URL")]
        sources: Vec<String>,

        /// Print the full status line of each added job instead of its ID.
        #[arg(long)]
        detail: bool,

        /// Delete local torrent files once the daemon accepted them.
        #[arg(long)]
        delete: bool,
    },

    /// List jobs; all of them when no ID is given.
    #[command(visible_alias = "list", allow_negative_numbers = true)]
    Ls {
        /// Job IDs.
        #[arg(value_name = "ID")]
        ids: Vec<String>,
    },

    /// Remove the given jobs, or every stopped and finished job when no ID is given.
    #[command(visible_alias = "rm", allow_negative_numbers = true)]
    Remove {
        /// Job IDs.
        #[arg(value_name = "ID")]
        ids: Vec<String>,

        /// Also delete downloaded data.
        #[arg(long)]
        delete: bool,
    },

    /// Save the effective configuration to ~/.tmc/config.yml.
    Save,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    let stored = config::load().context("failed to load configuration")?;
    let profile = profile::resolve(&stored, &cli.connection.profile_args(), prompt_password)
        .context("failed to resolve connection settings")?;
    tracing::debug!(
        host = %profile.host,
        port = profile.port,
        tls = profile.use_tls,
        "resolved connection profile"
    );
    let client = TransmissionClient::new(&profile).context("failed to create rpc client")?;
    let mut ctx = AppContext::new(profile, client);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&mut ctx, cli.command, &mut out)
}

/// Runs one subcommand against an already built context.
pub fn run_command<C, W>(ctx: &mut AppContext<C>, command: CliCommand, out: &mut W) -> Result<()>
where
    C: JobClient,
    W: Write,
{
    match command {
        CliCommand::Add {
            sources,
            detail,
            delete,
        } => run_add(ctx, out, &sources, detail, delete),
        CliCommand::Ls { ids } => run_ls(ctx, out, &ids),
        CliCommand::Remove { ids, delete } => run_remove(ctx, out, &ids, delete),
        CliCommand::Save => {
            let path = config::save_path()?;
            run_save(ctx, &path, &mut io::stderr())
        }
    }
}

fn prompt_password() -> io::Result<String> {
    rpassword::prompt_password("Password: ")
}

#[cfg(test)]
mod tests;
