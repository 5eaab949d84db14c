#![warn(clippy::all, clippy::pedantic, clippy::nursery, rust_2018_idioms)]
#![allow(
    clippy::module_name_repetitions,
    clippy::option_if_let_else,
    clippy::missing_const_for_fn,
    clippy::missing_errors_doc
)]
#![forbid(unsafe_code)]

use clap::Parser;
use config::{Args, TracertConfig};
use tracert_privilege::Privilege;

mod app;
mod config;
mod report;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = TracertConfig::from(args);
    app::configure_logging(&cfg);
    let privilege = Privilege::acquire_privileges()?;
    if !privilege.has_privileges() {
        anyhow::bail!(
            "privileges are required to open raw sockets, rerun as root or grant CAP_NET_RAW"
        );
    }
    app::run_tracert(&cfg)
}
