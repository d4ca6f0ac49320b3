#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # gradeplan
//!
//! Serves a single-page form where a student enters their prelim grade and
//! gets back the midterm and final exam grades they still need to pass the
//! course, plus their standing for the Dean's List.
//!
//! Run `gradeplan serve` and open the printed address in a browser. The bind
//! address can be set with `--addr`, the `GRADEPLAN_ADDR` environment
//! variable, or a `.env` file; it defaults to `127.0.0.1:8080`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use gradeplan::{config, web};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Serve the grade computation form, optionally on a given address
    Serve(Option<String>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the optional bind address
    fn a() -> impl Parser<Option<String>> {
        long("addr")
            .help("Address to bind, as host:port")
            .argument::<String>("ADDR")
            .optional()
    }

    let serve = construct!(Cmd::Serve(a()))
        .to_options()
        .command("serve")
        .help("Serve the grade computation form");

    let cmd = construct!([serve]);

    cmd.to_options().descr("Grade planning tool for students").run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Serve(addr) => {
            let addr: SocketAddr = match addr {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("`{raw}` is not a valid host:port address"))?,
                None => config::server_config().bind(),
            };
            web::serve(addr).await
        }
    }
}
