mod cli;
mod config;
mod display;
mod error;
mod resolve;

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, registry, EnvFilter};

use cli::{rr_type_from_str, Args};
use config::Config;
use error::CliError;

fn init_logs() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tinydns_cli=info"));
    let fmt_layer = fmt::layer().with_ansi(cfg!(debug_assertions));
    let _ = registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();
}

fn main() {
    init_logs();

    let args = Args::parse();
    if let Err(err) = run(args) {
        tracing::error!(%err, "query failed");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::load(args.config.as_deref())?;
    let nameservers = if args.servers.is_empty() {
        config.nameservers
    } else {
        args.servers
    };

    let qtype = rr_type_from_str(&args.rtype);
    let (buf, len) = resolve::resolve_query(
        &nameservers,
        Duration::from_millis(config.timeout_ms),
        config.retries,
        &args.name,
        qtype,
    )?;

    let mut iter = tinydns_proto::MessageIter::new(&buf[..len])?;
    if iter.header().flags.rcode != 0 {
        tracing::warn!(rcode = iter.header().flags.rcode, "server reported an error");
    }

    iter.for_each(|section, rr| {
        println!("{}", display::format_record(section, &rr));
    })?;

    Ok(())
}
