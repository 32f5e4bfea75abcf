use std::net::Ipv4Addr;
use std::path::PathBuf;

use clap::Parser;
use tinydns_proto::QueryType;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Domain name to query.
    pub name: String,

    /// Record type to query for.
    #[arg(short = 't', long = "type", default_value = "a")]
    pub rtype: String,

    /// Nameserver to query; may be repeated. Overrides the configured list.
    #[arg(short, long = "server")]
    pub servers: Vec<Ipv4Addr>,

    /// Optional TOML configuration file.
    #[arg(short, long, env = "TINYDNS_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Maps a case-insensitive record-type name to a `QueryType`, defaulting
/// unrecognised names to `QueryType::Other` the way the source's
/// `rr_type_from_str` falls through rather than rejecting input outright.
pub fn rr_type_from_str(s: &str) -> QueryType {
    match s.to_ascii_lowercase().as_str() {
        "a" => QueryType::A,
        "aaaa" => QueryType::Aaaa,
        "cname" => QueryType::Cname,
        "txt" => QueryType::Txt,
        "srv" => QueryType::Srv,
        other => other
            .parse::<u16>()
            .map(QueryType::Other)
            .unwrap_or(QueryType::A),
    }
}
