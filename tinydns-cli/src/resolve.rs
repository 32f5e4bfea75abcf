use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::time::Duration;

use tinydns_proto::{build_query, QueryType};

use crate::error::CliError;

const QUERY_BUF_LEN: usize = 512;
const RESPONSE_BUF_LEN: usize = 512;

/// Sends a query to each nameserver in turn, returning the first response
/// received. Mirrors the source's `resolve_query` nameserver-list walk:
/// a send/receive failure (including a timeout) on one server falls
/// through to the next rather than aborting immediately.
pub fn resolve_query(
    nameservers: &[Ipv4Addr],
    timeout: Duration,
    retries: u8,
    name: &str,
    qtype: QueryType,
) -> Result<([u8; RESPONSE_BUF_LEN], usize), CliError> {
    let mut query_buf = [0u8; QUERY_BUF_LEN];
    let query_len = build_query(&mut query_buf, query_id(), name, qtype)?;

    for server in nameservers {
        for attempt in 0..=retries {
            tracing::debug!(%server, attempt, "sending query");
            match send_and_receive(*server, timeout, &query_buf[..query_len]) {
                Ok(response) => return Ok(response),
                Err(err) => {
                    tracing::warn!(%server, attempt, %err, "nameserver did not answer");
                }
            }
        }
    }
    Err(CliError::NoNameserverResponded)
}

fn send_and_receive(
    server: Ipv4Addr,
    timeout: Duration,
    query: &[u8],
) -> Result<([u8; RESPONSE_BUF_LEN], usize), CliError> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.set_read_timeout(Some(timeout))?;
    socket.set_write_timeout(Some(timeout))?;
    let addr = SocketAddr::from((server, 53));
    socket.send_to(query, addr)?;

    let mut buf = [0u8; RESPONSE_BUF_LEN];
    let (len, _from) = socket.recv_from(&mut buf)?;
    Ok((buf, len))
}

/// A query id with enough entropy to avoid cache collisions between
/// back-to-back invocations, without pulling in a dependency just for this.
fn query_id() -> u16 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as u16
}
