//! List, split, analyse and test IPv4/IPv6 CIDR blocks.
//!
//! The address arithmetic lives in [`models`], the operations in [`processing`] and the
//! writers in [`output`]. [`run`] ties them together for a parsed [`cli::Request`].

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use cli::{Mode, Request};
use models::{IpFamily, IpNetwork, Network};
use serde::Serialize;
use std::error::Error;
use std::io::{self, ErrorKind, Write};

pub use error::CidrError;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The host tested with [`Mode::Exists`] is outside the network.
    NotMember,
}

/// Run a request, writing results to `out`.
///
/// Validation errors are returned as [`CidrError`] before anything is written.
pub fn run<W: Write>(request: &Request, out: &mut W) -> Result<Outcome, Box<dyn Error>> {
    log::info!("run({network}) mode={:?}", request.mode, network = request.network);
    match request.network {
        IpNetwork::V4(network) => run_network(&network, &request.mode, request.json, out),
        IpNetwork::V6(network) => run_network(&network, &request.mode, request.json, out),
    }
}

/// True when writing results failed because the reader closed the pipe.
pub fn is_broken_pipe(e: &(dyn Error + 'static)) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|io_error| io_error.kind() == ErrorKind::BrokenPipe)
}

fn run_network<W, A>(
    network: &Network<A>,
    mode: &Mode,
    json: bool,
    out: &mut W,
) -> Result<Outcome, Box<dyn Error>>
where
    W: Write,
    A: IpFamily + Serialize,
{
    match mode {
        Mode::Enumerate => {
            let count = output::write_lines(out, processing::enumerate(network)?)?;
            log::info!("Listed {count} addresses of {network}");
        }
        Mode::Split(subnet_prefix) => {
            let subnets = processing::enumerate_subnets(network, *subnet_prefix)?;
            let count = output::write_lines(out, subnets)?;
            log::info!("Split {network} into {count} /{subnet_prefix} subnets");
        }
        Mode::Analyze => {
            let analysis = processing::analyze(network);
            if json {
                output::write_analysis_json(out, &analysis)?;
            } else {
                output::write_analysis(out, &analysis)?;
            }
        }
        Mode::Exists(host) => {
            let (host, member) = processing::check_host(network, host)?;
            output::write_membership(out, host, network, member)?;
            if !member {
                return Ok(Outcome::NotMember);
            }
        }
    }
    Ok(Outcome::Done)
}
