//! Command line arguments.
//!
//! Parsing produces an [`Args`] value, which is turned into a validated [`Request`]
//! describing what to compute. Nothing is kept in global parser state.

use crate::error::CidrError;
use crate::models::IpNetwork;
use clap::{ArgAction, ArgGroup, Parser};

/// List, split, analyse and test IPv4/IPv6 CIDR blocks.
///
/// With no mode flag every address in the block is listed.
#[derive(Debug, Parser)]
#[command(version)]
#[command(group(ArgGroup::new("mode").args(["analyze", "subnet", "exists"])))]
pub struct Args {
    /// Network in CIDR notation, e.g. 192.168.0.1/28 or 2001:db8::/126
    #[arg(value_name = "CIDR")]
    pub cidr: String,

    /// Print network, end address, netmask and host count
    #[arg(short, long)]
    pub analyze: bool,

    /// Split into subnetworks of this prefix length
    #[arg(short, long, value_name = "PREFIX")]
    pub subnet: Option<u32>,

    /// Test whether ADDR is within the network (exit code 64 if not)
    #[arg(short, long, value_name = "ADDR")]
    pub exists: Option<String>,

    /// Print the analysis as JSON
    #[arg(short, long, requires = "analyze")]
    pub json: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What to do with the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// List every address.
    Enumerate,
    Analyze,
    /// Split into subnetworks of the given prefix length.
    Split(u8),
    /// Test membership of a host address.
    Exists(String),
}

/// A validated request built from [`Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub network: IpNetwork,
    pub mode: Mode,
    pub json: bool,
}

impl Args {
    /// Parse the CIDR argument and select the mode.
    pub fn into_request(self) -> Result<Request, CidrError> {
        let network = self.cidr.parse::<IpNetwork>()?;
        let mode = if self.analyze {
            Mode::Analyze
        } else if let Some(subnet) = self.subnet {
            Mode::Split(subnet_prefix(&network, subnet)?)
        } else if let Some(host) = self.exists {
            Mode::Exists(host)
        } else {
            Mode::Enumerate
        };
        log::debug!("request: {network} mode={mode:?}");
        Ok(Request {
            network,
            mode,
            json: self.json,
        })
    }
}

/// Check a `-s` value against the width of the network's family.
fn subnet_prefix(network: &IpNetwork, subnet: u32) -> Result<u8, CidrError> {
    u8::try_from(subnet)
        .ok()
        .filter(|prefix| *prefix <= network.width())
        .ok_or(CidrError::SubnetPrefixOutOfRange {
            subnet,
            width: network.width(),
        })
}
