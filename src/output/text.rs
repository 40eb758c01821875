//! Plain text output, one result per line.

use crate::models::{IpFamily, Network};
use crate::processing::Analysis;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Width of the label column in analysis output.
const LABEL_WIDTH: usize = 9;

/// Format a label left-aligned in a fixed width column.
pub fn format_label(label: &str, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:<width$}")
}

/// Write each item on its own line, streaming as the iterator produces them.
pub fn write_lines<W, I>(out: &mut W, items: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    let mut count = 0u64;
    for item in items {
        writeln!(out, "{item}")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Write an analysis as `Label: value` lines.
pub fn write_analysis<W: Write, A: IpFamily>(
    out: &mut W,
    analysis: &Analysis<A>,
) -> io::Result<()> {
    let rows: [(&str, &dyn Display); 5] = [
        ("Netmask", &analysis.netmask),
        ("Start", &analysis.network),
        ("End", &analysis.end),
        ("Prefix", &analysis.prefix_len),
        ("Hosts", &analysis.host_count),
    ];
    for (label, value) in rows {
        writeln!(out, "{}{value}", format_label(label, LABEL_WIDTH))?;
    }
    out.flush()
}

/// Write the result of a membership test.
pub fn write_membership<W: Write, A: IpFamily>(
    out: &mut W,
    host: A,
    network: &Network<A>,
    member: bool,
) -> io::Result<()> {
    let verdict = if member { "is in" } else { "is not in" };
    writeln!(out, "{host} {verdict} {network}")?;
    out.flush()
}

/// Write a failure as a single `Error: ...` line, meant for stderr.
pub fn write_error<W: Write, E: Display + ?Sized>(out: &mut W, e: &E) -> io::Result<()> {
    writeln!(out, "{} {e}", "Error:".red().bold())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyze;
    use std::net::Ipv4Addr;

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("End", 9), "End:     ");
        assert_eq!(format_label("Netmask", 9), "Netmask: ");
        assert_eq!(format_label("LongerLabel", 5), "LongerLabel:");
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        let count = write_lines(&mut out, ["a", "b"]).unwrap();
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_write_analysis() {
        let net: Network<Ipv4Addr> = "10.0.0.0/30".parse().unwrap();
        let mut out = Vec::new();
        write_analysis(&mut out, &analyze(&net)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Netmask: 255.255.255.252\n\
             Start:   10.0.0.0\n\
             End:     10.0.0.3\n\
             Prefix:  30\n\
             Hosts:   4\n"
        );
    }

    #[test]
    fn test_write_error_is_one_line() {
        let err = crate::error::CidrError::InvalidPrefixLength {
            prefix: "33".to_string(),
            width: 32,
        };
        let mut out = Vec::new();
        write_error(&mut out, &err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.matches("invalid prefix length 33").count(), 1);
        assert!(text.contains("Error:"));
    }

    #[test]
    fn test_write_membership() {
        let net: Network<Ipv4Addr> = "192.168.1.0/24".parse().unwrap();
        let mut out = Vec::new();
        write_membership(&mut out, Ipv4Addr::new(192, 168, 2, 1), &net, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "192.168.2.1 is not in 192.168.1.0/24\n"
        );
    }
}
