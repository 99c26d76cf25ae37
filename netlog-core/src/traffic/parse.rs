use crate::traffic::error::ParseError;
use crate::traffic::types::PacketRecord;
use std::net::Ipv4Addr;

const SRC_PREFIX: &str = "SRC=";
const DST_PREFIX: &str = "DST=";
const LEN_PREFIX: &str = "LEN=";

/// Extracts source, destination and length from one firewall log line.
///
/// Tokens are split on whitespace and may appear in any order; only `SRC=`,
/// `DST=` and `LEN=` are recognized. A line looks like:
///
/// ```text
/// ... kernel: [316721.158546] [IPTABLES]:IN=enp6s0f1 OUT=enp6s0f0 SRC=10.20.0.32 DST=74.125.195.188 LEN=52 TOS=0x00 ...
/// ```
///
/// The first `LEN=` token wins. A missing `LEN=` means a length of zero.
pub fn parse_line(line: &str) -> Result<PacketRecord, ParseError> {
    let mut src: Option<Ipv4Addr> = None;
    let mut dst: Option<Ipv4Addr> = None;
    let mut length: Option<u64> = None;

    for token in line.split_whitespace() {
        if let Some(value) = token.strip_prefix(SRC_PREFIX) {
            src = Some(
                value
                    .parse()
                    .map_err(|_| ParseError::BadSourceAddress)?,
            );
        } else if let Some(value) = token.strip_prefix(DST_PREFIX) {
            dst = Some(
                value
                    .parse()
                    .map_err(|_| ParseError::BadDestinationAddress)?,
            );
        } else if let Some(value) = token.strip_prefix(LEN_PREFIX) {
            if length.is_none() {
                length = Some(parse_length(value));
            }
        }
    }

    Ok(PacketRecord {
        src: src.ok_or(ParseError::BadSourceAddress)?,
        dst: dst.ok_or(ParseError::BadDestinationAddress)?,
        length: length.unwrap_or(0),
    })
}

/// Reads the leading decimal digits of a `LEN=` value; anything else is zero.
fn parse_length(value: &str) -> u64 {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());

    value[..end].parse().unwrap_or(0)
}
