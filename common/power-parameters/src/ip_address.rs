/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/ip_address.rs
// Parsing for the value of ip_address power fields. A BMC address may
// carry a port, so besides a bare address we accept `<ipv4>:<port>`
// and `[<ipv6>]:<port>`.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const INVALID_IP_ADDRESS_MESSAGE: &str = "Please enter a valid IP address.";

/// What to do with an IPv6 address given without brackets or port, e.g.
/// `2001:db8::1`.
///
/// Such a value has more than one `:` so it reads as neither `<ipv4>:<port>`
/// nor a bare IPv4 address. Existing consumers reject it, which is the
/// default here too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BareIpv6Policy {
    #[default]
    Reject,
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPowerAddress {
    #[error("address contains whitespace")]
    Whitespace,
    #[error("'{0}' is not a valid IPv4 address")]
    InvalidIpv4(String),
    #[error("'{0}' is not a valid IPv6 address")]
    InvalidIpv6(String),
    #[error("'{0}' is not a valid IP address")]
    InvalidIp(String),
    #[error("'{0}' is not a valid port number")]
    InvalidPort(String),
    #[error("'{0}' is not of the form <ip>, <ipv4>:<port> or [<ipv6>]:<port>")]
    Malformed(String),
}

// PowerAddress is a parsed ip_address field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerAddress {
    pub ip: IpAddr,
    pub port: Option<u16>,
}

impl fmt::Display for PowerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.ip, self.port) {
            (IpAddr::V6(ip), Some(port)) => write!(f, "[{ip}]:{port}"),
            (ip, Some(port)) => write!(f, "{ip}:{port}"),
            (ip, None) => write!(f, "{ip}"),
        }
    }
}

/// Port numbers are accepted in the range 0-65535.
pub fn is_valid_port_number(port: i64) -> bool {
    (0..=i64::from(u16::MAX)).contains(&port)
}

fn parse_port(port: &str) -> Result<u16, InvalidPowerAddress> {
    port.parse::<i64>()
        .ok()
        .filter(|port| is_valid_port_number(*port))
        .and_then(|port| u16::try_from(port).ok())
        .ok_or_else(|| InvalidPowerAddress::InvalidPort(port.to_string()))
}

/// Parses the value of an ip_address power field.
pub fn parse_power_address(
    value: &str,
    policy: BareIpv6Policy,
) -> Result<PowerAddress, InvalidPowerAddress> {
    if value.chars().any(char::is_whitespace) {
        return Err(InvalidPowerAddress::Whitespace);
    }

    // [<ipv6>]:<port>
    if value.contains('[') && value.contains(']') {
        let rest = value
            .strip_prefix('[')
            .ok_or_else(|| InvalidPowerAddress::Malformed(value.to_string()))?;
        let (ip, port) = rest
            .split_once("]:")
            .ok_or_else(|| InvalidPowerAddress::Malformed(value.to_string()))?;
        let ip = Ipv6Addr::from_str(ip)
            .map_err(|_| InvalidPowerAddress::InvalidIpv6(ip.to_string()))?;
        return Ok(PowerAddress {
            ip: IpAddr::V6(ip),
            port: Some(parse_port(port)?),
        });
    }

    // <ipv4>:<port>
    let mut parts = value.split(':');
    if let (Some(ip), Some(port), None) = (parts.next(), parts.next(), parts.next()) {
        let ip = Ipv4Addr::from_str(ip)
            .map_err(|_| InvalidPowerAddress::InvalidIpv4(ip.to_string()))?;
        return Ok(PowerAddress {
            ip: IpAddr::V4(ip),
            port: Some(parse_port(port)?),
        });
    }

    if policy == BareIpv6Policy::Reject && value.contains(':') {
        return Err(InvalidPowerAddress::Malformed(value.to_string()));
    }

    let ip =
        IpAddr::from_str(value).map_err(|_| InvalidPowerAddress::InvalidIp(value.to_string()))?;
    Ok(PowerAddress { ip, port: None })
}

pub fn is_valid_power_address(value: &str, policy: BareIpv6Policy) -> bool {
    parse_power_address(value, policy).is_ok()
}
