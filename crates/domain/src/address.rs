use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Syntactic class of a `host` command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    Ipv4,
    Ipv6,
    NotAnIp,
}

impl AddressClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressClass::Ipv4 => "IPv4",
            AddressClass::Ipv6 => "IPv6",
            AddressClass::NotAnIp => "hostname",
        }
    }

    pub fn is_ip(&self) -> bool {
        !matches!(self, AddressClass::NotAnIp)
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a token without touching the network.
///
/// Parsing follows `std::net` strictness: IPv4 must be four decimal octets
/// without leading zeros, IPv6 accepts `::` compression and an embedded IPv4
/// tail but no zone suffix. Anything else, including the empty string, is
/// `NotAnIp`.
pub fn classify(token: &str) -> AddressClass {
    if token.parse::<Ipv4Addr>().is_ok() {
        AddressClass::Ipv4
    } else if token.parse::<Ipv6Addr>().is_ok() {
        AddressClass::Ipv6
    } else {
        AddressClass::NotAnIp
    }
}

/// A token paired with the lookup it calls for.
///
/// The original token text is kept so replies echo exactly what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    Address { token: Arc<str>, ip: IpAddr },
    Name(Arc<str>),
}

impl LookupTarget {
    pub fn parse(token: &str) -> Self {
        match token.parse::<IpAddr>() {
            Ok(ip) => LookupTarget::Address {
                token: token.into(),
                ip,
            },
            Err(_) => LookupTarget::Name(token.into()),
        }
    }

    /// Address family of the target, `NotAnIp` for names.
    pub fn class(&self) -> AddressClass {
        match self {
            LookupTarget::Address { ip: IpAddr::V4(_), .. } => AddressClass::Ipv4,
            LookupTarget::Address { ip: IpAddr::V6(_), .. } => AddressClass::Ipv6,
            LookupTarget::Name(_) => AddressClass::NotAnIp,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            LookupTarget::Address { token, .. } => token,
            LookupTarget::Name(name) => name,
        }
    }

    pub fn is_reverse(&self) -> bool {
        matches!(self, LookupTarget::Address { .. })
    }
}
