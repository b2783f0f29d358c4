use crate::config::MultiAddressStyle;
use std::collections::HashSet;
use std::net::IpAddr;

const BULLET: &str = " • ";

pub fn format_unresolved(token: &str) -> String {
    format!("Could not resolve {}.", token)
}

/// Reply for a reverse lookup. `None` means no usable name came back.
pub fn format_reverse_reply(ip: &str, hostname: Option<&str>) -> String {
    match hostname {
        Some(hostname) => format!("{} resolves to {}.", ip, hostname),
        None => format_unresolved(ip),
    }
}

/// Reply for a forward lookup. An empty address list is reported as unresolved.
pub fn format_forward_reply(name: &str, addresses: &[IpAddr], style: MultiAddressStyle) -> String {
    match addresses {
        [] => format_unresolved(name),
        [single] => format!("{} resolves to {}.", name, single),
        many => match style {
            MultiAddressStyle::Inline => {
                let joined = many
                    .iter()
                    .map(|addr| addr.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} resolves to {}.", name, joined)
            }
            MultiAddressStyle::Bulleted => {
                let mut lines = Vec::with_capacity(many.len() + 1);
                lines.push(format!("{} resolves to:", name));
                lines.extend(many.iter().map(|addr| format!("{}{}", BULLET, addr)));
                lines.join("\n")
            }
        },
    }
}

/// Drops repeated addresses, keeping the first occurrence of each.
pub fn dedupe_addresses(addresses: Vec<IpAddr>) -> Vec<IpAddr> {
    let mut seen = HashSet::with_capacity(addresses.len());
    addresses.into_iter().filter(|ip| seen.insert(*ip)).collect()
}

/// Strips the root label dot that resolvers append to fully qualified names.
pub fn normalize_hostname(hostname: &str) -> Option<&str> {
    let trimmed = hostname.strip_suffix('.').unwrap_or(hostname);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
