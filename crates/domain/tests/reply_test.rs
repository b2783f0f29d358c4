use dnsnative_domain::{
    dedupe_addresses, format_forward_reply, format_reverse_reply, format_unresolved,
    normalize_hostname, MultiAddressStyle,
};
use std::net::IpAddr;

fn ips(addrs: &[&str]) -> Vec<IpAddr> {
    addrs.iter().map(|a| a.parse().unwrap()).collect()
}

#[test]
fn test_reverse_reply_success() {
    assert_eq!(
        format_reverse_reply("8.8.4.4", Some("dns.google")),
        "8.8.4.4 resolves to dns.google."
    );
}

#[test]
fn test_reverse_reply_failure() {
    assert_eq!(
        format_reverse_reply("255.255.255.254", None),
        "Could not resolve 255.255.255.254."
    );
}

#[test]
fn test_forward_reply_single_address() {
    let reply = format_forward_reply(
        "tweakers.net",
        &ips(&["213.239.154.20"]),
        MultiAddressStyle::Inline,
    );
    assert_eq!(reply, "tweakers.net resolves to 213.239.154.20.");
}

#[test]
fn test_forward_reply_single_address_ignores_bulleted_style() {
    let reply = format_forward_reply("one.example", &ips(&["::1"]), MultiAddressStyle::Bulleted);
    assert_eq!(reply, "one.example resolves to ::1.");
}

#[test]
fn test_forward_reply_multiple_inline() {
    let reply = format_forward_reply(
        "dns.google",
        &ips(&["8.8.8.8", "8.8.4.4", "2001:4860:4860::8844"]),
        MultiAddressStyle::Inline,
    );
    assert_eq!(
        reply,
        "dns.google resolves to 8.8.8.8, 8.8.4.4, 2001:4860:4860::8844."
    );
}

#[test]
fn test_forward_reply_multiple_bulleted() {
    let reply = format_forward_reply(
        "localhost",
        &ips(&["::1", "127.0.0.1"]),
        MultiAddressStyle::Bulleted,
    );
    assert_eq!(reply, "localhost resolves to:\n • ::1\n • 127.0.0.1");
}

#[test]
fn test_forward_reply_empty_is_unresolved() {
    let reply = format_forward_reply("abra.cada.bra", &[], MultiAddressStyle::Inline);
    assert_eq!(reply, "Could not resolve abra.cada.bra.");
}

#[test]
fn test_format_unresolved() {
    assert_eq!(format_unresolved("x"), "Could not resolve x.");
}

#[test]
fn test_dedupe_keeps_first_occurrence_order() {
    let deduped = dedupe_addresses(ips(&["::1", "127.0.0.1", "::1", "127.0.0.1", "10.0.0.1"]));
    assert_eq!(deduped, ips(&["::1", "127.0.0.1", "10.0.0.1"]));
}

#[test]
fn test_normalize_hostname() {
    assert_eq!(normalize_hostname("dns.google."), Some("dns.google"));
    assert_eq!(normalize_hostname("localhost"), Some("localhost"));
    assert_eq!(normalize_hostname("."), None);
    assert_eq!(normalize_hostname(""), None);
}
