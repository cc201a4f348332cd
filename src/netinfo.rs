//! Display-IP discovery
//!
//! Picks the address printed in the startup banner so the pages can be
//! opened from phones on the same network. Best effort only: the
//! listener always binds the wildcard address regardless of what is
//! chosen here, and the snapshot is taken exactly once at startup.

use crate::logger;
use std::net::IpAddr;

/// Adapter name fragments that mark an interface as virtual.
const VIRTUAL_ADAPTER_NAMES: [&str; 4] = ["Virtual", "Hyper-V", "VMware", "VirtualBox"];

/// Host-only block VirtualBox hands out by default.
const VIRTUALBOX_HOST_PREFIX: &str = "192.168.56";

/// Link-local block, never reachable from another device.
const LINK_LOCAL_PREFIX: &str = "169.254";

/// Discover the LAN-facing address from the host's interfaces.
pub fn display_ip() -> String {
    match local_ip_address::list_afinet_netifas() {
        Ok(interfaces) => select_display_ip(&interfaces),
        Err(e) => {
            logger::log_warning(&format!("Could not enumerate network interfaces: {e}"));
            "localhost".to_string()
        }
    }
}

/// Select a "real" IPv4 address from an interface snapshot.
///
/// First pass, in enumeration order over non-virtual interfaces: a
/// wireless-named interface wins outright, a wired-named one wins
/// unless its address sits in the VirtualBox host-only block. The
/// fallback pass takes any routable IPv4 outside the host-only and
/// link-local blocks, and `localhost` closes the list.
pub fn select_display_ip(interfaces: &[(String, IpAddr)]) -> String {
    for (name, addr) in interfaces {
        if VIRTUAL_ADAPTER_NAMES.iter().any(|v| name.contains(v)) {
            continue;
        }
        let IpAddr::V4(v4) = addr else { continue };
        if v4.is_loopback() {
            continue;
        }
        if name.contains("Wi-Fi") || name.contains("Wireless") {
            return v4.to_string();
        }
        if name.contains("Ethernet") && !v4.to_string().starts_with(VIRTUALBOX_HOST_PREFIX) {
            return v4.to_string();
        }
    }

    for (_, addr) in interfaces {
        let IpAddr::V4(v4) = addr else { continue };
        if v4.is_loopback() {
            continue;
        }
        let text = v4.to_string();
        if !text.starts_with(VIRTUALBOX_HOST_PREFIX) && !text.starts_with(LINK_LOCAL_PREFIX) {
            return text;
        }
    }

    "localhost".to_string()
}
