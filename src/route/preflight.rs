//! Validity and structural analysis performed before a routing decision is
//! made: nothing here mutates `packet` or `addresses`.

use crate::address::{parse_callsign_with_used_mark, Address};
use crate::options::RoutingOptions;
use crate::packet::Packet;
use crate::settings::RouterSettings;

/// `from`/`to` non-empty, `1..=8` path entries; in strict mode also checks
/// data length and every callsign's grammar.
pub(crate) fn is_valid(packet: &Packet, addresses: &[Address], options: RoutingOptions) -> bool {
    if packet.from.is_empty() || packet.to.is_empty() {
        return false;
    }
    if addresses.is_empty() || addresses.len() > 8 {
        return false;
    }

    if options.contains(RoutingOptions::STRICT) {
        if packet.data.is_empty() || packet.data.len() > 256 {
            return false;
        }
        if !parse_callsign_with_used_mark(&packet.from) || !parse_callsign_with_used_mark(&packet.to) {
            return false;
        }
        for token in &packet.path {
            if !parse_callsign_with_used_mark(token) {
                return false;
            }
        }
    }

    true
}

/// The largest index whose used-mark is set, if any.
pub(crate) fn last_used_index(addresses: &[Address]) -> Option<usize> {
    addresses.iter().enumerate().rev().find(|(_, a)| a.used).map(|(i, _)| i)
}

/// Starting from `start`, the first unused address whose text equals the
/// station or any explicit alias.
pub(crate) fn router_address_index(
    addresses: &[Address],
    start: usize,
    settings: &RouterSettings,
) -> Option<usize> {
    addresses[start.min(addresses.len())..]
        .iter()
        .enumerate()
        .find(|(_, a)| {
            !a.used
                && (a.text == settings.station || settings.explicit_aliases.iter().any(|alias| alias == &a.text))
        })
        .map(|(i, _)| start + i)
}

pub(crate) fn from_us(packet: &Packet, settings: &RouterSettings) -> bool {
    packet.from == settings.station
}

/// `packet.to == station`: a packet addressed directly to us is never routed.
pub(crate) fn to_us(packet: &Packet, settings: &RouterSettings) -> bool {
    packet.to == settings.station
}

pub(crate) fn routing_ended(addresses: &[Address], last_used: usize) -> bool {
    last_used == addresses.len() - 1
}

pub(crate) fn already_routed_by_us(addresses: &[Address], last_used: usize, station: &str) -> bool {
    addresses[last_used].text == station
}
