//! The n-N routing engine: no alias or station callsign was found unused,
//! so the path is searched for a matching `TEXTn-N` token instead.

use crate::address::Address;
use crate::diagnostics::Diagnostics;
use crate::options::RoutingOptions;
use crate::packet::Packet;
use crate::result::{RoutingResult, RoutingState};
use crate::settings::{NnPattern, RouterSettings};

use super::{decrement, finish_routed, insert_address, mark_used, replace_address, unrouted};

struct Candidate {
    packet_idx: usize,
    cap: u8,
}

/// First `(packet_idx, pattern)` pair where `pattern.text == entry.text` and
/// `pattern.n == entry.n`, left-to-right. When `reject_excessive_hops` is
/// set, a pattern with a positive cap the entry's hop count exceeds is
/// skipped here — before it ever reaches the trap check below.
fn find_candidate(addresses: &[Address], settings: &RouterSettings) -> Option<Candidate> {
    let reject = settings.options.contains(RoutingOptions::REJECT_EXCESSIVE_HOPS);

    for (i, addr) in addresses.iter().enumerate() {
        if addr.hops == 0 {
            continue;
        }
        if let Some(pattern) = find_pattern(&settings.n_n_patterns, addr) {
            if reject && pattern.cap > 0 && addr.hops > pattern.cap {
                continue;
            }
            return Some(Candidate {
                packet_idx: i,
                cap: pattern.cap,
            });
        }
    }
    None
}

fn find_pattern<'a>(patterns: &'a [NnPattern], addr: &Address) -> Option<&'a NnPattern> {
    patterns.iter().find(|p| p.text == addr.text && p.n == addr.n)
}

pub(crate) fn route(
    packet: &Packet,
    mut addresses: Vec<Address>,
    settings: &RouterSettings,
    mut diag: Diagnostics,
) -> RoutingResult {
    let from = packet.from.clone();
    let to = packet.to.clone();
    let opts = settings.options;

    let candidate = match find_candidate(&addresses, settings) {
        Some(c) => c,
        None => return unrouted(RoutingState::NoMatchingAddresses, packet, diag),
    };
    let idx = candidate.packet_idx;
    let cap = candidate.cap;

    if opts.contains(RoutingOptions::TRAP_EXCESSIVE_HOPS) && cap > 0 && addresses[idx].hops > cap {
        replace_address(&mut addresses, &mut diag, &from, &to, idx, &settings.station);
        mark_used(&mut diag, &from, &to, &mut addresses, idx, false);
        return finish_routed(packet, addresses, diag);
    }

    decrement(&mut addresses, &mut diag, &from, &to, idx);
    let zero_sub = opts.contains(RoutingOptions::SUBSTITUTE_COMPLETE_HOPS);

    if addresses.len() == 8 && (addresses[idx].hops > 0 || !zero_sub) {
        if addresses[idx].hops == 0 && !zero_sub {
            mark_used(&mut diag, &from, &to, &mut addresses, idx, false);
        }
        return finish_routed(packet, addresses, diag);
    }

    if zero_sub && addresses[idx].hops == 0 {
        replace_address(&mut addresses, &mut diag, &from, &to, idx, &settings.station);
        mark_used(&mut diag, &from, &to, &mut addresses, idx, false);
        return finish_routed(packet, addresses, diag);
    }

    let remaining_hops = addresses[idx].hops;
    let station_addr = Address::new(settings.station.clone());
    insert_address(&mut addresses, &mut diag, &from, &to, idx, station_addr);

    if zero_sub || remaining_hops > 0 {
        mark_used(&mut diag, &from, &to, &mut addresses, idx, false);
    } else {
        mark_used(&mut diag, &from, &to, &mut addresses, idx + 1, false);
    }

    finish_routed(packet, addresses, diag)
}
