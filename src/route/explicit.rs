//! The explicit routing engine: a matched alias or station callsign was
//! found unused in the path.

use crate::address::Address;
use crate::diagnostics::Diagnostics;
use crate::options::RoutingOptions;
use crate::packet::Packet;
use crate::result::RoutingResult;
use crate::settings::RouterSettings;

use super::{finish_routed, insert_address, mark_used, reindex, remove_range, replace_address, unrouted};
use crate::result::RoutingState;

pub(crate) fn route(
    packet: &Packet,
    mut addresses: Vec<Address>,
    settings: &RouterSettings,
    matched: usize,
    u: usize,
    mut diag: Diagnostics,
) -> RoutingResult {
    let from = packet.from.clone();
    let to = packet.to.clone();
    let opts = settings.options;
    let have_addresses_ahead = matched != u;

    if !have_addresses_ahead && !opts.contains(RoutingOptions::PREEMPT_DROP) {
        basic(&mut addresses, &mut diag, &from, &to, settings, matched, u);
    } else if opts.contains(RoutingOptions::PREEMPT_FRONT) {
        let removed = addresses.remove(matched);
        reindex(&mut addresses);
        diag.note_removed(&from, &to, &addresses, matched, removed.to_canonical());
        insert_address(&mut addresses, &mut diag, &from, &to, u, removed);
        basic(&mut addresses, &mut diag, &from, &to, settings, u, u);
    } else if opts.contains(RoutingOptions::PREEMPT_TRUNCATE) {
        let kept = addresses[matched].clone();
        remove_range(&mut addresses, &mut diag, &from, &to, u, matched);
        insert_address(&mut addresses, &mut diag, &from, &to, u, kept);
        basic(&mut addresses, &mut diag, &from, &to, settings, u, u);
    } else if opts.contains(RoutingOptions::PREEMPT_DROP) {
        let kept = addresses[matched].clone();
        remove_range(&mut addresses, &mut diag, &from, &to, 0, matched);
        insert_address(&mut addresses, &mut diag, &from, &to, 0, kept);
        basic(&mut addresses, &mut diag, &from, &to, settings, 0, 0);
    } else if opts.contains(RoutingOptions::PREEMPT_MARK) {
        mark_used(&mut diag, &from, &to, &mut addresses, matched, true);
    } else {
        return unrouted(RoutingState::NotRouted, packet, diag);
    }

    finish_routed(packet, addresses, diag)
}

/// `substitute_explicit_address` / insert-or-overwrite / direct-match, per
/// the dispatch table: exactly one of these four branches fires.
fn basic(
    addresses: &mut Vec<Address>,
    diag: &mut Diagnostics,
    from: &str,
    to: &str,
    settings: &RouterSettings,
    m: usize,
    u: usize,
) {
    let opts = settings.options;
    let is_alias_match = addresses[m].text != settings.station;

    if opts.contains(RoutingOptions::SUBSTITUTE_EXPLICIT_ADDRESS) {
        replace_address(addresses, diag, from, to, m, &settings.station);
        mark_used(diag, from, to, addresses, m, false);
    } else if is_alias_match && addresses.len() < 8 {
        let station_addr = Address::new(settings.station.clone());
        insert_address(addresses, diag, from, to, u, station_addr);
        mark_used(diag, from, to, addresses, u, false);
    } else if is_alias_match && addresses.len() == 8 {
        replace_address(addresses, diag, from, to, m, &settings.station);
        mark_used(diag, from, to, addresses, m, false);
    } else {
        mark_used(diag, from, to, addresses, m, false);
    }
}
