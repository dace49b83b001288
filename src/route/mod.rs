//! The routing decision entry point and the two engines it dispatches to.

mod explicit;
mod nn;
mod preflight;

use crate::address::Address;
use crate::diagnostics::{ActionKind, Diagnostics};
use crate::options::RoutingOptions;
use crate::packet::Packet;
use crate::result::{RoutingResult, RoutingState};
use crate::settings::RouterSettings;

/// Routes one packet against one set of station identity and policy flags.
///
/// Pure and synchronous: no I/O, no shared state, no panics on malformed
/// input (an invalid packet is reported through `RoutingState::NotRouted`,
/// not a `Result::Err`).
pub fn route(packet: &Packet, settings: &RouterSettings) -> RoutingResult {
    let mut addresses: Vec<Address> = packet.path.iter().map(|token| Address::parse(token)).collect();
    reindex(&mut addresses);

    if !preflight::is_valid(packet, &addresses, settings.options) {
        return RoutingResult::new(RoutingState::NotRouted, packet.clone(), packet.clone(), Vec::new());
    }

    let mut diag = Diagnostics::new(settings.enable_diagnostics);
    let last_used = preflight::last_used_index(&addresses);

    if let Some(idx) = last_used {
        if preflight::routing_ended(&addresses, idx) {
            diag.note(ActionKind::Warn, &packet.from, &packet.to, &addresses, idx);
            return unrouted(RoutingState::NotRouted, packet, diag);
        }
        if preflight::already_routed_by_us(&addresses, idx, &settings.station) {
            diag.note(ActionKind::Warn, &packet.from, &packet.to, &addresses, idx);
            return unrouted(RoutingState::AlreadyRouted, packet, diag);
        }
    }

    if preflight::to_us(packet, settings) {
        return unrouted(RoutingState::NotRouted, packet, diag);
    }

    let start = last_used.map(|i| i + 1).unwrap_or(0);
    let matched = preflight::router_address_index(&addresses, start, settings);

    if let Some(m) = matched {
        if preflight::from_us(packet, settings) && !settings.options.contains(RoutingOptions::ROUTE_SELF) {
            return unrouted(RoutingState::CannotRouteSelf, packet, diag);
        }
        return explicit::route(packet, addresses, settings, m, start, diag);
    }

    nn::route(packet, addresses, settings, diag)
}

fn reindex(addresses: &mut [Address]) {
    for (i, addr) in addresses.iter_mut().enumerate() {
        addr.index = i;
    }
}

/// Clears the used-mark on every other address (unless `preserve_others`,
/// for `preempt_mark`), then sets it on `target`. Emits `unset` actions for
/// each mark cleared, in index order, followed by one `set` action.
///
/// Each action's span is captured *before* the corresponding mutation: it
/// covers the region being replaced (with or without the trailing `*`), not
/// the region the edit produces, so replaying the log reconstructs the
/// string one edit at a time.
fn mark_used(
    diag: &mut Diagnostics,
    from: &str,
    to: &str,
    addresses: &mut [Address],
    target: usize,
    preserve_others: bool,
) {
    if !preserve_others {
        let previously_used: Vec<usize> = addresses
            .iter()
            .enumerate()
            .filter(|(i, a)| *i != target && a.used)
            .map(|(i, _)| i)
            .collect();
        for i in previously_used {
            let (start, end) = crate::diagnostics::path_offsets(from, to, addresses)[i];
            addresses[i].used = false;
            let rendered = addresses[i].to_canonical();
            diag.note_with_span(ActionKind::Unset, i, rendered, start, end);
        }
    }
    let (start, end) = crate::diagnostics::path_offsets(from, to, addresses)[target];
    addresses[target].used = true;
    let rendered = addresses[target].to_canonical();
    diag.note_with_span(ActionKind::Set, target, rendered, start, end);
}

fn insert_address(
    addresses: &mut Vec<Address>,
    diag: &mut Diagnostics,
    from: &str,
    to: &str,
    index: usize,
    addr: Address,
) {
    addresses.insert(index, addr);
    reindex(addresses);
    diag.note(ActionKind::Insert, from, to, addresses, index);
}

/// Overwrites `addresses[index]`'s text, clearing its n-N counter. The
/// recorded span covers the region being replaced (the old token's
/// length), not the new one's — see [`mark_used`].
fn replace_address(
    addresses: &mut [Address],
    diag: &mut Diagnostics,
    from: &str,
    to: &str,
    index: usize,
    new_text: &str,
) {
    let (start, end) = crate::diagnostics::path_offsets(from, to, addresses)[index];
    let used = addresses[index].used;
    addresses[index] = Address::new(new_text);
    addresses[index].index = index;
    addresses[index].used = used;
    let rendered = addresses[index].to_canonical();
    diag.note_with_span(ActionKind::Replace, index, rendered, start, end);
}

/// Captures the span *before* mutating: when the counter drops to 0,
/// [`Address::to_canonical`] drops the `-N` suffix entirely, so the
/// pre-decrement token is longer than the post-decrement one.
fn decrement(addresses: &mut [Address], diag: &mut Diagnostics, from: &str, to: &str, index: usize) {
    let (start, end) = crate::diagnostics::path_offsets(from, to, addresses)[index];
    addresses[index].hops -= 1;
    let rendered = addresses[index].to_canonical();
    diag.note_with_span(ActionKind::Decrement, index, rendered, start, end);
}

/// Removes `addresses[start..=end_inclusive]` one element at a time,
/// emitting a `remove` action per element against the state that removal
/// just produced.
fn remove_range(
    addresses: &mut Vec<Address>,
    diag: &mut Diagnostics,
    from: &str,
    to: &str,
    start: usize,
    end_inclusive: usize,
) {
    let count = end_inclusive - start + 1;
    for _ in 0..count {
        let removed = addresses.remove(start);
        reindex(addresses);
        diag.note_removed(from, to, addresses, start, removed.to_canonical());
    }
}

fn finish_routed(packet: &Packet, addresses: Vec<Address>, diag: Diagnostics) -> RoutingResult {
    let path = addresses.iter().map(Address::to_canonical).collect();
    let routed_packet = Packet::new(packet.from.clone(), packet.to.clone(), path, packet.data.clone());
    RoutingResult::new(RoutingState::Routed, packet.clone(), routed_packet, diag.into_actions())
}

fn unrouted(state: RoutingState, packet: &Packet, diag: Diagnostics) -> RoutingResult {
    RoutingResult::new(state, packet.clone(), packet.clone(), diag.into_actions())
}
