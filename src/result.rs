//! The outcome of a routing attempt.

use crate::diagnostics::RoutingAction;
use crate::packet::Packet;

/// Why a packet was, or was not, routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutingState {
    /// The router's address was found and the path was updated.
    Routed,
    /// No router-matching address was found anywhere in the path.
    NotRouted,
    /// The router's address is present but already marked used.
    AlreadyRouted,
    /// The path has no addresses left to route against at all.
    NoMatchingAddresses,
    /// `from` equals the station and `route_self` is not set.
    CannotRouteSelf,
}

/// The full result of routing one packet: what happened, the packet before
/// and after, and (when diagnostics were requested) the ordered edit log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingResult {
    pub state: RoutingState,
    /// `true` iff `state == RoutingState::Routed`.
    pub routed: bool,
    /// Always `true`: the call executed normally regardless of outcome.
    /// `state` is what distinguishes a routed packet from a rejected one;
    /// `success` only ever reports a panic or an aborted call, neither of
    /// which produces a `RoutingResult` at all.
    pub success: bool,
    pub original_packet: Packet,
    pub routed_packet: Packet,
    pub actions: Vec<RoutingAction>,
}

impl RoutingResult {
    pub(crate) fn new(
        state: RoutingState,
        original_packet: Packet,
        routed_packet: Packet,
        actions: Vec<RoutingAction>,
    ) -> Self {
        let routed = matches!(state, RoutingState::Routed);
        RoutingResult {
            state,
            routed,
            success: true,
            original_packet,
            routed_packet,
            actions,
        }
    }
}
