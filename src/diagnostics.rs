//! Byte-offset action trail for a routing decision.
//!
//! Every action's `[start, end)` is a half-open byte range into the
//! canonical packet string as it stands right before that action's own
//! edit is applied — replaying the log in order against the original
//! string, substituting `address` for each span (or deleting it, for
//! `Remove`), reconstructs the routed string one edit at a time.
//!
//! For edits that don't change a slot's rendered length (insert, remove) the
//! pre-edit and post-edit span are the same, so they're computed from the
//! address list's current state at record time. Edits that can change a
//! slot's length — replace, set/unset the used-mark, and decrement (an n-N
//! counter drops its `-N` suffix entirely when it reaches 0) — must instead
//! capture the span *before* mutating, since the post-edit string no longer
//! has that many bytes to replace; see [`Diagnostics::note_with_span`].

use crate::address::Address;

/// What kind of edit (or non-edit note) a [`RoutingAction`] records.
///
/// `Message` and `Error` are carried for forward compatibility with richer
/// diagnostic producers but nothing in this crate constructs them today:
/// routing here never fails outside the five [`crate::result::RoutingState`]
/// variants, each of which is self-explanatory from `state` alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Insert,
    Remove,
    Replace,
    Decrement,
    Set,
    Unset,
    Warn,
    Message,
    Error,
}

/// What part of the packet an action applies to. Only `Path` is ever
/// constructed; the type stays open (`#[non_exhaustive]`) rather than being
/// collapsed to a unit struct, since a future producer could reasonably
/// target `from`/`to`/`data` the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionTarget {
    Path,
}

/// Severity of a [`ActionKind::Message`]/[`ActionKind::Error`] action.
/// Unconstructed today, see [`ActionKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

/// One entry in a routing decision's edit log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingAction {
    pub start: usize,
    pub end: usize,
    pub index: usize,
    pub kind: ActionKind,
    pub target: ActionTarget,
    pub address: String,
    pub message_kind: Option<MessageKind>,
}

/// Computes `[start, end)` for every address in `addresses`, given the
/// packet's `from`/`to`, against the canonical string those addresses would
/// render to right now.
pub(crate) fn path_offsets(from: &str, to: &str, addresses: &[Address]) -> Vec<(usize, usize)> {
    let mut offset = from.len() + 1 + to.len();
    let mut offsets = Vec::with_capacity(addresses.len());
    for addr in addresses {
        let canonical = addr.to_canonical();
        let start = offset + 1;
        let end = start + canonical.len();
        offsets.push((start, end));
        offset = end;
    }
    offsets
}

/// Accumulates a [`RoutingAction`] log, or does nothing at all when
/// diagnostics aren't enabled — every method is a no-op in that case, so
/// callers never need to branch on `enabled` themselves.
pub(crate) struct Diagnostics {
    enabled: bool,
    actions: Vec<RoutingAction>,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        Diagnostics {
            enabled,
            actions: Vec::new(),
        }
    }

    fn record(&mut self, kind: ActionKind, index: usize, address: String, start: usize, end: usize) {
        if !self.enabled {
            return;
        }
        self.actions.push(RoutingAction {
            start,
            end,
            index,
            kind,
            target: ActionTarget::Path,
            address,
            message_kind: None,
        });
    }

    /// Records an edit against `addresses`'s *current* state (the state the
    /// edit just produced, or that a read-only note describes).
    pub fn note(&mut self, kind: ActionKind, from: &str, to: &str, addresses: &[Address], index: usize) {
        if !self.enabled {
            return;
        }
        let offsets = path_offsets(from, to, addresses);
        let (start, end) = offsets[index];
        self.record(kind, index, addresses[index].to_canonical(), start, end);
    }

    /// Records an edit at an explicitly given `[start, end)` rather than
    /// recomputing it from `addresses`'s current state — used when the
    /// recorded span is the region *being replaced* (its pre-edit extent),
    /// which the caller must capture before mutating.
    pub fn note_with_span(
        &mut self,
        kind: ActionKind,
        index: usize,
        address: String,
        start: usize,
        end: usize,
    ) {
        self.record(kind, index, address, start, end);
    }

    /// Records a zero-width removal at the position `index` used to occupy,
    /// for use after the element has already been spliced out of
    /// `addresses` (so `addresses[index]` is now whatever follows it, or
    /// out of bounds). `removed_canonical` is the text the removed element
    /// rendered to.
    pub fn note_removed(
        &mut self,
        from: &str,
        to: &str,
        addresses: &[Address],
        index: usize,
        removed_canonical: String,
    ) {
        if !self.enabled {
            return;
        }
        let offsets = path_offsets(from, to, addresses);
        let start = match offsets.get(index) {
            Some((s, _)) => *s,
            None => match offsets.last() {
                Some((_, e)) => *e,
                None => from.len() + 1 + to.len(),
            },
        };
        self.record(ActionKind::Remove, index, removed_canonical, start, start);
    }

    pub fn into_actions(self) -> Vec<RoutingAction> {
        self.actions
    }
}
