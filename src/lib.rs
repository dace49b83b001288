//! aprsroute is a pure, synchronous APRS digipeater routing decision engine.
//!
//! Given one received packet and a router's settings (station identity,
//! alias/pattern lists, policy flags), [`route::route`] produces either a
//! transformed outbound packet with an updated path, or a classified
//! rejection — plus, when requested, a byte-offset diagnostic trace of
//! every edit applied to the path.
//!
//! The surrounding digipeater (hold timers, dedupe window, AX.25 framing,
//! radio I/O) is not part of this crate; it consumes [`result::RoutingResult`]
//! values produced here.

/// Parse-level error types (not routing outcomes — those live in [`result`]).
pub mod error;

/// A single parsed path element: classification, n-N counter, SSID, used-mark.
pub mod address;

/// The packet model and its canonical wire format.
pub mod packet;

/// Composable routing policy flags.
pub mod options;

/// Station identity, alias/pattern lists, and policy for one router.
pub mod settings;

/// The byte-offset action trail produced by a routing decision.
pub mod diagnostics;

/// The outcome of a routing attempt.
pub mod result;

/// The routing decision entry point and its two engines.
pub mod route;

pub use crate::address::{Address, AddressKind, QConstruct};
pub use crate::diagnostics::{ActionKind, ActionTarget, MessageKind, RoutingAction};
pub use crate::error::{DecodeError, OptionParseError};
pub use crate::options::RoutingOptions;
pub use crate::packet::Packet;
pub use crate::result::{RoutingResult, RoutingState};
pub use crate::route::route;
pub use crate::settings::{NnPattern, RouterSettings};
