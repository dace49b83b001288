use thiserror::Error;

/// Failure modes of [`crate::packet::Packet::decode`].
///
/// Unlike [`crate::result::RoutingState`], this is a parse-level failure: the
/// input string did not even have the shape of a packet, so there is nothing
/// to route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Neither a `>` separating `from` from `to`, nor a `:` separating the
    /// path from the data, could be found.
    #[error("malformed packet header in {input:?}: missing '>' or ':'")]
    MalformedHeader { input: String },
}

/// Failure to recognize a routing-option token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized routing option token: {0:?}")]
pub struct OptionParseError(pub String);
