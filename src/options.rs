//! Composable routing policy flags.
//!
//! Modeled as a plain bitset over a `u16`, in the spirit of the original's
//! `enum class routing_option : int` plus `enum_has_flag` — a tagged value,
//! not a trait object.

use std::ops::{BitOr, BitOrAssign};

use crate::error::OptionParseError;

/// A composable set of [`RoutingOptions`] flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoutingOptions(u16);

impl RoutingOptions {
    pub const NONE: RoutingOptions = RoutingOptions(0);
    /// Allow routing packets whose `from` equals the station (explicit mode only).
    pub const ROUTE_SELF: RoutingOptions = RoutingOptions(1 << 0);
    /// Move the matched router address to just after the last-used address.
    pub const PREEMPT_FRONT: RoutingOptions = RoutingOptions(1 << 1);
    /// Replace the run between the last-used address and the match with just the match.
    pub const PREEMPT_TRUNCATE: RoutingOptions = RoutingOptions(1 << 2);
    /// Delete every address up to and including the match, then place it at the front.
    pub const PREEMPT_DROP: RoutingOptions = RoutingOptions(1 << 3);
    /// Mark the matched address used in place, leaving the rest of the path untouched.
    pub const PREEMPT_MARK: RoutingOptions = RoutingOptions(1 << 4);
    /// Replace a spent n-N pattern with the station address instead of inserting a new one.
    pub const SUBSTITUTE_COMPLETE_HOPS: RoutingOptions = RoutingOptions(1 << 5);
    /// Replace an n-N token whose hop count exceeds its pattern's cap with the station address.
    pub const TRAP_EXCESSIVE_HOPS: RoutingOptions = RoutingOptions(1 << 6);
    /// Skip n-N tokens whose hop count exceeds their pattern's cap when searching for a match.
    pub const REJECT_EXCESSIVE_HOPS: RoutingOptions = RoutingOptions(1 << 7);
    /// Apply full callsign syntax validation to `from`, `to`, and every path token.
    pub const STRICT: RoutingOptions = RoutingOptions(1 << 8);
    /// Allow preempt strategies to also apply in n-N mode.
    pub const PREEMPT_N_N: RoutingOptions = RoutingOptions(1 << 9);
    /// Overwrite a matched explicit alias slot with the station address instead of inserting.
    pub const SUBSTITUTE_EXPLICIT_ADDRESS: RoutingOptions = RoutingOptions(1 << 10);

    /// True if every flag set in `flag` is also set in `self`.
    pub fn contains(self, flag: RoutingOptions) -> bool {
        (self.0 & flag.0) == flag.0 && flag.0 != 0
    }

    /// Parses a single case-sensitive token from the accepted set.
    pub fn parse_token(token: &str) -> Result<RoutingOptions, OptionParseError> {
        Ok(match token {
            "none" => RoutingOptions::NONE,
            "route_self" => RoutingOptions::ROUTE_SELF,
            "preempt_front" => RoutingOptions::PREEMPT_FRONT,
            "preempt_truncate" => RoutingOptions::PREEMPT_TRUNCATE,
            "preempt_drop" => RoutingOptions::PREEMPT_DROP,
            "preempt_mark" => RoutingOptions::PREEMPT_MARK,
            "substitute_complete_hops" => RoutingOptions::SUBSTITUTE_COMPLETE_HOPS,
            "substitute_explicit_address" => RoutingOptions::SUBSTITUTE_EXPLICIT_ADDRESS,
            "trap_excessive_hops" => RoutingOptions::TRAP_EXCESSIVE_HOPS,
            "reject_excessive_hops" => RoutingOptions::REJECT_EXCESSIVE_HOPS,
            "strict" => RoutingOptions::STRICT,
            "preempt_n_N" => RoutingOptions::PREEMPT_N_N,
            _ => return Err(OptionParseError(token.to_string())),
        })
    }

    /// Parses a `|`-separated list of tokens, e.g. `"preempt_front |
    /// trap_excessive_hops"`.
    pub fn parse(options: &str) -> Result<RoutingOptions, OptionParseError> {
        let mut result = RoutingOptions::NONE;
        for token in options.split('|') {
            result |= RoutingOptions::parse_token(token.trim())?;
        }
        Ok(result)
    }
}

impl BitOr for RoutingOptions {
    type Output = RoutingOptions;

    fn bitor(self, rhs: RoutingOptions) -> RoutingOptions {
        RoutingOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for RoutingOptions {
    fn bitor_assign(&mut self, rhs: RoutingOptions) {
        self.0 |= rhs.0;
    }
}
