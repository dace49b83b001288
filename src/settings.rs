//! Router identity and routing policy.

use crate::address::Address;
use crate::options::RoutingOptions;

/// A generic n-N pattern the router responds to, e.g. `WIDE2-2` contributes
/// `{ text: "WIDE2", n: 2, cap: 2 }` — `cap == 0` means uncapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NnPattern {
    pub text: String,
    pub n: u8,
    pub cap: u8,
}

fn alias_text(entry: &str) -> String {
    Address::parse(entry).text
}

fn nn_pattern(entry: &str) -> NnPattern {
    let addr = Address::parse(entry);
    NnPattern {
        text: addr.text,
        n: addr.n,
        cap: addr.hops,
    }
}

/// Station identity, alias/pattern lists, and policy flags for one router.
///
/// Offers two ways of building the same value, mirroring the rest of this
/// crate's builder-style constructors: [`RouterSettings::new`] takes
/// pre-split alias/pattern lists, [`RouterSettings::from_path`] takes one
/// merged list and buckets each entry by whether it parses to `n == 0`
/// (alias) or `n > 0` (pattern).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterSettings {
    pub station: String,
    pub explicit_aliases: Vec<String>,
    pub n_n_patterns: Vec<NnPattern>,
    pub options: RoutingOptions,
    pub enable_diagnostics: bool,
}

impl RouterSettings {
    pub fn new(
        station: impl Into<String>,
        explicit_aliases: impl IntoIterator<Item = impl AsRef<str>>,
        n_n_addresses: impl IntoIterator<Item = impl AsRef<str>>,
        options: RoutingOptions,
        enable_diagnostics: bool,
    ) -> Self {
        RouterSettings {
            station: station.into(),
            explicit_aliases: explicit_aliases
                .into_iter()
                .map(|a| alias_text(a.as_ref()))
                .collect(),
            n_n_patterns: n_n_addresses
                .into_iter()
                .map(|a| nn_pattern(a.as_ref()))
                .collect(),
            options,
            enable_diagnostics,
        }
    }

    pub fn from_path(
        station: impl Into<String>,
        path: impl IntoIterator<Item = impl AsRef<str>>,
        options: RoutingOptions,
        enable_diagnostics: bool,
    ) -> Self {
        let mut explicit_aliases = Vec::new();
        let mut n_n_patterns = Vec::new();

        for entry in path {
            let addr = Address::parse(entry.as_ref());
            if addr.n == 0 {
                explicit_aliases.push(addr.text);
            } else {
                n_n_patterns.push(NnPattern {
                    text: addr.text,
                    n: addr.n,
                    cap: addr.hops,
                });
            }
        }

        RouterSettings {
            station: station.into(),
            explicit_aliases,
            n_n_patterns,
            options,
            enable_diagnostics,
        }
    }

    /// The conventional default path: `WIDE1-2,WIDE2-2,TRACE1-2,TRACE2-2,WIDE,RELAY,TRACE`.
    pub fn default_path() -> Vec<&'static str> {
        vec![
            "WIDE1-2", "WIDE2-2", "TRACE1-2", "TRACE2-2", "WIDE", "RELAY", "TRACE",
        ]
    }
}
