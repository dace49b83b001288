//! Parsing and classification of a single path element (an "address").

/// The ten well-known q-construct literals (<https://www.aprs-is.net/q.aspx>).
///
/// `AoLower`/`AoUpper` and `ArLower`/`ArUpper` differ only by the case of
/// their last letter (`qAo` vs `qAO`, `qAr` vs `qAR`) and carry distinct
/// meanings, so both are kept as separate variants rather than folded
/// case-insensitively.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum QConstruct {
    /// `qAC` — verified login via a bidirectional port.
    Ac,
    /// `qAX` — unverified login.
    Ax,
    /// `qAU` — direct via UDP.
    Au,
    /// `qAo` — gated packet via a client-only port.
    AoLower,
    /// `qAO` — non-gated packet via a send-only port, or an indirect packet
    /// via a client-only port.
    AoUpper,
    /// `qAS` — packet via a server without a q construct.
    As,
    /// `qAr` — gated packet using the `,I` construct from a remote IGate.
    ArLower,
    /// `qAR` — gated packet using the `,I` construct with a verified IGate
    /// login.
    ArUpper,
    /// `qAZ` — server-client command packet.
    Az,
    /// `qAI` — trace packet.
    Ai,
}

fn parse_q_construct(text: &str) -> Option<QConstruct> {
    Some(match text {
        "qAC" => QConstruct::Ac,
        "qAX" => QConstruct::Ax,
        "qAU" => QConstruct::Au,
        "qAo" => QConstruct::AoLower,
        "qAO" => QConstruct::AoUpper,
        "qAS" => QConstruct::As,
        "qAr" => QConstruct::ArLower,
        "qAR" => QConstruct::ArUpper,
        "qAZ" => QConstruct::Az,
        "qAI" => QConstruct::Ai,
        _ => return None,
    })
}

/// Classification of an [`Address`]'s text, independent of any n-N or SSID
/// suffix already stripped off of it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AddressKind {
    Wide,
    Trace,
    Relay,
    Echo,
    Gate,
    Temp,
    Tcpip,
    Tcpxx,
    Nogate,
    Rfonly,
    IgateCall,
    Opntrk,
    Opntrc,
    /// One of the ten well-known q-construct literals.
    Q(QConstruct),
    /// Anything not recognized above, including ordinary callsigns.
    Other,
}

fn parse_kind(text: &str) -> AddressKind {
    match text {
        "WIDE" => AddressKind::Wide,
        "TRACE" => AddressKind::Trace,
        "RELAY" => AddressKind::Relay,
        "ECHO" => AddressKind::Echo,
        "GATE" => AddressKind::Gate,
        "TEMP" => AddressKind::Temp,
        "TCPIP" => AddressKind::Tcpip,
        "TCPXX" => AddressKind::Tcpxx,
        "NOGATE" => AddressKind::Nogate,
        "RFONLY" => AddressKind::Rfonly,
        "IGATECALL" => AddressKind::IgateCall,
        "OPNTRK" => AddressKind::Opntrk,
        "OPNTRC" => AddressKind::Opntrc,
        _ => AddressKind::Other,
    }
}

/// A single parsed path element.
///
/// `n` and `hops` together model the n-N counter (`n` is the spec's `n`,
/// `hops` is the spec's `N`, the number of hops left). `n == 0` implies
/// `hops == 0`; SSID and the n-N counter are mutually exclusive on a single
/// address. Parsing never fails: an address that matches none of the known
/// shapes keeps its full text with `kind = Other` and every numeric field
/// zeroed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    /// The address text, with any used-mark, SSID, or n-N suffix stripped.
    pub text: String,
    pub kind: AddressKind,
    /// Pattern class digit, `0` or `1..=7`.
    pub n: u8,
    /// Remaining-hops counter, `0..=7`. Always `0` when `n == 0`.
    pub hops: u8,
    /// SSID, `0..=15`. Mutually exclusive with a nonzero `n`.
    pub ssid: u8,
    /// Whether this address carries a trailing `*` used-mark.
    pub used: bool,
    /// Position in the owning path, reassigned after every structural edit.
    pub index: usize,
}

impl Address {
    fn empty() -> Self {
        Address {
            text: String::new(),
            kind: AddressKind::Other,
            n: 0,
            hops: 0,
            ssid: 0,
            used: false,
            index: 0,
        }
    }

    /// Builds a brand-new, unmarked, un-indexed address carrying only text —
    /// the shape of a freshly inserted router address.
    pub fn new(text: impl Into<String>) -> Self {
        Address {
            text: text.into(),
            ..Address::empty()
        }
    }

    /// Parses one path token. Never fails.
    pub fn parse(token: &str) -> Self {
        let mut addr = Address::empty();

        if let Some(q) = parse_q_construct(token) {
            addr.text = token.to_string();
            addr.kind = AddressKind::Q(q);
            return addr;
        }

        let mut text = token;
        if let Some(stripped) = text.strip_suffix('*') {
            addr.used = true;
            text = stripped;
        }

        match text.find('-') {
            Some(sep) if sep > 0 => {
                let before = text.as_bytes()[sep - 1];
                let after_digits = &text[sep + 1..];

                if before.is_ascii_digit()
                    && after_digits.len() == 1
                    && after_digits.as_bytes()[0].is_ascii_digit()
                {
                    let n = (before - b'0') as u8;
                    let hops = (after_digits.as_bytes()[0] - b'0') as u8;
                    if (1..=7).contains(&n) && (1..=7).contains(&hops) {
                        addr.text = text[..sep - 1].to_string();
                        addr.n = n;
                        addr.hops = hops;
                    } else {
                        addr.text = text.to_string();
                    }
                } else if !after_digits.is_empty()
                    && after_digits.as_bytes()[0].is_ascii_digit()
                {
                    addr.text = text.to_string();
                    let two_digit_leading_zero =
                        after_digits.len() == 2 && after_digits.as_bytes()[0] == b'0';
                    if after_digits.len() <= 2
                        && !two_digit_leading_zero
                        && after_digits.bytes().all(|b| b.is_ascii_digit())
                    {
                        if let Ok(ssid) = after_digits.parse::<u8>() {
                            if ssid <= 15 {
                                addr.ssid = ssid;
                            }
                        }
                    }
                } else {
                    addr.text = text.to_string();
                }
            }
            _ => {
                if let Some(last) = text.bytes().last() {
                    if last.is_ascii_digit() {
                        let n = (last - b'0') as u8;
                        let prefix = &text[..text.len() - 1];
                        if (1..=7).contains(&n) {
                            addr.n = n;
                            addr.text = prefix.to_string();
                        } else {
                            addr.text = text.to_string();
                        }
                    } else {
                        addr.text = text.to_string();
                    }
                } else {
                    addr.text = text.to_string();
                }
            }
        }

        addr.kind = parse_kind(&addr.text);
        addr
    }

    /// Canonical textual rendering of this address, including any n-N/used
    /// suffix, but never the SSID (the original text already contains it,
    /// since SSID and n-N are mutually exclusive and SSID never strips the
    /// digits out of `text`).
    pub fn to_canonical(&self) -> String {
        let mut out = self.text.clone();
        if self.n > 0 {
            out.push_str(&self.n.to_string());
        }
        if self.hops > 0 {
            out.push('-');
            out.push_str(&self.hops.to_string());
        }
        if self.used {
            out.push('*');
        }
        out
    }
}

/// Validates a bare callsign against the APRS grammar used in strict mode:
/// `[A-Z0-9]{1,6}` optionally followed by `-` and an SSID `1..=15`
/// with no leading zero. Trailing used-marks must already be stripped by the
/// caller (see [`parse_callsign_with_used_mark`]).
///
/// The original C++ (`try_parse_callsign`) checks
/// `(!isalnum || !isdigit) && !isupper`, which is buggy: `isalnum && !isdigit`
/// is true for every lowercase letter, so the intended "uppercase or digit"
/// rule silently accepts lowercase letters through that branch. This
/// implementation follows the documented grammar instead and does not
/// reproduce the bug.
pub fn parse_callsign(address: &str) -> bool {
    if address.is_empty() || address.len() > 9 {
        return false;
    }

    let (callsign, ssid_str) = match address.find('-') {
        Some(sep) => {
            if sep == address.len() - 1 || sep + 3 < address.len() {
                return false;
            }
            (&address[..sep], Some(&address[sep + 1..]))
        }
        None => (address, None),
    };

    if callsign.is_empty() || callsign.len() > 6 {
        return false;
    }

    if !callsign
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        return false;
    }

    if let Some(ssid_str) = ssid_str {
        if ssid_str.as_bytes()[0] == b'0' {
            return false;
        }
        if !ssid_str.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match ssid_str.parse::<u8>() {
            Ok(ssid) if (1..=15).contains(&ssid) => {}
            _ => return false,
        }
    }

    true
}

/// Same as [`parse_callsign`], but first strips a trailing used-mark (`*`),
/// matching how strict-mode validation is applied to `from`/`to`/path
/// tokens.
pub fn parse_callsign_with_used_mark(address: &str) -> bool {
    let address = address.strip_suffix('*').unwrap_or(address);
    parse_callsign(address)
}
