//! The packet model and its canonical wire format:
//! `from>to[,path...]:data`.

use crate::error::DecodeError;

/// An APRS packet: sender, destination, ordered digipeater path, and data
/// payload. `path[0]` in the wire format is the destination (`to`); the
/// remaining comma-separated tokens are the digipeater path proper.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Packet {
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    pub data: String,
}

impl Packet {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        path: Vec<String>,
        data: impl Into<String>,
    ) -> Self {
        Packet {
            from: from.into(),
            to: to.into(),
            path,
            data: data.into(),
        }
    }

    /// Decodes `from>to[,path...]:data`. Fails only when `>` or a `:` after
    /// it cannot be found; does not otherwise validate the result (empty
    /// path tokens are preserved verbatim).
    pub fn decode(packet_string: &str) -> Result<Packet, DecodeError> {
        let from_pos = packet_string.find('>').ok_or_else(|| DecodeError::MalformedHeader {
            input: packet_string.to_string(),
        })?;

        let colon_pos = packet_string[from_pos..]
            .find(':')
            .map(|i| i + from_pos)
            .ok_or_else(|| DecodeError::MalformedHeader {
                input: packet_string.to_string(),
            })?;

        let from = packet_string[..from_pos].to_string();
        let to_and_path = &packet_string[from_pos + 1..colon_pos];

        let (to, path) = match to_and_path.find(',') {
            Some(comma) => {
                let to = to_and_path[..comma].to_string();
                let path = to_and_path[comma + 1..]
                    .split(',')
                    .map(str::to_string)
                    .collect();
                (to, path)
            }
            None => (to_and_path.to_string(), Vec::new()),
        };

        let data = packet_string[colon_pos + 1..].to_string();

        Ok(Packet { from, to, path, data })
    }

    /// Renders the canonical string form. Makes no validity claims about its
    /// input (e.g. an empty path is rendered without a dangling comma).
    pub fn encode(&self) -> String {
        let mut result = format!("{}>{}", self.from, self.to);
        for addr in &self.path {
            result.push(',');
            result.push_str(addr);
        }
        result.push(':');
        result.push_str(&self.data);
        result
    }
}
