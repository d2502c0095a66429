//! Expiration Policy
//!
//! Selects whether lookups also enforce the TTL or leave expiry to the sweep.

/// How a cache decides that an entry is no longer servable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpirationPolicy {
    /// Only the background sweep removes entries. A lookup is a presence
    /// check, so an entry may be served for up to just under twice the TTL
    /// after insertion.
    #[default]
    SweepOnly,
    /// The sweep still runs, and lookups additionally report entries older
    /// than the TTL as absent. Staleness is bounded by the TTL exactly.
    SweepAndRead,
}

impl ExpirationPolicy {
    /// Parses a boolean-ish flag where a truthy value selects `SweepAndRead`.
    pub fn from_read_check_flag(flag: &str) -> Option<Self> {
        match flag.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(Self::SweepAndRead),
            "0" | "false" | "no" | "off" => Some(Self::SweepOnly),
            _ => None,
        }
    }

    /// Returns true if lookups check entry age.
    pub fn checks_on_read(self) -> bool {
        matches!(self, Self::SweepAndRead)
    }
}
