use rand::Rng;
use std::fmt::{Display, Formatter};

/// `TimeToLive` (ttl) newtype.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TimeToLive(pub u32);

/// Port newtype.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Port(pub u16);

impl Port {
    /// The lowest ephemeral port which may be chosen.
    pub const EPHEMERAL_BASE: u16 = 10_000;

    /// The number of ephemeral ports which may be chosen from.
    pub const EPHEMERAL_SPAN: u16 = 32_567;

    /// Pick a random ephemeral port in `10000..42567`.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self(Self::EPHEMERAL_BASE + rand::rng().random_range(0..Self::EPHEMERAL_SPAN))
    }
}

impl Display for TimeToLive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Port {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
