//! Draw policy — consumption semantics for a draw call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Consumption policy applied per draw (or per assignment run).
///
/// Defaults are the safe ones: draws sample with replacement and leave
/// pool state untouched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawPolicy {
    /// Remove drawn values from the working set (without replacement).
    pub consumable: bool,
    /// Refill an exhausted working set from the original snapshot
    /// instead of failing. Only meaningful when `consumable` is set.
    pub regenerate: bool,
}

impl DrawPolicy {
    /// With replacement; every draw is independent and stateless.
    pub const WITH_REPLACEMENT: Self = Self {
        consumable: false,
        regenerate: false,
    };

    /// Without replacement; fails with `Depleted` once exhausted.
    pub const CONSUME: Self = Self {
        consumable: true,
        regenerate: false,
    };

    /// Without replacement; refills from the snapshot once exhausted.
    pub const CONSUME_REGENERATE: Self = Self {
        consumable: true,
        regenerate: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_with_replacement() {
        assert_eq!(DrawPolicy::default(), DrawPolicy::WITH_REPLACEMENT);
    }
}
