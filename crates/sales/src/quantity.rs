//! Line quantities.
//!
//! Quantities are whole units (the server stores them as `INTEGER`) and are
//! never zero: a line either exists with at least one unit or is removed.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use solobill_core::ValueObject;

/// Positive whole-unit quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl ValueObject for Quantity {}

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    pub fn new(units: u32) -> Option<Self> {
        NonZeroU32::new(units).map(Self)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// Parse a user-entered quantity; `None` for empty, non-numeric or
    /// non-positive input.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().and_then(Self::new)
    }

    /// Parse a user-entered quantity, defaulting to one unit.
    pub fn coerce(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::ONE)
    }

    pub fn saturating_add(self, other: Quantity) -> Self {
        Self(self.0.saturating_add(other.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
