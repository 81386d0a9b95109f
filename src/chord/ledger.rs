//! Per-switch press ledger.
//!
//! Each switch owns one slot recording the most recent time it was
//! observed pressed since the previous chord emission.  A slot is an
//! explicit tagged value - `Unset` or `PressedAt` - so "never pressed",
//! "pressed recently" and "pressed but stale" stay distinguishable
//! without a sentinel zero timestamp.

/// Number of physical switches, fixed by the hardware.
pub const SWITCH_COUNT: usize = 8;

/// State of a single ledger slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    /// Switch has not been observed pressed since the last reset.
    #[default]
    Unset,
    /// Switch was last observed pressed at this time (ms since boot).
    PressedAt(u64),
}

/// Last-seen-pressed timestamps for all eight switches.
///
/// Written by the input sampler, bulk-reset after a chord is handed off.
/// Owned exclusively by the polling task; never shared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressLedger {
    slots: [Slot; SWITCH_COUNT],
}

impl PressLedger {
    /// Create a ledger with every slot unset.
    pub const fn new() -> Self {
        Self {
            slots: [Slot::Unset; SWITCH_COUNT],
        }
    }

    /// Record that switch `index` is pressed right now.
    ///
    /// A later press overwrites an earlier one; only the most recent
    /// observation matters for chord membership.
    pub fn record(&mut self, index: usize, now_ms: u64) {
        self.slots[index] = Slot::PressedAt(now_ms);
    }

    /// Clear every slot so the next chord starts from a clean ledger.
    pub fn reset(&mut self) {
        self.slots = [Slot::Unset; SWITCH_COUNT];
    }

    /// All slots in switch (bit) order.
    pub fn slots(&self) -> &[Slot; SWITCH_COUNT] {
        &self.slots
    }
}
