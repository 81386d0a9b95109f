//! Switch bank sampling.
//!
//! One `SwitchBank` owns the eight physical switch inputs, generic over
//! `embedded_hal::digital::InputPin` so host tests can substitute fake
//! pins.  Sampling stamps the press ledger and reports how many switches
//! are held right now; deciding whether the chord is finished is the
//! polling driver's job, not the sampler's.

use crate::chord::ledger::{PressLedger, SWITCH_COUNT};
use embedded_hal::digital::InputPin;

/// Fixed array of switch inputs in logical (bit) order.
///
/// Constructed once at startup from the configured pins; no global pin
/// state exists anywhere else.
pub struct SwitchBank<I> {
    pins: [I; SWITCH_COUNT],
}

impl<I: InputPin> SwitchBank<I> {
    /// Take ownership of the eight configured inputs, index 0 first.
    pub fn new(pins: [I; SWITCH_COUNT]) -> Self {
        Self { pins }
    }

    /// Sample every switch once.
    ///
    /// Each switch observed high gets `now_ms` stamped into its ledger
    /// slot; released switches leave their slot untouched.  Returns the
    /// number of switches currently held.
    pub fn sample(&mut self, ledger: &mut PressLedger, now_ms: u64) -> u8 {
        let mut active = 0u8;
        for (i, pin) in self.pins.iter_mut().enumerate() {
            if pin.is_high().unwrap_or(false) {
                ledger.record(i, now_ms);
                active += 1;
            }
        }
        active
    }
}
