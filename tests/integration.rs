//! Integration tests for the chordpad polling lifecycle.
//!
//! Drives the sampler and encoder through simulated 10 ms ticks exactly
//! the way the firmware's polling loop does, using fake switch inputs.

use chordpad::chord::{encoder, ChordReport, PressLedger, CHORD_REPORT_SIZE, SWITCH_COUNT};
use chordpad::config::{CHORD_WINDOW_MS, POLL_PERIOD_MS};
use chordpad::switches::SwitchBank;
use std::cell::Cell;
use std::rc::Rc;

/// Host-side stand-in for a GPIO input.
#[derive(Clone)]
struct FakePin(Rc<Cell<bool>>);

impl embedded_hal::digital::ErrorType for FakePin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

/// One simulated firmware instance: switch lines, bank, ledger, clock.
struct Rig {
    bank: SwitchBank<FakePin>,
    lines: [FakePin; SWITCH_COUNT],
    ledger: PressLedger,
    now_ms: u64,
}

impl Rig {
    fn new() -> Self {
        let lines: [FakePin; SWITCH_COUNT] =
            core::array::from_fn(|_| FakePin(Rc::new(Cell::new(false))));
        Self {
            bank: SwitchBank::new(lines.clone()),
            lines,
            ledger: PressLedger::new(),
            now_ms: 0,
        }
    }

    fn press(&mut self, index: usize) {
        self.lines[index].0.set(true);
    }

    fn release(&mut self, index: usize) {
        self.lines[index].0.set(false);
    }

    /// Let the clock run without the loop sampling, as if the executor
    /// were busy elsewhere.
    fn stall(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    /// One polling-loop iteration in packed mode: sleep one period,
    /// sample, and resolve only on an all-released tick.
    fn tick(&mut self) -> Option<u8> {
        self.now_ms += POLL_PERIOD_MS;
        let active = self.bank.sample(&mut self.ledger, self.now_ms);
        if active != 0 {
            return None;
        }
        match encoder::resolve(&self.ledger, self.now_ms, CHORD_WINDOW_MS) {
            0 => None,
            mask => {
                self.ledger.reset();
                Some(mask)
            }
        }
    }

    /// One polling-loop iteration in diagnostic mode.
    fn tick_diagnostic(&mut self) -> Option<[u8; SWITCH_COUNT]> {
        self.now_ms += POLL_PERIOD_MS;
        let active = self.bank.sample(&mut self.ledger, self.now_ms);
        if active != 0 {
            return None;
        }
        let bits = encoder::resolve_diagnostic(&self.ledger, self.now_ms, CHORD_WINDOW_MS)?;
        self.ledger.reset();
        Some(bits)
    }
}

#[test]
fn staggered_releases_form_one_chord() {
    let mut rig = Rig::new();

    rig.press(0);
    rig.press(1);
    assert_eq!(rig.tick(), None); // chord in progress

    rig.release(1); // finger 1 lifts first
    assert_eq!(rig.tick(), None); // switch 0 still held

    rig.release(0);
    assert_eq!(rig.tick(), Some(0b1100_0000));
}

#[test]
fn switch_released_long_before_is_excluded() {
    let mut rig = Rig::new();

    // Switch 1 taps once, then switch 0 holds well past the window.
    rig.press(1);
    assert_eq!(rig.tick(), None);
    rig.release(1);
    rig.press(0);
    for _ in 0..7 {
        assert_eq!(rig.tick(), None); // held, stamp refreshed each tick
    }
    rig.release(0);

    // Switch 1's only press is now ~80 ms old - out of the 50 ms window.
    assert_eq!(rig.tick(), Some(0b1000_0000));
}

#[test]
fn no_presses_never_emit() {
    let mut rig = Rig::new();
    for _ in 0..10 {
        assert_eq!(rig.tick(), None);
    }
}

#[test]
fn ledger_resets_after_emission() {
    let mut rig = Rig::new();

    rig.press(3);
    assert_eq!(rig.tick(), None);
    rig.release(3);
    assert_eq!(rig.tick(), Some(0b0001_0000));

    // Nothing new pressed: the following ticks stay silent.
    assert_eq!(rig.tick(), None);
    assert_eq!(rig.tick(), None);
}

#[test]
fn repeated_pattern_yields_identical_emissions() {
    let mut rig = Rig::new();

    fn tap_chord(rig: &mut Rig) -> Option<u8> {
        rig.press(2);
        rig.press(6);
        assert_eq!(rig.tick(), None);
        rig.release(2);
        rig.release(6);
        rig.tick()
    }

    let first = tap_chord(&mut rig);
    let second = tap_chord(&mut rig);
    assert_eq!(first, Some(0b0010_0010));
    assert_eq!(second, first);
}

#[test]
fn bit_ordering_matches_pin_list() {
    let mut rig = Rig::new();

    rig.press(7);
    assert_eq!(rig.tick(), None);
    rig.release(7);
    assert_eq!(rig.tick(), Some(0b0000_0001));

    rig.press(0);
    assert_eq!(rig.tick(), None);
    rig.release(0);
    assert_eq!(rig.tick(), Some(0b1000_0000));
}

#[test]
fn expired_press_resolves_to_nothing_and_keeps_quiet() {
    let mut rig = Rig::new();

    // A short pulse, then the clock runs past the window before the
    // next all-released sample happens.
    rig.press(4);
    assert_eq!(rig.tick(), None);
    rig.release(4);
    rig.stall(2 * CHORD_WINDOW_MS);

    // Empty chord: no emission, and the stale slot is a harmless no-op
    // on every following pass.
    assert_eq!(rig.tick(), None);
    assert_eq!(rig.tick(), None);
}

#[test]
fn diagnostic_mode_formats_switch_membership() {
    let mut rig = Rig::new();

    rig.press(0);
    rig.press(7);
    assert_eq!(rig.tick_diagnostic(), None);
    rig.release(0);
    rig.release(7);

    let bits = rig.tick_diagnostic().expect("expected a diagnostic chord");
    assert_eq!(&bits, b"10000001");

    // Same reset invariant as packed mode.
    assert_eq!(rig.tick_diagnostic(), None);
}

#[test]
fn emitted_chord_serializes_for_the_transport() {
    let mut rig = Rig::new();

    rig.press(0);
    rig.press(7);
    assert_eq!(rig.tick(), None);
    rig.release(0);
    rig.release(7);
    let mask = rig.tick().expect("expected a chord");

    let mut buf = [0u8; CHORD_REPORT_SIZE];
    let written = ChordReport::Encoded(mask).serialize(&mut buf);
    assert_eq!(written, CHORD_REPORT_SIZE);
    assert_eq!(buf, [0b1000_0001, 0, 0, 0, 0, 0, 0, 0]);
}
