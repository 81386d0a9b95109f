//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and USB identity
//! constants live here so they can be tuned in one place.

// Polling & chord resolution

/// Switch sampling period (ms). Every tick reads all eight switches once.
pub const POLL_PERIOD_MS: u64 = 10;

/// Chord aggregation window (ms).
///
/// When all switches are released, any switch whose last observed press
/// is within this trailing window still counts toward the chord.  This is
/// what lets physically-staggered finger releases register as one chord.
pub const CHORD_WINDOW_MS: u64 = 50;

/// Emit the chord as eight ASCII `'0'`/`'1'` bytes instead of the packed
/// byte.  Useful for eyeballing switch membership on the host.
pub const DIAGNOSTIC_MODE: bool = false;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "chordpad";
pub const USB_PRODUCT: &str = "Chordpad 8-switch chording keyboard";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID endpoint polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 10;

// GPIO pin assignments (RP2040)
//
// Logical switch order is the bit order of the emitted mask: switch 0 is
// the most significant bit.  Actual `embassy_rp::peripherals::PIN_*`
// handles are claimed in `main.rs`.  Adjust for your wiring.
//
//   Switch 0 → GPIO22
//   Switch 1 → GPIO28
//   Switch 2 → GPIO27
//   Switch 3 → GPIO26
//   Switch 4 → GPIO9
//   Switch 5 → GPIO8
//   Switch 6 → GPIO7
//   Switch 7 → GPIO6
//
// All switches are wired active-high with internal pull-downs.
