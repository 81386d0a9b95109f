//! Chord report handed to the USB HID transport.
//!
//! The endpoint carries a fixed 8-byte vendor-defined input report:
//! byte 0 holds the packed chord mask (bytes 1-7 zero), or - in
//! diagnostic mode - all eight bytes hold the ASCII `'0'`/`'1'`
//! sequence in switch order.

use super::ledger::SWITCH_COUNT;

/// Report size in bytes.
pub const CHORD_REPORT_SIZE: usize = 8;

/// A resolved chord on its way to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChordReport {
    /// Packed mask - bit (7 - i) set when switch i was in the chord.
    Encoded(u8),
    /// Human-readable variant: one ASCII `'0'`/`'1'` per switch.
    Diagnostic([u8; SWITCH_COUNT]),
}

impl ChordReport {
    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 8), or 0 when the
    /// buffer is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < CHORD_REPORT_SIZE {
            return 0;
        }
        match self {
            ChordReport::Encoded(mask) => {
                buf[0] = *mask;
                buf[1..CHORD_REPORT_SIZE].fill(0);
            }
            ChordReport::Diagnostic(bits) => {
                buf[..CHORD_REPORT_SIZE].copy_from_slice(bits);
            }
        }
        CHORD_REPORT_SIZE
    }
}

// USB HID report descriptor for the chord endpoint

/// USB HID Report Descriptor for the chord endpoint.
///
/// A single vendor-defined application collection with one 8-byte input
/// report; the host reads the chord payload verbatim.
pub const CHORD_REPORT_DESCRIPTOR: &[u8] = &[
    0x06, 0x00, 0xFF, // Usage Page (Vendor Defined 0xFF00)
    0x09, 0x01, // Usage (Vendor Usage 1)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Chord payload (8 bytes) -
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, // Logical Maximum (255)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x08, //   Report Count (8)
    0x09, 0x01, //   Usage (Vendor Usage 1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];
