//! Chord resolution core - press ledger, encoder, and report types.
//!
//! Everything in this module is pure logic over millisecond timestamps
//! supplied by the caller, so it runs unchanged on the host (tests) and
//! on target.

pub mod encoder;
pub mod ledger;
pub mod report;

pub use ledger::{PressLedger, Slot, SWITCH_COUNT};
pub use report::{ChordReport, CHORD_REPORT_DESCRIPTOR, CHORD_REPORT_SIZE};
