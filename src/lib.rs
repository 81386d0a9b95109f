//! Host-testable library interface for chordpad.
//!
//! This crate root exposes the pure chord-resolution modules so they can
//! be tested on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The firmware binary uses main.rs with #![no_std] and #![no_main]
//! and declares its own module tree.  This lib.rs provides a separate
//! entry point for host-based testing; only the USB transport module is
//! embedded-only.

#![cfg_attr(not(test), no_std)]

pub mod chord;
pub mod config;
pub mod switches;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
