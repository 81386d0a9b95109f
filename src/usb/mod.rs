//! USB Device subsystem - presents the chord HID device to the host.
//!
//! The RP2040's built-in USB Full-Speed controller is driven by
//! `embassy-usb`.  A single vendor-defined HID interface carries the
//! fixed 8-byte chord reports.
//!
//! The HID writer task reads resolved chords from the polling driver's
//! channel and writes them to the endpoint.

pub mod hid_device;
