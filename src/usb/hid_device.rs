//! USB HID chord device.
//!
//! Initialises the Embassy USB stack on the RP2040 hardware USB
//! peripheral and exposes one HID IN endpoint carrying 8-byte chord
//! reports.

use crate::chord::{ChordReport, CHORD_REPORT_DESCRIPTOR, CHORD_REPORT_SIZE};
use crate::config;
use defmt::{info, warn};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_rp::{bind_interrupts, Peri};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Receiver;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

static HID_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();

/// Capacity of the driver→writer report channel.
pub const REPORT_CHANNEL_DEPTH: usize = 16;

/// Build result containing the USB device runner and the HID writer.
pub struct UsbHidDevice {
    pub device: UsbDevice<'static, Driver<'static, USB>>,
    pub chord_writer: HidWriter<'static, Driver<'static, USB>, 8>,
}

/// Initialise the USB stack and create the chord HID device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usb: Peri<'static, USB>) -> UsbHidDevice {
    // Create the low-level USB driver.
    let driver = Driver::new(usb, Irqs);

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    // Build the USB device.
    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    let hid_state = HID_STATE.init(State::new());
    let hid_config = HidConfig {
        report_descriptor: CHORD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let chord_writer = HidWriter::new(&mut builder, hid_state, hid_config);

    let device = builder.build();

    info!("USB HID chord device initialised");

    UsbHidDevice {
        device,
        chord_writer,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
/// It runs forever (or until the USB cable is disconnected).
pub async fn run_usb_device(mut device: UsbDevice<'static, Driver<'static, USB>>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Chord forwarding task - drains the report channel and writes each
/// report to the HID endpoint.
///
/// Writes are fire-and-forget: a failed write is logged and dropped, the
/// next chord is a fresh opportunity to emit.
pub async fn hid_writer_task(
    mut writer: HidWriter<'static, Driver<'static, USB>, 8>,
    report_rx: Receiver<'static, CriticalSectionRawMutex, ChordReport, REPORT_CHANNEL_DEPTH>,
) -> ! {
    info!("HID writer task started - waiting for chords");

    let mut buf = [0u8; CHORD_REPORT_SIZE];

    loop {
        let report = report_rx.receive().await;

        let n = report.serialize(&mut buf);
        if let Err(_e) = writer.write(&buf[..n]).await {
            warn!("USB chord write failed");
        }
    }
}
