//! Embedded entry point - RP2040 chord keyboard firmware.
//!
//! One polling task owns the switch bank and the press ledger; the USB
//! device stack and the HID writer run as separate Embassy tasks and
//! receive resolved chords over a channel.  No other task ever touches
//! the ledger, so no locking is needed anywhere in the core.

#![no_std]
#![no_main]

mod chord;
mod config;
mod switches;
mod usb;

use chord::{encoder, ChordReport, PressLedger};
use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Instant, Timer};
use embassy_usb::class::hid::HidWriter;
use embassy_usb::UsbDevice;
use switches::SwitchBank;
use usb::hid_device::{self, UsbHidDevice, REPORT_CHANNEL_DEPTH};
use {defmt_rtt as _, panic_probe as _};

/// Resolved chords on their way from the polling driver to USB.
static REPORT_CHANNEL: Channel<CriticalSectionRawMutex, ChordReport, REPORT_CHANNEL_DEPTH> =
    Channel::new();

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, Driver<'static, USB>>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_task(writer: HidWriter<'static, Driver<'static, USB>, 8>) -> ! {
    hid_device::hid_writer_task(writer, REPORT_CHANNEL.receiver()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    info!("chordpad starting");

    // Switch inputs in logical (bit) order, internal pull-down,
    // active-high.  See config.rs for the wiring table.
    let bank = SwitchBank::new([
        Input::new(p.PIN_22, Pull::Down),
        Input::new(p.PIN_28, Pull::Down),
        Input::new(p.PIN_27, Pull::Down),
        Input::new(p.PIN_26, Pull::Down),
        Input::new(p.PIN_9, Pull::Down),
        Input::new(p.PIN_8, Pull::Down),
        Input::new(p.PIN_7, Pull::Down),
        Input::new(p.PIN_6, Pull::Down),
    ]);

    let UsbHidDevice {
        device,
        chord_writer,
    } = hid_device::init(p.USB);

    unwrap!(spawner.spawn(usb_task(device)));
    unwrap!(spawner.spawn(hid_task(chord_writer)));

    poll_loop(bank, REPORT_CHANNEL.sender()).await
}

/// Fixed-period polling driver.
///
/// Samples all switches every tick.  While any switch is held the chord
/// is still in progress and nothing is resolved; on the first
/// all-released tick the accumulated ledger decides the chord, and a
/// non-empty result is handed to the transport before the ledger resets
/// for the next one.  An empty result leaves the ledger alone - expired
/// slots can never re-enter a future mask.
async fn poll_loop(
    mut bank: SwitchBank<Input<'static>>,
    report_tx: Sender<'static, CriticalSectionRawMutex, ChordReport, REPORT_CHANNEL_DEPTH>,
) -> ! {
    let mut ledger = PressLedger::new();

    loop {
        Timer::after(Duration::from_millis(config::POLL_PERIOD_MS)).await;

        let now_ms = Instant::now().as_millis();
        let active = bank.sample(&mut ledger, now_ms);
        if active != 0 {
            continue;
        }

        let report = if config::DIAGNOSTIC_MODE {
            match encoder::resolve_diagnostic(&ledger, now_ms, config::CHORD_WINDOW_MS) {
                Some(bits) => ChordReport::Diagnostic(bits),
                None => continue,
            }
        } else {
            match encoder::resolve(&ledger, now_ms, config::CHORD_WINDOW_MS) {
                0 => continue,
                mask => ChordReport::Encoded(mask),
            }
        };

        info!("chord resolved: {}", report);

        // Fire-and-forget: a full channel means USB is not draining,
        // the chord is dropped rather than stalling the sampler.
        if report_tx.try_send(report).is_err() {
            warn!("report channel full - chord dropped");
        }
        ledger.reset();
    }
}
