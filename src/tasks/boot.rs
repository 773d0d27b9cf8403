//! Out-of-band firmware-update trigger.

use defmt::info;
use embassy_rp::gpio::Input;

/// Waits for the boot button edge, then reboots into the USB bootloader.
///
/// No debouncing and no shared state with the pipeline; once the edge fires
/// the device resets, so nothing here ever runs again.
#[embassy_executor::task]
pub async fn usb_boot_button(mut button: Input<'static>) {
    button.wait_for_falling_edge().await;
    info!("Boot button pressed, resetting to USB bootloader");
    embassy_rp::rom_data::reset_to_usb_boot(0, 0);
}
