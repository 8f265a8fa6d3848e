//! Interfaces of the RGB matrix lighting subsystem and the host keyboard framework.
//!
//! The animation engine, the LED driver and settings persistence live behind these traits.

use crate::color::{Hsv, Rgb};
use crate::keycode::{HidKeyCode, LightKey};
use crate::position::Key;

/// The RGB matrix as seen from the keymap.
pub trait RgbMatrix {
    /// Set the base color used by the running animation
    fn sethsv(&mut self, hsv: Hsv);

    /// Override the color of a single key until the next indicator refresh
    fn set_color(&mut self, key: Key, color: Rgb);

    /// Turn on the matrix output
    fn enable(&mut self);

    /// Turn off the matrix output without writing the setting to storage
    fn disable_noeeprom(&mut self);

    /// Whether the matrix output is on
    fn is_enabled(&self) -> bool;

    /// Suspend state follows the host's power state
    fn set_suspend_state(&mut self, suspended: bool);

    /// Identifier of the running animation
    fn mode(&self) -> u8;

    /// Apply an RGB control key: toggle, animation, speed or brightness
    fn process_light_key(&mut self, key: LightKey);
}

/// Services of the host framework the keymap calls into.
pub trait Host {
    /// Press and release a key
    fn tap_code(&mut self, key: HidKeyCode);

    /// Reboot into the bootloader
    fn jump_to_bootloader(&mut self);
}
