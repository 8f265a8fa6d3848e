//! Keycodes used by the keymap.
//!
//! [`KeyCode`] is either a plain HID keycode, an RGB matrix control key handled by the
//! lighting subsystem, one of the ten color keys handled by this crate, or the bootloader key.

use strum::{EnumCount, EnumIter, FromRepr};

use crate::color::{Hsv, Rgb};

/// Key codes defined in the HID keyboard/keypad page, plus the media keys in the
/// range QMK reserves for them.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x00,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    /// `1` and `!`
    Kc1 = 0x1E,
    /// `2` and `@`
    Kc2 = 0x1F,
    /// `3` and `#`
    Kc3 = 0x20,
    /// `4` and `$`
    Kc4 = 0x21,
    /// `5` and `%`
    Kc5 = 0x22,
    /// `6` and `^`
    Kc6 = 0x23,
    /// `7` and `&`
    Kc7 = 0x24,
    /// `8` and `*`
    Kc8 = 0x25,
    /// `9` and `(`
    Kc9 = 0x26,
    /// `0` and `)`
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// `-` and `_`
    Minus = 0x2D,
    /// `=` and `+`
    Equal = 0x2E,
    /// `[` and `{`
    LeftBracket = 0x2F,
    /// `]` and `}`
    RightBracket = 0x30,
    /// `\` and `|`
    Backslash = 0x31,
    /// `;` and `:`
    Semicolon = 0x33,
    /// `'` and `"`
    Quote = 0x34,
    /// `` ` `` and `~`
    Grave = 0x35,
    /// `,` and `<`
    Comma = 0x36,
    /// `.` and `>`
    Dot = 0x37,
    /// `/` and `?`
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    NumLock = 0x53,
    Application = 0x65,
    /// Mute, reported on the consumer page
    AudioMute = 0xA8,
    /// Volume up, reported on the consumer page
    AudioVolUp = 0xA9,
    /// Volume down, reported on the consumer page
    AudioVolDown = 0xAA,
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    RAlt = 0xE6,
    RGui = 0xE7,
}

/// RGB matrix control keys. They never reach the host, [`crate::light::RgbMatrix::process_light_key`]
/// applies them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightKey {
    /// Toggle the matrix on/off
    Toggle,
    /// Next animation
    ModeForward,
    /// Previous animation
    ModeReverse,
    /// Increase animation speed
    SpeedUp,
    /// Decrease animation speed
    SpeedDown,
    /// Increase brightness
    ValueUp,
    /// Decrease brightness
    ValueDown,
    /// Jump to the solid color animation
    ModePlain,
    /// Jump to the breathing animation
    ModeBreathe,
    /// Jump to the rainbow animation
    ModeRainbow,
}

/// The ten "set base color" keys, bound to the number row of the function layer.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, EnumCount, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorKey {
    Rgb1 = 0,
    Rgb2 = 1,
    Rgb3 = 2,
    Rgb4 = 3,
    Rgb5 = 4,
    Rgb6 = 5,
    Rgb7 = 6,
    Rgb8 = 7,
    Rgb9 = 8,
    Rgb0 = 9,
}

impl ColorKey {
    /// Base color applied to the lighting system when the key is pressed
    pub const fn hsv(self) -> Hsv {
        match self {
            ColorKey::Rgb1 => Hsv::WHITE,
            ColorKey::Rgb2 => Hsv::GOLD,
            ColorKey::Rgb3 => Hsv::SPRING_GREEN,
            ColorKey::Rgb4 => Hsv::TEAL,
            ColorKey::Rgb5 => Hsv::CYAN,
            ColorKey::Rgb6 => Hsv::PURPLE,
            ColorKey::Rgb7 => Hsv::MAGENTA,
            ColorKey::Rgb8 => Hsv::PINK,
            ColorKey::Rgb9 => Hsv::RED,
            ColorKey::Rgb0 => Hsv::BLACK,
        }
    }

    /// Indicator color painted on the key itself
    pub const fn rgb(self) -> Rgb {
        match self {
            ColorKey::Rgb1 => Rgb::WHITE,
            ColorKey::Rgb2 => Rgb::GOLD,
            ColorKey::Rgb3 => Rgb::SPRING_GREEN,
            ColorKey::Rgb4 => Rgb::TEAL,
            ColorKey::Rgb5 => Rgb::CYAN,
            ColorKey::Rgb6 => Rgb::PURPLE,
            ColorKey::Rgb7 => Rgb::MAGENTA,
            ColorKey::Rgb8 => Rgb::PINK,
            ColorKey::Rgb9 => Rgb::RED,
            ColorKey::Rgb0 => Rgb::BLACK,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Light(LightKey),
    Color(ColorKey),
    /// Reboot into the bootloader
    Bootloader,
}
