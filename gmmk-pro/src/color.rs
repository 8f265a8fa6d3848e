//! Colors in the two spaces the lighting system accepts.
//!
//! Base colors are set in HSV, per-key indicator colors in RGB. The named values
//! match the color table QMK ships, so the board looks the same as with stock firmware.

/// HSV color, every channel in `0..=255`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const WHITE: Self = Self::new(0, 0, 255);
    pub const GOLD: Self = Self::new(36, 255, 255);
    pub const SPRING_GREEN: Self = Self::new(106, 255, 255);
    pub const TEAL: Self = Self::new(128, 255, 128);
    pub const CYAN: Self = Self::new(128, 255, 255);
    pub const PURPLE: Self = Self::new(191, 255, 255);
    pub const MAGENTA: Self = Self::new(213, 255, 255);
    pub const PINK: Self = Self::new(234, 128, 255);
    pub const RED: Self = Self::new(0, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// RGB color
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const GOLD: Self = Self::new(0xFF, 0xD9, 0x00);
    pub const SPRING_GREEN: Self = Self::new(0x00, 0xFF, 0x80);
    pub const TEAL: Self = Self::new(0x00, 0x80, 0x80);
    pub const CYAN: Self = Self::new(0x00, 0xFF, 0xFF);
    pub const PURPLE: Self = Self::new(0x7A, 0x00, 0xFF);
    pub const MAGENTA: Self = Self::new(0xFF, 0x00, 0xFF);
    pub const PINK: Self = Self::new(0xFF, 0x80, 0xBF);
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
