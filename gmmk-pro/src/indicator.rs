//! Per-key indicator colors of the function layer.
//!
//! While the function layer is the highest active layer, the number row shows the colors of the
//! color keys, the function row shows which animation is running and the arrows show their
//! function-layer role. On other layers nothing is painted over the running animation.

use heapless::Vec;
use strum::IntoEnumIterator;

use crate::color::Rgb;
use crate::keycode::ColorKey;
use crate::keymap::FN_LAYER;
use crate::position::Key;

/// Number of animation modes with an indicator
pub const NUM_MODE_INDICATORS: usize = 27;

/// Upper bound of painted keys: number row, function row, escape and arrows
pub const MAX_INDICATORS: usize = 10 + 12 + 1 + 4;

/// How a running animation is shown on the function row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeIndicator {
    pub mode: u8,
    /// Function key lit white
    pub highlight: Key,
    /// Color of escape, marks which group of twelve the mode belongs to
    pub escape: Rgb,
}

/// Modes 1..=12 light F1..F12, 13..=24 again F1..F12 with a red escape, 25..=27 F1..F3 with a
/// gold escape.
pub const MODE_INDICATORS: [ModeIndicator; NUM_MODE_INDICATORS] = build_mode_indicators();

const fn build_mode_indicators() -> [ModeIndicator; NUM_MODE_INDICATORS] {
    let mut table = [ModeIndicator {
        mode: 0,
        highlight: Key::F1,
        escape: Rgb::WHITE,
    }; NUM_MODE_INDICATORS];
    let mut i = 0;
    while i < NUM_MODE_INDICATORS {
        let escape = match i / Key::FUNCTION_ROW.len() {
            0 => Rgb::WHITE,
            1 => Rgb::RED,
            _ => Rgb::GOLD,
        };
        table[i] = ModeIndicator {
            mode: i as u8 + 1,
            highlight: Key::FUNCTION_ROW[i % Key::FUNCTION_ROW.len()],
            escape,
        };
        i += 1;
    }
    table
}

/// Find the indicator of an animation mode, `None` for modes without one
pub fn mode_indicator(mode: u8) -> Option<&'static ModeIndicator> {
    MODE_INDICATORS.iter().find(|m| m.mode == mode)
}

/// A set of key colors, each key at most once
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndicatorColors {
    colors: Vec<(Key, Rgb), MAX_INDICATORS>,
}

impl IndicatorColors {
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Assign a color, replacing an earlier assignment of the same key
    pub fn set(&mut self, key: Key, color: Rgb) {
        if let Some(entry) = self.colors.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = color;
        } else if self.colors.push((key, color)).is_err() {
            error!("Indicator set is full, dropping {:?}", key);
        }
    }

    pub fn get(&self, key: Key) -> Option<Rgb> {
        self.colors.iter().find(|(k, _)| *k == key).map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Key, Rgb)> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Compute the indicator colors for the highest active layer and the running animation.
pub fn indicator_colors(layer: u8, mode: u8) -> IndicatorColors {
    let mut colors = IndicatorColors::new();
    if layer != FN_LAYER {
        return colors;
    }

    for (key, color) in Key::NUMBER_ROW.iter().zip(ColorKey::iter()) {
        colors.set(*key, color.rgb());
    }

    paint_current_animation(&mut colors, mode);

    // Shuffle animation reverse/forward
    colors.set(Key::Left, Rgb::RED);
    colors.set(Key::Right, Rgb::RED);
    // Brightness up/down
    colors.set(Key::Up, Rgb::WHITE);
    colors.set(Key::Down, Rgb::WHITE);

    colors
}

fn paint_current_animation(colors: &mut IndicatorColors, mode: u8) {
    for key in Key::FUNCTION_ROW {
        colors.set(key, Rgb::BLACK);
    }
    colors.set(Key::Escape, Rgb::WHITE);

    if let Some(indicator) = mode_indicator(mode) {
        colors.set(Key::Escape, indicator.escape);
        colors.set(indicator.highlight, Rgb::WHITE);
    }
}
