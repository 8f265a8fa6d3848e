//! Keyboard actions.
//!
//! - [`Action`] - Single operations that the keyboard executes
//! - [`KeyAction`] - What a key position in the keymap does
//! - [`EncoderAction`] - Rotary encoder actions

use crate::keycode::KeyCode;

/// EncoderAction is the action of a rotary encoder, one for each rotation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self {
            clockwise: KeyAction::No,
            counter_clockwise: KeyAction::No,
        }
    }
}

impl EncoderAction {
    /// Create a new encoder action.
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
        }
    }

    /// Get the clockwise action.
    pub fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the inner `Action`, `Action::No` for `No` and `Transparent`.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            _ => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A key stroke, covers HID keys, RGB control keys, color keys and the bootloader key.
    Key(KeyCode),
    /// Activate a layer while the key is held
    LayerOn(u8),
}
