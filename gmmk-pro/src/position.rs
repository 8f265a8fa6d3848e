//! Physical key positions of the board.
//!
//! The keymap is a `ROW x COL` grid following the printed layout row by row. Some grid cells
//! have no switch behind them (the gap left of `Z`, the space bar row), every [`Key`] maps to a
//! distinct cell.

use strum::{EnumCount, EnumIter};

use crate::keymap::{COL, ROW};

/// A physical key on the board, named after its legend on the base layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, EnumCount)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    // Row 0
    Escape,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    PrintScreen,
    /// Push switch of the rotary encoder
    Knob,
    // Row 1
    Grave,
    Kc1,
    Kc2,
    Kc3,
    Kc4,
    Kc5,
    Kc6,
    Kc7,
    Kc8,
    Kc9,
    Kc0,
    Minus,
    Equal,
    Backspace,
    Delete,
    // Row 2
    Tab,
    Q,
    W,
    E,
    R,
    T,
    Y,
    U,
    I,
    O,
    P,
    LeftBracket,
    RightBracket,
    Backslash,
    PageUp,
    // Row 3
    CapsLock,
    A,
    S,
    D,
    F,
    G,
    H,
    J,
    K,
    L,
    Semicolon,
    Quote,
    Enter,
    PageDown,
    // Row 4
    LShift,
    Z,
    X,
    C,
    V,
    B,
    N,
    M,
    Comma,
    Dot,
    Slash,
    RShift,
    Up,
    End,
    // Row 5
    LCtrl,
    LGui,
    LAlt,
    Space,
    RAlt,
    Fn,
    RCtrl,
    Left,
    Down,
    Right,
}

impl Key {
    /// Number row keys `1..0`, left to right
    pub const NUMBER_ROW: [Key; 10] = [
        Key::Kc1,
        Key::Kc2,
        Key::Kc3,
        Key::Kc4,
        Key::Kc5,
        Key::Kc6,
        Key::Kc7,
        Key::Kc8,
        Key::Kc9,
        Key::Kc0,
    ];

    /// Function row keys `F1..F12`, left to right
    pub const FUNCTION_ROW: [Key; 12] = [
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
    ];

    /// `(row, col)` of the key in the keymap grid
    pub const fn position(self) -> (u8, u8) {
        match self {
            Key::Escape => (0, 0),
            Key::F1 => (0, 1),
            Key::F2 => (0, 2),
            Key::F3 => (0, 3),
            Key::F4 => (0, 4),
            Key::F5 => (0, 5),
            Key::F6 => (0, 6),
            Key::F7 => (0, 7),
            Key::F8 => (0, 8),
            Key::F9 => (0, 9),
            Key::F10 => (0, 10),
            Key::F11 => (0, 11),
            Key::F12 => (0, 12),
            Key::PrintScreen => (0, 13),
            Key::Knob => (0, 14),

            Key::Grave => (1, 0),
            Key::Kc1 => (1, 1),
            Key::Kc2 => (1, 2),
            Key::Kc3 => (1, 3),
            Key::Kc4 => (1, 4),
            Key::Kc5 => (1, 5),
            Key::Kc6 => (1, 6),
            Key::Kc7 => (1, 7),
            Key::Kc8 => (1, 8),
            Key::Kc9 => (1, 9),
            Key::Kc0 => (1, 10),
            Key::Minus => (1, 11),
            Key::Equal => (1, 12),
            Key::Backspace => (1, 13),
            Key::Delete => (1, 14),

            Key::Tab => (2, 0),
            Key::Q => (2, 1),
            Key::W => (2, 2),
            Key::E => (2, 3),
            Key::R => (2, 4),
            Key::T => (2, 5),
            Key::Y => (2, 6),
            Key::U => (2, 7),
            Key::I => (2, 8),
            Key::O => (2, 9),
            Key::P => (2, 10),
            Key::LeftBracket => (2, 11),
            Key::RightBracket => (2, 12),
            Key::Backslash => (2, 13),
            Key::PageUp => (2, 14),

            Key::CapsLock => (3, 0),
            Key::A => (3, 1),
            Key::S => (3, 2),
            Key::D => (3, 3),
            Key::F => (3, 4),
            Key::G => (3, 5),
            Key::H => (3, 6),
            Key::J => (3, 7),
            Key::K => (3, 8),
            Key::L => (3, 9),
            Key::Semicolon => (3, 10),
            Key::Quote => (3, 11),
            Key::Enter => (3, 13),
            Key::PageDown => (3, 14),

            Key::LShift => (4, 0),
            Key::Z => (4, 2),
            Key::X => (4, 3),
            Key::C => (4, 4),
            Key::V => (4, 5),
            Key::B => (4, 6),
            Key::N => (4, 7),
            Key::M => (4, 8),
            Key::Comma => (4, 9),
            Key::Dot => (4, 10),
            Key::Slash => (4, 11),
            Key::RShift => (4, 12),
            Key::Up => (4, 13),
            Key::End => (4, 14),

            Key::LCtrl => (5, 0),
            Key::LGui => (5, 1),
            Key::LAlt => (5, 2),
            Key::Space => (5, 6),
            Key::RAlt => (5, 9),
            Key::Fn => (5, 10),
            Key::RCtrl => (5, 11),
            Key::Left => (5, 12),
            Key::Down => (5, 13),
            Key::Right => (5, 14),
        }
    }

    pub const fn row(self) -> usize {
        self.position().0 as usize
    }

    pub const fn col(self) -> usize {
        self.position().1 as usize
    }

    /// Index of the key's LED when LEDs are numbered row by row over the grid
    pub const fn grid_index(self) -> usize {
        self.row() * COL + self.col()
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_positions_in_grid_and_unique() {
        let mut seen = [[false; COL]; ROW];
        for key in Key::iter() {
            let (row, col) = (key.row(), key.col());
            assert!(row < ROW && col < COL, "{:?} is outside of the grid", key);
            assert!(!seen[row][col], "{:?} shares its cell with another key", key);
            seen[row][col] = true;
        }
        assert_eq!(seen.iter().flatten().filter(|s| **s).count(), Key::COUNT);
    }

    #[test]
    fn test_named_rows() {
        assert!(Key::NUMBER_ROW.iter().all(|k| k.row() == 1));
        assert!(Key::FUNCTION_ROW.iter().all(|k| k.row() == 0));
        assert_eq!(Key::NUMBER_ROW.map(|k| k.col()), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(Key::F12.grid_index(), 12);
        assert_eq!(Key::Right.grid_index(), 5 * COL + 14);
    }
}
