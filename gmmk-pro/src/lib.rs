//! # GMMK Pro user keymap
//!
//! Keymap, RGB color keys, idle timeout and RGB indicators for a 75% keyboard with a knob.
//!
//! The crate is driven from outside: the matrix scanner feeds [`event::KeyboardEvent`]s, the
//! lighting subsystem implements [`light::RgbMatrix`] and the HID side consumes
//! [`keyboard::KeyReport`]s. [`keyboard::Keyboard`] ties them together, [`hooks::UserHooks`]
//! holds the keymap-specific behavior.

#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod action;
pub mod color;
pub mod config;
pub mod event;
pub mod hooks;
pub mod idle;
pub mod indicator;
pub mod keyboard;
pub mod keycode;
pub mod keymap;
pub mod layout_macro;
pub mod light;
pub mod position;

pub use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex as RawMutex;
