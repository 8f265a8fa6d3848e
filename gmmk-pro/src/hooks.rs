//! User hooks called by the keyboard at fixed points: key events, the periodic scan, indicator
//! refresh, suspend/wake, encoder rotation and after initialization.

use embassy_time::Instant;

use crate::action::{Action, EncoderAction, KeyAction};
use crate::config::IdleConfig;
use crate::event::Direction;
use crate::idle::{IdleState, IdleTimeout};
use crate::indicator::indicator_colors;
use crate::k;
use crate::keycode::KeyCode;
use crate::keymap::FN_LAYER;
use crate::light::{Host, RgbMatrix};

/// State owned by the keymap: the RGB matrix handle and the idle timeout.
pub struct UserHooks<L: RgbMatrix> {
    light: L,
    idle: IdleTimeout,
    encoder: EncoderAction,
}

impl<L: RgbMatrix> UserHooks<L> {
    pub fn new(light: L, idle_config: IdleConfig) -> Self {
        Self {
            light,
            idle: IdleTimeout::new(idle_config, Instant::from_ticks(0)),
            encoder: EncoderAction::new(k!(AudioVolUp), k!(AudioVolDown)),
        }
    }

    pub fn light(&self) -> &L {
        &self.light
    }

    pub fn light_mut(&mut self) -> &mut L {
        &mut self.light
    }

    pub fn idle(&self) -> &IdleTimeout {
        &self.idle
    }

    /// Called once after the keyboard is initialized, starts the idle timer.
    pub fn keyboard_post_init(&mut self, now: Instant) {
        self.idle.reset(now);
        debug!("Idle timer started, threshold {} minutes", self.idle.threshold());
    }

    /// Handle a key event before the default processing.
    ///
    /// Color keys set the base color when pressed on the function layer. Every other key press
    /// turns the matrix back on and restarts the idle timer. Color keys leave the idle timer
    /// untouched. Always returns `true`, the default processing continues.
    pub fn process_record(&mut self, action: Action, pressed: bool, layer: u8, now: Instant) -> bool {
        match action {
            Action::Key(KeyCode::Color(color)) => {
                if pressed && layer == FN_LAYER {
                    debug!("Set base color {:?}", color);
                    self.light.sethsv(color.hsv());
                }
            }
            _ => {
                if pressed {
                    self.light.enable();
                    self.idle.reset(now);
                }
            }
        }
        true
    }

    /// Periodic scan: advance the idle timer and turn off the matrix once it times out.
    pub fn matrix_scan(&mut self, now: Instant) {
        if self.idle.tick(now) == IdleState::TimedOut && self.light.is_enabled() {
            info!("Turning off the RGB matrix");
            self.light.disable_noeeprom();
        }
    }

    /// Paint indicator colors over the running animation
    pub fn indicators_advanced(&mut self, layer: u8) {
        let colors = indicator_colors(layer, self.light.mode());
        for (key, color) in colors.iter() {
            self.light.set_color(*key, *color);
        }
    }

    /// The host went to sleep
    pub fn suspend_power_down(&mut self) {
        self.light.set_suspend_state(true);
    }

    /// The host woke up
    pub fn suspend_wakeup_init(&mut self) {
        self.light.set_suspend_state(false);
    }

    /// Tap the key bound to the rotation direction. Always returns `true`, the rotation is
    /// handled here.
    pub fn encoder_update<H: Host>(&mut self, index: u8, direction: Direction, host: &mut H) -> bool {
        let encoder = self.encoder;
        self.encoder_update_with(encoder, index, direction, host)
    }

    /// Same as [`UserHooks::encoder_update`], with the actions looked up in a keymap
    pub fn encoder_update_with<H: Host>(
        &mut self,
        encoder: EncoderAction,
        index: u8,
        direction: Direction,
        host: &mut H,
    ) -> bool {
        let action = match direction {
            Direction::Clockwise => encoder.clockwise(),
            Direction::CounterClockwise => encoder.counter_clockwise(),
        };
        debug!("Encoder {} turned {:?}", index, direction);
        match action {
            KeyAction::Single(Action::Key(KeyCode::Hid(key))) => host.tap_code(key),
            KeyAction::Single(Action::Key(KeyCode::Light(key))) => self.light.process_light_key(key),
            _ => {}
        }
        true
    }

    /// Raise or lower the idle timeout by one minute
    pub fn adjust_idle_threshold(&mut self, increase: bool) {
        self.idle.adjust_threshold(increase);
    }

    /// Set the idle timeout in minutes, 0 disables it
    pub fn set_idle_threshold(&mut self, minutes: u16) {
        self.idle.set_threshold(minutes);
    }
}
