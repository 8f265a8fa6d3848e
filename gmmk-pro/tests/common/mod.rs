#![allow(dead_code)]

use embassy_time::Instant;
use gmmk_pro::color::{Hsv, Rgb};
use gmmk_pro::config::IdleConfig;
use gmmk_pro::hooks::UserHooks;
use gmmk_pro::keycode::{HidKeyCode, LightKey};
use gmmk_pro::keymap::{COL, ROW};
use gmmk_pro::light::{Host, RgbMatrix};
use gmmk_pro::position::Key;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const MINUTE_MS: u64 = 60_000;

/// Number of animations of the test matrix
pub const NUM_TEST_MODES: u8 = 27;

pub fn at_ms(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// RGB matrix that records what the keymap asked for
#[derive(Debug)]
pub struct TestMatrix {
    pub hsv: Option<Hsv>,
    pub colors: [Option<Rgb>; ROW * COL],
    pub enabled: bool,
    pub suspended: bool,
    pub mode: u8,
    pub disable_calls: usize,
    pub light_keys: Vec<LightKey>,
}

impl TestMatrix {
    pub fn new() -> Self {
        Self {
            hsv: None,
            colors: [None; ROW * COL],
            enabled: true,
            suspended: false,
            mode: 1,
            disable_calls: 0,
            light_keys: Vec::new(),
        }
    }

    pub fn color(&self, key: Key) -> Option<Rgb> {
        self.colors[key.grid_index()]
    }

    /// Forget painted colors, as the animation does every frame
    pub fn clear_colors(&mut self) {
        self.colors = [None; ROW * COL];
    }
}

impl RgbMatrix for TestMatrix {
    fn sethsv(&mut self, hsv: Hsv) {
        self.hsv = Some(hsv);
    }

    fn set_color(&mut self, key: Key, color: Rgb) {
        self.colors[key.grid_index()] = Some(color);
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable_noeeprom(&mut self) {
        self.enabled = false;
        self.disable_calls += 1;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_suspend_state(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    fn mode(&self) -> u8 {
        self.mode
    }

    fn process_light_key(&mut self, key: LightKey) {
        self.light_keys.push(key);
        match key {
            LightKey::Toggle => self.enabled = !self.enabled,
            LightKey::ModeForward => self.mode = if self.mode >= NUM_TEST_MODES { 1 } else { self.mode + 1 },
            LightKey::ModeReverse => self.mode = if self.mode <= 1 { NUM_TEST_MODES } else { self.mode - 1 },
            LightKey::ModePlain => self.mode = 1,
            LightKey::ModeBreathe => self.mode = 2,
            LightKey::ModeRainbow => self.mode = 13,
            LightKey::SpeedUp | LightKey::SpeedDown | LightKey::ValueUp | LightKey::ValueDown => {}
        }
    }
}

/// Host that records tapped keys and bootloader requests
#[derive(Debug, Default)]
pub struct TestHost {
    pub taps: Vec<HidKeyCode>,
    pub bootloader_jumps: usize,
}

impl Host for TestHost {
    fn tap_code(&mut self, key: HidKeyCode) {
        self.taps.push(key);
    }

    fn jump_to_bootloader(&mut self) {
        self.bootloader_jumps += 1;
    }
}

/// Hooks with the default idle config, started at t = 0
pub fn create_hooks() -> UserHooks<TestMatrix> {
    let mut hooks = UserHooks::new(TestMatrix::new(), IdleConfig::default());
    hooks.keyboard_post_init(at_ms(0));
    hooks
}

/// Run the periodic scan once per second from `from_ms` (exclusive) to `to_ms` (inclusive)
pub fn scan_until(hooks: &mut UserHooks<TestMatrix>, from_ms: u64, to_ms: u64) {
    let mut t = from_ms + 1000;
    while t <= to_ms {
        hooks.matrix_scan(at_ms(t));
        t += 1000;
    }
}
