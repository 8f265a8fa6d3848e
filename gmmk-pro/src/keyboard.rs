use embassy_futures::select::{Either3, select3};
use embassy_time::{Instant, Ticker};

use crate::action::{Action, KeyAction};
use crate::config::{ChannelConfig, KeyboardConfig, ScanConfig};
use crate::event::{KeyboardEvent, RotaryEncoderEvent};
use crate::hooks::UserHooks;
use crate::keycode::{HidKeyCode, KeyCode};
use crate::keymap::KeyMap;
use crate::light::{Host, RgbMatrix};

/// A HID key state change sent to the host side of the firmware
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyReport {
    pub key: HidKeyCode,
    pub pressed: bool,
}

/// The keyboard: resolves key events through the keymap, runs the user hooks and emits reports.
///
/// HID keys go to the report channel, RGB control keys to the [`RgbMatrix`], knob taps and the
/// bootloader key to the [`Host`].
pub struct Keyboard<
    'a,
    L: RgbMatrix,
    H: Host,
    const ROW: usize,
    const COL: usize,
    const NUM_LAYER: usize,
    const NUM_ENCODER: usize = 0,
    const KEY_EVENT_CHANNEL_SIZE: usize = 16,
    const REPORT_CHANNEL_SIZE: usize = 16,
> {
    pub(crate) keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>,
    pub(crate) hooks: UserHooks<L>,
    host: H,
    channels: &'a ChannelConfig<KEY_EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE>,
    scan_config: ScanConfig,
}

impl<
    'a,
    L: RgbMatrix,
    H: Host,
    const ROW: usize,
    const COL: usize,
    const NUM_LAYER: usize,
    const NUM_ENCODER: usize,
    const KEY_EVENT_CHANNEL_SIZE: usize,
    const REPORT_CHANNEL_SIZE: usize,
> Keyboard<'a, L, H, ROW, COL, NUM_LAYER, NUM_ENCODER, KEY_EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE>
{
    pub fn new(
        keymap: KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER>,
        light: L,
        host: H,
        channels: &'a ChannelConfig<KEY_EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE>,
        config: KeyboardConfig,
    ) -> Self {
        Self {
            keymap,
            hooks: UserHooks::new(light, config.idle_config),
            host,
            channels,
            scan_config: config.scan_config,
        }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER, NUM_ENCODER> {
        &self.keymap
    }

    pub fn hooks(&self) -> &UserHooks<L> {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut UserHooks<L> {
        &mut self.hooks
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Main keyboard task: processes key and encoder events, runs the periodic scan.
    pub async fn run(&mut self) -> ! {
        self.hooks.keyboard_post_init(Instant::now());
        let channels = self.channels;
        // Fixed period, so that a stream of events doesn't postpone the scan
        let mut ticker = Ticker::every(self.scan_config.scan_interval);
        loop {
            match select3(
                channels.key_event_channel.receive(),
                channels.encoder_event_channel.receive(),
                ticker.next(),
            )
            .await
            {
                Either3::First(event) => self.process_key_event(event, Instant::now()),
                Either3::Second(event) => self.process_encoder_event(event),
                Either3::Third(_) => self.scan(Instant::now()),
            }
        }
    }

    /// Process a key state change from the matrix
    pub fn process_key_event(&mut self, event: KeyboardEvent, now: Instant) {
        let action = match self.keymap.get_action_with_layer_cache(event) {
            KeyAction::Single(action) => action,
            KeyAction::No | KeyAction::Transparent => {
                debug!("No action at ({}, {})", event.row, event.col);
                return;
            }
        };

        let layer = self.keymap.get_activated_layer();
        if !self.hooks.process_record(action, event.pressed, layer, now) {
            return;
        }

        match action {
            Action::LayerOn(layer_num) => {
                if event.pressed {
                    self.keymap.activate_layer(layer_num);
                } else {
                    self.keymap.deactivate_layer(layer_num);
                }
            }
            Action::Key(KeyCode::Hid(key)) => self.send_report(key, event.pressed),
            Action::Key(KeyCode::Light(key)) => {
                if event.pressed {
                    debug!("RGB control key {:?}", key);
                    self.hooks.light_mut().process_light_key(key);
                }
            }
            Action::Key(KeyCode::Bootloader) => {
                if event.pressed {
                    warn!("Jumping to bootloader");
                    self.host.jump_to_bootloader();
                }
            }
            // Consumed by the user hooks
            Action::Key(KeyCode::Color(_)) => {}
            Action::No => {}
        }
    }

    /// Process one encoder detent
    pub fn process_encoder_event(&mut self, event: RotaryEncoderEvent) {
        match self.keymap.get_encoder_action(event.id).copied() {
            Some(encoder) => self
                .hooks
                .encoder_update_with(encoder, event.id, event.direction, &mut self.host),
            None => self.hooks.encoder_update(event.id, event.direction, &mut self.host),
        };
    }

    /// Periodic work: idle timeout and indicator refresh
    pub fn scan(&mut self, now: Instant) {
        self.hooks.matrix_scan(now);
        self.hooks.indicators_advanced(self.keymap.get_activated_layer());
    }

    /// The host went to sleep or woke up
    pub fn set_suspended(&mut self, suspended: bool) {
        if suspended {
            self.hooks.suspend_power_down();
        } else {
            self.hooks.suspend_wakeup_init();
        }
    }

    fn send_report(&self, key: HidKeyCode, pressed: bool) {
        if self.channels.report_channel.try_send(KeyReport { key, pressed }).is_err() {
            warn!("Report channel is full, dropping {:?}", key);
        }
    }
}
