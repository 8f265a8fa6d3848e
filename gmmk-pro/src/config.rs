use embassy_sync::channel::Channel;
use embassy_time::Duration;

use crate::RawMutex;
use crate::event::{KeyboardEvent, RotaryEncoderEvent};
use crate::keyboard::KeyReport;

/// The config struct for the keyboard.
///
/// There are 2 types of configs:
/// 1. `IdleConfig`: Idle timeout of the RGB matrix.
/// 2. `ScanConfig`: How often the periodic hooks run.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardConfig {
    pub idle_config: IdleConfig,
    pub scan_config: ScanConfig,
}

/// Config for the RGB matrix idle timeout
#[derive(Clone, Copy, Debug)]
pub struct IdleConfig {
    /// Threshold at startup, in minutes. 0 disables the timeout
    pub default_threshold: u16,
    /// Upper bound of the threshold, in minutes
    pub max_threshold: u16,
    /// Length of one counted interval
    pub tick: Duration,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            default_threshold: 5,
            // 2 hours and 10 minutes
            max_threshold: 140,
            tick: Duration::from_secs(60),
        }
    }
}

/// Config for the periodic scan hook and indicator refresh
#[derive(Clone, Copy, Debug)]
pub struct ScanConfig {
    pub scan_interval: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_interval: Duration::from_millis(10),
        }
    }
}

/// Channels between the keyboard and the rest of the firmware
pub struct ChannelConfig<const KEY_EVENT_CHANNEL_SIZE: usize = 16, const REPORT_CHANNEL_SIZE: usize = 16> {
    pub key_event_channel: Channel<RawMutex, KeyboardEvent, KEY_EVENT_CHANNEL_SIZE>,
    pub encoder_event_channel: Channel<RawMutex, RotaryEncoderEvent, KEY_EVENT_CHANNEL_SIZE>,
    pub report_channel: Channel<RawMutex, KeyReport, REPORT_CHANNEL_SIZE>,
}

impl<const KEY_EVENT_CHANNEL_SIZE: usize, const REPORT_CHANNEL_SIZE: usize> Default
    for ChannelConfig<KEY_EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const KEY_EVENT_CHANNEL_SIZE: usize, const REPORT_CHANNEL_SIZE: usize>
    ChannelConfig<KEY_EVENT_CHANNEL_SIZE, REPORT_CHANNEL_SIZE>
{
    pub const fn new() -> Self {
        Self {
            key_event_channel: Channel::new(),
            encoder_event_channel: Channel::new(),
            report_channel: Channel::new(),
        }
    }
}
