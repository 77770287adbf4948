//! Seams between the core and the board.
//!
//! Servo channels and indicator LEDs use the `embedded-hal` traits directly;
//! the remaining edges have no common HAL trait and are described here.

use core::fmt::Debug;

use crate::types::{InputSample, PhotoChannel};

pub trait DelayOps {
    fn delay_us(&self, micros: u32);
}

/// 8-bit analog output used for tone playback.
pub trait ToneOps {
    type Error: Debug;

    fn set_level(&mut self, level: u8) -> Result<(), Self::Error>;
}

/// Text display shared by the action path and the score refresh.
pub trait DisplayOps {
    fn show_action(&mut self, label: &str);
    fn show_score(&mut self, score: u32);
    fn clear(&mut self);
}

/// Outbound notification channel (the serial TX side).
pub trait TelemetryOps {
    fn announce(&mut self, line: &[u8]);
}

pub trait InputOps {
    fn sample(&mut self) -> InputSample;
}

pub trait PhotoSensorOps {
    /// Returns `None` when the conversion did not complete.
    fn read(&mut self, channel: PhotoChannel) -> Option<u16>;
}

/// Clears the pending condition of the periodic score timer.
pub trait TimerAck {
    fn acknowledge(&mut self);
}
