//! Timed actuator press with tone playback.
//!
//! `play` occupies the caller for the whole action: each sample is held for
//! `duration / N` using a busy delay. Interrupts still run; nothing else in
//! the foreground does. A delay that never returns stalls the foreground
//! with the actuator held pressed; there is no cancellation path.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::{
    config::{SERVO_BASE_PULSE_US, SERVO_FRAME_US, SERVO_PRESS_PULSE_US, TONE_MIDPOINT, TONE_SILENCE},
    platform::{DelayOps, ToneOps},
    types::ActuatorChannel,
    waveform::WaveformTable,
};

/// Maps a sample in [-1, 1] onto the 8-bit tone output.
pub fn tone_level(sample: f32) -> u8 {
    let offset = (TONE_MIDPOINT as f32 * sample) as i32;
    (TONE_MIDPOINT + offset).clamp(0, u8::MAX as i32) as u8
}

pub const fn sample_period_us(duration_ms: u32, samples: usize) -> u32 {
    if samples == 0 {
        return 0;
    }
    duration_ms * 1_000 / samples as u32
}

pub struct ActuatorSequencer<S, T, D> {
    jump_servo: S,
    crouch_servo: S,
    tone: T,
    delay: D,
}

impl<S, T, D> ActuatorSequencer<S, T, D>
where
    S: SetDutyCycle,
    T: ToneOps,
    D: DelayOps,
{
    pub fn new(jump_servo: S, crouch_servo: S, tone: T, delay: D) -> Self {
        Self {
            jump_servo,
            crouch_servo,
            tone,
            delay,
        }
    }

    /// Silences the tone output and moves both actuators to base.
    pub fn park(&mut self) {
        self.emit_level(TONE_SILENCE);
        self.set_pulse(ActuatorChannel::Jump, SERVO_BASE_PULSE_US);
        self.set_pulse(ActuatorChannel::Crouch, SERVO_BASE_PULSE_US);
    }

    pub fn play<const N: usize>(
        &mut self,
        channel: ActuatorChannel,
        table: &WaveformTable<N>,
        duration_ms: u32,
    ) {
        let period_us = sample_period_us(duration_ms, N);

        self.set_pulse(channel, SERVO_PRESS_PULSE_US);
        for &sample in table.samples() {
            self.emit_level(tone_level(sample));
            self.delay.delay_us(period_us);
        }
        self.emit_level(TONE_SILENCE);
        self.set_pulse(channel, SERVO_BASE_PULSE_US);
    }

    fn set_pulse(&mut self, channel: ActuatorChannel, pulse_us: u16) {
        let servo = match channel {
            ActuatorChannel::Jump => &mut self.jump_servo,
            ActuatorChannel::Crouch => &mut self.crouch_servo,
        };
        if let Err(err) = servo.set_duty_cycle_fraction(pulse_us, SERVO_FRAME_US) {
            warn!("servo {:?} pulse {}us failed: {:?}", channel, pulse_us, err);
        }
    }

    fn emit_level(&mut self, level: u8) {
        if let Err(err) = self.tone.set_level(level) {
            warn!("tone level {} failed: {:?}", level, err);
        }
    }
}
