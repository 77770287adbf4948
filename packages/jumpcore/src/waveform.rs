use core::f32::consts::PI;

use crate::config::WAVEFORM_SAMPLES;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WaveformShape {
    Sine,
    Cosine,
}

/// One period of a waveform, sampled at `N` evenly spaced phases.
#[derive(Clone, Copy, Debug)]
pub struct WaveformTable<const N: usize> {
    samples: [f32; N],
}

impl<const N: usize> WaveformTable<N> {
    pub fn samples(&self) -> &[f32; N] {
        &self.samples
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

pub fn generate<const N: usize>(shape: WaveformShape) -> WaveformTable<N> {
    let mut samples = [0.0f32; N];
    for (j, sample) in samples.iter_mut().enumerate() {
        let angle = 2.0 * PI * j as f32 / N as f32;
        *sample = match shape {
            WaveformShape::Sine => libm::sinf(angle),
            WaveformShape::Cosine => libm::cosf(angle),
        };
    }
    WaveformTable { samples }
}

/// The two tables used by the actions, built once at startup.
#[derive(Clone, Copy, Debug)]
pub struct Waveforms {
    pub jump: WaveformTable<WAVEFORM_SAMPLES>,
    pub crouch: WaveformTable<WAVEFORM_SAMPLES>,
}

impl Waveforms {
    pub fn precompute() -> Self {
        Self {
            jump: generate(WaveformShape::Sine),
            crouch: generate(WaveformShape::Cosine),
        }
    }
}
