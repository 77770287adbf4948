//! Event-dispatch and shared-state core of the jumpbox controller.
//!
//! Everything here is hardware independent: the firmware crate wires the
//! seams in [`platform`] to real peripherals and calls into this crate from
//! the foreground loop and from the serial/timer interrupt handlers.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod platform;
pub mod poll;
pub mod queue;
pub mod score_clock;
pub mod sequencer;
pub mod session;
pub mod types;
pub mod waveform;

#[cfg(test)]
mod testing;

pub use command::{CommandParser, ParseEvent};
pub use dispatcher::{ActionDispatcher, ActionSink, IndicatorBank};
pub use poll::{MainPoll, PollReport, TriggerSet};
pub use queue::{post_request, ActionQueue};
pub use score_clock::ScoreClock;
pub use sequencer::ActuatorSequencer;
pub use session::{SessionCell, SessionSnapshot};
pub use types::{ActionRequest, ActuatorChannel, IndicatorPair, InputSample, PhotoSample};
pub use waveform::{generate, WaveformShape, WaveformTable, Waveforms};
