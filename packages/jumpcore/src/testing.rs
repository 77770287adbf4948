//! Recording mocks for the platform seams. Every mock built from one `Rig`
//! appends to the same event log, so tests can assert cross-device ordering.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    convert::Infallible,
    rc::Rc,
    string::String,
    vec::Vec,
};

use embedded_hal::{digital, pwm};

use crate::{
    config::SERVO_FRAME_US,
    dispatcher::{ActionDispatcher, IndicatorBank},
    platform::{DelayOps, DisplayOps, InputOps, PhotoSensorOps, TelemetryOps, TimerAck, ToneOps},
    sequencer::ActuatorSequencer,
    session::SessionCell,
    types::{ActuatorChannel, InputSample, PhotoChannel},
    waveform::Waveforms,
};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DisplayEvent {
    Action(String),
    Score(u32),
    Clear,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event {
    Servo(ActuatorChannel, u16),
    Tone(u8),
    DelayUs(u32),
    Led(u8, bool),
    Display(DisplayEvent),
    Announce(Vec<u8>),
    TimerAck,
}

type Log = Rc<RefCell<Vec<Event>>>;

pub type TestSequencer = ActuatorSequencer<MockServo, MockTone, MockDelay>;
pub type TestDispatcher<'a> =
    ActionDispatcher<'a, MockServo, MockTone, MockDelay, MockLed, MockDisplay, MockTelemetry>;

#[derive(Default)]
pub struct Rig {
    log: Log,
    tone_fails: Rc<Cell<bool>>,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_events(&self) -> Vec<Event> {
        self.log.borrow_mut().drain(..).collect()
    }

    pub fn fail_tone(&self, fail: bool) {
        self.tone_fails.set(fail);
    }

    pub fn sequencer(&self) -> TestSequencer {
        ActuatorSequencer::new(
            self.servo(ActuatorChannel::Jump),
            self.servo(ActuatorChannel::Crouch),
            MockTone {
                log: self.log.clone(),
                fails: self.tone_fails.clone(),
            },
            MockDelay {
                log: self.log.clone(),
            },
        )
    }

    pub fn dispatcher<'a>(&self, session: &'a SessionCell, waveforms: &'a Waveforms) -> TestDispatcher<'a> {
        let leds = [0, 1, 2, 3].map(|index| MockLed {
            index,
            high: false,
            log: self.log.clone(),
        });
        ActionDispatcher::new(
            session,
            waveforms,
            self.sequencer(),
            IndicatorBank::new(leds),
            self.display(),
            MockTelemetry {
                log: self.log.clone(),
            },
        )
    }

    pub fn display(&self) -> MockDisplay {
        MockDisplay {
            log: self.log.clone(),
        }
    }

    pub fn timer(&self) -> MockTimer {
        MockTimer {
            log: self.log.clone(),
        }
    }

    fn servo(&self, channel: ActuatorChannel) -> MockServo {
        MockServo {
            channel,
            log: self.log.clone(),
        }
    }
}

pub struct MockServo {
    channel: ActuatorChannel,
    log: Log,
}

impl pwm::ErrorType for MockServo {
    type Error = Infallible;
}

impl pwm::SetDutyCycle for MockServo {
    fn max_duty_cycle(&self) -> u16 {
        SERVO_FRAME_US
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Servo(self.channel, duty));
        Ok(())
    }
}

pub struct MockTone {
    log: Log,
    fails: Rc<Cell<bool>>,
}

#[derive(Debug)]
pub struct ToneFault;

impl ToneOps for MockTone {
    type Error = ToneFault;

    fn set_level(&mut self, level: u8) -> Result<(), Self::Error> {
        if self.fails.get() {
            return Err(ToneFault);
        }
        self.log.borrow_mut().push(Event::Tone(level));
        Ok(())
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayOps for MockDelay {
    fn delay_us(&self, micros: u32) {
        self.log.borrow_mut().push(Event::DelayUs(micros));
    }
}

pub struct MockLed {
    index: u8,
    high: bool,
    log: Log,
}

impl digital::ErrorType for MockLed {
    type Error = Infallible;
}

impl digital::OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        self.log.borrow_mut().push(Event::Led(self.index, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        self.log.borrow_mut().push(Event::Led(self.index, true));
        Ok(())
    }
}

impl digital::StatefulOutputPin for MockLed {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

pub struct MockDisplay {
    log: Log,
}

impl DisplayOps for MockDisplay {
    fn show_action(&mut self, label: &str) {
        self.log
            .borrow_mut()
            .push(Event::Display(DisplayEvent::Action(label.into())));
    }

    fn show_score(&mut self, score: u32) {
        self.log
            .borrow_mut()
            .push(Event::Display(DisplayEvent::Score(score)));
    }

    fn clear(&mut self) {
        self.log.borrow_mut().push(Event::Display(DisplayEvent::Clear));
    }
}

pub struct MockTelemetry {
    log: Log,
}

impl TelemetryOps for MockTelemetry {
    fn announce(&mut self, line: &[u8]) {
        self.log.borrow_mut().push(Event::Announce(line.to_vec()));
    }
}

pub struct MockTimer {
    log: Log,
}

impl TimerAck for MockTimer {
    fn acknowledge(&mut self) {
        self.log.borrow_mut().push(Event::TimerAck);
    }
}

/// Replays scripted samples, then reports all inputs released.
#[derive(Default)]
pub struct ScriptedInputs {
    script: VecDeque<InputSample>,
}

impl ScriptedInputs {
    pub fn new(samples: impl IntoIterator<Item = InputSample>) -> Self {
        Self {
            script: samples.into_iter().collect(),
        }
    }
}

impl InputOps for ScriptedInputs {
    fn sample(&mut self) -> InputSample {
        self.script.pop_front().unwrap_or_default()
    }
}

/// Photo channels with fixed readings; `None` simulates a conversion that
/// never completed.
#[derive(Default)]
pub struct FixedPhoto {
    pub down: Option<u16>,
    pub up: Option<u16>,
    pub reads: usize,
}

impl PhotoSensorOps for FixedPhoto {
    fn read(&mut self, channel: PhotoChannel) -> Option<u16> {
        self.reads += 1;
        match channel {
            PhotoChannel::Down => self.down,
            PhotoChannel::Up => self.up,
        }
    }
}
