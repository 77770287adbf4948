use embedded_hal::{digital::StatefulOutputPin, pwm::SetDutyCycle};
use log::info;

use crate::{
    config::{CROUCH_DURATION_MS, JUMP_DURATION_MS},
    platform::{DelayOps, DisplayOps, TelemetryOps, ToneOps},
    sequencer::ActuatorSequencer,
    session::SessionCell,
    types::{ActionRequest, ActuatorChannel, IndicatorPair},
    waveform::{WaveformShape, Waveforms},
};

/// Anything the poll loop can hand a request to.
pub trait ActionSink {
    fn dispatch(&mut self, request: ActionRequest);
}

/// Four indicator outputs, toggled two at a time.
pub struct IndicatorBank<P> {
    leds: [P; 4],
}

impl<P: StatefulOutputPin> IndicatorBank<P> {
    pub fn new(leds: [P; 4]) -> Self {
        Self { leds }
    }

    pub fn toggle_pair(&mut self, pair: IndicatorPair) {
        let (first, second) = match pair {
            IndicatorPair::Jump => (0, 1),
            IndicatorPair::Crouch => (2, 3),
        };
        let _ = self.leds[first].toggle();
        let _ = self.leds[second].toggle();
    }
}

#[derive(Clone, Copy, Debug)]
struct ActionProfile {
    request: ActionRequest,
    channel: ActuatorChannel,
    indicators: IndicatorPair,
    shape: WaveformShape,
    duration_ms: u32,
}

impl ActionProfile {
    const JUMP: Self = Self {
        request: ActionRequest::Jump,
        channel: ActuatorChannel::Jump,
        indicators: IndicatorPair::Jump,
        shape: WaveformShape::Sine,
        duration_ms: JUMP_DURATION_MS,
    };

    const CROUCH: Self = Self {
        request: ActionRequest::Crouch,
        channel: ActuatorChannel::Crouch,
        indicators: IndicatorPair::Crouch,
        shape: WaveformShape::Cosine,
        duration_ms: CROUCH_DURATION_MS,
    };
}

/// The one place that decides what an action does and when the session
/// starts or ends.
pub struct ActionDispatcher<'a, S, T, D, P, Disp, Tel> {
    session: &'a SessionCell,
    waveforms: &'a Waveforms,
    sequencer: ActuatorSequencer<S, T, D>,
    indicators: IndicatorBank<P>,
    display: Disp,
    telemetry: Tel,
}

impl<'a, S, T, D, P, Disp, Tel> ActionDispatcher<'a, S, T, D, P, Disp, Tel>
where
    S: SetDutyCycle,
    T: ToneOps,
    D: DelayOps,
    P: StatefulOutputPin,
    Disp: DisplayOps,
    Tel: TelemetryOps,
{
    pub fn new(
        session: &'a SessionCell,
        waveforms: &'a Waveforms,
        sequencer: ActuatorSequencer<S, T, D>,
        indicators: IndicatorBank<P>,
        display: Disp,
        telemetry: Tel,
    ) -> Self {
        Self {
            session,
            waveforms,
            sequencer,
            indicators,
            display,
            telemetry,
        }
    }

    /// Ends the session. Outputs are left alone.
    pub fn reset(&mut self) {
        self.session.reset();
        info!("session reset");
    }

    fn perform(&mut self, profile: ActionProfile) {
        let session = self.session.start();
        self.display.show_action(profile.request.label());
        if let Some(line) = profile.request.notification() {
            self.telemetry.announce(line);
        }

        self.indicators.toggle_pair(profile.indicators);
        let table = match profile.shape {
            WaveformShape::Sine => &self.waveforms.jump,
            WaveformShape::Cosine => &self.waveforms.crouch,
        };
        self.sequencer
            .play(profile.channel, table, profile.duration_ms);
        self.indicators.toggle_pair(profile.indicators);
        self.display.clear();

        info!(
            "{} done, score {}",
            profile.request.label(),
            session.score
        );
    }
}

impl<S, T, D, P, Disp, Tel> ActionSink for ActionDispatcher<'_, S, T, D, P, Disp, Tel>
where
    S: SetDutyCycle,
    T: ToneOps,
    D: DelayOps,
    P: StatefulOutputPin,
    Disp: DisplayOps,
    Tel: TelemetryOps,
{
    fn dispatch(&mut self, request: ActionRequest) {
        match request {
            ActionRequest::Jump => self.perform(ActionProfile::JUMP),
            ActionRequest::Crouch => self.perform(ActionProfile::CROUCH),
            ActionRequest::ResetSession => self.reset(),
        }
    }
}
