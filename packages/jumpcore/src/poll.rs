use heapless::Vec;
use log::debug;

use crate::{
    dispatcher::ActionSink,
    platform::{InputOps, PhotoSensorOps},
    queue::ActionQueue,
    types::{ActionRequest, InputSample, PhotoChannel, PhotoSample},
};

/// Requests asserted during one iteration, from every source combined.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TriggerSet {
    pub jump: bool,
    pub crouch: bool,
    pub reset: bool,
}

impl TriggerSet {
    pub fn from_inputs(sample: &InputSample, serial: Option<ActionRequest>) -> Self {
        let key = sample.key.and_then(ActionRequest::from_key);
        let asserted = |request| key == Some(request) || serial == Some(request);
        Self {
            jump: sample.jump_switch || asserted(ActionRequest::Jump),
            crouch: sample.crouch_switch || asserted(ActionRequest::Crouch),
            reset: sample.reset_switch,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.jump || self.crouch || self.reset)
    }

    /// Asserted requests in dispatch order.
    pub fn requests(&self) -> impl Iterator<Item = ActionRequest> {
        [
            (self.jump, ActionRequest::Jump),
            (self.crouch, ActionRequest::Crouch),
            (self.reset, ActionRequest::ResetSession),
        ]
        .into_iter()
        .filter_map(|(asserted, request)| asserted.then_some(request))
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PollReport {
    pub serial: Option<ActionRequest>,
    pub fired: Vec<ActionRequest, 3>,
    pub photo: PhotoSample,
}

/// Cooperative foreground loop.
pub struct MainPoll<'a, X, I, Ph> {
    requests: &'a ActionQueue,
    sink: X,
    inputs: I,
    photo: Ph,
}

impl<'a, X, I, Ph> MainPoll<'a, X, I, Ph>
where
    X: ActionSink,
    I: InputOps,
    Ph: PhotoSensorOps,
{
    pub fn new(requests: &'a ActionQueue, sink: X, inputs: I, photo: Ph) -> Self {
        Self {
            requests,
            sink,
            inputs,
            photo,
        }
    }

    pub fn run(&mut self) -> ! {
        loop {
            let report = self.poll_once();
            if !report.fired.is_empty() {
                debug!("poll fired {:?}", report.fired.as_slice());
            }
        }
    }

    pub fn poll_once(&mut self) -> PollReport {
        let sample = self.inputs.sample();
        // One deferred request per iteration; the rest wait for the next pass.
        let serial = self.requests.try_receive().ok();
        let triggers = TriggerSet::from_inputs(&sample, serial);

        let mut fired = Vec::new();
        for request in triggers.requests() {
            self.sink.dispatch(request);
            // At most one of each kind.
            let _ = fired.push(request);
        }

        let photo = PhotoSample {
            down: self.photo.read(PhotoChannel::Down),
            up: self.photo.read(PhotoChannel::Up),
        };

        PollReport {
            serial,
            fired,
            photo,
        }
    }

    pub fn sink(&self) -> &X {
        &self.sink
    }

    pub fn photo_sensors(&self) -> &Ph {
        &self.photo
    }
}
