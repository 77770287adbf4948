use crate::config::{KEY_CROUCH, KEY_JUMP};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActionRequest {
    Jump,
    Crouch,
    ResetSession,
}

impl ActionRequest {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jump => "Jump",
            Self::Crouch => "Crouch",
            Self::ResetSession => "Reset",
        }
    }

    /// Line emitted on the serial channel when the action fires.
    pub const fn notification(self) -> Option<&'static [u8]> {
        match self {
            Self::Jump => Some(b"jump\n"),
            Self::Crouch => Some(b"crouch\n"),
            Self::ResetSession => None,
        }
    }

    pub const fn from_key(key: u8) -> Option<Self> {
        match key {
            KEY_JUMP => Some(Self::Jump),
            KEY_CROUCH => Some(Self::Crouch),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActuatorChannel {
    Jump,
    Crouch,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IndicatorPair {
    Jump,
    Crouch,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PhotoChannel {
    Down,
    Up,
}

/// One foreground iteration's view of the local trigger inputs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputSample {
    pub jump_switch: bool,
    pub crouch_switch: bool,
    pub reset_switch: bool,
    pub key: Option<u8>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PhotoSample {
    pub down: Option<u16>,
    pub up: Option<u16>,
}
