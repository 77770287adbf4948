use heapless::Vec;

use crate::{
    config::{COMMAND_BUF_LEN, COMMAND_TERMINATOR},
    types::ActionRequest,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseEvent {
    None,
    Command(ActionRequest),
    Unrecognized,
    Overflow,
}

/// Line accumulator for the serial command stream.
///
/// Runs in the receive interrupt, one byte per call. A line that reaches the
/// last buffer slot without a terminator is discarded whole: the buffer is
/// cleared and every byte up to the next terminator is dropped, so the tail
/// of an over-long line can never be read as a command of its own.
pub struct CommandParser {
    line: Vec<u8, COMMAND_BUF_LEN>,
    overflowed: bool,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    pub const fn new() -> Self {
        Self {
            line: Vec::new(),
            overflowed: false,
        }
    }

    pub fn buffered(&self) -> &[u8] {
        &self.line
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    pub fn clear(&mut self) {
        self.line.clear();
        self.overflowed = false;
    }

    pub fn push_byte(&mut self, byte: u8) -> ParseEvent {
        if byte == 0 {
            return ParseEvent::None;
        }

        if byte == COMMAND_TERMINATOR {
            if self.overflowed {
                self.overflowed = false;
                return ParseEvent::None;
            }
            let event = match recognize(&self.line) {
                Some(request) => ParseEvent::Command(request),
                None if self.line.is_empty() => ParseEvent::None,
                None => ParseEvent::Unrecognized,
            };
            self.line.clear();
            return event;
        }

        if self.overflowed {
            return ParseEvent::None;
        }

        if self.line.len() < COMMAND_BUF_LEN - 1 {
            // Bounded by the check above.
            let _ = self.line.push(byte);
            return ParseEvent::None;
        }

        self.line.clear();
        self.overflowed = true;
        ParseEvent::Overflow
    }
}

/// Case-sensitive match against the recognized command set.
pub fn recognize(line: &[u8]) -> Option<ActionRequest> {
    match line {
        b"jump" => Some(ActionRequest::Jump),
        b"crouch" => Some(ActionRequest::Crouch),
        _ => None,
    }
}
