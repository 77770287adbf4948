use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, TrySendError},
};
use log::warn;

use crate::{config::ACTION_QUEUE_DEPTH, types::ActionRequest};

/// Requests recognized in interrupt context, waiting for the foreground.
pub type ActionQueue = Channel<CriticalSectionRawMutex, ActionRequest, ACTION_QUEUE_DEPTH>;

/// Non-blocking post, safe from an interrupt handler. A full queue drops the
/// request.
pub fn post_request(queue: &ActionQueue, request: ActionRequest) -> bool {
    match queue.try_send(request) {
        Ok(()) => true,
        Err(TrySendError::Full(dropped)) => {
            warn!("action queue full, dropping {:?}", dropped);
            false
        }
    }
}
