//! Notifications emitted by a [`VisionSession`](crate::VisionSession).
//!
//! Observers are registered explicitly; the session calls them synchronously
//! from the frame callback that produced the event.
use std::sync::mpsc::Sender;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    /// A color frame was latched.
    ImageAvailable,
    /// A frame was skipped; the payload is a human-readable reason.
    ProcessingFailed(String),
}

pub trait FrameObserver {
    fn image_available(&mut self) {}
    fn processing_failed(&mut self, _message: &str) {}
}

/// Forwards events into a channel. A disconnected receiver is ignored.
impl FrameObserver for Sender<FrameEvent> {
    fn image_available(&mut self) {
        let _ = self.send(FrameEvent::ImageAvailable);
    }

    fn processing_failed(&mut self, message: &str) {
        let _ = self.send(FrameEvent::ProcessingFailed(message.to_string()));
    }
}

#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<Box<dyn FrameObserver + Send>>,
}

impl ObserverSet {
    pub fn register(&mut self, observer: Box<dyn FrameObserver + Send>) {
        self.observers.push(observer);
    }

    pub fn image_available(&mut self) {
        for observer in &mut self.observers {
            observer.image_available();
        }
    }

    pub fn processing_failed(&mut self, message: &str) {
        for observer in &mut self.observers {
            observer.processing_failed(message);
        }
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}
