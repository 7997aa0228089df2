//! Callback-facing session tying the color latch and the depth processor
//! together.
//!
//! The acquisition side calls [`VisionSession::on_color_frame`] and
//! [`VisionSession::on_depth_frame`] with raw messages; the publishing side
//! reads [`VisionSession::latest`] or [`VisionSession::take_latest`] on its
//! own schedule. Every entry point takes `&mut self` and runs to completion,
//! so callbacks are serialized by ownership rather than by locks.
use crate::decode::{decode_color, decode_depth, RawImage};
use crate::depth::{DepthProcessor, DepthStructure, ProcessorParams};
use crate::error::FrameError;
use crate::image::{ColorImage, ImageView};
use crate::latch::FrameLatch;
use crate::observer::{FrameObserver, ObserverSet};
use log::{debug, error, trace};

#[derive(Debug, Default)]
pub struct VisionSession {
    processor: DepthProcessor,
    color: FrameLatch<ColorImage>,
    observers: ObserverSet,
    latest: Option<DepthStructure>,
}

impl VisionSession {
    pub fn new(params: ProcessorParams) -> Self {
        Self {
            processor: DepthProcessor::new(params),
            ..Self::default()
        }
    }

    pub fn register_observer(&mut self, observer: Box<dyn FrameObserver + Send>) {
        self.observers.register(observer);
    }

    /// Color callback: decode and latch the frame unless one is already held.
    pub fn on_color_frame(&mut self, msg: &RawImage) -> bool {
        if self.color.is_held() {
            trace!("color frame ignored: latch already holds a frame");
            return false;
        }
        match decode_color(msg) {
            Ok(frame) => self.offer_color_frame(frame),
            Err(err) => {
                self.report_failure(&FrameError::from(err));
                false
            }
        }
    }

    /// Latch an already decoded color frame. Notifies observers once per
    /// accepted frame.
    pub fn offer_color_frame(&mut self, frame: ColorImage) -> bool {
        let (w, h) = frame.dims();
        if !self.color.offer(frame) {
            trace!("color frame ignored: latch already holds a frame");
            return false;
        }
        debug!("color frame latched w={} h={}", w, h);
        self.observers.image_available();
        true
    }

    pub fn color_frame(&self) -> Option<&ColorImage> {
        self.color.frame()
    }

    /// Consume the latched color frame and reopen the latch.
    pub fn take_color_frame(&mut self) -> Option<ColorImage> {
        self.color.take()
    }

    pub fn reset_color_latch(&mut self) {
        self.color.reset();
    }

    /// Depth callback: decode, process and store the result. On failure the
    /// previous result is kept and observers are notified.
    pub fn on_depth_frame(&mut self, msg: &RawImage) -> bool {
        match decode_depth(msg) {
            Ok(depth) => self.process_depth_frame(&depth),
            Err(err) => {
                self.report_failure(&FrameError::from(err));
                false
            }
        }
    }

    /// Process an already decoded depth frame.
    pub fn process_depth_frame<I>(&mut self, depth: &I) -> bool
    where
        I: ImageView<Pixel = u16>,
    {
        if let Some(color) = self.color.frame() {
            if color.dims() != (depth.width(), depth.height()) {
                debug!(
                    "depth frame {}x{} does not match latched color frame {}x{}",
                    depth.width(),
                    depth.height(),
                    color.w,
                    color.h
                );
            }
        }
        match self.processor.process(depth) {
            Ok(structure) => {
                self.latest = Some(structure);
                true
            }
            Err(err) => {
                self.report_failure(&err);
                false
            }
        }
    }

    pub fn latest(&self) -> Option<&DepthStructure> {
        self.latest.as_ref()
    }

    pub fn take_latest(&mut self) -> Option<DepthStructure> {
        self.latest.take()
    }

    fn report_failure(&mut self, err: &FrameError) {
        error!("frame skipped: {err}");
        self.observers.processing_failed(&err.to_string());
    }
}
