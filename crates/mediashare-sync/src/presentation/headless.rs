//! Display-less presentation that keeps state and logs it.

use tracing::info;

use super::types::{DarknessAware, FullscreenLayer, MediaPopout};
use crate::placement::MediaType;

/// Media currently covering the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FullscreenMedia {
    pub url: String,
    pub media_type: MediaType,
    pub loop_: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessFullscreen {
    current: Option<FullscreenMedia>,
    darkness: Option<f64>,
}

impl HeadlessFullscreen {
    pub fn current(&self) -> Option<&FullscreenMedia> {
        self.current.as_ref()
    }

    pub fn darkness(&self) -> Option<f64> {
        self.darkness
    }
}

impl DarknessAware for HeadlessFullscreen {
    fn update_darkness(&mut self, level: f64) {
        self.darkness = Some(level);
    }
}

impl FullscreenLayer for HeadlessFullscreen {
    fn handle_share(&mut self, url: &str, media_type: MediaType, loop_: bool) {
        info!(url, %media_type, loop_, "Showing fullscreen media");
        self.current = Some(FullscreenMedia {
            url: url.to_string(),
            media_type,
            loop_,
        });
    }

    fn handle_dismiss(&mut self) {
        if let Some(media) = self.current.take() {
            info!(url = %media.url, "Fullscreen media dismissed");
        }
    }
}

/// How many recent popouts a headless client remembers.
pub const MAX_TRACKED_POPOUTS: usize = 32;

#[derive(Debug, Default)]
pub struct HeadlessPopouts {
    open: Vec<(String, bool)>,
    opened: usize,
    darkness: Option<f64>,
}

impl HeadlessPopouts {
    /// `(url, loop)` of the most recent popouts, oldest first. At most
    /// [`MAX_TRACKED_POPOUTS`] are kept.
    pub fn open(&self) -> &[(String, bool)] {
        &self.open
    }

    /// Popouts opened over the client's lifetime.
    pub fn opened(&self) -> usize {
        self.opened
    }

    pub fn darkness(&self) -> Option<f64> {
        self.darkness
    }
}

impl DarknessAware for HeadlessPopouts {
    fn update_darkness(&mut self, level: f64) {
        self.darkness = Some(level);
    }
}

impl MediaPopout for HeadlessPopouts {
    fn handle_share(&mut self, url: &str, loop_: bool) {
        info!(url, loop_, "Opening media popout");
        if self.open.len() == MAX_TRACKED_POPOUTS {
            self.open.remove(0);
        }
        self.open.push((url.to_string(), loop_));
        self.opened += 1;
    }
}
