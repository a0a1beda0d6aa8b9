//! Photo gallery carousel
//!
//! The carousel advances one image per interval with wraparound. Time is fed
//! in through [`Carousel::tick`], so the state machine is testable without a
//! clock; [`Autoplay`] drives it from a tokio interval.
//!
//! The timer is suspended while the pointer hovers the carousel or while the
//! full-screen viewer is open, and restarts from zero once both clear.

use crate::error::SiteError;
use invite_core::{GalleryConfig, GalleryImage};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<GalleryImage>,
    current: usize,
    interval: Duration,
    elapsed: Duration,
    advances: u64,
    hovered: bool,
    viewer: Option<usize>,
}

impl Carousel {
    /// # Errors
    /// `SiteError::EmptyGallery` without images.
    pub fn new(images: Vec<GalleryImage>, interval: Duration) -> Result<Self, SiteError> {
        if images.is_empty() {
            return Err(SiteError::EmptyGallery);
        }
        Ok(Self {
            images,
            current: 0,
            interval,
            elapsed: Duration::ZERO,
            advances: 0,
            hovered: false,
            viewer: None,
        })
    }

    /// # Errors
    /// `SiteError::EmptyGallery` without images.
    pub fn from_config(config: &GalleryConfig) -> Result<Self, SiteError> {
        Self::new(
            config.images.clone(),
            Duration::from_millis(config.interval_ms),
        )
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> &GalleryImage {
        &self.images[self.current]
    }

    #[inline]
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `"2 / 3"`
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.images.len();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.images.len() - 1) % self.images.len();
        self.current
    }

    /// Jump straight to an image
    ///
    /// # Errors
    /// `SiteError::ImageOutOfRange` for a missing index.
    pub fn select(&mut self, index: usize) -> Result<(), SiteError> {
        self.check(index)?;
        self.current = index;
        Ok(())
    }

    /// Whether auto-advance is suspended
    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.hovered || self.viewer.is_some()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.update_pause(|c| c.hovered = hovered);
    }

    /// Open the full-screen viewer on an image
    ///
    /// # Errors
    /// `SiteError::ImageOutOfRange` for a missing index.
    pub fn open_viewer(&mut self, index: usize) -> Result<(), SiteError> {
        self.check(index)?;
        self.update_pause(|c| c.viewer = Some(index));
        Ok(())
    }

    pub fn close_viewer(&mut self) {
        self.update_pause(|c| c.viewer = None);
    }

    /// Image index shown in the viewer, if open
    #[inline]
    #[must_use]
    pub fn viewer_index(&self) -> Option<usize> {
        self.viewer
    }

    #[must_use]
    pub fn viewer_image(&self) -> Option<&GalleryImage> {
        self.viewer.map(|i| &self.images[i])
    }

    /// Step the viewer forward; no-op when closed
    pub fn viewer_next(&mut self) -> Option<usize> {
        let len = self.images.len();
        self.viewer = self.viewer.map(|i| (i + 1) % len);
        self.viewer
    }

    /// Step the viewer back; no-op when closed
    pub fn viewer_prev(&mut self) -> Option<usize> {
        let len = self.images.len();
        self.viewer = self.viewer.map(|i| (i + len - 1) % len);
        self.viewer
    }

    /// Feed elapsed time; returns how many images were advanced
    pub fn tick(&mut self, dt: Duration) -> usize {
        if self.is_paused() || self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut advanced = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.next();
            advanced += 1;
        }
        self.advances += advanced as u64;
        advanced
    }

    /// Timer advances so far, counted even when a single image wraps onto
    /// itself
    #[inline]
    #[must_use]
    pub fn advances(&self) -> u64 {
        self.advances
    }

    fn update_pause(&mut self, change: impl FnOnce(&mut Self)) {
        let was = self.is_paused();
        change(self);
        if was != self.is_paused() {
            self.elapsed = Duration::ZERO;
            tracing::trace!(paused = self.is_paused(), "gallery timer toggled");
        }
    }

    fn check(&self, index: usize) -> Result<(), SiteError> {
        if index < self.images.len() {
            Ok(())
        } else {
            Err(SiteError::ImageOutOfRange {
                index,
                len: self.images.len(),
            })
        }
    }
}

/// Background task ticking a shared carousel
///
/// Stops when dropped.
#[derive(Debug)]
pub struct Autoplay {
    handle: JoinHandle<()>,
}

impl Autoplay {
    /// Tick `carousel` every `resolution` on the current tokio runtime
    #[must_use]
    pub fn spawn(carousel: Arc<Mutex<Carousel>>, resolution: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(resolution);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let advanced = carousel.lock().tick(resolution);
                if advanced > 0 {
                    tracing::trace!(advanced, "gallery advanced");
                }
            }
        });
        Self { handle }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
