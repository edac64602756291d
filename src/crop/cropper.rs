// SPDX-License-Identifier: MPL-2.0
//! Cropper facade driven by the presentation host.
//!
//! The host forwards its frame size, touches and overlay requests; the
//! cropper keeps the saved crop rectangle, the layout and the pan/zoom state,
//! and reports every crop rectangle change through a [`CropObserver`] and the
//! return values of its methods. Painting and animation stay with the host:
//! an animated overlay transition is started here and finished by the host
//! calling [`CropperState::complete_transition`].

use super::layout::Layout;
use super::manipulator::CropManipulator;
use super::mapper::{self, PixelRect, ZoomState};
use super::observer::CropObserver;
use crate::config::Config;
use crate::domain::crop::{FingerSize, MinCropSize, Zone, ZoomScale};
use crate::domain::geometry::{fit_with_min_size, Point, Rect, Size};
use crate::error::{CropError, Result};
use crate::media::image_transform;
use image_rs::DynamicImage;
use std::fmt;

/// Resolved cropper settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropperSettings {
    pub finger_size: FingerSize,
    pub min_crop_size: MinCropSize,
    pub max_zoom: ZoomScale,
    pub show_overlay_on_load: bool,
}

impl Default for CropperSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl CropperSettings {
    /// Resolves optional config values, falling back to defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        use crate::config::defaults;

        Self {
            finger_size: FingerSize::new(config.finger_size.unwrap_or(defaults::DEFAULT_FINGER_SIZE)),
            min_crop_size: MinCropSize::new(
                config.min_crop_width.unwrap_or(defaults::DEFAULT_MIN_CROP_SIZE),
                config.min_crop_height.unwrap_or(defaults::DEFAULT_MIN_CROP_SIZE),
            ),
            max_zoom: ZoomScale::new(
                config
                    .max_zoom_scale
                    .unwrap_or(defaults::DEFAULT_MAX_ZOOM_SCALE),
            ),
            show_overlay_on_load: config.show_overlay_on_load.unwrap_or(false),
        }
    }
}

/// Whether the crop overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// Overlay transition in flight. New show/dismiss requests are rejected
/// unless this is `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    Idle,
    Showing,
    Dismissing,
}

/// Who should handle a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    /// The touch grabs a crop handle; the host must not pan or zoom.
    CropHandle(Zone),
    /// The touch belongs to the pan/zoom content.
    Content,
}

pub struct CropperState {
    settings: CropperSettings,
    image: Option<(u32, u32)>,
    frame: Size,
    layout: Layout,
    zoom: ZoomState,
    overlay: OverlayState,
    transition: Transition,
    saved_crop: Option<Rect>,
    manipulator: CropManipulator,
    observer: Option<Box<dyn CropObserver>>,
}

impl fmt::Debug for CropperState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropperState")
            .field("settings", &self.settings)
            .field("image", &self.image)
            .field("layout", &self.layout)
            .field("zoom", &self.zoom)
            .field("overlay", &self.overlay)
            .field("transition", &self.transition)
            .field("saved_crop", &self.saved_crop)
            .field("drag", self.manipulator.state())
            .finish_non_exhaustive()
    }
}

impl CropperState {
    #[must_use]
    pub fn new(settings: CropperSettings) -> Self {
        let overlay = if settings.show_overlay_on_load {
            OverlayState::Visible
        } else {
            OverlayState::Hidden
        };

        Self {
            settings,
            image: None,
            frame: Size::ZERO,
            layout: Layout::default(),
            zoom: ZoomState::default(),
            overlay,
            transition: Transition::Idle,
            saved_crop: None,
            manipulator: CropManipulator::new(settings.finger_size, settings.min_crop_size),
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: impl CropObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    #[must_use]
    pub fn settings(&self) -> &CropperSettings {
        &self.settings
    }

    /// Replaces the settings and re-fits the crop rectangle.
    pub fn apply_settings(&mut self, settings: CropperSettings) -> Option<Rect> {
        self.settings = settings;
        self.manipulator.set_finger_size(settings.finger_size);
        self.manipulator.set_min_size(settings.min_crop_size);
        self.layout = Layout::default();
        self.relayout()
    }

    /// Attaches an image of `width × height` pixels and lays it out.
    pub fn set_image(&mut self, width: u32, height: u32) -> Option<Rect> {
        self.image = Some((width, height));
        self.layout = Layout::default();
        self.relayout()
    }

    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        #[allow(clippy::cast_precision_loss)]
        let to_size = |(w, h): (u32, u32)| Size::new(w as f32, h as f32);
        self.image.map(to_size)
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    #[must_use]
    pub fn is_overlay_visible(&self) -> bool {
        self.overlay == OverlayState::Visible
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Rectangle the crop rectangle must stay within.
    #[must_use]
    pub fn crop_bounds(&self) -> Rect {
        self.layout.crop_bounds()
    }

    /// Saved crop rectangle, or the whole viewport when none is set.
    #[must_use]
    pub fn crop_rect(&self) -> Rect {
        self.saved_crop.unwrap_or_else(|| self.crop_bounds())
    }

    /// Fits `rect` into the viewport and stores it.
    ///
    /// Only honoured while the overlay is visible. Returns the stored
    /// rectangle when it changed; setting the same rectangle twice notifies
    /// once.
    pub fn set_crop_rect(&mut self, rect: Rect) -> Option<Rect> {
        if !self.is_overlay_visible() {
            return None;
        }

        let fitted = fit_with_min_size(rect, self.crop_bounds(), self.settings.min_crop_size.as_size());
        self.store_crop(fitted)
    }

    /// Lays the image out in a host frame of `frame`.
    ///
    /// Ignored while the overlay is being dismissed. When the layout changes
    /// the zoom is reset to fit and a saved crop rectangle is re-fitted into
    /// the new viewport; the re-fitted rectangle is returned if it moved.
    pub fn refresh(&mut self, frame: Size) -> Option<Rect> {
        self.frame = frame;
        if self.transition == Transition::Dismissing {
            tracing::debug!(?frame, "refresh deferred until dismissal completes");
            return None;
        }
        self.relayout()
    }

    /// Shows the crop overlay, optionally with an initial crop rectangle.
    ///
    /// Without animation the transition completes immediately; otherwise the
    /// host calls [`complete_transition`](Self::complete_transition) once its
    /// animation finished.
    pub fn show_overlay(&mut self, rect: Option<Rect>, animated: bool) -> Result<()> {
        self.ensure_idle()?;

        tracing::debug!(?rect, animated, "showing crop overlay");
        self.overlay = OverlayState::Visible;
        self.transition = Transition::Showing;
        self.saved_crop = None;

        if let Some(rect) = rect {
            self.set_crop_rect(rect);
        }
        self.relayout();

        if !animated {
            self.complete_transition();
        }
        Ok(())
    }

    /// Hides the crop overlay. The saved crop rectangle is discarded once the
    /// transition completes.
    pub fn dismiss_overlay(&mut self, animated: bool) -> Result<()> {
        self.ensure_idle()?;

        tracing::debug!(animated, "dismissing crop overlay");
        self.overlay = OverlayState::Hidden;
        self.transition = Transition::Dismissing;
        self.manipulator.end();

        if !animated {
            self.complete_transition();
        }
        Ok(())
    }

    /// Finishes the running overlay transition, if any.
    pub fn complete_transition(&mut self) {
        match self.transition {
            Transition::Idle => {}
            Transition::Showing => {
                self.transition = Transition::Idle;
            }
            Transition::Dismissing => {
                self.transition = Transition::Idle;
                self.saved_crop = None;
                self.relayout();
            }
        }
        tracing::debug!(overlay = ?self.overlay, "overlay transition completed");
    }

    /// Decides whether `point` grabs a crop handle or belongs to the content.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> TouchTarget {
        if !self.is_overlay_visible() {
            return TouchTarget::Content;
        }
        match self
            .manipulator
            .classifier()
            .classify(self.crop_rect(), point, self.crop_bounds())
        {
            Zone::None => TouchTarget::Content,
            zone => TouchTarget::CropHandle(zone),
        }
    }

    /// Starts a drag; returns the zone that was grabbed.
    pub fn touch_start(&mut self, point: Point) -> Zone {
        if !self.is_overlay_visible() {
            return Zone::None;
        }
        let crop = self.crop_rect();
        let bounds = self.crop_bounds();
        self.manipulator.begin(crop, bounds, point)
    }

    /// Moves the active drag from `previous` to `point`.
    pub fn touch_move(&mut self, point: Point, previous: Point) -> Option<Rect> {
        let crop = self.crop_rect();
        let bounds = self.crop_bounds();
        let moved = self.manipulator.drag(crop, bounds, point, previous)?;
        self.set_crop_rect(moved)
    }

    pub fn touch_end(&mut self) {
        self.manipulator.end();
    }

    /// Zone grabbed by the active drag, for cursor feedback.
    #[must_use]
    pub fn current_zone(&self) -> Zone {
        self.manipulator.zone()
    }

    /// Sets the zoom scale, clamped between the fitting scale and the
    /// configured maximum.
    pub fn set_zoom_scale(&mut self, scale: f32) {
        self.zoom.scale = ZoomScale::new(scale).clamp_between(self.layout.scale, self.settings.max_zoom);
        self.zoom = self.zoom.clamp_pan(self.layout.viewport.size());
    }

    /// Scrolls the content, clamped to the scrollable range.
    pub fn set_pan_offset(&mut self, offset: Point) {
        self.zoom.pan_offset = offset;
        self.zoom = self.zoom.clamp_pan(self.layout.viewport.size());
    }

    /// Crop rectangle in image space.
    #[must_use]
    pub fn image_rect(&self) -> Rect {
        let crop = self.is_overlay_visible().then(|| self.crop_rect());
        mapper::image_rect(crop, &self.zoom, self.layout.viewport.size())
    }

    /// Crop rectangle in whole image pixels.
    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::from_image_rect(self.image_rect())
    }

    /// Extracts the cropped pixels from `image`.
    pub fn cropped_image(&self, image: &DynamicImage) -> Result<DynamicImage> {
        if self.image.is_none() {
            return Err(CropError::NoImage.into());
        }
        image_transform::crop(image, self.pixel_rect())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.transition == Transition::Idle {
            return Ok(());
        }
        tracing::warn!(transition = ?self.transition, "overlay transition already in progress");
        Err(CropError::TransitionInProgress.into())
    }

    fn relayout(&mut self) -> Option<Rect> {
        let image = self.image_size()?;
        let margin = if self.is_overlay_visible() {
            self.settings.finger_size.reach()
        } else {
            0.0
        };

        let layout = Layout::compute(self.frame, image, margin);
        if layout == self.layout {
            return None;
        }

        tracing::debug!(
            viewport = ?layout.viewport,
            scale = layout.scale.value(),
            crop = ?self.saved_crop,
            "cropper layout refreshed"
        );
        self.layout = layout;
        self.zoom = ZoomState::new(image, layout.scale);

        let saved = self.saved_crop?;
        let fitted = fit_with_min_size(saved, layout.crop_bounds(), self.settings.min_crop_size.as_size());
        self.store_crop(fitted)
    }

    fn store_crop(&mut self, rect: Rect) -> Option<Rect> {
        if self.saved_crop == Some(rect) {
            return None;
        }
        self.saved_crop = Some(rect);
        if let Some(observer) = self.observer.as_mut() {
            observer.crop_rect_changed(rect);
        }
        Some(rect)
    }
}
