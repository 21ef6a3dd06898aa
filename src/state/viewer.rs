/// The shop viewer controller
///
/// Owns the selected view mode, the displayed image and the lightbox.
/// It never performs I/O itself: it hands out `LoadRequest`s and is told
/// when the fade delay has elapsed and when a load has finished. Each
/// effective mode change bumps a generation counter, and completions
/// carrying an older generation are dropped, so toggling quickly can
/// never leave a stale image on screen.

use super::data::{
    DisplayedImage, Generation, LoadRequest, LoadedImage, ModalState, ViewMode, Visibility,
};
use crate::shop::loader::LoadError;
use crate::shop::paths::ShopPaths;

/// What a finished load did to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// New image swapped in, fade-in should start
    Shown,
    /// Load failed for the current generation
    Failed,
    /// Superseded by a newer selection, ignored
    Stale,
}

/// Where a click on the open lightbox landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed overlay around the image
    Background,
    /// The enlarged image itself
    Image,
    /// The close control
    CloseButton,
}

#[derive(Debug)]
pub struct ShopViewer {
    paths: ShopPaths,
    current_mode: ViewMode,
    displayed: DisplayedImage,
    modal: ModalState,
    generation: Generation,
    /// Request waiting for the fade delay to elapse
    pending: Option<LoadRequest>,
    /// Request handed out and not yet completed
    in_flight: Option<Generation>,
    error: Option<LoadError>,
}

impl ShopViewer {
    /// Create a viewer showing `initial_mode`.
    ///
    /// The initial image is requested right away, without a fade delay.
    pub fn new(paths: ShopPaths, initial_mode: ViewMode) -> (Self, LoadRequest) {
        let mut viewer = Self {
            paths,
            current_mode: initial_mode,
            displayed: DisplayedImage::default(),
            modal: ModalState::Closed,
            generation: Generation::default(),
            pending: None,
            in_flight: None,
            error: None,
        };

        viewer.generation = viewer.generation.next();
        let request = viewer.request_for_current();
        viewer.in_flight = Some(request.generation);

        (viewer, request)
    }

    pub fn paths(&self) -> &ShopPaths {
        &self.paths
    }

    pub fn current_mode(&self) -> ViewMode {
        self.current_mode
    }

    /// Whether the toggle button for `mode` is marked active
    pub fn is_active(&self, mode: ViewMode) -> bool {
        self.current_mode == mode
    }

    pub fn displayed(&self) -> &DisplayedImage {
        &self.displayed
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    /// A load is waiting for its delay or still running
    pub fn is_loading(&self) -> bool {
        self.pending.is_some() || self.in_flight.is_some()
    }

    /// Switch to `mode`.
    ///
    /// Selecting the active mode does nothing and returns `None`.
    /// Otherwise the image is hidden (fade-out), the previous load is
    /// invalidated, and the generation the caller must pass back to
    /// `fade_delay_elapsed` is returned.
    pub fn select_mode(&mut self, mode: ViewMode) -> Option<Generation> {
        if self.current_mode == mode {
            return None;
        }

        self.current_mode = mode;
        self.displayed.visibility = Visibility::Hidden;
        self.error = None;
        self.generation = self.generation.next();
        self.in_flight = None;
        self.pending = Some(self.request_for_current());

        tracing::debug!("selected {:?} (generation {:?})", mode, self.generation);

        Some(self.generation)
    }

    /// The fade delay for `generation` is over; returns the load to start.
    ///
    /// Returns `None` for a superseded generation or if the request was
    /// already handed out, so each selection yields at most one load.
    pub fn fade_delay_elapsed(&mut self, generation: Generation) -> Option<LoadRequest> {
        if generation != self.generation {
            return None;
        }

        let request = self.pending.take()?;
        self.in_flight = Some(request.generation);
        Some(request)
    }

    /// A load finished. Only the current generation may change what is shown.
    pub fn load_finished(
        &mut self,
        generation: Generation,
        result: Result<LoadedImage, LoadError>,
    ) -> LoadOutcome {
        if generation != self.generation || self.in_flight != Some(generation) {
            tracing::debug!("dropping stale load (generation {:?})", generation);
            return LoadOutcome::Stale;
        }

        self.in_flight = None;

        match result {
            Ok(image) => {
                tracing::info!("🖼️  Showing {}", image.path.display());
                self.displayed.image = Some(image);
                self.displayed.visibility = Visibility::Visible;
                self.error = None;
                LoadOutcome::Shown
            }
            Err(error) => {
                tracing::warn!("⚠️  {}", error);
                self.displayed.visibility = Visibility::Hidden;
                self.error = Some(error);
                LoadOutcome::Failed
            }
        }
    }

    /// Re-request the current mode's image after a failure.
    pub fn retry(&mut self) -> Option<LoadRequest> {
        if self.error.is_none() {
            return None;
        }

        self.error = None;
        self.generation = self.generation.next();
        self.pending = None;

        let request = self.request_for_current();
        self.in_flight = Some(request.generation);
        Some(request)
    }

    /// Open the lightbox with a copy of the image shown right now.
    ///
    /// Returns `false` (and stays closed) if no image has been shown yet.
    pub fn open_modal(&mut self) -> bool {
        match &self.displayed.image {
            Some(image) => {
                self.modal = ModalState::Open(image.clone());
                true
            }
            None => false,
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Route a click on the open lightbox. Clicking the image keeps it open.
    pub fn modal_clicked(&mut self, target: ModalClick) {
        match target {
            ModalClick::Background | ModalClick::CloseButton => self.close_modal(),
            ModalClick::Image => {}
        }
    }

    fn request_for_current(&self) -> LoadRequest {
        LoadRequest {
            mode: self.current_mode,
            path: self.paths.image_path(self.current_mode),
            generation: self.generation,
        }
    }
}
