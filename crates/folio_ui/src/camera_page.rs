//! # Camera Page Toggle
//!
//! Shows the camera-facing page while the book rests closed on its cover and
//! hides it as soon as a page is turned or a drag gesture starts.
//!
//! The toggle is a [`Behaviour`]: `awake` resolves the book reference once,
//! `update` runs the visibility rule every frame. Both references are
//! non-owning. While either is missing the toggle does nothing.

use folio_core::{
    Activatable, Behaviour, Binding, Book, OverlayObject, PageSource, Scene, TickContext,
};

use crate::config::ToggleConfig;
use crate::resolver::{ReferenceResolver, Resolution};
use crate::synchronizer::{SyncOutcome, SyncStats, VisibilitySynchronizer};

/// Keeps an overlay visible only on the book's cover page.
#[derive(Debug)]
pub struct CameraPageToggle<B = Book, O = OverlayObject> {
    book: Option<Binding<B>>,
    overlay: Option<Binding<O>>,
    resolver: ReferenceResolver,
    synchronizer: VisibilitySynchronizer,
    config: ToggleConfig,
    inert: bool,
    missing_binding_warnings: u64,
}

impl<B, O> CameraPageToggle<B, O>
where
    B: PageSource + Send + Sync + 'static,
    O: Activatable,
{
    /// Creates a toggle driving `overlay`, with the book left to discovery.
    #[must_use]
    pub fn new(overlay: Option<Binding<O>>) -> Self {
        Self {
            book: None,
            overlay,
            resolver: ReferenceResolver::new(),
            synchronizer: VisibilitySynchronizer::new(),
            config: ToggleConfig::default(),
            inert: false,
            missing_binding_warnings: 0,
        }
    }

    /// Injects the book reference, bypassing discovery.
    #[must_use]
    pub fn with_book(mut self, book: Binding<B>) -> Self {
        self.book = Some(book);
        self
    }

    /// Applies a configuration. A resolver that already ran stays spent.
    #[must_use]
    pub fn with_config(mut self, config: ToggleConfig) -> Self {
        self.resolver.set_search_scene(config.resolve_book_from_scene);
        self.config = config;
        self
    }

    /// Resolves the book reference from `scene`. Only the first call acts.
    pub fn resolve(&mut self, scene: &Scene) -> Resolution {
        let resolution = self.resolver.resolve(&mut self.book, scene);
        match resolution {
            Resolution::Discovered => tracing::info!("Camera page toggle bound to scene book"),
            Resolution::NotFound => tracing::debug!("Camera page toggle found no book"),
            Resolution::Preset | Resolution::AlreadyRan => {}
        }
        resolution
    }

    /// Runs one synchronization tick.
    pub fn tick(&mut self) -> SyncOutcome {
        let outcome = self
            .synchronizer
            .sync(self.book.as_ref(), self.overlay.as_ref());

        match outcome {
            SyncOutcome::Inert(missing) if !self.inert => {
                self.inert = true;
                if self.config.warn_on_missing_binding {
                    self.missing_binding_warnings += 1;
                    tracing::warn!(
                        "Camera page toggle inert (book missing: {}, overlay missing: {})",
                        missing.book,
                        missing.overlay
                    );
                }
            }
            SyncOutcome::Inert(_) => {}
            _ if self.inert => {
                self.inert = false;
                tracing::debug!("Camera page toggle active again");
            }
            _ => {}
        }
        outcome
    }

    /// Returns true if a live book is bound.
    #[must_use]
    pub fn book_bound(&self) -> bool {
        self.book.as_ref().is_some_and(Binding::is_alive)
    }

    /// Returns true if a live overlay is bound.
    #[must_use]
    pub fn overlay_bound(&self) -> bool {
        self.overlay.as_ref().is_some_and(Binding::is_alive)
    }

    /// Returns true if the last tick found a reference missing.
    #[inline]
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.inert
    }

    /// Number of missing-binding warnings logged so far.
    #[inline]
    #[must_use]
    pub const fn missing_binding_warnings(&self) -> u64 {
        self.missing_binding_warnings
    }

    /// Returns the synchronizer counters.
    #[inline]
    #[must_use]
    pub const fn sync_stats(&self) -> SyncStats {
        self.synchronizer.stats()
    }

    /// Returns the active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ToggleConfig {
        &self.config
    }
}

impl<B, O> Behaviour for CameraPageToggle<B, O>
where
    B: PageSource + Send + Sync + 'static,
    O: Activatable,
{
    fn name(&self) -> &str {
        "camera_page_toggle"
    }

    fn awake(&mut self, scene: &Scene) {
        self.resolve(scene);
    }

    fn update(&mut self, _ctx: &TickContext) {
        self.tick();
    }
}
