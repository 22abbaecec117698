//! # Visibility Synchronizer
//!
//! Polls the book every tick and mirrors the cover rule onto the overlay:
//!
//! ```text
//! visible  <=>  current_page == 0  &&  !is_page_dragging
//! ```
//!
//! ## States
//!
//! - **Visible**: book closed on its cover, no gesture running.
//! - **Hidden**: any other page, or any page while dragging.
//!
//! Self-transitions never reach the overlay. `set_active` fans out to
//! observers, so the overlay is written only when the flag actually flips.

use folio_core::{Activatable, Binding, PageSource, COVER_PAGE};

/// The cover rule: show only on page 0 with no drag in progress.
#[inline]
#[must_use]
pub const fn should_show(current_page: i32, is_page_dragging: bool) -> bool {
    current_page == COVER_PAGE && !is_page_dragging
}

/// Which references were unavailable on an inert tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Missing {
    /// The book binding is unset or its target was dropped.
    pub book: bool,
    /// The overlay binding is unset or its target was dropped.
    pub overlay: bool,
}

/// Result of one synchronization tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A reference was missing; nothing was read or written.
    Inert(Missing),
    /// The overlay already matched the rule.
    Unchanged,
    /// The overlay was switched on.
    Shown,
    /// The overlay was switched off.
    Hidden,
}

impl SyncOutcome {
    /// Returns true if this tick wrote to the overlay.
    #[inline]
    #[must_use]
    pub const fn wrote(self) -> bool {
        matches!(self, Self::Shown | Self::Hidden)
    }
}

/// Counters over the synchronizer's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Ticks run.
    pub ticks: u64,
    /// Ticks that wrote to the overlay.
    pub writes: u64,
    /// Ticks skipped for a missing reference.
    pub inert_ticks: u64,
}

/// Applies the cover rule to an overlay, writing only on change.
#[derive(Debug, Default)]
pub struct VisibilitySynchronizer {
    stats: SyncStats,
}

impl VisibilitySynchronizer {
    /// Creates a synchronizer with zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stats: SyncStats {
                ticks: 0,
                writes: 0,
                inert_ticks: 0,
            },
        }
    }

    /// Runs one tick against the given bindings.
    pub fn sync<B, O>(&mut self, book: Option<&Binding<B>>, overlay: Option<&Binding<O>>) -> SyncOutcome
    where
        B: PageSource,
        O: Activatable,
    {
        self.stats.ticks += 1;

        let book = book.and_then(Binding::upgrade);
        let overlay = overlay.and_then(Binding::upgrade);
        let (Some(book), Some(overlay)) = (book.as_ref(), overlay.as_ref()) else {
            self.stats.inert_ticks += 1;
            return SyncOutcome::Inert(Missing {
                book: book.is_none(),
                overlay: overlay.is_none(),
            });
        };

        let (page, dragging) = {
            let book = book.read();
            (book.current_page(), book.is_page_dragging())
        };
        let show = should_show(page, dragging);

        if overlay.read().active_self() == show {
            return SyncOutcome::Unchanged;
        }

        overlay.write().set_active(show);
        self.stats.writes += 1;
        tracing::debug!(
            "Camera page {} (page: {}, dragging: {})",
            if show { "shown" } else { "hidden" },
            page,
            dragging
        );

        if show {
            SyncOutcome::Shown
        } else {
            SyncOutcome::Hidden
        }
    }

    /// Returns the lifetime counters.
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SyncStats {
        self.stats
    }
}
