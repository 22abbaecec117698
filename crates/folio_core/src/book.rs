//! # Book Page State
//!
//! The live page-turn state of a book. Only the book controller writes it;
//! everything else reads it through [`PageSource`].

/// Page index of the cover (book closed).
pub const COVER_PAGE: i32 = 0;

/// Read-only view of a book's page-turn state.
pub trait PageSource {
    /// Current active page index, 0-based. `0` is the cover.
    fn current_page(&self) -> i32;

    /// True while a page-turn drag gesture is in progress.
    fn is_page_dragging(&self) -> bool;
}

/// Page-turn state owned by the book controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Book {
    current_page: i32,
    page_dragging: bool,
}

impl Book {
    /// Creates a closed book (cover page, no drag).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_page: COVER_PAGE,
            page_dragging: false,
        }
    }

    /// Creates a book opened at `page`.
    #[must_use]
    pub const fn opened_at(page: i32) -> Self {
        Self {
            current_page: page,
            page_dragging: false,
        }
    }

    /// Jumps directly to `page`.
    pub fn set_current_page(&mut self, page: i32) {
        self.current_page = page;
    }

    /// Starts a page-turn gesture.
    pub fn begin_drag(&mut self) {
        self.page_dragging = true;
    }

    /// Ends the running gesture without changing page.
    pub fn end_drag(&mut self) {
        self.page_dragging = false;
    }

    /// Ends the running gesture, landing on `page`.
    pub fn turn_to(&mut self, page: i32) {
        self.current_page = page;
        self.page_dragging = false;
    }
}

impl PageSource for Book {
    #[inline]
    fn current_page(&self) -> i32 {
        self.current_page
    }

    #[inline]
    fn is_page_dragging(&self) -> bool {
        self.page_dragging
    }
}
