//! # FOLIO UI
//!
//! The camera-page toggle for page-turning books: an overlay that is shown
//! only while the book rests on its cover and no page is being dragged.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   CameraPageToggle                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  awake  → ReferenceResolver      (once: bind the book)    │
//! │  update → VisibilitySynchronizer (every frame: rule+write)│
//! └──────────────────────────────────────────────────────────┘
//!        reads ↓                              writes ↓
//!   Book (current_page, dragging)     OverlayObject (active)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_core::{Binding, Book, OverlayObject, Scene, Scheduler};
//! use folio_ui::CameraPageToggle;
//!
//! let mut scene = Scene::new();
//! let (_, book) = scene.spawn("book", Book::new());
//! let (_, page) = scene.spawn("camera_page", OverlayObject::new("camera_page", false));
//!
//! let mut scheduler = Scheduler::default();
//! scheduler.add(CameraPageToggle::new(Some(Binding::new(&page))).with_book(Binding::new(&book)));
//! scheduler.tick(&scene);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera_page;
pub mod config;
pub mod resolver;
pub mod synchronizer;

pub use camera_page::CameraPageToggle;
pub use config::ToggleConfig;
pub use resolver::{ReferenceResolver, Resolution};
pub use synchronizer::{should_show, Missing, SyncOutcome, SyncStats, VisibilitySynchronizer};
