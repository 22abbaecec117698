//! # FOLIO Core
//!
//! Host-side collaborators for page-turning book scenes:
//! - Owning [`Shared`] handles and non-owning [`Binding`]s
//! - [`Book`] page-turn state behind the read-only [`PageSource`] trait
//! - [`OverlayObject`] display objects behind the [`Activatable`] trait
//! - A [`Scene`] registry for object discovery
//! - The [`Behaviour`] lifecycle and the frame [`Scheduler`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_core::{Book, Scene, Scheduler};
//!
//! let mut scene = Scene::new();
//! let (_, book) = scene.spawn("book", Book::new());
//! let mut scheduler = Scheduler::default();
//! scheduler.add(my_behaviour);
//! loop {
//!     scheduler.tick(&scene);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod book;
pub mod config;
pub mod error;
pub mod handle;
pub mod overlay;
pub mod scene;
pub mod schedule;

pub use book::{Book, PageSource, COVER_PAGE};
pub use config::{from_toml_str, load_toml, SchedulerConfig, Validate};
pub use error::{ConfigError, ConfigResult};
pub use handle::{shared, Binding, Shared};
pub use overlay::{Activatable, ActivationObserver, OverlayObject};
pub use scene::{ObjectId, Scene};
pub use schedule::{Behaviour, BehaviourId, FrameStats, FrameStatsAccumulator, Scheduler, TickContext};
