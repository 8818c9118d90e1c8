//! Hero background rotator.
//!
//! The one stateful component of the behavior layer: an ordered image
//! catalog cycled on a timed interval, with user-triggered selection,
//! hover-driven suspension, fire-and-forget preloading, and a one-shot
//! reveal when the section first scrolls into view.

mod catalog;
pub mod driver;
mod preload;
mod rotator;
mod stage;
mod viewport;

pub use catalog::{CatalogEntry, CatalogError, ImageCatalog};
pub use driver::HeroEvent;
pub use preload::preload_all;
pub use rotator::{Rotator, RotatorTiming, DEFAULT_COOLDOWN, DEFAULT_INTERVAL};
pub use stage::Stage;
pub use viewport::{RevealWatcher, DEFAULT_REVEAL_THRESHOLD};
