//! Hero background rotation state machine.
//!
//! The rotator owns the rotation cursor and a single timer slot. Automatic
//! ticks and user selections funnel through the same display primitive;
//! the only divergent policy is the deadline armed afterwards (standard
//! interval for ticks, longer cooldown after a selection).

use std::time::Duration;

use tokio::time::Instant;

use super::catalog::{CatalogError, ImageCatalog};
use super::stage::Stage;

/// Time between automatic image advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(6000);

/// Delay after a user selection before automatic rotation resumes.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(9000);

/// Timing configuration for the rotator. The interval and the cooldown are
/// independent values; neither is derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorTiming {
    pub interval: Duration,
    pub cooldown: Duration,
}

impl Default for RotatorTiming {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Cycles the hero background through the catalog on a timed interval,
/// with direct user selection and hover-driven suspension.
#[derive(Debug)]
pub struct Rotator {
    catalog: ImageCatalog,
    current_index: usize,
    // The single timer slot. None while suspended.
    next_tick: Option<Instant>,
    timing: RotatorTiming,
}

impl Rotator {
    /// Create a rotator positioned on `default_key`, not yet rotating.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownDefault` if `default_key` is not in
    /// the catalog.
    pub fn new(
        catalog: ImageCatalog,
        default_key: &str,
        timing: RotatorTiming,
    ) -> Result<Self, CatalogError> {
        let current_index = catalog
            .index_of(default_key)
            .ok_or_else(|| CatalogError::UnknownDefault(default_key.to_string()))?;

        Ok(Self {
            catalog,
            current_index,
            next_tick: None,
            timing,
        })
    }

    /// Display the default image and start automatic rotation.
    pub fn initialize(&mut self, stage: &mut Stage) {
        self.display_index(self.current_index, stage);
        self.resume();
    }

    /// Display the image for `key` and move the cursor to its position.
    ///
    /// Returns `false` (leaving all state untouched) if `key` is not in
    /// the catalog.
    pub fn display_image(&mut self, key: &str, stage: &mut Stage) -> bool {
        match self.catalog.index_of(key) {
            Some(index) => {
                self.display_index(index, stage);
                true
            }
            None => false,
        }
    }

    /// User-triggered override: display `key` immediately and hold off
    /// automatic rotation for the cooldown, counted from now rather than
    /// from the original schedule.
    ///
    /// Unknown keys are ignored and the pending schedule is left as is.
    pub fn select_category(&mut self, key: &str, stage: &mut Stage) -> bool {
        if self.display_image(key, stage) {
            self.arm(self.timing.cooldown);
            true
        } else {
            log::debug!("ignoring selection of unknown category '{}'", key);
            false
        }
    }

    /// Cancel the pending automatic tick. Safe to call while already
    /// suspended.
    pub fn pause(&mut self) {
        self.next_tick = None;
    }

    /// (Re)start automatic rotation with a fresh full-length interval,
    /// replacing any armed deadline.
    pub fn resume(&mut self) {
        self.arm(self.timing.interval);
    }

    /// Handle an expired deadline: advance to the next image and re-arm
    /// the standard interval.
    pub fn on_tick(&mut self, stage: &mut Stage) {
        self.advance(stage);
        self.arm(self.timing.interval);
    }

    /// Cyclic advance: next index with wrap-around, no skipping.
    fn advance(&mut self, stage: &mut Stage) {
        let next = (self.current_index + 1) % self.catalog.len();
        self.display_index(next, stage);
    }

    fn display_index(&mut self, index: usize, stage: &mut Stage) {
        self.current_index = index;
        let entry = self.catalog.entry_at(index);
        stage.set_background(&entry.url);
        log::debug!("hero background set to '{}' ({})", entry.key, entry.url);
    }

    // The replace-timer primitive: every arm overwrites whatever deadline
    // was pending, so at most one is ever alive.
    fn arm(&mut self, delay: Duration) {
        self.next_tick = Some(Instant::now() + delay);
    }

    /// Deadline of the pending automatic tick, if rotation is running.
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Whether automatic rotation is currently suspended.
    pub fn is_suspended(&self) -> bool {
        self.next_tick.is_none()
    }

    /// Position of the currently displayed image.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Category key of the currently displayed image.
    pub fn current_key(&self) -> &str {
        &self.catalog.entry_at(self.current_index).key
    }

    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }
}
