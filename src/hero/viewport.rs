//! One-shot viewport reveal watcher.

/// Fraction of the hero section that must be visible before the content
/// reveal fires.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.2;

/// Watches visibility reports for the hero section and fires exactly once
/// when the threshold is first reached. After firing it detaches: later
/// reports are ignored even if the section leaves and re-enters view.
#[derive(Debug)]
pub struct RevealWatcher {
    threshold: f32,
    fired: bool,
}

impl RevealWatcher {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            fired: false,
        }
    }

    /// Feed a visibility ratio in `[0.0, 1.0]`. Returns `true` exactly
    /// once, on the first report at or above the threshold.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.fired || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the watcher has fired and detached.
    pub fn is_detached(&self) -> bool {
        self.fired
    }
}

impl Default for RevealWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}
