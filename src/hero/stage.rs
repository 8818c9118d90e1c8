//! Presentation state for the hero region.
//!
//! `Stage` stands in for the hero's background and content layers: the
//! current background image, the visibility transition flag, and the
//! one-shot reveal flag on the content area. The driver mutates it and the
//! embedding surface renders from it.

/// Render surface for the hero section.
///
/// The visibility flag is not applied in `set_background` itself: it is
/// armed there and applied by the next `frame()` call, one presentation
/// frame later, so the CSS-style transition has a frame to start from.
#[derive(Debug, Default)]
pub struct Stage {
    background: Option<String>,
    visible: bool,
    visible_pending: bool,
    revealed: bool,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background image and arm the visibility flag for the next
    /// frame.
    pub fn set_background(&mut self, url: &str) {
        self.background = Some(url.to_string());
        self.visible_pending = true;
    }

    /// Advance one presentation frame, applying a pending visibility flag.
    pub fn frame(&mut self) {
        if self.visible_pending {
            self.visible = true;
            self.visible_pending = false;
        }
    }

    /// Mark the content area as revealed. Never un-set.
    pub fn reveal(&mut self) {
        if !self.revealed {
            self.revealed = true;
            log::debug!("hero content revealed");
        }
    }

    /// Currently staged background URL.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Whether the visibility transition flag is set.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the content area has been revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stage_is_blank() {
        let stage = Stage::new();
        assert!(stage.background().is_none());
        assert!(!stage.is_visible());
        assert!(!stage.is_revealed());
    }

    #[test]
    fn test_visibility_applies_one_frame_after_background() {
        let mut stage = Stage::new();
        stage.set_background("a.jpg");

        // Background is staged immediately, visibility waits for the frame.
        assert_eq!(stage.background(), Some("a.jpg"));
        assert!(!stage.is_visible());

        stage.frame();
        assert!(stage.is_visible());
    }

    #[test]
    fn test_frame_without_pending_change_is_noop() {
        let mut stage = Stage::new();
        stage.frame();
        assert!(!stage.is_visible());

        stage.set_background("a.jpg");
        stage.frame();
        stage.frame();
        assert!(stage.is_visible());
    }

    #[test]
    fn test_visibility_persists_across_background_changes() {
        let mut stage = Stage::new();
        stage.set_background("a.jpg");
        stage.frame();

        // The flag is re-requested but never cleared once set.
        stage.set_background("b.jpg");
        assert!(stage.is_visible());
        assert_eq!(stage.background(), Some("b.jpg"));
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut stage = Stage::new();
        stage.reveal();
        stage.reveal();
        assert!(stage.is_revealed());
    }
}
