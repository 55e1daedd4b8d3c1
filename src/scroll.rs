//! Scroll-derived view state: the back-to-top threshold and the one-way
//! reveal transition used by the intersection observer.

/// Offset in CSS pixels past which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 100.0;

/// Fraction of an element's area that must intersect the viewport before it
/// reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Marker class on content blocks that start hidden.
pub const REVEAL_PENDING_CLASS: &str = "animate-on-scroll";

/// Class added once a block has revealed; never removed.
pub const REVEAL_DONE_CLASS: &str = "animate-visible";

pub fn past_back_to_top_threshold(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD_PX
}

/// Reveal state is a latch: an element that has revealed stays revealed even
/// when a later observation reports it out of view.
pub fn should_reveal(already_revealed: bool, intersecting: bool) -> bool {
    already_revealed || intersecting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_to_top_boundary() {
        assert!(!past_back_to_top_threshold(99.0));
        assert!(!past_back_to_top_threshold(100.0));
        assert!(past_back_to_top_threshold(101.0));
    }

    #[test]
    fn back_to_top_hides_again_below_threshold() {
        assert!(past_back_to_top_threshold(400.0));
        assert!(!past_back_to_top_threshold(0.0));
    }

    #[test]
    fn reveal_is_one_directional() {
        // Not yet visible, not intersecting: stays hidden.
        assert!(!should_reveal(false, false));
        // First intersection reveals.
        assert!(should_reveal(false, true));
        // Scrolled back out of view after revealing: stays revealed.
        assert!(should_reveal(true, false));
        assert!(should_reveal(true, true));
    }

    #[test]
    fn reveal_threshold_is_a_tenth() {
        assert_eq!(REVEAL_THRESHOLD, 0.1);
    }
}
