/// Fraction of the observed container that must be on screen.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// A visibility sample from whatever primitive watches the container.
pub trait Visibility {
    fn is_intersecting(&self) -> bool;
    fn visible_fraction(&self) -> f64;
}

impl Visibility for f64 {
    fn is_intersecting(&self) -> bool {
        *self > 0.0
    }

    fn visible_fraction(&self) -> f64 {
        *self
    }
}

impl Visibility for web_sys::IntersectionObserverEntry {
    fn is_intersecting(&self) -> bool {
        web_sys::IntersectionObserverEntry::is_intersecting(self)
    }

    fn visible_fraction(&self) -> f64 {
        self.intersection_ratio()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

/// One-shot reveal flag. The only legal transition is
/// `Unrevealed -> Revealed`; nothing resets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    state: RevealState,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: RevealState::Unrevealed,
        }
    }

    /// Feeds one sample. Returns `true` only for the sample that flips the
    /// trigger, so the caller knows when to stop observing.
    pub fn observe<V: Visibility + ?Sized>(&mut self, sample: &V) -> bool {
        if self.state == RevealState::Revealed {
            return false;
        }
        if sample.is_intersecting() && sample.visible_fraction() >= self.threshold {
            self.state = RevealState::Revealed;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unrevealed() {
        let trigger = RevealTrigger::new();
        assert_eq!(trigger.state(), RevealState::Unrevealed);
        assert_eq!(trigger.threshold(), REVEAL_THRESHOLD);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut trigger = RevealTrigger::new();
        for fraction in [0.0, 0.05, 0.1, 0.19] {
            assert!(!trigger.observe(&fraction));
        }
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut trigger = RevealTrigger::new();
        let samples = [0.1, 0.25, 0.0, 0.9, 0.0, 0.5];
        let fired = samples
            .iter()
            .filter(|s| trigger.observe(*s))
            .count();
        assert_eq!(fired, 1);
        assert!(trigger.is_revealed());
    }

    #[test]
    fn test_never_hides_again() {
        let mut trigger = RevealTrigger::new();
        assert!(trigger.observe(&0.2));
        assert!(!trigger.observe(&0.0));
        assert_eq!(trigger.state(), RevealState::Revealed);
    }

    struct Sample {
        intersecting: bool,
        ratio: f64,
    }

    impl Visibility for Sample {
        fn is_intersecting(&self) -> bool {
            self.intersecting
        }

        fn visible_fraction(&self) -> f64 {
            self.ratio
        }
    }

    #[test]
    fn test_requires_intersection() {
        let mut trigger = RevealTrigger::with_threshold(0.0);
        assert!(!trigger.observe(&Sample {
            intersecting: false,
            ratio: 0.0,
        }));
        assert!(trigger.observe(&Sample {
            intersecting: true,
            ratio: 0.0,
        }));
    }

    #[test]
    fn test_initial_intersecting_sliver_does_not_reveal() {
        // the observer's first callback can report intersecting with a small ratio
        let mut trigger = RevealTrigger::new();
        assert!(!trigger.observe(&Sample {
            intersecting: true,
            ratio: 0.1,
        }));
        assert_eq!(trigger.state(), RevealState::Unrevealed);
        assert!(trigger.observe(&Sample {
            intersecting: true,
            ratio: 0.2,
        }));
    }
}
