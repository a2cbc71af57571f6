use std::time::Duration;

pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);

/// Reveals a fixed string one character per tick.
///
/// The cursor counts characters, not bytes. Reaching the end is terminal, and
/// so is `cancel`: no tick after either changes the displayed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    len: usize,
    cursor: usize,
    cancelled: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            cursor: 0,
            cancelled: false,
        }
    }

    /// Appends the next character. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Runs every tick that fits in `elapsed` since mount.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = (elapsed.as_millis() / TYPE_INTERVAL.as_millis()) as usize;
        let mut ticked = 0;
        while self.cursor < due && self.tick() {
            ticked += 1;
        }
        ticked
    }

    pub fn displayed(&self) -> &str {
        match self.text.char_indices().nth(self.cursor) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.cancelled || self.cursor >= self.len
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HERO_TITLE;

    #[test]
    fn test_starts_empty() {
        let tw = Typewriter::new(HERO_TITLE);
        assert_eq!(tw.displayed(), "");
        assert_eq!(tw.cursor(), 0);
        assert!(!tw.is_done());
    }

    #[test]
    fn test_prefix_after_each_interval() {
        let len = HERO_TITLE.chars().count();
        for n in 0..=len {
            let mut tw = Typewriter::new(HERO_TITLE);
            tw.advance(TYPE_INTERVAL * n as u32);
            assert_eq!(tw.displayed(), &HERO_TITLE[..n]);
        }
    }

    #[test]
    fn test_stops_at_end() {
        let mut tw = Typewriter::new(HERO_TITLE);
        let ticks = std::iter::from_fn(|| tw.tick().then_some(())).count();
        assert_eq!(ticks, "Front-End Developer".len());
        assert!(tw.is_done());
        assert_eq!(tw.advance(Duration::from_secs(60)), 0);
        assert_eq!(tw.displayed(), HERO_TITLE);
    }

    #[test]
    fn test_partial_advance_is_cumulative() {
        let mut tw = Typewriter::new(HERO_TITLE);
        assert_eq!(tw.advance(Duration::from_millis(350)), 3);
        assert_eq!(tw.advance(Duration::from_millis(550)), 2);
        assert_eq!(tw.displayed(), "Front");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut tw = Typewriter::new("Dév–1");
        tw.advance(TYPE_INTERVAL * 2);
        assert_eq!(tw.displayed(), "Dé");
        tw.advance(TYPE_INTERVAL * 4);
        assert_eq!(tw.displayed(), "Dév–");
    }

    #[test]
    fn test_cancel_freezes_prefix() {
        let mut tw = Typewriter::new(HERO_TITLE);
        tw.advance(TYPE_INTERVAL * 5);
        tw.cancel();
        assert!(!tw.tick());
        assert_eq!(tw.advance(Duration::from_secs(10)), 0);
        assert_eq!(tw.displayed(), "Front");
    }
}
