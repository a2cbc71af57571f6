use std::time::Duration;

/// Offset between consecutive categories once the section is revealed.
pub const CATEGORY_STAGGER: Duration = Duration::from_millis(200);
/// Offset between consecutive entries inside one category.
pub const ENTRY_STAGGER: Duration = Duration::from_millis(100);
/// Length of the CSS width transition that fills a bar.
pub const FILL_TRANSITION_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Frameworks,
    Tools,
}

impl SkillCategory {
    /// Display order, left to right.
    pub const ALL: [SkillCategory; 3] = [Self::Frontend, Self::Frameworks, Self::Tools];

    pub fn title(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend Technologies",
            Self::Frameworks => "Frameworks & Libraries",
            Self::Tools => "Tools & Technologies",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Frontend => "💻",
            Self::Frameworks => "⚛️",
            Self::Tools => "🛠️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub percentage: u8,
    pub category: SkillCategory,
}

impl SkillEntry {
    pub const fn new(name: &'static str, percentage: u8, category: SkillCategory) -> Self {
        Self {
            name,
            percentage,
            category,
        }
    }
}

/// Groups entries by category in `SkillCategory::ALL` order, keeping the
/// original order inside each group.
pub fn group_by_category(skills: &[SkillEntry]) -> Vec<(SkillCategory, Vec<SkillEntry>)> {
    SkillCategory::ALL
        .iter()
        .map(|&category| {
            let entries = skills
                .iter()
                .filter(|s| s.category == category)
                .copied()
                .collect::<Vec<_>>();
            (category, entries)
        })
        .collect()
}

pub fn stagger_delay(category_index: usize, entry_index: usize) -> Duration {
    CATEGORY_STAGGER * category_index as u32 + ENTRY_STAGGER * entry_index as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarPhase {
    Waiting,
    Scheduled,
    Filled,
    Cancelled,
}

/// Displayed state of one skill bar.
///
/// The bar jumps straight from 0 to its target; the smooth fill is the
/// rendering layer's transition. Once cancelled nothing moves it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    target: u8,
    delay: Duration,
    displayed: u8,
    phase: BarPhase,
}

impl SkillBar {
    pub fn new(entry: &SkillEntry, delay: Duration) -> Self {
        Self {
            target: entry.percentage.min(100),
            delay,
            displayed: 0,
            phase: BarPhase::Waiting,
        }
    }

    /// Arms the bar. Returns the delay to wait before `fire`, or `None` if the
    /// bar was already armed, filled or torn down.
    pub fn reveal(&mut self) -> Option<Duration> {
        if self.phase != BarPhase::Waiting {
            return None;
        }
        self.phase = BarPhase::Scheduled;
        Some(self.delay)
    }

    /// Called when the delay elapsed. Only a scheduled bar fills.
    pub fn fire(&mut self) -> bool {
        if self.phase != BarPhase::Scheduled {
            return false;
        }
        self.displayed = self.target;
        self.phase = BarPhase::Filled;
        true
    }

    /// Fires once `since_reveal` reaches the bar's delay.
    pub fn advance(&mut self, since_reveal: Duration) -> bool {
        if since_reveal < self.delay {
            return false;
        }
        self.fire()
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, BarPhase::Waiting | BarPhase::Scheduled) {
            self.phase = BarPhase::Cancelled;
        }
    }

    pub fn displayed(&self) -> u8 {
        self.displayed
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn phase(&self) -> BarPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SKILLS;

    fn bars() -> Vec<SkillBar> {
        group_by_category(SKILLS)
            .iter()
            .enumerate()
            .flat_map(|(ci, (_, entries))| {
                entries
                    .iter()
                    .enumerate()
                    .map(move |(ei, e)| SkillBar::new(e, stagger_delay(ci, ei)))
            })
            .collect()
    }

    #[test]
    fn test_grouping_keeps_order() {
        let groups = group_by_category(SKILLS);
        let categories = groups.iter().map(|(c, _)| *c).collect::<Vec<_>>();
        assert_eq!(categories, SkillCategory::ALL.to_vec());
        let frontend = groups[0].1.iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(
            frontend,
            vec!["React.js", "JavaScript", "HTML5", "CSS3", "TypeScript"]
        );
        assert_eq!(groups.iter().map(|(_, v)| v.len()).sum::<usize>(), SKILLS.len());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0), Duration::ZERO);
        assert_eq!(stagger_delay(0, 3), Duration::from_millis(300));
        assert_eq!(stagger_delay(2, 1), Duration::from_millis(500));
    }

    #[test]
    fn test_delays_stagger_within_and_across_categories() {
        let groups = group_by_category(SKILLS);
        for (ci, (_, entries)) in groups.iter().enumerate() {
            let delays = (0..entries.len())
                .map(|ei| stagger_delay(ci, ei))
                .collect::<Vec<_>>();
            assert!(delays
                .windows(2)
                .all(|w| w[1] == w[0] + ENTRY_STAGGER));
        }
        for ci in 1..groups.len() {
            assert_eq!(
                stagger_delay(ci, 0),
                stagger_delay(ci - 1, 0) + CATEGORY_STAGGER
            );
        }
        // categories overlap: a later category can start before an earlier one ends
        assert!(stagger_delay(1, 0) < stagger_delay(0, groups[0].1.len() - 1));
    }

    #[test]
    fn test_zero_before_reveal() {
        let mut bars = bars();
        for bar in bars.iter_mut() {
            // time passing without a reveal does nothing
            assert!(!bar.advance(Duration::from_secs(60)));
            assert_eq!(bar.displayed(), 0);
            assert_eq!(bar.phase(), BarPhase::Waiting);
        }
    }

    #[test]
    fn test_fills_exactly_after_delay() {
        let mut bars = bars();
        for bar in bars.iter_mut() {
            let delay = bar.reveal().expect("fresh bar should arm");
            if delay > Duration::ZERO {
                assert!(!bar.advance(delay - Duration::from_millis(1)));
                assert_eq!(bar.displayed(), 0);
            }
            assert!(bar.advance(delay));
            assert_eq!(bar.displayed(), bar.target());
            // no overshoot on later ticks
            assert!(!bar.advance(delay * 10));
            assert_eq!(bar.displayed(), bar.target());
        }
        let targets = bars.iter().map(SkillBar::displayed).collect::<Vec<_>>();
        let expected = SKILLS.iter().map(|s| s.percentage);
        // grouping preserves source order for this data set
        assert_eq!(targets, expected.collect::<Vec<_>>());
    }

    #[test]
    fn test_reveal_only_arms_once() {
        let mut bar = SkillBar::new(&SKILLS[0], Duration::from_millis(100));
        assert_eq!(bar.reveal(), Some(Duration::from_millis(100)));
        assert_eq!(bar.reveal(), None);
        assert!(bar.fire());
        assert_eq!(bar.reveal(), None);
        assert!(!bar.fire());
    }

    #[test]
    fn test_cancel_prevents_late_fire() {
        let mut bar = SkillBar::new(&SKILLS[2], stagger_delay(1, 2));
        bar.reveal();
        bar.cancel();
        assert!(!bar.advance(Duration::from_secs(5)));
        assert_eq!(bar.displayed(), 0);
        assert_eq!(bar.phase(), BarPhase::Cancelled);
    }

    #[test]
    fn test_cancel_after_fill_keeps_value() {
        let mut bar = SkillBar::new(&SKILLS[0], Duration::ZERO);
        bar.reveal();
        bar.fire();
        bar.cancel();
        assert_eq!(bar.phase(), BarPhase::Filled);
        assert_eq!(bar.displayed(), 90);
    }

    #[test]
    fn test_target_clamped() {
        let entry = SkillEntry::new("Overconfidence", 150, SkillCategory::Tools);
        let mut bar = SkillBar::new(&entry, Duration::ZERO);
        bar.reveal();
        bar.fire();
        assert_eq!(bar.displayed(), 100);
    }
}
