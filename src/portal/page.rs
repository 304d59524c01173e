// SPDX-License-Identifier: MPL-2.0
//! The six portal pages, in navigation order.

/// A page behind the PIN gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    #[default]
    Home,
    Photos,
    Timeline,
    Letters,
    Quiz,
    Valentine,
}

impl Page {
    /// All pages in display order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Photos,
        Page::Timeline,
        Page::Letters,
        Page::Quiz,
        Page::Valentine,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const FIRST: Page = Page::Home;
    pub const LAST: Page = Page::Valentine;

    /// Position of the page in navigation order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The page at `index`, clamped into range so any integer is accepted.
    #[must_use]
    pub fn clamped(index: i64) -> Page {
        let last = (Self::COUNT - 1) as i64;
        // The clamp keeps the value in 0..COUNT, so the cast cannot truncate.
        Self::ALL[index.clamp(0, last) as usize]
    }

    /// The page `delta` steps away, stopping at either end.
    #[must_use]
    pub fn offset(self, delta: i64) -> Page {
        Self::clamped((self.index() as i64).saturating_add(delta))
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Photos => "Photos",
            Page::Timeline => "Timeline",
            Page::Letters => "Letters",
            Page::Quiz => "Quiz",
            Page::Valentine => "Valentine",
        }
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_display_order() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(Page::clamped(i as i64), *page);
        }
    }

    #[test]
    fn clamped_handles_out_of_range() {
        assert_eq!(Page::clamped(-1), Page::Home);
        assert_eq!(Page::clamped(6), Page::Valentine);
        assert_eq!(Page::clamped(i64::MIN), Page::Home);
        assert_eq!(Page::clamped(i64::MAX), Page::Valentine);
    }

    #[test]
    fn offset_stops_at_the_ends() {
        assert_eq!(Page::Home.offset(-1), Page::Home);
        assert_eq!(Page::Valentine.offset(1), Page::Valentine);
        assert_eq!(Page::Photos.offset(2), Page::Letters);
        assert_eq!(Page::Quiz.offset(i64::MAX), Page::Valentine);
        assert_eq!(Page::Quiz.offset(i64::MIN), Page::Home);
    }

    #[test]
    fn labels_match_navigation_buttons() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["Home", "Photos", "Timeline", "Letters", "Quiz", "Valentine"]
        );
    }
}
