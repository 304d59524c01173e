// SPDX-License-Identifier: MPL-2.0
//! Per-visitor session state.
//!
//! The session lives as long as the application window. All transitions are
//! plain methods so the update loop and the tests drive it the same way.

use super::page::Page;
use crate::app::config::secrets::Pin;
use std::collections::BTreeMap;
use std::fmt;

/// The visitor's answer on the Valentine page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValentineAnswer {
    Yes,
    DefinitelyYes,
}

impl ValentineAnswer {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ValentineAnswer::Yes => "Yes",
            ValentineAnswer::DefinitelyYes => "Definitely Yes",
        }
    }
}

/// Returned by [`Session::submit_pin`] when the candidate does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRejected;

impl fmt::Display for PinRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PIN rejected")
    }
}

impl std::error::Error for PinRejected {}

/// A page transition reported by [`Session::observe_render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// `None` on the first cycle after startup.
    pub from: Option<Page>,
    pub to: Page,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    unlocked: bool,
    current: Page,
    last_rendered: Option<Page>,
    quiz_submitted: bool,
    valentine_answer: Option<ValentineAnswer>,
    letter_flags: BTreeMap<usize, bool>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.current
    }

    #[must_use]
    pub fn last_rendered(&self) -> Option<Page> {
        self.last_rendered
    }

    #[must_use]
    pub fn quiz_submitted(&self) -> bool {
        self.quiz_submitted
    }

    #[must_use]
    pub fn valentine_answer(&self) -> Option<ValentineAnswer> {
        self.valentine_answer
    }

    /// Unlocks the portal when `candidate`, ignoring surrounding whitespace,
    /// is the configured PIN. A rejected attempt changes nothing.
    pub fn submit_pin(&mut self, candidate: &str, pin: &Pin) -> Result<(), PinRejected> {
        if pin.matches(candidate) {
            self.unlocked = true;
            Ok(())
        } else {
            Err(PinRejected)
        }
    }

    /// Moves `delta` pages, stopping at the first and last page.
    pub fn navigate(&mut self, delta: i64) {
        self.current = self.current.offset(delta);
    }

    /// Goes to the page at `index`, clamped into range.
    pub fn jump_to(&mut self, index: i64) {
        self.current = Page::clamped(index);
    }

    pub fn toggle_letter(&mut self, index: usize) {
        let open = self.letter_flags.entry(index).or_insert(false);
        *open = !*open;
    }

    #[must_use]
    pub fn is_letter_open(&self, index: usize) -> bool {
        self.letter_flags.get(&index).copied().unwrap_or(false)
    }

    /// Number of letters with a recorded flag.
    #[must_use]
    pub fn tracked_letters(&self) -> usize {
        self.letter_flags.len()
    }

    pub fn submit_quiz(&mut self) {
        self.quiz_submitted = true;
    }

    pub fn choose_valentine(&mut self, answer: ValentineAnswer) {
        self.valentine_answer = Some(answer);
    }

    /// Records that the current page is on screen.
    ///
    /// Returns the transition the first time a new page is observed and
    /// `None` on every later call until the page changes again. While on the
    /// Letters page every letter below `letter_count` gets a closed flag if
    /// it has none yet.
    pub fn observe_render(&mut self, letter_count: usize) -> Option<PageChange> {
        if self.current == Page::Letters {
            for index in 0..letter_count {
                self.letter_flags.entry(index).or_insert(false);
            }
        }

        if self.last_rendered == Some(self.current) {
            return None;
        }

        let change = PageChange {
            from: self.last_rendered,
            to: self.current,
        };
        self.last_rendered = Some(self.current);
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin() -> Pin {
        Pin::new("2808")
    }

    #[test]
    fn starts_locked_on_home() {
        let session = Session::new();
        assert!(!session.is_unlocked());
        assert_eq!(session.current_page(), Page::Home);
        assert_eq!(session.last_rendered(), None);
        assert!(!session.quiz_submitted());
        assert_eq!(session.valentine_answer(), None);
    }

    #[test]
    fn correct_pin_unlocks() {
        let mut session = Session::new();
        assert_eq!(session.submit_pin("2808", &pin()), Ok(()));
        assert!(session.is_unlocked());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut session = Session::new();
        assert!(session.submit_pin("  2808\n", &pin()).is_ok());
    }

    #[test]
    fn wrong_pin_stays_locked() {
        let mut session = Session::new();
        assert_eq!(session.submit_pin("1234", &pin()), Err(PinRejected));
        assert_eq!(session.submit_pin("", &pin()), Err(PinRejected));
        assert!(!session.is_unlocked());
    }

    #[test]
    fn navigate_stays_in_range_for_any_delta() {
        let deltas = [i64::MIN, -100, -7, -1, 0, 1, 2, 5, 6, 100, i64::MAX];
        for start in 0..Page::COUNT as i64 {
            for delta in deltas {
                let mut session = Session::new();
                session.jump_to(start);
                session.navigate(delta);
                assert!(session.current_page().index() < Page::COUNT);
            }
        }
    }

    #[test]
    fn navigate_steps_and_clamps() {
        let mut session = Session::new();
        session.navigate(-1);
        assert_eq!(session.current_page(), Page::Home);
        session.navigate(1);
        assert_eq!(session.current_page(), Page::Photos);
        session.navigate(10);
        assert_eq!(session.current_page(), Page::Valentine);
        session.navigate(1);
        assert_eq!(session.current_page(), Page::Valentine);
    }

    #[test]
    fn jump_to_clamps_out_of_range() {
        let mut session = Session::new();
        session.jump_to(3);
        assert_eq!(session.current_page(), Page::Letters);
        session.jump_to(42);
        assert_eq!(session.current_page(), Page::Valentine);
        session.jump_to(-3);
        assert_eq!(session.current_page(), Page::Home);
    }

    #[test]
    fn toggle_twice_restores_and_indices_are_independent() {
        let mut session = Session::new();
        session.toggle_letter(0);
        assert!(session.is_letter_open(0));
        assert!(!session.is_letter_open(1));
        session.toggle_letter(1);
        session.toggle_letter(0);
        assert!(!session.is_letter_open(0));
        assert!(session.is_letter_open(1));
    }

    #[test]
    fn quiz_and_valentine_are_recorded() {
        let mut session = Session::new();
        session.submit_quiz();
        session.choose_valentine(ValentineAnswer::DefinitelyYes);
        assert!(session.quiz_submitted());
        assert_eq!(session.valentine_answer(), Some(ValentineAnswer::DefinitelyYes));
        session.choose_valentine(ValentineAnswer::Yes);
        assert_eq!(session.valentine_answer(), Some(ValentineAnswer::Yes));
    }

    #[test]
    fn observe_render_fires_once_per_change() {
        let mut session = Session::new();
        assert_eq!(
            session.observe_render(0),
            Some(PageChange {
                from: None,
                to: Page::Home
            })
        );
        assert_eq!(session.observe_render(0), None);

        session.navigate(1);
        assert_eq!(
            session.observe_render(0),
            Some(PageChange {
                from: Some(Page::Home),
                to: Page::Photos
            })
        );
        assert_eq!(session.observe_render(0), None);

        // Jumping to the page already shown is not a change.
        session.jump_to(1);
        assert_eq!(session.observe_render(0), None);
    }

    #[test]
    fn letters_page_seeds_closed_flags() {
        let mut session = Session::new();
        session.observe_render(3);
        assert_eq!(session.tracked_letters(), 0);

        session.toggle_letter(1);
        session.jump_to(Page::Letters.index() as i64);
        session.observe_render(3);
        assert_eq!(session.tracked_letters(), 3);
        assert!(!session.is_letter_open(0));
        assert!(session.is_letter_open(1));
        assert!(!session.is_letter_open(2));
    }

    #[test]
    fn valentine_labels() {
        assert_eq!(ValentineAnswer::Yes.label(), "Yes");
        assert_eq!(ValentineAnswer::DefinitelyYes.label(), "Definitely Yes");
    }
}
