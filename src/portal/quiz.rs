// SPDX-License-Identifier: MPL-2.0
//! Love quiz scoring.
//!
//! Scoring is pure: it looks at already collected answers and never mutates
//! anything. An answer counts only when it is exactly the expected string.

use crate::content::QuizQuestion;

/// A submitted answer: the chosen option text, or `None` when nothing was picked.
pub type Answer = Option<String>;

/// Feedback category for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Perfect,
    NearPerfect,
    Consolation,
}

/// Result of scoring a submitted quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    /// `floor(correct / total * 100)`.
    pub percentage: u8,
}

impl Score {
    /// Builds a score for a non-empty quiz. Returns `None` when `total` is 0.
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let correct = correct.min(total);
        // correct <= total, so the value is at most 100.
        let percentage = (correct * 100 / total) as u8;
        Some(Self {
            correct,
            total,
            percentage,
        })
    }

    /// Picks the feedback tier.
    ///
    /// One miss is "near perfect" only when something was answered right, so
    /// a single-question quiz answered wrongly is a consolation.
    #[must_use]
    pub fn tier(&self) -> Tier {
        if self.correct == self.total {
            Tier::Perfect
        } else if self.correct + 1 == self.total && self.correct > 0 {
            Tier::NearPerfect
        } else {
            Tier::Consolation
        }
    }

    /// The message shown above the progress bar.
    #[must_use]
    pub fn feedback(&self) -> String {
        let (correct, total) = (self.correct, self.total);
        match self.tier() {
            Tier::Perfect => format!("PERFECT SCORE: {correct}/{total} 💯💗"),
            Tier::NearPerfect => format!("Okayyyy smarty: {correct}/{total} 🌹"),
            Tier::Consolation => {
                format!("You got {correct}/{total} 😭 It’s okay, you’re still my favorite.")
            }
        }
    }
}

/// Scores `answers` against `questions`, position by position.
///
/// Answers past the end of `questions` are ignored; questions past the end of
/// `answers` count as unanswered. Returns `None` for an empty question set.
#[must_use]
pub fn score(answers: &[Answer], questions: &[QuizQuestion]) -> Option<Score> {
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| answer.as_deref() == Some(question.answer.as_str()))
        .count();
    Score::new(correct, questions.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(q: &str, options: &[&str], answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: q.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    fn sample() -> Vec<QuizQuestion> {
        vec![question("A", &["x", "y"], "x"), question("B", &["p", "q"], "q")]
    }

    fn answer(s: &str) -> Answer {
        Some(s.to_string())
    }

    #[test]
    fn all_correct_is_perfect() {
        let s = score(&[answer("x"), answer("q")], &sample()).expect("non-empty quiz");
        assert_eq!((s.correct, s.total, s.percentage), (2, 2, 100));
        assert_eq!(s.tier(), Tier::Perfect);
    }

    #[test]
    fn one_miss_is_near_perfect() {
        let s = score(&[answer("x"), None], &sample()).expect("non-empty quiz");
        assert_eq!((s.correct, s.percentage), (1, 50));
        assert_eq!(s.tier(), Tier::NearPerfect);
    }

    #[test]
    fn nothing_selected_is_consolation() {
        let s = score(&[None, None], &sample()).expect("non-empty quiz");
        assert_eq!((s.correct, s.percentage), (0, 0));
        assert_eq!(s.tier(), Tier::Consolation);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let s = score(&[answer("X"), answer(" q")], &sample()).expect("non-empty quiz");
        assert_eq!(s.correct, 0);
    }

    #[test]
    fn empty_quiz_is_not_scored() {
        assert!(score(&[], &[]).is_none());
        assert!(score(&[answer("x")], &[]).is_none());
    }

    #[test]
    fn short_answer_list_counts_as_unanswered() {
        let s = score(&[answer("x")], &sample()).expect("non-empty quiz");
        assert_eq!((s.correct, s.total), (1, 2));
    }

    #[test]
    fn percentage_is_floored() {
        let three = vec![
            question("A", &["x"], "x"),
            question("B", &["x"], "x"),
            question("C", &["x"], "x"),
        ];
        let s = score(&[answer("x"), None, None], &three).expect("non-empty quiz");
        assert_eq!(s.percentage, 33);
        let s = score(&[answer("x"), answer("x"), None], &three).expect("non-empty quiz");
        assert_eq!(s.percentage, 66);
        assert_eq!(s.tier(), Tier::NearPerfect);
    }

    #[test]
    fn single_wrong_answer_is_consolation() {
        let one = vec![question("A", &["x", "y"], "x")];
        let s = score(&[answer("y")], &one).expect("non-empty quiz");
        assert_eq!(s.tier(), Tier::Consolation);
    }

    #[test]
    fn feedback_mentions_the_count() {
        let s = Score::new(3, 5).expect("non-empty quiz");
        assert!(s.feedback().starts_with("You got 3/5"));
        assert_eq!(Score::new(5, 5).map(|s| s.feedback()), Some("PERFECT SCORE: 5/5 💯💗".into()));
    }
}
