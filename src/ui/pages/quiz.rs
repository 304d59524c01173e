// SPDX-License-Identifier: MPL-2.0
//! Love quiz page: one radio group per question, scored on submit.

use crate::content::{QuizQuestion, QUIZ_FILE};
use crate::portal::quiz::{self, Answer, Score, Tier};
use crate::portal::Session;
use crate::ui::components::card::TITLE_FONT;
use crate::ui::components::{heading, notice, Tone};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, progress_bar, radio, Column, Container, Text};
use iced::{Element, Length};
use std::path::Path;

/// Warning shown when the quiz file in `data_dir` has no questions.
#[must_use]
pub fn empty_message(data_dir: &Path) -> String {
    format!(
        "Your quiz file is empty. Add questions to `{}/{QUIZ_FILE}`.",
        data_dir.display()
    )
}

/// Draft selections and the latest score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Selected option index per question, `None` until one is picked.
    selections: Vec<Option<usize>>,
    score: Option<Score>,
}

impl State {
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            selections: vec![None; question_count],
            score: None,
        }
    }

    #[must_use]
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    fn select(&mut self, question: usize, option: usize) {
        if question >= self.selections.len() {
            self.selections.resize(question + 1, None);
        }
        self.selections[question] = Some(option);
    }

    /// The chosen option text for every question, in order.
    #[must_use]
    pub fn answers(&self, questions: &[QuizQuestion]) -> Vec<Answer> {
        questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                self.selection(index)
                    .and_then(|option| question.options.get(option))
                    .cloned()
            })
            .collect()
    }
}

pub struct ViewContext<'a> {
    pub state: &'a State,
    pub questions: &'a [QuizQuestion],
    pub data_dir: &'a Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Select { question: usize, option: usize },
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Scored(Score),
}

pub fn update(
    state: &mut State,
    message: Message,
    questions: &[QuizQuestion],
    session: &mut Session,
) -> Event {
    match message {
        Message::Select { question, option } => {
            state.select(question, option);
            Event::None
        }
        Message::Submit => match quiz::score(&state.answers(questions), questions) {
            Some(score) => {
                state.score = Some(score);
                session.submit_quiz();
                Event::Scored(score)
            }
            None => Event::None,
        },
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::MD)
        .push(heading("Love Quiz", Some("No pressure. But also…yes pressure")));

    if ctx.questions.is_empty() {
        return column.push(notice(Tone::Warning, empty_message(ctx.data_dir))).into();
    }

    let form = ctx
        .questions
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::MD), |form, (index, question)| {
            form.push(question_card(index, question, ctx.state.selection(index)))
        })
        .push(
            button(Text::new("Submit Quiz"))
                .style(styles::button::primary)
                .on_press(Message::Submit),
        );

    let mut column = column.push(form);

    if let Some(score) = ctx.state.score() {
        let tone = match score.tier() {
            Tier::Perfect | Tier::NearPerfect => Tone::Success,
            Tier::Consolation => Tone::Info,
        };
        column = column
            .push(notice(tone, score.feedback()))
            .push(
                progress_bar(0.0..=100.0, f32::from(score.percentage))
                    .girth(sizing::PROGRESS_HEIGHT),
            );
    }

    column.into()
}

fn question_card<'a>(
    index: usize,
    question: &'a QuizQuestion,
    selected: Option<usize>,
) -> Element<'a, Message> {
    let title = Text::new(format!("Q{}. {}", index + 1, question.question))
        .size(typography::BODY_LG)
        .font(TITLE_FONT);

    let options = question.options.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |options, (option, label)| {
            options.push(radio(label.as_str(), option, selected, move |option| {
                Message::Select {
                    question: index,
                    option,
                }
            }))
        },
    );

    Container::new(Column::new().spacing(spacing::SM).push(title).push(options))
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}
