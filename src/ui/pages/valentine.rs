// SPDX-License-Identifier: MPL-2.0
//! The final question, and the certificate once it is answered.

use crate::portal::{Session, ValentineAnswer};
use crate::ui::components::card::TITLE_FONT;
use crate::ui::components::{heading, text_card};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use chrono::NaiveDate;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Format of the issue date printed on the certificate, e.g. `14 Feb 2026`.
pub const DATE_FORMAT: &str = "%d %b %Y";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    issued_on: Option<NaiveDate>,
}

impl State {
    #[must_use]
    pub fn issued_on(&self) -> Option<NaiveDate> {
        self.issued_on
    }
}

pub struct ViewContext<'a> {
    pub state: &'a State,
    pub answer: Option<ValentineAnswer>,
    pub recipient: &'a str,
    pub sender: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Choose(ValentineAnswer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Accepted(ValentineAnswer),
}

/// Records the answer and stamps the certificate with `today`.
pub fn update(
    state: &mut State,
    message: Message,
    session: &mut Session,
    today: NaiveDate,
) -> Event {
    match message {
        Message::Choose(answer) => {
            session.choose_valentine(answer);
            state.issued_on = Some(today);
            Event::Accepted(answer)
        }
    }
}

#[must_use]
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let choices = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new("Yes 💗"))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Choose(ValentineAnswer::Yes)),
        )
        .push(
            button(Text::new("Definitely Yes 😭💘"))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::Choose(ValentineAnswer::DefinitelyYes)),
        );

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(heading("One Final Question", None))
        .push(text_card(
            "Will you be my Valentine, bebi?",
            "Choose wisely (like your life depends on it).",
        ))
        .push(choices);

    if let (Some(answer), Some(issued_on)) = (ctx.answer, ctx.state.issued_on()) {
        column = column
            .push(heading("Valentine Certificate 🏆", None))
            .push(certificate(&ctx, answer, issued_on))
            .push(
                Container::new(Text::new("❤️ 🤍 💗 ❤️ 🤍 💗"))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            );
    }

    column.into()
}

fn certificate<'a>(
    ctx: &ViewContext<'a>,
    answer: ValentineAnswer,
    issued_on: NaiveDate,
) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new("💗💗💗").size(typography::TITLE_LG))
        .push(
            Text::new("Official Valentine Certificate")
                .size(typography::TITLE_LG)
                .font(TITLE_FONT),
        )
        .push(
            Text::new(format!("Issued on {}", format_issue_date(issued_on)))
                .size(typography::CAPTION),
        )
        .push(
            Text::new(format!(
                "This certifies that {} has officially accepted to be my Valentine.",
                ctx.recipient
            ))
            .size(typography::BODY_LG),
        )
        .push(
            Text::new(format!("Decision: {} ✅", answer.label()))
                .size(typography::BODY_LG)
                .font(TITLE_FONT),
        )
        .push(
            Text::new(
                "Valid for: unlimited forehead kisses, unlimited flirting,\n\
                 and a lifetime of “come here, bebi” privileges.",
            )
            .size(typography::BODY_LG),
        )
        .push(Text::new("Signed with love,").size(typography::TITLE_SM))
        .push(
            Text::new(ctx.sender.to_string())
                .size(typography::TITLE_SM)
                .font(TITLE_FONT),
        );

    Container::new(
        Container::new(body)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::CERTIFICATE_WIDTH))
            .style(styles::container::certificate),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valentines_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).expect("valid date")
    }

    #[test]
    fn issue_date_is_day_month_year() {
        assert_eq!(format_issue_date(valentines_day()), "14 Feb 2026");
        let early = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
        assert_eq!(format_issue_date(early), "02 Mar 2026");
    }

    #[test]
    fn choosing_records_answer_and_date() {
        let mut state = State::default();
        let mut session = Session::new();
        let event = update(
            &mut state,
            Message::Choose(ValentineAnswer::DefinitelyYes),
            &mut session,
            valentines_day(),
        );
        assert_eq!(event, Event::Accepted(ValentineAnswer::DefinitelyYes));
        assert_eq!(session.valentine_answer(), Some(ValentineAnswer::DefinitelyYes));
        assert_eq!(state.issued_on(), Some(valentines_day()));
    }

    #[test]
    fn renders_with_and_without_certificate() {
        let mut state = State::default();
        let _ = view(ViewContext {
            state: &state,
            answer: None,
            recipient: "Ren",
            sender: "Aanya",
        });
        let mut session = Session::new();
        update(
            &mut state,
            Message::Choose(ValentineAnswer::Yes),
            &mut session,
            valentines_day(),
        );
        let _ = view(ViewContext {
            state: &state,
            answer: session.valentine_answer(),
            recipient: "Ren",
            sender: "Aanya",
        });
    }
}
