// SPDX-License-Identifier: MPL-2.0
//! PIN gate shown until the portal is unlocked.

use crate::app::config::secrets::Pin;
use crate::portal::Session;
use crate::ui::components::{hero, notice, text_card, Tone};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

pub const REJECTED_MESSAGE: &str = "Nope 😭 Try again, bebi.";

#[derive(Debug, Clone, Default)]
pub struct State {
    pin_input: String,
    rejected: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pin_input(&self) -> &str {
        &self.pin_input
    }

    /// Whether the last attempt was wrong.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejected
    }
}

pub struct ViewContext<'a> {
    pub state: &'a State,
    pub recipient: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    PinChanged(String),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Unlocked,
    Rejected,
}

/// Applies a gate message. Submitting checks the typed PIN against `pin`
/// through the session, which unlocks on a match.
pub fn update(state: &mut State, message: Message, session: &mut Session, pin: &Pin) -> Event {
    match message {
        Message::PinChanged(value) => {
            state.pin_input = value;
            Event::None
        }
        Message::Submit => match session.submit_pin(&state.pin_input, pin) {
            Ok(()) => {
                state.rejected = false;
                state.pin_input.clear();
                Event::Unlocked
            }
            Err(_) => {
                state.rejected = true;
                Event::Rejected
            }
        },
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let banner = hero(
        format!("💌 {}’s Valentine Portal", ctx.recipient),
        "corny, cringey, and a tiny bit of chaos, just like us.",
        &["Our eyes only ;)", "💗 Cute mode: ON", "🔐 PIN locked"],
    );

    let intro = text_card(
        "Enter the secret PIN",
        "because all treasures worth something are well guarded ;)",
    );

    let input = text_input("Hint: the date we became official 🥹", ctx.state.pin_input())
        .secure(true)
        .on_input(Message::PinChanged)
        .on_submit(Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY_LG);

    let unlock = button(Text::new("Unlock (if you dare)"))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Submit);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::GATE_WIDTH * 1.5)
        .push(banner)
        .push(intro)
        .push(input)
        .push(unlock);

    if ctx.state.is_rejected() {
        column = column.push(notice(Tone::Error, REJECTED_MESSAGE));
    }

    column = column.push(
        Text::new("Tip: make the window bigger if you want bigger photos.")
            .size(typography::CAPTION),
    );

    Container::new(column)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: &mut State, session: &mut Session, typed: &str) -> Event {
        update(state, Message::PinChanged(typed.into()), session, &Pin::new("2808"));
        update(state, Message::Submit, session, &Pin::new("2808"))
    }

    #[test]
    fn typing_updates_the_input() {
        let mut state = State::new();
        let mut session = Session::new();
        let event = update(
            &mut state,
            Message::PinChanged("28".into()),
            &mut session,
            &Pin::new("2808"),
        );
        assert_eq!(event, Event::None);
        assert_eq!(state.pin_input(), "28");
    }

    #[test]
    fn wrong_pin_shows_rejection_and_stays_locked() {
        let mut state = State::new();
        let mut session = Session::new();
        assert_eq!(submit(&mut state, &mut session, "1111"), Event::Rejected);
        assert!(state.is_rejected());
        assert!(!session.is_unlocked());
        assert_eq!(state.pin_input(), "1111");
    }

    #[test]
    fn right_pin_unlocks_and_clears_the_field() {
        let mut state = State::new();
        let mut session = Session::new();
        submit(&mut state, &mut session, "0000");
        assert_eq!(submit(&mut state, &mut session, " 2808 "), Event::Unlocked);
        assert!(session.is_unlocked());
        assert!(!state.is_rejected());
        assert!(state.pin_input().is_empty());
    }

    #[test]
    fn view_renders_in_both_states() {
        let mut state = State::new();
        let _ = view(ViewContext {
            state: &state,
            recipient: "Ren",
        });
        state.rejected = true;
        let _ = view(ViewContext {
            state: &state,
            recipient: "Ren",
        });
    }
}
