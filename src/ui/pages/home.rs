// SPDX-License-Identifier: MPL-2.0
//! Home page: the greeting and a short love note.

use crate::ui::components::{hero, text_card};
use crate::ui::design_tokens::spacing;
use iced::widget::Column;
use iced::Element;

pub struct ViewContext<'a> {
    pub recipient: &'a str,
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let recipient = ctx.recipient;

    let greeting = hero(
        format!("Hi, {recipient}!"),
        "Welcome to your little Valentine corner on the internet. Scroll slowly…I made this with love!",
        &[
            "Our Very First Valentine's day",
            "I love you sooooooo much!!",
            "💌 A digital love letter for you",
        ],
    );

    let note = text_card(
        "A tiny love note 🥹",
        format!(
            "{recipient}, you’re my favorite person. The one who makes ordinary days feel like a scene from a romcom. \
             Thank you for being yourself: soft, funny, handsome, and most importantly all mine (heheheh).\n\n\
             Now go explore your portal like the main character you are, kween 💋"
        ),
    );

    Column::new()
        .spacing(spacing::MD)
        .push(greeting)
        .push(note)
        .into()
}
