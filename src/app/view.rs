// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! While the portal is locked every page routes to the PIN gate. Once
//! unlocked, the navigation bar sits above the current page. The balloons,
//! when playing, are stacked over everything.

use super::Message;
use crate::content::ContentStore;
use crate::portal::{Page, Session};
use crate::ui::celebration;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gate;
use crate::ui::navbar;
use crate::ui::pages::{home, letters, photos, quiz, timeline, valentine};
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Stack, Text},
    Element, Length,
};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub session: &'a Session,
    pub content: &'a ContentStore,
    pub gate: &'a gate::State,
    pub quiz: &'a quiz::State,
    pub valentine: &'a valentine::State,
    pub photo_wall: &'a photos::Wall,
    pub data_dir: &'a Path,
    pub photos_dir: &'a Path,
    pub recipient: &'a str,
    pub sender: &'a str,
    /// Balloon progress, `None` when no celebration is playing.
    pub celebration: Option<f32>,
}

/// Renders the gate or the current page, with the balloons on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let celebration_progress = ctx.celebration;

    let screen: Element<'_, Message> = if ctx.session.is_unlocked() {
        view_portal(ctx)
    } else {
        gate::view(gate::ViewContext {
            state: ctx.gate,
            recipient: ctx.recipient,
        })
        .map(Message::Gate)
    };

    let base = Container::new(scrollable(screen).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    match celebration_progress {
        Some(progress) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(celebration::view(progress))
            .into(),
        None => base.into(),
    }
}

fn view_portal(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current = ctx.session.current_page();

    let nav = navbar::view(navbar::ViewContext { current }).map(Message::Navbar);

    let page: Element<'_, Message> = match current {
        Page::Home => home::view(home::ViewContext {
            recipient: ctx.recipient,
        }),
        Page::Photos => photos::view(photos::ViewContext {
            wall: ctx.photo_wall,
            photos_dir: ctx.photos_dir,
        }),
        Page::Timeline => timeline::view(&ctx.content.timeline),
        Page::Letters => letters::view(letters::ViewContext {
            letters: &ctx.content.letters,
            session: ctx.session,
        })
        .map(Message::Letters),
        Page::Quiz => quiz::view(quiz::ViewContext {
            state: ctx.quiz,
            questions: &ctx.content.quiz,
            data_dir: ctx.data_dir,
        })
        .map(Message::Quiz),
        Page::Valentine => valentine::view(valentine::ViewContext {
            state: ctx.valentine,
            answer: ctx.session.valentine_answer(),
            recipient: ctx.recipient,
            sender: ctx.sender,
        })
        .map(Message::Valentine),
    };

    let footer = Container::new(Text::new("Made with all my love").size(typography::CAPTION))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let body = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(nav)
        .push(page)
        .push(footer);

    Container::new(body)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
