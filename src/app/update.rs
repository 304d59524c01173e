// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler runs against an [`UpdateContext`]. After the message is
//! applied, [`observe_page`] reports page changes, which start the balloons
//! and, on the photo wall, a background photo load.

use super::Message;
use crate::app::config::secrets::Pin;
use crate::content::ContentStore;
use crate::gallery::{self, GalleryItem};
use crate::portal::{Page, Session};
use crate::ui::celebration::Celebration;
use crate::ui::gate::{self, Event as GateEvent};
use crate::ui::navbar;
use crate::ui::pages::photos::Wall;
use crate::ui::pages::quiz::{self, Event as QuizEvent};
use crate::ui::pages::{letters, valentine};
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub gate: &'a mut gate::State,
    pub quiz: &'a mut quiz::State,
    pub valentine: &'a mut valentine::State,
    pub photo_wall: &'a mut Wall,
    pub celebration: &'a mut Celebration,
    pub content: &'a ContentStore,
    pub pin: &'a Pin,
    pub photos_dir: &'a Path,
    pub max_photos: usize,
    pub now: Instant,
}

pub fn handle_gate_message(ctx: &mut UpdateContext<'_>, message: gate::Message) {
    if ctx.session.is_unlocked() {
        return;
    }
    match gate::update(ctx.gate, message, ctx.session, ctx.pin) {
        GateEvent::Unlocked => tracing::info!("portal unlocked"),
        GateEvent::Rejected => tracing::warn!("PIN rejected"),
        GateEvent::None => {}
    }
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) {
    if ctx.session.is_unlocked() {
        navbar::update(message, ctx.session);
    }
}

pub fn handle_letters_message(ctx: &mut UpdateContext<'_>, message: letters::Message) {
    if ctx.session.is_unlocked() {
        letters::update(message, ctx.session);
    }
}

pub fn handle_quiz_message(ctx: &mut UpdateContext<'_>, message: quiz::Message) {
    if !ctx.session.is_unlocked() {
        return;
    }
    if let QuizEvent::Scored(score) =
        quiz::update(ctx.quiz, message, &ctx.content.quiz, ctx.session)
    {
        tracing::info!(
            correct = score.correct,
            total = score.total,
            percentage = score.percentage,
            "quiz submitted"
        );
    }
}

pub fn handle_valentine_message(ctx: &mut UpdateContext<'_>, message: valentine::Message) {
    if !ctx.session.is_unlocked() {
        return;
    }
    let today = chrono::Local::now().date_naive();
    let valentine::Event::Accepted(answer) =
        valentine::update(ctx.valentine, message, ctx.session, today);
    tracing::info!(answer = answer.label(), "valentine accepted");
    ctx.celebration.trigger(ctx.now);
}

pub fn handle_gallery_loaded(ctx: &mut UpdateContext<'_>, items: Vec<GalleryItem>) {
    tracing::debug!(photos = items.len(), "photo wall ready");
    *ctx.photo_wall = Wall::Ready(items);
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) {
    ctx.celebration.settle(ctx.now);
}

/// Runs once after every message: detects a page change, starts the balloons
/// and kicks off the photo load when the photo wall comes into view.
pub fn observe_page(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(change) = ctx.session.observe_render(ctx.content.letters.len()) else {
        return Task::none();
    };

    tracing::debug!(from = ?change.from, to = ?change.to, "page changed");
    ctx.celebration.trigger(ctx.now);

    if change.to == Page::Photos {
        *ctx.photo_wall = Wall::Loading;
        load_photo_wall(ctx.photos_dir.to_path_buf(), ctx.max_photos)
    } else {
        Task::none()
    }
}

/// Decodes the photo wall off the UI thread.
fn load_photo_wall(directory: PathBuf, max_photos: usize) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || gallery::load_gallery(&directory, max_photos))
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "photo wall task failed");
                    Vec::new()
                })
        },
        Message::GalleryLoaded,
    )
}
