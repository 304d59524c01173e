// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the visitor's session, the loaded content and the
//! per-page UI state, and translates messages into state changes and the
//! occasional background task (decoding the photo wall).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content::ContentStore;
use crate::portal::Session;
use crate::ui::celebration::Celebration;
use crate::ui::gate;
use crate::ui::pages::{photos, quiz, valentine};
use config::secrets::{self, Pin};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    config: Config,
    theme: Theme,
    pin: Pin,
    content: ContentStore,
    data_dir: PathBuf,
    photos_dir: PathBuf,
    session: Session,
    gate: gate::State,
    quiz: quiz::State,
    valentine: valentine::State,
    photo_wall: photos::Wall,
    celebration: Celebration,
    /// Clock the celebration is measured against, refreshed on every message.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("unlocked", &self.session.is_unlocked())
            .field("page", &self.session.current_page())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls `boot` through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, the PIN and the content, then renders the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load_with_override(flags.config_dir.clone());
        let (pin, source) = secrets::resolve(flags.config_dir);
        tracing::info!(source = ?source, "unlock PIN resolved");

        let data_dir = flags.data_dir.unwrap_or_else(|| config.content.data_dir());
        let photos_dir = flags
            .photos_dir
            .unwrap_or_else(|| config.content.photos_dir());
        let content = ContentStore::load(&data_dir);

        Self::from_parts(config, pin, content, data_dir, photos_dir)
    }

    /// Builds the app from already loaded parts and runs the first page
    /// observation, which starts the welcome balloons.
    pub fn from_parts(
        config: Config,
        pin: Pin,
        content: ContentStore,
        data_dir: PathBuf,
        photos_dir: PathBuf,
    ) -> (Self, Task<Message>) {
        let theme = config.general.theme_mode.theme();
        let quiz = quiz::State::new(content.quiz.len());

        let mut app = Self {
            config,
            theme,
            pin,
            content,
            data_dir,
            photos_dir,
            session: Session::new(),
            gate: gate::State::new(),
            quiz,
            valentine: valentine::State::default(),
            photo_wall: photos::Wall::default(),
            celebration: Celebration::default(),
            now: Instant::now(),
        };

        let task = update::observe_page(&mut app.context());
        (app, task)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_active(self.now)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            session: &mut self.session,
            gate: &mut self.gate,
            quiz: &mut self.quiz,
            valentine: &mut self.valentine,
            photo_wall: &mut self.photo_wall,
            celebration: &mut self.celebration,
            content: &self.content,
            pin: &self.pin,
            photos_dir: &self.photos_dir,
            max_photos: self.config.gallery.max_photos(),
            now: self.now,
        }
    }

    pub fn title(&self) -> String {
        format!("{}'s Valentine Portal", self.config.portal.recipient())
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(!self.celebration.is_idle())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(instant) => *instant,
            _ => Instant::now(),
        };

        let mut ctx = self.context();

        match message {
            Message::Gate(gate_message) => update::handle_gate_message(&mut ctx, gate_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message);
            }
            Message::Letters(letters_message) => {
                update::handle_letters_message(&mut ctx, letters_message);
            }
            Message::Quiz(quiz_message) => update::handle_quiz_message(&mut ctx, quiz_message),
            Message::Valentine(valentine_message) => {
                update::handle_valentine_message(&mut ctx, valentine_message);
            }
            Message::GalleryLoaded(items) => update::handle_gallery_loaded(&mut ctx, items),
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }

        update::observe_page(&mut ctx)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            session: &self.session,
            content: &self.content,
            gate: &self.gate,
            quiz: &self.quiz,
            valentine: &self.valentine,
            photo_wall: &self.photo_wall,
            data_dir: &self.data_dir,
            photos_dir: &self.photos_dir,
            recipient: self.config.portal.recipient(),
            sender: self.config.portal.sender(),
            celebration: self.celebration.progress(self.now),
        })
    }
}
