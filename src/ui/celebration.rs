// SPDX-License-Identifier: MPL-2.0
//! Rising balloons played on page changes and when the valentine is accepted.
//!
//! The effect has a fixed lifetime. Its clock is whatever `Instant` the app
//! passes in, so the view stays a pure function of state.

use crate::app::config::{CELEBRATION_DURATION_MS, CELEBRATION_TICK_MS};
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space};
use iced::{Element, Length};
use std::time::{Duration, Instant};

const BALLOON_COUNT: usize = 8;

/// Head start, as a share of the lifetime, for each balloon in a group of four.
const STAGGER: [f32; 4] = [0.0, 0.15, 0.05, 0.25];

/// Celebration state: idle, or playing since a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    started_at: Option<Instant>,
    lifetime: Duration,
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new(Duration::from_millis(CELEBRATION_DURATION_MS))
    }
}

impl Celebration {
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            started_at: None,
            lifetime,
        }
    }

    /// Interval at which the app should refresh the animation.
    #[must_use]
    pub fn tick_interval() -> Duration {
        Duration::from_millis(CELEBRATION_TICK_MS)
    }

    /// Starts (or restarts) the effect at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.progress(now).is_some()
    }

    /// Share of the lifetime elapsed, in `0.0..1.0`, or `None` when idle.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.lifetime || self.lifetime.is_zero() {
            return None;
        }
        Some(elapsed.as_secs_f32() / self.lifetime.as_secs_f32())
    }

    /// Drops a finished effect so the tick subscription can stop.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.started_at = None;
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.started_at.is_none()
    }
}

/// How far balloon `index` has risen at `progress`, from 0.0 (bottom) to 1.0.
fn rise(index: usize, progress: f32) -> f32 {
    let delay = STAGGER[index % STAGGER.len()];
    ((progress - delay) / (1.0 - delay)).clamp(0.0, 1.0)
}

/// Fill portions above and below a balloon that has risen `rise`.
fn portions(rise: f32) -> (u16, u16) {
    let below = (rise * 100.0).round() as u16;
    (100u16.saturating_sub(below).max(1), below.max(1))
}

/// Full-window overlay of balloons at `progress`.
pub fn view<'a, Message: 'a>(progress: f32) -> Element<'a, Message> {
    let row = (0..BALLOON_COUNT).fold(Row::new().height(Length::Fill), |row, index| {
        let (above, below) = portions(rise(index, progress));
        let color = palette::BALLOONS[index % palette::BALLOONS.len()];

        let balloon = Container::new(Space::new())
            .width(Length::Fixed(sizing::BALLOON_SIZE))
            .height(Length::Fixed(sizing::BALLOON_SIZE * 1.2))
            .style(styles::container::balloon(color));

        row.push(
            Column::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(iced::alignment::Horizontal::Center)
                .push(Space::new().height(Length::FillPortion(above)))
                .push(balloon)
                .push(Space::new().height(Length::FillPortion(below))),
        )
    });

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
