// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use crate::ui::celebration::Celebration;
use iced::{time, Subscription};

/// Ticks only while balloons are on screen, so an idle portal does no work.
pub fn create_tick_subscription(celebrating: bool) -> Subscription<Message> {
    if celebrating {
        time::every(Celebration::tick_interval()).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
