// SPDX-License-Identifier: MPL-2.0
//! Portal core: pages, session state and quiz scoring.
//!
//! Nothing here touches the GUI; the `ui` and `app` modules render and drive it.

pub mod page;
pub mod quiz;
pub mod session;

pub use page::Page;
pub use quiz::{Score, Tier};
pub use session::{PageChange, PinRejected, Session, ValentineAnswer};
