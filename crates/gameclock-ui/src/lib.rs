//! Game clock UI: retained widget tree on top of `gameclock-engine`.
//!
//! # Quick start
//!
//! ```rust
//! use gameclock_engine::coords::Vec2;
//! use gameclock_engine::time::Scheduler;
//! use gameclock_ui::prelude::*;
//!
//! let mut sched = Scheduler::new();
//! let props = ClockProps::new("5:00").white("Ann").black("Bob").run(true);
//! let mut clock = GameClock::mount(props, &mut sched);
//!
//! // Feed elapsed time into the scheduler and forward every fire.
//! sched.advance(std::time::Duration::from_secs(2), |s, fired| {
//!     clock.on_timer(&fired, s);
//! });
//!
//! let text = UiScene::new().render_text(&clock, Vec2::new(24, 2));
//! assert_eq!(text, "Ann     Bob\n4:58    5:00");
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted.

pub mod clock;
pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and host a clock. Import this in app code.
pub mod prelude {
    pub use crate::clock::{ClockEvent, ClockProps, GameClock, Side};
    pub use crate::constraints::Constraints;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        flex::{Column, Row},
        text::Text,
    };

    pub use gameclock_engine::coords::{Rect, Vec2};
    pub use gameclock_time::{ClockTime, ParseError};
}
