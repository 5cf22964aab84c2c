//! Minimal terminal runtime: a fixed-cadence tick, throttled rendering and
//! crossterm input, driving a single [`App`].

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
