//! Terminal dashboard front end
//!
//! Interactive counterpart to the prompt front end: number fields and
//! percent sliders for the four parameters, a live results panel and the
//! sensitivity-sweep chart. State lives in [`app::App`]; every parameter
//! change re-invokes the pure simulation pipeline.

pub mod app;
pub mod events;
pub mod ui;

pub use app::App;
pub use events::{apply_event, poll_event, InputEvent};
