//! Broadcast schedule resolution for the Miru anime tracker
//!
//! Turns a series' weekly JST broadcast slot into the next airing instant,
//! the viewer's local display time, a countdown, and an estimate of which
//! episode is next. All arithmetic is host-timezone independent.

pub mod modules;
pub mod shared;

pub use modules::schedule;
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
