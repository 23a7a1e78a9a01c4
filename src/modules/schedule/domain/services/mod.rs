pub mod broadcast_resolver;
pub mod countdown;
pub mod episode_estimator;
pub mod local_presenter;
pub mod reference_time;

pub use broadcast_resolver::BroadcastResolver;
pub use countdown::{format_countdown, AIRING_NOW_MESSAGE};
pub use episode_estimator::EpisodeEstimator;
pub use local_presenter::{format_offset_label, LocalDisplay, LocalPresenter};
