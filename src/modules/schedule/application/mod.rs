pub mod config;
pub mod countdown_ticker;
pub mod service;

pub use config::{ScheduleConfig, ScheduleConfigBuilder};
pub use countdown_ticker::{CountdownHandle, CountdownTicker};
pub use service::{AiringScheduleService, AiringSnapshot};
