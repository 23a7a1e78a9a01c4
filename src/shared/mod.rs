// Shared Kernel
// Cross-cutting pieces every bounded context leans on

pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)

pub use errors::{AppError, AppResult};
