// Thu May 7 2026 - Alex

pub mod logging;

pub use logging::{init_logger, level_from_verbosity, ScopedTimer};
