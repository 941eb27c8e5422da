pub mod alert;
pub mod runtime_config;
pub mod sample;
pub mod stats;

pub use alert::*;
pub use runtime_config::*;
pub use sample::*;
pub use stats::*;
