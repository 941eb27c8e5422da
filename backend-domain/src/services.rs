pub mod explainer;
pub mod transitions;

pub use explainer::*;
pub use transitions::*;
