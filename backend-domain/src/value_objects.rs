pub mod alert_status;
pub mod anomaly_kind;
pub mod risk_tier;

pub use alert_status::*;
pub use anomaly_kind::*;
pub use risk_tier::*;
