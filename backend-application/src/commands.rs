pub mod alert_commands;
pub mod explain_commands;
pub mod seed_commands;
