pub mod command;
pub mod kubectl;
