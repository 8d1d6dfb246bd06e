pub mod component;
pub mod configuration;
pub mod image;
