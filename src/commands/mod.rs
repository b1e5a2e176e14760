pub mod lifecycle;
pub mod overrides;
pub mod settings;
