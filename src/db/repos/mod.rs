pub mod item_meta;
pub mod settings;
