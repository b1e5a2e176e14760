pub mod buttons;
pub mod html;
pub mod links;
pub mod prompt;
pub mod visibility;

pub use links::build_fragment;
pub use visibility::should_show;
