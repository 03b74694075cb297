pub mod logic;
pub mod styles;
pub mod view;

pub use view::{GroupVariantView, GroupingComponentView, GroupingInfo};
