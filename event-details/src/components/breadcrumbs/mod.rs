pub mod convert;
pub mod filter;
pub mod pipeline;
pub mod styles;
pub mod types;
pub mod view;
pub mod virtual_crumb;

pub use filter::FilterDropdown;
pub use view::BreadcrumbsSection;
