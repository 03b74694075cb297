pub mod breadcrumbs;
pub mod grouping;
pub mod key_value;
pub mod status_views;
pub mod styles;

pub use breadcrumbs::BreadcrumbsSection;
pub use grouping::{GroupVariantView, GroupingInfo};
pub use key_value::{KeyValueList, KeyValueRow};
