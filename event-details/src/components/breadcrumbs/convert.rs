//! Breadcrumb type normalisation and per-type display metadata

use shared_types::{Breadcrumb, BreadcrumbLevel, BreadcrumbType};

use super::types::BreadcrumbDetails;

/// Re-type a breadcrumb from its level and category.
///
/// Warning and error levels win over everything else, then `ui.*` crumbs
/// become user actions and `console`/`navigation` crumbs become debug output.
pub fn convert_breadcrumb_type(mut crumb: Breadcrumb) -> Breadcrumb {
    match crumb.level {
        Some(BreadcrumbLevel::Warning) => {
            crumb.crumb_type = BreadcrumbType::Warning;
            return crumb;
        }
        Some(BreadcrumbLevel::Error) => {
            crumb.crumb_type = BreadcrumbType::Error;
            return crumb;
        }
        _ => {}
    }

    if let Some(category) = crumb.category.as_deref() {
        match category.split('.').next().unwrap_or_default() {
            "ui" => crumb.crumb_type = BreadcrumbType::Ui,
            "console" | "navigation" => crumb.crumb_type = BreadcrumbType::Debug,
            _ => {}
        }
    }

    crumb
}

pub fn breadcrumb_type_details(crumb_type: &BreadcrumbType) -> BreadcrumbDetails {
    match crumb_type {
        BreadcrumbType::User | BreadcrumbType::Ui => BreadcrumbDetails {
            icon: "👤",
            color: "#6c5fc7",
            description: "User Action",
        },
        BreadcrumbType::Navigation => BreadcrumbDetails {
            icon: "📍",
            color: "#3b6ecc",
            description: "Navigation",
        },
        BreadcrumbType::Info => BreadcrumbDetails {
            icon: "ℹ",
            color: "#3b6ecc",
            description: "Info",
        },
        BreadcrumbType::Warning => BreadcrumbDetails {
            icon: "⚠",
            color: "#f5a623",
            description: "Warning",
        },
        BreadcrumbType::Debug => BreadcrumbDetails {
            icon: "🔧",
            color: "#302839",
            description: "Debug",
        },
        BreadcrumbType::Exception | BreadcrumbType::Error => BreadcrumbDetails {
            icon: "🔥",
            color: "#e03e2f",
            description: "Error",
        },
        BreadcrumbType::Http => BreadcrumbDetails {
            icon: "⇄",
            color: "#4dc771",
            description: "HTTP request",
        },
        BreadcrumbType::Query => BreadcrumbDetails {
            icon: "☰",
            color: "#9585a3",
            description: "Query",
        },
        BreadcrumbType::System => BreadcrumbDetails {
            icon: "📱",
            color: "#9585a3",
            description: "System",
        },
        BreadcrumbType::Session => BreadcrumbDetails {
            icon: "↻",
            color: "#f36e4f",
            description: "Session",
        },
        BreadcrumbType::Transaction => BreadcrumbDetails {
            icon: "⟿",
            color: "#e1567c",
            description: "Transaction",
        },
        BreadcrumbType::Message => BreadcrumbDetails {
            icon: "✉",
            color: "#9585a3",
            description: "Message",
        },
        BreadcrumbType::Default | BreadcrumbType::Other(_) => BreadcrumbDetails {
            icon: "◆",
            color: "#9585a3",
            description: "Default",
        },
    }
}
