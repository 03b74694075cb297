use shared_types::{Breadcrumb, BreadcrumbLevel, BreadcrumbType};

// ── Constants ────────────────────────────────────────────────────────────────

pub const MAX_CRUMBS_WHEN_COLLAPSED: usize = 10;

pub const NO_MATCHING_CRUMBS_TEXT: &str = "Sorry, no breadcrumbs match your search query.";

// ── Enriched breadcrumbs ─────────────────────────────────────────────────────

/// Display metadata derived from a breadcrumb type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreadcrumbDetails {
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BreadcrumbWithDetails {
    /// Position in the combined list (raw crumbs plus the virtual one)
    pub id: usize,
    pub crumb: Breadcrumb,
    pub details: BreadcrumbDetails,
    /// Synthesized from the event's exception or message
    pub is_virtual: bool,
}

/// Final view handed to the list body
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollapsedView {
    pub breadcrumbs: Vec<BreadcrumbWithDetails>,
    pub collapsed_quantity: usize,
}

impl CollapsedView {
    /// Nothing survived filter and search; the list shows the empty state
    pub fn is_empty(&self) -> bool {
        self.breadcrumbs.is_empty()
    }
}

// ── List state ───────────────────────────────────────────────────────────────

/// Search term and collapse flag driving the search and collapse stages
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    /// Always stored lowercase
    pub search_term: String,
    pub is_collapsed: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            is_collapsed: true,
        }
    }
}

impl ListState {
    pub fn search(&mut self, input: &str) {
        self.search_term = input.to_lowercase();
    }

    /// Drop the term and fold the list back to the last crumbs
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.is_collapsed = true;
    }

    pub fn toggle_collapse(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }
}

// ── Filter options ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct TypeOption {
    pub crumb_type: BreadcrumbType,
    pub details: BreadcrumbDetails,
    pub levels: Vec<BreadcrumbLevel>,
    pub is_checked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelOption {
    pub level: BreadcrumbLevel,
    pub details: BreadcrumbDetails,
    pub is_checked: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterOptions {
    pub types: Vec<TypeOption>,
    pub levels: Vec<LevelOption>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.levels.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.types.iter().filter(|option| option.is_checked).count()
            + self.levels.iter().filter(|option| option.is_checked).count()
    }

    pub fn type_items(&self) -> Vec<FilterOptionItem> {
        self.types
            .iter()
            .map(|option| FilterOptionItem {
                group: FilterGroup::Type(option.crumb_type.clone()),
                label: option.details.description.to_string(),
                icon: option.details.icon,
                color: option.details.color,
                is_checked: option.is_checked,
            })
            .collect()
    }

    pub fn level_items(&self) -> Vec<FilterOptionItem> {
        self.levels
            .iter()
            .map(|option| FilterOptionItem {
                group: FilterGroup::Level(option.level.clone()),
                label: option.level.as_str().to_string(),
                icon: option.details.icon,
                color: option.details.color,
                is_checked: option.is_checked,
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterGroup {
    Type(BreadcrumbType),
    Level(BreadcrumbLevel),
}

impl FilterGroup {
    pub fn key(&self) -> String {
        match self {
            Self::Type(crumb_type) => format!("type-{}", crumb_type.as_str()),
            Self::Level(level) => format!("level-{}", level.as_str()),
        }
    }
}

/// One checkbox row in the filter dropdown
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOptionItem {
    pub group: FilterGroup,
    pub label: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub is_checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterAction {
    Toggle(FilterGroup),
    CheckAll,
}
