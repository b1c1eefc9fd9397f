#![allow(dead_code)]

//! Skip search and category filtering.

use super::entities::{Skip, BEST_VALUE_MIN_SIZE};

/// Fixed category chips offered above the skip grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipCategory {
    All,
    Small,
    Medium,
    Large,
    ExtraLarge,
    Road,
    Heavy,
    BestValue,
}

impl SkipCategory {
    /// Chip order as displayed.
    pub const ALL: [SkipCategory; 8] = [
        SkipCategory::All,
        SkipCategory::Small,
        SkipCategory::Medium,
        SkipCategory::Large,
        SkipCategory::ExtraLarge,
        SkipCategory::Road,
        SkipCategory::Heavy,
        SkipCategory::BestValue,
    ];

    /// Unknown keys yield `None`, which means no category filtering.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Self::All),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "xl" => Some(Self::ExtraLarge),
            "road" => Some(Self::Road),
            "heavy" => Some(Self::Heavy),
            "best" => Some(Self::BestValue),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "xl",
            Self::Road => "road",
            Self::Heavy => "heavy",
            Self::BestValue => "best",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Skips",
            Self::Small => "Small (2-4 Yards)",
            Self::Medium => "Medium (6-8 Yards)",
            Self::Large => "Large (10-12 Yards)",
            Self::ExtraLarge => "Extra Large (14+ Yards)",
            Self::Road => "Road Placement",
            Self::Heavy => "Heavy Waste",
            Self::BestValue => "Best Value",
        }
    }

    pub fn matches(&self, skip: &Skip) -> bool {
        match self {
            Self::All => true,
            Self::Small => skip.size <= 4,
            Self::Medium => (6..=8).contains(&skip.size),
            Self::Large => (10..=12).contains(&skip.size),
            Self::ExtraLarge => skip.size >= 14,
            Self::Road => skip.allowed_on_road,
            Self::Heavy => skip.allows_heavy_waste,
            Self::BestValue => skip.size >= BEST_VALUE_MIN_SIZE,
        }
    }
}

/// Case-insensitive match on the size number or the "N yard skip" phrase.
/// An empty needle matches everything.
pub fn matches_search(skip: &Skip, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    skip.size.to_string().contains(&needle) || skip.search_phrase().contains(&needle)
}

/// Keeps the skips matching both the search text and the category, in input order.
pub fn filter_skips(skips: &[Skip], search: &str, category: Option<SkipCategory>) -> Vec<Skip> {
    skips
        .iter()
        .filter(|skip| matches_search(skip, search))
        .filter(|skip| category.map(|c| c.matches(skip)).unwrap_or(true))
        .cloned()
        .collect()
}

/// Same as [`filter_skips`] with the category given as its raw key.
pub fn filter_skips_by_key(skips: &[Skip], search: &str, category_key: Option<&str>) -> Vec<Skip> {
    filter_skips(skips, search, category_key.and_then(SkipCategory::from_key))
}

/// Search box and active category chip of the selection page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkipFilter {
    pub search: String,
    pub category: Option<SkipCategory>,
}

impl SkipFilter {
    pub fn apply(&self, skips: &[Skip]) -> Vec<Skip> {
        filter_skips(skips, &self.search, self.category)
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some()
    }

    /// Clicking the active chip again clears it.
    pub fn toggle_category(&mut self, category: SkipCategory) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.category = None;
    }
}
