//! Catalog records and the search/category filter shared by skills and instructors.

/// Category id that matches every entry.
pub const ALL_CATEGORIES: &str = "all";

/// A static record that can be searched by name, description and category.
pub trait CatalogEntry {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub students: u32,
    pub avg_rating: f32,
    pub price_range: &'static str,
    pub instructors: u32,
}

impl CatalogEntry for Skill {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn category(&self) -> &str {
        self.category
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub students: u32,
    pub location: &'static str,
    pub hourly_rate: u32,
    pub bio: &'static str,
    pub languages: &'static [&'static str],
    pub response_time: &'static str,
}

impl Instructor {
    /// Initials used as an avatar, e.g. `SC` for "Sarah Chen".
    #[must_use]
    pub fn initials(&self) -> String {
        initials(self.name)
    }
}

impl CatalogEntry for Instructor {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.specialty
    }

    fn category(&self) -> &str {
        self.category
    }
}

#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Free-text plus category filter. Rebuilt by the caller on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub text: String,
    pub category: String,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            category: ALL_CATEGORIES.to_owned(),
        }
    }
}

impl FilterQuery {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Build a query from optional inputs. Absent text means "match any text",
    /// absent or blank category means [`ALL_CATEGORIES`].
    #[must_use]
    pub fn from_parts(text: Option<&str>, category: Option<&str>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(ALL_CATEGORIES);
        Self {
            text: text.unwrap_or_default().to_owned(),
            category: category.to_owned(),
        }
    }

    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category == ALL_CATEGORIES
    }

    #[must_use]
    pub fn matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        self.matches_text(entry) && self.matches_category(entry)
    }

    fn matches_text<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        entry.name().to_lowercase().contains(&needle)
            || entry.description().to_lowercase().contains(&needle)
    }

    fn matches_category<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        self.category == ALL_CATEGORIES || entry.category() == self.category
    }
}

/// Returns the entries matching `query`, in source order.
#[must_use]
pub fn filter<'a, E: CatalogEntry>(entries: &'a [E], query: &FilterQuery) -> Vec<&'a E> {
    let matched: Vec<&E> = entries.iter().filter(|e| query.matches(*e)).collect();
    tracing::debug!(
        text = %query.text,
        category = %query.category,
        matched = matched.len(),
        total = entries.len(),
        "catalog filter"
    );
    matched
}
