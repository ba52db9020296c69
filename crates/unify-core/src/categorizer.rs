//! Field categorizer: keyword classification of field names.
//!
//! Each field name is lower-cased and tested against a fixed keyword table,
//! independently per [`Category`]. A name can land in several categories
//! (`transaction_id` is both an id and, for source inference, a payment
//! field; `event_time` is both a timestamp and an event type candidate).
//!
//! The resulting [`FieldCategories`] is computed once per run and then passed
//! by reference to every mapping call.

use crate::inventory::FieldVocabulary;

/// A canonical role a field may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Id,
    Timestamp,
    User,
    EventType,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Id,
        Category::Timestamp,
        Category::User,
        Category::EventType,
    ];

    /// Substrings that place a lower-cased field name in this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Id => &["id"],
            Category::Timestamp => &["time", "date", "created"],
            Category::User => &["user", "customer"],
            Category::EventType => &["type", "event", "action"],
        }
    }

    /// Whether `field` belongs to this category.
    pub fn matches(self, field: &str) -> bool {
        let lower = field.to_lowercase();
        self.keywords().iter().any(|kw| lower.contains(kw))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Id => write!(f, "ID"),
            Category::Timestamp => write!(f, "TIMESTAMP"),
            Category::User => write!(f, "USER"),
            Category::EventType => write!(f, "EVENT_TYPE"),
        }
    }
}

/// Every category a single field name falls into.
pub fn categories_of(field: &str) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| c.matches(field))
        .collect()
}

/// Frozen mapping from category to candidate field names, in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCategories {
    fields: [Vec<String>; 4],
}

impl FieldCategories {
    /// Classify every name in the vocabulary.
    pub fn categorize(vocabulary: &FieldVocabulary) -> Self {
        let mut categories = Self::default();
        for name in vocabulary.names() {
            for category in categories_of(name) {
                categories.fields[category.index()].push(name.clone());
            }
        }
        for category in Category::ALL {
            tracing::debug!(
                %category,
                fields = ?categories.get(category),
                "categorized fields"
            );
        }
        categories
    }

    /// Candidate fields for `category`, highest priority first.
    pub fn get(&self, category: Category) -> &[String] {
        &self.fields[category.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Vec::is_empty)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
