//! Candidate annotations produced by event providers.

/// Kind of a candidate annotation.
///
/// The resolver orders its passes by category, not by provider or weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Appointed festival.
    Festival,
    /// Start-of-month marker.
    NewMoon,
    /// One day of the 50-day counting cycle.
    Cycle,
    /// Seasonal marker such as the beginning of the year.
    Seasonal,
}

impl Category {
    /// Returns `true` for the categories merged by the festival pass.
    pub fn is_festival_like(self) -> bool {
        matches!(self, Self::Festival | Self::Seasonal)
    }
}

/// One candidate annotation for a single date.
///
/// Built by a provider, consumed by the resolver, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    note: String,
    category: Category,
    priority: u8,
}

impl Annotation {
    /// Creates an annotation.
    pub fn new(
        name: impl Into<String>,
        note: impl Into<String>,
        category: Category,
        priority: u8,
    ) -> Self {
        Self {
            name: name.into(),
            note: note.into(),
            category,
            priority,
        }
    }

    /// Returns the display name, which becomes the entry's event.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the explanatory note.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Returns the category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the priority weight.
    ///
    /// Carried for alternative resolution strategies; the pass-ordered
    /// [`Resolver`](crate::Resolver) does not read it.
    pub fn priority(&self) -> u8 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn festival_like_categories() {
        assert!(Category::Festival.is_festival_like());
        assert!(Category::Seasonal.is_festival_like());
        assert!(!Category::Cycle.is_festival_like());
        assert!(!Category::NewMoon.is_festival_like());
    }

    #[test]
    fn accessors() {
        let a = Annotation::new("Pesach", "Pesach begins at sunset", Category::Festival, 10);
        assert_eq!(a.name(), "Pesach");
        assert_eq!(a.note(), "Pesach begins at sunset");
        assert_eq!(a.category(), Category::Festival);
        assert_eq!(a.priority(), 10);
    }
}
