//! Merging candidate annotations into one note and one event.

use crate::annotation::{Annotation, Category};

/// Separator between notes accumulated for the same date.
pub const NOTE_SEPARATOR: &str = " | ";

/// Note and event chosen for one date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// All notes that fired, joined with [`NOTE_SEPARATOR`].
    pub note: String,
    /// Name of the winning annotation, or empty.
    pub event: String,
}

impl Resolution {
    fn apply(&mut self, annotation: &Annotation) {
        if !self.note.is_empty() {
            self.note.push_str(NOTE_SEPARATOR);
        }
        self.note.push_str(annotation.note());
        self.event = annotation.name().to_string();
    }
}

/// Fixed override chain over candidate annotations.
///
/// Four passes run in order over the same candidates:
///
/// 1. festival and seasonal annotations, except the culminating festival
/// 2. cycle-day annotations
/// 3. the culminating festival
/// 4. new-moon markers, only while no event has been chosen
///
/// Every pass that fires appends its note. The event goes to the last pass
/// that fired, so the culminating festival beats a cycle day, which beats
/// an ordinary festival. Priority weights are not consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    culminating: String,
}

impl Resolver {
    /// Creates a resolver treating `culminating` as the culminating
    /// festival's name.
    pub fn new(culminating: impl Into<String>) -> Self {
        Self {
            culminating: culminating.into(),
        }
    }

    /// Returns the culminating festival name.
    pub fn culminating(&self) -> &str {
        &self.culminating
    }

    /// Merges the candidates for one date.
    pub fn resolve(&self, candidates: &[Annotation]) -> Resolution {
        let mut out = Resolution::default();

        for a in candidates {
            if a.category().is_festival_like() && !self.is_culminating(a) {
                out.apply(a);
            }
        }
        for a in candidates {
            if a.category() == Category::Cycle {
                out.apply(a);
            }
        }
        for a in candidates {
            if self.is_culminating(a) {
                out.apply(a);
            }
        }
        for a in candidates {
            if a.category() == Category::NewMoon && out.event.is_empty() {
                out.apply(a);
            }
        }

        out
    }

    fn is_culminating(&self, a: &Annotation) -> bool {
        a.name() == self.culminating
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new("Shavuot")
    }
}
