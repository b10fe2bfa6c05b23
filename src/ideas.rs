use std::collections::{HashMap, HashSet};

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::models::Category;
use crate::prompts;

/// Read-only mapping from category to its prompts.
///
/// Entries are trimmed, blank ones dropped and duplicates removed at load time,
/// so every category holds distinct texts. `IdeaSelector::pick` relies on that
/// to terminate.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<Category, Vec<String>>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_entries(Category::ALL.iter().map(|&category| {
            let ideas = prompts::builtin(category).iter().map(|s| s.to_string()).collect();
            (category, ideas)
        }))
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<String>)>,
    {
        let mut map: HashMap<Category, Vec<String>> = HashMap::new();
        for (category, ideas) in entries {
            let list = map.entry(category).or_default();
            let mut seen: HashSet<String> = list.iter().cloned().collect();
            for idea in ideas {
                let idea = idea.trim();
                if idea.is_empty() || !seen.insert(idea.to_string()) {
                    continue;
                }
                list.push(idea.to_string());
            }
        }
        Self { entries: map }
    }

    pub fn ideas(&self, category: Category) -> &[String] {
        self.entries.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Random idea picker that never hands out the same idea twice in a row for a
/// category (when the category has at least two ideas).
pub struct IdeaSelector<R = ThreadRng> {
    catalog: Catalog,
    last: HashMap<Category, String>,
    rng: R,
}

impl IdeaSelector<ThreadRng> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rng(catalog, rand::rng())
    }
}

impl<R: Rng> IdeaSelector<R> {
    pub fn with_rng(catalog: Catalog, rng: R) -> Self {
        Self {
            catalog,
            last: HashMap::new(),
            rng,
        }
    }

    /// Returns a random idea from `category`, or `None` if the category is empty.
    pub fn pick(&mut self, category: Category) -> Option<String> {
        let ideas = self.catalog.ideas(category);
        if ideas.is_empty() {
            tracing::debug!(%category, "no ideas in category");
            return None;
        }

        let idea = if ideas.len() == 1 {
            ideas[0].clone()
        } else {
            let previous = self.last.get(&category);
            loop {
                let candidate = &ideas[self.rng.random_range(0..ideas.len())];
                if previous != Some(candidate) {
                    break candidate.clone();
                }
            }
        };

        self.last.insert(category, idea.clone());
        Some(idea)
    }
}
