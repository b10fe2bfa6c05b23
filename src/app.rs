use std::time::Duration;

use chrono::Utc;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::clipboard::TextClipboard;
use crate::favorites::{next_numeric_id, FavoritesStore};
use crate::ideas::IdeaSelector;
use crate::models::{Category, Favorite, FavoriteId, Flash, Focus, NewFavorite};
use crate::storage::KeyValueStore;

pub struct App<S, R = ThreadRng> {
    selector: IdeaSelector<R>,
    favorites: FavoritesStore<S>,
    clipboard: Box<dyn TextClipboard>,
    flash_duration: Duration,

    pub category: Category,
    pub current_idea: Option<String>,
    pub saved: Vec<Favorite>,
    pub selected: Option<usize>,
    pub focus: Focus,
    pub confirm_clear: bool,
    flash: Option<Flash>,
    category_changed: bool,
}

impl<S: KeyValueStore, R: Rng> App<S, R> {
    pub fn new(
        selector: IdeaSelector<R>,
        favorites: FavoritesStore<S>,
        clipboard: Box<dyn TextClipboard>,
        category: Category,
        flash_duration: Duration,
    ) -> Self {
        let mut app = Self {
            selector,
            favorites,
            clipboard,
            flash_duration,
            category,
            current_idea: None,
            saved: Vec::new(),
            selected: None,
            focus: Focus::Idea,
            confirm_clear: false,
            flash: None,
            category_changed: false,
        };
        app.refresh_favorites();
        app
    }

    pub fn set_category(&mut self, category: Category) -> bool {
        if category == self.category {
            return false;
        }
        self.category = category;
        self.category_changed = true;
        true
    }

    /// Returns the category if it changed since the last call.
    pub fn take_category_change(&mut self) -> Option<Category> {
        std::mem::take(&mut self.category_changed).then_some(self.category)
    }

    pub fn generate(&mut self) -> Option<&str> {
        self.current_idea = self.selector.pick(self.category);
        if self.current_idea.is_none() {
            self.show_flash("No ideas in this category");
        }
        self.current_idea.as_deref()
    }

    /// Copies the selected favorite when the list has focus, otherwise the shown idea.
    pub fn copy(&mut self) -> bool {
        let text = match self.focus {
            Focus::Favorites => self.selected_favorite().map(|f| f.text.clone()),
            Focus::Idea => self.current_idea.clone(),
        };
        let Some(text) = text else {
            return false;
        };
        match self.clipboard.copy_text(&text) {
            Ok(method) => {
                tracing::debug!(?method, "copied to clipboard");
                self.show_flash("Copied!");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "copy failed");
                self.show_flash("Copy failed");
                false
            }
        }
    }

    pub fn save(&mut self) -> bool {
        let Some(text) = self.current_idea.clone() else {
            return false;
        };
        let now = Utc::now().timestamp_millis();
        let favorite = NewFavorite::new(self.next_id(now), self.category, text).with_timestamp(now);
        if !self.favorites.insert(favorite) {
            return false;
        }
        self.refresh_favorites();
        self.selected = Some(0).filter(|_| !self.saved.is_empty());
        self.show_flash("Saved!");
        true
    }

    pub fn next_id(&self, now_ms: i64) -> FavoriteId {
        next_numeric_id(&self.saved, now_ms)
    }

    pub fn remove_selected(&mut self) -> bool {
        let Some(id) = self.selected_favorite().map(|f| f.id.clone()) else {
            return false;
        };
        let removed = self.favorites.remove(&id);
        self.refresh_favorites();
        removed
    }

    pub fn clear_favorites(&mut self) -> bool {
        self.confirm_clear = false;
        let cleared = self.favorites.clear();
        self.refresh_favorites();
        cleared
    }

    pub fn refresh_favorites(&mut self) {
        self.saved = self.favorites.list();
        self.selected = match self.selected {
            _ if self.saved.is_empty() => None,
            Some(i) => Some(i.min(self.saved.len() - 1)),
            None => Some(0),
        };
    }

    pub fn selected_favorite(&self) -> Option<&Favorite> {
        self.selected.and_then(|i| self.saved.get(i))
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1).min(self.saved.len().saturating_sub(1)));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Idea => Focus::Favorites,
            Focus::Favorites => Focus::Idea,
        };
    }

    pub fn active_flash(&self) -> Option<&str> {
        self.flash
            .as_ref()
            .filter(|f| f.is_active())
            .map(|f| f.text.as_str())
    }

    fn show_flash(&mut self, text: &str) {
        self.flash = Some(Flash::new(text, self.flash_duration));
    }
}
