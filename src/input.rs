use anyhow::Result;
use crossterm::event::KeyCode;
use rand::Rng;

use crate::app::App;
use crate::models::{Category, Focus};
use crate::storage::KeyValueStore;

/// Applies one key press. Returns `Ok(false)` when the user asked to quit.
pub fn handle_key<S: KeyValueStore, R: Rng>(key: KeyCode, app: &mut App<S, R>) -> Result<bool> {
    if app.confirm_clear {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.clear_favorites();
            }
            _ => app.confirm_clear = false,
        }
        return Ok(true);
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(false),
        KeyCode::Char('1') => {
            app.set_category(Category::Writing);
        }
        KeyCode::Char('2') => {
            app.set_category(Category::Drawing);
        }
        KeyCode::Char('3') => {
            app.set_category(Category::Business);
        }
        KeyCode::Char('4') => {
            app.set_category(Category::Coding);
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.set_category(app.category.next());
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.set_category(app.category.prev());
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => {
            app.focus = Focus::Idea;
            app.generate();
        }
        KeyCode::Char('c') => {
            app.copy();
        }
        KeyCode::Char('s') => {
            app.save();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.focus = Focus::Favorites;
            app.select_next();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.focus = Focus::Favorites;
            app.select_prev();
        }
        KeyCode::Char('f') => app.toggle_focus(),
        KeyCode::Esc => app.focus = Focus::Idea,
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            if app.focus == Focus::Favorites {
                app.remove_selected();
            }
        }
        KeyCode::Char('X') => {
            if !app.saved.is_empty() {
                app.confirm_clear = true;
            }
        }
        _ => {}
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{CopyMethod, TextClipboard};
    use crate::favorites::FavoritesStore;
    use crate::ideas::{Catalog, IdeaSelector};
    use crate::storage::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    struct NullClipboard;

    impl TextClipboard for NullClipboard {
        fn copy_text(&mut self, _text: &str) -> Result<CopyMethod> {
            Ok(CopyMethod::System)
        }
    }

    fn app() -> App<MemoryStore, StdRng> {
        App::new(
            IdeaSelector::with_rng(Catalog::builtin(), StdRng::seed_from_u64(3)),
            FavoritesStore::new(MemoryStore::new()),
            Box::new(NullClipboard),
            Category::Writing,
            Duration::from_secs(1),
        )
    }

    fn press(app: &mut App<MemoryStore, StdRng>, keys: &[KeyCode]) {
        for key in keys {
            assert!(handle_key(*key, app).unwrap());
        }
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut app = app();
        assert!(!handle_key(KeyCode::Char('q'), &mut app).unwrap());
    }

    #[test]
    fn number_keys_and_tab_switch_category() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.category, Category::Business);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.category, Category::Coding);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.category, Category::Writing);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.category, Category::Coding);
    }

    #[test]
    fn generate_save_delete_flow() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('g'), KeyCode::Char('s'), KeyCode::Char('g'), KeyCode::Char('s')]);
        assert_eq!(app.saved.len(), 2);

        // Delete only acts on the favorites pane.
        press(&mut app, &[KeyCode::Char('d')]);
        assert_eq!(app.saved.len(), 2);
        press(&mut app, &[KeyCode::Down, KeyCode::Char('d')]);
        assert_eq!(app.saved.len(), 1);
    }

    #[test]
    fn clear_needs_confirmation() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('g'), KeyCode::Char('s')]);

        press(&mut app, &[KeyCode::Char('X'), KeyCode::Char('n')]);
        assert!(!app.confirm_clear);
        assert_eq!(app.saved.len(), 1);

        press(&mut app, &[KeyCode::Char('X'), KeyCode::Char('y')]);
        assert!(app.saved.is_empty());
    }
}
