use chrono::{DateTime, Local};
use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::app::App;
use crate::models::{Category, Favorite, Focus};
use crate::storage::KeyValueStore;
use crate::theme::Theme;

const FOOTER_KEYS: &str =
    "1-4/Tab Category | Enter/g Generate | c Copy | s Save | ↑/↓ Favorites | d Remove | X Clear all | q Quit";

/// Renders the whole screen.
pub fn render<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, theme: &Theme) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // category tabs
            Constraint::Length(7), // idea
            Constraint::Min(5),    // favorites
            Constraint::Length(3), // footer
        ])
        .split(area);

    render_tabs(f, app.category, theme, chunks[0]);
    render_idea(f, app, theme, chunks[1]);
    render_favorites(f, app, theme, chunks[2]);

    let footer = Paragraph::new(FOOTER_KEYS)
        .block(Block::default().borders(Borders::ALL))
        .style(theme.footer);
    f.render_widget(footer, chunks[3]);

    if app.confirm_clear {
        let popup_area = centered_rect(40, 20, area);
        f.render_widget(Clear, popup_area);
        let block = Block::default()
            .title("Clear favorites")
            .borders(Borders::ALL)
            .style(theme.popup_border);
        let para = Paragraph::new(format!(
            "Remove all {} saved ideas?\n\ny = yes, any other key = cancel",
            app.saved.len()
        ))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme.popup_text);
        f.render_widget(para, popup_area);
    }
}

fn render_tabs(f: &mut Frame, current: Category, theme: &Theme, area: Rect) {
    let titles: Vec<Line> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| Line::from(format!(" {} {} ", i + 1, c.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().title("What shall I make?").borders(Borders::ALL))
        .select(current.index())
        .style(theme.tab_inactive)
        .highlight_style(theme.tab_active)
        .divider(symbols::line::VERTICAL);
    f.render_widget(tabs, area);
}

fn render_idea<S: KeyValueStore, R: Rng>(f: &mut Frame, app: &App<S, R>, theme: &Theme, area: Rect) {
    let border = if app.focus == Focus::Idea {
        theme.focus_border
    } else {
        theme.blurred_border
    };

    let mut title = vec![Span::styled(app.category.label(), theme.category_badge)];
    if let Some(flash) = app.active_flash() {
        title.push(Span::raw(" · "));
        title.push(Span::styled(flash, theme.flash));
    }

    let body = match app.current_idea.as_deref() {
        Some(idea) => Line::from(Span::styled(idea, theme.idea_text)),
        None => Line::from(Span::styled(
            "Press Enter to generate an idea",
            theme.idea_placeholder,
        )),
    };

    let para = Paragraph::new(vec![Line::raw(""), body])
        .block(
            Block::default()
                .title(Line::from(title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn render_favorites<S: KeyValueStore, R: Rng>(
    f: &mut Frame,
    app: &App<S, R>,
    theme: &Theme,
    area: Rect,
) {
    let border = if app.focus == Focus::Favorites {
        theme.focus_border
    } else {
        theme.blurred_border
    };
    let block = Block::default()
        .title(format!("Favorites ({})", app.saved.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    if app.saved.is_empty() {
        let hint = Paragraph::new("No favorites yet. Save some ideas!")
            .block(block)
            .alignment(Alignment::Center)
            .style(theme.empty_hint);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .saved
        .iter()
        .map(|fav| favorite_item(fav, theme))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(theme.selection_fg).bg(theme.selection_bg))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(app.selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn favorite_item<'a>(fav: &'a Favorite, theme: &Theme) -> ListItem<'a> {
    let saved_at = DateTime::from_timestamp_millis(fav.timestamp)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(format!("[{}]", fav.category.label()), theme.category_badge),
            Span::raw(" "),
            Span::styled(saved_at, Style::default().fg(theme.text_secondary)),
        ]),
        Line::from(Span::styled(fav.text.as_str(), Style::default().fg(theme.text))),
        Line::raw(""),
    ])
}

/// Centers a rectangle within another rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default().direction(Direction::Vertical)
        .constraints([Constraint::Percentage((100-percent_y)/2), Constraint::Percentage(percent_y), Constraint::Percentage((100-percent_y)/2)]).split(r)[1];
    Layout::default().direction(Direction::Horizontal)
        .constraints([Constraint::Percentage((100-percent_x)/2), Constraint::Percentage(percent_x), Constraint::Percentage((100-percent_x)/2)]).split(vertical)[1]
}
