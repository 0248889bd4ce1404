//! Dashboard
//!
//! The signed-in user's snippet list with search, language filter and tabs. The sort
//! selector is kept as state and shown, but the list is never reordered by it.

use crate::app::{App, Message};
use crate::clipboard::Clipboard;
use crate::models::{Snippet, SnippetLanguage, fixtures};
use crate::ui::colors::RosePine;
use crate::ui::components::{format_count, render_input, stat_line, tab_line};
use crate::ui::snippet_card::{self, CardAction, CardEvent, SnippetCard};
use crate::ui::toast::Toasts;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListState, Paragraph, Widget},
};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageFilter {
    #[default]
    All,
    Only(SnippetLanguage),
}

impl LanguageFilter {
    pub fn matches(&self, language: SnippetLanguage) -> bool {
        match self {
            LanguageFilter::All => true,
            LanguageFilter::Only(l) => *l == language,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LanguageFilter::All => "All Languages",
            LanguageFilter::Only(l) => l.display_name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Recent,
    Popular,
    Likes,
    Views,
}

impl SortBy {
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Recent => "Most Recent",
            SortBy::Popular => "Most Popular",
            SortBy::Likes => "Most Liked",
            SortBy::Views => "Most Viewed",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortBy::Recent => SortBy::Popular,
            SortBy::Popular => SortBy::Likes,
            SortBy::Likes => SortBy::Views,
            SortBy::Views => SortBy::Recent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    All,
    Public,
    Private,
    Favorites,
}

impl DashboardTab {
    const TABS: [DashboardTab; 4] = [
        DashboardTab::All,
        DashboardTab::Public,
        DashboardTab::Private,
        DashboardTab::Favorites,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::All => "All",
            DashboardTab::Public => "Public",
            DashboardTab::Private => "Private",
            DashboardTab::Favorites => "Favorites",
        }
    }

    /// Favorites has no backing data and accepts every snippet
    pub fn matches(&self, snippet: &Snippet) -> bool {
        match self {
            DashboardTab::All | DashboardTab::Favorites => true,
            DashboardTab::Public => snippet.is_public,
            DashboardTab::Private => !snippet.is_public,
        }
    }

    fn index(&self) -> usize {
        Self::TABS.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::TABS[(self.index() + 1) % Self::TABS.len()]
    }

    pub fn previous(&self) -> Self {
        Self::TABS[(self.index() + Self::TABS.len() - 1) % Self::TABS.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub public: usize,
    pub likes: u32,
    pub views: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardFocus {
    #[default]
    List,
    Search,
}

#[derive(Debug)]
pub struct DashboardState {
    pub snippets: Vec<Snippet>,
    pub search_query: String,
    pub filter_language: LanguageFilter,
    pub sort_by: SortBy,
    pub active_tab: DashboardTab,
    pub focus: DashboardFocus,
    pub selected: usize,
    cards: HashMap<String, SnippetCard>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            snippets: fixtures::dashboard_snippets(),
            search_query: String::new(),
            filter_language: LanguageFilter::All,
            sort_by: SortBy::Recent,
            active_tab: DashboardTab::All,
            focus: DashboardFocus::List,
            selected: 0,
            cards: HashMap::new(),
        }
    }

    /// Snippets passing the search, language and tab predicates, in fixture order
    pub fn filtered(&self) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|s| s.matches_query(&self.search_query))
            .filter(|s| self.filter_language.matches(s.language))
            .filter(|s| self.active_tab.matches(s))
            .collect()
    }

    /// Totals over every snippet, regardless of the current filters
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total: self.snippets.len(),
            public: self.snippets.iter().filter(|s| s.is_public).count(),
            likes: self.snippets.iter().map(|s| s.likes).sum(),
            views: self.snippets.iter().map(|s| s.views).sum(),
        }
    }

    /// Distinct languages in first-seen order
    pub fn languages(&self) -> Vec<SnippetLanguage> {
        let mut seen = Vec::new();
        for snippet in &self.snippets {
            if !seen.contains(&snippet.language) {
                seen.push(snippet.language);
            }
        }
        seen
    }

    /// all -> first language -> ... -> last language -> all
    pub fn cycle_language_filter(&mut self) {
        let languages = self.languages();
        self.filter_language = match self.filter_language {
            LanguageFilter::All => languages
                .first()
                .map_or(LanguageFilter::All, |l| LanguageFilter::Only(*l)),
            LanguageFilter::Only(current) => {
                match languages.iter().position(|l| *l == current) {
                    Some(i) if i + 1 < languages.len() => LanguageFilter::Only(languages[i + 1]),
                    _ => LanguageFilter::All,
                }
            }
        };
        self.clamp_selection();
    }

    pub fn cycle_sort(&mut self) {
        self.sort_by = self.sort_by.next();
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.clamp_selection();
    }

    pub fn previous_tab(&mut self) {
        self.active_tab = self.active_tab.previous();
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        self.filtered().get(self.selected).copied()
    }

    pub fn card(&self, id: &str) -> SnippetCard {
        self.cards.get(id).cloned().unwrap_or_default()
    }

    pub fn focus_search(&mut self) {
        self.focus = DashboardFocus::Search;
    }

    pub fn blur(&mut self) {
        self.focus = DashboardFocus::List;
    }

    pub fn is_capturing_text(&self) -> bool {
        self.focus == DashboardFocus::Search
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Runs a card action on the selected snippet and reacts to what the card bubbles up
    pub fn handle_card_action(
        &mut self,
        action: CardAction,
        clipboard: &mut dyn Clipboard,
        toasts: &mut Toasts,
    ) -> Option<Message> {
        let snippet = self.selected_snippet()?.clone();
        let card = self.cards.entry(snippet.id.clone()).or_default();

        match card.handle(action, &snippet, clipboard, toasts)? {
            CardEvent::View(_) => {
                toasts.info("Snippet viewer will open here");
                None
            }
            CardEvent::Edit(snippet) => {
                toasts.info(format!("Editing \"{}\"", snippet.title));
                Some(Message::EditSnippet(snippet))
            }
            CardEvent::Delete(id) => {
                tracing::info!("Delete requested for snippet {}", id);
                None
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.dashboard;

    let block = Block::bordered()
        .title(" My Snippets ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(inner);

    render_stats(frame, chunks[0], state.stats());
    render_controls(frame, chunks[1], state);

    let tab_titles: Vec<&str> = DashboardTab::TABS.iter().map(|t| t.label()).collect();
    Paragraph::new(tab_line(&tab_titles, state.active_tab.index()))
        .render(chunks[2], frame.buffer_mut());

    let filtered = state.filtered();
    if filtered.is_empty() {
        render_empty(frame, chunks[3]);
        return;
    }

    let body = Layout::horizontal([Constraint::Percentage(40), Constraint::Fill(1)]).split(chunks[3]);

    let items: Vec<_> = filtered
        .iter()
        .map(|s| snippet_card::list_item(s, &state.card(&s.id), body[0].width))
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(format!(" {} snippets ", filtered.len()))
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    frame.render_stateful_widget(list, body[0], &mut list_state);

    if let Some(snippet) = filtered.get(state.selected) {
        snippet_card::render(
            frame,
            body[1],
            snippet,
            &state.card(&snippet.id),
            &app.config.syntax_theme,
        );
    }
}

fn render_stats(frame: &mut Frame, area: Rect, stats: DashboardStats) {
    let cells = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
    let entries = [
        ("Total Snippets", stats.total.to_string(), RosePine::IRIS),
        ("Public", stats.public.to_string(), RosePine::FOAM),
        ("Total Likes", format_count(stats.likes), RosePine::LOVE),
        ("Total Views", format_count(stats.views), RosePine::GOLD),
    ];
    for (cell, (label, value, color)) in cells.iter().zip(entries) {
        Paragraph::new(stat_line(label, value, color))
            .alignment(Alignment::Center)
            .render(*cell, frame.buffer_mut());
    }
}

fn render_controls(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let cells = Layout::horizontal([
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Fill(1),
    ])
    .split(area);

    render_input(
        frame,
        cells[0],
        "Search",
        &state.search_query,
        "Search your snippets...",
        state.focus == DashboardFocus::Search,
    );

    for (cell, title, value) in [
        (cells[1], "Language [l]", state.filter_language.label()),
        (cells[2], "Sort [o]", state.sort_by.label()),
    ] {
        Paragraph::new(value)
            .style(Style::default().fg(RosePine::TEXT))
            .block(
                Block::bordered()
                    .title(format!(" {} ", title))
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
            )
            .render(cell, frame.buffer_mut());
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No snippets found",
            Style::default().fg(RosePine::TEXT).bold(),
        )),
        Line::from(Span::styled(
            "Try adjusting your search or filters",
            Style::default().fg(RosePine::SUBTLE),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[n] Create Snippet",
            Style::default().fg(RosePine::FOAM),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(area, frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::time::Duration;

    fn ids(state: &DashboardState) -> Vec<&str> {
        state.filtered().iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_shows_everything_in_fixture_order() {
        let state = DashboardState::new();
        assert_eq!(ids(&state), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_react_query_matches_only_react_snippets() {
        let mut state = DashboardState::new();
        state.search_query = "react".to_string();
        assert_eq!(ids(&state), vec!["1"]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_searches_tags() {
        let mut state = DashboardState::new();
        state.search_query = "PANDAS".to_string();
        assert_eq!(ids(&state), vec!["2"]);

        state.search_query = "cte".to_string();
        assert_eq!(ids(&state), vec!["4"]);
    }

    #[test]
    fn test_filter_predicates_are_conjunctive() {
        let mut state = DashboardState::new();
        state.filter_language = LanguageFilter::Only(SnippetLanguage::Python);
        assert_eq!(ids(&state), vec!["2"]);

        state.active_tab = DashboardTab::Public;
        assert!(ids(&state).is_empty());

        state.active_tab = DashboardTab::Private;
        assert_eq!(ids(&state), vec!["2"]);
    }

    #[test]
    fn test_favorites_tab_matches_everything() {
        let mut state = DashboardState::new();
        state.active_tab = DashboardTab::Favorites;
        assert_eq!(ids(&state).len(), 4);
    }

    #[test]
    fn test_sort_does_not_reorder() {
        let mut state = DashboardState::new();
        let before = ids(&state).iter().map(|s| s.to_string()).collect::<Vec<_>>();
        for _ in 0..3 {
            state.cycle_sort();
            assert_eq!(ids(&state), before);
        }
        assert_eq!(state.sort_by, SortBy::Views);
    }

    #[test]
    fn test_stats_ignore_filters() {
        let mut state = DashboardState::new();
        state.search_query = "zzz".to_string();

        let stats = state.stats();
        assert_eq!(
            stats,
            DashboardStats {
                total: 4,
                public: 3,
                likes: 234 + 156 + 89 + 445,
                views: 1200 + 890 + 567 + 2100,
            }
        );
    }

    #[test]
    fn test_language_cycle_wraps_through_all() {
        let mut state = DashboardState::new();
        assert_eq!(
            state.languages(),
            vec![
                SnippetLanguage::React,
                SnippetLanguage::Python,
                SnippetLanguage::Css,
                SnippetLanguage::Sql
            ]
        );

        state.cycle_language_filter();
        assert_eq!(
            state.filter_language,
            LanguageFilter::Only(SnippetLanguage::React)
        );
        for _ in 0..4 {
            state.cycle_language_filter();
        }
        assert_eq!(state.filter_language, LanguageFilter::All);
    }

    #[test]
    fn test_selection_clamps_when_list_shrinks() {
        let mut state = DashboardState::new();
        state.select_next();
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 3);

        for c in "sql".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_snippet().unwrap().id, "4");
    }

    #[test]
    fn test_edit_action_opens_editor_with_snippet() {
        let mut state = DashboardState::new();
        let mut clipboard = MemoryClipboard::default();
        let mut toasts = Toasts::new(Duration::from_secs(3));
        state.select_next();

        let message = state.handle_card_action(CardAction::Edit, &mut clipboard, &mut toasts);

        assert!(matches!(message, Some(Message::EditSnippet(s)) if s.id == "2"));
    }

    #[test]
    fn test_view_and_delete_do_not_navigate() {
        let mut state = DashboardState::new();
        let mut clipboard = MemoryClipboard::default();
        let mut toasts = Toasts::new(Duration::from_secs(3));

        assert!(state
            .handle_card_action(CardAction::View, &mut clipboard, &mut toasts)
            .is_none());
        assert_eq!(
            toasts.latest().unwrap().message,
            "Snippet viewer will open here"
        );

        assert!(state
            .handle_card_action(CardAction::Delete, &mut clipboard, &mut toasts)
            .is_none());
        assert_eq!(state.snippets.len(), 4);
    }

    #[test]
    fn test_like_is_remembered_per_card() {
        let mut state = DashboardState::new();
        let mut clipboard = MemoryClipboard::default();
        let mut toasts = Toasts::new(Duration::from_secs(3));

        state.handle_card_action(CardAction::Like, &mut clipboard, &mut toasts);

        assert!(state.card("1").is_liked);
        assert!(!state.card("2").is_liked);
    }

    #[test]
    fn test_card_action_without_selection_is_noop() {
        let mut state = DashboardState::new();
        state.search_query = "nothing matches this".to_string();
        let mut clipboard = MemoryClipboard::default();
        let mut toasts = Toasts::new(Duration::from_secs(3));

        assert!(state
            .handle_card_action(CardAction::Copy, &mut clipboard, &mut toasts)
            .is_none());
        assert!(clipboard.contents.is_none());
    }
}
