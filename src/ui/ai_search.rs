//! AI search page
//!
//! `Idle -> Searching -> Results`. Any non-blank query resolves, after the configured
//! delay, to the same fixed result set. The page only accepts the completion matching
//! the generation it is waiting for.

use crate::app::App;
use crate::clipboard::{Clipboard, copy_with_feedback};
use crate::handlers::search::{SearchMessage, SearchWorker};
use crate::models::{AiSearchResult, fixtures};
use crate::ui::colors::{RosePine, language_color};
use crate::ui::components::{format_count, highlighted_lines, render_input, tab_line};
use crate::ui::toast::Toasts;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget, Wrap},
};
use std::collections::HashSet;

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching {
        generation: u64,
    },
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiTab {
    #[default]
    SmartSearch,
    Trending,
    Recent,
}

impl AiTab {
    const TABS: [AiTab; 3] = [AiTab::SmartSearch, AiTab::Trending, AiTab::Recent];

    pub fn label(&self) -> &'static str {
        match self {
            AiTab::SmartSearch => "Smart Search",
            AiTab::Trending => "Trending",
            AiTab::Recent => "Recent",
        }
    }

    fn index(&self) -> usize {
        match self {
            AiTab::SmartSearch => 0,
            AiTab::Trending => 1,
            AiTab::Recent => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::TABS[(self.index() + 1) % Self::TABS.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiFocus {
    #[default]
    Browse,
    Query,
}

#[derive(Debug, Default)]
pub struct AiSearchState {
    pub query: String,
    pub phase: SearchPhase,
    pub results: Vec<AiSearchResult>,
    pub active_tab: AiTab,
    pub focus: AiFocus,
    pub selected_suggestion: usize,
    pub selected_result: usize,
    liked: HashSet<String>,
}

impl AiSearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    /// Starts a search for the current query. Blank queries are ignored.
    pub fn handle_search(&mut self, worker: &mut SearchWorker) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return false;
        }

        let generation = worker.start(query);
        tracing::info!("AI search #{} started: {:?}", generation, query);

        self.phase = SearchPhase::Searching { generation };
        self.results.clear();
        self.selected_result = 0;
        self.focus = AiFocus::Browse;
        true
    }

    /// Puts a suggested prompt into the query box and searches for it
    pub fn select_suggestion(&mut self, index: usize, worker: &mut SearchWorker) -> bool {
        let Some(suggestion) = fixtures::AI_SUGGESTIONS.get(index) else {
            return false;
        };
        self.query = suggestion.to_string();
        self.handle_search(worker)
    }

    /// Accepts a completed search if it is the one currently awaited
    pub fn apply(&mut self, message: SearchMessage, toasts: &mut Toasts) {
        let SearchMessage::Completed {
            generation,
            query,
            results,
        } = message;

        if self.phase != (SearchPhase::Searching { generation }) {
            tracing::debug!("Discarding stale search #{} for {:?}", generation, query);
            return;
        }

        tracing::info!("AI search #{} returned {} results", generation, results.len());
        toasts.success(format!("Found {} relevant snippets using AI", results.len()));

        self.results = results;
        self.selected_result = 0;
        self.phase = SearchPhase::Results;
    }

    /// Back to idle, dropping any pending search
    pub fn reset(&mut self, worker: &mut SearchWorker) {
        worker.cancel();
        self.phase = SearchPhase::Idle;
        self.results.clear();
        self.selected_result = 0;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn select_next(&mut self) {
        match self.phase {
            SearchPhase::Results if !self.results.is_empty() => {
                self.selected_result = (self.selected_result + 1).min(self.results.len() - 1);
            }
            SearchPhase::Idle => {
                self.selected_suggestion =
                    (self.selected_suggestion + 1).min(fixtures::AI_SUGGESTIONS.len() - 1);
            }
            _ => {}
        }
    }

    pub fn select_previous(&mut self) {
        match self.phase {
            SearchPhase::Results => self.selected_result = self.selected_result.saturating_sub(1),
            SearchPhase::Idle => {
                self.selected_suggestion = self.selected_suggestion.saturating_sub(1)
            }
            SearchPhase::Searching { .. } => {}
        }
    }

    pub fn selected(&self) -> Option<&AiSearchResult> {
        match self.phase {
            SearchPhase::Results => self.results.get(self.selected_result),
            _ => None,
        }
    }

    pub fn copy_selected(&self, clipboard: &mut dyn Clipboard, toasts: &mut Toasts) {
        if let Some(result) = self.selected() {
            copy_with_feedback(clipboard, &result.code, toasts);
        }
    }

    pub fn like_selected(&mut self, toasts: &mut Toasts) {
        let Some(id) = self.selected().map(|r| r.id.clone()) else {
            return;
        };
        self.liked.insert(id);
        toasts.success("Added to favorites!");
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn focus_query(&mut self) {
        self.focus = AiFocus::Query;
    }

    pub fn blur(&mut self) {
        self.focus = AiFocus::Browse;
    }

    pub fn is_capturing_text(&self) -> bool {
        self.focus == AiFocus::Query
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.ai_search;

    let block = Block::bordered()
        .title(" ✨ AI-Powered Code Search ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(inner);

    render_input(
        frame,
        chunks[0],
        "Describe what you need [i]",
        &state.query,
        "e.g. React hook for debouncing an input",
        state.focus == AiFocus::Query,
    );

    let tab_titles: Vec<&str> = AiTab::TABS.iter().map(|t| t.label()).collect();
    Paragraph::new(tab_line(&tab_titles, state.active_tab.index()))
        .render(chunks[1], frame.buffer_mut());

    match state.active_tab {
        AiTab::SmartSearch => {}
        AiTab::Trending => {
            render_placeholder(frame, chunks[2], "Trending searches will appear here");
            return;
        }
        AiTab::Recent => {
            render_placeholder(frame, chunks[2], "Your recent searches will appear here");
            return;
        }
    }

    match state.phase {
        SearchPhase::Idle => render_suggestions(frame, chunks[2], state),
        SearchPhase::Searching { .. } => render_searching(frame, chunks[2], app.tick_count),
        SearchPhase::Results => render_results(frame, chunks[2], app),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::MUTED).italic())
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(area, frame.buffer_mut());
}

fn render_suggestions(frame: &mut Frame, area: Rect, state: &AiSearchState) {
    let items: Vec<ListItem> = fixtures::AI_SUGGESTIONS
        .iter()
        .map(|s| ListItem::new(format!("  {}", s)).style(Style::default().fg(RosePine::TEXT)))
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(" Try asking ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .highlight_style(
            Style::default()
                .fg(RosePine::LOVE)
                .bg(RosePine::HIGHLIGHT_LOW)
                .bold(),
        )
        .highlight_symbol("▶");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_suggestion));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_searching(frame: &mut Frame, area: Rect, tick: u64) {
    let frame_char = SPINNER[(tick as usize) % SPINNER.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Searching with AI...", frame_char),
            Style::default().fg(RosePine::IRIS).bold(),
        )),
        Line::from(Span::styled(
            "Analyzing code patterns and semantics",
            Style::default().fg(RosePine::SUBTLE),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.ai_search;
    let body = Layout::horizontal([Constraint::Percentage(45), Constraint::Fill(1)]).split(area);

    let items: Vec<ListItem> = state
        .results
        .iter()
        .map(|r| {
            let heart = if state.is_liked(&r.id) { "♥" } else { "♡" };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{}% ", r.relevance_score),
                        Style::default().fg(RosePine::FOAM).bold(),
                    ),
                    Span::styled(r.title.clone(), Style::default().fg(RosePine::TEXT).bold()),
                ]),
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", r.language.display_name()),
                        Style::default()
                            .fg(RosePine::BASE)
                            .bg(language_color(r.language)),
                    ),
                    Span::styled(
                        format!(" {}", r.tags.iter().map(|t| format!("#{}", t)).collect::<Vec<_>>().join(" ")),
                        Style::default().fg(RosePine::IRIS),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "by {} · {} {} · 👁 {}",
                        r.author,
                        heart,
                        format_count(r.likes),
                        format_count(r.views)
                    ),
                    Style::default().fg(RosePine::MUTED),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(format!(" {} results ", state.results.len()))
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_result));
    frame.render_stateful_widget(list, body[0], &mut list_state);

    let Some(result) = state.selected() else {
        return;
    };

    let detail = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(body[1]);

    Paragraph::new(result.description.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(RosePine::SUBTLE))
        .block(
            Block::bordered()
                .title(format!(" {} ", result.title))
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::IRIS)),
        )
        .render(detail[0], frame.buffer_mut());

    Paragraph::new(highlighted_lines(
        &result.code,
        result.language,
        &app.config.syntax_theme,
    ))
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH).bg(RosePine::SURFACE)),
    )
    .render(detail[1], frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn worker() -> SearchWorker {
        SearchWorker::new(Duration::ZERO).unwrap()
    }

    fn toasts() -> Toasts {
        Toasts::new(Duration::from_secs(3))
    }

    fn run_to_completion(state: &mut AiSearchState, worker: &SearchWorker, toasts: &mut Toasts) {
        let message = worker.receiver().recv_timeout(WAIT).unwrap();
        state.apply(message, toasts);
    }

    #[test]
    fn test_blank_query_stays_idle() {
        let mut worker = worker();
        let mut state = AiSearchState::new();

        for query in ["", "   ", "\t\n"] {
            state.query = query.to_string();
            assert!(!state.handle_search(&mut worker));
            assert_eq!(state.phase, SearchPhase::Idle);
            assert!(state.results.is_empty());
        }
        assert!(worker.drain().is_empty());
    }

    #[test]
    fn test_any_query_resolves_to_fixed_results() {
        for query in ["react hooks", "cobol mainframe", "?"] {
            let mut worker = worker();
            let mut toasts = toasts();
            let mut state = AiSearchState::new();
            state.query = query.to_string();

            assert!(state.handle_search(&mut worker));
            assert!(state.is_searching());
            run_to_completion(&mut state, &worker, &mut toasts);

            assert_eq!(state.phase, SearchPhase::Results);
            assert_eq!(state.results, fixtures::ai_search_results());
            assert_eq!(state.results.len(), 3);
        }
    }

    #[test]
    fn test_completion_toasts_result_count() {
        let mut worker = worker();
        let mut toasts = toasts();
        let mut state = AiSearchState::new();
        state.query = "sql".to_string();

        state.handle_search(&mut worker);
        run_to_completion(&mut state, &worker, &mut toasts);

        assert_eq!(
            toasts.latest().unwrap().message,
            "Found 3 relevant snippets using AI"
        );
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut toasts = toasts();
        let mut state = AiSearchState::new();
        state.phase = SearchPhase::Searching { generation: 2 };

        state.apply(
            SearchMessage::Completed {
                generation: 1,
                query: "old".to_string(),
                results: fixtures::ai_search_results(),
            },
            &mut toasts,
        );

        assert_eq!(state.phase, SearchPhase::Searching { generation: 2 });
        assert!(state.results.is_empty());
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_completion_after_reset_is_ignored() {
        let mut toasts = toasts();
        let mut state = AiSearchState::new();

        state.apply(
            SearchMessage::Completed {
                generation: 1,
                query: "late".to_string(),
                results: fixtures::ai_search_results(),
            },
            &mut toasts,
        );

        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_suggestion_sets_query_and_searches() {
        let mut worker = worker();
        let mut state = AiSearchState::new();
        state.select_next();

        assert!(state.select_suggestion(state.selected_suggestion, &mut worker));
        assert_eq!(state.query, fixtures::AI_SUGGESTIONS[1]);
        assert!(state.is_searching());
    }

    #[test]
    fn test_suggestion_out_of_range() {
        let mut worker = worker();
        let mut state = AiSearchState::new();
        assert!(!state.select_suggestion(99, &mut worker));
        assert_eq!(state.phase, SearchPhase::Idle);
    }

    #[test]
    fn test_copy_and_like_selected_result() {
        let mut worker = worker();
        let mut toasts = toasts();
        let mut clipboard = MemoryClipboard::default();
        let mut state = AiSearchState::new();
        state.query = "hooks".to_string();
        state.handle_search(&mut worker);
        run_to_completion(&mut state, &worker, &mut toasts);

        state.select_next();
        state.copy_selected(&mut clipboard, &mut toasts);
        assert_eq!(clipboard.contents, Some(state.results[1].code.clone()));

        state.like_selected(&mut toasts);
        assert!(state.is_liked(&state.results[1].id));
        assert_eq!(toasts.latest().unwrap().message, "Added to favorites!");
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut worker = SearchWorker::new(Duration::from_millis(100)).unwrap();
        let mut state = AiSearchState::new();
        state.query = "anything".to_string();
        state.handle_search(&mut worker);

        state.reset(&mut worker);
        std::thread::sleep(Duration::from_millis(250));

        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(worker.drain().is_empty());
    }
}
