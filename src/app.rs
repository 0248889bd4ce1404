use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::handlers::search::SearchWorker;
use crate::models::Snippet;
use crate::ui::ai_search::AiSearchState;
use crate::ui::auth_modal::AuthModal;
use crate::ui::community::CommunityState;
use crate::ui::dashboard::DashboardState;
use crate::ui::editor::EditorState;
use crate::ui::header::HeaderState;
use crate::ui::toast::Toasts;
use crate::ui::{
    ai_search, auth_modal, community, components, dashboard, editor, header, start_page, toast,
};
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use std::time::Instant;

/// Page Enumeration
/// Every view the router can show. Only one page is rendered at a time; pages without
/// a dedicated view of their own (profile, settings, search) fall back to the landing
/// page, exactly like an unrecognised page id does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Dashboard,
    Community,
    AiSearch,
    NewSnippet,
    Profile,
    Settings,
    Search,
}

impl Page {
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::Community => "community",
            Page::AiSearch => "ai-search",
            Page::NewSnippet => "new-snippet",
            Page::Profile => "profile",
            Page::Settings => "settings",
            Page::Search => "search",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "home" => Some(Page::Home),
            "dashboard" => Some(Page::Dashboard),
            "community" => Some(Page::Community),
            "ai-search" => Some(Page::AiSearch),
            "new-snippet" => Some(Page::NewSnippet),
            "profile" => Some(Page::Profile),
            "settings" => Some(Page::Settings),
            "search" => Some(Page::Search),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Community => "Community",
            Page::AiSearch => "AI Search",
            Page::NewSnippet => "New Snippet",
            Page::Profile => "Profile",
            Page::Settings => "Settings",
            Page::Search => "Search",
        }
    }

    /// Pages that require a signed-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Page::Dashboard | Page::NewSnippet)
    }
}

/// Resolves the configured start page. Unknown ids and pages behind sign-in open home.
fn launch_page(id: &str) -> Page {
    match Page::from_id(id) {
        Some(page) if !page.is_protected() => page,
        Some(page) => {
            tracing::warn!("Start page {} requires sign-in, opening home", page.id());
            Page::Home
        }
        None => {
            tracing::warn!("Unknown start page {:?}, opening home", id);
            Page::Home
        }
    }
}

/// Events bubbled up from views to the root router
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigate(Page),
    AuthClick,
    Authenticated,
    CloseAuthModal,
    NewSnippet,
    EditSnippet(Snippet),
    SaveSnippet(Snippet),
    CancelEdit,
    Quit,
}

/// Which part of the screen receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    HeaderSearch,
}

/// Main Application State Container
/// Owns the only process-wide state (current page and the auth flag) together with
/// the local state of whichever page is mounted. Views never talk to each other;
/// they hand `Message`s back to `update`, which is the single place navigation and
/// authentication change.
pub struct App {
    pub page: Page,
    pub is_authenticated: bool,
    pub focus: Focus,
    pub selected_menu_item: usize,

    pub header: HeaderState,
    pub auth_modal: AuthModal,
    pub dashboard: DashboardState,
    pub community: CommunityState,
    pub ai_search: AiSearchState,
    pub editor: EditorState,

    pub toasts: Toasts,
    pub clipboard: Box<dyn Clipboard>,
    pub search_worker: SearchWorker,
    pub config: Config,

    pub should_quit: bool,
    pub needs_redraw: bool,
    pub tick_count: u64,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("is_authenticated", &self.is_authenticated)
            .field("focus", &self.focus)
            .field("auth_modal_open", &self.auth_modal.is_open)
            .finish_non_exhaustive()
    }
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(config: Config, clipboard: Box<dyn Clipboard>) -> Result<Self> {
        let search_worker = SearchWorker::new(config.search_delay())?;
        let page = launch_page(&config.start_page);

        Ok(Self {
            page,
            is_authenticated: false,
            focus: Focus::Page,
            selected_menu_item: 0,

            header: HeaderState::default(),
            auth_modal: AuthModal::default(),
            dashboard: DashboardState::new(),
            community: CommunityState::new(),
            ai_search: AiSearchState::new(),
            editor: EditorState::new(None),

            toasts: Toasts::new(config.toast_duration()),
            clipboard,
            search_worker,
            config,

            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        })
    }

    /// Applies a message bubbled up from a view
    pub fn update(&mut self, message: Message) {
        tracing::debug!("update: {:?}", message);

        match message {
            Message::Navigate(page) => self.on_page_change(page),
            Message::AuthClick => self.on_auth_click(),
            Message::Authenticated => self.on_authenticated(),
            Message::CloseAuthModal => self.auth_modal.close(),
            Message::NewSnippet => {
                self.editor = EditorState::new(None);
                self.set_page(Page::NewSnippet);
            }
            Message::EditSnippet(snippet) => {
                self.editor = EditorState::new(Some(snippet));
                self.set_page(Page::NewSnippet);
            }
            Message::SaveSnippet(snippet) => self.on_snippet_saved(snippet),
            Message::CancelEdit => self.set_page(Page::Dashboard),
            Message::Quit => self.should_quit = true,
        }
    }

    /// Navigation entry point for every view. Protected pages open the sign-in prompt
    /// instead; the requested page is not remembered.
    pub fn on_page_change(&mut self, page: Page) {
        if page.is_protected() && !self.is_authenticated {
            tracing::info!("Blocked navigation to {}: not signed in", page.id());
            self.auth_modal.open();
            return;
        }
        if page == Page::NewSnippet && self.page != Page::NewSnippet {
            self.editor = EditorState::new(None);
        }
        self.set_page(page);
    }

    /// Signs out when signed in, otherwise asks for credentials
    pub fn on_auth_click(&mut self) {
        if self.is_authenticated {
            tracing::info!("Signed out");
            self.is_authenticated = false;
            self.set_page(Page::Home);
        } else {
            self.auth_modal.open();
        }
    }

    /// Called by the auth modal after a successful sign-in. Always lands on the dashboard.
    pub fn on_authenticated(&mut self) {
        tracing::info!("Signed in");
        self.is_authenticated = true;
        self.auth_modal.close();
        self.set_page(Page::Dashboard);
    }

    fn on_snippet_saved(&mut self, snippet: Snippet) {
        match serde_json::to_string(&snippet) {
            Ok(json) => tracing::info!("Snippet saved: {}", json),
            Err(e) => tracing::warn!("Snippet saved but could not be serialized: {}", e),
        }
        self.set_page(Page::Dashboard);
    }

    /// Switches the rendered page, mounting fresh state for the page being entered and
    /// tearing down the one being left.
    fn set_page(&mut self, page: Page) {
        if self.page == Page::AiSearch && page != Page::AiSearch {
            self.search_worker.cancel();
            self.ai_search = AiSearchState::new();
        }

        if self.page != page {
            tracing::info!("Navigating {} -> {}", self.page.id(), page.id());
            match page {
                Page::Dashboard => self.dashboard = DashboardState::new(),
                Page::Community => self.community = CommunityState::new(),
                Page::AiSearch => self.ai_search = AiSearchState::new(),
                Page::Home | Page::Profile | Page::Settings | Page::Search => {
                    self.selected_menu_item = 0
                }
                Page::NewSnippet => {}
            }
        }

        self.page = page;
        self.focus = Focus::Page;
        self.needs_redraw = true;
    }

    /// Periodic housekeeping: expire toasts and deliver finished searches
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.toasts.expire(Instant::now());

        for message in self.search_worker.drain() {
            if self.page == Page::AiSearch {
                self.ai_search.apply(message, &mut self.toasts);
            } else {
                tracing::debug!("Dropping search result delivered after leaving AI search");
            }
        }
    }

    /// True while a text field owns the keyboard, so single-letter shortcuts must not fire
    pub fn is_capturing_text(&self) -> bool {
        if self.auth_modal.is_open || self.focus == Focus::HeaderSearch {
            return true;
        }
        match self.page {
            Page::Dashboard => self.dashboard.is_capturing_text(),
            Page::Community => self.community.is_capturing_text(),
            Page::AiSearch => self.ai_search.is_capturing_text(),
            Page::NewSnippet => self.editor.is_capturing_text(),
            _ => false,
        }
    }

    pub fn next_menu_item(&mut self) {
        self.selected_menu_item = (self.selected_menu_item + 1) % start_page::MENU_LEN;
    }

    pub fn previous_menu_item(&mut self) {
        self.selected_menu_item =
            (self.selected_menu_item + start_page::MENU_LEN - 1) % start_page::MENU_LEN;
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

        header::render(frame, chunks[0], self);

        match self.page {
            Page::Dashboard => dashboard::render(frame, chunks[1], self),
            Page::Community => community::render(frame, chunks[1], self),
            Page::AiSearch => ai_search::render(frame, chunks[1], self),
            Page::NewSnippet => editor::render(frame, chunks[1], self),
            Page::Home | Page::Profile | Page::Settings | Page::Search => {
                start_page::render(frame, chunks[1], self)
            }
        }

        components::render_bottom_bar(frame, chunks[2], self);

        if self.auth_modal.is_open {
            auth_modal::render(frame, &self.auth_modal);
        }
        toast::render(frame, &self.toasts);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::models::fixtures;
    use crate::ui::ai_search::SearchPhase;
    use std::time::Duration;

    pub(crate) fn test_app() -> App {
        let config = Config {
            search_delay_ms: 0,
            ..Config::default()
        };
        App::with_clipboard(config, Box::new(MemoryClipboard::default())).unwrap()
    }

    fn wait_for_search(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.ai_search.is_searching() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            app.tick();
        }
    }

    #[test]
    fn test_starts_on_home_signed_out() {
        let app = test_app();
        assert_eq!(app.page, Page::Home);
        assert!(!app.is_authenticated);
        assert!(!app.auth_modal.is_open);
    }

    #[test]
    fn test_protected_page_opens_auth_instead_of_navigating() {
        let mut app = test_app();

        app.update(Message::Navigate(Page::Dashboard));

        assert_eq!(app.page, Page::Home);
        assert!(app.auth_modal.is_open);
    }

    #[test]
    fn test_new_snippet_page_is_protected() {
        let mut app = test_app();
        app.update(Message::Navigate(Page::Community));

        app.update(Message::Navigate(Page::NewSnippet));

        assert_eq!(app.page, Page::Community);
        assert!(app.auth_modal.is_open);
    }

    #[test]
    fn test_authenticated_lands_on_dashboard() {
        let mut app = test_app();
        app.update(Message::Navigate(Page::Dashboard));

        app.update(Message::Authenticated);

        assert_eq!(app.page, Page::Dashboard);
        assert!(app.is_authenticated);
        assert!(!app.auth_modal.is_open);
    }

    #[test]
    fn test_requested_page_is_not_resumed_after_sign_in() {
        let mut app = test_app();
        app.update(Message::Navigate(Page::NewSnippet));

        app.update(Message::Authenticated);

        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn test_public_pages_need_no_auth() {
        let mut app = test_app();
        for page in [Page::Community, Page::AiSearch, Page::Search, Page::Home] {
            app.update(Message::Navigate(page));
            assert_eq!(app.page, page);
        }
        assert!(!app.auth_modal.is_open);
    }

    #[test]
    fn test_auth_click_toggles_and_logout_resets_to_home() {
        let mut app = test_app();

        app.update(Message::AuthClick);
        assert!(app.auth_modal.is_open);
        assert!(!app.is_authenticated);

        app.update(Message::Authenticated);
        app.update(Message::Navigate(Page::Community));

        app.update(Message::AuthClick);
        assert!(!app.is_authenticated);
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_close_auth_modal_keeps_page() {
        let mut app = test_app();
        app.update(Message::Navigate(Page::Dashboard));
        app.update(Message::CloseAuthModal);

        assert!(!app.auth_modal.is_open);
        assert_eq!(app.page, Page::Home);
        assert!(!app.is_authenticated);
    }

    #[test]
    fn test_page_ids_round_trip_and_unknown_is_none() {
        for page in [
            Page::Home,
            Page::Dashboard,
            Page::Community,
            Page::AiSearch,
            Page::NewSnippet,
            Page::Profile,
            Page::Settings,
            Page::Search,
        ] {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
        assert_eq!(Page::from_id("pricing"), None);
    }

    #[test]
    fn test_save_round_trip_returns_to_dashboard() {
        let mut app = test_app();
        app.update(Message::Authenticated);
        app.update(Message::NewSnippet);
        assert_eq!(app.page, Page::NewSnippet);

        app.editor.title = "Foo".to_string();
        app.editor.code = "x".to_string();
        let snippet = app
            .editor
            .handle_save(&app.config.author, &mut app.toasts)
            .unwrap();
        app.update(Message::SaveSnippet(snippet));

        assert_eq!(app.page, Page::Dashboard);
        assert_eq!(app.dashboard.snippets, fixtures::dashboard_snippets());
    }

    #[test]
    fn test_invalid_save_leaves_page_unchanged() {
        let mut app = test_app();
        app.update(Message::Authenticated);
        app.update(Message::NewSnippet);

        app.editor.title.clear();
        let result = app.editor.handle_save(&app.config.author, &mut app.toasts);

        assert!(result.is_err());
        assert_eq!(app.page, Page::NewSnippet);
        assert_eq!(app.toasts.latest().unwrap().message, "Please enter a title");
    }

    #[test]
    fn test_edit_snippet_prefills_editor() {
        let mut app = test_app();
        app.update(Message::Authenticated);
        let snippet = fixtures::dashboard_snippets().remove(1);

        app.update(Message::EditSnippet(snippet.clone()));

        assert_eq!(app.page, Page::NewSnippet);
        assert_eq!(app.editor.title, snippet.title);
        assert!(app.editor.is_editing());
    }

    #[test]
    fn test_navigating_to_open_editor_keeps_draft() {
        let mut app = test_app();
        app.update(Message::Authenticated);
        app.update(Message::Navigate(Page::NewSnippet));
        app.editor.title = "Draft".to_string();

        app.update(Message::Navigate(Page::NewSnippet));

        assert_eq!(app.editor.title, "Draft");
    }

    #[test]
    fn test_cancel_edit_returns_to_dashboard() {
        let mut app = test_app();
        app.update(Message::Authenticated);
        app.update(Message::NewSnippet);

        app.update(Message::CancelEdit);

        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn test_entering_dashboard_mounts_fresh_state() {
        let mut app = test_app();
        app.update(Message::Authenticated);
        app.dashboard.search_query = "sql".to_string();

        app.update(Message::Navigate(Page::Community));
        app.update(Message::Navigate(Page::Dashboard));

        assert!(app.dashboard.search_query.is_empty());
    }

    #[test]
    fn test_ai_search_resolves_through_tick() {
        let mut app = test_app();
        app.update(Message::Navigate(Page::AiSearch));
        app.ai_search.query = "react hooks".to_string();

        assert!(app.ai_search.handle_search(&mut app.search_worker));
        wait_for_search(&mut app);

        assert_eq!(app.ai_search.phase, SearchPhase::Results);
        assert_eq!(app.ai_search.results.len(), 3);
        assert_eq!(
            app.toasts.latest().unwrap().message,
            "Found 3 relevant snippets using AI"
        );
    }

    #[test]
    fn test_leaving_ai_search_discards_pending_result() {
        let mut app = test_app();
        app.update(Message::Navigate(Page::AiSearch));
        app.ai_search.query = "anything".to_string();
        app.ai_search.handle_search(&mut app.search_worker);

        app.update(Message::Navigate(Page::Community));
        std::thread::sleep(Duration::from_millis(50));
        app.tick();
        app.update(Message::Navigate(Page::AiSearch));
        app.tick();

        assert_eq!(app.ai_search.phase, SearchPhase::Idle);
        assert!(app.ai_search.results.is_empty());
    }

    #[test]
    fn test_configured_start_page() {
        let config = Config {
            start_page: "ai-search".to_string(),
            ..Config::default()
        };
        let app = App::with_clipboard(config, Box::new(MemoryClipboard::default())).unwrap();
        assert_eq!(app.page, Page::AiSearch);
    }

    #[test]
    fn test_unknown_or_protected_start_page_opens_home() {
        assert_eq!(launch_page("pricing"), Page::Home);
        assert_eq!(launch_page("dashboard"), Page::Home);
        assert_eq!(launch_page("community"), Page::Community);
    }

    #[test]
    fn test_quit_message_sets_flag() {
        let mut app = test_app();
        app.update(Message::Quit);
        assert!(app.should_quit);
    }
}
