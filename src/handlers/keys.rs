//! Keyboard Input Handling Module
//!
//! Translates key presses into `Message`s for the router or into operations on the
//! mounted page's state. Text fields swallow every key while focused; otherwise the
//! page gets first pick and unclaimed keys fall through to the global bindings.

use crate::app::{App, Focus, Message, Page};
use crate::ui::ai_search::SearchPhase;
use crate::ui::snippet_card::CardAction;
use crate::ui::start_page;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main keyboard event handler and dispatcher. Returns true when the app should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return app.should_quit;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.update(Message::Quit);
        return true;
    }

    if app.auth_modal.is_open {
        handle_auth_modal_keys(key, app);
    } else if app.focus == Focus::HeaderSearch {
        handle_header_search_keys(key, app);
    } else if !handle_page_keys(key, app) {
        handle_global_keys(key, app);
    }

    app.should_quit
}

fn handle_global_keys(key: KeyEvent, app: &mut App) {
    let message = match key.code {
        KeyCode::Char('h') => Message::Navigate(Page::Home),
        KeyCode::Char('d') => Message::Navigate(Page::Dashboard),
        KeyCode::Char('c') => Message::Navigate(Page::Community),
        KeyCode::Char('a') => Message::Navigate(Page::AiSearch),
        KeyCode::Char('n') => Message::Navigate(Page::NewSnippet),
        KeyCode::Char('p') => Message::Navigate(Page::Profile),
        KeyCode::Char('s') => Message::Navigate(Page::Settings),
        KeyCode::Char('u') => Message::AuthClick,
        KeyCode::Char('q') | KeyCode::Char('Q') => Message::Quit,
        KeyCode::Char('/') => {
            app.focus = Focus::HeaderSearch;
            return;
        }
        _ => return,
    };
    app.update(message);
}

fn handle_auth_modal_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.update(Message::CloseAuthModal),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.auth_modal.toggle_field()
        }
        KeyCode::Enter => {
            if let Some(message) = app.auth_modal.submit(&mut app.toasts) {
                app.update(message);
            }
        }
        KeyCode::Backspace => app.auth_modal.pop_char(),
        KeyCode::Char(c) => app.auth_modal.push_char(c),
        _ => {}
    }
}

fn handle_header_search_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Page,
        KeyCode::Enter => {
            app.focus = Focus::Page;
            if let Some(message) = app.header.submit_search() {
                app.update(message);
            }
        }
        KeyCode::Backspace => {
            app.header.search_query.pop();
        }
        KeyCode::Char(c) => app.header.search_query.push(c),
        _ => {}
    }
}

/// Returns true when the mounted page consumed the key
fn handle_page_keys(key: KeyEvent, app: &mut App) -> bool {
    match app.page {
        Page::Dashboard => handle_dashboard_keys(key, app),
        Page::Community => handle_community_keys(key, app),
        Page::AiSearch => handle_ai_search_keys(key, app),
        Page::NewSnippet => handle_editor_keys(key, app),
        Page::Home | Page::Profile | Page::Settings | Page::Search => {
            handle_start_page_keys(key, app)
        }
    }
}

fn card_action(code: KeyCode) -> Option<CardAction> {
    match code {
        KeyCode::Enter => Some(CardAction::View),
        KeyCode::Char('y') => Some(CardAction::Copy),
        KeyCode::Char('f') => Some(CardAction::Like),
        KeyCode::Char('e') => Some(CardAction::Edit),
        KeyCode::Char('x') => Some(CardAction::Delete),
        _ => None,
    }
}

fn handle_start_page_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.previous_menu_item(),
        KeyCode::Down | KeyCode::Char('j') => app.next_menu_item(),
        KeyCode::Enter => {
            if let Some(message) = start_page::menu_message(app.selected_menu_item) {
                app.update(message);
            }
        }
        _ => return false,
    }
    true
}

fn handle_dashboard_keys(key: KeyEvent, app: &mut App) -> bool {
    let state = &mut app.dashboard;

    if state.is_capturing_text() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => state.blur(),
            KeyCode::Backspace => state.pop_search_char(),
            KeyCode::Char(c) => state.push_search_char(c),
            _ => {}
        }
        return true;
    }

    if let Some(action) = card_action(key.code) {
        if let Some(message) =
            state.handle_card_action(action, app.clipboard.as_mut(), &mut app.toasts)
        {
            app.update(message);
        }
        return true;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Tab => state.next_tab(),
        KeyCode::BackTab => state.previous_tab(),
        KeyCode::Char('i') => state.focus_search(),
        KeyCode::Char('l') => state.cycle_language_filter(),
        KeyCode::Char('o') => state.cycle_sort(),
        KeyCode::Char('n') => app.update(Message::NewSnippet),
        _ => return false,
    }
    true
}

fn handle_community_keys(key: KeyEvent, app: &mut App) -> bool {
    let state = &mut app.community;

    if state.is_capturing_text() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => state.blur(),
            KeyCode::Backspace => state.pop_search_char(),
            KeyCode::Char(c) => state.push_search_char(c),
            _ => {}
        }
        return true;
    }

    if let Some(action) = card_action(key.code) {
        state.handle_card_action(action, app.clipboard.as_mut(), &mut app.toasts);
        return true;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Tab => state.next_tab(),
        KeyCode::BackTab => state.previous_tab(),
        KeyCode::Left => state.previous_developer(),
        KeyCode::Right => state.next_developer(),
        KeyCode::Char('w') => state.follow_selected(&mut app.toasts),
        KeyCode::Char('i') => state.focus_search(),
        _ => return false,
    }
    true
}

fn handle_ai_search_keys(key: KeyEvent, app: &mut App) -> bool {
    let state = &mut app.ai_search;

    if state.is_capturing_text() {
        match key.code {
            KeyCode::Esc => state.blur(),
            KeyCode::Enter => {
                state.handle_search(&mut app.search_worker);
                state.blur();
            }
            KeyCode::Backspace => state.pop_query_char(),
            KeyCode::Char(c) => state.push_query_char(c),
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Char('i') => state.focus_query(),
        KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Tab => state.next_tab(),
        KeyCode::Enter if state.phase == SearchPhase::Idle => {
            let index = state.selected_suggestion;
            state.select_suggestion(index, &mut app.search_worker);
        }
        KeyCode::Char('y') => state.copy_selected(app.clipboard.as_mut(), &mut app.toasts),
        KeyCode::Char('f') => state.like_selected(&mut app.toasts),
        KeyCode::Esc => state.reset(&mut app.search_worker),
        _ => return false,
    }
    true
}

fn handle_editor_keys(key: KeyEvent, app: &mut App) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        if let Ok(snippet) = app.editor.handle_save(&app.config.author, &mut app.toasts) {
            app.update(Message::SaveSnippet(snippet));
        }
        return true;
    }

    let state = &mut app.editor;

    if state.is_capturing_text() {
        match key.code {
            KeyCode::Esc => state.stop_editing(),
            KeyCode::Enter => state.submit_field(),
            KeyCode::Backspace => state.pop_char(),
            KeyCode::Tab if state.field == crate::ui::editor::EditorField::Code => {
                state.push_char(' ');
                state.push_char(' ');
            }
            KeyCode::Tab => state.next_field(),
            KeyCode::Char(c) => state.push_char(c),
            _ => {}
        }
        return true;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.previous_field(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => state.next_field(),
        KeyCode::Enter | KeyCode::Char('i') => state.start_editing(),
        KeyCode::Left => state.previous_language(),
        KeyCode::Right => state.next_language(),
        KeyCode::Char(c @ '1'..='8') => {
            state.add_popular_tag((c as u8 - b'1') as usize);
        }
        KeyCode::Char('t') => state.load_template(),
        KeyCode::Char('v') => state.toggle_preview(),
        KeyCode::Char('m') => state.toggle_public(),
        KeyCode::Char('[') => state.select_previous_tag(),
        KeyCode::Char(']') => state.select_next_tag(),
        KeyCode::Char('x') => state.remove_selected_tag(),
        KeyCode::Char('y') => state.copy_code(app.clipboard.as_mut(), &mut app.toasts),
        KeyCode::Char('g') => state.generate_with_ai(&mut app.toasts),
        KeyCode::Esc => app.update(Message::CancelEdit),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn ctrl(app: &mut App, c: char) -> bool {
        handle_key_events(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), app)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn sign_in(app: &mut App) {
        press(app, KeyCode::Char('u'));
        type_str(app, "dev@example.com");
        press(app, KeyCode::Tab);
        type_str(app, "secret");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_q_quits_and_ctrl_c_always_quits() {
        let mut app = test_app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        assert!(ctrl(&mut app, 'c'));
    }

    #[test]
    fn test_protected_shortcut_opens_sign_in() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('d'));
        assert!(app.auth_modal.is_open);
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_sign_in_through_modal() {
        let mut app = test_app();
        sign_in(&mut app);
        assert!(app.is_authenticated);
        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn test_modal_swallows_global_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('u'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.auth_modal.email, "q");
    }

    #[test]
    fn test_modal_blank_submit_stays_open() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Enter);
        assert!(app.auth_modal.is_open);
        assert!(!app.is_authenticated);
    }

    #[test]
    fn test_header_search_navigates() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "hooks");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page, Page::Search);
        assert_eq!(app.focus, Focus::Page);

        press(&mut app, KeyCode::Char('/'));
        assert!(app.header.search_query.is_empty());
    }

    #[test]
    fn test_dashboard_search_typing_does_not_trigger_shortcuts() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "css");
        assert_eq!(app.page, Page::Dashboard);
        assert_eq!(app.dashboard.search_query, "css");
        assert_eq!(app.dashboard.filtered().len(), 1);
    }

    #[test]
    fn test_dashboard_edit_opens_editor() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.page, Page::NewSnippet);
        assert!(app.editor.is_editing());
    }

    #[test]
    fn test_new_snippet_save_flow() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.page, Page::NewSnippet);

        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "Foo");
        press(&mut app, KeyCode::Esc);
        ctrl(&mut app, 's');

        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn test_dashboard_n_opens_blank_editor() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.page, Page::Dashboard);

        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.page, Page::NewSnippet);
        assert!(!app.editor.is_editing());
        assert!(app.editor.title.is_empty());
    }

    #[test]
    fn test_n_inside_editor_keeps_draft() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('e'));
        let title = app.editor.title.clone();

        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.page, Page::NewSnippet);
        assert!(app.editor.is_editing());
        assert_eq!(app.editor.title, title);
    }

    #[test]
    fn test_editor_x_removes_selected_tag() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('3'));

        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char('x'));

        assert_eq!(app.editor.tags, vec!["react", "javascript"]);
    }

    #[test]
    fn test_editor_save_without_title_stays() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('n'));
        ctrl(&mut app, 's');
        assert_eq!(app.page, Page::NewSnippet);
    }

    #[test]
    fn test_editor_escape_cancels_to_dashboard() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn test_ai_search_query_box_swallows_shortcuts() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('i'));
        type_str(&mut app, "dashboard hooks");
        assert_eq!(app.page, Page::AiSearch);
        press(&mut app, KeyCode::Enter);
        assert!(app.ai_search.is_searching());
    }

    #[test]
    fn test_start_menu_enter_triggers_action() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page, Page::Community);
    }

    #[test]
    fn test_logout_from_anywhere_returns_home() {
        let mut app = test_app();
        sign_in(&mut app);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('u'));
        assert!(!app.is_authenticated);
        assert_eq!(app.page, Page::Home);
    }
}
