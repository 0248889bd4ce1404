//! Start Page UI Module
//!
//! The landing page: title, tagline, headline stats, feature pills and a small menu of
//! calls to action. Also shown for pages without a view of their own.

use crate::app::{App, Message, Page};
use crate::models::fixtures::{HERO_FEATURES, HERO_STATS};
use crate::ui::colors::RosePine;
use crate::ui::components::stat_line;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget},
};

pub const MENU_LEN: usize = 5;

/// Message bound to a menu entry
pub fn menu_message(index: usize) -> Option<Message> {
    match index {
        0 => Some(Message::Navigate(Page::Dashboard)),
        1 => Some(Message::Navigate(Page::Community)),
        2 => Some(Message::Navigate(Page::AiSearch)),
        3 => Some(Message::AuthClick),
        4 => Some(Message::Quit),
        _ => None,
    }
}

fn menu_items(is_authenticated: bool) -> [(&'static str, &'static str, &'static str); MENU_LEN] {
    let auth = if is_authenticated { "Log out" } else { "Sign In" };
    [
        ("", "Get Started Free", "d"),
        ("", "Watch Demo", "c"),
        ("", "AI Search", "a"),
        ("", auth, "u"),
        ("󰈆", "Exit", "q"),
    ]
}

const DESCRIPTIONS: [&str; MENU_LEN] = [
    "Open your personal snippet dashboard",
    "See what the community is sharing",
    "Describe the code you need and let AI find it",
    "Sign in to save and manage your own snippets",
    "Leave DevVault",
];

/// Main rendering function for the start page
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .title(" DevVault - Your Code Snippet Vault ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let inner_area = block.inner(area);
    block.render(area, frame.buffer_mut());

    let main_chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(2)]).split(inner_area);

    let content_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(72),
        Constraint::Fill(1),
    ])
    .split(main_chunks[0])[1];

    let content_chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(content_area);

    render_title(frame, content_chunks[1]);
    render_tagline(frame, content_chunks[2]);
    render_stats(frame, content_chunks[3]);
    render_features(frame, content_chunks[4]);
    render_menu(frame, content_chunks[5], app);
    render_description(frame, main_chunks[1], app);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = r#"
██████╗ ███████╗██╗   ██╗██╗   ██╗ █████╗ ██╗   ██╗██╗  ████████╗
██╔══██╗██╔════╝██║   ██║██║   ██║██╔══██╗██║   ██║██║  ╚══██╔══╝
██║  ██║█████╗  ██║   ██║██║   ██║███████║██║   ██║██║     ██║
██║  ██║██╔══╝  ╚██╗ ██╔╝╚██╗ ██╔╝██╔══██║██║   ██║██║     ██║
██████╔╝███████╗ ╚████╔╝  ╚████╔╝ ██║  ██║╚██████╔╝███████╗██║
"#;

    Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::ROSE).bold())
        .render(area, frame.buffer_mut());
}

fn render_tagline(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Store, search, and share code snippets with AI-powered intelligence.",
            Style::default().fg(RosePine::TEXT),
        )),
        Line::from(Span::styled(
            "Build your personal knowledge base and collaborate with developers worldwide.",
            Style::default().fg(RosePine::SUBTLE).italic(),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let cells = Layout::horizontal([Constraint::Fill(1); 4]).split(area);
    let colors = [RosePine::IRIS, RosePine::FOAM, RosePine::GOLD, RosePine::LOVE];
    for ((cell, (value, label)), color) in cells.iter().zip(HERO_STATS).zip(colors) {
        Paragraph::new(stat_line(label, value.to_string(), color))
            .alignment(Alignment::Center)
            .render(*cell, frame.buffer_mut());
    }
}

fn render_features(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for feature in HERO_FEATURES {
        spans.push(Span::styled(
            format!(" {} ", feature),
            Style::default().fg(RosePine::BASE).bg(RosePine::PINE),
        ));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let menu_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(45),
        Constraint::Fill(1),
    ])
    .split(area)[1];

    let items = menu_items(app.is_authenticated);

    let mut spaced_items = Vec::new();
    for (i, (icon, name, key)) in items.iter().enumerate() {
        let style = if i == app.selected_menu_item {
            Style::default().fg(RosePine::LOVE).bold()
        } else {
            Style::default().fg(RosePine::TEXT)
        };
        let prefix = if i == app.selected_menu_item { "▶" } else { " " };

        let content = format!("{} {} {}", prefix, icon, name);
        let line = format!("{:<24} {:>16}", content, format!("[{}]", key));
        spaced_items.push(ListItem::new(format!("{:^43}", line)).style(style));
        if i < MENU_LEN - 1 {
            spaced_items.push(ListItem::new(""));
        }
    }

    let list = List::new(spaced_items).highlight_style(
        Style::default()
            .fg(RosePine::LOVE)
            .bg(RosePine::HIGHLIGHT_LOW)
            .bold(),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_menu_item * 2));

    frame.render_stateful_widget(list, menu_area, &mut list_state);
}

fn render_description(frame: &mut Frame, area: Rect, app: &App) {
    let description = DESCRIPTIONS.get(app.selected_menu_item).copied().unwrap_or("");

    Paragraph::new(description)
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::MUTED))
        .render(area, frame.buffer_mut());
}
