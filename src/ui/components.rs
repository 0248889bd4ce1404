//! UI Components and Layout Module
//!
//! Shared pieces used by more than one page: the bottom navigation bar, text input
//! boxes, tab strips, popup placement and syntax-highlighted code.
//!
//! # Components
//!
//! - **Bottom Navigation Bar**: Breadcrumbs for the current page and its keyboard shortcuts
//! - **Text Input**: Bordered single-line input with a focus state
//! - **Code View**: syntect highlighting of snippet code

use crate::app::{App, Focus, Page};
use crate::models::SnippetLanguage;
use crate::ui::colors::RosePine;
use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use syntect::{
    easy::HighlightLines, highlighting::ThemeSet, parsing::SyntaxSet, util::LinesWithEndings,
};
use unicode_width::UnicodeWidthChar;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const FALLBACK_THEME: &str = "base16-mocha.dark";

/// Renders the bottom navigation bar with breadcrumbs and keyboard shortcuts
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left_content = Paragraph::new(breadcrumbs(app))
        .alignment(Alignment::Left)
        .style(Style::default().fg(RosePine::SUBTLE))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

fn context_shortcuts(app: &App) -> &'static str {
    if app.auth_modal.is_open {
        return " [Tab] Next Field │ [⏎] Sign In │ [Esc] Close ";
    }
    if app.focus == Focus::HeaderSearch {
        return " [⏎] Search │ [Esc] Cancel ";
    }
    if app.is_capturing_text() {
        return " [⏎] Confirm │ [Esc] Done ";
    }

    match app.page {
        Page::Dashboard => {
            " [↑↓] Select │ [i] Search │ [l] Language │ [o] Sort │ [n] New │ [Tab] Tab │ [⏎] View │ [y] Copy │ [f] Like │ [e] Edit │ [x] Delete "
        }
        Page::Community => {
            " [↑↓] Select │ [Tab] Tab │ [←→] Developer │ [w] Follow │ [y] Copy │ [f] Like │ [e] Fork │ [x] Delete "
        }
        Page::AiSearch if app.ai_search.is_searching() => {
            " Searching with AI... │ [Esc] Cancel "
        }
        Page::AiSearch => {
            " [i] Query │ [↑↓] Select │ [⏎] Search │ [Tab] Tab │ [y] Copy │ [f] Like │ [Esc] Reset "
        }
        Page::NewSnippet => {
            " [↑↓] Field │ [i] Edit │ [←→] Language │ [1-8] Tag │ [[]] Pick Tag │ [x] Remove Tag │ [t] Template │ [v] Preview │ [m] Public │ [^S] Save │ [Esc] Cancel "
        }
        _ => " [↑↓] Navigate │ [⏎] Select │ [/] Search │ [u] Sign In/Out │ [q] Quit ",
    }
}

/// Home, then the current page when it is not home
fn breadcrumbs(app: &App) -> Line<'static> {
    let active = Style::default().fg(RosePine::BASE).bg(RosePine::IRIS);
    let inactive = Style::default().fg(RosePine::SUBTLE);

    let mut spans = Vec::new();

    if app.page == Page::Home {
        spans.push(Span::styled(" 󰋜 Home ", active));
    } else {
        spans.push(Span::styled(" 󰋜 Home ", inactive));
        spans.push(Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED)));
        spans.push(Span::styled(format!(" {} ", app.page.title()), active));
    }

    if app.page == Page::NewSnippet && app.editor.is_editing() {
        spans.push(Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED)));
        spans.push(Span::styled(
            format!(" {} ", app.editor.title),
            Style::default().fg(RosePine::BASE).bg(RosePine::GOLD),
        ));
    }

    if app.is_authenticated {
        spans.push(Span::styled(
            format!("  {}", app.config.author),
            Style::default().fg(RosePine::FOAM),
        ));
    }

    Line::from(spans)
}

/// A fixed-size box centered in `r`, clipped to it
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

/// Bordered single-line text input. Shows `placeholder` while empty.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border_color = if focused {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    };

    let block = Block::bordered()
        .title(format!(" {} ", title))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border_color));

    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(RosePine::MUTED).italic(),
        ))
    } else {
        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(RosePine::TEXT),
        )];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(RosePine::IRIS)));
        }
        Line::from(spans)
    };

    Paragraph::new(line)
        .block(block)
        .render(area, frame.buffer_mut());
}

/// One-line tab strip; the selected tab is inverted
pub fn tab_line<'a>(titles: &[&'a str], selected: usize) -> Line<'a> {
    let mut spans = Vec::with_capacity(titles.len() * 2);
    for (i, title) in titles.iter().enumerate() {
        let style = if i == selected {
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold()
        } else {
            Style::default().fg(RosePine::SUBTLE)
        };
        spans.push(Span::styled(format!(" {} ", title), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Label/value pair used by stat strips
pub fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(value, Style::default().fg(color).bold()),
        Span::styled(format!(" {}", label), Style::default().fg(RosePine::SUBTLE)),
    ])
}

/// Highlights `code` for `language`. Unknown themes fall back to the default theme and
/// unknown languages to plain text.
pub fn highlighted_lines(
    code: &str,
    language: SnippetLanguage,
    theme_name: &str,
) -> Vec<Line<'static>> {
    let syntax = SYNTAX_SET
        .find_syntax_by_extension(language.file_extension())
        .or_else(|| SYNTAX_SET.find_syntax_by_token(language.id()))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let Some(theme) = THEME_SET
        .themes
        .get(theme_name)
        .or_else(|| THEME_SET.themes.get(FALLBACK_THEME))
    else {
        return code
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect();
    };

    let mut highlighter = HighlightLines::new(syntax, theme);

    LinesWithEndings::from(code)
        .map(|line| {
            let highlighted = highlighter
                .highlight_line(line, &SYNTAX_SET)
                .unwrap_or_default();

            let spans: Vec<Span> = highlighted
                .iter()
                .map(|(style, text)| {
                    let fg = style.foreground;
                    Span::styled(
                        text.trim_end_matches(['\n', '\r']).to_string(),
                        Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                    )
                })
                .collect();

            Line::from(spans)
        })
        .collect()
}

/// Cuts `text` to at most `max_width` terminal columns, ending in `…` when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Compact counter: 1240 -> "1.2k"
pub fn format_count(n: u32) -> String {
    if n >= 1000 {
        format!("{:.1}k", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}
