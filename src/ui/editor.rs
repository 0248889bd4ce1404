//! Snippet editor
//!
//! Create/edit form that produces a complete `Snippet`. New drafts start from the
//! JavaScript template; switching language swaps in the new language's template only
//! while the code is still the untouched template of the previous one.

use crate::app::App;
use crate::clipboard::{Clipboard, copy_with_feedback};
use crate::error::ValidationError;
use crate::models::{Snippet, SnippetLanguage, fixtures};
use crate::ui::colors::{RosePine, language_color};
use crate::ui::components::{highlighted_lines, render_input};
use crate::ui::toast::Toasts;
use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Description,
    Code,
    Tags,
}

impl EditorField {
    const ORDER: [EditorField; 4] = [
        EditorField::Title,
        EditorField::Description,
        EditorField::Code,
        EditorField::Tags,
    ];

    fn index(&self) -> usize {
        match self {
            EditorField::Title => 0,
            EditorField::Description => 1,
            EditorField::Code => 2,
            EditorField::Tags => 3,
        }
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1).min(Self::ORDER.len() - 1)]
    }

    pub fn previous(&self) -> Self {
        Self::ORDER[self.index().saturating_sub(1)]
    }
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub title: String,
    pub description: String,
    pub language: SnippetLanguage,
    pub code: String,
    pub is_public: bool,
    pub tags: Vec<String>,
    /// Tag chip targeted by `remove_selected_tag`
    pub selected_tag: usize,
    pub tag_input: String,
    pub is_preview: bool,
    pub field: EditorField,
    pub editing: bool,
    initial: Option<Snippet>,
    /// Template of the language selected last; `None` once there is nothing to compare against
    template_snapshot: Option<String>,
}

impl EditorState {
    pub fn new(initial: Option<Snippet>) -> Self {
        match initial {
            Some(snippet) => Self {
                title: snippet.title.clone(),
                description: snippet.description.clone(),
                language: snippet.language,
                code: snippet.code.clone(),
                is_public: snippet.is_public,
                tags: snippet.tags.clone(),
                selected_tag: 0,
                tag_input: String::new(),
                is_preview: false,
                field: EditorField::Title,
                editing: false,
                initial: Some(snippet),
                template_snapshot: None,
            },
            None => {
                let language = SnippetLanguage::default();
                let template = language.template().map(str::to_string);
                Self {
                    title: String::new(),
                    description: String::new(),
                    language,
                    code: template.clone().unwrap_or_default(),
                    is_public: false,
                    tags: Vec::new(),
                    selected_tag: 0,
                    tag_input: String::new(),
                    is_preview: false,
                    field: EditorField::Title,
                    editing: false,
                    initial: None,
                    template_snapshot: template,
                }
            }
        }
    }

    pub fn is_editing(&self) -> bool {
        self.initial.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Snippet"
        } else {
            "Create New Snippet"
        }
    }

    /// Switches language. Code is replaced only when it still equals the previous
    /// language's template; edits, and snippets opened for editing, are left alone.
    pub fn handle_language_change(&mut self, language: SnippetLanguage) {
        let untouched = self
            .template_snapshot
            .as_deref()
            .is_some_and(|template| template == self.code);

        self.language = language;

        if self.initial.is_some() {
            return;
        }
        if untouched {
            self.code = language.template().unwrap_or_default().to_string();
        }
        self.template_snapshot = language.template().map(str::to_string);
    }

    pub fn next_language(&mut self) {
        self.handle_language_change(self.language.next());
    }

    pub fn previous_language(&mut self) {
        self.handle_language_change(self.language.previous());
    }

    /// Adds the tag typed so far, trimmed and lower-cased. Empty or duplicate tags are
    /// rejected and the input is kept.
    pub fn handle_add_tag(&mut self) -> bool {
        let tag = self.tag_input.trim().to_lowercase();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        self.tag_input.clear();
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
        self.clamp_selected_tag();
    }

    pub fn remove_last_tag(&mut self) {
        self.tags.pop();
        self.clamp_selected_tag();
    }

    pub fn remove_selected_tag(&mut self) {
        if let Some(tag) = self.tags.get(self.selected_tag).cloned() {
            self.remove_tag(&tag);
        }
    }

    pub fn select_next_tag(&mut self) {
        self.selected_tag = (self.selected_tag + 1).min(self.tags.len().saturating_sub(1));
    }

    pub fn select_previous_tag(&mut self) {
        self.selected_tag = self.selected_tag.saturating_sub(1);
    }

    fn clamp_selected_tag(&mut self) {
        self.selected_tag = self.selected_tag.min(self.tags.len().saturating_sub(1));
    }

    /// Quick-add from the popular list, as-is
    pub fn add_popular_tag(&mut self, index: usize) {
        if let Some(tag) = fixtures::POPULAR_TAGS.get(index) {
            if !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_string());
            }
        }
    }

    /// Replaces the code with the current language's template, or clears it
    pub fn load_template(&mut self) {
        self.code = self.language.template().unwrap_or_default().to_string();
    }

    pub fn toggle_preview(&mut self) {
        self.is_preview = !self.is_preview;
        self.editing = false;
    }

    pub fn toggle_public(&mut self) {
        self.is_public = !self.is_public;
    }

    pub fn copy_code(&self, clipboard: &mut dyn Clipboard, toasts: &mut Toasts) {
        copy_with_feedback(clipboard, &self.code, toasts);
    }

    pub fn generate_with_ai(&self, toasts: &mut Toasts) {
        toasts.info("AI generation will be implemented with OpenAI integration");
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.code.trim().is_empty() {
            return Err(ValidationError::MissingCode);
        }
        Ok(())
    }

    /// Builds the snippet record. When editing, identity and counters carry over from the
    /// original; otherwise the id is the current time in milliseconds.
    pub fn handle_save(
        &self,
        author: &str,
        toasts: &mut Toasts,
    ) -> Result<Snippet, ValidationError> {
        if let Err(e) = self.validate() {
            toasts.error(e.to_string());
            return Err(e);
        }

        let now = Utc::now();
        let snippet = Snippet {
            id: self
                .initial
                .as_ref()
                .map_or_else(|| now.timestamp_millis().to_string(), |s| s.id.clone()),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            language: self.language,
            code: self.code.clone(),
            tags: self.tags.clone(),
            is_public: self.is_public,
            created_at: self.initial.as_ref().map_or(now, |s| s.created_at),
            updated_at: now,
            author: author.to_string(),
            likes: self.initial.as_ref().map_or(0, |s| s.likes),
            forks: self.initial.as_ref().map_or(0, |s| s.forks),
            views: self.initial.as_ref().map_or(0, |s| s.views),
        };

        toasts.success(if self.is_editing() {
            "Snippet updated!"
        } else {
            "Snippet saved!"
        });

        Ok(snippet)
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn previous_field(&mut self) {
        self.field = self.field.previous();
    }

    pub fn start_editing(&mut self) {
        if self.field == EditorField::Code && self.is_preview {
            return;
        }
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn is_capturing_text(&self) -> bool {
        self.editing
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.field {
            EditorField::Title => &mut self.title,
            EditorField::Description => &mut self.description,
            EditorField::Code => &mut self.code,
            EditorField::Tags => &mut self.tag_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_buffer().push(c);
    }

    pub fn pop_char(&mut self) {
        if self.field == EditorField::Tags && self.tag_input.is_empty() {
            self.remove_last_tag();
            return;
        }
        self.active_buffer().pop();
    }

    /// Enter inside a field: newline in code, add tag in tags, next field otherwise
    pub fn submit_field(&mut self) {
        match self.field {
            EditorField::Code => self.code.push('\n'),
            EditorField::Tags => {
                self.handle_add_tag();
            }
            EditorField::Title | EditorField::Description => self.next_field(),
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(None)
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.editor;

    let block = Block::bordered()
        .title(format!(" {} ", state.heading()))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Length(34)]).split(inner);

    let main = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(columns[0]);

    let focused = |field: EditorField| state.field == field && state.editing;

    render_input(
        frame,
        main[0],
        &field_title("Title", state.field == EditorField::Title),
        &state.title,
        "e.g. React useDebounce hook",
        focused(EditorField::Title),
    );
    render_input(
        frame,
        main[1],
        &field_title("Description", state.field == EditorField::Description),
        &state.description,
        "What does this snippet do?",
        focused(EditorField::Description),
    );

    let visibility = if state.is_public {
        Span::styled("🌐 Public", Style::default().fg(RosePine::FOAM))
    } else {
        Span::styled("🔒 Private", Style::default().fg(RosePine::MUTED))
    };
    Paragraph::new(Line::from(vec![
        Span::styled("Language ", Style::default().fg(RosePine::SUBTLE)),
        Span::styled(
            format!(" ◀ {} ▶ ", state.language.display_name()),
            Style::default()
                .fg(RosePine::BASE)
                .bg(language_color(state.language))
                .bold(),
        ),
        Span::raw("   "),
        visibility,
    ]))
    .render(main[2], frame.buffer_mut());

    render_code(frame, main[3], state, &app.config.syntax_theme);
    render_sidebar(frame, columns[1], state);
}

fn field_title(name: &str, selected: bool) -> String {
    if selected {
        format!("▶ {}", name)
    } else {
        name.to_string()
    }
}

fn render_code(frame: &mut Frame, area: Rect, state: &EditorState, theme: &str) {
    let selected = state.field == EditorField::Code;
    let border = if selected && state.editing {
        RosePine::IRIS
    } else {
        RosePine::HIGHLIGHT_HIGH
    };
    let mode = if state.is_preview { "Preview" } else { "Code" };

    let block = Block::bordered()
        .title(format!(" {} ", field_title(mode, selected)))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border).bg(RosePine::SURFACE));

    let mut lines = if state.is_preview {
        highlighted_lines(&state.code, state.language, theme)
    } else {
        state
            .code
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(RosePine::TEXT))))
            .collect::<Vec<_>>()
    };

    if selected && state.editing {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled("█", Style::default().fg(RosePine::IRIS)));
        }
    }

    // keep the end of the buffer in view while typing
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = if state.editing {
        lines.len().saturating_sub(visible) as u16
    } else {
        0
    };

    Paragraph::new(lines)
        .block(block)
        .scroll((scroll, 0))
        .render(area, frame.buffer_mut());
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &EditorState) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Fill(1),
    ])
    .split(area);

    render_input(
        frame,
        chunks[0],
        &field_title("Tags", state.field == EditorField::Tags),
        &state.tag_input,
        "Add tag...",
        state.field == EditorField::Tags && state.editing,
    );

    let chips: Vec<Span> = state
        .tags
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let style = if state.field == EditorField::Tags && i == state.selected_tag {
                Style::default().fg(RosePine::BASE).bg(RosePine::IRIS)
            } else {
                Style::default().fg(RosePine::IRIS)
            };
            Span::styled(format!("#{} ", t), style)
        })
        .collect();
    Paragraph::new(Line::from(chips))
        .wrap(Wrap { trim: true })
        .render(chunks[1], frame.buffer_mut());

    let popular: Vec<Line> = fixtures::POPULAR_TAGS
        .chunks(2)
        .enumerate()
        .map(|(row, pair)| {
            let spans: Vec<Span> = pair
                .iter()
                .enumerate()
                .map(|(col, tag)| {
                    let n = row * 2 + col + 1;
                    let style = if state.tags.iter().any(|t| t == tag) {
                        Style::default().fg(RosePine::MUTED)
                    } else {
                        Style::default().fg(RosePine::FOAM)
                    };
                    Span::styled(format!("[{}] {:<12}", n, tag), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Paragraph::new(popular)
        .block(
            Block::bordered()
                .title(" Popular Tags ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(chunks[2], frame.buffer_mut());

    let save = if state.is_editing() {
        "[^S] Update Snippet"
    } else {
        "[^S] Save Snippet"
    };
    let actions = vec![
        Line::from(Span::styled(save, Style::default().fg(RosePine::LOVE).bold())),
        Line::from(Span::styled("[t]  Load Template", Style::default().fg(RosePine::TEXT))),
        Line::from(Span::styled(
            if state.is_preview { "[v]  Edit" } else { "[v]  Preview" },
            Style::default().fg(RosePine::TEXT),
        )),
        Line::from(Span::styled("[y]  Copy Code", Style::default().fg(RosePine::TEXT))),
        Line::from(Span::styled("[g]  AI Generate", Style::default().fg(RosePine::IRIS))),
        Line::from(Span::styled("[m]  Toggle Public", Style::default().fg(RosePine::TEXT))),
        Line::from(Span::styled("[Esc] Cancel", Style::default().fg(RosePine::MUTED))),
    ];
    Paragraph::new(actions)
        .block(
            Block::bordered()
                .title(" Actions ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(chunks[3], frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::time::Duration;

    fn toasts() -> Toasts {
        Toasts::new(Duration::from_secs(3))
    }

    fn template(language: SnippetLanguage) -> String {
        language.template().unwrap_or_default().to_string()
    }

    #[test]
    fn test_new_draft_defaults() {
        let state = EditorState::new(None);
        assert_eq!(state.language, SnippetLanguage::JavaScript);
        assert_eq!(state.code, template(SnippetLanguage::JavaScript));
        assert!(!state.is_public);
        assert!(state.tags.is_empty());
        assert_eq!(state.heading(), "Create New Snippet");
    }

    #[test]
    fn test_language_change_replaces_untouched_template() {
        let mut state = EditorState::new(None);
        state.handle_language_change(SnippetLanguage::Python);
        assert_eq!(state.code, template(SnippetLanguage::Python));

        state.handle_language_change(SnippetLanguage::Sql);
        assert_eq!(state.code, template(SnippetLanguage::Sql));
    }

    #[test]
    fn test_language_change_keeps_user_edits() {
        let mut state = EditorState::new(None);
        state.code.push_str("\n// mine");
        let edited = state.code.clone();

        state.handle_language_change(SnippetLanguage::Python);

        assert_eq!(state.language, SnippetLanguage::Python);
        assert_eq!(state.code, edited);
    }

    #[test]
    fn test_language_without_template_clears_code() {
        let mut state = EditorState::new(None);
        state.handle_language_change(SnippetLanguage::Rust);
        assert_eq!(state.code, "");

        // empty code is not a template, so typing afterwards survives switching
        state.code = "fn main() {}".to_string();
        state.handle_language_change(SnippetLanguage::Python);
        assert_eq!(state.code, "fn main() {}");
    }

    #[test]
    fn test_language_change_never_replaces_when_editing() {
        let mut snippet = crate::models::fixtures::dashboard_snippets().remove(0);
        snippet.language = SnippetLanguage::JavaScript;
        snippet.code = template(SnippetLanguage::JavaScript);
        let mut state = EditorState::new(Some(snippet.clone()));

        state.handle_language_change(SnippetLanguage::Python);

        assert_eq!(state.code, snippet.code);
    }

    #[test]
    fn test_add_tag_normalises_and_dedupes() {
        let mut state = EditorState::new(None);
        state.tag_input = "  React ".to_string();
        assert!(state.handle_add_tag());
        assert!(state.tag_input.is_empty());

        state.tag_input = "react".to_string();
        assert!(!state.handle_add_tag());
        assert_eq!(state.tag_input, "react");

        assert_eq!(state.tags, vec!["react"]);
    }

    #[test]
    fn test_add_blank_tag_is_rejected() {
        let mut state = EditorState::new(None);
        state.tag_input = "   ".to_string();
        assert!(!state.handle_add_tag());
        assert!(state.tags.is_empty());
    }

    #[test]
    fn test_popular_tags_and_remove() {
        let mut state = EditorState::new(None);
        state.add_popular_tag(0);
        state.add_popular_tag(0);
        state.add_popular_tag(6);
        assert_eq!(state.tags, vec!["react", "api"]);

        state.remove_tag("react");
        assert_eq!(state.tags, vec!["api"]);

        state.add_popular_tag(100);
        assert_eq!(state.tags.len(), 1);
    }

    #[test]
    fn test_remove_selected_tag_keeps_selection_in_range() {
        let mut state = EditorState::new(None);
        state.tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        state.select_next_tag();
        state.remove_selected_tag();
        assert_eq!(state.tags, vec!["a", "c"]);
        assert_eq!(state.selected_tag, 1);

        state.select_next_tag();
        state.remove_selected_tag();
        assert_eq!(state.tags, vec!["a"]);
        assert_eq!(state.selected_tag, 0);

        state.remove_selected_tag();
        state.remove_selected_tag();
        assert!(state.tags.is_empty());
        assert_eq!(state.selected_tag, 0);
    }

    #[test]
    fn test_backspace_on_empty_tag_input_removes_last_tag() {
        let mut state = EditorState::new(None);
        state.tags = vec!["a".to_string(), "b".to_string()];
        state.field = EditorField::Tags;
        state.pop_char();
        assert_eq!(state.tags, vec!["a"]);
    }

    #[test]
    fn test_save_requires_title() {
        let mut state = EditorState::new(None);
        let mut toasts = toasts();
        state.code = "x".to_string();

        let result = state.handle_save("Vansh Singh", &mut toasts);

        assert_eq!(result, Err(ValidationError::MissingTitle));
        assert_eq!(toasts.latest().unwrap().message, "Please enter a title");
    }

    #[test]
    fn test_save_requires_code() {
        let mut state = EditorState::new(None);
        let mut toasts = toasts();
        state.title = "Foo".to_string();
        state.code = "   \n".to_string();

        assert_eq!(
            state.handle_save("Vansh Singh", &mut toasts),
            Err(ValidationError::MissingCode)
        );
    }

    #[test]
    fn test_save_builds_fresh_record() {
        let mut state = EditorState::new(None);
        let mut toasts = toasts();
        state.title = "  Foo ".to_string();
        state.code = "x".to_string();
        state.tag_input = "React".to_string();
        state.handle_add_tag();
        state.tag_input = "react".to_string();
        state.handle_add_tag();

        let snippet = state.handle_save("Vansh Singh", &mut toasts).unwrap();

        assert!(!snippet.id.is_empty());
        assert!(snippet.id.parse::<i64>().is_ok());
        assert_eq!(snippet.title, "Foo");
        assert_eq!(snippet.tags, vec!["react"]);
        assert_eq!(snippet.author, "Vansh Singh");
        assert_eq!((snippet.likes, snippet.forks, snippet.views), (0, 0, 0));
        assert_eq!(toasts.latest().unwrap().message, "Snippet saved!");
    }

    #[test]
    fn test_save_when_editing_keeps_identity_and_counters() {
        let original = crate::models::fixtures::dashboard_snippets().remove(3);
        let mut state = EditorState::new(Some(original.clone()));
        let mut toasts = toasts();
        state.title = "Renamed".to_string();

        let snippet = state.handle_save("Vansh Singh", &mut toasts).unwrap();

        assert_eq!(snippet.id, original.id);
        assert_eq!(snippet.created_at, original.created_at);
        assert_eq!(snippet.likes, original.likes);
        assert_eq!(snippet.views, original.views);
        assert!(snippet.updated_at > original.updated_at);
        assert_eq!(toasts.latest().unwrap().message, "Snippet updated!");
    }

    #[test]
    fn test_load_template_overwrites_code() {
        let mut state = EditorState::new(None);
        state.code = "scratch".to_string();
        state.load_template();
        assert_eq!(state.code, template(SnippetLanguage::JavaScript));
    }

    #[test]
    fn test_copy_and_generate_feedback() {
        let state = EditorState::new(None);
        let mut toasts = toasts();
        let mut clipboard = MemoryClipboard::default();

        state.copy_code(&mut clipboard, &mut toasts);
        assert_eq!(clipboard.contents.as_deref(), Some(state.code.as_str()));

        state.generate_with_ai(&mut toasts);
        assert_eq!(
            toasts.latest().unwrap().message,
            "AI generation will be implemented with OpenAI integration"
        );
    }

    #[test]
    fn test_typing_goes_to_selected_field() {
        let mut state = EditorState::new(None);
        state.start_editing();
        for c in "Hi".chars() {
            state.push_char(c);
        }
        state.submit_field();
        assert_eq!(state.title, "Hi");
        assert_eq!(state.field, EditorField::Description);
    }
}
