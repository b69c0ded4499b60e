use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hookdown_engine::{Mentions, Preset, RenderOptions, Segment, io, parse_with};

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Composer state: the raw draft, caret and selection, and the directory
/// used for previews.
pub struct App {
    pub draft_path: PathBuf,
    pub content: String,
    /// Caret as a byte offset, always on a char boundary.
    pub cursor: usize,
    /// Other end of the selection while Shift is held.
    pub anchor: Option<usize>,
    pub mentions: Mentions,
    pub render_options: RenderOptions,
    pub dirty: bool,
    pub status: Option<String>,
}

impl App {
    pub fn new(
        draft_path: PathBuf,
        content: String,
        mentions: Mentions,
        render_options: RenderOptions,
    ) -> Self {
        let cursor = content.len();
        Self {
            draft_path,
            content,
            cursor,
            anchor: None,
            mentions,
            render_options,
            dirty: false,
            status: None,
        }
    }

    pub fn segments(&self) -> Vec<Segment> {
        parse_with(&self.content, &self.mentions)
    }

    /// Ordered selection bounds; empty at the caret when nothing is selected.
    pub fn selection(&self) -> (usize, usize) {
        match self.anchor {
            Some(a) if a != self.cursor => (a.min(self.cursor), a.max(self.cursor)),
            _ => (self.cursor, self.cursor),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('q') if ctrl => return Action::Quit,
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char(c) if alt => {
                if let Some(preset) = preset_for_key(c) {
                    self.apply_preset(preset);
                }
            }
            KeyCode::Char(c) if !ctrl => self.insert_char(c),
            KeyCode::Enter => self.insert_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.move_to(self.prev_boundary(), shift),
            KeyCode::Right => self.move_to(self.next_boundary(), shift),
            KeyCode::Up => self.move_to(self.line_above(), shift),
            KeyCode::Down => self.move_to(self.line_below(), shift),
            KeyCode::Home => self.move_to(self.line_start(self.cursor), shift),
            KeyCode::End => self.move_to(self.line_end(self.cursor), shift),
            _ => {}
        }
        Action::Continue
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        let (start, end) = self.selection();
        let edit = preset.apply(&self.content, start, end);
        log::debug!("applied {preset} at {start}..{end}");
        self.content = edit.content;
        self.cursor = edit.cursor;
        self.anchor = None;
        self.dirty = true;
    }

    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.dirty = true;
    }

    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        let prev = self.prev_boundary();
        if prev < self.cursor {
            self.content.replace_range(prev..self.cursor, "");
            self.cursor = prev;
            self.dirty = true;
        }
    }

    pub fn save(&mut self) {
        match io::write_draft(&self.draft_path, &self.content) {
            Ok(()) => {
                log::info!("saved draft to {}", self.draft_path.display());
                self.dirty = false;
                self.status = Some(format!("Saved {}", self.draft_path.display()));
            }
            Err(e) => {
                log::error!("failed to save draft: {e}");
                self.status = Some(format!("Save failed: {e}"));
            }
        }
    }

    fn delete_selection(&mut self) -> bool {
        let (start, end) = self.selection();
        self.anchor = None;
        if start == end {
            return false;
        }
        self.content.replace_range(start..end, "");
        self.cursor = start;
        self.dirty = true;
        true
    }

    fn move_to(&mut self, pos: usize, extend: bool) {
        if extend {
            self.anchor.get_or_insert(self.cursor);
        } else {
            self.anchor = None;
        }
        self.cursor = pos;
    }

    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.content[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    fn line_start(&self, pos: usize) -> usize {
        self.content[..pos].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.content[pos..]
            .find('\n')
            .map_or(self.content.len(), |i| pos + i)
    }

    fn column(&self) -> usize {
        self.content[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count()
    }

    /// Byte offset `column` chars into the line `start..end`, clamped to its end.
    fn at_column(&self, start: usize, end: usize, column: usize) -> usize {
        self.content[start..end]
            .char_indices()
            .nth(column)
            .map_or(end, |(i, _)| start + i)
    }

    fn line_above(&self) -> usize {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return 0;
        }
        let above = self.line_start(start - 1);
        self.at_column(above, start - 1, self.column())
    }

    fn line_below(&self) -> usize {
        let end = self.line_end(self.cursor);
        if end == self.content.len() {
            return end;
        }
        let below = end + 1;
        self.at_column(below, self.line_end(below), self.column())
    }
}

/// Alt-key bindings for the formatting toolbar.
pub fn preset_for_key(c: char) -> Option<Preset> {
    match c.to_ascii_lowercase() {
        'b' => Some(Preset::Bold),
        'i' => Some(Preset::Italic),
        'c' => Some(Preset::Code),
        'k' => Some(Preset::CodeBlock),
        's' => Some(Preset::Strikethrough),
        'u' => Some(Preset::Underline),
        'p' => Some(Preset::Spoiler),
        _ => None,
    }
}
