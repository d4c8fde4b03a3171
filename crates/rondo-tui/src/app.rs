use std::time::Instant;

use ratatui::layout::Rect;
use tracing::warn;

use rondo_core::{storage, AppConfig, Direction, TaskList};

use crate::scroll::{ring, ScrollAnimator};
use crate::theme::Theme;
use crate::widgets::carousel::{MARGIN_X, MARKER_WIDTH};

/// Cursor blink half-period in milliseconds
const BLINK_INTERVAL_MS: u128 = 500;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Typing the title of a new task
    Edit,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Active theme
    pub theme: Theme,
    /// The circular task list
    pub tasks: TaskList,
    /// Scroll animator owning the continuous carousel position
    pub scroll: ScrollAnimator,
    /// Current application mode
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message shown in the footer
    pub status_message: Option<String>,
    /// Screen area of the carousel, updated during drawing for hit-testing
    pub carousel_area: Rect,
    /// Edit cursor blink phase, updated on tick
    pub blink_on: bool,
    /// Launch time, anchor for the blink phase
    started: Instant,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let scroll = ScrollAnimator::new(config.ui.scroll.clone());
        Self {
            config,
            theme,
            tasks: TaskList::default(),
            scroll,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            carousel_area: Rect::default(),
            blink_on: true,
            started: Instant::now(),
        }
    }

    /// Load tasks from disk, seeding defaults when no file exists
    pub fn load(&mut self) {
        self.tasks = TaskList::new(storage::load_tasks(&self.config.tasks_path()));
        match self.tasks.selected() {
            Some(index) => self.scroll.snap_to(index),
            None => self.scroll.reset(),
        }
    }

    /// Advance animation and blink state to `now`.
    ///
    /// When a scroll transition settles, the committed discrete index
    /// becomes the selection.
    pub fn tick(&mut self, now: Instant) {
        if let Some(index) = self.scroll.update_at(now, self.tasks.len()) {
            self.tasks.select(index);
        }
        self.blink_on =
            (now.duration_since(self.started).as_millis() / BLINK_INTERVAL_MS) % 2 == 0;
    }

    /// Move the selection one step around the ring, animating along the
    /// shorter rotational direction. No-op on an empty list.
    pub fn move_selection(&mut self, direction: Direction, now: Instant) {
        if let Some(target) = self.tasks.step(direction) {
            self.scroll.animate_to_index(target, self.tasks.len(), now);
        }
    }

    /// Flip the done flag of the selected task and persist
    pub fn toggle_selected(&mut self) {
        if let Some(index) = self.tasks.selected() {
            self.tasks.toggle_done(index);
            self.persist();
        }
    }

    /// Append a blank task, select it and enter edit mode. Add snaps the
    /// carousel instead of blending.
    pub fn begin_add(&mut self) {
        let index = self.tasks.push_blank();
        self.scroll.snap_to(index);
        self.mode = Mode::Edit;
    }

    /// Delete the selected task. The selection clamps to the last valid
    /// index and the carousel snaps to it; an emptied list clears both.
    pub fn delete_selected(&mut self) {
        let Some(removed) = self.tasks.delete_selected() else {
            return;
        };
        match self.tasks.selected() {
            Some(index) => self.scroll.snap_to(index),
            None => self.scroll.reset(),
        }
        self.status_message = Some(format!("deleted: {}", removed.title));
        self.persist();
    }

    /// Finish editing. An empty title is discarded rather than saved.
    pub fn commit_edit(&mut self) {
        self.mode = Mode::Normal;
        self.discard_blank_edit();
        self.persist();
    }

    /// Abandon editing without saving. An empty title is discarded; typed
    /// text is kept in memory and persists with the next save.
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Normal;
        self.discard_blank_edit();
    }

    fn discard_blank_edit(&mut self) {
        if self.tasks.discard_selected_if_blank() {
            match self.tasks.selected() {
                Some(index) => self.scroll.snap_to(index),
                None => self.scroll.reset(),
            }
        }
    }

    /// Append a character to the title being edited
    pub fn input_char(&mut self, c: char) {
        if let Some(task) = self.tasks.current_mut() {
            task.title.push(c);
        }
    }

    /// Remove the last character of the title being edited
    pub fn backspace_edit(&mut self) {
        if let Some(task) = self.tasks.current_mut() {
            task.title.pop();
        }
    }

    /// Resolve a tap at absolute terminal coordinates.
    ///
    /// The vertical offset from the carousel center becomes an integer
    /// slot offset; slot 0 over the done-marker column toggles, anywhere
    /// else navigates to the tapped slot. The target is the literal
    /// continuous position, so a tap several revolutions out spins through
    /// every lap instead of snapping backward.
    pub fn tap(&mut self, column: u16, row: u16, now: Instant) {
        let n = self.tasks.len();
        if n == 0 {
            return;
        }
        let area = self.carousel_area;
        let center_row = area.y as i32 + area.height as i32 / 2;
        let spacing = self.config.ui.row_spacing.max(1) as i32;

        let slot = ring::slot_offset(row as i32 - center_row, spacing);
        let target = self.scroll.position() + slot as f64;
        let index = ring::wrap_index(target, n);

        let marker_start = area.x + MARGIN_X;
        let on_marker = column >= marker_start && column < marker_start + MARKER_WIDTH;

        if slot == 0 && on_marker {
            self.tasks.toggle_done(index);
            self.persist();
        } else {
            self.tasks.select(index);
            self.scroll.animate_to_slot(target, now);
        }
    }

    /// Check if a title is being typed
    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }

    /// Save the list. Failure is absorbed: the list keeps working from
    /// memory and the footer reports the problem.
    fn persist(&mut self) {
        let path = self.config.tasks_path();
        if let Err(e) = storage::save_tasks(&path, self.tasks.tasks()) {
            warn!("could not save {}: {e}", path.display());
            self.status_message = Some("save failed".to_string());
        }
    }
}
