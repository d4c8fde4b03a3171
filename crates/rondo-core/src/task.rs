//! Circular task list model.
//!
//! Ordering is insertion order and defines circular adjacency: the item
//! after the last one is the first. Selection is `None` exactly when the
//! list is empty.

/// A single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }
}

/// Navigation direction around the ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn delta(self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// Ordered task list with a wrapped selection
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    selected: Option<usize>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        let selected = if tasks.is_empty() { None } else { Some(0) };
        Self { tasks, selected }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Get the currently selected task
    pub fn current(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.tasks.get(i))
    }

    /// Get the currently selected task mutably
    pub fn current_mut(&mut self) -> Option<&mut Task> {
        self.selected.and_then(|i| self.tasks.get_mut(i))
    }

    /// Set the selection to a wrapped index. No-op on an empty list.
    pub fn select(&mut self, index: usize) {
        if !self.tasks.is_empty() {
            self.selected = Some(index % self.tasks.len());
        }
    }

    /// Move the selection one step around the ring and return the new
    /// index. Returns `None` (no-op) when the list is empty.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        let n = self.tasks.len() as i64;
        if n == 0 {
            return None;
        }
        let current = self.selected.unwrap_or(0) as i64;
        let next = (current + direction.delta()).rem_euclid(n) as usize;
        self.selected = Some(next);
        Some(next)
    }

    /// Flip the done flag of the task at `index`. Returns the new flag,
    /// or `None` if the index is out of range.
    pub fn toggle_done(&mut self, index: usize) -> Option<bool> {
        let task = self.tasks.get_mut(index)?;
        task.done = !task.done;
        Some(task.done)
    }

    /// Append an empty task and select it. Returns its index.
    pub fn push_blank(&mut self) -> usize {
        self.tasks.push(Task::new(""));
        let index = self.tasks.len() - 1;
        self.selected = Some(index);
        index
    }

    /// Remove the selected task. The selection clamps to the last valid
    /// index, or clears when the list becomes empty. Returns the removed
    /// task, or `None` when nothing was selected.
    pub fn delete_selected(&mut self) -> Option<Task> {
        let index = self.selected?;
        if index >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(index);
        self.selected = if self.tasks.is_empty() {
            None
        } else {
            Some(index.min(self.tasks.len() - 1))
        };
        Some(removed)
    }

    /// Remove the selected task only if its title is empty.
    /// Used when edit mode exits without any text entered.
    pub fn discard_selected_if_blank(&mut self) -> bool {
        if self.current().map(|t| t.title.is_empty()).unwrap_or(false) {
            self.delete_selected();
            true
        } else {
            false
        }
    }

    /// Drop all completed tasks, keeping the selection on a valid index.
    pub fn clear_done(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        let removed = before - self.tasks.len();
        self.selected = if self.tasks.is_empty() {
            None
        } else {
            Some(
                self.selected
                    .unwrap_or(0)
                    .min(self.tasks.len() - 1),
            )
        };
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> TaskList {
        TaskList::new(vec![
            Task::new("Eat Tofu"),
            Task::new("Stay Mental"),
            Task::new("Build PW-SH2 Apps"),
        ])
    }

    #[test]
    fn step_wraps_both_ways() {
        let mut list = three();
        assert_eq!(list.selected(), Some(0));
        assert_eq!(list.step(Direction::Previous), Some(2));
        assert_eq!(list.step(Direction::Next), Some(0));
        assert_eq!(list.step(Direction::Next), Some(1));
    }

    #[test]
    fn step_on_empty_is_noop() {
        let mut list = TaskList::default();
        assert_eq!(list.step(Direction::Next), None);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut list = three();
        assert_eq!(list.toggle_done(1), Some(true));
        assert_eq!(list.toggle_done(1), Some(false));
        assert!(!list.get(1).unwrap().done);
    }

    #[test]
    fn delete_last_index_clamps_selection() {
        let mut list = three();
        list.select(2);
        let removed = list.delete_selected().unwrap();
        assert_eq!(removed.title, "Build PW-SH2 Apps");
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn delete_only_item_clears_selection() {
        let mut list = TaskList::new(vec![Task::new("solo")]);
        assert!(list.delete_selected().is_some());
        assert!(list.is_empty());
        assert_eq!(list.selected(), None);
        // Subsequent navigation stays a no-op
        assert_eq!(list.step(Direction::Next), None);
    }

    #[test]
    fn push_blank_selects_new_item() {
        let mut list = three();
        let idx = list.push_blank();
        assert_eq!(idx, 3);
        assert_eq!(list.selected(), Some(3));
        assert_eq!(list.current().unwrap().title, "");
    }

    #[test]
    fn discard_blank_only_when_empty_title() {
        let mut list = three();
        list.push_blank();
        assert!(list.discard_selected_if_blank());
        assert_eq!(list.len(), 3);
        assert_eq!(list.selected(), Some(2));

        list.select(0);
        assert!(!list.discard_selected_if_blank());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn clear_done_keeps_selection_valid() {
        let mut list = three();
        list.toggle_done(1);
        list.toggle_done(2);
        list.select(2);
        assert_eq!(list.clear_done(), 2);
        assert_eq!(list.len(), 1);
        assert_eq!(list.selected(), Some(0));
    }
}
