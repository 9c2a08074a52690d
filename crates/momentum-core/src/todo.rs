/// A single task. Ids derive from the creation timestamp and are never
/// reused, so deletion does not renumber the survivors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// Insertion-ordered task list. Append-only except for deletion.
#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<Todo>,
    last_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task and returns its id. Whitespace-only text is a
    /// silent no-op. Ids stay strictly monotonic even when two adds land
    /// on the same millisecond.
    pub fn add(&mut self, text: &str, now_ms: u64) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.items.push(Todo {
            id,
            text: text.to_string(),
            done: false,
        });
        Some(id)
    }

    /// Flips `done` for the matching task. Returns false (no-op) if the id
    /// is unknown.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.done = !todo.done;
                true
            }
            None => false,
        }
    }

    /// Removes the matching task, leaving the order of the rest unchanged.
    /// Returns false (no-op) if the id is unknown.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.items.iter().position(|t| t.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|t| t.done).count()
    }

    /// Rounded percentage of done tasks; defined as 0 for an empty list.
    pub fn completion_pct(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.done_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u32
    }
}
