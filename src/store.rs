use crate::task::Task;
use crate::validators::normalize;

/// In-memory task sequence. Tasks are only ever appended, and every lookup
/// walks from the most recently added one, so duplicates resolve to the newest.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().rev()
    }

    /// Exact, case-sensitive title match.
    pub fn find_by_title(&self, title: &str) -> Option<&Task> {
        self.iter().find(|t| t.title == title)
    }

    /// Case- and accent-insensitive title match, used by the edit flow.
    pub fn find_by_title_normalized_mut(&mut self, title: &str) -> Option<&mut Task> {
        let wanted = normalize(title);
        self.tasks
            .iter_mut()
            .rev()
            .find(|t| normalize(&t.title) == wanted)
    }
}
