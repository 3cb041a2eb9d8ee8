//! Collection wrapper types for displaying groups of tasks.

use std::{fmt, ops::Index};

use crate::models::{AppState, TaskSummary};

/// Newtype wrapper for displaying a list of task summaries.
pub struct TaskSummaries(pub Vec<TaskSummary>);

impl TaskSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&AppState> for TaskSummaries {
    fn from(state: &AppState) -> Self {
        Self(
            state
                .tasks
                .iter()
                .enumerate()
                .map(|(index, task)| TaskSummary::from_task(index, task))
                .collect(),
        )
    }
}

impl Index<usize> for TaskSummaries {
    type Output = TaskSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for TaskSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, Theme};

    #[test]
    fn test_summaries_from_state() {
        let mut state = AppState::seeded(Theme::Light);
        state.tasks.push(Task::new("Second"));

        let summaries = TaskSummaries::from(&state);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].index, 1);
        assert_eq!(summaries[1].title, "Second");

        let output = summaries.to_string();
        assert!(output.contains("- [ ] 0. Default Task"));
        assert!(output.contains("- [ ] 1. Second"));
    }

    #[test]
    fn test_empty_summaries() {
        let summaries = TaskSummaries::from(&AppState::default());
        assert!(summaries.is_empty());
        assert_eq!(summaries.to_string(), "No tasks found.\n");
    }
}
