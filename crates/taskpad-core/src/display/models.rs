//! Display implementations for domain models.

use std::fmt;

use crate::models::{Subtask, Task, TaskSummary, Theme};

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

impl fmt::Display for Subtask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", checkbox(self.completed), self.text)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✓ Done" } else { "○ Open" };
        writeln!(f, "{} ({status})", self.title)?;

        if self.subtasks.is_empty() {
            writeln!(f)?;
            writeln!(f, "No subtasks.")?;
        } else {
            writeln!(f)?;
            for (index, subtask) in self.subtasks.iter().enumerate() {
                writeln!(f, "- {index}. {subtask}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_subtasks > 0 {
            format!(" ({}/{})", self.completed_subtasks, self.total_subtasks)
        } else {
            String::new()
        };
        writeln!(
            f,
            "- {} {}. {}{progress}",
            checkbox(self.completed),
            self.index,
            self.title
        )
    }
}
