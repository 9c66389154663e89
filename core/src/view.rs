//! Presentation model derived from [`TodoState`].
//!
//! A frontend draws a [`TodoView`] and nothing else; all enable/disable and
//! counting rules live here so every frontend applies them identically.

use crate::state::TodoState;
use crate::types::TodoId;

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub delete_enabled: bool,
}

/// What occupies the list area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    /// First load still in flight.
    Loading,
    Empty,
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub remaining: usize,
    pub total: usize,
}

impl Remaining {
    pub fn label(&self) -> String {
        format!("{} of {} tasks remaining", self.remaining, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub draft_text: String,
    pub input_enabled: bool,
    pub add_enabled: bool,
    pub add_label: &'static str,
    /// Last error, shown until dismissed.
    pub banner: Option<String>,
    pub body: ListBody,
    /// Present only when there is at least one task.
    pub remaining: Option<Remaining>,
}

impl TodoView {
    pub fn from_state(state: &TodoState) -> Self {
        let loading = state.loading();
        let tasks = state.tasks();

        let body = if tasks.is_empty() {
            if loading {
                ListBody::Loading
            } else {
                ListBody::Empty
            }
        } else {
            ListBody::Rows(
                tasks
                    .iter()
                    .map(|task| RowView {
                        id: task.id.clone(),
                        text: task.text.clone(),
                        completed: task.completed,
                        delete_enabled: !loading,
                    })
                    .collect(),
            )
        };

        let remaining = (!tasks.is_empty()).then(|| Remaining {
            remaining: state.remaining(),
            total: tasks.len(),
        });

        Self {
            draft_text: state.draft_text().to_string(),
            input_enabled: !loading,
            add_enabled: !loading && state.can_add(),
            add_label: if loading { "Adding..." } else { "Add" },
            banner: state.error().map(str::to_string),
            body,
            remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Event;
    use crate::types::Todo;

    fn todo(id: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::from(id),
            text: format!("task {id}"),
            completed,
        }
    }

    #[test]
    fn idle_empty_state() {
        let view = TodoView::from_state(&TodoState::new());
        assert_eq!(view.body, ListBody::Empty);
        assert!(view.input_enabled);
        assert!(!view.add_enabled);
        assert_eq!(view.add_label, "Add");
        assert!(view.remaining.is_none());
        assert!(view.banner.is_none());
    }

    #[test]
    fn initial_load_shows_loading_and_disables_input() {
        let state = TodoState::new()
            .reduce(Event::DraftChanged("x".to_string()))
            .reduce(Event::Started);
        let view = TodoView::from_state(&state);
        assert_eq!(view.body, ListBody::Loading);
        assert!(!view.input_enabled);
        assert!(!view.add_enabled);
        assert_eq!(view.add_label, "Adding...");
    }

    #[test]
    fn loading_with_tasks_keeps_rows_but_disables_delete() {
        let state = TodoState::with_tasks(vec![todo("1", false)]).reduce(Event::Started);
        let ListBody::Rows(rows) = TodoView::from_state(&state).body else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].delete_enabled);
    }

    #[test]
    fn add_enabled_only_with_non_blank_draft() {
        let blank = TodoState::new().reduce(Event::DraftChanged("   ".to_string()));
        assert!(!TodoView::from_state(&blank).add_enabled);
        let filled = TodoState::new().reduce(Event::DraftChanged("milk".to_string()));
        assert!(TodoView::from_state(&filled).add_enabled);
    }

    #[test]
    fn remaining_counts_incomplete_of_total() {
        let state = TodoState::with_tasks(vec![todo("1", false), todo("2", true), todo("3", false)]);
        let remaining = TodoView::from_state(&state).remaining.unwrap();
        assert_eq!(remaining, Remaining { remaining: 2, total: 3 });
        assert_eq!(remaining.label(), "2 of 3 tasks remaining");
    }

    #[test]
    fn remaining_matches_total_minus_completed_for_any_mix() {
        for mask in 0u8..16 {
            let tasks: Vec<Todo> = (0..4)
                .map(|i| todo(&i.to_string(), mask & (1 << i) != 0))
                .collect();
            let completed = tasks.iter().filter(|task| task.completed).count();
            let remaining = TodoView::from_state(&TodoState::with_tasks(tasks))
                .remaining
                .unwrap();
            assert_eq!(remaining.remaining, remaining.total - completed, "mask {mask:04b}");
        }
    }

    #[test]
    fn banner_mirrors_last_error() {
        let state = TodoState::new().reduce(Event::Failed("Failed to fetch tasks".to_string()));
        assert_eq!(
            TodoView::from_state(&state).banner.as_deref(),
            Some("Failed to fetch tasks")
        );
    }
}
