use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use todo_core::{TodoController, TodoId, TodoView, Transport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App<T> {
    controller: TodoController<T>,
    pub list_state: ListState,
    pub input_mode: InputMode,
    should_quit: bool,
}

impl<T: Transport> App<T> {
    pub fn new(controller: TodoController<T>) -> Self {
        Self {
            controller,
            list_state: ListState::default(),
            input_mode: InputMode::Normal,
            should_quit: false,
        }
    }

    pub fn view(&self) -> TodoView {
        self.controller.view()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn refresh(&mut self) {
        self.controller.refresh();
        self.clamp_selection();
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal(code),
            InputMode::Editing => self.handle_editing(code),
        }
    }

    fn handle_normal(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('a') | KeyCode::Char('i') => {
                if self.view().input_enabled {
                    self.input_mode = InputMode::Editing;
                }
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('x') | KeyCode::Esc => self.controller.dismiss_error(),
            _ => {}
        }
    }

    fn handle_editing(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                if self.view().add_enabled {
                    self.controller.add();
                    if self.controller.state().draft_text().is_empty() {
                        self.input_mode = InputMode::Normal;
                        self.select_last();
                    }
                }
            }
            KeyCode::Backspace => {
                let mut draft = self.controller.state().draft_text().to_string();
                draft.pop();
                self.controller.set_draft(draft);
            }
            KeyCode::Char(c) => {
                if self.view().input_enabled {
                    let mut draft = self.controller.state().draft_text().to_string();
                    draft.push(c);
                    self.controller.set_draft(draft);
                }
            }
            _ => {}
        }
    }

    fn selected_id(&self) -> Option<TodoId> {
        let index = self.list_state.selected()?;
        self.controller
            .state()
            .tasks()
            .get(index)
            .map(|task| task.id.clone())
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.controller.toggle(&id);
        }
    }

    fn remove_selected(&mut self) {
        if self.controller.state().loading() {
            return;
        }
        if let Some(id) = self.selected_id() {
            self.controller.remove(&id);
            self.clamp_selection();
        }
    }

    fn next(&mut self) {
        let len = self.controller.state().tasks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        let len = self.controller.state().tasks().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_last(&mut self) {
        let len = self.controller.state().tasks().len();
        self.list_state.select(len.checked_sub(1));
    }

    /// Keep the selection on a valid row after the list changed size.
    fn clamp_selection(&mut self) {
        let len = self.controller.state().tasks().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            Some(i) => Some(i),
            None => Some(0),
        };
        self.list_state.select(selected);
    }
}
