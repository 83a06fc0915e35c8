//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Asks who is acting once, then loops over the todo menu until Quit.

use crate::domain::{DomainError, Owner, Todo, TodoDeadline, TodoId, TodoName, TodoReminder};
use crate::ports::InputPort;
use crate::usecases::TodoService;
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightMagenta));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    Show,
    MarkDone,
    Reopen,
    AddDeadline,
    AddReminder,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 7] = [
        MenuAction::Add,
        MenuAction::Show,
        MenuAction::MarkDone,
        MenuAction::Reopen,
        MenuAction::AddDeadline,
        MenuAction::AddReminder,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Add => "Add todo",
            MenuAction::Show => "Show todo",
            MenuAction::MarkDone => "Mark as done",
            MenuAction::Reopen => "Reopen",
            MenuAction::AddDeadline => "Add deadline",
            MenuAction::AddReminder => "Add reminder",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

fn prompt_err(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

fn ask(message: &str) -> Result<String, DomainError> {
    Text::new(message).prompt().map_err(prompt_err)
}

/// One-line summary printed after each successful action.
pub fn describe(todo: &Todo) -> String {
    let mut line = format!(
        "[{}] {} ({}) owner={}",
        todo.status(),
        todo.name(),
        todo.id(),
        todo.owner()
    );
    if let Some(deadline) = todo.deadline() {
        line.push_str(&format!(" deadline={deadline}"));
    }
    if let Some(reminder) = todo.reminder() {
        line.push_str(&format!(" reminder={reminder}"));
    }
    line
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    todo_service: Arc<TodoService>,
}

impl TuiInputPort {
    pub fn new(todo_service: Arc<TodoService>) -> Self {
        Self { todo_service }
    }

    fn ask_owner(&self) -> Result<Owner, DomainError> {
        let id = ask("Your user id:")?;
        let username = ask("Your username:")?;
        let email = ask("Your email:")?;
        Ok(Owner::from(&id, &username, &email)?)
    }

    fn ask_id(&self) -> Result<TodoId, DomainError> {
        Ok(TodoId::from_string(&ask("Todo id:")?)?)
    }

    /// Runs one menu action. `Ok(None)` ends the session.
    async fn handle(&self, action: MenuAction, owner: &Owner) -> Result<Option<Todo>, DomainError> {
        let service = &self.todo_service;
        let todo = match action {
            MenuAction::Quit => return Ok(None),
            MenuAction::Add => {
                let name = TodoName::from_string(&ask("Name:")?)?;
                service.add_todo(name, owner.clone()).await?
            }
            MenuAction::Show => service.get(&self.ask_id()?).await?,
            MenuAction::MarkDone => service.mark_as_done(&self.ask_id()?).await?,
            MenuAction::Reopen => service.reopen(&self.ask_id()?).await?,
            MenuAction::AddDeadline => {
                let id = self.ask_id()?;
                let deadline = TodoDeadline::from_string(&ask("Deadline (RFC 3339):")?)?;
                service.add_deadline(&id, owner, deadline).await?
            }
            MenuAction::AddReminder => {
                let id = self.ask_id()?;
                let reminder = TodoReminder::from_string(&ask("Reminder (RFC 3339):")?)?;
                service.add_reminder(&id, owner, reminder).await?
            }
        };
        Ok(Some(todo))
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let owner = self.ask_owner()?;
        debug!(owner_id = owner.id(), "session started");

        loop {
            let action = Select::new("What next?", MenuAction::ALL.to_vec())
                .prompt()
                .map_err(prompt_err)?;
            match self.handle(action, &owner).await {
                Ok(Some(todo)) => println!("{}", describe(&todo)),
                Ok(None) => return Ok(()),
                // Interrupted prompts end the session; everything else is shown and the loop goes on.
                Err(DomainError::Input(msg)) => return Err(DomainError::Input(msg)),
                Err(e) => println!("✗ {e}"),
            }
        }
    }
}
