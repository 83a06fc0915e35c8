//! The `Todo` entity. Pure state transitions, no I/O.
//!
//! Every mutating operation checks all of its preconditions before touching a
//! field, so a failed call leaves the todo unchanged.

use super::errors::DomainError;
use super::state::TodoState;
use super::values::{Owner, TodoDeadline, TodoId, TodoName, TodoReminder, TodoStatus};
use chrono::{DateTime, Utc};

/// A single todo item owned by one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    name: TodoName,
    owner: Owner,
    status: TodoStatus,
    deadline: Option<TodoDeadline>,
    reminder: Option<TodoReminder>,
}

impl Todo {
    /// New open todo without deadline or reminder.
    pub fn add(id: TodoId, name: TodoName, owner: Owner) -> Self {
        Self {
            id,
            name,
            owner,
            status: TodoStatus::Open,
            deadline: None,
            reminder: None,
        }
    }

    /// Rebuilds a todo from its persisted projection.
    ///
    /// Stored deadline/reminder values are parsed but not checked against the
    /// current time; a reminder that has fired is still valid state.
    pub fn from_state(state: &TodoState) -> Result<Self, DomainError> {
        let id = TodoId::from_string(&state.id)?;
        let name = TodoName::from_string(&state.name)?;
        let owner = Owner::from(&state.owner_id, &state.owner_username, &state.owner_email)?;
        let status = state.status.parse::<TodoStatus>()?;
        let deadline = state
            .deadline
            .as_deref()
            .map(TodoDeadline::from_string)
            .transpose()?;
        let reminder = state
            .reminder
            .as_deref()
            .map(TodoReminder::from_string)
            .transpose()?;

        Ok(Self {
            id,
            name,
            owner,
            status,
            deadline,
            reminder,
        })
    }

    pub fn mark_as_done(&mut self) -> Result<(), DomainError> {
        if self.status == TodoStatus::Done {
            return Err(DomainError::InvalidTransition(
                "Todo is already done".to_string(),
            ));
        }
        self.status = TodoStatus::Done;
        Ok(())
    }

    pub fn reopen(&mut self) -> Result<(), DomainError> {
        if self.status == TodoStatus::Open {
            return Err(DomainError::InvalidTransition(
                "Todo is already open".to_string(),
            ));
        }
        self.status = TodoStatus::Open;
        Ok(())
    }

    pub fn add_reminder(&mut self, owner: &Owner, reminder: TodoReminder) -> Result<(), DomainError> {
        self.add_reminder_at(owner, reminder, Utc::now())
    }

    /// Checks, in order: ownership, open status, reminder not before `now`.
    pub fn add_reminder_at(
        &mut self,
        owner: &Owner,
        reminder: TodoReminder,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.ensure_can_schedule(owner)?;
        if reminder.is_in_the_past_at(now) {
            return Err(DomainError::InvalidValue(
                "Reminder must not be in the past!".to_string(),
            ));
        }
        self.reminder = Some(reminder);
        Ok(())
    }

    pub fn add_deadline(&mut self, owner: &Owner, deadline: TodoDeadline) -> Result<(), DomainError> {
        self.add_deadline_at(owner, deadline, Utc::now())
    }

    /// Checks, in order: ownership, open status, deadline not before `now`.
    pub fn add_deadline_at(
        &mut self,
        owner: &Owner,
        deadline: TodoDeadline,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.ensure_can_schedule(owner)?;
        if deadline.is_in_the_past_at(now) {
            return Err(DomainError::InvalidValue(
                "Deadline must not be in the past!".to_string(),
            ));
        }
        self.deadline = Some(deadline);
        Ok(())
    }

    /// Deadlines and reminders share these messages.
    fn ensure_can_schedule(&self, owner: &Owner) -> Result<(), DomainError> {
        if owner != &self.owner {
            return Err(DomainError::Unauthorized(
                "Only the owner of the todo can add deadline!".to_string(),
            ));
        }
        if self.status == TodoStatus::Done {
            return Err(DomainError::InvalidState(
                "Deadline can only be added to an open todo!".to_string(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn name(&self) -> &TodoName {
        &self.name
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn deadline(&self) -> Option<&TodoDeadline> {
        self.deadline.as_ref()
    }

    pub fn reminder(&self) -> Option<&TodoReminder> {
        self.reminder.as_ref()
    }

    pub fn to_state(&self) -> TodoState {
        TodoState {
            id: self.id.to_string(),
            name: self.name.to_string(),
            owner_id: self.owner.id().to_string(),
            owner_username: self.owner.username().to_string(),
            owner_email: self.owner.email_address().to_string(),
            status: self.status.to_string(),
            deadline: self.deadline.map(|d| d.to_string()),
            reminder: self.reminder.map(|r| r.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParseError;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn owner(id: &str) -> Owner {
        Owner::from(id, id, &format!("{id}@example.com")).unwrap()
    }

    fn todo() -> Todo {
        Todo::add(
            TodoId::from_string("t1").unwrap(),
            TodoName::from_string("Buy milk").unwrap(),
            owner("u1"),
        )
    }

    fn tomorrow() -> DateTime<Utc> {
        now() + Duration::days(1)
    }

    fn yesterday() -> DateTime<Utc> {
        now() - Duration::days(1)
    }

    #[test]
    fn test_add_starts_open_and_unscheduled() {
        let todo = todo();
        assert_eq!(todo.id().as_str(), "t1");
        assert_eq!(todo.name().as_str(), "Buy milk");
        assert_eq!(todo.owner(), &owner("u1"));
        assert_eq!(todo.status(), TodoStatus::Open);
        assert!(todo.deadline().is_none());
        assert!(todo.reminder().is_none());
    }

    #[test]
    fn test_mark_as_done_twice_fails() {
        let mut todo = todo();
        todo.mark_as_done().unwrap();
        assert_eq!(todo.status(), TodoStatus::Done);

        let err = todo.mark_as_done().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(ref m) if m == "Todo is already done"));
        assert_eq!(todo.status(), TodoStatus::Done);
    }

    #[test]
    fn test_reopen_open_todo_fails() {
        let mut todo = todo();
        let err = todo.reopen().unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(ref m) if m == "Todo is already open"));
    }

    #[test]
    fn test_done_then_reopen_cycles() {
        let mut todo = todo();
        for _ in 0..3 {
            todo.mark_as_done().unwrap();
            todo.reopen().unwrap();
        }
        assert_eq!(todo.status(), TodoStatus::Open);
    }

    #[test]
    fn test_add_deadline_by_non_owner_is_unauthorized_in_any_status() {
        let mut todo = todo();
        let deadline = TodoDeadline::new(tomorrow());
        let err = todo.add_deadline_at(&owner("u2"), deadline, now()).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        // Ownership is checked before status and before the timestamp.
        todo.mark_as_done().unwrap();
        let err = todo
            .add_deadline_at(&owner("u2"), TodoDeadline::new(yesterday()), now())
            .unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
        assert!(todo.deadline().is_none());
    }

    #[test]
    fn test_add_deadline_in_the_past_is_invalid() {
        let mut todo = todo();
        let err = todo
            .add_deadline_at(&owner("u1"), TodoDeadline::new(yesterday()), now())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
        assert!(todo.deadline().is_none());
    }

    #[test]
    fn test_add_deadline_on_done_todo_is_invalid_state() {
        let mut todo = todo();
        todo.mark_as_done().unwrap();
        let err = todo
            .add_deadline_at(&owner("u1"), TodoDeadline::new(tomorrow()), now())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));

        // Status is checked before the timestamp.
        let err = todo
            .add_deadline_at(&owner("u1"), TodoDeadline::new(yesterday()), now())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
    }

    #[test]
    fn test_add_deadline_by_owner_succeeds_and_replaces() {
        let mut todo = todo();
        let first = TodoDeadline::new(tomorrow());
        todo.add_deadline_at(&owner("u1"), first, now()).unwrap();
        assert_eq!(todo.deadline(), Some(&first));

        let second = TodoDeadline::new(tomorrow() + Duration::hours(2));
        todo.add_deadline_at(&owner("u1"), second, now()).unwrap();
        assert_eq!(todo.deadline(), Some(&second));
    }

    #[test]
    fn test_add_deadline_uses_current_time() {
        let mut todo = todo();
        let later = TodoDeadline::new(Utc::now() + Duration::days(1));
        todo.add_deadline(&owner("u1"), later).unwrap();
        let earlier = TodoDeadline::new(Utc::now() - Duration::minutes(5));
        assert!(matches!(
            todo.add_deadline(&owner("u1"), earlier),
            Err(DomainError::InvalidValue(_))
        ));
        assert_eq!(todo.deadline(), Some(&later));
    }

    #[test]
    fn test_reminder_check_order() {
        let mut todo = todo();
        let past = TodoReminder::new(yesterday());
        let future = TodoReminder::new(tomorrow());

        assert!(matches!(
            todo.add_reminder_at(&owner("u1"), past, now()),
            Err(DomainError::InvalidValue(_))
        ));
        todo.mark_as_done().unwrap();
        assert!(matches!(
            todo.add_reminder_at(&owner("u1"), past, now()),
            Err(DomainError::InvalidState(_))
        ));
        assert!(matches!(
            todo.add_reminder_at(&owner("u2"), past, now()),
            Err(DomainError::Unauthorized(_))
        ));
        todo.reopen().unwrap();
        todo.add_reminder_at(&owner("u1"), future, now()).unwrap();
        assert_eq!(todo.reminder(), Some(&future));
    }

    #[test]
    fn test_schedule_error_messages() {
        let mut todo = todo();
        let past = TodoReminder::new(yesterday());
        let err = todo.add_reminder_at(&owner("u1"), past, now()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value: Reminder must not be in the past!");
        let err = todo
            .add_deadline_at(&owner("u1"), TodoDeadline::new(yesterday()), now())
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value: Deadline must not be in the past!");

        let err = todo.add_reminder_at(&owner("u2"), past, now()).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(ref m)
            if m == "Only the owner of the todo can add deadline!"));

        todo.mark_as_done().unwrap();
        let err = todo.add_reminder_at(&owner("u1"), past, now()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(ref m)
            if m == "Deadline can only be added to an open todo!"));
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut todo = todo();
        todo.mark_as_done().unwrap();
        todo.reopen().unwrap();
        assert_eq!(todo.status(), TodoStatus::Open);

        let tomorrow = TodoReminder::new(Utc::now() + Duration::days(1));
        todo.add_reminder(&owner("u1"), tomorrow).unwrap();
        assert!(matches!(
            todo.add_reminder(&owner("u2"), tomorrow),
            Err(DomainError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_state_round_trip() {
        let mut todo = todo();
        todo.add_deadline_at(&owner("u1"), TodoDeadline::new(tomorrow()), now())
            .unwrap();
        todo.add_reminder_at(&owner("u1"), TodoReminder::new(tomorrow()), now())
            .unwrap();
        todo.mark_as_done().unwrap();

        let state = todo.to_state();
        assert_eq!(state.id, "t1");
        assert_eq!(state.owner_email, "u1@example.com");
        assert_eq!(state.status, "done");

        let restored = Todo::from_state(&state).unwrap();
        assert_eq!(restored, todo);
    }

    #[test]
    fn test_from_state_keeps_past_schedule() {
        let mut state = todo().to_state();
        state.deadline = Some("2001-01-01T00:00:00Z".to_string());
        let todo = Todo::from_state(&state).unwrap();
        assert_eq!(
            todo.deadline().map(|d| d.at()),
            Some(Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_from_state_rejects_malformed_fields() {
        let mut state = todo().to_state();
        state.status = "archived".to_string();
        assert!(matches!(
            Todo::from_state(&state),
            Err(DomainError::Parse(ParseError::UnknownStatus(_)))
        ));

        let mut state = todo().to_state();
        state.owner_email = "not-an-email".to_string();
        assert!(matches!(
            Todo::from_state(&state),
            Err(DomainError::Parse(ParseError::InvalidEmail(_)))
        ));

        let mut state = todo().to_state();
        state.reminder = Some("soon".to_string());
        assert!(matches!(
            Todo::from_state(&state),
            Err(DomainError::Parse(ParseError::InvalidInstant { field: "reminder", .. }))
        ));
    }
}
