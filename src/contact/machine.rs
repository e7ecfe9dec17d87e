use super::{validate, Field, FieldErrors, FormFields, SubmitError, FAILURE_MESSAGE, SUCCESS_MESSAGE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Everything a contact form instance knows about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

#[derive(Debug)]
pub enum FormEvent {
    /// A keystroke in one input.
    Edit(Field, String),
    /// The visitor pressed "Send Message".
    Submit,
    /// The outstanding request finished.
    Resolved(Result<(), SubmitError>),
}

/// Result of feeding one event to a [`FormState`]. When `request` is set the
/// caller must send exactly those fields and report back with
/// [`FormEvent::Resolved`].
#[derive(Debug)]
pub struct Transition {
    pub state: FormState,
    pub request: Option<FormFields>,
}

impl FormState {
    pub fn step(mut self, event: FormEvent) -> Transition {
        let request = self.apply(event);
        Transition {
            state: self,
            request,
        }
    }

    /// In-place form of [`FormState::step`].
    pub fn apply(&mut self, event: FormEvent) -> Option<FormFields> {
        match event {
            FormEvent::Edit(field, value) => {
                self.fields.set(field, value);
                self.errors.clear(field);
                None
            }
            FormEvent::Submit => {
                // single flight: the button is disabled too, but programmatic
                // callers can still race
                if self.is_loading() {
                    log::debug!("ignoring contact submit while a request is outstanding");
                    return None;
                }
                let errors = validate(&self.fields);
                if !errors.is_empty() {
                    self.errors = errors;
                    return None;
                }
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::Loading;
                Some(self.fields.clone())
            }
            FormEvent::Resolved(outcome) => {
                if !self.is_loading() {
                    log::warn!("dropping contact outcome with no request outstanding");
                    return None;
                }
                match outcome {
                    Ok(()) => {
                        self.status = SubmissionStatus::Success;
                        self.fields = FormFields::default();
                        self.errors = FieldErrors::default();
                    }
                    Err(_) => self.status = SubmissionStatus::Error,
                }
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    /// Banner text for terminal statuses.
    pub fn status_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Success => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(FAILURE_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FieldError;

    fn filled() -> FormState {
        let mut state = FormState::default();
        state.apply(FormEvent::Edit(Field::Name, "Ann".to_string()));
        state.apply(FormEvent::Edit(Field::Email, "ann@x.com".to_string()));
        state.apply(FormEvent::Edit(Field::Subject, "Hi".to_string()));
        state.apply(FormEvent::Edit(
            Field::Message,
            "Hello there, this is long enough.".to_string(),
        ));
        state
    }

    fn server_error() -> SubmitError {
        SubmitError::Server {
            status: 500,
            detail: "boom".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::default();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(state.fields.is_empty());
        assert!(state.errors.is_empty());
        assert_eq!(state.status_message(), None);
    }

    #[test]
    fn test_invalid_submit_sets_errors_without_request() {
        let mut state = FormState::default();
        state.apply(FormEvent::Edit(Field::Email, "bad".to_string()));
        state.apply(FormEvent::Edit(Field::Message, "hi".to_string()));

        let t = state.step(FormEvent::Submit);
        assert!(t.request.is_none());
        assert_eq!(t.state.status, SubmissionStatus::Idle);
        assert_eq!(t.state.errors.len(), 4);
        assert_eq!(t.state.errors.get(Field::Email), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn test_invalid_submit_keeps_terminal_status() {
        let mut state = filled();
        state.status = SubmissionStatus::Error;
        state.apply(FormEvent::Edit(Field::Name, " ".to_string()));
        assert!(state.apply(FormEvent::Submit).is_none());
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.errors.get(Field::Name), Some(FieldError::NameRequired));
    }

    #[test]
    fn test_successful_round() {
        let before = filled();
        let t = before.clone().step(FormEvent::Submit);
        assert_eq!(t.request.as_ref(), Some(&before.fields));
        assert_eq!(t.state.status, SubmissionStatus::Loading);

        let t = t.state.step(FormEvent::Resolved(Ok(())));
        assert!(t.request.is_none());
        assert_eq!(
            t.state,
            FormState {
                fields: FormFields::default(),
                errors: FieldErrors::default(),
                status: SubmissionStatus::Success,
            }
        );
        assert_eq!(t.state.status_message(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_failed_round_keeps_fields() {
        let before = filled();
        let mut state = before.clone();
        assert!(state.apply(FormEvent::Submit).is_some());
        state.apply(FormEvent::Resolved(Err(server_error())));
        assert_eq!(state.status, SubmissionStatus::Error);
        assert_eq!(state.fields, before.fields);
        assert_eq!(state.status_message(), Some(FAILURE_MESSAGE));
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut state = filled();
        assert!(state.apply(FormEvent::Submit).is_some());
        assert!(state.apply(FormEvent::Submit).is_none());
        assert_eq!(state.status, SubmissionStatus::Loading);
    }

    #[test]
    fn test_resubmit_after_terminal_status() {
        let mut state = filled();
        state.apply(FormEvent::Submit);
        state.apply(FormEvent::Resolved(Err(server_error())));
        assert!(state.apply(FormEvent::Submit).is_some());
        assert_eq!(state.status, SubmissionStatus::Loading);
        state.apply(FormEvent::Resolved(Ok(())));
        assert_eq!(state.status, SubmissionStatus::Success);

        for field in Field::ALL {
            state.apply(FormEvent::Edit(field, filled().fields.get(field).to_string()));
        }
        assert_eq!(state.status, SubmissionStatus::Success);
        assert!(state.apply(FormEvent::Submit).is_some());
    }

    #[test]
    fn test_stale_outcome_ignored() {
        let mut state = filled();
        state.apply(FormEvent::Resolved(Ok(())));
        assert_eq!(state, filled());
    }

    #[test]
    fn test_edit_clears_only_its_own_error() {
        let mut state = FormState::default();
        state.apply(FormEvent::Submit);
        assert_eq!(state.errors.len(), 4);

        state.apply(FormEvent::Edit(Field::Subject, "x".to_string()));
        assert_eq!(state.errors.get(Field::Subject), None);
        assert_eq!(state.errors.len(), 3);
        assert_eq!(state.errors.get(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_edit_does_not_revalidate() {
        let mut state = filled();
        state.apply(FormEvent::Edit(Field::Email, "nope".to_string()));
        assert!(state.errors.is_empty());
    }
}
