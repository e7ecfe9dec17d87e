use super::{
    Field, FieldErrors, FormEvent, FormFields, FormRelayClient, FormState, SubmissionStatus,
    Submitter,
};

/// Owns one contact form and drives it to completion against a [`Submitter`].
///
/// `submit` takes `&mut self`, so a second submission cannot start until the
/// first one has resolved.
pub struct ContactController<S> {
    state: FormState,
    submitter: S,
}

impl<S: Submitter> ContactController<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            state: FormState::default(),
            submitter,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.status
    }

    pub fn fields(&self) -> &FormFields {
        &self.state.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.state.apply(FormEvent::Edit(field, value.into()));
    }

    /// Validates and, if the form is clean, sends it once. Returns the status
    /// the form ends up in.
    pub async fn submit(&mut self) -> SubmissionStatus {
        let Some(request) = self.state.apply(FormEvent::Submit) else {
            return self.state.status;
        };
        let outcome = self.submitter.submit(&request).await;
        self.state.apply(FormEvent::Resolved(outcome));
        self.state.status
    }
}

impl Default for ContactController<FormRelayClient> {
    fn default() -> Self {
        Self::new(FormRelayClient::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use httpmock::MockServer;
    use serde_json::json;

    use super::*;
    use crate::contact::{ContactConfig, FieldError, SubmitError};

    struct Recorder {
        sent: RefCell<Vec<FormFields>>,
        fail: bool,
    }

    impl Recorder {
        fn new(fail: bool) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    impl Submitter for &Recorder {
        async fn submit(&self, fields: &FormFields) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(fields.clone());
            if self.fail {
                Err(SubmitError::Server {
                    status: 500,
                    detail: "internal error".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn fill<S: Submitter>(controller: &mut ContactController<S>) {
        controller.edit(Field::Name, "Ann");
        controller.edit(Field::Email, "ann@x.com");
        controller.edit(Field::Subject, "Hi");
        controller.edit(Field::Message, "Hello there, this is long enough.");
    }

    #[tokio::test]
    async fn submit_success_resets_form() {
        let recorder = Recorder::new(false);
        let mut controller = ContactController::new(&recorder);
        fill(&mut controller);
        let expected = controller.fields().clone();

        assert_eq!(controller.submit().await, SubmissionStatus::Success);
        assert_eq!(*recorder.sent.borrow(), vec![expected]);
        assert!(controller.fields().is_empty());
        assert!(controller.errors().is_empty());
    }

    #[tokio::test]
    async fn submit_failure_keeps_input() {
        let recorder = Recorder::new(true);
        let mut controller = ContactController::new(&recorder);
        fill(&mut controller);
        let before = controller.fields().clone();

        assert_eq!(controller.submit().await, SubmissionStatus::Error);
        assert_eq!(controller.fields(), &before);
        assert_eq!(recorder.sent.borrow().len(), 1);

        // the visitor can try again without retyping
        assert_eq!(controller.submit().await, SubmissionStatus::Error);
        assert_eq!(recorder.sent.borrow().len(), 2);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_submitter() {
        let recorder = Recorder::new(false);
        let mut controller = ContactController::new(&recorder);
        controller.edit(Field::Email, "bad");
        controller.edit(Field::Message, "hi");

        assert_eq!(controller.submit().await, SubmissionStatus::Idle);
        assert!(recorder.sent.borrow().is_empty());
        let rendered = controller
            .errors()
            .iter()
            .map(|(_, e)| e.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            rendered,
            vec![
                "Name is required",
                "Email is invalid",
                "Subject is required",
                "Message must be at least 10 characters",
            ]
        );

        controller.edit(Field::Name, "Ann");
        assert_eq!(controller.errors().get(Field::Name), None);
        assert_eq!(controller.errors().get(Field::Email), Some(FieldError::EmailInvalid));
    }

    #[tokio::test]
    async fn posts_to_relay_end_to_end() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/contact").json_body(json!({
                    "name": "Ann",
                    "email": "ann@x.com",
                    "subject": "Hi",
                    "message": "Hello there, this is long enough.",
                }));
                then.status(200).json_body(json!({ "ok": true }));
            })
            .await;

        let client = FormRelayClient::new(&ContactConfig::with_endpoint(server.url("/f/contact")));
        let mut controller = ContactController::new(client);
        fill(&mut controller);

        assert_eq!(controller.submit().await, SubmissionStatus::Success);
        assert_eq!(controller.state(), &FormState {
            status: SubmissionStatus::Success,
            ..FormState::default()
        });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn relay_rejection_reports_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/f/contact");
                then.status(400).json_body(json!({ "error": "Form not found" }));
            })
            .await;

        let client = FormRelayClient::new(&ContactConfig::with_endpoint(server.url("/f/contact")));
        let mut controller = ContactController::new(client);
        fill(&mut controller);

        assert_eq!(controller.submit().await, SubmissionStatus::Error);
        assert_eq!(controller.fields().name, "Ann");
        mock.assert_async().await;
    }
}
