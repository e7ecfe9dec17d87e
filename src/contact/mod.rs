//! Contact form submission flow.
//!
//! Field values are checked by [`validate`], sent once to the form relay by a
//! [`Submitter`], and the whole exchange is driven by the transition function
//! on [`FormState`]. The Leptos component and [`ContactController`] both sit on
//! top of that transition function.

mod client;
mod controller;
mod machine;
mod validate;

pub use client::{ContactConfig, FormRelayClient, SubmitError, Submitter, DEFAULT_ENDPOINT};
pub use controller::ContactController;
pub use machine::{FormEvent, FormState, SubmissionStatus, Transition};
pub use validate::{validate, FieldError, FieldErrors};

use serde::{Deserialize, Serialize};

/// Shown to the visitor for every transport or server failure.
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The form control name, also the JSON key sent to the relay.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Values of the four contact inputs, serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
