//! Contact form: field focus plus a simulated submit lifecycle.

use std::time::Duration;

use crate::foundation::error::{ScrollError, ScrollResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        }
    }

    pub fn parse(s: &str) -> ScrollResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| ScrollError::validation(format!("unknown form field '{s}'")))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure(String),
}

/// A submission in flight: resolves to `outcome` once `after` has elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub after: Duration,
    pub outcome: SubmitOutcome,
}

/// Delivers form contents somewhere.
pub trait FormSubmitter {
    fn submit(&mut self, fields: &FormFields) -> Submission;
}

/// Stand-in submitter that resolves after a fixed delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
    pub failure: Option<String>,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            failure: None,
        }
    }
}

impl FormSubmitter for SimulatedSubmitter {
    fn submit(&mut self, _fields: &FormFields) -> Submission {
        Submission {
            after: self.delay,
            outcome: match &self.failure {
                Some(msg) => SubmitOutcome::Failure(msg.clone()),
                None => SubmitOutcome::Success,
            },
        }
    }
}

#[derive(Clone, Debug)]
struct Pending {
    due: Duration,
    outcome: SubmitOutcome,
}

#[derive(Clone, Debug)]
pub struct ContactForm<S = SimulatedSubmitter> {
    pub fields: FormFields,
    state: FormState,
    focused: Option<FormField>,
    error: Option<String>,
    pending: Option<Pending>,
    submitter: S,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(SimulatedSubmitter::default())
    }
}

impl<S: FormSubmitter> ContactForm<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            fields: FormFields::default(),
            state: FormState::Idle,
            focused: None,
            error: None,
            pending: None,
            submitter,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn is_focused(&self, field: FormField) -> bool {
        self.focused == Some(field)
    }

    /// Message from the last failed submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Start a submission at `now`. Ignored unless idle; returns whether it started.
    pub fn submit(&mut self, now: Duration) -> bool {
        if self.state != FormState::Idle {
            return false;
        }
        let Submission { after, outcome } = self.submitter.submit(&self.fields);
        self.pending = Some(Pending {
            due: now + after,
            outcome,
        });
        self.error = None;
        self.state = FormState::Loading;
        tracing::debug!(due_ms = (now + after).as_millis() as u64, "contact form loading");
        true
    }

    /// Resolve a pending submission whose deadline has passed.
    pub fn tick(&mut self, now: Duration) -> FormState {
        if !self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return self.state;
        }
        if let Some(p) = self.pending.take() {
            match p.outcome {
                SubmitOutcome::Success => {
                    self.state = FormState::Success;
                    tracing::debug!("contact form submitted");
                }
                SubmitOutcome::Failure(msg) => {
                    tracing::debug!(error = %msg, "contact form failed");
                    self.error = Some(msg);
                    self.state = FormState::Idle;
                }
            }
        }
        self.state
    }

    /// Back to a blank idle form; cancels any pending submission.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.state = FormState::Idle;
        self.focused = None;
        self.error = None;
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/form.rs"]
mod tests;
