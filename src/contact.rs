use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Value of the input's `name`/`id` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name *",
            Self::Email => "Email Address *",
            Self::Subject => "Subject *",
            Self::Message => "Message *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project or opportunity...",
        }
    }

    /// `None` for the message, which renders as a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Name | Self::Subject => Some("text"),
            Self::Email => Some("email"),
            Self::Message => None,
        }
    }
}

/// What the mail relay receives. Field names double as the relay template's
/// parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactPayload,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Subject => &self.fields.subject,
            ContactField::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Subject => &mut self.fields.subject,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    pub fn payload(&self) -> ContactPayload {
        self.fields.clone()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Moves to `Submitting` and hands out the payload to send. A form that
    /// is already submitting yields nothing. Fields are kept as typed.
    pub fn begin_submit(&mut self) -> Option<ContactPayload> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.payload())
    }

    pub fn finish<E>(&mut self, outcome: Result<(), E>) {
        if !self.is_submitting() {
            return;
        }
        self.status = match outcome {
            Ok(()) => SubmitStatus::Sent,
            Err(_) => SubmitStatus::Failed,
        };
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("mail relay unreachable: {0}")]
    Transport(String),
    #[error("mail relay rejected message ({status}): {body}")]
    Rejected { status: http::StatusCode, body: String },
    #[error("{0}")]
    Server(String),
}

/// Anything that can deliver a contact payload as an email.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MailRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

/// Sends once, no retry. The outcome is only logged here; the caller decides
/// what the user sees.
pub async fn deliver<R>(relay: &R, payload: ContactPayload) -> Result<(), RelayError>
where
    R: MailRelay + ?Sized,
{
    let res = relay.send(&payload).await;
    match &res {
        Ok(()) => log::info!("Message sent for {}", payload.email),
        Err(e) => log::error!("Error sending message: {e}"),
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRelay {
        sent: Mutex<Vec<ContactPayload>>,
        fail: bool,
    }

    #[async_trait]
    impl MailRelay for RecordingRelay {
        async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
            self.sent.lock().unwrap().push(payload.clone());
            if self.fail {
                Err(RelayError::Transport("connection refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "A");
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Subject, "S");
        form.set(ContactField::Message, "M");
        form
    }

    #[test]
    fn test_field_updates_are_independent() {
        let mut form = filled_form();
        form.set(ContactField::Email, "other@b.com");
        assert_eq!(form.get(ContactField::Email), "other@b.com");
        assert_eq!(form.get(ContactField::Name), "A");
        assert_eq!(form.get(ContactField::Subject), "S");
        assert_eq!(form.get(ContactField::Message), "M");
    }

    #[test]
    fn test_field_names_are_unique() {
        let mut names = ContactField::ALL.map(ContactField::name).to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
        assert_eq!(ContactField::Message.input_type(), None);
        assert_eq!(ContactField::Email.input_type(), Some("email"));
    }

    #[test]
    fn test_status_transitions() {
        let mut form = filled_form();
        assert_eq!(form.status(), SubmitStatus::Idle);
        let payload = form.begin_submit().expect("idle form should submit");
        assert_eq!(payload.name, "A");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);

        form.finish::<RelayError>(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Sent);
        // fields survive the submit
        assert_eq!(form.get(ContactField::Message), "M");

        form.begin_submit();
        form.finish(Err(RelayError::Server("boom".to_string())));
        assert_eq!(form.status(), SubmitStatus::Failed);
    }

    #[test]
    fn test_finish_without_submit_is_ignored() {
        let mut form = ContactForm::new();
        form.finish::<RelayError>(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_submit_sends_once_with_exact_payload() {
        let relay = RecordingRelay::default();
        let mut form = filled_form();
        let payload = form.begin_submit().unwrap();
        let res = deliver(&relay, payload).await;
        form.finish(res);

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            ContactPayload {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                subject: "S".to_string(),
                message: "M".to_string(),
            }
        );
        assert_eq!(form.status(), SubmitStatus::Sent);
    }

    #[tokio::test]
    async fn test_failure_is_not_retried() {
        let relay = RecordingRelay {
            fail: true,
            ..Default::default()
        };
        let mut form = filled_form();
        let payload = form.begin_submit().unwrap();
        let res = deliver(&relay, payload).await;
        assert!(matches!(res, Err(RelayError::Transport(_))));
        form.finish(res);

        assert_eq!(relay.sent.lock().unwrap().len(), 1);
        assert_eq!(form.status(), SubmitStatus::Failed);
    }
}
