//! Registration form: field model, relay payload and the scripted
//! confirmation sequence shown after a successful submission.

use crate::error::{Result, SiteError};
use crate::pricing::find_plan;
use serde::Serialize;
use smallvec::SmallVec;
use std::time::Duration;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const MESSAGE_A: &str = "¡Gracias por registrarte! Recibimos tu solicitud.";
pub const MESSAGE_B: &str = "Un asesor se comunicará con vos a la brevedad.";
pub const SUBMIT_ERROR_MESSAGE: &str =
    "No pudimos enviar tu solicitud. Por favor, intentá nuevamente más tarde.";

pub const MESSAGE_A_DURATION: Duration = Duration::from_secs(5);
pub const MESSAGE_B_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Plan,
    Source,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Plan,
        Field::Source,
    ];

    /// Form control id and relay template parameter name.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Plan => "plan",
            Field::Source => "source",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, Field::Source)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub plan: String,
    pub source: String,
}

impl RegistrationForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Plan => &self.plan,
            Field::Source => &self.source,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Plan => self.plan = value,
            Field::Source => self.source = value,
        }
    }

    /// Required fields that are empty or whitespace, in form order.
    pub fn missing_fields(&self) -> SmallVec<[Field; 5]> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| f.required() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Required-field check; reports the first missing field.
    pub fn validate(&self) -> Result<()> {
        match self.missing_fields().first() {
            Some(field) => Err(SiteError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Preselect the plan named by a `?plan=` hint. Unknown ids leave the
    /// current selection untouched and return `false`.
    pub fn preselect_plan(&mut self, hint: Option<&str>) -> bool {
        match hint.map(find_plan) {
            Some(Ok(plan)) => {
                self.plan = plan.id.to_string();
                true
            }
            Some(Err(e)) => {
                log::warn!("[register] ignoring plan preselection: {}", e);
                false
            }
            None => false,
        }
    }
}

/// Identifiers for the transactional email relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl RelayConfig {
    /// Build from optional identifiers; every identifier is mandatory, the
    /// endpoint falls back to [`DEFAULT_RELAY_ENDPOINT`].
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<Self> {
        fn required(value: Option<&str>, name: &'static str) -> Result<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(SiteError::RelayNotConfigured(name))
        }
        Ok(Self {
            service_id: required(service_id, "service id")?,
            template_id: required(template_id, "template id")?,
            public_key: required(public_key, "public key")?,
            endpoint: endpoint
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_RELAY_ENDPOINT)
                .to_string(),
        })
    }

    /// Validate `form` and wrap it in the relay's request body.
    pub fn send_request<'a>(&'a self, form: &'a RegistrationForm) -> Result<SendRequest<'a>> {
        form.validate()?;
        Ok(SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: form,
        })
    }
}

/// JSON body accepted by the relay's `email/send` endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a RegistrationForm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmationPhase {
    MessageA,
    MessageB,
    NavigateHome,
}

impl ConfirmationPhase {
    /// Offset from the start of the sequence at which this phase begins.
    pub fn starts_at(&self) -> Duration {
        match self {
            Self::MessageA => Duration::ZERO,
            Self::MessageB => MESSAGE_A_DURATION,
            Self::NavigateHome => MESSAGE_A_DURATION + MESSAGE_B_DURATION,
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            Self::MessageA => Some(Self::MessageB),
            Self::MessageB => Some(Self::NavigateHome),
            Self::NavigateHome => None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::MessageA => Some(MESSAGE_A),
            Self::MessageB => Some(MESSAGE_B),
            Self::NavigateHome => None,
        }
    }
}

/// Fixed-duration display script: message A for 5 s, message B for 4 s,
/// then navigation home. Driven by elapsed time only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmationSequence {
    phase: ConfirmationPhase,
}

impl ConfirmationSequence {
    /// Starts in [`ConfirmationPhase::MessageA`].
    pub fn start() -> Self {
        Self {
            phase: ConfirmationPhase::MessageA,
        }
    }

    pub fn phase(&self) -> ConfirmationPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == ConfirmationPhase::NavigateHome
    }

    /// Move to the phase matching `elapsed` since start. Returns every phase
    /// entered, in order, so a late timer never skips one.
    pub fn advance_to(&mut self, elapsed: Duration) -> SmallVec<[ConfirmationPhase; 2]> {
        let mut entered = SmallVec::new();
        while let Some(next) = self.phase.next() {
            if elapsed < next.starts_at() {
                break;
            }
            self.phase = next;
            entered.push(next);
        }
        entered
    }

    /// Time from start until the next phase begins, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.phase.next().map(|p| p.starts_at())
    }
}

/// Submission lifecycle of the registration page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Editing,
    Submitting,
    Confirming(ConfirmationSequence),
}

impl SubmissionState {
    /// Enter `Submitting`; rejected while a request or confirmation is running.
    pub fn begin(&mut self) -> Result<()> {
        match self {
            Self::Editing => {
                *self = Self::Submitting;
                Ok(())
            }
            _ => Err(SiteError::SubmissionInProgress),
        }
    }

    /// The relay accepted the request; the confirmation script starts.
    pub fn succeed(&mut self) -> ConfirmationSequence {
        let seq = ConfirmationSequence::start();
        *self = Self::Confirming(seq);
        seq
    }

    /// The relay call failed; the form stays editable for a retry.
    pub fn fail(&mut self) {
        *self = Self::Editing;
    }
}
