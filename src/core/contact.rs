// Contact form submission outcomes. Users only ever see success or a generic
// error; the variants exist so the failure reason can be logged.

/// Marker left in the form action until the real endpoint id is filled in.
pub const ENDPOINT_PLACEHOLDER: &str = "XXXXXXXX";

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Formulaire non configuré (endpoint Formspree manquant). Écrivez-moi par email.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("form endpoint is not configured")]
    NotConfigured,
    #[error("endpoint rejected the submission (HTTP {0})")]
    Rejected(u16),
    #[error("network error: {0}")]
    Network(String),
}

/// Validates the form `action` before any request is made.
pub fn check_endpoint(action: Option<&str>) -> Result<&str, SubmitError> {
    match action.map(str::trim) {
        Some(a) if !a.is_empty() && !a.contains(ENDPOINT_PLACEHOLDER) => Ok(a),
        _ => Err(SubmitError::NotConfigured),
    }
}

pub fn classify_response(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

/// What the page shows once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormNotice {
    Success,
    /// Error box; `Some` replaces its text.
    Error(Option<&'static str>),
}

impl From<&Result<(), SubmitError>> for FormNotice {
    fn from(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => FormNotice::Success,
            Err(SubmitError::NotConfigured) => FormNotice::Error(Some(NOT_CONFIGURED_MESSAGE)),
            Err(_) => FormNotice::Error(None),
        }
    }
}
