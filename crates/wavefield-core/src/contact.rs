/// Service the visitor is asking about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interest {
    Photography,
    WebDesign,
    AppDevelopment,
    SocialMedia,
    Branding,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::Photography,
        Interest::WebDesign,
        Interest::AppDevelopment,
        Interest::SocialMedia,
        Interest::Branding,
        Interest::Other,
    ];

    /// Option value as submitted by the select control.
    pub fn value(self) -> &'static str {
        match self {
            Interest::Photography => "photography",
            Interest::WebDesign => "web-design",
            Interest::AppDevelopment => "app-development",
            Interest::SocialMedia => "social-media",
            Interest::Branding => "branding",
            Interest::Other => "other",
        }
    }

    /// Translation key for the option label.
    pub fn label_key(self) -> &'static str {
        match self {
            Interest::Photography => "optionPhotography",
            Interest::WebDesign => "optionWebDesign",
            Interest::AppDevelopment => "optionAppDevelopment",
            Interest::SocialMedia => "optionSocialMedia",
            Interest::Branding => "optionBranding",
            Interest::Other => "optionOther",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Interest::ALL.into_iter().find(|i| i.value() == value)
    }
}

/// Raw form content as read from the inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub interest: Option<Interest>,
    pub message: String,
}

/// Per-field validation messages, as translation keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub interest: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.interest.is_none()
            && self.message.is_none()
    }
}

impl ContactForm {
    /// Validate every field at once so the UI can show all problems in a
    /// single pass. `Ok` means the form may be submitted.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("nameRequired");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("emailRequired");
        } else if !is_valid_email(email) {
            errors.email = Some("emailInvalid");
        }
        if self.interest.is_none() {
            errors.interest = Some("interestRequired");
        }
        if self.message.trim().is_empty() {
            errors.message = Some("messageRequired");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Parameters for the notification template (to the studio inbox).
    pub fn notification_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("from_name", self.name.trim().to_owned()),
            ("reply_to", self.email.trim().to_owned()),
            (
                "interest",
                self.interest.map(|i| i.value()).unwrap_or("").to_owned(),
            ),
            ("message", self.message.trim().to_owned()),
        ]
    }

    /// Parameters for the auto-reply template (back to the visitor).
    pub fn auto_reply_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("to_name", self.name.trim().to_owned()),
            ("to_email", self.email.trim().to_owned()),
        ]
    }
}

/// Lightweight well-formedness check: a single `@`, a non-empty local part,
/// a dotted domain with no empty labels, no whitespace anywhere. Anything
/// stricter belongs to the mail service.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Submission lifecycle surfaced by the form UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// Banner translation key, present only for terminal states.
    pub fn banner_key(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Sent => Some("messageSent"),
            SubmitStatus::Failed => Some("messageFailed"),
            SubmitStatus::Idle | SubmitStatus::Sending => None,
        }
    }
}
