// Element ids and service endpoints for the site shell. The ids have to
// match index.html.

// Background mount
pub const BACKGROUND_CONTAINER_ID: &str = "wave-background";

// Header controls
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const LANGUAGE_TOGGLE_ID: &str = "language-toggle";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const NAME_INPUT_ID: &str = "contact-name";
pub const EMAIL_INPUT_ID: &str = "contact-email";
pub const INTEREST_SELECT_ID: &str = "contact-interest";
pub const MESSAGE_INPUT_ID: &str = "contact-message";
pub const SUBMIT_BUTTON_ID: &str = "contact-submit";
pub const STATUS_BANNER_ID: &str = "contact-status";

// Transactional email dispatch. The key is the service's publishable
// browser key, so these live here rather than in configuration.
pub const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const EMAIL_SERVICE_ID: &str = "service_m4k2v9h";
pub const EMAIL_NOTIFY_TEMPLATE_ID: &str = "template_q81djwo";
pub const EMAIL_REPLY_TEMPLATE_ID: &str = "template_37zxcfr";
pub const EMAIL_PUBLIC_KEY: &str = "Hk3fLZ9yQwTND8cpM";
