// Contact form validation and template parameter assembly.

use wavefield_core::*;

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        interest: Some(Interest::WebDesign),
        message: "I would like a site with waves.".into(),
    }
}

#[test]
fn a_complete_form_validates() {
    assert!(valid_form().validate().is_ok());
}

#[test]
fn each_missing_field_reports_its_own_key() {
    let errors = ContactForm::default().validate().unwrap_err();
    assert_eq!(errors.name, Some("nameRequired"));
    assert_eq!(errors.email, Some("emailRequired"));
    assert_eq!(errors.interest, Some("interestRequired"));
    assert_eq!(errors.message, Some("messageRequired"));
    assert!(!errors.is_empty());
}

#[test]
fn whitespace_only_fields_count_as_missing() {
    let mut form = valid_form();
    form.name = "   ".into();
    form.message = "\n\t".into();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.name, Some("nameRequired"));
    assert_eq!(errors.message, Some("messageRequired"));
    assert_eq!(errors.email, None);
}

#[test]
fn malformed_emails_get_their_own_message() {
    let mut form = valid_form();
    let bad = [
        "plainaddress",
        "missing@tld",
        "@nolocal.com",
        "two@@at.com",
        "spaces in@mail.com",
        "trailing@dot.",
        "dot@.front",
    ];
    for email in bad {
        form.email = email.into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.email, Some("emailInvalid"), "accepted {email:?}");
    }
}

#[test]
fn reasonable_emails_pass() {
    let mut form = valid_form();
    for email in ["a@b.co", "first.last@sub.domain.org", "x+tag@y.io"] {
        form.email = email.into();
        assert!(form.validate().is_ok(), "rejected {email:?}");
    }
}

#[test]
fn validation_reports_every_problem_at_once() {
    let form = ContactForm {
        name: String::new(),
        email: "not-an-email".into(),
        interest: None,
        message: String::new(),
    };
    let errors = form.validate().unwrap_err();
    assert!(errors.name.is_some());
    assert_eq!(errors.email, Some("emailInvalid"));
    assert!(errors.interest.is_some());
    assert!(errors.message.is_some());
}

#[test]
fn interest_values_round_trip_through_the_select_control() {
    for interest in Interest::ALL {
        assert_eq!(Interest::parse(interest.value()), Some(interest));
    }
    assert_eq!(Interest::parse(""), None);
    assert_eq!(Interest::parse("unknown"), None);
}

#[test]
fn notification_params_carry_the_trimmed_fields() {
    let mut form = valid_form();
    form.name = "  Ada  ".into();
    let params = form.notification_params();
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    };
    assert_eq!(get("from_name"), Some("Ada"));
    assert_eq!(get("reply_to"), Some("ada@example.com"));
    assert_eq!(get("interest"), Some("web-design"));
    assert_eq!(get("message"), Some("I would like a site with waves."));
}

#[test]
fn auto_reply_goes_back_to_the_submitter() {
    let params = valid_form().auto_reply_params();
    assert!(params
        .iter()
        .any(|(k, v)| *k == "to_email" && v == "ada@example.com"));
    assert!(params
        .iter()
        .any(|(k, v)| *k == "to_name" && v == "Ada Lovelace"));
}

#[test]
fn status_banner_keys_exist_only_for_terminal_states() {
    assert_eq!(SubmitStatus::Sent.banner_key(), Some("messageSent"));
    assert_eq!(SubmitStatus::Failed.banner_key(), Some("messageFailed"));
    assert_eq!(SubmitStatus::Idle.banner_key(), None);
    assert_eq!(SubmitStatus::Sending.banner_key(), None);
}
