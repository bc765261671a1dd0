use crate::prefs::PreferenceValue;

/// UI language. French is the shipped default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    En,
    #[default]
    Fr,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }

    /// Tag for the document `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

impl PreferenceValue for Language {
    const KEY: &'static str = "language";

    fn fallback() -> Self {
        Language::Fr
    }

    fn as_str(self) -> &'static str {
        self.tag()
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

/// Translate a copy key. Unknown keys come back unchanged, so a missing
/// entry shows up on screen instead of rendering blank.
pub fn t(lang: Language, key: &str) -> &str {
    match entry(key) {
        Some((en, fr)) => match lang {
            Language::En => en,
            Language::Fr => fr,
        },
        None => key,
    }
}

fn entry(key: &str) -> Option<(&'static str, &'static str)> {
    let pair = match key {
        "heroTitle" => ("Waves that listen", "Des vagues qui écoutent"),
        "heroSubtitle" => (
            "A live wave-field background for sites that move.",
            "Un fond d'ondes animé pour des sites qui bougent.",
        ),
        "contactTitle" => ("Let's talk", "Discutons"),
        "nameLabel" => ("Name", "Nom"),
        "emailLabel" => ("Email", "E-mail"),
        "interestLabel" => ("I'm interested in", "Je suis intéressé par"),
        "interestPlaceholder" => ("Choose a service", "Choisissez un service"),
        "messageLabel" => ("Message", "Message"),
        "sendButton" => ("Send", "Envoyer"),
        "sendingButton" => ("Sending…", "Envoi…"),
        "messageSent" => ("Message sent, thank you!", "Message envoyé, merci !"),
        "messageFailed" => (
            "Something went wrong, please try again.",
            "Une erreur est survenue, veuillez réessayer.",
        ),
        "nameRequired" => ("Please enter your name.", "Veuillez saisir votre nom."),
        "emailRequired" => ("Please enter your email.", "Veuillez saisir votre e-mail."),
        "emailInvalid" => (
            "Please enter a valid email.",
            "Veuillez saisir un e-mail valide.",
        ),
        "interestRequired" => ("Please choose a service.", "Veuillez choisir un service."),
        "messageRequired" => ("Please write a message.", "Veuillez écrire un message."),
        "optionPhotography" => ("Photography", "Photographie"),
        "optionWebDesign" => ("Web design", "Création de sites web"),
        "optionAppDevelopment" => ("App development", "Développement d'applications"),
        "optionSocialMedia" => ("Social media", "Réseaux sociaux"),
        "optionBranding" => ("Branding", "Image de marque"),
        "optionOther" => ("Other", "Autre"),
        "themeToggle" => ("Toggle theme", "Changer de thème"),
        // The toggle is labelled with the language it switches to.
        "languageToggle" => ("Français", "English"),
        _ => return None,
    };
    Some(pair)
}
