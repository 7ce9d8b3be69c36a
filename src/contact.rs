//! Contact page: turns the message form into a copy-paste email draft.
//!
//! The server never sends mail. Visitors copy the draft or open it in their
//! mail client through a `mailto:` link.

use crate::i18n::Resolver;
use serde::Deserialize;

/// Topic choices, as localization keys, in display order
pub const TOPIC_KEYS: &[&str] = &[
    "contact_topic_general",
    "contact_topic_school",
    "contact_topic_workshop",
    "contact_topic_research",
    "contact_topic_issue",
    "contact_topic_other",
];

/// Raw form fields as posted by the contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub message: String,
    /// Present (usually "on") only when the acknowledgement box is ticked
    #[serde(default)]
    pub consent: Option<String>,
}

/// Result of submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The "not a diagnostic service" box was not ticked
    ConsentRequired,
    Draft(EmailDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ContactForm {
    pub fn has_consent(&self) -> bool {
        self.consent.as_deref().is_some_and(|value| !value.is_empty())
    }

    /// Build the email draft addressed to `to`.
    ///
    /// The topic is written in the visitor's language; the field labels in the
    /// body stay fixed so the team can scan drafts in either language.
    pub fn submit(&self, resolver: &Resolver<'_>, to: &str) -> ContactOutcome {
        if !self.has_consent() {
            return ContactOutcome::ConsentRequired;
        }

        let topic_key = TOPIC_KEYS
            .iter()
            .copied()
            .find(|key| *key == self.topic)
            .unwrap_or("contact_topic_other");
        let topic = resolver.t(topic_key);

        let body = format!(
            "Name: {}\nAffiliation: {}\nEmail: {}\nTopic: {}\n\nMessage:\n{}\n",
            self.name.trim(),
            self.affiliation.trim(),
            self.email.trim(),
            topic,
            self.message.trim()
        );

        ContactOutcome::Draft(EmailDraft {
            to: to.to_string(),
            subject: format!("[Toolkit Contact] {}", topic),
            body,
        })
    }
}

impl EmailDraft {
    /// Plain-text rendering for copy and paste.
    pub fn to_text(&self) -> String {
        format!("To: {}\nSubject: {}\n\n{}", self.to, self.subject, self.body)
    }

    /// `mailto:` link prefilled with subject and body.
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}
