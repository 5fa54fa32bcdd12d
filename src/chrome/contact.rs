use log::info;
use serde::{Deserialize, Serialize};

use super::notification::{Notification, NotificationKind, Notifier};

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const CV_DOWNLOAD_MESSAGE: &str = "CV download would start here";
const TECH_HIGHLIGHT_SUFFIX: &str = " - One of my core technologies!";

/// Contents of the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    /// Simulated submission: nothing leaves the process. Always reports
    /// success and resets the form.
    pub fn submit<N: Notifier>(&mut self, notifier: &mut N) {
        info!(
            "event=contact_submit status=simulated message_len={}",
            self.message.len()
        );
        notifier.notify(Notification::new(
            NotificationKind::Success,
            CONTACT_SUCCESS_MESSAGE,
        ));
        *self = ContactForm::default();
    }
}

pub fn request_cv_download<N: Notifier>(notifier: &mut N) {
    notifier.notify(Notification::new(NotificationKind::Info, CV_DOWNLOAD_MESSAGE));
}

/// Clicked technology in the hero orbit.
pub fn request_tech_highlight<N: Notifier>(tech: &str, notifier: &mut N) {
    notifier.notify(Notification::new(
        NotificationKind::Info,
        format!("{tech}{TECH_HIGHLIGHT_SUFFIX}"),
    ));
}
