//! Page chrome around the project grid.
//!
//! Pure state logic for the nav bar, stat counters, skill bars, hero role
//! rotation, notifications and the contact form. Event wiring and rendering
//! stay with the host page.

pub mod contact;
pub mod counter;
pub mod nav;
pub mod notification;
pub mod rotation;
pub mod skills;

pub use contact::{
    request_cv_download, request_tech_highlight, ContactForm, CONTACT_SUCCESS_MESSAGE,
    CV_DOWNLOAD_MESSAGE,
};
pub use counter::CounterAnimation;
pub use nav::{active_section, is_scrolled, nav_href, NavBar, Section};
pub use notification::{MemoryNotifier, Notification, NotificationKind, Notifier};
pub use rotation::RoleRotation;
pub use skills::{SkillBar, SKILL_REVEAL_DELAY};
