use portfolio_core::chrome::{
    active_section, is_scrolled, nav_href, request_cv_download, request_tech_highlight,
    ContactForm, CounterAnimation, MemoryNotifier, NavBar, Notification, NotificationKind,
    Notifier, RoleRotation, Section, SkillBar, CONTACT_SUCCESS_MESSAGE, CV_DOWNLOAD_MESSAGE,
    SKILL_REVEAL_DELAY,
};
use std::time::Duration;
use portfolio_core::config::PortfolioConfig;

fn page_sections() -> Vec<Section> {
    vec![
        Section::new("home", 0),
        Section::new("about", 800),
        Section::new("projects", 1600),
        Section::new("contact", 2600),
    ]
}

#[test]
fn nav_scrolled_threshold_is_exclusive() {
    assert!(!is_scrolled(0, 100));
    assert!(!is_scrolled(100, 100));
    assert!(is_scrolled(101, 100));
}

#[test]
fn active_section_picks_last_section_scrolled_past() {
    let sections = page_sections();

    assert_eq!(active_section(&sections, 0, 100), Some("home"));
    assert_eq!(active_section(&sections, 699, 100), Some("home"));
    assert_eq!(active_section(&sections, 700, 100), Some("about"));
    assert_eq!(active_section(&sections, 1550, 100), Some("projects"));
    assert_eq!(active_section(&sections, 10_000, 100), Some("contact"));
}

#[test]
fn active_section_none_before_first_section() {
    let sections = vec![Section::new("intro", 500)];
    assert_eq!(active_section(&sections, 100, 100), None);
    assert_eq!(active_section(&[], 100, 100), None);
}

#[test]
fn nav_href_prefixes_hash() {
    assert_eq!(nav_href("projects"), "#projects");
}

#[test]
fn counter_reaches_target_in_steps() {
    let values: Vec<u32> = CounterAnimation::new(100, 50).collect();
    assert_eq!(values.len(), 50);
    assert_eq!(values[0], 2);
    assert_eq!(*values.last().unwrap(), 100);
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn counter_floors_fractional_values() {
    let values: Vec<u32> = CounterAnimation::new(15, 50).collect();
    assert_eq!(values[0], 0);
    assert_eq!(*values.last().unwrap(), 15);
    assert!(values.iter().all(|v| *v <= 15));
}

#[test]
fn counter_zero_target_yields_single_zero() {
    let values: Vec<u32> = CounterAnimation::new(0, 50).collect();
    assert_eq!(values, vec![0]);
}

#[test]
fn counter_zero_steps_jumps_to_target() {
    let values: Vec<u32> = CounterAnimation::new(7, 0).collect();
    assert_eq!(values, vec![7]);
}

#[test]
fn role_rotation_wraps() {
    let mut rotation = RoleRotation::new(["ai", "robotics", "vision", "electronics"]);
    assert_eq!(rotation.current(), Some("ai"));
    assert_eq!(rotation.advance(), Some("robotics"));
    rotation.advance();
    rotation.advance();
    assert_eq!(rotation.advance(), Some("ai"));
}

#[test]
fn empty_role_rotation_never_advances() {
    let mut rotation = RoleRotation::new(Vec::<String>::new());
    assert_eq!(rotation.current(), None);
    assert_eq!(rotation.advance(), None);
}

#[test]
fn notification_icons() {
    assert_eq!(NotificationKind::Success.icon(), "check-circle");
    assert_eq!(NotificationKind::Error.icon(), "exclamation-triangle");
    assert_eq!(NotificationKind::Info.icon(), "info-circle");
    assert_eq!(NotificationKind::parse("warning"), NotificationKind::Info);
}

#[test]
fn new_notification_replaces_current() {
    let mut notifier = MemoryNotifier::new();
    notifier.notify(Notification::new(NotificationKind::Info, "first"));
    notifier.notify(Notification::new(NotificationKind::Error, "second"));

    let current = notifier.current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.icon(), "exclamation-triangle");
    assert_eq!(notifier.shown(), 2);

    assert!(notifier.dismiss().is_some());
    assert!(notifier.current().is_none());
}

#[test]
fn contact_submit_notifies_and_resets() {
    let mut notifier = MemoryNotifier::new();
    let mut form = ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Collaboration".into(),
        message: "Hello".into(),
    };

    form.submit(&mut notifier);

    assert!(form.is_empty());
    let current = notifier.current().unwrap();
    assert_eq!(current.kind, NotificationKind::Success);
    assert_eq!(current.message, CONTACT_SUCCESS_MESSAGE);
}

#[test]
fn cv_download_is_informational() {
    let mut notifier = MemoryNotifier::new();
    request_cv_download(&mut notifier);

    let current = notifier.current().unwrap();
    assert_eq!(current.kind, NotificationKind::Info);
    assert_eq!(current.message, CV_DOWNLOAD_MESSAGE);
}

#[test]
fn nav_bar_uses_configured_thresholds() {
    let mut config = PortfolioConfig::v0();
    config.nav_scroll_threshold = 40;
    config.section_offset = 0;
    let nav = NavBar::new(&config);
    let sections = page_sections();

    assert!(nav.is_scrolled(41));
    assert_eq!(nav.active_section(&sections, 799), Some("home"));
    assert_eq!(nav.active_section(&sections, 800), Some("about"));
}

#[test]
fn counter_uses_configured_steps() {
    let mut config = PortfolioConfig::v0();
    config.counter_steps = 4;

    let values: Vec<u32> = CounterAnimation::with_config(20, &config).collect();
    assert_eq!(values, vec![5, 10, 15, 20]);
}

#[test]
fn counter_tick_follows_config() {
    let mut config = PortfolioConfig::v0();
    config.counter_tick_ms = 25;

    assert_eq!(CounterAnimation::with_config(10, &config).tick(), Duration::from_millis(25));
    assert_eq!(CounterAnimation::new(10, 50).tick(), Duration::from_millis(40));
}

#[test]
fn skill_bar_fills_to_level_after_reveal() {
    let mut bar = SkillBar::new("Python", 90);
    assert_eq!(bar.width(), "0%");
    assert!(!bar.is_revealed());

    assert_eq!(bar.reveal(), SKILL_REVEAL_DELAY);
    assert_eq!(SKILL_REVEAL_DELAY, Duration::from_millis(500));
    assert_eq!(bar.width(), "90%");
}

#[test]
fn skill_bar_level_is_clamped() {
    assert_eq!(SkillBar::new("over", 140).level(), 100);
    assert_eq!(SkillBar::new("under", -5).level(), 0);
}

#[test]
fn skill_bar_from_data_level() {
    let bar = SkillBar::from_data_level("Rust", " 75 ").unwrap();
    assert_eq!(bar.level(), 75);
    assert!(SkillBar::from_data_level("Rust", "high").is_none());
}

#[test]
fn tech_highlight_is_informational() {
    let mut notifier = MemoryNotifier::new();
    request_tech_highlight("ROS", &mut notifier);

    let current = notifier.current().unwrap();
    assert_eq!(current.kind, NotificationKind::Info);
    assert_eq!(current.message, "ROS - One of my core technologies!");
}
