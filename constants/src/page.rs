pub const NAV_ID: &str = "nav";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav__link";

/// Scroll offset past which the navigation switches to its compact style.
pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;
/// Scroll offset past which scrolling down hides the navigation.
pub const NAV_HIDE_THRESHOLD: f64 = 500.0;
/// Height of the fixed navigation, subtracted from anchor scroll targets.
pub const NAV_OFFSET: f64 = 80.0;

pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

pub const STATS_SELECTOR: &str = ".stats";
pub const STATS_NUMBER_SELECTOR: &str = ".stats__number";
pub const STATS_BAR_SELECTOR: &str = ".stats__bar-fill";
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.3;
pub const COUNTER_STEPS: u32 = 60;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const STATS_BAR_DELAY_MS: i32 = 300;

pub const REVEAL_SELECTOR: &str = ".fade-in";
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const VISIBLE_CLASS: &str = "visible";

pub const HERO_VIDEO_SELECTOR: &str = ".hero__video";
pub const HERO_VIDEO_CONTAINER_SELECTOR: &str = ".hero__video-container";
pub const HERO_VIDEO_FALLBACK_MS: i32 = 1000;

/// Devices reporting fewer logical cores get reduced motion.
pub const REDUCED_MOTION_CORE_LIMIT: u32 = 4;
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";

pub const SOCIAL_LINK_SELECTOR: &str = ".footer__column a";
pub const CONTACT_METHOD_SELECTOR: &str = ".contact__method";
pub const CTA_SELECTOR: &str = ".btn--primary";

/// Scroll depth percentages reported once per session.
pub const SCROLL_DEPTH_MARKS: [u8; 4] = [25, 50, 75, 100];
