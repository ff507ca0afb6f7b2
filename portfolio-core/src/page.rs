//! Scroll-driven page chrome: navigation, back-to-top and the stats counter.

use constants::page::{
    BACK_TO_TOP_THRESHOLD, COUNTER_DURATION_MS, COUNTER_STEPS, NAV_HIDE_THRESHOLD, NAV_OFFSET,
    NAV_SCROLLED_THRESHOLD,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavAppearance {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Tracks the previous scroll offset to tell scroll direction.
#[derive(Debug, Default)]
pub struct NavScrollState {
    last_scroll: f64,
}

impl NavScrollState {
    pub fn update(&mut self, current: f64) -> NavAppearance {
        let scrolled = current > NAV_SCROLLED_THRESHOLD;
        let hidden = scrolled && current > self.last_scroll && current > NAV_HIDE_THRESHOLD;
        self.last_scroll = current;
        NavAppearance { scrolled, hidden }
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Scroll target for an in-page anchor, clearing the fixed navigation.
pub fn anchor_scroll_target(element_offset_top: f64) -> f64 {
    element_offset_top - NAV_OFFSET
}

/// Text frames of a counter counting up to `target`.
///
/// Intermediate frames show the floored value; the last frame is `"{target}+"`.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u32,
    step: u32,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            step: 0,
            done: false,
        }
    }

    /// Parse a `data-target` attribute. Unparseable targets count to zero.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        Self::new(raw.and_then(|raw| raw.trim().parse().ok()).unwrap_or(0))
    }

    pub fn step_interval_ms() -> u32 {
        COUNTER_DURATION_MS / COUNTER_STEPS
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.step += 1;
        let target = f64::from(self.target);
        let current = target * f64::from(self.step) / f64::from(COUNTER_STEPS);
        if current >= target {
            self.done = true;
            Some(format!("{}+", self.target))
        } else {
            Some((current.floor() as u64).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_hides_only_when_scrolling_down_far() {
        let mut nav = NavScrollState::default();
        assert_eq!(nav.update(50.0), NavAppearance::default());
        assert_eq!(
            nav.update(300.0),
            NavAppearance {
                scrolled: true,
                hidden: false
            }
        );
        assert!(nav.update(700.0).hidden);
        let up = nav.update(650.0);
        assert!(up.scrolled && !up.hidden);
        assert_eq!(nav.update(80.0), NavAppearance::default());
    }

    #[test]
    fn back_to_top_threshold() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
        assert_eq!(anchor_scroll_target(1000.0), 920.0);
    }

    #[test]
    fn counter_counts_in_sixty_steps() {
        let frames: Vec<String> = CounterAnimation::new(120).collect();
        assert_eq!(frames.len(), 60);
        assert_eq!(frames[0], "2");
        assert_eq!(frames[29], "60");
        assert_eq!(frames.last().unwrap(), "120+");
        assert_eq!(CounterAnimation::step_interval_ms(), 33);
    }

    #[test]
    fn small_and_missing_targets() {
        let frames: Vec<String> = CounterAnimation::new(5).collect();
        assert_eq!(frames[0], "0");
        assert_eq!(frames.last().unwrap(), "5+");
        assert_eq!(
            CounterAnimation::from_attribute(None).collect::<Vec<_>>(),
            vec!["0+"]
        );
        assert_eq!(
            CounterAnimation::from_attribute(Some(" 7 ")).last().unwrap(),
            "7+"
        );
    }
}
