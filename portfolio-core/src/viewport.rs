/// Vertical extent of an element relative to the viewport top, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Whether any part of the element is inside the viewport.
pub fn intersects_viewport(bounds: ElementBounds, viewport_height: f64) -> bool {
    bounds.top < viewport_height && bounds.bottom > 0.0
}

/// Root margin string for an intersection observer.
pub fn root_margin(px: u32) -> String {
    format!("{px}px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_straddling_the_fold_is_visible() {
        let bounds = ElementBounds {
            top: 700.0,
            bottom: 900.0,
        };
        assert!(intersects_viewport(bounds, 800.0));
    }

    #[test]
    fn element_scrolled_past_is_hidden() {
        let bounds = ElementBounds {
            top: -400.0,
            bottom: 0.0,
        };
        assert!(!intersects_viewport(bounds, 800.0));
        let below = ElementBounds {
            top: 800.0,
            bottom: 1200.0,
        };
        assert!(!intersects_viewport(below, 800.0));
    }

    #[test]
    fn margin_is_formatted_in_pixels() {
        assert_eq!(root_margin(50), "50px");
    }
}
