use constants::portfolio::PAGE_SIZE;

use crate::catalog::{Catalog, ProjectRecord};

use super::Filter;

/// Mutable view selection owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_filter: Filter,
    visible_count: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_filter: Filter::All,
            visible_count: PAGE_SIZE,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_filter(&self) -> &Filter {
        &self.active_filter
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Switch filter and go back to the first page.
    pub fn set_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
        self.visible_count = PAGE_SIZE;
    }

    /// Grow by one page if records remain hidden. Returns whether anything changed.
    pub fn load_more(&mut self, matching_count: usize) -> bool {
        if self.visible_count >= matching_count {
            return false;
        }
        self.visible_count += PAGE_SIZE;
        true
    }
}

/// Visible subset for the given state: a stable, truncated filter of the catalog.
pub fn render<'a>(
    catalog: &'a Catalog,
    filter: &Filter,
    visible_count: usize,
) -> Vec<&'a ProjectRecord> {
    catalog.matching(filter).take(visible_count).collect()
}

pub fn load_more_visible(visible_count: usize, matching_count: usize) -> bool {
    visible_count < matching_count
}

/// Everything a surface needs to draw one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPass<'a> {
    pub filter: &'a Filter,
    pub items: Vec<&'a ProjectRecord>,
    pub matching_count: usize,
    pub visible_count: usize,
    pub load_more_visible: bool,
}

impl<'a> RenderPass<'a> {
    pub fn build(catalog: &'a Catalog, state: &'a ViewState) -> Self {
        let filter = state.active_filter();
        let matching_count = catalog.matching_count(filter);
        let visible_count = state.visible_count();
        Self {
            filter,
            items: render(catalog, filter, visible_count),
            matching_count,
            visible_count,
            load_more_visible: load_more_visible(visible_count, matching_count),
        }
    }

    /// Image locators in render order, handed to the lazy loader.
    pub fn image_locators(&self) -> Vec<String> {
        self.items.iter().map(|record| record.image.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(categories: &[&str]) -> Catalog {
        Catalog::new(
            categories
                .iter()
                .enumerate()
                .map(|(i, category)| ProjectRecord {
                    title: format!("Project {i}"),
                    category: category.to_string(),
                    image: format!("img/{i}.webp"),
                })
                .collect(),
        )
    }

    #[test]
    fn render_length_is_capped_by_count_and_matches() {
        let catalog = catalog(&["web"; 20]);
        for n in [0, 5, 12, 20, 36] {
            let items = render(&catalog, &Filter::All, n);
            assert_eq!(items.len(), n.min(20));
            let web = Filter::from_tag("web");
            assert_eq!(render(&catalog, &web, n).len(), n.min(20));
            let print = Filter::from_tag("print");
            assert!(render(&catalog, &print, n).is_empty());
        }
    }

    #[test]
    fn render_keeps_catalog_order() {
        let catalog = catalog(&["web", "print", "web", "branding", "web"]);
        let filter = Filter::from_tag("web");
        let titles: Vec<&str> = render(&catalog, &filter, 12)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, ["Project 0", "Project 2", "Project 4"]);
    }

    #[test]
    fn render_is_idempotent() {
        let catalog = catalog(&["web", "print", "web"]);
        let state = ViewState::new();
        assert_eq!(
            RenderPass::build(&catalog, &state),
            RenderPass::build(&catalog, &state)
        );
    }

    #[test]
    fn set_filter_resets_to_first_page() {
        let mut state = ViewState::new();
        assert!(state.load_more(100));
        assert!(state.load_more(100));
        assert_eq!(state.visible_count(), 3 * PAGE_SIZE);
        state.set_filter(Filter::from_tag("web"));
        assert_eq!(state.visible_count(), PAGE_SIZE);
        state.set_filter(Filter::All);
        assert_eq!(state.visible_count(), PAGE_SIZE);
    }

    #[test]
    fn load_more_stops_once_everything_is_visible() {
        let mut state = ViewState::new();
        assert!(state.load_more(30));
        assert!(state.load_more(30));
        assert_eq!(state.visible_count(), 36);
        assert!(!state.load_more(30));
        assert_eq!(state.visible_count(), 36);
        assert_eq!(state.visible_count() % PAGE_SIZE, 0);
    }

    #[test]
    fn affordance_tracks_hidden_records() {
        assert!(load_more_visible(12, 30));
        assert!(!load_more_visible(36, 30));
        assert!(!load_more_visible(12, 12));
        assert!(!load_more_visible(12, 0));
    }
}
