use portfolio_core::lazy::{LazyImageTracker, LazyKey};
use portfolio_core::portfolio::markup;
use portfolio_core::{Catalog, Filter, PortfolioController, ProjectRecord, RenderPass, RenderSurface};

/// Surface that keeps what a browser would show: the item markup, the lazy
/// keys of the current pass and the load-more state.
#[derive(Default)]
struct PageSurface {
    tracker: LazyImageTracker,
    html: String,
    keys: Vec<LazyKey>,
    visible_titles: Vec<String>,
    load_more_visible: bool,
    active: Option<String>,
}

impl RenderSurface for PageSurface {
    fn replace_items(&mut self, pass: &RenderPass<'_>) {
        self.keys = self.tracker.begin_pass(pass.image_locators());
        self.html = markup::portfolio_items(&pass.items, &self.keys);
        self.visible_titles = pass.items.iter().map(|r| r.title.clone()).collect();
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
    }

    fn mark_active_filter(&mut self, filter: &Filter) {
        self.active = Some(filter.tag().to_string());
    }
}

fn catalog() -> Catalog {
    let categories = ["branding", "web", "print"];
    Catalog::new(
        (0..30)
            .map(|i| ProjectRecord {
                title: format!("Project {i}"),
                category: categories[i % 3].to_string(),
                image: format!("images/{i}.webp"),
            })
            .collect(),
    )
}

#[test]
fn filter_and_pagination_walkthrough() {
    let mut portfolio = PortfolioController::new(catalog(), PageSurface::default());
    assert_eq!(portfolio.surface().visible_titles.len(), 12);

    portfolio.set_filter("branding");
    let surface = portfolio.surface();
    assert_eq!(surface.visible_titles.len(), 10);
    assert!(!surface.load_more_visible);
    assert_eq!(surface.active.as_deref(), Some("branding"));
    assert_eq!(surface.visible_titles[1], "Project 3");

    portfolio.set_filter("all");
    assert_eq!(portfolio.surface().visible_titles.len(), 12);
    assert!(portfolio.surface().load_more_visible);

    assert!(portfolio.load_more());
    assert_eq!(portfolio.surface().visible_titles.len(), 24);
    assert!(portfolio.surface().load_more_visible);

    assert!(portfolio.load_more());
    assert_eq!(portfolio.surface().visible_titles.len(), 30);
    assert!(!portfolio.surface().load_more_visible);

    assert!(!portfolio.load_more());
    assert_eq!(portfolio.surface().visible_titles.len(), 30);
    assert_eq!(portfolio.state().visible_count(), 36);
}

#[test]
fn images_resolve_once_and_not_across_passes() {
    let mut portfolio = PortfolioController::new(catalog(), PageSurface::default());
    let first_key = portfolio.surface().keys[0];
    assert!(portfolio.surface().html.contains(&format!(r#"data-lazy-key="{first_key}""#)));

    let surface = portfolio.surface_mut();
    let resolved = surface
        .tracker
        .resolve_batch([(first_key, true), (first_key, true)]);
    assert_eq!(resolved, vec![(first_key, "images/0.webp".to_string())]);
    assert_eq!(surface.tracker.resolve_attr(&first_key.to_string()), None);

    let stale = portfolio.surface().keys[1];
    portfolio.set_filter("web");
    let surface = portfolio.surface_mut();
    assert_eq!(surface.tracker.resolve(stale), None);
    assert_eq!(surface.tracker.pending_count(), 10);
    let fresh = surface.keys[0];
    assert_eq!(surface.tracker.resolve(fresh).as_deref(), Some("images/1.webp"));
}
