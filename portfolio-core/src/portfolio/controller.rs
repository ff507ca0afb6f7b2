use tracing::{debug, error};

use crate::catalog::{Catalog, ProjectRecord};
use crate::error::PortfolioInitError;

use super::{Filter, RenderPass, ViewState, render};

/// Where render passes end up: the DOM in the browser, a recorder in tests.
pub trait RenderSurface {
    /// Replace every rendered item with the items of `pass`.
    fn replace_items(&mut self, pass: &RenderPass<'_>);

    fn set_load_more_visible(&mut self, visible: bool);

    /// Highlight the trigger belonging to `filter`.
    fn mark_active_filter(&mut self, filter: &Filter);
}

/// Owns the catalog and view state and re-renders on every change.
pub struct PortfolioController<S> {
    catalog: Catalog,
    state: ViewState,
    surface: S,
}

impl<S: RenderSurface> PortfolioController<S> {
    /// Create the controller and draw the first page of the unfiltered catalog.
    pub fn new(catalog: Catalog, surface: S) -> Self {
        let mut controller = Self {
            catalog,
            state: ViewState::new(),
            surface,
        };
        debug!(records = controller.catalog.len(), "portfolio initialised");
        controller.refresh();
        controller
    }

    pub fn set_filter(&mut self, tag: &str) {
        let filter = Filter::from_tag(tag);
        if !filter.is_known() {
            debug!(tag, "unknown portfolio filter, nothing will match");
        }
        self.surface.mark_active_filter(&filter);
        self.state.set_filter(filter);
        self.refresh();
    }

    /// Show one more page. Returns false, without re-rendering, when nothing is hidden.
    pub fn load_more(&mut self) -> bool {
        let matching_count = self.catalog.matching_count(self.state.active_filter());
        if !self.state.load_more(matching_count) {
            debug!(
                visible = self.state.visible_count(),
                matching_count, "load more ignored, everything is visible"
            );
            return false;
        }
        self.refresh();
        true
    }

    pub fn render(&self) -> Vec<&ProjectRecord> {
        render(
            &self.catalog,
            self.state.active_filter(),
            self.state.visible_count(),
        )
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn refresh(&mut self) {
        let pass = RenderPass::build(&self.catalog, &self.state);
        debug!(
            rendered = pass.items.len(),
            matching = pass.matching_count,
            filter = pass.filter.tag(),
            "rendering portfolio"
        );
        self.surface.replace_items(&pass);
        self.surface.set_load_more_visible(pass.load_more_visible);
    }
}

/// Portfolio that may have failed to find its elements.
///
/// An inert view swallows every operation so the rest of the page keeps working.
pub enum PortfolioView<S> {
    Active(PortfolioController<S>),
    Inert,
}

impl<S: RenderSurface> PortfolioView<S> {
    pub fn initialise(catalog: Catalog, surface: Result<S, PortfolioInitError>) -> Self {
        match surface {
            Ok(surface) => Self::Active(PortfolioController::new(catalog, surface)),
            Err(err) => {
                error!("portfolio disabled: {err}");
                Self::Inert
            }
        }
    }

    pub fn set_filter(&mut self, tag: &str) {
        if let Self::Active(controller) = self {
            controller.set_filter(tag);
        }
    }

    pub fn load_more(&mut self) -> bool {
        match self {
            Self::Active(controller) => controller.load_more(),
            Self::Inert => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn controller(&self) -> Option<&PortfolioController<S>> {
        match self {
            Self::Active(controller) => Some(controller),
            Self::Inert => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut PortfolioController<S>> {
        match self {
            Self::Active(controller) => Some(controller),
            Self::Inert => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectRecord;

    #[derive(Default)]
    struct CountingSurface {
        passes: usize,
        last_titles: Vec<String>,
        load_more: Option<bool>,
        active: Option<String>,
    }

    impl RenderSurface for CountingSurface {
        fn replace_items(&mut self, pass: &RenderPass<'_>) {
            self.passes += 1;
            self.last_titles = pass.items.iter().map(|r| r.title.clone()).collect();
        }

        fn set_load_more_visible(&mut self, visible: bool) {
            self.load_more = Some(visible);
        }

        fn mark_active_filter(&mut self, filter: &Filter) {
            self.active = Some(filter.tag().to_string());
        }
    }

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| ProjectRecord {
                    title: format!("P{i}"),
                    category: if i % 2 == 0 { "web" } else { "print" }.to_string(),
                    image: format!("{i}.webp"),
                })
                .collect(),
        )
    }

    #[test]
    fn renders_first_page_on_creation() {
        let controller = PortfolioController::new(catalog(20), CountingSurface::default());
        assert_eq!(controller.surface().passes, 1);
        assert_eq!(controller.surface().last_titles.len(), 12);
        assert_eq!(controller.surface().load_more, Some(true));
    }

    #[test]
    fn stray_load_more_does_not_rerender() {
        let mut controller = PortfolioController::new(catalog(4), CountingSurface::default());
        assert!(!controller.load_more());
        assert_eq!(controller.surface().passes, 1);
        assert_eq!(controller.state().visible_count(), 12);
    }

    #[test]
    fn unknown_filter_renders_nothing() {
        let mut controller = PortfolioController::new(catalog(20), CountingSurface::default());
        controller.set_filter("sculpture");
        assert!(controller.surface().last_titles.is_empty());
        assert_eq!(controller.surface().load_more, Some(false));
        assert_eq!(controller.surface().active.as_deref(), Some("sculpture"));
        assert!(!controller.load_more());
    }

    #[test]
    fn inert_view_ignores_operations() {
        let mut view: PortfolioView<CountingSurface> = PortfolioView::initialise(
            catalog(20),
            Err(PortfolioInitError::MissingElement("portfolioGrid".into())),
        );
        assert!(!view.is_active());
        view.set_filter("web");
        assert!(!view.load_more());
        assert!(view.controller().is_none());
    }
}
