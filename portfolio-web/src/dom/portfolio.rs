//! Portfolio grid and partners strip rendered into the page.

use bevy::prelude::*;
use constants::portfolio::{
    ACTIVE_CLASS, FILTER_BUTTON_SELECTOR, ITEM_ENTER_CLASS, LOAD_MORE_BUTTON_ID,
    PARTNERS_GRID_ID, PORTFOLIO_GRID_ID, PORTFOLIO_ITEM_CLASS,
};
use portfolio_core::error::PortfolioInitError;
use portfolio_core::portfolio::markup;
use portfolio_core::{Capabilities, Catalog, Filter, RenderPass, RenderSurface};
use web_sys::{Document, Element};

use super::document::{add_class, query_all, query_within, set_class, set_display};
use super::events::{EventQueue, SiteEvent, queue_on};
use super::lazy::LazyImages;

/// The portfolio section of the page.
pub struct DomPortfolioSurface {
    grid: Element,
    load_more: Element,
    filter_buttons: Vec<Element>,
    images: LazyImages,
    animations: bool,
}

impl DomPortfolioSurface {
    /// Find the grid, the load-more trigger and the filter triggers, and hook
    /// their clicks up to the event queue.
    pub fn bind(
        document: &Document,
        capabilities: &Capabilities,
        queue: &EventQueue,
    ) -> Result<Self, PortfolioInitError> {
        let grid = document
            .get_element_by_id(PORTFOLIO_GRID_ID)
            .ok_or_else(|| PortfolioInitError::MissingElement(format!("#{PORTFOLIO_GRID_ID}")))?;
        let load_more = document
            .get_element_by_id(LOAD_MORE_BUTTON_ID)
            .ok_or_else(|| PortfolioInitError::MissingElement(format!("#{LOAD_MORE_BUTTON_ID}")))?;
        let filter_buttons = query_all(document, FILTER_BUTTON_SELECTOR);
        if filter_buttons.is_empty() {
            return Err(PortfolioInitError::MissingElement(
                FILTER_BUTTON_SELECTOR.to_string(),
            ));
        }

        for button in &filter_buttons {
            let tag = button.get_attribute("data-filter").unwrap_or_default();
            queue_on(button, "click", queue, move |_| {
                Some(SiteEvent::FilterSelected(tag.clone()))
            });
        }
        queue_on(&load_more, "click", queue, |_| Some(SiteEvent::LoadMore));

        Ok(Self {
            grid,
            load_more,
            filter_buttons,
            images: LazyImages::new(capabilities.intersection_observer),
            animations: capabilities.animations_enabled(),
        })
    }
}

impl RenderSurface for DomPortfolioSurface {
    fn replace_items(&mut self, pass: &RenderPass<'_>) {
        let keys = self.images.begin_pass(pass.image_locators());
        self.grid
            .set_inner_html(&markup::portfolio_items(&pass.items, &keys));

        if self.animations {
            for item in query_within(&self.grid, &format!(".{PORTFOLIO_ITEM_CLASS}")) {
                add_class(&item, ITEM_ENTER_CLASS);
            }
        }
        self.images.attach(&self.grid);
        debug!(
            "Rendered {} of {} '{}' items",
            pass.items.len(),
            pass.matching_count,
            pass.filter.tag()
        );
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        set_display(&self.load_more, visible);
    }

    fn mark_active_filter(&mut self, filter: &Filter) {
        for button in &self.filter_buttons {
            let is_active = button.get_attribute("data-filter").as_deref() == Some(filter.tag());
            set_class(button, ACTIVE_CLASS, is_active);
        }
    }
}

/// Render every partner record once. Returns the loader that keeps their
/// images observed, or `None` when the section is absent or empty.
pub fn render_partners(
    document: &Document,
    catalog: &Catalog,
    capabilities: &Capabilities,
) -> Option<LazyImages> {
    let Some(grid) = document.get_element_by_id(PARTNERS_GRID_ID) else {
        warn!("Partners grid #{PARTNERS_GRID_ID} not found, partners strip disabled");
        return None;
    };
    let partners = catalog.partners();
    if partners.is_empty() {
        warn!("No partner records in catalog, partners strip left empty");
        return None;
    }

    let mut images = LazyImages::new(capabilities.intersection_observer);
    let keys = images.begin_pass(partners.iter().map(|record| record.image.clone()).collect());
    grid.set_inner_html(&markup::partner_items(&partners, &keys));
    images.attach(&grid);
    info!("Partners strip rendered with {} logos", partners.len());
    Some(images)
}
