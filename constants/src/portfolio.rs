/// Number of records shown after a filter change, and the increment per "load more".
pub const PAGE_SIZE: usize = 12;

/// Sentinel filter tag matching every record.
pub const FILTER_ALL: &str = "all";

/// Distance in pixels before the viewport at which deferred images are fetched.
pub const LAZY_ROOT_MARGIN_PX: u32 = 50;

pub const PORTFOLIO_GRID_ID: &str = "portfolioGrid";
pub const LOAD_MORE_BUTTON_ID: &str = "loadMoreBtn";
pub const FILTER_BUTTON_SELECTOR: &str = ".filter__btn";
pub const PARTNERS_GRID_ID: &str = "partnersGrid";

pub const PORTFOLIO_ITEM_CLASS: &str = "portfolio__item";
pub const PORTFOLIO_IMAGE_CLASS: &str = "portfolio__image";
pub const PARTNER_ITEM_CLASS: &str = "partner__item";
pub const PARTNER_IMAGE_CLASS: &str = "partner__image";

/// Added to freshly rendered items when animations are enabled.
pub const ITEM_ENTER_CLASS: &str = "portfolio__item--enter";
pub const ACTIVE_CLASS: &str = "active";
pub const LOADED_CLASS: &str = "loaded";

/// Attribute holding the deferred image locator until it is resolved.
pub const DEFERRED_SRC_ATTRIBUTE: &str = "data-src";
/// Attribute carrying the one-shot subscription key of a rendered image.
pub const LAZY_KEY_ATTRIBUTE: &str = "data-lazy-key";
