//! Portfolio gallery: filter + pagination state, the pure render function and
//! the controller pushing each render pass to a surface.

mod controller;
mod filter;
pub mod markup;
mod view;

pub use controller::{PortfolioController, PortfolioView, RenderSurface};
pub use filter::Filter;
pub use view::{RenderPass, ViewState, load_more_visible, render};
