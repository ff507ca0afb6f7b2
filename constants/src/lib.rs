//! Shared tunables for the studio site.
//!
//! Every crate in the workspace reads its fixed numbers, selectors and copy
//! from here so the web binary, the pure core and the catalog builder agree.

pub mod catalog;
pub mod category;
pub mod contact;
pub mod hero_scene;
pub mod page;
pub mod portfolio;
