use bevy::prelude::*;

/// Whether the hero canvas currently intersects the viewport.
///
/// Native builds have no page to scroll, so the scene starts visible.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroVisibility {
    pub visible: bool,
}

impl Default for HeroVisibility {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub fn hero_visible(visibility: Res<HeroVisibility>) -> bool {
    visibility.visible
}
