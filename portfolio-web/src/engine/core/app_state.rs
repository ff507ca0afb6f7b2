use bevy::prelude::*;

use crate::engine::scene::hero::HeroOuter;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Hero meshes are spawned during startup; once they exist the scene may animate.
pub fn transition_to_running(
    hero: Query<(), With<HeroOuter>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !hero.is_empty() {
        info!("→ Hero scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
