use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::hero::setup_hero_scene;
use crate::engine::systems::spin::spin_system;
use crate::engine::systems::visibility::{HeroVisibility, hero_visible};
use crate::site::load_site_data;

#[cfg(target_arch = "wasm32")]
use crate::dom::SitePlugin;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .insert_resource(ClearColor(Color::NONE))
        .init_resource::<HeroVisibility>();

    // DOM bindings: portfolio, partners, contact form, page chrome, analytics.
    #[cfg(target_arch = "wasm32")]
    {
        app.add_plugins(SitePlugin);
    }

    app.add_systems(Startup, (load_site_data, setup_hero_scene))
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            spin_system.run_if(in_state(AppState::Running).and(hero_visible)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
