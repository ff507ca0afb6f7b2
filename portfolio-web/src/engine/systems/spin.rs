use bevy::prelude::*;

use constants::hero_scene::REFERENCE_FRAME_RATE;

/// Euler rotation accumulated at a fixed rate, applied in XYZ order.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
    /// Radians per second around each axis.
    pub rate: Vec3,
    pub angles: Vec3,
}

impl Spin {
    /// Rates are specified per 60 Hz frame and scaled so the speed does not
    /// depend on the display refresh rate.
    pub fn per_frame(per_frame: Vec3) -> Self {
        Self {
            rate: per_frame * REFERENCE_FRAME_RATE,
            angles: Vec3::ZERO,
        }
    }

    pub fn advance(&mut self, delta_secs: f32) -> Quat {
        self.angles += self.rate * delta_secs;
        Quat::from_euler(EulerRot::XYZ, self.angles.x, self.angles.y, self.angles.z)
    }
}

pub fn spin_system(time: Res<Time>, mut query: Query<(&mut Spin, &mut Transform)>) {
    let delta = time.delta_secs();
    for (mut spin, mut transform) in &mut query {
        transform.rotation = spin.advance(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_reference_frame_matches_per_frame_rate() {
        let mut spin = Spin::per_frame(Vec3::new(0.005, -0.003, 0.0));
        spin.advance(1.0 / REFERENCE_FRAME_RATE);
        assert!((spin.angles.x - 0.005).abs() < 1e-6);
        assert!((spin.angles.y + 0.003).abs() < 1e-6);
        assert_eq!(spin.angles.z, 0.0);
    }

    #[test]
    fn spin_system_rotates_entities() {
        let mut app = App::new();
        app.init_resource::<Time>().add_systems(Update, spin_system);
        let entity = app
            .world_mut()
            .spawn((Spin::per_frame(Vec3::Y), Transform::IDENTITY))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(std::time::Duration::from_millis(500));
        app.update();

        let spin = app.world().get::<Spin>(entity).unwrap();
        assert!((spin.angles.y - 30.0).abs() < 1e-3);
    }
}
