//! Radar system: antenna limits, scan-volume gating and hook upkeep.

use hecs::{Entity, World};
use tracing::{debug, info};

use rio_core::geometry::braa;
use rio_core::radar::RadarState;
use rio_core::types::Kinematics;

use crate::components::{Bogey, RadarContact};

/// Clamp the antenna, refresh every contact's BRAA report and visibility,
/// and drop the hook if its bogey is gone or has left the volume.
pub fn run(world: &mut World, radar: &mut RadarState, own: &Kinematics, hooked: &mut Option<Entity>) {
    radar.clamp_antenna();

    for (_entity, (bogey, kinematics, contact)) in
        world.query_mut::<(&Bogey, &Kinematics, &mut RadarContact)>()
    {
        contact.braa = braa(own, kinematics);
        let visible = radar.contains(&contact.braa);
        if visible != contact.visible {
            debug!(bogey = %bogey.id, visible, "Contact visibility changed");
        }
        contact.visible = visible;
    }

    if let Some(entity) = *hooked {
        let still_visible = world
            .get::<&RadarContact>(entity)
            .map(|contact| contact.visible)
            .unwrap_or(false);
        if !still_visible {
            info!("Hooked contact lost");
            *hooked = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rio_core::enums::AzimuthScan;
    use rio_core::types::{BogeyId, Vector3};

    fn own() -> Kinematics {
        Kinematics::new(Vector3::new(0.0, 0.0, 7000.0), Vector3::new(0.0, 200.0, 0.0))
    }

    fn spawn_at(world: &mut World, x: f64, y: f64) -> Entity {
        world.spawn((
            Bogey {
                id: BogeyId(0),
                heading_deg: 180.0,
                pitch_deg: 0.0,
                speed_mps: 200.0,
            },
            Kinematics::new(Vector3::new(x, y, 7000.0), Vector3::new(0.0, -200.0, 0.0)),
            RadarContact::default(),
        ))
    }

    #[test]
    fn test_contact_ahead_is_visible() {
        let mut world = World::new();
        let entity = spawn_at(&mut world, 0.0, 50_000.0);
        let mut radar = RadarState::default();
        let mut hooked = None;
        run(&mut world, &mut radar, &own(), &mut hooked);

        let contact = world.get::<&RadarContact>(entity).unwrap();
        assert!(contact.visible);
        assert!((contact.braa.range_m - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_hook_dropped_when_contact_leaves_volume() {
        let mut world = World::new();
        let entity = spawn_at(&mut world, 0.0, 50_000.0);
        let mut radar = RadarState::default();
        let mut hooked = Some(entity);

        run(&mut world, &mut radar, &own(), &mut hooked);
        assert_eq!(hooked, Some(entity));

        // Narrow the scan and slew it left of the nose.
        radar.azimuth_scan = AzimuthScan::Ten;
        radar.slew(-40.0, 0.0);
        run(&mut world, &mut radar, &own(), &mut hooked);
        assert!(!world.get::<&RadarContact>(entity).unwrap().visible);
        assert_eq!(hooked, None);
    }

    #[test]
    fn test_hook_dropped_when_entity_despawned() {
        let mut world = World::new();
        let entity = spawn_at(&mut world, 0.0, 50_000.0);
        let mut hooked = Some(entity);
        world.despawn(entity).unwrap();

        run(&mut world, &mut RadarState::default(), &own(), &mut hooked);
        assert_eq!(hooked, None);
    }

    #[test]
    fn test_antenna_clamped_each_frame() {
        let mut world = World::new();
        let mut radar = RadarState {
            elevation_deg: 90.0,
            ..Default::default()
        };
        run(&mut world, &mut radar, &own(), &mut None);
        assert!((radar.elevation_deg - 60.0).abs() < 1e-12);
    }
}
