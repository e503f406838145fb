use serde::{Deserialize, Serialize};

/// Side length of one zone, in world units. Matches the engine's spatial
/// partition so locally computed and replicated lookups agree on keys.
pub const ZONE_SIZE: f32 = 64.0;

/// A world-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Discretized 2D grid key for a world position. The join key between a
/// position and the location metadata indexed under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneCoordinate {
    pub x: i32,
    pub y: i32,
}

impl ZoneCoordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Resolves a world position to its zone. Zones are centered on the
    /// grid, so the half-zone offset shifts the boundary accordingly.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            x: ((position.x + ZONE_SIZE / 2.0) / ZONE_SIZE).floor() as i32,
            y: ((position.z + ZONE_SIZE / 2.0) / ZONE_SIZE).floor() as i32,
        }
    }
}

#[cfg(test)]
mod zone_coordinate_tests {
    use super::{Vec3, ZoneCoordinate};

    #[test]
    fn origin_is_zone_zero() {
        let zone = ZoneCoordinate::from_position(Vec3::new(0.0, 0.0, 0.0));

        assert_eq!(zone, ZoneCoordinate::new(0, 0));
    }

    #[test]
    fn half_zone_offset_shifts_boundary() {
        // 31.9 is still inside the centered zone 0, 32.0 tips into zone 1
        let inside = ZoneCoordinate::from_position(Vec3::new(31.9, 0.0, 0.0));
        let outside = ZoneCoordinate::from_position(Vec3::new(32.0, 0.0, 0.0));

        assert_eq!(inside, ZoneCoordinate::new(0, 0));
        assert_eq!(outside, ZoneCoordinate::new(1, 0));
    }

    #[test]
    fn negative_positions_floor_toward_negative_zones() {
        let zone = ZoneCoordinate::from_position(Vec3::new(-33.0, 0.0, -100.0));

        assert_eq!(zone, ZoneCoordinate::new(-1, -2));
    }

    #[test]
    fn vertical_axis_does_not_affect_zone() {
        let low = ZoneCoordinate::from_position(Vec3::new(10.0, -50.0, 20.0));
        let high = ZoneCoordinate::from_position(Vec3::new(10.0, 400.0, 20.0));

        assert_eq!(low, high);
    }
}
