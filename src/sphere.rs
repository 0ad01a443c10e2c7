// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `sphere` module contains the spherical Earth model: the mean Earth
//! radius together with functions for converting between surface distances
//! and great-circle arc lengths, and for normalising longitudes and bearings.

use angle_sc::{Degrees, Radians};
use icao_units::si::Metres;

/// The mean radius of the Earth in metres, see
/// [Earth radius](https://en.wikipedia.org/wiki/Earth_radius#Mean_radius).
pub const EARTH_RADIUS: Metres = Metres(6_371_000.0);

/// Convert a distance on the Earth's surface to the great-circle arc length
/// subtended at its centre.
/// * `distance` - the distance in `Metres`.
///
/// returns the arc length in `Radians`.
///
/// # Examples
/// ```
/// use great_circle::sphere;
/// use icao_units::si::Metres;
///
/// let arc = sphere::metres_to_radians(Metres(6_371_000.0));
/// assert_eq!(1.0, arc.0);
/// ```
#[must_use]
pub const fn metres_to_radians(distance: Metres) -> Radians {
    Radians(distance.0 / EARTH_RADIUS.0)
}

/// Convert a great-circle arc length subtended at the centre of the Earth
/// to a distance on its surface.
/// * `arc` - the arc length in `Radians`.
///
/// returns the distance in `Metres`.
///
/// # Examples
/// ```
/// use great_circle::sphere;
/// use angle_sc::Radians;
///
/// let distance = sphere::radians_to_metres(Radians(core::f64::consts::PI));
/// assert_eq!(20_015_086.79602057, distance.0);
/// ```
#[must_use]
pub const fn radians_to_metres(arc: Radians) -> Metres {
    Metres(arc.0 * EARTH_RADIUS.0)
}

/// Normalise a longitude into the range -180° to 180°.
/// Note: a longitude of +180° is normalised to -180°.
/// * `longitude` - the longitude in `Degrees`.
///
/// @pre -540° <= `longitude`, i.e. the sum of a longitude and a longitude
/// difference.
///
/// returns the normalised longitude.
///
/// # Examples
/// ```
/// use great_circle::sphere;
/// use angle_sc::Degrees;
///
/// assert_eq!(-170.0, sphere::normalise_longitude(Degrees(190.0)).0);
/// assert_eq!(170.0, sphere::normalise_longitude(Degrees(-190.0)).0);
/// ```
#[must_use]
pub fn normalise_longitude(longitude: Degrees) -> Degrees {
    Degrees(libm::fmod(longitude.0 + 540.0, 360.0) - 180.0)
}

/// Normalise a bearing into the range 0° to 360°, clockwise from North.
/// * `bearing` - the bearing in `Degrees`.
///
/// @pre -360° <= `bearing`.
///
/// returns the normalised bearing.
///
/// # Examples
/// ```
/// use great_circle::sphere;
/// use angle_sc::Degrees;
///
/// assert_eq!(315.0, sphere::normalise_bearing(Degrees(-45.0)).0);
/// assert_eq!(0.0, sphere::normalise_bearing(Degrees(360.0)).0);
/// ```
#[must_use]
pub fn normalise_bearing(bearing: Degrees) -> Degrees {
    Degrees(libm::fmod(bearing.0 + 360.0, 360.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_radius() {
        assert_eq!(6_371_000.0, EARTH_RADIUS.0);
    }

    #[test]
    fn test_distance_conversions() {
        assert_eq!(0.0, metres_to_radians(Metres(0.0)).0);
        assert_eq!(1.0, metres_to_radians(Metres(6_371_000.0)).0);
        assert_eq!(0.5, metres_to_radians(Metres(3_185_500.0)).0);

        assert_eq!(0.0, radians_to_metres(Radians(0.0)).0);
        assert_eq!(6_371_000.0, radians_to_metres(Radians(1.0)).0);

        // a quarter of the Earth's circumference
        let quadrant = radians_to_metres(Radians(core::f64::consts::FRAC_PI_2));
        assert_eq!(10_007_543.398010286, quadrant.0);
        assert_eq!(core::f64::consts::FRAC_PI_2, metres_to_radians(quadrant).0);
    }

    #[test]
    fn test_normalise_longitude() {
        assert_eq!(0.0, normalise_longitude(Degrees(0.0)).0);
        assert_eq!(-170.0, normalise_longitude(Degrees(190.0)).0);
        assert_eq!(170.0, normalise_longitude(Degrees(-190.0)).0);
        assert_eq!(0.0, normalise_longitude(Degrees(360.0)).0);
        assert_eq!(-179.0, normalise_longitude(Degrees(181.0)).0);

        // both ends of the antimeridian normalise to -180
        assert_eq!(-180.0, normalise_longitude(Degrees(180.0)).0);
        assert_eq!(-180.0, normalise_longitude(Degrees(-180.0)).0);
    }

    #[test]
    fn test_normalise_bearing() {
        assert_eq!(0.0, normalise_bearing(Degrees(0.0)).0);
        assert_eq!(0.0, normalise_bearing(Degrees(360.0)).0);
        assert_eq!(315.0, normalise_bearing(Degrees(-45.0)).0);
        assert_eq!(270.0, normalise_bearing(Degrees(-90.0)).0);
        assert_eq!(180.0, normalise_bearing(Degrees(-180.0)).0);
        assert_eq!(65.13460296861967, normalise_bearing(Degrees(425.13460296861962)).0);
    }
}
