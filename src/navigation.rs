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

//! The `navigation` module contains functions for calculating the great-circle
//! path between a pair of positions on the surface of the Earth: azimuths,
//! haversine distance, midpoint and the destination of a bearing and distance.

#![allow(clippy::float_cmp)]
#![allow(clippy::imprecise_flops)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::sphere;
use angle_sc::{Degrees, Radians};
use icao_units::si::Metres;
use unit_sphere::LatLong;

/// Test whether a pair of positions are coincident: whether their latitudes
/// and longitudes are exactly equal.
///
/// The other functions in this module use it to detect their degenerate case,
/// so equality is exact, not a proximity test.
/// * `a`, `b` - the positions.
///
/// returns true if `a` and `b` are the same position, false otherwise.
#[must_use]
pub fn are_coincident(a: &LatLong, b: &LatLong) -> bool {
    (a.lat().0 == b.lat().0) && (a.lon().0 == b.lon().0)
}

/// Calculate the azimuth (initial bearing) of the great-circle path from
/// position `a` to position `b`, in degrees clockwise from North.
/// * `a`, `b` - the start and finish positions.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the azimuth in the range 0° to 360°, or `Degrees(0.0)` if the
/// positions are coincident.
///
/// # Examples
/// ```
/// use great_circle::navigation;
/// use angle_sc::Degrees;
/// use unit_sphere::LatLong;
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let b = LatLong::new(Degrees(0.0), Degrees(10.0));
///
/// // Eastbound along the equator
/// assert_eq!(90.0, navigation::calculate_azimuth(&a, &b).0);
/// ```
#[must_use]
pub fn calculate_azimuth(a: &LatLong, b: &LatLong) -> Degrees {
    if are_coincident(a, b) {
        return Degrees(0.0);
    }

    let phi1 = a.lat().0.to_radians();
    let phi2 = b.lat().0.to_radians();
    let delta_lambda = (b.lon().0 - a.lon().0).to_radians();

    let y = libm::sin(delta_lambda) * libm::cos(phi2);
    let x = libm::cos(phi1) * libm::sin(phi2)
        - libm::sin(phi1) * libm::cos(phi2) * libm::cos(delta_lambda);
    let theta = libm::atan2(y, x);

    sphere::normalise_bearing(Degrees(theta.to_degrees()))
}

/// Calculate the azimuth at the end of the great-circle path from position
/// `a` to position `b`: the bearing on which the path arrives at `b`,
/// i.e. the reciprocal of the azimuth from `b` to `a`.
/// * `a`, `b` - the start and finish positions.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the end azimuth in the range 0° to 360°, or `Degrees(0.0)` if the
/// positions are coincident.
#[must_use]
pub fn calculate_end_azimuth(a: &LatLong, b: &LatLong) -> Degrees {
    if are_coincident(a, b) {
        return Degrees(0.0);
    }

    let reciprocal = calculate_azimuth(b, a);
    sphere::normalise_bearing(Degrees(reciprocal.0 + 180.0))
}

/// Calculate the great-circle distance between a pair of positions using the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// * `a`, `b` - the start and finish positions.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the distance in `Metres`, `Metres(0.0)` if the positions are
/// coincident.
///
/// # Examples
/// ```
/// use great_circle::navigation;
/// use angle_sc::{is_within_tolerance, Degrees};
/// use unit_sphere::LatLong;
///
/// let eiffel_tower = LatLong::new(Degrees(48.858158), Degrees(2.294825));
/// let versailles = LatLong::new(Degrees(48.804766), Degrees(2.120339));
///
/// let distance = navigation::calculate_distance(&eiffel_tower, &versailles);
/// assert!(is_within_tolerance(14084.280704919687, distance.0, 1e-6));
/// ```
#[must_use]
pub fn calculate_distance(a: &LatLong, b: &LatLong) -> Metres {
    if are_coincident(a, b) {
        return Metres(0.0);
    }

    let phi1 = a.lat().0.to_radians();
    let phi2 = b.lat().0.to_radians();
    let delta_phi = (b.lat().0 - a.lat().0).to_radians();
    let delta_lambda = (b.lon().0 - a.lon().0).to_radians();

    let sin_half_phi = libm::sin(delta_phi / 2.0);
    let sin_half_lambda = libm::sin(delta_lambda / 2.0);
    let h = sin_half_phi * sin_half_phi
        + libm::cos(phi1) * libm::cos(phi2) * sin_half_lambda * sin_half_lambda;
    let c = 2.0 * libm::atan2(libm::sqrt(h), libm::sqrt(1.0 - h));

    sphere::radians_to_metres(Radians(c))
}

/// Calculate the midpoint of the great-circle path between a pair of
/// positions: the point equidistant from both on the path between them.
/// * `a`, `b` - the start and finish positions.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the midpoint, or `a` if the positions are coincident.
#[must_use]
pub fn calculate_midpoint(a: &LatLong, b: &LatLong) -> LatLong {
    if are_coincident(a, b) {
        return LatLong::new(a.lat(), a.lon());
    }

    let phi1 = a.lat().0.to_radians();
    let phi2 = b.lat().0.to_radians();
    let lambda1 = a.lon().0.to_radians();
    let delta_lambda = (b.lon().0 - a.lon().0).to_radians();

    let bx = libm::cos(phi2) * libm::cos(delta_lambda);
    let by = libm::cos(phi2) * libm::sin(delta_lambda);

    let cos_phi1_bx = libm::cos(phi1) + bx;
    let phi_m = libm::atan2(
        libm::sin(phi1) + libm::sin(phi2),
        libm::sqrt(cos_phi1_bx * cos_phi1_bx + by * by),
    );
    let lambda_m = lambda1 + libm::atan2(by, cos_phi1_bx);

    LatLong::new(
        Degrees(phi_m.to_degrees()),
        sphere::normalise_longitude(Degrees(lambda_m.to_degrees())),
    )
}

/// Calculate the destination position along the great-circle path on the
/// given azimuth for the given distance from a start position, the direct
/// problem of navigation.
/// * `a` - the start position.
/// * `azimuth` - the azimuth of the path at `a`, clockwise from North.
/// * `distance` - the distance to travel along the path in `Metres`.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the destination position, or `a` unchanged if `distance` is zero.
///
/// # Examples
/// ```
/// use great_circle::navigation;
/// use angle_sc::Degrees;
/// use icao_units::si::Metres;
/// use unit_sphere::LatLong;
///
/// let a = LatLong::new(Degrees(0.0), Degrees(0.0));
///
/// // North from the equator for a quarter of the Earth's circumference
/// let b = navigation::calculate_destination(&a, Degrees(0.0), Metres(10_007_543.398010286));
/// assert_eq!(90.0, b.lat().0);
/// assert_eq!(0.0, b.lon().0);
/// ```
#[must_use]
pub fn calculate_destination(a: &LatLong, azimuth: Degrees, distance: Metres) -> LatLong {
    if distance.0 == 0.0 {
        return LatLong::new(a.lat(), a.lon());
    }

    let delta = sphere::metres_to_radians(distance).0;
    let theta = azimuth.0.to_radians();
    let phi1 = a.lat().0.to_radians();
    let lambda1 = a.lon().0.to_radians();

    let phi2 = libm::asin(
        libm::sin(phi1) * libm::cos(delta) + libm::cos(phi1) * libm::sin(delta) * libm::cos(theta),
    );
    let lambda2 = lambda1
        + libm::atan2(
            libm::sin(theta) * libm::sin(delta) * libm::cos(phi1),
            libm::cos(delta) - libm::sin(phi1) * libm::sin(phi2),
        );

    LatLong::new(
        Degrees(phi2.to_degrees()),
        sphere::normalise_longitude(Degrees(lambda2.to_degrees())),
    )
}
