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

//! The `intersection` module contains a function for calculating the
//! intersection of two great-circle paths, each given by a start position
//! and an azimuth.
//!
//! It implements the intersection of two great circles from
//! Ed Williams' [Aviation Formulary](https://edwilliams.org/avform147.htm#Intersection),
//! also described in Chris Veness'
//! [movable-type](https://www.movable-type.co.uk/scripts/latlong.html#intersection)
//! spherical trigonometry functions.
//!
//! A pair of great circles always intersects at two antipodal points, but a
//! pair of paths need not: the paths may start from the same position, may
//! lie on the same great circle, or may diverge on the given azimuths. Each
//! of those outcomes is "no intersection", `None`, distinguishing them from
//! a valid intersection position.

#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::sphere;
use angle_sc::Degrees;
use core::f64::consts::PI;
use unit_sphere::LatLong;

/// Calculate the intersection position of two great-circle paths, each
/// defined by a start position and the azimuth of the path at it.
/// * `p1` - the start position of the first path.
/// * `azimuth1` - the azimuth of the first path at `p1`.
/// * `p2` - the start position of the second path.
/// * `azimuth2` - the azimuth of the second path at `p2`.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns `Some` intersection position, or `None` if the start positions
/// are coincident, the paths lie on the same great circle, or the paths
/// diverge on the given azimuths.
///
/// # Examples
/// ```
/// use great_circle::intersection;
/// use angle_sc::{is_within_tolerance, Degrees};
/// use unit_sphere::LatLong;
///
/// let p1 = LatLong::new(Degrees(10.0), Degrees(0.0));
/// let p2 = LatLong::new(Degrees(10.0), Degrees(20.0));
///
/// // North East and North West paths converge above the middle meridian
/// let point = intersection::calculate_intersection_point(&p1, Degrees(45.0), &p2, Degrees(315.0))
///     .unwrap();
/// assert!(is_within_tolerance(19.28877821805681, point.lat().0, 1e-9));
/// assert!(is_within_tolerance(10.0, point.lon().0, 1e-9));
/// ```
#[must_use]
pub fn calculate_intersection_point(
    p1: &LatLong,
    azimuth1: Degrees,
    p2: &LatLong,
    azimuth2: Degrees,
) -> Option<LatLong> {
    let phi1 = p1.lat().0.to_radians();
    let lambda1 = p1.lon().0.to_radians();
    let phi2 = p2.lat().0.to_radians();
    let lambda2 = p2.lon().0.to_radians();
    let theta13 = azimuth1.0.to_radians();
    let theta23 = azimuth2.0.to_radians();
    let delta_phi = phi2 - phi1;
    let delta_lambda = lambda2 - lambda1;

    // the angular separation of the start positions
    let sin_half_phi = libm::sin(delta_phi / 2.0);
    let sin_half_lambda = libm::sin(delta_lambda / 2.0);
    let delta12 = 2.0
        * libm::asin(libm::sqrt(
            sin_half_phi * sin_half_phi
                + libm::cos(phi1) * libm::cos(phi2) * sin_half_lambda * sin_half_lambda,
        ));
    if delta12 == 0.0 {
        return None;
    }

    // the bearings between the start positions; acos can produce NaN from
    // rounding when the positions are nearly antipodal, clamp the angle to zero
    let mut theta_a = libm::acos(
        (libm::sin(phi2) - libm::sin(phi1) * libm::cos(delta12))
            / (libm::sin(delta12) * libm::cos(phi1)),
    );
    if theta_a.is_nan() {
        theta_a = 0.0;
    }
    let mut theta_b = libm::acos(
        (libm::sin(phi1) - libm::sin(phi2) * libm::cos(delta12))
            / (libm::sin(delta12) * libm::cos(phi2)),
    );
    if theta_b.is_nan() {
        theta_b = 0.0;
    }

    // resolve the acos quadrants by the sign of the longitude difference
    let (theta12, theta21) = if 0.0 < libm::sin(delta_lambda) {
        (theta_a, 2.0 * PI - theta_b)
    } else {
        (2.0 * PI - theta_a, theta_b)
    };

    // the angles from each path azimuth to the other start position
    let alpha1 = libm::fmod(theta13 - theta12 + PI, 2.0 * PI) - PI;
    let alpha2 = libm::fmod(theta21 - theta23 + PI, 2.0 * PI) - PI;

    // both paths lie on the great circle through the start positions
    if libm::sin(alpha1) == 0.0 && libm::sin(alpha2) == 0.0 {
        return None;
    }
    // the paths diverge on the given azimuths
    if libm::sin(alpha1) * libm::sin(alpha2) < 0.0 {
        return None;
    }

    // the angular distance from p1 to the intersection
    let alpha3 = libm::acos(
        -libm::cos(alpha1) * libm::cos(alpha2)
            + libm::sin(alpha1) * libm::sin(alpha2) * libm::cos(delta12),
    );
    let delta13 = libm::atan2(
        libm::sin(delta12) * libm::sin(alpha1) * libm::sin(alpha2),
        libm::cos(alpha2) + libm::cos(alpha1) * libm::cos(alpha3),
    );

    // the intersection position from p1 along azimuth1
    let phi3 = libm::asin(
        libm::sin(phi1) * libm::cos(delta13)
            + libm::cos(phi1) * libm::sin(delta13) * libm::cos(theta13),
    );
    let delta_lambda13 = libm::atan2(
        libm::sin(theta13) * libm::sin(delta13) * libm::cos(phi1),
        libm::cos(delta13) - libm::sin(phi1) * libm::sin(phi3),
    );
    let lambda3 = lambda1 + delta_lambda13;

    Some(LatLong::new(
        Degrees(phi3.to_degrees()),
        sphere::normalise_longitude(Degrees(lambda3.to_degrees())),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::calculate_azimuth;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_calculate_intersection_point() {
        let saint_germain = LatLong::new(Degrees(48.897728), Degrees(2.094977));
        let orly = LatLong::new(Degrees(48.747114), Degrees(2.400526));
        let eiffel_tower = LatLong::new(Degrees(48.858158), Degrees(2.294825));

        // the path from Saint-Germain towards Orly crossed with the path from
        // the Eiffel Tower towards Versailles
        let azimuth1 = calculate_azimuth(&saint_germain, &orly);
        let azimuth2 = Degrees(245.13460296861962);

        let point = calculate_intersection_point(&saint_germain, azimuth1, &eiffel_tower, azimuth2)
            .unwrap();
        assert!(is_within_tolerance(48.83569094988361, point.lat().0, 1e-9));
        assert!(is_within_tolerance(2.2212520313073583, point.lon().0, 1e-9));
    }

    #[test]
    fn test_calculate_intersection_point_symmetric() {
        let p1 = LatLong::new(Degrees(10.0), Degrees(0.0));
        let p2 = LatLong::new(Degrees(10.0), Degrees(20.0));

        // North East and North West paths converge above the middle meridian
        let point = calculate_intersection_point(&p1, Degrees(45.0), &p2, Degrees(315.0)).unwrap();
        assert!(is_within_tolerance(19.28877821805681, point.lat().0, 1e-9));
        assert!(is_within_tolerance(10.0, point.lon().0, 1e-9));
    }

    #[test]
    fn test_calculate_intersection_point_coincident() {
        let eiffel_tower = LatLong::new(Degrees(48.858158), Degrees(2.294825));
        let same = LatLong::new(Degrees(48.858158), Degrees(2.294825));

        // coincident start positions have no unique intersection
        let point =
            calculate_intersection_point(&eiffel_tower, Degrees(10.0), &same, Degrees(200.0));
        assert!(point.is_none());
    }

    #[test]
    fn test_calculate_intersection_point_same_great_circle() {
        let p1 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let p2 = LatLong::new(Degrees(0.0), Degrees(10.0));

        // both paths lie along the equator, so every point is an intersection
        let point = calculate_intersection_point(&p1, Degrees(90.0), &p2, Degrees(270.0));
        assert!(point.is_none());
    }

    #[test]
    fn test_calculate_intersection_point_diverging() {
        let p1 = LatLong::new(Degrees(0.0), Degrees(0.0));
        let p2 = LatLong::new(Degrees(0.0), Degrees(10.0));

        // Northbound and Southbound paths from the equator diverge
        let point = calculate_intersection_point(&p1, Degrees(0.0), &p2, Degrees(180.0));
        assert!(point.is_none());
    }
}
