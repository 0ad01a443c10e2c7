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

//! The `cross_track` module contains functions for calculating the across
//! track and along track distances of a position relative to the great-circle
//! path through a pair of positions, and the abeam point on that path.

#![allow(clippy::similar_names)]

use crate::{navigation, sphere};
use angle_sc::Radians;
use icao_units::si::Metres;
use unit_sphere::LatLong;

/// Calculate the arc length from `start` to `position` and the signed
/// cross-track arc length of `position` relative to the path from `start`
/// towards `finish`.
///
/// returns the arc lengths in radians.
#[must_use]
fn calculate_arc_angles(position: &LatLong, start: &LatLong, finish: &LatLong) -> (f64, f64) {
    let delta13 = sphere::metres_to_radians(navigation::calculate_distance(start, position)).0;
    let theta13 = navigation::calculate_azimuth(start, position).0.to_radians();
    let theta12 = navigation::calculate_azimuth(start, finish).0.to_radians();

    let delta_xt = libm::asin(libm::sin(delta13) * libm::sin(theta13 - theta12));
    (delta13, delta_xt)
}

/// Calculate the cross-track distance of a position relative to the
/// great-circle path through `start` and `finish`: the signed perpendicular
/// distance from the position to the path.
/// * `position` - the position.
/// * `start`, `finish` - the positions defining the path.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the cross-track distance in `Metres`: negative if the position
/// lies to the left of the path, positive if it lies to the right.
///
/// # Examples
/// ```
/// use great_circle::cross_track;
/// use angle_sc::{is_within_tolerance, Degrees};
/// use unit_sphere::LatLong;
///
/// let start = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let finish = LatLong::new(Degrees(0.0), Degrees(90.0));
///
/// // one degree of latitude left of an Eastbound path along the equator
/// let position = LatLong::new(Degrees(1.0), Degrees(45.0));
/// let distance = cross_track::calculate_cross_track_distance(&position, &start, &finish);
/// assert!(is_within_tolerance(-111_194.92664455874, distance.0, 1e-5));
/// ```
#[must_use]
pub fn calculate_cross_track_distance(
    position: &LatLong,
    start: &LatLong,
    finish: &LatLong,
) -> Metres {
    let (_, delta_xt) = calculate_arc_angles(position, start, finish);
    sphere::radians_to_metres(Radians(delta_xt))
}

/// Calculate the along-track distance of a position relative to the
/// great-circle path through `start` and `finish`: the distance from `start`
/// along the path to the abeam point of the position.
/// * `position` - the position.
/// * `start`, `finish` - the positions defining the path.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the along-track distance in `Metres`.
#[must_use]
pub fn calculate_along_track_distance(
    position: &LatLong,
    start: &LatLong,
    finish: &LatLong,
) -> Metres {
    let (delta13, delta_xt) = calculate_arc_angles(position, start, finish);
    sphere::radians_to_metres(Radians(delta13 * libm::cos(delta_xt)))
}

/// Calculate the abeam point of a position on the great-circle path through
/// `start` and `finish`: the closest point on the path to the position, the
/// destination from `start` along the path at the along-track distance.
/// * `position` - the position.
/// * `start`, `finish` - the positions defining the path.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the abeam point on the path.
#[must_use]
pub fn calculate_cross_track_point(
    position: &LatLong,
    start: &LatLong,
    finish: &LatLong,
) -> LatLong {
    let azimuth = navigation::calculate_azimuth(start, finish);
    let along_track = calculate_along_track_distance(position, start, finish);
    navigation::calculate_destination(start, azimuth, along_track)
}
