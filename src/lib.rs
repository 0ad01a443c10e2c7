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

//! great-circle
//!
//! [![crates.io](https://img.shields.io/crates/v/great-circle.svg)](https://crates.io/crates/great-circle)
//! [![docs.io](https://docs.rs/great-circle/badge.svg)](https://docs.rs/great-circle/)
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//! [![Rust](https://github.com/kenba/great-circle-rs/actions/workflows/rust.yml/badge.svg)](https://github.com/kenba/great-circle-rs/actions)
//! [![codecov](https://codecov.io/gh/kenba/great-circle-rs/graph/badge.svg)](https://codecov.io/gh/kenba/great-circle-rs)
//!
//! A library for performing great-circle navigation calculations between
//! positions on the surface of a spherical Earth model.
//!
//! ## Great-circle navigation
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle): the
//! equivalent of a straight line segment in planar geometry, see *Figure 1*.
//!
//! <img src="https://via-technology.aero/img/navigation/ellipsoid/sphere_mercator_long_geodesic.png" width="400">
//!
//! *Figure 1 A long great circle arc (blue)*
//!
//! This library models the Earth as a sphere with the
//! [mean Earth radius](https://en.wikipedia.org/wiki/Earth_radius#Mean_radius)
//! of 6 371 000 metres and uses spherical trigonometry to calculate:
//!
//! - the azimuths and haversine distance of the great-circle path between
//!   two positions;
//! - the midpoint of the path between two positions and the destination
//!   given a start position, azimuth and distance;
//! - the along track and across track distances of a position relative to a
//!   great-circle path, and the abeam point of the position on the path;
//! - and the intersection of two great-circle paths.
//!
//! A sphere is a coarser model of the Earth than the
//! [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System) ellipsoid:
//! distances can differ from ellipsoidal distances by up to 0.5%.
//! In exchange, every calculation is a short, closed-form sequence of
//! trigonometric functions, with no series expansions and no iteration.
//!
//! ## Design
//!
//! The library implements the spherical trigonometry identities collected in
//! Ed Williams' [Aviation Formulary](https://edwilliams.org/avform147.htm) and
//! Chris Veness' [movable-type](https://www.movable-type.co.uk/scripts/latlong.html)
//! great-circle functions.
//!
//! Positions are [unit-sphere](https://crates.io/crates/unit-sphere)
//! `LatLong`s in degrees; angles are converted to radians at the start
//! of each calculation and back to degrees at the end, so results match the
//! published formulas directly.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians` and provide tolerance comparisons;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [libm](https://crates.io/crates/libm) - to provide trigonometric
//!   functions without the standard library.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod cross_track;
pub mod intersection;
pub mod navigation;
pub mod sphere;

pub use angle_sc::{Degrees, Radians};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

/// Calculate the azimuths and great-circle distance (in metres) between a
/// pair of positions on the spherical Earth.
/// * `a`, `b` - the start and finish positions.
///
/// @pre |latitude| <= 90.0 degrees.
///
/// returns the azimuth at the start position, the haversine distance and the
/// azimuth at the finish position.
///
/// # Examples
/// ```
/// use great_circle::*;
/// use angle_sc::is_within_tolerance;
///
/// let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
/// let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
/// let (azimuth, distance, end_azimuth) = calculate_azimuths_and_distance(&istanbul, &washington);
///
/// assert!(is_within_tolerance(309.2800284531682, azimuth.0, 1e-9));
/// assert!(is_within_tolerance(227.74801026694445, end_azimuth.0, 1e-9));
///
/// let distance_nm = NauticalMiles::from(distance);
/// println!("Istanbul-Washington distance: {:?}", distance_nm);
/// ```
#[must_use]
pub fn calculate_azimuths_and_distance(a: &LatLong, b: &LatLong) -> (Degrees, Metres, Degrees) {
    (
        navigation::calculate_azimuth(a, b),
        navigation::calculate_distance(a, b),
        navigation::calculate_end_azimuth(a, b),
    )
}
