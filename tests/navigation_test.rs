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

extern crate great_circle;

use angle_sc::{is_within_tolerance, Degrees};
use csv;
use great_circle::{cross_track, navigation};
use unit_sphere::LatLong;

const FILENAME: &str = "data/great_circle_examples.csv";

/// lat1, lon1, lat2, lon2, distance_m, azimuth_deg, end_azimuth_deg
type DataRecord = (f64, f64, f64, f64, f64, f64, f64);

#[test]
fn test_great_circle_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    for result in rdr.deserialize::<DataRecord>() {
        let record = result?;

        let a = LatLong::new(Degrees(record.0), Degrees(record.1));
        let b = LatLong::new(Degrees(record.2), Degrees(record.3));
        let distance_m = record.4;
        let azimuth_deg = record.5;
        let end_azimuth_deg = record.6;

        let distance = navigation::calculate_distance(&a, &b);
        assert!(is_within_tolerance(distance_m, distance.0, 1e-5));

        let azimuth = navigation::calculate_azimuth(&a, &b);
        assert!(is_within_tolerance(azimuth_deg, azimuth.0, 1e-9));

        let end_azimuth = navigation::calculate_end_azimuth(&a, &b);
        assert!(is_within_tolerance(end_azimuth_deg, end_azimuth.0, 1e-9));

        // the destination on the azimuth at the distance is position b
        let destination = navigation::calculate_destination(&a, azimuth, distance);
        assert!(is_within_tolerance(b.lat().0, destination.lat().0, 1e-9));
        assert!(is_within_tolerance(b.lon().0, destination.lon().0, 1e-9));

        // the midpoint lies on the path, equidistant from both positions
        let midpoint = navigation::calculate_midpoint(&a, &b);
        let distance_a = navigation::calculate_distance(&a, &midpoint);
        let distance_b = navigation::calculate_distance(&b, &midpoint);
        assert!(is_within_tolerance(distance.0 / 2.0, distance_a.0, 1e-6));
        assert!(is_within_tolerance(distance.0 / 2.0, distance_b.0, 1e-6));

        let xtd = cross_track::calculate_cross_track_distance(&midpoint, &a, &b);
        assert!(is_within_tolerance(0.0, xtd.0, 1e-5));
    }

    Ok(())
}
