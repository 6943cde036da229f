// Copyright (c) 2025 Ken Barker

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

//! Scenario tests combining the library modules, with reference values from
//! <https://www.movable-type.co.uk/scripts/latlong.html>.

// extern crate we're testing, same as any other code would do.
extern crate sphere_geodesy;

use angle_sc::is_within_tolerance;
use sphere_geodesy::{intersection, rhumb, spherical, Coordinate, Degrees, Kilometres, Validate};

#[test]
fn test_cambridge_to_paris_great_circle() {
    let cambridge = Coordinate::new(Degrees(52.205), Degrees(0.119));
    let paris = Coordinate::new(Degrees(48.857), Degrees(2.351));
    assert!(cambridge.is_valid());
    assert!(paris.is_valid());

    let distance = spherical::haversine_distance(&cambridge, &paris);
    assert!(is_within_tolerance(404.2791639887, distance.0, 1e-8));

    let bearing = spherical::initial_bearing(&cambridge, &paris);
    assert!(is_within_tolerance(156.1665825815, bearing.0, 1e-9));

    // steering the initial bearing for the full distance lands at Paris only
    // approximately: a great circle is not a constant-bearing path
    let projected = spherical::destination_point(&cambridge, distance, bearing);
    assert!(is_within_tolerance(paris.lat().0, projected.lat().0, 1e-9));
    assert!(is_within_tolerance(paris.lon().0, projected.lon().0, 1e-9));

    let mid = spherical::mid_point(&cambridge, &paris);
    assert!(is_within_tolerance(50.5363268783, mid.lat().0, 1e-9));
    assert!(is_within_tolerance(1.2746141007, mid.lon().0, 1e-9));

    // the midpoint halves the distance
    let half = spherical::haversine_distance(&cambridge, &mid);
    assert!(is_within_tolerance(distance.0 / 2.0, half.0, 1e-9));
}

#[test]
fn test_cambridge_to_paris_rhumb_line() {
    let cambridge = Coordinate::new(Degrees(52.205), Degrees(0.119));
    let paris = Coordinate::new(Degrees(48.857), Degrees(2.351));

    let distance = rhumb::distance(&cambridge, &paris);
    let bearing = rhumb::bearing(&cambridge, &paris);
    assert!(is_within_tolerance(404.2944038247, distance.0, 1e-8));
    assert!(is_within_tolerance(157.0456172268, bearing.0, 1e-9));

    // the rhumb line is never shorter than the great circle
    let great_circle = spherical::haversine_distance(&cambridge, &paris);
    assert!(great_circle <= distance);

    // a rhumb line IS a constant-bearing path: steering the bearing for the
    // full distance arrives exactly
    let projected = rhumb::destination_point(&cambridge, distance, bearing);
    assert!(is_within_tolerance(paris.lat().0, projected.lat().0, 1e-9));
    assert!(is_within_tolerance(paris.lon().0, projected.lon().0, 1e-9));

    // the rhumb midpoint keeps the rhumb bearing
    let mid = rhumb::mid_point(&cambridge, &paris);
    assert!(is_within_tolerance(
        bearing.0,
        rhumb::bearing(&cambridge, &mid).0,
        1e-9
    ));
}

#[test]
fn test_route_sampling_and_cross_track() {
    let cambridge = Coordinate::new(Degrees(52.205), Degrees(0.119));
    let paris = Coordinate::new(Degrees(48.857), Degrees(2.351));

    let route: Vec<Coordinate> = spherical::intermediate_points(cambridge, paris, 50).collect();
    assert_eq!(50, route.len());

    // every sampled position is on the great circle from Cambridge to Paris
    for position in &route[1..] {
        let xtd = spherical::cross_track_distance(position, &cambridge, &paris);
        assert!(is_within_tolerance(0.0, xtd.0, 1e-9));
    }

    // distances along the route increase monotonically
    for pair in route.windows(2) {
        assert!(
            spherical::haversine_distance(&cambridge, &pair[0])
                < spherical::haversine_distance(&cambridge, &pair[1])
        );
    }
}

#[test]
fn test_stansted_cdg_intersection() {
    // outbound tracks from Stansted and Charles de Gaulle
    let stansted = Coordinate::new(Degrees(51.8853), Degrees(0.2545));
    let cdg = Coordinate::new(Degrees(49.0034), Degrees(2.5735));

    let point =
        intersection::calculate_intersection_point(&stansted, Degrees(108.55), &cdg, Degrees(32.44))
            .unwrap();
    assert!(is_within_tolerance(50.9076075005, point.lat().0, 1e-8));
    assert!(is_within_tolerance(4.5085746458, point.lon().0, 1e-8));

    // the intersection lies on both tracks
    assert!(is_within_tolerance(
        108.55,
        spherical::initial_bearing(&stansted, &point).0,
        1e-8
    ));
    assert!(is_within_tolerance(
        32.44,
        spherical::initial_bearing(&cdg, &point).0,
        1e-8
    ));
}

#[test]
fn test_equator_circumnavigation_legs() {
    // quarter of the Earth's circumference East along the equator
    let origin = Coordinate::new(Degrees(0.0), Degrees(0.0));
    let quarter = Kilometres(core::f64::consts::FRAC_PI_2 * 6371.0);

    let mut position = origin;
    for expected_lon in [90.0, 180.0, -90.0, 0.0] {
        position = spherical::destination_point(&position, quarter, Degrees(90.0));
        assert!(is_within_tolerance(0.0, position.lat().0, 1e-6));
        assert!(is_within_tolerance(expected_lon, position.lon().0, 1e-6));
        assert!(position.is_valid());
    }
}
