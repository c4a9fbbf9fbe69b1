use super::*;
use crate::types::{v_size2, Coord, LineSegment, Point, COORD_LIMIT};
use nalgebra::vector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn angle_left_quarter_turns() {
    let b = vector![0, 0];
    // a → b → c turning left leaves 90° on the left
    let a = vector![-10, 0];
    let c = vector![0, 10];
    assert!((angle_left(a, b, c) - FRAC_PI_2).abs() < 1e-12);
    // turning right leaves 270° on the left
    let c_right = vector![0, -10];
    assert!((angle_left(a, b, c_right) - 3.0 * FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn angle_left_collinear() {
    let a = vector![0, 0];
    let b = vector![10, 0];
    // c back on ray b→a: zero angle
    assert!(angle_left(a, b, vector![5, 0]).abs() < 1e-12);
    // c straight ahead: half turn
    assert!((angle_left(a, b, vector![20, 0]) - PI).abs() < 1e-12);
}

#[test]
fn angle_left_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    let pt = |rng: &mut StdRng| -> Point {
        vector![rng.gen_range(-1000..1000), rng.gen_range(-1000..1000)]
    };
    for _ in 0..500 {
        let (a, b, c) = (pt(&mut rng), pt(&mut rng), pt(&mut rng));
        if a == b || c == b {
            continue;
        }
        let fwd = angle_left(a, b, c);
        let back = angle_left(c, b, a);
        assert!((0.0..TAU).contains(&fwd));
        assert!((0.0..TAU).contains(&back));
        if fwd > 1e-9 && back > 1e-9 {
            assert!((fwd + back - TAU).abs() < 1e-9);
        }
    }
}

#[test]
fn triangle_area_is_half_cross() {
    assert_eq!(triangle_area(vector![0, 0], vector![6, 4]), 0);
    assert_eq!(triangle_area(vector![4, 0], vector![6, 4]), 8);
    assert_eq!(triangle_area(vector![6, 4], vector![4, 0]), 8);
    assert_eq!(triangle_area(vector![3, 0], vector![0, 3]), 4);
}

#[test]
fn triangle_area_at_coordinate_limit() {
    let l = COORD_LIMIT;
    assert_eq!(triangle_area(vector![l, -l], vector![l, l]), 1 << 60);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "triangle area exceeds Coord")]
fn triangle_area_overflow_is_caught() {
    let k: Coord = 1 << 40;
    triangle_area(vector![k, 0], vector![0, k]);
}

#[test]
fn distance_solution_lies_on_segment_at_distance() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pt = |r: i64| -> Point { vector![rng.gen_range(-r..=r), rng.gen_range(-r..=r)] };
    let mut hits = 0;
    for i in 0..2000 {
        let range = [5, 50, 5000][i % 3];
        let (a, b, p) = (pt(range), pt(range), pt(range));
        if a == b {
            continue;
        }
        // around |p - a|, so the circle usually reaches the segment
        let dist = ((v_size2(p - a) as f64).sqrt() as Coord + (i as Coord % 7) - 3).max(0);
        let Some(r) = point_on_line_with_dist(p, a, b, dist) else {
            continue;
        };
        hits += 1;
        let seg = LineSegment::new(a, b);
        // on the segment, up to grid rounding
        assert!(dist2_from_line(r, a, b) <= 1);
        assert!(v_size2(r - closest_on_segment(r, seg)) <= 4);
        let d = r - p;
        let err = ((d.x as f64).hypot(d.y as f64) - dist as f64).abs();
        let bound = if seg.length2() >= 16 { 1.0 } else { 1.25 };
        assert!(err <= bound + 1e-9, "p={p:?} a={a:?} b={b:?} dist={dist} r={r:?}");
    }
    assert!(hits > 200);
}

#[test]
fn intersection_agrees_with_collision_on_axis_aligned_input() {
    let a = LineSegment::new(vector![0, 0], vector![100, 0]);
    let b = LineSegment::new(vector![30, -20], vector![70, 20]);
    assert!(segments_collide(a.from, a.to, b.from, b.to));
    assert_eq!(intersection(a, b), vector![50, 0]);
}

#[test]
fn projection_is_idempotent_and_collinear() {
    let onto = LineSegment::new(vector![0, 0], vector![300, 400]);
    let s = LineSegment::new(vector![120, -50], vector![-70, 220]);
    let once = project_segment(s, onto);
    assert_eq!(project_segment(once, onto), once);
    assert!(are_collinear(onto, once, 1));
}
