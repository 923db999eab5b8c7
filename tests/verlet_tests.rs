use silk::{Constraint, Point, Pointer, Vec2, WebConfig};

#[test]
fn free_fall_gravity() {
    let config: WebConfig<f64> = WebConfig::new().with_damping(1.0);
    let mut p = Point::new(Vec2::new(0.0, 0.0));
    let pointer = Pointer::default();

    for _ in 0..60 {
        p.update(config.time_step, &config, &pointer);
    }

    // Each step adds h = g * dt² / 2 to the displacement, so after n steps
    // from rest y = h * n * (n + 1) / 2.
    let dt = config.time_step;
    let h = 0.5 * config.gravity * dt * dt;
    let expected_y = h * (60.0 * 61.0 / 2.0);
    assert!(
        (p.pos.y - expected_y).abs() < 1e-6,
        "pos.y = {}, expected ~ {}",
        p.pos.y,
        expected_y
    );
    assert_eq!(p.pos.x, 0.0);
}

#[test]
fn integration_matches_formula() {
    let config: WebConfig<f64> = WebConfig::new();
    let mut p = Point::new(Vec2::new(10.0, 20.0));
    p.prev_pos = Vec2::new(9.0, 21.0);
    p.force = Vec2::new(3.0, -2.0);

    let pos = p.pos;
    let prev = p.prev_pos;
    let dt = config.time_step;
    let force = Vec2::new(3.0, -2.0 + config.gravity);
    let expected = pos + (pos - prev).scale(config.damping) + force.scale(0.5 * (dt * dt));

    p.update(dt, &config, &Pointer::default());

    assert_eq!(p.pos, expected);
    assert_eq!(p.prev_pos, pos);
    assert_eq!(p.force, Vec2::zero());
}

#[test]
fn rest_length_equals_attach_distance() {
    let mut points = vec![
        Point::new(Vec2::new(-3.5f64, 2.25)),
        Point::new(Vec2::new(8.0, -1.0)),
    ];
    Point::attach(&mut points, 0, 1, Some(Vec2::new(0.0, 0.0))).unwrap();
    let c = points[0].constraints()[0];
    let expected = points[0].pos.distance(points[1].pos);
    assert!((c.rest_length() - expected).abs() < 1e-12);
}

#[test]
fn resolve_moves_free_endpoints_symmetrically() {
    let mut points = vec![
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(6.0, 8.0)),
    ];
    let before = [points[0].pos, points[1].pos];
    let c = Constraint::new(0, 1, 4.0, None);
    assert!(c.resolve(&mut points));

    let d1 = points[0].pos - before[0];
    let d2 = points[1].pos - before[1];
    assert!((d1.x + d2.x).abs() < 1e-12 && (d1.y + d2.y).abs() < 1e-12);
    assert!(d1.length() > 0.0);
    // Direction of p1 -> p2 is preserved.
    let axis = points[1].pos - points[0].pos;
    assert!((axis.x * 8.0 - axis.y * 6.0).abs() < 1e-9);
    assert!(axis.x > 0.0 && axis.y > 0.0);
}

#[test]
fn repeated_resolve_converges_to_rest_length() {
    let mut points = vec![
        Point::new(Vec2::new(0.0f64, 0.0)),
        Point::new(Vec2::new(10.0, 0.0)),
    ];
    let c = Constraint::new(0, 1, 4.0, None);
    let mut error = (c.length(&points) - 4.0).abs();
    for _ in 0..20 {
        c.resolve(&mut points);
        let next = (c.length(&points) - 4.0).abs();
        assert!(next <= error || next < 1e-12, "error grew from {} to {}", error, next);
        error = next;
    }
    assert!(error < 1e-9, "error = {}", error);
}

#[test]
fn pinned_chain_relaxes_to_rest_lengths() {
    let config: WebConfig<f64> = WebConfig::new();
    let mut points = vec![
        Point::new(Vec2::new(0.0, 0.0)),
        Point::new(Vec2::new(5.0, 0.0)),
        Point::new(Vec2::new(10.0, 0.0)),
    ];
    points[0].pin(Vec2::new(0.0, 0.0));
    Point::attach(&mut points, 1, 0, None).unwrap();
    Point::attach(&mut points, 2, 1, None).unwrap();

    // Disturb the chain away from its rest layout.
    points[1].pos = Vec2::new(2.0, 0.0);
    points[2].pos = Vec2::new(13.0, 0.0);

    let total_error = |points: &[Point<f64>]| -> f64 {
        points[1..]
            .iter()
            .map(|p| p.constraints()[0].stretch(points).abs())
            .sum()
    };
    let initial = total_error(&points);
    for _ in 0..100 {
        for i in (0..points.len()).rev() {
            Point::resolve_constraints(&mut points, i, &config);
        }
    }
    let residual = total_error(&points);
    assert!(residual < initial);
    assert!(residual < 1e-6, "residual {}", residual);
    assert_eq!(points[0].pos, Vec2::new(0.0, 0.0));
}

#[test]
fn pinned_point_stays_on_pin_through_resolution() {
    let config: WebConfig<f32> = WebConfig::new();
    let mut points = vec![
        Point::new(Vec2::new(5.0f32, 5.0)),
        Point::new(Vec2::new(5.0, 15.0)),
    ];
    Point::attach(&mut points, 0, 1, None).unwrap();
    points[0].pin(Vec2::new(5.0, 5.0));
    points[1].pos = Vec2::new(40.0, 40.0);

    for _ in 0..25 {
        Point::resolve_constraints(&mut points, 0, &config);
        Point::resolve_constraints(&mut points, 1, &config);
        assert_eq!(points[0].pos, Vec2::new(5.0, 5.0));
    }
}
