// Integration tests for card tilt and the price count-up animation.

use glam::Vec2;
use std::time::Duration;
use trazapp_core::constants::*;
use trazapp_core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn card_uv_is_relative_to_the_card() {
    let rect = [100.0, 50.0, 200.0, 100.0];
    assert_eq!(card_uv(Vec2::new(100.0, 50.0), rect), Vec2::ZERO);
    assert_eq!(card_uv(Vec2::new(300.0, 150.0), rect), Vec2::ONE);
    assert_eq!(card_uv(Vec2::new(200.0, 100.0), rect), TILT_REST);
    // outside the card clamps to its edge
    assert_eq!(card_uv(Vec2::new(0.0, 400.0), rect), Vec2::new(0.0, 1.0));
    // collapsed card stays at rest
    assert_eq!(card_uv(Vec2::new(10.0, 10.0), [0.0, 0.0, 0.0, 10.0]), TILT_REST);
}

#[test]
fn tilt_spans_plus_minus_amount() {
    let (rx, ry) = tilt(TILT_REST, 5.0);
    assert!(close(rx, 0.0) && close(ry, 0.0));

    // top-left corner: leans back on x, left on y
    let (rx, ry) = tilt(Vec2::ZERO, 5.0);
    assert!(close(rx, 5.0) && close(ry, -5.0));

    let (rx, ry) = tilt(Vec2::ONE, 3.0);
    assert!(close(rx, -3.0) && close(ry, 3.0));

    // linear in between
    let (rx, ry) = tilt(Vec2::new(0.75, 0.25), 4.0);
    assert!(close(rx, 2.0) && close(ry, 2.0));
}

#[test]
fn leaving_resets_the_card() {
    let mut card = TiltCard::new(TILT_POPULAR_PLAN_DEG);
    assert_eq!(card.pose().scale, 1.0);
    assert_eq!(card.pose().glare_opacity, 0.0);

    card.pointer_move(Vec2::new(1.0, 0.0));
    let pose = card.pose();
    assert!(card.is_hovering());
    assert!(close(pose.rotate_x, TILT_POPULAR_PLAN_DEG));
    assert!(close(pose.rotate_y, TILT_POPULAR_PLAN_DEG));
    assert_eq!(pose.glare, Vec2::new(100.0, 0.0));
    assert_eq!(pose.scale, TILT_HOVER_SCALE);
    assert_eq!(pose.glare_opacity, GLARE_HOVER_OPACITY);

    card.leave();
    let pose = card.pose();
    assert!(!card.is_hovering());
    assert!(close(pose.rotate_x, 0.0) && close(pose.rotate_y, 0.0));
    assert_eq!(pose.glare, Vec2::new(50.0, 50.0));
    assert_eq!(pose.scale, 1.0);
}

#[test]
fn count_up_rises_monotonically_and_lands_on_target() {
    let mut counter = CountUp::new(45_000.0, PRICE_COUNT_UP);
    assert_eq!(counter.value(), 0.0);
    let mut last = 0.0;
    for _ in 0..200 {
        let v = counter.tick(Duration::from_millis(16));
        assert!(v >= last && v <= 45_000.0);
        last = v;
    }
    assert!(counter.is_finished());
    assert_eq!(counter.value(), 45_000.0);
}

#[test]
fn count_up_retarget_restarts_from_zero() {
    let mut counter = CountUp::new(6_250.0, Duration::from_secs(1));
    counter.tick(Duration::from_secs(2));
    assert!(counter.is_finished());

    counter.retarget(45_000.0);
    assert!(!counter.is_finished());
    assert_eq!(counter.value(), 0.0);
    // ease-out: past half the target by a fifth of the duration
    let early = counter.tick(Duration::from_millis(200));
    assert!(early > 22_500.0 && early < 45_000.0);
    assert_eq!(counter.tick(Duration::from_secs(1)), 45_000.0);
}

#[test]
fn ease_out_expo_endpoints() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert_eq!(ease_out_expo(-1.0), 0.0);
    assert_eq!(ease_out_expo(f32::NAN), 0.0);
    assert!(ease_out_expo(0.5) > 0.9);
}
