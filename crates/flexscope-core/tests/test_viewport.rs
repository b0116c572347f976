mod common;

use approx::assert_relative_eq;
use flexscope_core::consts::ZOOM_MIN;
use flexscope_core::viewport::{
    DragState, ViewportController, ViewportTransform, ZoomDirection, ZoomLimits,
};

use common::{controller, image, moved_controller, transform};

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_starts_at_natural_size() {
    let c = controller();
    assert_eq!(c.current_transform(), ViewportTransform::default());
    assert_eq!(c.current_transform().zoom_percent(), 100);
}

#[test]
fn test_zoom_in_adds_one_step() {
    let mut c = controller();
    c.zoom_by(ZoomDirection::In);
    assert_eq!(c.state().zoom, 1.2);
    c.zoom_by(ZoomDirection::In);
    assert_eq!(c.state().zoom, 1.4);
}

#[test]
fn test_zoom_out_never_goes_below_floor() {
    for start_steps in 0..12 {
        let mut c = controller();
        for _ in 0..start_steps {
            c.zoom_by(ZoomDirection::In);
        }
        for _ in 0..40 {
            c.zoom_by(ZoomDirection::Out);
            assert!(c.state().zoom >= ZOOM_MIN, "zoom {} below floor", c.state().zoom);
        }
        assert_eq!(c.state().zoom, ZOOM_MIN);
    }
}

#[test]
fn test_zoom_out_from_one_clamps_to_half() {
    let mut c = controller();
    let seen: Vec<f64> = (0..4)
        .map(|_| {
            c.zoom_by(ZoomDirection::Out);
            c.state().zoom
        })
        .collect();
    assert_eq!(seen, vec![0.8, 0.6, 0.5, 0.5]);
}

#[test]
fn test_zoom_in_then_out_restores_zoom() {
    let mut c = controller();
    for _ in 0..25 {
        let before = c.state().zoom;
        c.zoom_by(ZoomDirection::In);
        c.zoom_by(ZoomDirection::Out);
        assert_eq!(c.state().zoom, before);
        c.zoom_by(ZoomDirection::In);
    }
}

#[test]
fn test_zoom_in_then_out_at_floor_returns_to_floor() {
    let mut c = controller();
    for _ in 0..5 {
        c.zoom_by(ZoomDirection::Out);
    }
    assert_eq!(c.state().zoom, 0.5);
    c.zoom_by(ZoomDirection::In);
    assert_eq!(c.state().zoom, 0.7);
    c.zoom_by(ZoomDirection::Out);
    assert_eq!(c.state().zoom, 0.5);
}

#[test]
fn test_zoom_has_no_upper_bound() {
    let mut c = controller();
    for _ in 0..500 {
        c.zoom_by(ZoomDirection::In);
    }
    assert_relative_eq!(c.state().zoom, 101.0, epsilon = 1e-9);
    assert_eq!(c.current_transform().zoom_percent(), 10100);
}

#[test]
fn test_zoom_is_rounded_to_two_decimals() {
    let mut c = controller();
    for _ in 0..37 {
        c.zoom_by(ZoomDirection::In);
    }
    let z = c.state().zoom;
    assert_eq!(z, (z * 100.0).round() / 100.0);
    assert_eq!(z, 8.4);
}

#[test]
fn test_custom_limits_clamp_before_rounding() {
    let limits = ZoomLimits::new(0.25, 0.35).unwrap();
    let mut c = ViewportController::new(image(1), limits);
    for _ in 0..5 {
        c.zoom_by(ZoomDirection::Out);
        assert!(c.state().zoom >= limits.min());
    }
    // 1.0 -> 0.75 -> 0.5 -> max(0.25, 0.35)
    assert_eq!(c.state().zoom, 0.35);
}

#[test]
fn test_limits_reject_floor_below_rounding() {
    assert!(ZoomLimits::new(0.25, 0.333).is_none());
    assert!(ZoomLimits::new(0.25, 0.001).is_none());
    assert!(ZoomLimits::new(0.004, 0.5).is_none());
}

// ---------------------------------------------------------------------------
// Wheel
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_negative_delta_zooms_in() {
    let mut c = controller();
    c.zoom_at_wheel(-1.0);
    assert_eq!(c.state().zoom, 1.2);
    c.zoom_at_wheel(-250.0);
    assert_eq!(c.state().zoom, 1.4);
}

#[test]
fn test_wheel_positive_or_zero_delta_zooms_out() {
    let mut c = controller();
    c.zoom_at_wheel(1.0);
    assert_eq!(c.state().zoom, 0.8);
    c.zoom_at_wheel(0.0);
    assert_eq!(c.state().zoom, 0.6);
    c.zoom_at_wheel(1.0);
    assert_eq!(c.state().zoom, 0.5);
    c.zoom_at_wheel(1.0);
    assert_eq!(c.state().zoom, 0.5);
}

#[test]
fn test_zoom_does_not_change_drag_state() {
    let mut c = controller();
    c.begin_drag(3.0, 4.0);
    c.zoom_at_wheel(-1.0);
    c.zoom_by(ZoomDirection::Out);
    assert_eq!(c.drag_state(), DragState::Dragging);
    c.end_drag();
    c.zoom_by(ZoomDirection::In);
    assert_eq!(c.drag_state(), DragState::Idle);
}

// ---------------------------------------------------------------------------
// Drag
// ---------------------------------------------------------------------------

#[test]
fn test_single_drag_pans_by_pointer_delta() {
    let mut c = controller();
    c.begin_drag(10.0, 10.0);
    c.update_drag(30.0, 40.0);
    c.end_drag();
    assert_eq!(c.current_transform(), transform(20.0, 30.0, 1.0));
    assert_eq!(c.drag_state(), DragState::Idle);
}

#[test]
fn test_second_drag_continues_from_current_pan() {
    let mut c = controller();
    c.begin_drag(0.0, 0.0);
    c.update_drag(10.0, 10.0);
    c.end_drag();
    assert_eq!((c.state().pan_x, c.state().pan_y), (10.0, 10.0));

    c.begin_drag(5.0, 5.0);
    c.update_drag(5.0, 5.0);
    c.end_drag();
    assert_eq!((c.state().pan_x, c.state().pan_y), (10.0, 10.0));

    c.begin_drag(100.0, 100.0);
    c.update_drag(90.0, 120.0);
    c.end_drag();
    assert_eq!((c.state().pan_x, c.state().pan_y), (0.0, 30.0));
}

#[test]
fn test_drag_anchor_exists_only_while_dragging() {
    let mut c = controller();
    assert_eq!(c.state().drag_anchor, None);
    c.begin_drag(7.0, 9.0);
    assert_eq!(c.state().drag_anchor, Some((7.0, 9.0)));
    c.end_drag();
    assert_eq!(c.state().drag_anchor, None);
}

#[test]
fn test_last_move_wins() {
    let mut c = controller();
    c.begin_drag(0.0, 0.0);
    c.update_drag(50.0, 50.0);
    c.update_drag(-5.0, 2.0);
    assert_eq!((c.state().pan_x, c.state().pan_y), (-5.0, 2.0));
}

#[test]
fn test_update_without_drag_is_noop() {
    let mut c = moved_controller();
    let before = c.state().clone();
    c.update_drag(999.0, -999.0);
    assert_eq!(c.state(), &before);
}

#[test]
fn test_end_without_drag_is_noop() {
    let mut c = moved_controller();
    let before = c.state().clone();
    c.end_drag();
    c.end_drag();
    assert_eq!(c.state(), &before);
}

#[test]
fn test_ended_drag_keeps_pan() {
    let mut c = controller();
    c.begin_drag(1.0, 1.0);
    c.update_drag(11.0, -9.0);
    c.end_drag();
    c.update_drag(500.0, 500.0);
    assert_eq!((c.state().pan_x, c.state().pan_y), (10.0, -10.0));
}

#[test]
fn test_non_finite_pointer_propagates() {
    let mut c = controller();
    c.begin_drag(0.0, 0.0);
    c.update_drag(f64::NAN, 3.0);
    assert!(c.state().pan_x.is_nan());
    assert_eq!(c.state().pan_y, 3.0);
}

// ---------------------------------------------------------------------------
// Reset and image selection
// ---------------------------------------------------------------------------

#[test]
fn test_reset_restores_identity() {
    let mut c = moved_controller();
    assert_ne!(c.current_transform(), transform(0.0, 0.0, 1.0));
    c.reset_view();
    assert_eq!(c.current_transform(), transform(0.0, 0.0, 1.0));
    assert_eq!(c.active_image(), &image(1));
}

#[test]
fn test_reset_leaves_drag_session_running() {
    let mut c = controller();
    c.begin_drag(10.0, 10.0);
    c.update_drag(20.0, 20.0);
    c.reset_view();
    assert!(c.is_dragging());
    assert_eq!(c.current_transform(), transform(0.0, 0.0, 1.0));
}

#[test]
fn test_select_image_resets_everything() {
    let mut c = moved_controller();
    c.begin_drag(1.0, 2.0);
    c.select_image(image(2));
    assert_eq!(c.current_transform(), transform(0.0, 0.0, 1.0));
    assert_eq!(c.drag_state(), DragState::Idle);
    assert_eq!(c.active_image().id, 2);
}

#[test]
fn test_reselecting_same_image_still_resets() {
    let mut c = moved_controller();
    c.select_image(image(1));
    assert_eq!(c.current_transform(), transform(0.0, 0.0, 1.0));
    assert_eq!(c.active_image(), &image(1));
}

#[test]
fn test_update_after_select_is_noop() {
    let mut c = controller();
    c.begin_drag(0.0, 0.0);
    c.select_image(image(3));
    c.update_drag(40.0, 40.0);
    assert_eq!(c.current_transform(), transform(0.0, 0.0, 1.0));
}

// ---------------------------------------------------------------------------
// Transform output
// ---------------------------------------------------------------------------

#[test]
fn test_transform_css_and_percent() {
    let mut c = controller();
    c.begin_drag(10.0, 10.0);
    c.update_drag(30.0, 40.0);
    c.end_drag();
    c.zoom_by(ZoomDirection::In);
    let t = c.current_transform();
    assert_eq!(t.to_css(), "translate(20px, 30px) scale(1.2)");
    assert_eq!(t.zoom_percent(), 120);
}

#[test]
fn test_transform_pivots_on_viewport_center() {
    let t = transform(10.0, -20.0, 2.0);
    let center = [400.0, 300.0];
    assert_eq!(t.apply(center, center), [410.0, 280.0]);
    assert_eq!(t.apply([0.0, 0.0], center), [-390.0, -320.0]);
}

#[test]
fn test_image_rect_scales_around_panned_center() {
    let t = transform(5.0, 0.0, 0.5);
    let (min, max) = t.image_rect([100.0, 100.0], [200.0, 100.0]);
    assert_eq!(min, [55.0, 75.0]);
    assert_eq!(max, [155.0, 125.0]);
}
