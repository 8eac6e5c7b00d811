//! Single-finger drawing workflows: stroke start, smoothing, finalization.

use crate::helpers::{RecordingHost, TestSurfaceBuilder, assert_stroke_count, drag};
use inkboard::PointerEvent;
use inkboard::types::{PathSegment, point};

#[test]
fn test_simple_drag_finalizes_one_stroke() {
    // Scenario A: single-finger drag through (0,0) -> (10,0) -> (10,10)
    // at scale=1, offset=(0,0).
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    drag(
        &mut surface,
        &mut host,
        &[point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)],
    );

    assert_stroke_count(&surface, 1);
    assert!(surface.gesture.is_idle());
    assert!(surface.in_progress().is_none());

    let stroke = &surface.canvas.strokes[0];
    assert_eq!(stroke.segments[0], PathSegment::MoveTo(point(0.0, 0.0)));
    // 3 raw points -> 2 quadratic segments.
    assert_eq!(stroke.segments.len(), 3);
}

#[test]
fn test_first_pointer_down_captures_gesture() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    surface.handle_pointer_event(&PointerEvent::down(point(5.0, 5.0)), &mut host);

    assert_eq!(host.captures, 1);
    assert!(surface.gesture.is_drawing());

    // Moves do not re-request capture.
    surface.handle_pointer_event(&PointerEvent::moved(vec![point(6.0, 5.0)]), &mut host);
    assert_eq!(host.captures, 1);
}

#[test]
fn test_drawing_converts_screen_to_content() {
    // scale=2, offset=(10,10): screen (30,10) lies over content (10,0).
    let mut surface = TestSurfaceBuilder::new()
        .with_scale(2.0)
        .with_offset(10.0, 10.0)
        .build();
    let mut host = RecordingHost::default();

    surface.handle_pointer_event(&PointerEvent::down(point(30.0, 10.0)), &mut host);

    let builder = surface.in_progress().expect("drawing state");
    assert_eq!(builder.segments()[0], PathSegment::MoveTo(point(10.0, 0.0)));
}

#[test]
fn test_historical_samples_fold_in_before_live_sample() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    let origin = point(0.0, 0.0);
    let history = vec![point(2.0, 0.0), point(4.0, 0.0)];
    let live = point(6.0, 0.0);

    surface.handle_pointer_event(&PointerEvent::down(origin), &mut host);
    surface.handle_pointer_event(
        &PointerEvent::moved(vec![live]).with_history(history.clone()),
        &mut host,
    );

    let builder = surface.in_progress().expect("drawing state");
    // One segment per sample, history first: controls track raw samples.
    assert_eq!(builder.curve_count(), 3);
    let controls: Vec<_> = builder.segments()[1..]
        .iter()
        .map(|segment| match segment {
            PathSegment::QuadTo { ctrl, .. } => *ctrl,
            other => panic!("expected QuadTo, got {:?}", other),
        })
        .collect();
    assert_eq!(controls, vec![origin, history[0], history[1]]);
}

#[test]
fn test_move_with_zero_pointers_is_noop() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    surface.handle_pointer_event(&PointerEvent::down(point(0.0, 0.0)), &mut host);
    surface.handle_pointer_event(&PointerEvent::moved(vec![]), &mut host);

    let builder = surface.in_progress().expect("drawing state");
    assert_eq!(builder.curve_count(), 0);
}

#[test]
fn test_move_while_idle_is_noop() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    surface.handle_pointer_event(&PointerEvent::moved(vec![point(5.0, 5.0)]), &mut host);
    surface.handle_pointer_event(&PointerEvent::up(), &mut host);

    assert_stroke_count(&surface, 0);
    assert!(surface.gesture.is_idle());
}

#[test]
fn test_cancel_behaves_like_pointer_up() {
    // A platform cancel mid-stroke finalizes the stroke just as a lift would,
    // so no gesture is ever left stuck.
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    surface.handle_pointer_event(&PointerEvent::down(point(0.0, 0.0)), &mut host);
    surface.handle_pointer_event(&PointerEvent::moved(vec![point(10.0, 0.0)]), &mut host);
    surface.handle_pointer_event(&PointerEvent::cancel(), &mut host);

    assert_stroke_count(&surface, 1);
    assert!(surface.gesture.is_idle());
}

#[test]
fn test_strokes_append_in_z_order() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    drag(&mut surface, &mut host, &[point(0.0, 0.0), point(10.0, 0.0)]);
    drag(&mut surface, &mut host, &[point(0.0, 5.0), point(10.0, 5.0)]);

    assert_stroke_count(&surface, 2);
    assert_ne!(surface.canvas.strokes[0].id, surface.canvas.strokes[1].id);
    assert_eq!(
        surface.canvas.strokes[0].segments[0],
        PathSegment::MoveTo(point(0.0, 0.0))
    );
    assert_eq!(
        surface.canvas.strokes[1].segments[0],
        PathSegment::MoveTo(point(0.0, 5.0))
    );
}

#[test]
fn test_stroke_freezes_configured_style() {
    let style = inkboard::StrokeStyle {
        color: inkboard::Color { r: 30, g: 144, b: 255, a: 255 },
        width: 3.0,
    };
    let mut surface = TestSurfaceBuilder::new().with_style(style).build();
    let mut host = RecordingHost::default();

    drag(&mut surface, &mut host, &[point(0.0, 0.0), point(10.0, 0.0)]);

    assert_eq!(surface.canvas.strokes[0].style, style);
}
