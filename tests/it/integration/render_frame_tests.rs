//! Frame replay: transform application, z-order, and the in-progress overlay.

use crate::helpers::{
    RecordingHost, RecordingSurface, SurfaceOp, TestSurfaceBuilder, drag,
};
use inkboard::PointerEvent;
use inkboard::types::point;

#[test]
fn test_empty_canvas_still_applies_transform() {
    let surface = TestSurfaceBuilder::new()
        .with_scale(2.5)
        .with_offset(13.0, -40.0)
        .build();
    let mut target = RecordingSurface::new();

    surface.render_frame(&mut target);

    assert_eq!(
        target.ops,
        vec![
            SurfaceOp::Save,
            SurfaceOp::Translate(13.0, -40.0),
            SurfaceOp::Scale(2.5, 2.5),
            SurfaceOp::Restore,
        ]
    );
}

#[test]
fn test_strokes_replay_in_insertion_order() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    drag(&mut surface, &mut host, &[point(0.0, 0.0), point(10.0, 0.0)]);
    drag(&mut surface, &mut host, &[point(0.0, 5.0), point(10.0, 5.0)]);

    let mut target = RecordingSurface::new();
    surface.render_frame(&mut target);

    let draws = target.draw_calls();
    assert_eq!(draws.len(), 2);
    for (draw, stroke) in draws.iter().zip(&surface.canvas.strokes) {
        match draw {
            SurfaceOp::DrawPath { segments, color, width } => {
                assert_eq!(segments, &stroke.segments);
                assert_eq!(*color, stroke.style.color);
                assert_eq!(*width, stroke.style.width);
            }
            other => panic!("expected DrawPath, got {:?}", other),
        }
    }
}

#[test]
fn test_in_progress_stroke_renders_on_top() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();

    drag(&mut surface, &mut host, &[point(0.0, 0.0), point(10.0, 0.0)]);

    // Mid-drag: the buffer renders after every finalized stroke.
    surface.handle_pointer_event(&PointerEvent::down(point(0.0, 20.0)), &mut host);
    surface.handle_pointer_event(&PointerEvent::moved(vec![point(10.0, 20.0)]), &mut host);

    let mut target = RecordingSurface::new();
    surface.render_frame(&mut target);

    let draws = target.draw_calls();
    assert_eq!(draws.len(), 2);
    let builder = surface.in_progress().expect("drawing state");
    match draws[1] {
        SurfaceOp::DrawPath { segments, .. } => assert_eq!(segments, builder.segments()),
        other => panic!("expected DrawPath, got {:?}", other),
    }
}

#[test]
fn test_rendering_is_read_only() {
    let mut surface = TestSurfaceBuilder::new().build();
    let mut host = RecordingHost::default();
    drag(&mut surface, &mut host, &[point(0.0, 0.0), point(10.0, 0.0)]);

    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    surface.render_frame(&mut first);
    surface.render_frame(&mut second);

    assert_eq!(first.ops, second.ops);
}
