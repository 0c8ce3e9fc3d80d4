use super::*;
use crate::controller::page_controller::PageController;

#[derive(Default)]
struct MockBackend {
    calls: Vec<String>,
}

impl PageCompositor<&'static str> for MockBackend {
    fn begin_frame(&mut self, _viewport: Size, position: f64) -> CubeResult<()> {
        self.calls.push(format!("begin {position}"));
        Ok(())
    }

    fn draw_page(&mut self, layer: &PageLayer<'_, &'static str>, _viewport: Size) -> CubeResult<()> {
        self.calls.push(format!("draw {}", *layer.content));
        Ok(())
    }

    fn end_frame(&mut self) -> CubeResult<()> {
        self.calls.push("end".to_string());
        Ok(())
    }
}

fn attached_view(controller: &PageController) -> CubePageView<&'static str> {
    let mut view = CubePageView::builder()
        .children(["a", "b", "c", "d"])
        .controller(controller.clone())
        .build()
        .unwrap();
    view.after_first_frame();
    view.attach_surface().unwrap();
    view
}

#[test]
fn render_frame_calls_in_expected_order() {
    let c = PageController::new(0);
    let view = attached_view(&c);
    c.set_page(1.5);

    let mut backend = MockBackend::default();
    let drawn = render_frame(&view, Size::new(10.0, 10.0), &mut backend).unwrap();
    assert_eq!(drawn, 4);
    assert_eq!(
        backend.calls,
        vec!["begin 1.5", "draw a", "draw b", "draw c", "draw d", "end"]
    );
}

#[test]
fn snapshot_records_each_frame() {
    let c = PageController::new(0);
    let view = attached_view(&c);
    let viewport = Size::new(100.0, 200.0);

    let mut snap = SnapshotCompositor::new();
    render_frame(&view, viewport, &mut snap).unwrap();
    c.set_page(0.5);
    render_frame(&view, viewport, &mut snap).unwrap();

    let frames = snap.into_frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].position, 0.0);
    assert_eq!(frames[0].pages.len(), 2);
    assert_eq!(frames[1].pages.len(), 3);

    let leaving = &frames[1].pages[0];
    assert_eq!(leaving.anchor, Anchor::Right);
    assert_eq!(leaving.rotation_degrees, -45.0);
    assert_eq!(leaving.overlay_opacity, 0.5);
    assert_eq!(leaving.axis, RotationAxis::Y);
}

#[test]
fn snapshot_rejects_unbalanced_calls() {
    let mut snap = SnapshotCompositor::new();
    assert!(PageCompositor::<()>::end_frame(&mut snap).is_err());
    PageCompositor::<()>::begin_frame(&mut snap, Size::new(1.0, 1.0), 0.0).unwrap();
    assert!(PageCompositor::<()>::begin_frame(&mut snap, Size::new(1.0, 1.0), 0.0).is_err());
}

#[test]
fn snapshot_serializes_to_json() {
    let frame = FrameSnapshot {
        position: 0.25,
        viewport: Size::new(4.0, 4.0),
        pages: vec![PageSnapshot {
            index: 0,
            rotation_degrees: -22.5,
            axis: RotationAxis::Y,
            anchor: Anchor::Right,
            overlay_opacity: 0.25,
            quad: [Point::ORIGIN; 4],
        }],
    };
    let json = frame.to_json_string().unwrap();
    assert!(json.contains("\"anchor\":\"right\""));
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, frame);
}
