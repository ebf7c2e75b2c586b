//! Tests for the screen-space to page-space mapping

use pdfsnip::coordinate::{DisplayTransform, PageRect, ScreenPoint, ScreenRect};
use pdfsnip::session::DragSelection;

#[test]
fn mapping_divides_by_display_scale() {
    let transform = DisplayTransform::new(2.0);
    let rect = ScreenRect::new(ScreenPoint::new(10.0, 10.0), ScreenPoint::new(110.0, 60.0));

    let page_rect = transform.to_page_rect(&rect);

    assert_eq!(page_rect, PageRect::new(5.0, 5.0, 55.0, 30.0));
}

#[test]
fn mapping_is_invariant_under_point_swap() {
    let transform = DisplayTransform::new(1.5);
    let a = ScreenPoint::new(42.0, 7.0);
    let b = ScreenPoint::new(3.0, 99.0);

    let forward = transform.to_page_rect(&ScreenRect::new(a, b));
    let backward = transform.to_page_rect(&ScreenRect::new(b, a));

    assert_eq!(forward, backward);
    assert!(forward.width() >= 0.0);
    assert!(forward.height() >= 0.0);
}

#[test]
fn degenerate_rectangles_map_without_faults() {
    let transform = DisplayTransform::new(1.0);
    let p = ScreenPoint::new(25.0, 25.0);

    let page_rect = transform.to_page_rect(&ScreenRect::new(p, p));

    assert_eq!(page_rect.area(), 0.0);
    assert!(page_rect.is_degenerate());
}

#[test]
fn normalized_orders_each_axis() {
    let rect = PageRect::new(10.0, 40.0, 2.0, 4.0);
    let n = rect.normalized();

    assert_eq!(n, PageRect::new(2.0, 4.0, 10.0, 40.0));
    assert!(n.width() > 0.0 && n.height() > 0.0);
}

#[test]
fn screen_rect_parses_from_string() {
    let rect = ScreenRect::from_string("10, 20, 110.5,60").unwrap();

    assert_eq!(rect.start, ScreenPoint::new(10.0, 20.0));
    assert_eq!(rect.end, ScreenPoint::new(110.5, 60.0));
    assert!(ScreenRect::from_string("1,2,3").is_err());
    assert!(ScreenRect::from_string("a,b,c,d").is_err());
}

#[test]
fn drag_protocol_yields_rect_only_after_finish() {
    let mut selection = DragSelection::new();
    assert!(selection.completed_rect().is_none());

    selection.begin_at(ScreenPoint::new(10.0, 10.0));
    selection.update_end(ScreenPoint::new(50.0, 30.0));
    selection.update_end(ScreenPoint::new(80.0, 45.0));
    assert!(selection.completed_rect().is_none(), "in-progress drag has no rect");

    let rect = selection.finish(ScreenPoint::new(110.0, 60.0)).unwrap();
    assert_eq!(rect.start, ScreenPoint::new(10.0, 10.0));
    assert_eq!(rect.end, ScreenPoint::new(110.0, 60.0));
    assert!(selection.has_selection());

    selection.clear();
    assert!(selection.completed_rect().is_none());
}

#[test]
fn updates_after_finish_are_ignored() {
    let mut selection = DragSelection::new();
    selection.begin_at(ScreenPoint::new(0.0, 0.0));
    let _ = selection.finish(ScreenPoint::new(10.0, 10.0));

    selection.update_end(ScreenPoint::new(500.0, 500.0));

    let rect = selection.completed_rect().unwrap();
    assert_eq!(rect.end, ScreenPoint::new(10.0, 10.0));
}
