use rat_datepicker::overlay::{keep_in_boundary, panel_area};
use ratatui::layout::Rect;

#[test]
fn test_panel_area0() {
    // below the anchor, left aligned, gap inbetween
    let anchor = Rect::new(5, 2, 26, 1);
    assert_eq!(panel_area(anchor, 1, 23, 8), Rect::new(5, 4, 26, 8));
    assert_eq!(panel_area(anchor, 0, 23, 8), Rect::new(5, 3, 26, 8));
    assert_eq!(panel_area(anchor, 3, 23, 8), Rect::new(5, 6, 26, 8));
}

#[test]
fn test_panel_area1() {
    // anchor width is a minimum hint
    let narrow = Rect::new(5, 2, 10, 1);
    assert_eq!(panel_area(narrow, 1, 23, 8).width, 23);

    let wide = Rect::new(5, 2, 40, 1);
    assert_eq!(panel_area(wide, 1, 23, 8).width, 40);
}

#[test]
fn test_boundary0() {
    let boundary = Rect::new(0, 0, 100, 50);

    // fits as is
    assert_eq!(
        keep_in_boundary(Rect::new(5, 4, 23, 8), boundary),
        Rect::new(5, 4, 23, 8)
    );

    // shift left
    assert_eq!(
        keep_in_boundary(Rect::new(90, 5, 23, 8), boundary),
        Rect::new(77, 5, 23, 8)
    );

    // shift up
    assert_eq!(
        keep_in_boundary(Rect::new(10, 45, 23, 8), boundary),
        Rect::new(10, 42, 23, 8)
    );

    // both
    assert_eq!(
        keep_in_boundary(Rect::new(95, 48, 23, 8), boundary),
        Rect::new(77, 42, 23, 8)
    );
}

#[test]
fn test_boundary1() {
    // offset boundary
    let boundary = Rect::new(10, 10, 40, 20);

    assert_eq!(
        keep_in_boundary(Rect::new(2, 3, 23, 8), boundary),
        Rect::new(10, 10, 23, 8)
    );
    assert_eq!(
        keep_in_boundary(Rect::new(45, 25, 23, 8), boundary),
        Rect::new(27, 22, 23, 8)
    );
}

#[test]
fn test_boundary2() {
    // too small, shrink after shifting
    let boundary = Rect::new(0, 0, 20, 6);
    assert_eq!(
        keep_in_boundary(Rect::new(0, 0, 23, 8), boundary),
        Rect::new(0, 0, 20, 6)
    );

    let boundary = Rect::new(0, 0, 0, 0);
    assert_eq!(
        keep_in_boundary(Rect::new(5, 5, 23, 8), boundary),
        Rect::new(0, 0, 0, 0)
    );
}
