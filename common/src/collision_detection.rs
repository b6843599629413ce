use crate::shapes::Rect;

// Edges are exclusive, so rectangles that only touch do not overlap
pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.bottom() < b.top() && a.top() > b.bottom()
}
