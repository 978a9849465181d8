/// Normalized scroll progress: 0 at the top of the page, 1 at the bottom.
///
/// When the content is no taller than the viewport there is no scrollable
/// range, and the fraction is defined as 0 rather than dividing by zero.
/// Values slightly above 1 are possible with overscroll and are passed
/// through unchanged.
pub fn scroll_fraction(scroll_y: f32, content_height: f32, viewport_height: f32) -> f32 {
    let max_scroll = content_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).max(0.0)
}
