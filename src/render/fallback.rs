/// Flat 2D substitute for the 3D scene, used when the render surface
/// capability check fails. Produces the SVG silhouette, a looping idle
/// keyframes block, and a scroll-driven transform string.
///
/// The idle animation targets the inner `.airplane-group` while the scroll
/// transform is written to the outer container's style, so the two compose
/// by nesting instead of overwriting each other.
#[derive(Debug, Default)]
pub struct FallbackRenderer;

const BASE_X: f32 = 100.0;
const BASE_Y: f32 = 80.0;

impl FallbackRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Vector illustration: ellipse fuselage, smaller ellipse cockpit, two
    /// wedge wings, a tail block, and two circular engine nacelles.
    pub fn svg_markup(&self) -> String {
        format!(
            r##"<svg viewBox="0 0 400 200" class="fallback-airplane">
  <defs>
    <linearGradient id="planeGradient" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:#ffffff"/>
      <stop offset="100%" style="stop-color:#ADD8E6"/>
    </linearGradient>
  </defs>
  <g class="airplane-group" transform="translate({BASE_X}, {BASE_Y})">
    <ellipse cx="100" cy="20" rx="80" ry="15" fill="url(#planeGradient)"/>
    <ellipse cx="160" cy="15" rx="20" ry="10" fill="#87CEEB" opacity="0.8"/>
    <path d="M60,20 L140,5 L140,35 L60,20" fill="url(#planeGradient)"/>
    <path d="M10,20 L40,5 L40,35 L10,20" fill="url(#planeGradient)"/>
    <rect x="15" y="5" width="20" height="30" fill="url(#planeGradient)"/>
    <circle cx="80" cy="35" r="8" fill="#ADD8E6"/>
    <circle cx="80" cy="5" r="8" fill="#ADD8E6"/>
  </g>
</svg>"##
        )
    }

    /// Idle float: 3 second loop, 10px bob, 2 degree rotation
    pub fn keyframes_css(&self) -> String {
        format!(
            r#"@keyframes floatAirplane {{
  0%, 100% {{ transform: translate({BASE_X}px, {BASE_Y}px) rotate(0deg); }}
  50% {{ transform: translate({BASE_X}px, {y_up}px) rotate(2deg); }}
}}
.fallback-airplane {{
  width: 100%;
  height: 100%;
}}"#,
            y_up = BASE_Y - 10.0,
        )
    }

    /// Scroll-reactive drift: horizontal drift, inverse vertical drift and a
    /// rotation, each linear in the scroll fraction.
    pub fn scroll_transform(&self, fraction: f32) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px) rotate({:.1}deg)",
            BASE_X + fraction * 100.0,
            BASE_Y - fraction * 30.0,
            fraction * 10.0,
        )
    }
}
