// Shared tuning constants for the hero canvas and the scroll/pointer effects.
// Pure values only; nothing in here touches the DOM.

// Orb field
pub const ORB_COUNT: usize = 7;
pub const ORB_SPAWN_MIN: f32 = 0.15; // normalized spawn band
pub const ORB_SPAWN_MAX: f32 = 0.85;
pub const ORB_RADIUS_MIN: f32 = 90.0; // css px
pub const ORB_RADIUS_MAX: f32 = 190.0;
pub const ORB_MAX_VX: f32 = 0.0009; // normalized units per frame
pub const ORB_MAX_VY: f32 = 0.0007;

// Soft reflective band the orbs drift inside
pub const ORB_BAND_MIN: f32 = 0.05;
pub const ORB_BAND_MAX: f32 = 0.95;

// Palette as [hue, saturation %, lightness %, alpha]
pub const ORB_PALETTE: [[f32; 4]; 3] = [
    [220.0, 90.0, 60.0, 0.10],  // blue
    [355.0, 85.0, 58.0, 0.08],  // red
    [210.0, 100.0, 92.0, 0.05], // pale blue-white
];

// Canvas sizing
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MIN_CANVAS_WIDTH: f64 = 320.0;
pub const MIN_CANVAS_HEIGHT: f64 = 280.0;

// Visibility gate
pub const HERO_VISIBILITY_THRESHOLD: f64 = 0.05;

// Canvas opacity vs. scroll offset
pub const OPACITY_FADE_DISTANCE: f64 = 520.0; // px of scroll to reach the floor
pub const OPACITY_CEILING: f64 = 0.9;
pub const OPACITY_FLOOR: f64 = 0.55;

// Navbar / progress
pub const NAV_SCROLLED_OFFSET: f64 = 8.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.12;

// Parallax
pub const PARALLAX_DEFAULT_STRENGTH: f64 = 0.08;
pub const PARALLAX_RANGE_PX: f64 = 24.0;
pub const PARALLAX_FALLBACK_VIEWPORT: f64 = 800.0;

// Magnetic buttons
pub const MAGNET_MAX_OFFSET: f64 = 10.0; // px
pub const MAGNET_DIVISOR: f64 = 8.0;
pub const MAGNET_GLOW_GAIN: f64 = 1.4;

// Shared micro-interaction timing
pub const TRANSITION_MS: i32 = 280;
