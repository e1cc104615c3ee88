//! Physical and display constants shared by the simulation and the viewer.

/// Meters in one astronomical unit
pub const AU: f64 = 1.495979e11;
/// Newton's gravitational constant
pub const G: f64 = 6.67428e-11;
/// Seconds in one simulated step (one Earth day)
pub const TIME_DELTA: f64 = 60.0 * 60.0 * 24.0;
/// Converts ephemeris per-day velocities to per-second
pub const INV_TD: f64 = 1.0 / TIME_DELTA;
/// Pixels per AU in the initial view
pub const PIXELS_PER_AU: f64 = 245.0;
/// Initial distance-to-pixel scale
pub const SCALE: f64 = PIXELS_PER_AU / AU;

/// Zoom factors; the `_OUT` values are exact reciprocals of the `_IN` values
pub const ZOOM_IN: f64 = 1.1;
pub const ZOOM_OUT: f64 = 1.0 / ZOOM_IN;
pub const RADIUS_ZOOM_IN: f64 = 1.1;
pub const RADIUS_ZOOM_OUT: f64 = 1.0 / RADIUS_ZOOM_IN;
pub const STAR_ZOOM_IN: f64 = 1.005;
pub const STAR_ZOOM_OUT: f64 = 1.0 / STAR_ZOOM_IN;

/// Window geometry; the heliocentric origin is drawn at (W_OFFSET, H_OFFSET)
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const W_OFFSET: f64 = 435.0;
pub const H_OFFSET: f64 = 385.0;

/// Rendered frames (and simulated days) per wall-clock second
pub const FRAME_RATE: u32 = 45;

/// Background star field
pub const STAR_COUNT: usize = 200;
pub const STAR_EXTENT: f64 = 2.0 * AU;
pub const STAR_RADIUS_MIN: f64 = 1.0;
pub const STAR_RADIUS_MAX: f64 = 2.5;

pub const WHITE: [u8; 3] = [255, 255, 255];
