//! Distance-to-pixel mapping and user zoom.
//!
//! Zooming changes the view scale, the parallax scale of the background
//! stars, and the display radius of every body. Mass, position and velocity
//! are never touched here.

use super::consts::{
    H_OFFSET, RADIUS_ZOOM_IN, RADIUS_ZOOM_OUT, SCALE, STAR_ZOOM_IN, STAR_ZOOM_OUT, W_OFFSET, ZOOM_IN,
    ZOOM_OUT,
};
use super::states::{Body, NVec2};

/// Zoom direction requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zoom {
    In,
    Out,
}

impl Zoom {
    /// (scale, body radius, star zoom) multipliers
    pub fn factors(self) -> (f64, f64, f64) {
        match self {
            Zoom::In => (ZOOM_IN, RADIUS_ZOOM_IN, STAR_ZOOM_IN),
            Zoom::Out => (ZOOM_OUT, RADIUS_ZOOM_OUT, STAR_ZOOM_OUT),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    scale: f64, // pixels per meter
    star_zoom: f64, // pixels per meter for the star layer
    pub offset: (f64, f64), // pixel position of the origin, y down
    pub draw_orbits: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SCALE, (W_OFFSET, H_OFFSET))
    }
}

impl ViewState {
    /// The star layer starts at the same scale as the bodies
    pub fn new(scale: f64, offset: (f64, f64)) -> Self {
        Self {
            scale,
            star_zoom: scale,
            offset,
            draw_orbits: false,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn star_zoom(&self) -> f64 {
        self.star_zoom
    }

    pub fn zoom(&mut self, zoom: Zoom, bodies: &mut [Body]) {
        let (scale, radius, star) = zoom.factors();
        self.scale *= scale;
        self.star_zoom *= star;
        for body in bodies.iter_mut() {
            body.radius *= radius;
        }
        log::debug!("zoom {:?}: scale {:e} px/m, star zoom {:e} px/m", zoom, self.scale, self.star_zoom);
    }

    pub fn zoom_in(&mut self, bodies: &mut [Body]) {
        self.zoom(Zoom::In, bodies);
    }

    pub fn zoom_out(&mut self, bodies: &mut [Body]) {
        self.zoom(Zoom::Out, bodies);
    }

    /// Pixel position of a physical position
    pub fn to_screen(&self, x: &NVec2) -> (f64, f64) {
        (x.x * self.scale + self.offset.0, x.y * self.scale + self.offset.1)
    }

    /// Pixel position of a background star
    pub fn star_to_screen(&self, x: &NVec2) -> (f64, f64) {
        (x.x * self.star_zoom + self.offset.0, x.y * self.star_zoom + self.offset.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::consts::AU;
    use crate::simulation::states::System;

    #[test]
    fn origin_maps_to_offset() {
        let view = ViewState::default();
        assert_eq!(view.to_screen(&NVec2::zeros()), (W_OFFSET, H_OFFSET));
    }

    #[test]
    fn one_au_is_245_pixels() {
        let view = ViewState::default();
        let (px, py) = view.to_screen(&NVec2::new(AU, -AU));
        assert!((px - (W_OFFSET + 245.0)).abs() < 1e-9);
        assert!((py - (H_OFFSET - 245.0)).abs() < 1e-9);
    }

    #[test]
    fn zoom_in_scales_radius_not_physics() {
        let mut sys = System::new();
        sys.add_body("a", NVec2::new(1.0, 2.0), NVec2::new(3.0, 4.0), 5.0, 10.0, [0, 0, 0]);
        let mut view = ViewState::default();

        view.zoom_in(sys.bodies_mut());

        let b = &sys.bodies()[0];
        assert!((b.radius - 11.0).abs() < 1e-12);
        assert_eq!(b.x, NVec2::new(1.0, 2.0));
        assert_eq!(b.v, NVec2::new(3.0, 4.0));
        assert_eq!(b.mass(), 5.0);
        assert!((view.scale() / SCALE - 1.1).abs() < 1e-12);
        assert!((view.star_zoom() / SCALE - 1.005).abs() < 1e-12);
    }
}
