//! Core state types for the solar system simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body`   one gravitating point mass plus its display attributes
//! - `System` the fixed set of bodies and the elapsed simulated time `t`
//!
//! Positions are meters and velocities meters/second, in a heliocentric plane.
//! `radius` and `color` are presentation only; the integrator never reads them.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Display colour as 8-bit sRGB components
pub type Rgb = [u8; 3];

/// Identity of a body inside its [`System`]
///
/// Assigned once by [`System::add_body`] and never reused, so two bodies with
/// equal position/velocity are still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    pub name: String,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    m: f64, // mass, fixed for the session
    pub radius: f64, // display radius in pixels, scaled by zoom
    pub color: Rgb, // display colour
    pub trajectory: Vec<NVec2>, // one position per simulated step
}

impl Body {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Identity comparison, never by value
    pub fn is(&self, other: &Body) -> bool {
        self.id == other.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>, // collection of bodies, membership fixed after setup
    pub t: f64, // elapsed simulated seconds
    next_id: usize,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body at position `x` with velocity `v`, returning its new id
    pub fn add_body(&mut self, name: impl Into<String>, x: NVec2, v: NVec2, m: f64, radius: f64, color: Rgb) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            name: name.into(),
            x,
            v,
            m,
            radius,
            color,
            trajectory: Vec::new(),
        });
        id
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the bodies; the slice cannot grow or shrink
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Sum of m * v over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().fold(NVec2::zeros(), |p, b| p + b.v * b.m)
    }
}
