//! The running simulation session
//!
//! `SimulationSession` is the runtime bundle built by
//! [`crate::simulation::scenario`]: bodies, force set, parameters, calendar
//! clock, view state and the decorative star field, plus the pause/quit
//! flags driven by user input.
//!
//! Both front ends (the Bevy viewer and the headless loop) only talk to the
//! session through [`SimulationSession::handle`], [`SimulationSession::step`]
//! and [`SimulationSession::frame`].

use bevy::prelude::Resource;

use super::clock::SimulationClock;
use super::consts::WHITE;
use super::error::SimError;
use super::forces::ForceSet;
use super::integrator::symplectic_euler;
use super::params::Parameters;
use super::states::{NVec2, Rgb, System};
use super::view::{ViewState, Zoom};

/// Discrete user commands, polled once per loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    TogglePause,
    ZoomIn,
    ZoomOut,
}

/// Decorative background star; never part of the physics
#[derive(Debug, Clone)]
pub struct BackgroundStar {
    pub x: NVec2, // meters
    pub radius: f64, // pixels
    pub color: Rgb,
}

impl BackgroundStar {
    pub fn new(x: NVec2, radius: f64) -> Self {
        Self { x, radius, color: WHITE }
    }
}

/// One circle to draw, in screen pixels (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub position: (f64, f64),
    pub radius: f64,
    pub color: Rgb,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub stars: Vec<DrawItem>,
    pub bodies: Vec<DrawItem>, // same order as `System::bodies`
    pub orbits: Vec<Vec<(f64, f64)>>, // empty unless orbit drawing is on
    pub date_label: String,
    pub paused: bool,
}

#[derive(Resource)]
pub struct SimulationSession {
    pub system: System,
    pub forces: ForceSet,
    pub parameters: Parameters,
    pub clock: SimulationClock,
    pub view: ViewState,
    pub stars: Vec<BackgroundStar>,
    paused: bool,
    running: bool,
}

impl SimulationSession {
    pub fn new(system: System, forces: ForceSet, parameters: Parameters, clock: SimulationClock, view: ViewState) -> Self {
        Self {
            system,
            forces,
            parameters,
            clock,
            view,
            stars: Vec::new(),
            paused: false,
            running: true,
        }
    }

    pub fn with_stars(mut self, stars: Vec<BackgroundStar>) -> Self {
        self.stars = stars;
        self
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one input event; serviced whether or not the session is paused
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                log::info!("quit requested on {}", self.clock.label());
                self.running = false;
            }
            InputEvent::TogglePause => {
                self.paused = !self.paused;
                log::info!("{} on {}", if self.paused { "paused" } else { "resumed" }, self.clock.label());
            }
            InputEvent::ZoomIn => self.view.zoom(Zoom::In, self.system.bodies_mut()),
            InputEvent::ZoomOut => self.view.zoom(Zoom::Out, self.system.bodies_mut()),
        }
    }

    /// Advance physics and the calendar by one step unless paused
    /// Returns whether a step was taken
    pub fn step(&mut self) -> Result<bool, SimError> {
        if self.paused {
            return Ok(false);
        }
        symplectic_euler(&mut self.system, &self.forces, &self.parameters)?;
        self.clock.advance()?;
        Ok(true)
    }

    /// Describe the current state in screen space
    pub fn frame(&self) -> Frame {
        let view = &self.view;

        let stars = self.stars.iter().map(|s| DrawItem {
            position: view.star_to_screen(&s.x),
            radius: s.radius,
            color: s.color,
        }).collect();

        let bodies = self.system.bodies().iter().map(|b| DrawItem {
            position: view.to_screen(&b.x),
            radius: b.radius,
            color: b.color,
        }).collect();

        let orbits = if view.draw_orbits {
            self.system.bodies().iter()
                .map(|b| b.trajectory.iter().map(|x| view.to_screen(x)).collect())
                .collect()
        } else {
            Vec::new()
        };

        Frame {
            stars,
            bodies,
            orbits,
            date_label: self.clock.label(),
            paused: self.paused,
        }
    }
}
