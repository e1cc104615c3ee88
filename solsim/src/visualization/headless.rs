//! Window-less front end: a fixed frame budget as input and a log-based
//! renderer.

use crate::simulation::consts::AU;
use crate::simulation::engine::{run_loop, FramePacer, InputSource, Renderer};
use crate::simulation::error::SimError;
use crate::simulation::session::{Frame, InputEvent, SimulationSession};

/// Emits `Quit` on the last of `frames` polls and nothing before it
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl InputSource for FrameBudget {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            vec![InputEvent::Quit]
        } else {
            Vec::new()
        }
    }
}

/// Logs the date and body pixel positions every `every` frames
#[derive(Debug, Clone)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.frames % self.every != 0 {
            return;
        }
        let positions: Vec<String> = frame
            .bodies
            .iter()
            .map(|b| format!("({:.1}, {:.1})", b.position.0, b.position.1))
            .collect();
        log::info!("{} px {}", frame.date_label, positions.join(" "));
    }
}

/// Run `frames` unpaced iterations and log where every body ended up
pub fn run_headless(session: &mut SimulationSession, frames: u64, log_every: u64) -> Result<u64, SimError> {
    let mut input = FrameBudget::new(frames);
    let mut renderer = LogRenderer::new(log_every);
    let mut pacer = FramePacer::unpaced();

    let iterations = run_loop(session, &mut input, &mut renderer, &mut pacer)?;

    log::info!("finished on {} after {} frames", session.clock.label(), iterations);
    for b in session.system.bodies() {
        log::info!(
            "{:>8}: x = ({:+.4}, {:+.4}) AU, |v| = {:.3} km/s",
            b.name,
            b.x.x / AU,
            b.x.y / AU,
            b.v.norm() / 1000.0
        );
    }
    Ok(iterations)
}
