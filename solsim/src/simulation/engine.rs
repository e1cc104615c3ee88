//! Single-threaded control loop
//!
//! poll input -> step physics (unless paused) -> render -> pace, repeated
//! until a quit event arrives. Input and rendering are collaborators behind
//! the [`InputSource`] and [`Renderer`] traits.

use std::thread;
use std::time::{Duration, Instant};

use super::error::SimError;
use super::session::{Frame, InputEvent, SimulationSession};

/// Produces the user commands for one loop iteration; must not block
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Draws one frame; failures are not reported back to the loop
pub trait Renderer {
    fn render(&mut self, frame: &Frame);
}

/// Fixed-rate limiter, sleeps out whatever is left of the frame period
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Option<Duration>,
    last: Option<Instant>,
}

impl FramePacer {
    /// `fps == 0` disables pacing
    pub fn new(fps: u32) -> Self {
        Self {
            period: (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64)),
            last: None,
        }
    }

    pub fn unpaced() -> Self {
        Self::new(0)
    }

    pub fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        if let Some(last) = self.last {
            let spent = last.elapsed();
            if spent < period {
                thread::sleep(period - spent);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Run the session until it stops running
/// A quit event still lets the current iteration finish. Returns the number
/// of completed iterations.
pub fn run_loop<I, R>(session: &mut SimulationSession, input: &mut I, renderer: &mut R, pacer: &mut FramePacer) -> Result<u64, SimError>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let mut iterations = 0;
    while session.is_running() {
        for event in input.poll() {
            session.handle(event);
        }

        if let Err(err) = session.step() {
            log::error!("stopping simulation on {}: {}", session.clock.label(), err);
            return Err(err);
        }

        renderer.render(&session.frame());
        pacer.wait();
        iterations += 1;
    }
    Ok(iterations)
}
