//! Animation clock and the tick-driven frame loop.

/// Per-tick increments. Animation speed follows the display refresh rate,
/// not wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStep {
    pub time: f64,
    pub rotation: f64,
}

impl FrameStep {
    pub const DEFAULT: Self = Self {
        time: 0.016,
        rotation: 0.005,
    };
}

impl Default for FrameStep {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shader time and mesh rotation. Both only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameState {
    pub time: f64,
    pub rotation: f64,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn advance(self, step: FrameStep) -> Self {
        Self {
            time: self.time + step.time,
            rotation: self.rotation + step.rotation,
        }
    }

    pub fn time_f32(&self) -> f32 {
        self.time as f32
    }

    pub fn rotation_f32(&self) -> f32 {
        self.rotation as f32
    }
}

/// Host primitive that hands out display-refresh ticks.
///
/// Returning `false` means the host will not schedule another tick; the loop
/// ends there. There is no other way to stop it.
pub trait TickSource {
    fn next_tick(&mut self) -> bool;
}

/// Anything that does one frame's worth of work.
pub trait Frame {
    fn frame(&mut self, state: &FrameState);
}

impl<F: FnMut(&FrameState)> Frame for F {
    fn frame(&mut self, state: &FrameState) {
        self(state)
    }
}

/// Owns the only mutable frame state and runs the per-tick sequence:
/// advance first, then hand the fresh state to the frame body.
#[derive(Debug)]
pub struct Animator<F> {
    state: FrameState,
    step: FrameStep,
    body: F,
}

impl<F: Frame> Animator<F> {
    pub fn new(body: F) -> Self {
        Self::with_step(body, FrameStep::DEFAULT)
    }

    pub fn with_step(body: F, step: FrameStep) -> Self {
        Self {
            state: FrameState::new(),
            step,
            body,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn body(&self) -> &F {
        &self.body
    }

    pub fn tick(&mut self) {
        self.state = self.state.advance(self.step);
        self.body.frame(&self.state);
    }

    /// Ticks once per tick the source grants, returning the number of frames
    /// drawn.
    pub fn run<T: TickSource>(&mut self, ticks: &mut T) -> u64 {
        let mut frames = 0;
        while ticks.next_tick() {
            self.tick();
            frames += 1;
        }
        log::debug!("tick source exhausted after {frames} frames");
        frames
    }
}
