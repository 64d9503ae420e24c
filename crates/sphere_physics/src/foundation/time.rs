//! Time management utilities

/// Accumulator that converts variable frame times into fixed simulation steps
///
/// The world step itself accepts any `dt`; drivers that want reproducible
/// results feed their frame time through this and call the step once per
/// returned substep.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
    total_steps: u64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl FixedTimestep {
    /// Create a new accumulator with the given step length in seconds
    pub fn new(step: f32) -> Self {
        Self {
            step: step.max(f32::EPSILON),
            accumulator: 0.0,
            max_substeps: 8,
            total_steps: 0,
        }
    }

    /// Limit how many substeps a single frame may produce
    ///
    /// Time beyond the limit is discarded so a long stall cannot trigger a
    /// spiral of ever longer frames.
    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    /// Fixed step length in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add frame time and return the number of fixed steps to run
    pub fn advance(&mut self, frame_time: f32) -> u32 {
        if frame_time > 0.0 {
            self.accumulator += frame_time;
        }

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }

        if steps == self.max_substeps && self.accumulator >= self.step {
            log::debug!(
                "Dropping {:.4}s of simulation time after {} substeps",
                self.accumulator,
                steps
            );
            self.accumulator %= self.step;
        }

        self.total_steps += u64::from(steps);
        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Total steps produced since creation
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Clear accumulated time and step count
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.total_steps = 0;
    }
}
