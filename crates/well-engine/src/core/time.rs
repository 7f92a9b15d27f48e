/// Fixed timestep accumulator with a global time scale.
///
/// A time scale of 0 freezes gameplay: no steps are produced, so neither
/// physics nor pending timers advance.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated (scaled) time from variable frame deltas.
    accumulator: f32,
    /// Upper bound on steps per frame to prevent a spiral of death.
    max_steps: u32,
    time_scale: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 10,
            time_scale: 1.0,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Set the time scale. Negative values are treated as 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
        if self.time_scale == 0.0 {
            // A frozen clock must not release a burst of steps on resume.
            self.accumulator = 0.0;
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0) * self.time_scale;
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.25), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(0.25);
        assert_eq!(ts.accumulate(0.125), 0);
        assert_eq!(ts.accumulate(0.125), 1);
    }

    #[test]
    fn caps_at_max_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0).with_max_steps(4);
        assert_eq!(ts.accumulate(1.0), 4);
    }

    #[test]
    fn zero_time_scale_freezes() {
        let mut ts = FixedTimestep::new(0.25);
        ts.accumulate(0.125);
        ts.set_time_scale(0.0);
        assert_eq!(ts.accumulate(10.0), 0);
        ts.set_time_scale(1.0);
        // The half step from before the freeze was discarded.
        assert_eq!(ts.accumulate(0.125), 0);
        assert_eq!(ts.accumulate(0.125), 1);
    }
}
