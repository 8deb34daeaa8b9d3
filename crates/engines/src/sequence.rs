//! Ordered hand-off between curve generators.
//!
//! A [`Sequence`] renders its active stage once per tick. When that stage
//! completes, the next stage becomes active. The last stage is terminal: it
//! keeps receiving ticks, which become no-ops once it is complete.

use rosette_core::{CurveError, CurveGenerator, Surface};

/// An ordered list of generators advanced on completion.
pub struct Sequence {
    stages: Vec<Box<dyn CurveGenerator>>,
    active: usize,
    frames: usize,
}

impl Sequence {
    /// Creates a sequence starting at the first stage.
    ///
    /// Returns `CurveError::EmptySequence` if `stages` is empty.
    pub fn new(stages: Vec<Box<dyn CurveGenerator>>) -> Result<Self, CurveError> {
        if stages.is_empty() {
            return Err(CurveError::EmptySequence);
        }
        Ok(Self {
            stages,
            active: 0,
            frames: 0,
        })
    }

    /// Renders one frame of the active stage, then hands off if it completed.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        self.frames += 1;
        let terminal = self.active + 1 == self.stages.len();
        let stage = &mut self.stages[self.active];
        stage.render(surface);
        if terminal || !stage.is_complete() {
            return;
        }
        let (finished, steps) = (stage.name(), stage.steps());
        self.active += 1;
        log::debug!(
            "frame {}: {finished} complete after {steps} steps, switching to {}",
            self.frames,
            self.stages[self.active].name()
        );
    }

    /// The stage that the next tick will render.
    pub fn active(&self) -> &dyn CurveGenerator {
        self.stages[self.active].as_ref()
    }

    /// Index of the active stage.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of stages.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Whether the terminal stage has completed.
    pub fn is_finished(&self) -> bool {
        self.active + 1 == self.stages.len() && self.stages[self.active].is_complete()
    }

    /// Ticks received so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Ticks that still draw something, summed over the active and later stages.
    ///
    /// Saturates at `usize::MAX` for stages too fine to count.
    pub fn remaining_steps(&self) -> usize {
        self.stages[self.active..]
            .iter()
            .fold(0usize, |acc, stage| acc.saturating_add(stage.remaining_steps()))
    }
}
