// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Cooperative, tick-driven playback of a transition sequence.
//!
//! The driver owns the cadence: each `tick` hands out one frame. Starting a
//! new playback discards whatever was in flight, and dropping the value
//! cancels it.

use super::transition::{Transition, TransitionIter};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Playback {
    transition: Transition,
    frames: TransitionIter,
    shown: usize,
}

impl Playback {
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            frames: transition.iter(),
            shown: 0,
        }
    }

    /// Next frame, or `None` once the target has been shown.
    pub fn tick(&mut self) -> Option<Decimal> {
        let v = self.frames.next()?;
        self.shown += 1;
        Some(v)
    }

    /// Replaces the sequence in flight with a fresh one; nothing is merged.
    pub fn restart(&mut self, transition: Transition) {
        *self = Self::new(transition);
    }

    pub fn is_finished(&self) -> bool {
        self.frames.len() == 0
    }

    /// Fraction of frames already shown, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.transition.steps == 0 {
            return 1.0;
        }
        self.shown as f64 / self.transition.steps as f64
    }

    /// Runs the remaining frames through `sink`, calling `pause` between ticks.
    pub fn drive<F, P>(&mut self, mut sink: F, mut pause: P)
    where
        F: FnMut(Decimal, f64),
        P: FnMut(),
    {
        while let Some(v) = self.tick() {
            sink(v, self.progress());
            if !self.is_finished() {
                pause();
            }
        }
    }
}
