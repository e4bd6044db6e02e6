// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::iter::FusedIterator;

pub const DEFAULT_STEPS: usize = 30;

/// Linear interpolation from the last actual value to a forecast, in `steps` frames.
///
/// A `Transition` is a plain value: every call to [`Transition::iter`] replays
/// the same sequence from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Decimal,
    pub to: Decimal,
    pub steps: usize,
}

impl Transition {
    pub fn new(from: Decimal, to: Decimal, steps: usize) -> Self {
        Self { from, to, steps }
    }

    /// Value at frame `i` of `steps`; frame `steps` is exactly `to`.
    ///
    /// Endpoints too far apart for `to - from` fall back to the weighted form
    /// `from·(1−w) + to·w`.
    pub fn value_at(&self, i: usize) -> Decimal {
        if i >= self.steps {
            return self.to;
        }
        let (i, k) = (Decimal::from(i), Decimal::from(self.steps));
        self.to
            .checked_sub(self.from)
            .and_then(|span| span.checked_mul(i))
            .and_then(|scaled| scaled.checked_div(k))
            .and_then(|offset| self.from.checked_add(offset))
            .or_else(|| {
                let w = i.checked_div(k)?;
                let head = self.from.checked_mul(Decimal::ONE.checked_sub(w)?)?;
                head.checked_add(self.to.checked_mul(w)?)
            })
            .unwrap_or(self.to)
    }

    pub fn iter(&self) -> TransitionIter {
        TransitionIter {
            transition: *self,
            front: 1,
            back: self.steps,
        }
    }
}

impl IntoIterator for Transition {
    type Item = Decimal;
    type IntoIter = TransitionIter;

    fn into_iter(self) -> TransitionIter {
        self.iter()
    }
}

impl IntoIterator for &Transition {
    type Item = Decimal;
    type IntoIter = TransitionIter;

    fn into_iter(self) -> TransitionIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct TransitionIter {
    transition: Transition,
    front: usize,
    back: usize,
}

impl Iterator for TransitionIter {
    type Item = Decimal;

    fn next(&mut self) -> Option<Decimal> {
        if self.front > self.back {
            return None;
        }
        let v = self.transition.value_at(self.front);
        self.front += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back + 1).saturating_sub(self.front);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for TransitionIter {
    fn next_back(&mut self) -> Option<Decimal> {
        if self.front > self.back {
            return None;
        }
        let v = self.transition.value_at(self.back);
        self.back -= 1;
        Some(v)
    }
}

impl ExactSizeIterator for TransitionIter {}

impl FusedIterator for TransitionIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn four_steps_from_100_to_160() {
        let t = Transition::new(d(100), d(160), 4);
        let values: Vec<Decimal> = t.iter().collect();
        assert_eq!(values, vec![d(115), d(130), d(145), d(160)]);
    }

    #[test]
    fn sequence_is_replayable() {
        let t = Transition::new(d(10), d(-5), 7);
        let first: Vec<Decimal> = t.into_iter().collect();
        let second: Vec<Decimal> = (&t).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
        assert_eq!(*first.last().unwrap(), d(-5));
    }

    #[test]
    fn last_frame_is_exactly_the_target() {
        let target = Decimal::new(1000, 3) / d(3);
        let t = Transition::new(d(0), target, 30);
        assert_eq!(t.iter().last(), Some(target));
        assert_eq!(t.iter().len(), DEFAULT_STEPS);
    }

    #[test]
    fn progress_is_monotonic() {
        let t = Transition::new(d(200), d(50), 9);
        let values: Vec<Decimal> = t.iter().collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]));
        assert!(values.iter().all(|v| *v < d(200) && *v >= d(50)));
    }

    #[test]
    fn extreme_endpoints_do_not_overflow() {
        let t = Transition::new(Decimal::MIN, Decimal::MAX, 4);
        let values: Vec<Decimal> = t.iter().collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values.last(), Some(&Decimal::MAX));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_steps_is_empty() {
        assert_eq!(Transition::new(d(1), d(2), 0).iter().count(), 0);
    }

    #[test]
    fn reversed_iteration_meets_in_the_middle() {
        let mut it = Transition::new(d(0), d(40), 4).iter();
        assert_eq!(it.next_back(), Some(d(40)));
        assert_eq!(it.next(), Some(d(10)));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some(d(30)));
        assert_eq!(it.next(), Some(d(20)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
