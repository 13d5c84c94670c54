//! The boundary between the cube model and whatever plays its motion.
//!
//! The cube hands every member rotation to an [`Animator`] and later polls it
//! for finished requests. Each request must be reported exactly once.

use std::time::Duration;

use crate::cubelet::Appearance;
use crate::geometry::Axis;

/// Identifies one rotation request.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRequest {
    pub ticket: Ticket,
    /// Cubelet id.
    pub cubelet: usize,
    pub axis: Axis,
    /// Signed: positive turns clockwise about the positive axis.
    pub degrees: i32,
    pub duration: Duration,
}

pub trait Animator {
    /// Starts playing a rotation.
    fn apply_rotation(&mut self, request: RotationRequest);

    /// Drains the tickets of rotations that have finished since the last call.
    fn completed(&mut self) -> Vec<Ticket>;

    /// Mirrors a presentation change.
    fn restyle(&mut self, _cubelet: usize, _appearance: &Appearance) {}
}

/// Finishes every rotation on the next poll. Used headless and in tests.
#[derive(Debug, Default)]
pub struct InstantAnimator {
    pending: Vec<Ticket>,
}

impl Animator for InstantAnimator {
    fn apply_rotation(&mut self, request: RotationRequest) {
        self.pending.push(request.ticket);
    }

    fn completed(&mut self) -> Vec<Ticket> {
        std::mem::take(&mut self.pending)
    }
}

/// Holds rotations until released by hand, for tests that need to observe a
/// twist mid-flight.
#[derive(Debug, Default)]
pub struct ManualAnimator {
    pub requests: Vec<RotationRequest>,
    released: Vec<Ticket>,
}

impl ManualAnimator {
    /// Releases every request issued so far.
    pub fn release_all(&mut self) {
        self.released
            .extend(self.requests.drain(..).map(|request| request.ticket));
    }

    /// Releases only the first `count` requests still held.
    pub fn release(&mut self, count: usize) {
        let count = count.min(self.requests.len());
        self.released
            .extend(self.requests.drain(..count).map(|request| request.ticket));
    }
}

impl Animator for ManualAnimator {
    fn apply_rotation(&mut self, request: RotationRequest) {
        self.requests.push(request);
    }

    fn completed(&mut self) -> Vec<Ticket> {
        std::mem::take(&mut self.released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(ticket: Ticket) -> RotationRequest {
        RotationRequest {
            ticket,
            cubelet: 0,
            axis: Axis::X,
            degrees: 90,
            duration: Duration::from_millis(250),
        }
    }

    #[test]
    fn test_instant_reports_each_ticket_once() {
        let mut animator = InstantAnimator::default();
        animator.apply_rotation(request(1));
        animator.apply_rotation(request(2));
        assert_eq!(animator.completed(), vec![1, 2]);
        assert!(animator.completed().is_empty());
    }

    #[test]
    fn test_manual_holds_until_released() {
        let mut animator = ManualAnimator::default();
        animator.apply_rotation(request(7));
        animator.apply_rotation(request(8));
        assert!(animator.completed().is_empty());
        animator.release(1);
        assert_eq!(animator.completed(), vec![7]);
        animator.release_all();
        assert_eq!(animator.completed(), vec![8]);
    }
}
