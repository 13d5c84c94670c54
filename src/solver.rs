//! Solver contract and a solver that undoes recorded history.

use log::debug;

use crate::animator::Animator;
use crate::cube::Cube;
use crate::twist::Twist;

/// Consulted by [`Cube::tick`] whenever the twist queue runs dry while the
/// cube is solving.
pub trait Solver<A: Animator> {
    /// Queues zero or more twists on `cube`. Returns whether it wants to be
    /// consulted again.
    fn consider(&mut self, cube: &mut Cube<A>) -> bool;
}

/// Solves by playing the dispatched twists backwards.
///
/// The record is captured on the first consultation, so the twists it queues
/// itself are never undone.
#[derive(Debug, Default)]
pub struct Rewind {
    remaining: Option<Vec<Twist>>,
}

impl Rewind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Twists still to undo, or `None` before the first consultation.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining.as_ref().map(Vec::len)
    }
}

impl<A: Animator> Solver<A> for Rewind {
    fn consider(&mut self, cube: &mut Cube<A>) -> bool {
        let remaining = self
            .remaining
            .get_or_insert_with(|| cube.dispatched().to_vec());

        if cube.is_solved() && cube.is_engaged() == 0 {
            debug!("solved with {} twists left unplayed", remaining.len());
            remaining.clear();
            return false;
        }
        match remaining.pop() {
            Some(twist) => {
                let inverse = twist.inverse();
                debug!("rewinding {twist} with {inverse}");
                cube.twist_queue.push(inverse);
                true
            }
            None => false,
        }
    }
}
