//! Errors raised while building or dispatching twists.

use thiserror::Error;

use crate::geometry::Axis;

/// Reasons a twist is refused.
///
/// Refused twists never change cube state; the caller logs and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwistError {
    #[error("{0:?} is not a twist command, expected one of XLMRYUEDZFSB in either case")]
    UnknownCommand(char),
    #[error("cannot twist {command}: the {target} is engaged on the {axis} axis")]
    Engaged {
        command: char,
        target: &'static str,
        axis: Axis,
    },
    #[error("cannot twist {0} while cubelets are still tweening")]
    Tweening(char),
    #[error("cannot twist {command} by {degrees} degrees, the most is {max}", max = crate::twist::MAX_DEGREES)]
    TooFar { command: char, degrees: u32 },
}
