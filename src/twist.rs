//! Twists: parsed, canonical rotation commands.
//!
//! | Letter        | Target                                  | Axis |
//! |---------------|-----------------------------------------|------|
//! | X             | whole cube, turning like the right face | X    |
//! | L, M, R       | left face, middle slice, right face     | X    |
//! | Y             | whole cube, turning like the up face    | Y    |
//! | U, E, D       | up face, equator slice, down face       | Y    |
//! | Z             | whole cube, turning like the front face | Z    |
//! | F, S, B       | front face, standing slice, back face   | Z    |
//!
//! Uppercase turns clockwise as seen looking at the named face; lowercase
//! turns anticlockwise. A twist may carry an explicit number of degrees,
//! otherwise it turns to the next peg.

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::direction::Direction;
use crate::error::TwistError;
use crate::geometry::{Axis, Sense};
use crate::grid::Layer;

use Sense::{Anticlockwise as Anti, Clockwise as Cw};

/// What an uppercase command letter moves and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub letter: char,
    pub axis: Axis,
    pub layer: Layer,
    /// Rotation about the positive axis for the uppercase letter.
    pub sense: Sense,
    /// Name of the slice moved, or "cube".
    pub target: &'static str,
    pub group: &'static str,
}

const fn command(
    letter: char,
    axis: Axis,
    layer: Layer,
    sense: Sense,
    target: &'static str,
    group: &'static str,
) -> Command {
    Command {
        letter,
        axis,
        layer,
        sense,
        target,
        group,
    }
}

/// The twelve commands, in notation order.
pub const COMMANDS: [Command; 12] = [
    command('X', Axis::X, Layer::Whole, Cw, "cube", "Cube on X"),
    command('L', Axis::X, Layer::Negative, Anti, "left", "Left face"),
    command('M', Axis::X, Layer::Middle, Anti, "middle", "Middle slice"),
    command('R', Axis::X, Layer::Positive, Cw, "right", "Right face"),
    command('Y', Axis::Y, Layer::Whole, Cw, "cube", "Cube on Y"),
    command('U', Axis::Y, Layer::Positive, Cw, "up", "Up face"),
    command('E', Axis::Y, Layer::Middle, Anti, "equator", "Equator slice"),
    command('D', Axis::Y, Layer::Negative, Anti, "down", "Down face"),
    command('Z', Axis::Z, Layer::Whole, Cw, "cube", "Cube on Z"),
    command('F', Axis::Z, Layer::Positive, Cw, "front", "Front face"),
    command('S', Axis::Z, Layer::Middle, Cw, "standing", "Standing slice"),
    command('B', Axis::Z, Layer::Negative, Anti, "back", "Back face"),
];

/// Every command letter, uppercase.
pub const LETTERS: &str = "XLMRYUEDZFSB";

/// Largest explicit magnitude a twist may carry: ten full turns.
pub const MAX_DEGREES: u32 = 3600;

/// Looks up a command letter, ignoring case.
pub fn lookup(letter: char) -> Option<&'static Command> {
    let upper = letter.to_ascii_uppercase();
    COMMANDS.iter().find(|c| c.letter == upper)
}

/// A validated rotation command.
///
/// Only [`Twist::new`] builds one, so the letter always names a command and
/// the magnitude is within [`MAX_DEGREES`].
#[derive(Debug, Clone)]
pub struct Twist {
    /// Command letter; case encodes the sense.
    command: char,
    definition: &'static Command,
    /// Explicit magnitude; `None` means "to the next peg".
    degrees: Option<u32>,
    sense: Sense,
    created: Instant,
}

impl PartialEq for Twist {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command && self.degrees == other.degrees
    }
}

impl Eq for Twist {}

impl Twist {
    /// Builds a twist, flipping the sense of negative degrees.
    pub fn new(command: char, degrees: Option<i32>) -> Result<Self, TwistError> {
        let definition = lookup(command).ok_or(TwistError::UnknownCommand(command))?;
        let magnitude = degrees.map(i32::unsigned_abs);
        if let Some(magnitude) = magnitude.filter(|&m| m > MAX_DEGREES) {
            return Err(TwistError::TooFar {
                command,
                degrees: magnitude,
            });
        }
        let mut command = command;
        if degrees.is_some_and(|d| d < 0) {
            command = invert_case(command);
        }
        Ok(Self {
            command,
            definition,
            degrees: magnitude,
            sense: Sense::from_case(command),
            created: Instant::now(),
        })
    }

    pub fn command(&self) -> char {
        self.command
    }

    pub fn definition(&self) -> &'static Command {
        self.definition
    }

    /// English description of what moves.
    pub fn group(&self) -> &'static str {
        self.definition.group
    }

    pub fn degrees(&self) -> Option<u32> {
        self.degrees
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn created(&self) -> Instant {
        self.created
    }

    pub fn axis(&self) -> Axis {
        self.definition.axis
    }

    pub fn layer(&self) -> Layer {
        self.definition.layer
    }

    /// Rotation sense about the positive axis.
    pub fn axis_sense(&self) -> Sense {
        self.definition.sense.compose(self.sense)
    }

    /// +1 for clockwise, -1 for anticlockwise.
    pub fn vector(&self) -> i32 {
        self.sense.vector()
    }

    /// "clockwise" or "anticlockwise".
    pub fn wise(&self) -> &'static str {
        self.sense.label()
    }

    /// The same twist in the opposite sense.
    pub fn inverse(&self) -> Self {
        Self {
            command: invert_case(self.command),
            definition: self.definition,
            degrees: self.degrees,
            sense: self.sense.flip(),
            created: Instant::now(),
        }
    }

    /// Copy of this twist with its degrees pinned.
    pub fn with_degrees(&self, degrees: u32) -> Self {
        Self {
            degrees: Some(degrees.min(MAX_DEGREES)),
            ..self.clone()
        }
    }

    /// Flattens mixed notation into twists, dropping anything malformed.
    pub fn validate(items: Vec<Notation>) -> Vec<Twist> {
        let mut stream: VecDeque<Notation> = items.into();
        let mut twists = Vec::new();

        while let Some(item) = stream.pop_front() {
            match item {
                Notation::Twist(twist) => twists.push(twist),
                Notation::Direction(direction) => {
                    stream.push_front(Notation::Text(direction.initial().to_string()));
                }
                Notation::List(items) => {
                    for item in items.into_iter().rev() {
                        stream.push_front(item);
                    }
                }
                Notation::Text(text) => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) => {
                            let degrees = match stream.front() {
                                Some(&Notation::Number(n)) => {
                                    stream.pop_front();
                                    Some(n)
                                }
                                _ => None,
                            };
                            match Twist::new(letter, degrees) {
                                Ok(twist) => twists.push(twist),
                                Err(e) => debug!("dropping {text:?}: {e}"),
                            }
                        }
                        (Some(_), Some(_)) => {
                            for token in tokenize(&text).into_iter().rev() {
                                stream.push_front(token);
                            }
                        }
                        _ => debug!("dropping empty notation"),
                    }
                }
                Notation::Number(n) => debug!("dropping bare number {n}"),
            }
        }

        twists
    }

    /// Parses a notation string such as `"Udr10Lf-30b"`.
    pub fn parse(notation: &str) -> Vec<Twist> {
        Self::validate(vec![Notation::from(notation)])
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degrees {
            Some(degrees) => write!(f, "{}{}", self.command, degrees),
            None => write!(f, "{}", self.command),
        }
    }
}

fn invert_case(letter: char) -> char {
    if letter.is_ascii_uppercase() {
        letter.to_ascii_lowercase()
    } else {
        letter.to_ascii_uppercase()
    }
}

/// Splits a notation string into signed integers and single command
/// letters. Everything else is skipped.
fn tokenize(text: &str) -> Vec<Notation> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let starts_number =
            c.is_ascii_digit() || (c == '-' && chars.get(i + 1).is_some_and(char::is_ascii_digit));

        if starts_number {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = chars[start..i].iter().collect();
            match digits.parse::<i32>() {
                Ok(n) => tokens.push(Notation::Number(n)),
                Err(e) => debug!("dropping number {digits:?}: {e}"),
            }
            continue;
        }

        if lookup(c).is_some() {
            tokens.push(Notation::Text(c.to_string()));
        } else if !c.is_whitespace() {
            debug!("dropping unrecognized {c:?}");
        }
        i += 1;
    }

    tokens
}

/// Anything that can be turned into twists.
#[derive(Debug, Clone, PartialEq)]
pub enum Notation {
    Twist(Twist),
    Direction(Direction),
    Text(String),
    Number(i32),
    List(Vec<Notation>),
}

impl From<Twist> for Notation {
    fn from(twist: Twist) -> Self {
        Notation::Twist(twist)
    }
}

impl From<Direction> for Notation {
    fn from(direction: Direction) -> Self {
        Notation::Direction(direction)
    }
}

impl From<&str> for Notation {
    fn from(text: &str) -> Self {
        Notation::Text(text.to_string())
    }
}

impl From<String> for Notation {
    fn from(text: String) -> Self {
        Notation::Text(text)
    }
}

impl From<char> for Notation {
    fn from(letter: char) -> Self {
        Notation::Text(letter.to_string())
    }
}

impl From<i32> for Notation {
    fn from(n: i32) -> Self {
        Notation::Number(n)
    }
}

impl<T: Into<Notation>> From<Vec<T>> for Notation {
    fn from(items: Vec<T>) -> Self {
        Notation::List(items.into_iter().map(Into::into).collect())
    }
}
