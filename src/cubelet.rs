//! Cubelets: the 27 sub-units of the cube.
//!
//! Faces are kept in a fixed spiral order from front to back:
//!
//! ```text
//!                   back
//!                    5
//!               -----------
//!             /    up     /|
//!            /     1     / |
//!            -----------  right
//!           |           |  2
//!     left  |   front   |  .
//!      4    |     0     | /
//!           |           |/
//!            -----------
//!               down
//!                3
//! ```
//!
//! Logically rotating a cubelet reorders its faces array; colors never change.
//! Each cubelet keeps an accumulated angle per axis so partial turns (say 45°)
//! can be animated without ever leaving the face model in an invalid state:
//! faces are only cycled when the accumulated angle crosses a 90° peg.

use log::trace;

use crate::color::{Color, COLORLESS, SCHEME};
use crate::direction::Direction;
use crate::geometry::{Axis, Sense};
use crate::grid::address_to_coord;

/// Classification by number of visible faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeletType {
    Core,
    Center,
    Edge,
    Corner,
}

impl CubeletType {
    /// Indexed by the number of colored faces.
    const BY_COLORED_FACES: [CubeletType; 4] = [
        CubeletType::Core,
        CubeletType::Center,
        CubeletType::Edge,
        CubeletType::Corner,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CubeletType::Core => "core",
            CubeletType::Center => "center",
            CubeletType::Edge => "edge",
            CubeletType::Corner => "corner",
        }
    }
}

/// One labeled surface of a cubelet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Position in the faces array at creation.
    pub id: usize,
    pub color: Color,
    /// Direction this face pointed when the cubelet was created.
    pub normal: Direction,
}

/// Presentation state mirrored to the animator. Pure bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub shown: bool,
    pub plastics: bool,
    pub extroverts: bool,
    pub introverts: bool,
    pub stickers: bool,
    pub wireframes: bool,
    pub ids: bool,
    pub texts: bool,
    pub opacity: f32,
    pub radius: f32,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            shown: true,
            plastics: true,
            extroverts: true,
            introverts: true,
            stickers: true,
            wireframes: false,
            ids: false,
            texts: false,
            opacity: 1.0,
            radius: 0.0,
        }
    }
}

/// A single presentation toggle or setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleChange {
    Shown(bool),
    Plastics(bool),
    Extroverts(bool),
    Introverts(bool),
    Stickers(bool),
    Wireframes(bool),
    Ids(bool),
    Texts(bool),
    Opacity(f32),
    Radius(f32),
}

impl Appearance {
    pub fn apply(&mut self, change: StyleChange) {
        match change {
            StyleChange::Shown(on) => self.shown = on,
            StyleChange::Plastics(on) => self.plastics = on,
            StyleChange::Extroverts(on) => self.extroverts = on,
            StyleChange::Introverts(on) => self.introverts = on,
            StyleChange::Stickers(on) => self.stickers = on,
            StyleChange::Wireframes(on) => self.wireframes = on,
            StyleChange::Ids(on) => self.ids = on,
            StyleChange::Texts(on) => self.texts = on,
            StyleChange::Opacity(value) => self.opacity = value.clamp(0.0, 1.0),
            StyleChange::Radius(value) => self.radius = value,
        }
    }
}

/// Index of the nearest 90° peg; exact halfway values round toward zero.
#[inline]
pub fn peg_index(angle: i32) -> i32 {
    let quotient = angle / 90;
    let remainder = angle % 90;
    if remainder.abs() > 45 {
        quotient + remainder.signum()
    } else {
        quotient
    }
}

/// Face order after one quarter turn: `new[i] = old[cycle[i]]`.
const fn face_cycle(axis: Axis, sense: Sense) -> [Direction; 6] {
    use Direction::*;
    match (axis, sense) {
        (Axis::X, Sense::Clockwise) => [Down, Front, Right, Back, Left, Up],
        (Axis::X, Sense::Anticlockwise) => [Up, Back, Right, Front, Left, Down],
        (Axis::Y, Sense::Clockwise) => [Right, Up, Back, Down, Front, Left],
        (Axis::Y, Sense::Anticlockwise) => [Left, Up, Front, Down, Back, Right],
        (Axis::Z, Sense::Clockwise) => [Front, Left, Up, Right, Down, Back],
        (Axis::Z, Sense::Anticlockwise) => [Front, Right, Down, Left, Up, Back],
    }
}

/// Colors of the cubelet created at `address` on a solved cube.
///
/// A face is colored when it lies on the cube's surface.
pub fn solved_colors(address: usize) -> [Color; 6] {
    let (x, y, z) = address_to_coord(address);
    let on_surface = [z == 1, y == 1, x == 1, y == -1, x == -1, z == -1];
    let mut colors = [COLORLESS; 6];
    for (i, exposed) in on_surface.into_iter().enumerate() {
        if exposed {
            colors[i] = SCHEME[i];
        }
    }
    colors
}

#[derive(Debug, Clone)]
pub struct Cubelet {
    pub id: usize,
    address: usize,
    address_x: i32,
    address_y: i32,
    address_z: i32,
    faces: [Face; 6],
    cubelet_type: CubeletType,
    /// Accumulated degrees per axis.
    rotation: [i32; 3],
    /// Accumulated degrees at the last peg crossing.
    previous: [i32; 3],
    engaged: [bool; 3],
    tweening: bool,
    pub appearance: Appearance,
}

impl Cubelet {
    /// Creates a cubelet at the slot matching its id.
    pub fn new(id: usize, colors: [Color; 6]) -> Self {
        let faces = std::array::from_fn(|i| Face {
            id: i,
            color: colors[i],
            normal: Direction::ALL[i],
        });
        let colored = colors.iter().filter(|c| c.is_visible()).count();
        let cubelet_type = CubeletType::BY_COLORED_FACES[colored.min(3)];

        let mut cubelet = Self {
            id,
            address: 0,
            address_x: 0,
            address_y: 0,
            address_z: 0,
            faces,
            cubelet_type,
            rotation: [0; 3],
            previous: [0; 3],
            engaged: [false; 3],
            tweening: false,
            appearance: Appearance::default(),
        };
        cubelet.set_address(id);
        cubelet
    }

    /// Creates the cubelet that sits at `id` on a solved cube.
    pub fn solved(id: usize) -> Self {
        Self::new(id, solved_colors(id))
    }

    /// Moves the cubelet to `address`, recomputing its coordinates.
    pub fn set_address(&mut self, address: usize) {
        let (x, y, z) = address_to_coord(address);
        self.address = address;
        self.address_x = x;
        self.address_y = y;
        self.address_z = z;
    }

    pub fn address(&self) -> usize {
        self.address
    }

    pub fn address_x(&self) -> i32 {
        self.address_x
    }

    pub fn address_y(&self) -> i32 {
        self.address_y
    }

    pub fn address_z(&self) -> i32 {
        self.address_z
    }

    pub fn coord(&self) -> (i32, i32, i32) {
        (self.address_x, self.address_y, self.address_z)
    }

    pub fn cubelet_type(&self) -> CubeletType {
        self.cubelet_type
    }

    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// The face currently pointing in `direction`.
    pub fn face(&self, direction: Direction) -> &Face {
        &self.faces[direction.id()]
    }

    pub fn front(&self) -> &Face {
        self.face(Direction::Front)
    }

    pub fn up(&self) -> &Face {
        self.face(Direction::Up)
    }

    pub fn right(&self) -> &Face {
        self.face(Direction::Right)
    }

    pub fn down(&self) -> &Face {
        self.face(Direction::Down)
    }

    pub fn left(&self) -> &Face {
        self.face(Direction::Left)
    }

    pub fn back(&self) -> &Face {
        self.face(Direction::Back)
    }

    /// Six color initials in face order, `-` for colorless faces.
    pub fn colors(&self) -> String {
        self.faces
            .iter()
            .map(|f| if f.color.is_visible() { f.color.initial } else { '-' })
            .collect()
    }

    /// Where the given color currently faces, if this cubelet carries it.
    pub fn has_color(&self, color: Color) -> Option<Direction> {
        self.faces
            .iter()
            .position(|f| f.color == color)
            .and_then(Direction::from_id)
    }

    /// True when every listed color is present.
    pub fn has_colors(&self, colors: &[Color]) -> bool {
        colors.iter().all(|&c| self.has_color(c).is_some())
    }

    pub fn rotation(&self, axis: Axis) -> i32 {
        self.rotation[axis.index()]
    }

    pub fn previous_rotation(&self, axis: Axis) -> i32 {
        self.previous[axis.index()]
    }

    pub fn is_engaged(&self, axis: Axis) -> bool {
        self.engaged[axis.index()]
    }

    pub fn is_tweening(&self) -> bool {
        self.tweening
    }

    /// Starts a rotation: engages `axis`, marks the cubelet as tweening, and
    /// accumulates the signed angle.
    ///
    /// Returns the signed degrees for the animator to play.
    pub fn rotate(&mut self, axis: Axis, sense: Sense, degrees: u32) -> i32 {
        let target = sense.vector() * degrees as i32;
        let i = axis.index();
        self.tweening = true;
        self.engaged[i] = true;
        self.rotation[i] += target;
        target
    }

    /// Settles a rotation once its animation has finished.
    ///
    /// Cycles the faces once per peg crossed since the last settlement and
    /// disengages any axis that came to rest on a peg. Whole turns are taken
    /// off the accumulated angle. Returns the number of crossings per axis.
    pub fn finish_rotation(&mut self) -> [u32; 3] {
        let mut remaps = [0u32; 3];
        for axis in Axis::ALL {
            let i = axis.index();
            let current = self.rotation[i];
            let previous = self.previous[i];
            let crossings = (peg_index(current) - peg_index(previous)).unsigned_abs();

            if crossings > 0 {
                let sense = if current < previous {
                    Sense::Anticlockwise
                } else {
                    Sense::Clockwise
                };
                // four quarter turns restore the faces
                for _ in 0..crossings % 4 {
                    self.cycle_faces(axis, sense);
                }
                let settled = current % 360;
                self.rotation[i] = settled;
                self.previous[i] = settled;
            }
            if current.rem_euclid(90) == 0 {
                self.rotation[i] = 0;
                self.previous[i] = 0;
                self.engaged[i] = false;
            }
            remaps[i] = crossings;
        }
        trace!(
            "cubelet #{:02} | remaps {:?} | rotation {:?} | previous {:?}",
            self.id,
            remaps,
            self.rotation,
            self.previous
        );
        self.tweening = false;
        remaps
    }

    fn cycle_faces(&mut self, axis: Axis, sense: Sense) {
        let old = self.faces;
        for (slot, from) in face_cycle(axis, sense).into_iter().enumerate() {
            self.faces[slot] = old[from.id()];
        }
    }

    /// Applies a presentation change. Radius changes are refused mid-turn.
    pub fn restyle(&mut self, change: StyleChange) -> bool {
        if matches!(change, StyleChange::Radius(_)) && self.tweening {
            return false;
        }
        self.appearance.apply(change);
        true
    }

    /// Multi-line summary of identity, position, engagement, and faces.
    pub fn inspect(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("ID         {:02}\n", self.id));
        out.push_str(&format!("Type       {}\n\n", self.cubelet_type.name().to_uppercase()));
        out.push_str(&format!("Address    {:02}\n", self.address));
        out.push_str(&format!("Address X  {:+}\n", self.address_x));
        out.push_str(&format!("Address Y  {:+}\n", self.address_y));
        out.push_str(&format!("Address Z  {:+}\n\n", self.address_z));
        for axis in Axis::ALL {
            out.push_str(&format!("Engaged {axis}  {}\n", self.is_engaged(axis)));
        }
        out.push_str(&format!("Tweening   {}\n\n", self.tweening));
        for direction in Direction::ALL {
            let name = direction.name();
            let mut label: String = name[..1].to_uppercase();
            label.push_str(&name[1..]);
            out.push_str(&format!(
                "{}  {:<9}  {}\n",
                direction.id(),
                label,
                self.face(direction).color.name.to_uppercase()
            ));
        }
        out
    }
}
