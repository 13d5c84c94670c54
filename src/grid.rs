//! Slot addressing and the twist permutation tables.
//!
//! The cube is a flat array of 27 slots. Slot `a` decomposes into centered
//! coordinates as x = (a mod 3) - 1, y = -(((a mod 9) / 3) - 1),
//! z = -((a / 9) - 1), so slot 0 is the front-up-left corner, slots 0-8 form
//! the front slice, 9-17 the standing slice, and 18-26 the back slice.
//!
//! Every twist is a quarter turn of one layer (or the whole cube) about one
//! axis in one sense: 3 axes x 4 layer choices x 2 senses = 24 permutations.

use crate::geometry::{quarter_turn, Axis, Coord, Sense};

/// Number of cubelet slots.
pub const SLOTS: usize = 27;

/// A slot permutation: `map[source] = destination`.
pub type SlotMap = [u8; SLOTS];

/// Which cubelets along an axis a twist moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// All 27 cubelets.
    Whole,
    /// The layer at -1 (left, down, or back).
    Negative,
    /// The layer at 0 (middle, equator, or standing).
    Middle,
    /// The layer at +1 (right, up, or front).
    Positive,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Whole, Layer::Negative, Layer::Middle, Layer::Positive];

    pub const fn index(self) -> usize {
        match self {
            Layer::Whole => 0,
            Layer::Negative => 1,
            Layer::Middle => 2,
            Layer::Positive => 3,
        }
    }

    /// Whether a cubelet with this axis component belongs to the layer.
    pub const fn contains(self, component: i32) -> bool {
        match self {
            Layer::Whole => true,
            Layer::Negative => component == -1,
            Layer::Middle => component == 0,
            Layer::Positive => component == 1,
        }
    }
}

/// Converts a slot address to centered (x, y, z) coordinates.
#[inline(always)]
pub const fn address_to_coord(address: usize) -> Coord {
    let a = address as i32;
    ((a % 3) - 1, -((a % 9) / 3 - 1), -(a / 9 - 1))
}

/// Converts centered coordinates back to a slot address.
#[inline(always)]
pub const fn coord_to_address((x, y, z): Coord) -> usize {
    ((x + 1) + 3 * (1 - y) + 9 * (1 - z)) as usize
}

const fn sense_index(sense: Sense) -> usize {
    match sense {
        Sense::Clockwise => 0,
        Sense::Anticlockwise => 1,
    }
}

/// Builds the slot map for one quarter turn at compile time.
///
/// Slots outside the layer map to themselves.
const fn build_twist_table(axis: Axis, layer: Layer, sense: Sense) -> SlotMap {
    let mut table = [0u8; SLOTS];
    let mut src = 0;
    while src < SLOTS {
        let coord = address_to_coord(src);
        let dest = if layer.contains(axis.component(coord)) {
            coord_to_address(quarter_turn(axis, sense, coord))
        } else {
            src
        };
        table[src] = dest as u8;
        src += 1;
    }
    table
}

const fn build_twist_tables() -> [[[SlotMap; 2]; 4]; 3] {
    let mut tables = [[[[0u8; SLOTS]; 2]; 4]; 3];
    let mut a = 0;
    while a < 3 {
        let mut l = 0;
        while l < 4 {
            tables[a][l][0] = build_twist_table(Axis::ALL[a], Layer::ALL[l], Sense::Clockwise);
            tables[a][l][1] = build_twist_table(Axis::ALL[a], Layer::ALL[l], Sense::Anticlockwise);
            l += 1;
        }
        a += 1;
    }
    tables
}

const TABLES: [[[SlotMap; 2]; 4]; 3] = build_twist_tables();

/// All 24 twist permutations, indexed `[axis][layer][sense]`.
pub static TWIST_TABLES: [[[SlotMap; 2]; 4]; 3] = TABLES;

const fn is_bijection(map: &SlotMap) -> bool {
    let mut seen = [false; SLOTS];
    let mut i = 0;
    while i < SLOTS {
        let dest = map[i] as usize;
        if dest >= SLOTS || seen[dest] {
            return false;
        }
        seen[dest] = true;
        i += 1;
    }
    true
}

const fn tables_are_sound(tables: &[[[SlotMap; 2]; 4]; 3]) -> bool {
    let mut a = 0;
    while a < 3 {
        let mut l = 0;
        while l < 4 {
            let forward = &tables[a][l][0];
            let backward = &tables[a][l][1];
            if !is_bijection(forward) || !is_bijection(backward) {
                return false;
            }
            // each sense undoes the other
            let mut i = 0;
            while i < SLOTS {
                if backward[forward[i] as usize] as usize != i {
                    return false;
                }
                i += 1;
            }
            l += 1;
        }
        a += 1;
    }
    true
}

const _: () = assert!(tables_are_sound(&TABLES), "twist tables must be paired bijections");

/// Looks up the permutation for a quarter turn.
#[inline]
pub fn twist_table(axis: Axis, layer: Layer, sense: Sense) -> &'static SlotMap {
    &TWIST_TABLES[axis.index()][layer.index()][sense_index(sense)]
}

/// Moves every item to its destination slot.
///
/// `items` must hold exactly one item per slot.
pub fn permute<T>(items: Vec<T>, map: &SlotMap) -> Vec<T> {
    debug_assert_eq!(items.len(), SLOTS);
    let mut slots: Vec<Option<T>> = (0..SLOTS).map(|_| None).collect();
    for (source, item) in items.into_iter().enumerate() {
        slots[map[source] as usize] = Some(item);
    }
    slots.into_iter().flatten().collect()
}

/// Formats one label per slot as the front, standing, and back slices side
/// by side, each row running left to right, top to bottom.
pub fn format_slots(labels: &[String]) -> String {
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);
    let slice_width = 3 * width + 2;

    let mut output = String::new();
    for (i, name) in ["front", "standing", "back"].iter().enumerate() {
        if i > 0 {
            output.push_str("   ");
        }
        output.push_str(&format!("{name:<slice_width$}"));
    }
    output.truncate(output.trim_end().len());
    output.push('\n');

    for row in 0..3 {
        let mut line = String::new();
        for slice in 0..3 {
            if slice > 0 {
                line.push_str("   ");
            }
            for column in 0..3 {
                if column > 0 {
                    line.push(' ');
                }
                let slot = slice * 9 + row * 3 + column;
                let label = labels.get(slot).map(String::as_str).unwrap_or("?");
                line.push_str(&format!("{label:>width$}"));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
