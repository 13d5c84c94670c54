//! Sticker colors.
//!
//! Colors are immutable values shared by every cubelet face. Interior faces
//! carry the [`COLORLESS`] sentinel rather than no color at all.

use std::fmt;

/// A sticker color: display name, single-letter initial, and hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub name: &'static str,
    pub initial: char,
    pub hex: &'static str,
}

impl Color {
    pub const fn new(name: &'static str, initial: char, hex: &'static str) -> Self {
        Self { name, initial, hex }
    }

    /// Returns true for every color except [`COLORLESS`].
    #[inline]
    pub fn is_visible(&self) -> bool {
        *self != COLORLESS
    }

    /// Parses the hex value into normalized RGB components.
    ///
    /// Accepts both the short `#RGB` and long `#RRGGBB` forms.
    pub fn rgb(&self) -> [f32; 3] {
        let digits = self.hex.trim_start_matches('#');
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0) as f32 / 255.0;
        match digits.len() {
            3 => {
                let mut out = [0.0; 3];
                for (i, c) in digits.chars().enumerate() {
                    let doubled: String = [c, c].iter().collect();
                    out[i] = channel(&doubled);
                }
                out
            }
            6 => [
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ],
            _ => [0.0; 3],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const WHITE: Color = Color::new("white", 'W', "#FFF");
pub const ORANGE: Color = Color::new("orange", 'O', "#F60");
pub const BLUE: Color = Color::new("blue", 'B', "#00D");
pub const RED: Color = Color::new("red", 'R', "#F00");
pub const GREEN: Color = Color::new("green", 'G', "#0A0");
pub const YELLOW: Color = Color::new("yellow", 'Y', "#FE0");

/// Marks a face that sits inside the cube and is never seen at rest.
pub const COLORLESS: Color = Color::new("NA", 'X', "#DDD");

/// The six sticker colors in face order (front, up, right, down, left, back).
pub const SCHEME: [Color; 6] = [WHITE, ORANGE, BLUE, RED, GREEN, YELLOW];
