//! B/W/Red colors and the controller RAM planes they live in

/// One of the two independent 1 bit per pixel RAM planes of the controller
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Plane {
    /// black/white RAM, a set bit shows white
    BlackWhite,
    /// red RAM, a set bit shows red and takes precedence over the black/white plane
    Red,
}

/// Colors of a black/white/red panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Color {
    /// Black
    Black,
    /// White
    #[default]
    White,
    /// Red
    Red,
}

impl Color {
    /// Bit value of this color in the given plane
    pub fn get_bit_value(&self, plane: Plane) -> u8 {
        match (plane, self) {
            (Plane::BlackWhite, Color::Black) => 0,
            (Plane::BlackWhite, Color::White | Color::Red) => 1,
            (Plane::Red, Color::Red) => 1,
            (Plane::Red, Color::Black | Color::White) => 0,
        }
    }

    /// Gets a full byte of this color for the given plane
    pub fn get_byte_value(&self, plane: Plane) -> u8 {
        match self.get_bit_value(plane) {
            0 => 0x00,
            _ => 0xff,
        }
    }

    /// The plane a single-plane frame of this color is written into
    ///
    /// Black and white share the black/white plane, red has its own.
    pub fn plane(&self) -> Plane {
        match self {
            Color::Black | Color::White => Plane::BlackWhite,
            Color::Red => Plane::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_values() {
        assert_eq!(Color::Black.get_byte_value(Plane::BlackWhite), 0x00);
        assert_eq!(Color::White.get_byte_value(Plane::BlackWhite), 0xff);
        assert_eq!(Color::Red.get_byte_value(Plane::Red), 0xff);
        assert_eq!(Color::White.get_byte_value(Plane::Red), 0x00);
    }

    #[test]
    fn red_keeps_the_black_white_plane_white() {
        assert_eq!(Color::Red.get_bit_value(Plane::BlackWhite), 1);
    }

    #[test]
    fn planes() {
        assert_eq!(Color::Black.plane(), Plane::BlackWhite);
        assert_eq!(Color::White.plane(), Plane::BlackWhite);
        assert_eq!(Color::Red.plane(), Plane::Red);
    }
}
