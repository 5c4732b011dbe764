//! Orientation and the physical RAM geometry derived from it

use super::command::{DataEntryMode, DataEntryModeDir, DataEntryModeIncr};

/// Largest number of byte columns the 5 bit RAM X address can reach
pub const MAX_COLUMNS: u16 = 32;
/// Largest number of rows the 9 bit RAM Y address can reach
pub const MAX_ROWS: u16 = 512;

/// Display rotation, only 90° increments supported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Orientation {
    /// `true` when the logical x axis runs along the controller's byte packed axis
    pub fn is_x_packed(self) -> bool {
        matches!(self, Orientation::Rotate0 | Orientation::Rotate180)
    }

    pub(crate) fn data_entry_mode(self) -> DataEntryMode {
        let (incr, dir) = match self {
            Orientation::Rotate0 => (DataEntryModeIncr::XIncrYIncr, DataEntryModeDir::XDir),
            Orientation::Rotate90 => (DataEntryModeIncr::XDecrYIncr, DataEntryModeDir::YDir),
            Orientation::Rotate180 => (DataEntryModeIncr::XDecrYDecr, DataEntryModeDir::XDir),
            Orientation::Rotate270 => (DataEntryModeIncr::XIncrYDecr, DataEntryModeDir::YDir),
        };
        DataEntryMode { incr, dir }
    }
}

/// Physical layout of the controller RAM for a resolution and orientation
///
/// Fixed for the lifetime of a display handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Geometry {
    width: u16,
    height: u16,
    orientation: Orientation,
    columns: u16,
    rows: u16,
}

impl Geometry {
    /// Derives the RAM layout; `None` if the resolution can't be addressed
    /// by the controller
    pub fn new(width: u16, height: u16, orientation: Orientation) -> Option<Self> {
        let (packed, rows) = if orientation.is_x_packed() {
            (width, height)
        } else {
            (height, width)
        };
        let columns = packed.div_ceil(8);

        if columns == 0 || rows == 0 || columns > MAX_COLUMNS || rows > MAX_ROWS {
            return None;
        }

        Some(Geometry {
            width,
            height,
            orientation,
            columns,
            rows,
        })
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Rotation of the logical coordinates
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of bytes along the packed RAM X axis
    pub fn column_count(&self) -> u16 {
        self.columns
    }

    /// Number of pixels along the RAM Y axis (gate lines)
    pub fn row_count(&self) -> u16 {
        self.rows
    }

    /// Exact length in bytes of every plane buffer
    pub fn framebuffer_size(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Orientation; 4] = [
        Orientation::Rotate0,
        Orientation::Rotate90,
        Orientation::Rotate180,
        Orientation::Rotate270,
    ];

    #[test]
    fn packed_axis_follows_orientation() {
        for orientation in ALL {
            let geometry = Geometry::new(250, 122, orientation).unwrap();
            let (packed, rows) = if orientation.is_x_packed() {
                (250, 122)
            } else {
                (122, 250)
            };
            assert_eq!(geometry.column_count(), (packed + 7) / 8);
            assert_eq!(geometry.row_count(), rows);
            assert_eq!(
                geometry.framebuffer_size(),
                geometry.column_count() as usize * geometry.row_count() as usize
            );
        }
    }

    #[test]
    fn rotate90_250x122() {
        let geometry = Geometry::new(250, 122, Orientation::Rotate90).unwrap();
        assert_eq!(geometry.column_count(), 16);
        assert_eq!(geometry.row_count(), 250);
        assert_eq!(geometry.framebuffer_size(), 4000);
    }

    #[test]
    fn rotate0_122x250() {
        let geometry = Geometry::new(122, 250, Orientation::Rotate0).unwrap();
        assert_eq!(geometry.column_count(), 16);
        assert_eq!(geometry.row_count(), 250);
        assert_eq!(geometry.width(), 122);
        assert_eq!(geometry.height(), 250);
    }

    #[test]
    fn partial_bytes_round_up() {
        let geometry = Geometry::new(9, 1, Orientation::Rotate0).unwrap();
        assert_eq!(geometry.column_count(), 2);
        assert_eq!(geometry.framebuffer_size(), 2);
    }

    #[test]
    fn unsupported_resolutions() {
        assert!(Geometry::new(0, 10, Orientation::Rotate0).is_none());
        assert!(Geometry::new(10, 0, Orientation::Rotate90).is_none());
        // 264 pixels need 33 byte columns
        assert!(Geometry::new(264, 10, Orientation::Rotate0).is_none());
        assert!(Geometry::new(10, 513, Orientation::Rotate0).is_none());
        assert!(Geometry::new(513, 10, Orientation::Rotate270).is_none());
        assert!(Geometry::new(256, 512, Orientation::Rotate0).is_some());
    }

    #[test]
    fn entry_modes() {
        let bits: [u8; 4] = ALL.map(|o| o.data_entry_mode().to_u8());
        assert_eq!(bits, [0b011, 0b110, 0b000, 0b101]);
    }
}
