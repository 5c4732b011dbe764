//! Translation of orientations and logical pixel rectangles into the
//! controller's RAM address windows and counters.
//!
//! The controller addresses its RAM with a byte packed X axis (5 bit address,
//! one unit is 8 pixels) and a pixel granular Y axis (9 bit address). The data
//! entry mode picked for an orientation makes one or both counters run
//! backwards, so every window has to list its start and stop in counting
//! order. Swapping them makes the counters wrap and shears the image.

use super::geometry::{Geometry, Orientation};

const X_MASK: u16 = 0x1F;
const Y_MASK: u16 = 0x1FF;

/// A RAM window in controller units, start and stop in counting order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    /// first byte column
    pub x_start: u16,
    /// last byte column
    pub x_stop: u16,
    /// first row
    pub y_start: u16,
    /// last row
    pub y_stop: u16,
}

/// Position of the RAM address counters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RamPointer {
    /// byte column
    pub x: u16,
    /// row
    pub y: u16,
}

impl Window {
    /// The whole panel, counted in the direction the orientation's data entry mode runs
    pub fn full(geometry: &Geometry) -> Self {
        let last_column = geometry.column_count() - 1;
        let last_row = geometry.row_count() - 1;

        let ((x_start, x_stop), (y_start, y_stop)) = match geometry.orientation() {
            Orientation::Rotate0 => ((0, last_column), (0, last_row)),
            Orientation::Rotate90 => ((last_column, 0), (0, last_row)),
            Orientation::Rotate180 => ((last_column, 0), (last_row, 0)),
            Orientation::Rotate270 => ((0, last_column), (last_row, 0)),
        };

        Window {
            x_start,
            x_stop,
            y_start,
            y_stop,
        }
    }

    /// Window covering the logical pixel rectangle spanned by `(x1, y1)` and `(x2, y2)`
    ///
    /// The packed axis is reduced to byte granularity. Nothing is clamped, the
    /// values are masked to the address width once they are encoded.
    pub fn from_pixels(orientation: Orientation, x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        let ((x_start, x_stop), (y_start, y_stop)) = match orientation {
            Orientation::Rotate0 => ((x1 >> 3, x2 >> 3), (y1, y2)),
            Orientation::Rotate90 => ((y2 >> 3, y1 >> 3), (x1, x2)),
            Orientation::Rotate180 => ((x2 >> 3, x1 >> 3), (y2, y1)),
            Orientation::Rotate270 => ((y1 >> 3, y2 >> 3), (x2, x1)),
        };

        Window {
            x_start,
            x_stop,
            y_start,
            y_stop,
        }
    }

    /// Payload of `SetRamXAddressStartEndPosition`
    pub fn x_bytes(&self) -> [u8; 2] {
        [encode_x(self.x_start), encode_x(self.x_stop)]
    }

    /// Payload of `SetRamYAddressStartEndPosition`
    pub fn y_bytes(&self) -> [u8; 4] {
        let [start_low, start_high] = encode_y(self.y_start);
        let [stop_low, stop_high] = encode_y(self.y_stop);
        [start_low, start_high, stop_low, stop_high]
    }
}

impl RamPointer {
    /// Where a full frame starts for the orientation: the first address of [`Window::full`]
    pub fn frame_start(geometry: &Geometry) -> Self {
        let window = Window::full(geometry);
        RamPointer {
            x: window.x_start,
            y: window.y_start,
        }
    }

    /// Payload of `SetRamXAddressCounter`
    pub fn x_bytes(&self) -> [u8; 1] {
        [encode_x(self.x)]
    }

    /// Payload of `SetRamYAddressCounter`
    pub fn y_bytes(&self) -> [u8; 2] {
        encode_y(self.y)
    }
}

fn encode_x(x: u16) -> u8 {
    (x & X_MASK) as u8
}

fn encode_y(y: u16) -> [u8; 2] {
    let y = y & Y_MASK;
    [(y & 0xFF) as u8, (y >> 8) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(orientation: Orientation) -> Geometry {
        Geometry::new(250, 122, orientation).unwrap()
    }

    fn window(x_start: u16, x_stop: u16, y_start: u16, y_stop: u16) -> Window {
        Window {
            x_start,
            x_stop,
            y_start,
            y_stop,
        }
    }

    #[test]
    fn full_windows() {
        // 250x122 -> 32 columns x 122 rows when x is packed, 16 x 250 otherwise
        assert_eq!(Window::full(&geometry(Orientation::Rotate0)), window(0, 31, 0, 121));
        assert_eq!(Window::full(&geometry(Orientation::Rotate90)), window(15, 0, 0, 249));
        assert_eq!(Window::full(&geometry(Orientation::Rotate180)), window(31, 0, 121, 0));
        assert_eq!(Window::full(&geometry(Orientation::Rotate270)), window(0, 15, 249, 0));
    }

    #[test]
    fn frame_start_pointers() {
        let start = |o| RamPointer::frame_start(&geometry(o));
        assert_eq!(start(Orientation::Rotate0), RamPointer { x: 0, y: 0 });
        assert_eq!(start(Orientation::Rotate90), RamPointer { x: 15, y: 0 });
        assert_eq!(start(Orientation::Rotate180), RamPointer { x: 31, y: 121 });
        assert_eq!(start(Orientation::Rotate270), RamPointer { x: 0, y: 249 });
    }

    #[test]
    fn pixel_windows() {
        let (x1, y1, x2, y2) = (16, 40, 100, 120);
        assert_eq!(
            Window::from_pixels(Orientation::Rotate0, x1, y1, x2, y2),
            window(2, 12, 40, 120)
        );
        assert_eq!(
            Window::from_pixels(Orientation::Rotate90, x1, y1, x2, y2),
            window(15, 5, 16, 100)
        );
        assert_eq!(
            Window::from_pixels(Orientation::Rotate180, x1, y1, x2, y2),
            window(12, 2, 120, 40)
        );
        assert_eq!(
            Window::from_pixels(Orientation::Rotate270, x1, y1, x2, y2),
            window(5, 15, 100, 16)
        );
    }

    #[test]
    fn window_encoding() {
        let w = window(15, 0, 0, 249);
        assert_eq!(w.x_bytes(), [15, 0]);
        assert_eq!(w.y_bytes(), [0x00, 0x00, 249, 0x00]);

        // counting down keeps start first
        let w = window(31, 0, 249, 0);
        assert_eq!(w.y_bytes(), [249, 0x00, 0x00, 0x00]);

        let w = window(0, 21, 295, 0);
        assert_eq!(w.y_bytes(), [0x27, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn out_of_range_values_are_masked() {
        let w = window(0x25, 0xFFFF, 0x3FF, 512);
        assert_eq!(w.x_bytes(), [0x05, 0x1F]);
        assert_eq!(w.y_bytes(), [0xFF, 0x01, 0x00, 0x00]);

        let p = RamPointer { x: 40, y: 0x2AB };
        assert_eq!(p.x_bytes(), [8]);
        assert_eq!(p.y_bytes(), [0xAB, 0x00]);
    }

    #[test]
    fn pointer_encoding() {
        let p = RamPointer { x: 31, y: 295 };
        assert_eq!(p.x_bytes(), [31]);
        assert_eq!(p.y_bytes(), [0x27, 0x01]);
    }
}
