//! Warning icon layout for the 5x5 LED matrix.

use smart_leds::RGB8;

pub const MATRIX_WIDTH: usize = 5;
pub const MATRIX_HEIGHT: usize = 5;
pub const MATRIX_SIZE: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Dim yellow; the matrix sits close to the operator.
pub const WARNING_YELLOW: RGB8 = RGB8 { r: 10, g: 10, b: 0 };

const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Pixel indices of the inverted warning triangle, in wire order:
/// a full second row, the middle of the third, the center of the fourth.
const TRIANGLE: [usize; 9] = [5, 6, 7, 8, 9, 11, 12, 13, 17];

/// Compose one full matrix redraw: the warning triangle when `visible`,
/// an all-off frame otherwise.
pub fn warning_icon(visible: bool) -> [RGB8; MATRIX_SIZE] {
    let mut frame = [OFF; MATRIX_SIZE];
    if visible {
        for idx in TRIANGLE {
            frame[idx] = WARNING_YELLOW;
        }
    }
    frame
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(frame: &[RGB8; MATRIX_SIZE]) -> usize {
        frame.iter().filter(|px| **px != OFF).count()
    }

    #[test]
    fn test_visible_icon_lights_nine_pixels() {
        let frame = warning_icon(true);
        assert_eq!(lit(&frame), 9);
        for idx in TRIANGLE {
            assert_eq!(frame[idx], WARNING_YELLOW);
        }
    }

    #[test]
    fn test_hidden_icon_is_fully_dark() {
        assert_eq!(lit(&warning_icon(false)), 0);
    }

    #[test]
    fn test_triangle_rows() {
        let frame = warning_icon(true);
        // Row 1 fully lit, row 2 center three, row 3 center only.
        let row = |n: usize| {
            frame[n * MATRIX_WIDTH..(n + 1) * MATRIX_WIDTH]
                .iter()
                .filter(|px| **px != OFF)
                .count()
        };
        assert_eq!(row(0), 0);
        assert_eq!(row(1), 5);
        assert_eq!(row(2), 3);
        assert_eq!(row(3), 1);
        assert_eq!(row(4), 0);
    }
}
