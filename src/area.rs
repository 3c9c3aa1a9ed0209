use geo::{Coord, LineString};

/// Axis-aligned rectangle in longitude/latitude degrees.
///
/// The corners are taken literally: no ordering between `left`/`right` or
/// `top`/`bottom` is enforced, so an inverted area yields an inverted ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Area {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The four corners, visited top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Coord<f64>; 4] {
        [
            Coord {
                x: self.left,
                y: self.top,
            },
            Coord {
                x: self.right,
                y: self.top,
            },
            Coord {
                x: self.right,
                y: self.bottom,
            },
            Coord {
                x: self.left,
                y: self.bottom,
            },
        ]
    }

    /// Closed ring of five coordinates, the last repeating the top-left corner.
    pub fn as_ring(&self) -> LineString<f64> {
        let corners = self.corners();
        let mut coords = Vec::with_capacity(5);
        coords.extend_from_slice(&corners);
        coords.push(corners[0]);
        LineString::new(coords)
    }

    /// Open path over the four corners. The edge from bottom-left back to
    /// top-left is not drawn.
    pub fn as_line(&self) -> LineString<f64> {
        LineString::new(self.corners().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Area {
        Area::new(-12.3, 10.2, -11.5, -5.4)
    }

    #[test]
    fn test_corners_order() {
        let corners = sample().corners();
        assert_eq!(corners[0], Coord { x: -12.3, y: 10.2 });
        assert_eq!(corners[1], Coord { x: -11.5, y: 10.2 });
        assert_eq!(corners[2], Coord { x: -11.5, y: -5.4 });
        assert_eq!(corners[3], Coord { x: -12.3, y: -5.4 });
    }

    #[test]
    fn test_ring_is_closed() {
        let areas = [
            sample(),
            Area::new(42.0, -39.6, 45.6, -42.1),
            // inverted and degenerate areas are accepted as-is
            Area::new(5.0, -5.0, -5.0, 5.0),
            Area::new(1.0, 1.0, 1.0, 1.0),
        ];
        for area in areas {
            let ring = area.as_ring();
            assert_eq!(ring.0.len(), 5);
            assert_eq!(ring.0.first(), ring.0.last());
            assert!(ring.is_closed());
        }
    }

    #[test]
    fn test_line_is_open() {
        let line = sample().as_line();
        assert_eq!(line.0.len(), 4);
        assert_ne!(line.0.first(), line.0.last());
        assert!(!line.is_closed());
        assert_eq!(line.0[..], sample().corners()[..]);
    }

    #[test]
    fn test_line_of_point_area_is_closed() {
        let line = Area::new(1.0, 1.0, 1.0, 1.0).as_line();
        assert_eq!(line.0.len(), 4);
        assert_eq!(line.0.first(), line.0.last());
    }
}
