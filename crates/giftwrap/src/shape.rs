//! Hull shape labels from vertex counts.

use std::fmt;

/// Coarse shape of a hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HullShape {
    Point,
    Segment,
    /// Polygon with `n ≥ 3` vertices.
    Polygon(usize),
}

impl HullShape {
    pub fn from_vertex_count(n: usize) -> Self {
        match n {
            0 | 1 => HullShape::Point,
            2 => HullShape::Segment,
            n => HullShape::Polygon(n),
        }
    }
}

impl fmt::Display for HullShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            HullShape::Point => "point",
            HullShape::Segment => "segment",
            HullShape::Polygon(3) => "triangle",
            HullShape::Polygon(4) => "quadrilateral",
            HullShape::Polygon(5) => "pentagon",
            HullShape::Polygon(6) => "hexagon",
            HullShape::Polygon(7) => "heptagon",
            HullShape::Polygon(8) => "octagon",
            HullShape::Polygon(9) => "nonagon",
            HullShape::Polygon(10) => "decagon",
            HullShape::Polygon(n) => return write!(f, "polygon with {n} sides"),
        };
        f.write_str(name)
    }
}

/// Label for a hull with `vertex_count` vertices.
///
/// `0 | 1 → "point"`, `2 → "segment"`, `3..=10` named, otherwise
/// `"polygon with {n} sides"`.
pub fn classify_shape(vertex_count: usize) -> String {
    HullShape::from_vertex_count(vertex_count).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_counts() {
        let names = [
            "point",
            "point",
            "segment",
            "triangle",
            "quadrilateral",
            "pentagon",
            "hexagon",
            "heptagon",
            "octagon",
            "nonagon",
            "decagon",
        ];
        for (n, name) in names.iter().enumerate() {
            assert_eq!(classify_shape(n), *name, "n = {n}");
        }
    }

    #[test]
    fn beyond_ten_is_generic() {
        assert_eq!(classify_shape(11), "polygon with 11 sides");
        assert_eq!(classify_shape(20), "polygon with 20 sides");
        assert_eq!(HullShape::from_vertex_count(11), HullShape::Polygon(11));
    }
}
