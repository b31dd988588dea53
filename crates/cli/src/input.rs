//! Text point lists: `x,y` per line.
//!
//! Accepted line shape: optional surrounding whitespace, an integer, a comma,
//! optional whitespace, an integer (`3,4`, `-7, 12`). Count and range limits
//! are those of `giftwrap::validate`.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use giftwrap::{validate, Point, PointSet};

/// Parse and validate a point list.
pub fn parse_points(text: &str) -> Result<PointSet> {
    let text = text.trim();
    if text.is_empty() {
        bail!("no points given");
    }
    let points = text
        .lines()
        .enumerate()
        .map(|(k, line)| {
            parse_line(line.trim()).ok_or_else(|| {
                anyhow!("line {}: expected `x,y` with integer coordinates, got {line:?}", k + 1)
            })
        })
        .collect::<Result<Vec<Point>>>()?;
    validate(&points).context("point list rejected")
}

/// Read and parse a point list file.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Inverse of `parse_points`: `x,y` per line.
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_line(line: &str) -> Option<Point> {
    let (xs, ys) = line.split_once(',')?;
    Some(Point::new(parse_int(xs)?, parse_int(ys.trim_start())?))
}

/// `-?[0-9]+`, nothing else (no `+`, no inner whitespace).
fn parse_int(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftwrap::PreconditionError;

    #[test]
    fn accepts_both_separators_and_padding() {
        let set = parse_points("  0,0\n10, 0\n-5,-7  \n").unwrap();
        assert_eq!(
            set.as_slice(),
            &[Point::new(0, 0), Point::new(10, 0), Point::new(-5, -7)]
        );
    }

    #[test]
    fn rejects_malformed_lines_with_line_number() {
        for bad in ["1 ,2", "1,2,3", "a,b", "1.5,2", "+1,2", "1,", ",2", "1,2\n\n3,4"] {
            assert!(parse_points(bad).is_err(), "{bad:?} should fail");
        }
        let err = parse_points("1,2\nx,3").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(parse_points("   \n ").is_err());
    }

    #[test]
    fn out_of_range_and_count_limits() {
        let err = parse_points("0,0\n51,0").unwrap_err();
        assert_eq!(
            err.downcast_ref::<PreconditionError>(),
            Some(&PreconditionError::CoordinateOutOfRange {
                index: 1,
                point: Point::new(51, 0)
            })
        );
        let many = (0..21).map(|i| format!("{i},0")).collect::<Vec<_>>().join("\n");
        assert!(parse_points(&many).is_err());
        let twenty = (0..20).map(|i| format!("{i},0")).collect::<Vec<_>>().join("\n");
        assert_eq!(parse_points(&twenty).unwrap().len(), 20);
    }

    #[test]
    fn format_then_parse_keeps_order() {
        let pts = [Point::new(-50, 50), Point::new(3, 3), Point::new(3, 3)];
        let text = format_points(&pts);
        assert_eq!(text, "-50,50\n3,3\n3,3");
        assert_eq!(parse_points(&text).unwrap().as_slice(), &pts);
    }
}
