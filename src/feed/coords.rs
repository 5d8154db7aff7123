// src/feed/coords.rs
use crate::feed::types::Coordinates;

/// Parse `"lat, lng"`. Returns `None` when either side is missing, empty or
/// not a finite number. Parts after the second comma are ignored.
/// `(0, 0)` parses fine; map views drop it separately.
pub fn parse_coordinates(text: &str) -> Option<Coordinates> {
    let mut parts = text.split(',').map(str::trim);
    let lat = parse_component(parts.next()?)?;
    let lng = parse_component(parts.next()?)?;
    Some(Coordinates { lat, lng })
}

fn parse_component(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Coordinates {
    /// Both components present and non-zero: the sheet uses zeros as a placeholder.
    pub fn is_mappable(&self) -> bool {
        self.lat != 0.0 && self.lng != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_and_inf() {
        assert!(parse_coordinates("NaN, 27.5").is_none());
        assert!(parse_coordinates("53.9, inf").is_none());
    }

    #[test]
    fn rejects_single_component() {
        assert!(parse_coordinates("53.9").is_none());
        assert!(parse_coordinates("53.9,").is_none());
    }

    #[test]
    fn trailing_parts_are_ignored() {
        let c = parse_coordinates("53.9, 27.5, 0").unwrap();
        assert_eq!((c.lat, c.lng), (53.9, 27.5));
        assert!(parse_coordinates("53.9, 27.5, junk").is_some());
    }

    #[test]
    fn zero_placeholder_parses_but_is_not_mappable() {
        let c = parse_coordinates("0, 0").unwrap();
        assert!(!c.is_mappable());
        let half = parse_coordinates("53.9, 0").unwrap();
        assert!(!half.is_mappable());
    }
}
