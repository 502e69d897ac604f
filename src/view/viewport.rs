use serde::Deserialize;

/// Fraction of the marker bounding box added as margin on each side.
pub const MARGIN_RATIO: f64 = 0.1;

/// Smallest margin in degrees, used when the bounding box has no extent
/// along an axis. Roughly half a kilometer at Doha's latitude.
pub const MIN_MARGIN_DEG: f64 = 0.005;

/// Default map view, restored whenever a query matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapViewport {
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: u8,
}

impl Default for MapViewport {
    fn default() -> Self {
        // The Doha Corniche, wide enough to take in the whole bay.
        Self {
            center_lon: 51.5310,
            center_lat: 25.2854,
            zoom: 13,
        }
    }
}

/// How the renderer should frame the view after a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Framing {
    /// Fit the view to this bounding box. Produced whenever at least one
    /// marker is shown; the box always carries a nonzero margin.
    FitBounds(geo::Rect),
    /// Return to the configured default viewport.
    Reset,
}

/// Bounding box of `positions` padded by `margin_ratio` of its extent per
/// axis, or [`MIN_MARGIN_DEG`] where the extent is zero. `None` when there
/// are no positions to frame.
pub fn padded_bounds(positions: &[geo::Point], margin_ratio: f64) -> Option<geo::Rect> {
    let first = positions.first()?;
    let mut min_x = first.x();
    let mut max_x = first.x();
    let mut min_y = first.y();
    let mut max_y = first.y();
    for position in positions {
        min_x = min_x.min(position.x());
        max_x = max_x.max(position.x());
        min_y = min_y.min(position.y());
        max_y = max_y.max(position.y());
    }

    let pad_x = margin(max_x - min_x, margin_ratio);
    let pad_y = margin(max_y - min_y, margin_ratio);
    Some(geo::Rect::new(
        (min_x - pad_x, min_y - pad_y),
        (max_x + pad_x, max_y + pad_y),
    ))
}

fn margin(span: f64, ratio: f64) -> f64 {
    let margin = span * ratio;
    if 0.0 < margin {
        margin
    } else {
        MIN_MARGIN_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn no_positions_means_nothing_to_frame() {
        assert_eq!(padded_bounds(&[], MARGIN_RATIO), None);
    }

    #[test]
    fn bounds_carry_a_proportional_margin() {
        let positions = vec![geo::Point::new(51.50, 25.28), geo::Point::new(51.54, 25.30)];
        let bounds = padded_bounds(&positions, MARGIN_RATIO).unwrap();

        let epsilon = 1e-12;
        assert_abs_diff_eq!(bounds.min().x, 51.496, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.min().y, 25.278, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.max().x, 51.544, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.max().y, 25.302, epsilon = epsilon);
    }

    #[test]
    fn single_position_gets_the_minimum_margin() {
        let positions = vec![geo::Point::new(51.5310, 25.2854)];
        let bounds = padded_bounds(&positions, MARGIN_RATIO).unwrap();

        let epsilon = 1e-12;
        assert_abs_diff_eq!(bounds.min().x, 51.5310 - MIN_MARGIN_DEG, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.max().x, 51.5310 + MIN_MARGIN_DEG, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.min().y, 25.2854 - MIN_MARGIN_DEG, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.max().y, 25.2854 + MIN_MARGIN_DEG, epsilon = epsilon);
    }

    #[test]
    fn collinear_positions_still_get_margin_on_the_flat_axis() {
        // Two markers on the same meridian: no longitude extent.
        let positions = vec![geo::Point::new(51.52, 25.28), geo::Point::new(51.52, 25.32)];
        let bounds = padded_bounds(&positions, MARGIN_RATIO).unwrap();

        let epsilon = 1e-12;
        assert_abs_diff_eq!(bounds.min().x, 51.52 - MIN_MARGIN_DEG, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.max().x, 51.52 + MIN_MARGIN_DEG, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.min().y, 25.276, epsilon = epsilon);
        assert_abs_diff_eq!(bounds.max().y, 25.324, epsilon = epsilon);
    }

    #[test]
    fn every_position_lies_strictly_inside_the_bounds() {
        let positions = vec![
            geo::Point::new(51.4418, 25.2599),
            geo::Point::new(51.5246, 25.2966),
            geo::Point::new(51.6034, 25.1715),
        ];
        let bounds = padded_bounds(&positions, MARGIN_RATIO).unwrap();
        for position in &positions {
            assert!(bounds.min().x < position.x() && position.x() < bounds.max().x);
            assert!(bounds.min().y < position.y() && position.y() < bounds.max().y);
        }
    }

    #[test]
    fn viewport_deserializes_from_yaml() {
        let viewport: MapViewport =
            serde_yaml::from_str("center_lon: 50.0\ncenter_lat: 26.0\nzoom: 10\n").unwrap();
        assert_eq!(
            viewport,
            MapViewport {
                center_lon: 50.0,
                center_lat: 26.0,
                zoom: 10
            }
        );
    }

    #[test]
    fn default_viewport_is_the_corniche() {
        let viewport = MapViewport::default();
        assert_eq!(viewport.zoom, 13);
        let epsilon = 1e-12;
        assert_abs_diff_eq!(viewport.center_lon, 51.5310, epsilon = epsilon);
        assert_abs_diff_eq!(viewport.center_lat, 25.2854, epsilon = epsilon);
    }
}
