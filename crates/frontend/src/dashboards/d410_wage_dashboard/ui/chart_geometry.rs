//! Pure geometry for the SVG charts: scales, the map projection and the
//! heat ramp. Keeping this free of DOM types makes it unit-testable on the
//! host target.

/// Linear mapping from a data domain onto a pixel range.
/// The range may be inverted (SVG y grows downward).
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count < 2 {
            return vec![d0];
        }
        (0..count)
            .map(|i| d0 + (d1 - d0) * i as f64 / (count - 1) as f64)
            .collect()
    }
}

/// `points` attribute string for an SVG polyline.
pub fn polyline_points(points: &[(f64, f64)], x: &LinearScale, y: &LinearScale) -> String {
    points
        .iter()
        .map(|(px, py)| format!("{:.1},{:.1}", x.apply(*px), y.apply(*py)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed map viewpoint of the heatmap (the original dashboard's camera).
pub const MAP_CENTER_LON: f64 = 139.691648;
pub const MAP_CENTER_LAT: f64 = 35.689185;
/// Longitude span of the viewport in degrees (zoom-4-equivalent over Japan)
pub const MAP_LON_SPAN: f64 = 18.0;
/// Screen stretch of one latitude degree relative to one longitude degree
/// around 35°N (1 / cos 35°)
const MAP_LAT_STRETCH: f64 = 1.22;

/// Project a coordinate onto a `width` x `height` viewport centered on the
/// fixed viewpoint. Plate carrée around the center; adequate at this span.
pub fn project(lat: f64, lon: f64, width: f64, height: f64) -> (f64, f64) {
    let px_per_lon = width / MAP_LON_SPAN;
    let x = width / 2.0 + (lon - MAP_CENTER_LON) * px_per_lon;
    let y = height / 2.0 - (lat - MAP_CENTER_LAT) * px_per_lon * MAP_LAT_STRETCH;
    (x, y)
}

/// Base opacity of the heat markers
pub const HEAT_OPACITY: f64 = 0.4;
/// Weights below this render dimmed instead of on the full ramp
pub const HEAT_THRESHOLD: f64 = 0.3;

/// Heat ramp color for a normalized weight in [0, 1]: cold blue to hot red,
/// with the fixed layer opacity baked into the alpha channel. Weights under
/// the threshold are additionally faded.
pub fn heat_color(weight: f64) -> String {
    let w = weight.clamp(0.0, 1.0);
    let r = (255.0 * w).round() as u8;
    let b = (255.0 * (1.0 - w)).round() as u8;
    let alpha = if w < HEAT_THRESHOLD {
        HEAT_OPACITY * 0.5
    } else {
        HEAT_OPACITY
    };
    format!("rgba({}, 80, {}, {:.2})", r, b, alpha)
}

/// Largest bubble radius in pixels (the original chart's size_max)
pub const BUBBLE_SIZE_MAX: f64 = 38.0;

/// Bubble radius for a size value, area-proportional and capped at
/// `BUBBLE_SIZE_MAX` for the largest value of the series.
pub fn bubble_radius(value: f64, series_max: f64) -> f64 {
    if series_max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    BUBBLE_SIZE_MAX * (value / series_max).sqrt()
}

/// Categorical palette for series coloring, cycled by index.
const PALETTE: [&str; 10] = [
    "#5cb0ff", "#f0635c", "#3fb68b", "#f7c843", "#a78bfa", "#fb923c", "#2dd4bf", "#f472b6",
    "#94a3b8", "#84cc16",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(10.0), 100.0);
        assert_eq!(scale.apply(5.0), 50.0);
    }

    #[test]
    fn scale_supports_inverted_range() {
        // SVG y axis: larger data values land higher up (smaller y)
        let scale = LinearScale::new((0.0, 150.0), (300.0, 0.0));
        assert_eq!(scale.apply(0.0), 300.0);
        assert_eq!(scale.apply(150.0), 0.0);
    }

    #[test]
    fn scale_degenerate_domain_pins_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(scale.apply(5.0), 0.0);
    }

    #[test]
    fn ticks_cover_domain_endpoints() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn polyline_joins_scaled_pairs() {
        let x = LinearScale::new((0.0, 2.0), (0.0, 200.0));
        let y = LinearScale::new((0.0, 1.0), (100.0, 0.0));
        let s = polyline_points(&[(0.0, 0.0), (1.0, 0.5), (2.0, 1.0)], &x, &y);
        assert_eq!(s, "0.0,100.0 100.0,50.0 200.0,0.0");
    }

    #[test]
    fn projection_centers_the_viewpoint() {
        let (x, y) = project(MAP_CENTER_LAT, MAP_CENTER_LON, 600.0, 500.0);
        assert_eq!((x, y), (300.0, 250.0));
    }

    #[test]
    fn projection_orients_north_up_east_right() {
        let (cx, cy) = project(MAP_CENTER_LAT, MAP_CENTER_LON, 600.0, 500.0);
        let (east_x, _) = project(MAP_CENTER_LAT, MAP_CENTER_LON + 1.0, 600.0, 500.0);
        let (_, north_y) = project(MAP_CENTER_LAT + 1.0, MAP_CENTER_LON, 600.0, 500.0);
        assert!(east_x > cx);
        assert!(north_y < cy);
    }

    #[test]
    fn heat_color_ramps_and_fades_below_threshold() {
        assert_eq!(heat_color(1.0), "rgba(255, 80, 0, 0.40)");
        assert_eq!(heat_color(0.0), "rgba(0, 80, 255, 0.20)");
        assert!(heat_color(0.29).ends_with("0.20)"));
        assert!(heat_color(0.31).ends_with("0.40)"));
    }

    #[test]
    fn bubble_radius_caps_at_size_max() {
        assert_eq!(bubble_radius(100.0, 100.0), BUBBLE_SIZE_MAX);
        assert!(bubble_radius(50.0, 100.0) < BUBBLE_SIZE_MAX);
        assert_eq!(bubble_radius(10.0, 0.0), 0.0);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), palette_color(10));
    }
}
