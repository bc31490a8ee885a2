use chrono::TimeDelta;
use vitalog_types::TrackPoint;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two fixes, in meters.
pub fn haversine_distance(a: &TrackPoint, b: &TrackPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// An ordered GPS trace for one workout.
pub struct GeoTrack {
    points: Vec<TrackPoint>,
}

impl GeoTrack {
    /// Tracks covering less than this are treated as stationary noise.
    const MIN_TRACK_DISTANCE_M: f64 = 1.0;

    pub fn new(mut points: Vec<TrackPoint>) -> Self {
        points.sort_by_key(|p| p.time);
        Self { points }
    }

    pub fn total_distance_meters(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| haversine_distance(&w[0], &w[1]))
            .sum()
    }

    pub fn elapsed(&self) -> TimeDelta {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => TimeDelta::zero(),
        }
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        let meters = self.total_distance_meters();
        let seconds = self.elapsed().num_seconds();
        if meters < Self::MIN_TRACK_DISTANCE_M || seconds <= 0 {
            return None;
        }

        Some((seconds as f64 / 60.0) / (meters / 1000.0))
    }

    pub fn average_speed_kmh(&self) -> Option<f64> {
        let meters = self.total_distance_meters();
        let seconds = self.elapsed().num_seconds();
        if meters < Self::MIN_TRACK_DISTANCE_M || seconds <= 0 {
            return None;
        }

        Some((meters / 1000.0) / (seconds as f64 / 3600.0))
    }
}
