use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A longitude/latitude pair. The wire form used by the trip documents is
/// the comma-joined string `"{lng},{lat}"`, produced by `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

impl FromStr for GeoPoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lng, lat) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("invalid coordinate pair: {s}"))?;
        Ok(Self {
            lng: lng.trim().parse().context("invalid longitude")?,
            lat: lat.trim().parse().context("invalid latitude")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lng_comma_lat() {
        let point = GeoPoint::new(-70.64, -33.45);
        assert_eq!(point.to_string(), "-70.64,-33.45");
    }

    #[test]
    fn parses_the_wire_form_back() {
        let point: GeoPoint = "-70.6483,-33.4569".parse().unwrap();
        assert_eq!(point, GeoPoint::new(-70.6483, -33.4569));
    }

    #[test]
    fn rejects_a_bare_number() {
        assert!("-70.64".parse::<GeoPoint>().is_err());
    }
}
