use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRouteInput {
    /// The current location of the user as "latitude,longitude".
    pub user_location: String,
    /// The location of the Experience Center as "latitude,longitude".
    pub experience_center_location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRouteOutput {
    pub route_recommendation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub user_location: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| anyhow::anyhow!("expected \"latitude,longitude\": {s}"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid latitude in: {s}"))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid longitude in: {s}"))?;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(anyhow::anyhow!("coordinates out of range: {s}"));
        }
        Ok(GeoPoint { lat, lng })
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_center_location() {
        let p = GeoPoint::parse("19.9999477,73.7845846").unwrap();
        assert_eq!(p.lat, 19.9999477);
        assert_eq!(p.lng, 73.7845846);
        assert_eq!(p.to_string(), "19.9999477,73.7845846");
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        let p = GeoPoint::parse(" 18.52 , 73.85 ").unwrap();
        assert_eq!(p.lat, 18.52);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GeoPoint::parse("").is_err());
        assert!(GeoPoint::parse("19.9").is_err());
        assert!(GeoPoint::parse("north,east").is_err());
        assert!(GeoPoint::parse("91.0,10.0").is_err());
        assert!(GeoPoint::parse("10.0,-181.0").is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let out = RecommendRouteOutput {
            route_recommendation: "Head north".to_string(),
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["routeRecommendation"], "Head north");

        let req: RouteRequest = serde_json::from_str(r#"{"userLocation":"1,2"}"#).unwrap();
        assert_eq!(req.user_location, "1,2");
    }
}
