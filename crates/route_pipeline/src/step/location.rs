use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// A fixed `[lon, lat]` coordinate of a route step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// GeoJSON position order.
    pub fn position(&self) -> Vec<f64> {
        vec![self.lon(), self.lat()]
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.lon(), self.lat()].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [lon, lat] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Location::from_lon_lat(lon, lat))
    }
}

/// Accepts a missing value, `null`, `[]` or `[lon, lat]`.
///
/// An empty coordinate list is treated the same as no location at all.
pub fn deserialize_optional_location<'de, D>(deserializer: D) -> Result<Option<Location>, D::Error>
where
    D: Deserializer<'de>,
{
    let coordinates = Option::<Vec<f64>>::deserialize(deserializer)?.unwrap_or_default();

    match coordinates.as_slice() {
        [] => Ok(None),
        [lon, lat] => Ok(Some(Location::from_lon_lat(*lon, *lat))),
        other => Err(D::Error::invalid_length(
            other.len(),
            &"an empty array or a [lon, lat] pair",
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct WithLocation {
        #[serde(default, deserialize_with = "deserialize_optional_location")]
        location: Option<Location>,
    }

    fn parse(json: &str) -> Result<Option<Location>, serde_json::Error> {
        serde_json::from_str::<WithLocation>(json).map(|value| value.location)
    }

    #[test]
    fn test_empty_location_is_absent() {
        assert_eq!(parse("{}").unwrap(), None);
        assert_eq!(parse(r#"{"location": null}"#).unwrap(), None);
        assert_eq!(parse(r#"{"location": []}"#).unwrap(), None);
    }

    #[test]
    fn test_location_is_lon_lat() {
        let location = parse(r#"{"location": [12.37, 51.34]}"#).unwrap().unwrap();

        assert_eq!(location.lon(), 12.37);
        assert_eq!(location.lat(), 51.34);
        assert_eq!(location.position(), vec![12.37, 51.34]);
    }

    #[test]
    fn test_rejects_partial_coordinates() {
        assert!(parse(r#"{"location": [12.37]}"#).is_err());
    }
}
