//! Point record and dataset types

use serde::{Deserialize, Serialize};

/// Number of columns in the output table.
pub const NUM_COLUMNS: usize = 14;

/// Output column headers, in table order.
///
/// Matches the serde field names of [`PointRecord`].
pub const COLUMN_NAMES: [&str; NUM_COLUMNS] = [
    "lon",
    "lat",
    "wave_energy",
    "slope",
    "sediment_supply",
    "human_activity",
    "veg_stability",
    "curvature",
    "shoreline_2000_m",
    "shoreline_2010_m",
    "shoreline_2020_m",
    "shoreline_2024_m",
    "erosion_rate_m_per_yr",
    "erosion_risk",
];

/// One coastline sample with all drivers, projected shorelines and risk label.
///
/// Normalized drivers are relative to the dataset the record was generated
/// in; a record on its own says nothing about where its values sit globally.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    // === Coordinates ===
    /// Longitude (degrees)
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Latitude (degrees)
    #[serde(rename = "lat")]
    pub latitude: f64,

    // === Drivers ===
    /// Wave energy, clipped to [0, 1]
    pub wave_energy: f64,
    /// Beach slope, clipped to [0.05, 1]
    pub slope: f64,
    /// Sediment supply, min-max normalized
    pub sediment_supply: f64,
    /// Human activity, min-max normalized
    pub human_activity: f64,
    /// Vegetation stability, min-max normalized
    pub veg_stability: f64,
    /// Shoreline curvature, min-max normalized
    pub curvature: f64,

    // === Shoreline positions (m, relative to 2000) ===
    pub shoreline_2000_m: f64,
    pub shoreline_2010_m: f64,
    pub shoreline_2020_m: f64,
    pub shoreline_2024_m: f64,

    // === Outcome ===
    /// Linear erosion rate 2000-2024 (m/yr), negative means retreat
    pub erosion_rate_m_per_yr: f64,
    /// 1 when the erosion rate is past the risk threshold
    pub erosion_risk: u8,
}

impl PointRecord {
    /// All fields as numbers, in [`COLUMN_NAMES`] order.
    pub fn values(&self) -> [f64; NUM_COLUMNS] {
        [
            self.longitude,
            self.latitude,
            self.wave_energy,
            self.slope,
            self.sediment_supply,
            self.human_activity,
            self.veg_stability,
            self.curvature,
            self.shoreline_2000_m,
            self.shoreline_2010_m,
            self.shoreline_2020_m,
            self.shoreline_2024_m,
            self.erosion_rate_m_per_yr,
            f64::from(self.erosion_risk),
        ]
    }

    pub fn is_at_risk(&self) -> bool {
        self.erosion_risk == 1
    }
}

/// The complete generated table, rows in ascending longitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<PointRecord>,
}

impl Dataset {
    pub fn new(records: Vec<PointRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PointRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointRecord> {
        self.records.iter()
    }

    /// Values of a single column by header name, or `None` for an unknown name.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = COLUMN_NAMES.iter().position(|&c| c == name)?;
        Some(self.records.iter().map(|r| r.values()[idx]).collect())
    }

    /// Number of rows flagged as at risk.
    pub fn at_risk_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_at_risk()).count()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PointRecord;
    type IntoIter = std::slice::Iter<'a, PointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lon: f64, risk: u8) -> PointRecord {
        PointRecord {
            longitude: lon,
            latitude: 4.5,
            wave_energy: 0.5,
            slope: 0.3,
            sediment_supply: 0.1,
            human_activity: 0.9,
            veg_stability: 0.4,
            curvature: 0.6,
            shoreline_2000_m: 0.0,
            shoreline_2010_m: -20.0,
            shoreline_2020_m: -40.0,
            shoreline_2024_m: -48.0,
            erosion_rate_m_per_yr: -2.0,
            erosion_risk: risk,
        }
    }

    #[test]
    fn test_values_follow_column_order() {
        let r = sample(3.25, 1);
        let v = r.values();
        assert_eq!(v[0], 3.25);
        assert_eq!(v[7], 0.6);
        assert_eq!(v[11], -48.0);
        assert_eq!(v[13], 1.0);
    }

    #[test]
    fn test_column_lookup() {
        let ds = Dataset::new(vec![sample(3.0, 0), sample(3.5, 1)]);
        assert_eq!(ds.column("lon"), Some(vec![3.0, 3.5]));
        assert_eq!(ds.column("erosion_risk"), Some(vec![0.0, 1.0]));
        assert_eq!(ds.column("longitude"), None);
        assert_eq!(ds.at_risk_count(), 1);
    }

    #[test]
    fn test_serde_names_match_columns() {
        let json = serde_json::to_value(sample(3.0, 0)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), NUM_COLUMNS);
        for name in COLUMN_NAMES {
            assert!(obj.contains_key(name), "missing serialized field {name}");
        }
    }
}
