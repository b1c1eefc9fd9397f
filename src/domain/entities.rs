/// Skips at or above this size carry the "Best value" badge and match the
/// `best` category filter.
pub const BEST_VALUE_MIN_SIZE: u32 = 8;

/// Identifier for skips returned by the skip API.
pub type SkipId = i64;

/// A bookable skip option for one location.
#[derive(Clone, Debug, PartialEq)]
pub struct Skip {
    pub id: SkipId,
    /// Volume in yards.
    pub size: u32,
    pub hire_period_days: u32,
    pub price_before_vat: f64,
    /// VAT rate in percent (20 means 20%).
    pub vat: f64,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    pub transport_cost: Option<f64>,
    pub per_tonne_cost: Option<f64>,
    pub postcode: String,
    pub area: String,
    pub forbidden: bool,
    pub weight_limit: Option<f64>,
    pub lead_time_days: Option<u32>,
    pub company_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Skip {
    /// Card title, e.g. "8 Yard Skip".
    pub fn label(&self) -> String {
        format!("{} Yard Skip", self.size)
    }

    /// Lower-cased phrase matched by free-text search.
    pub fn search_phrase(&self) -> String {
        format!("{} yard skip", self.size)
    }

    /// A skip that can neither go on the road nor take heavy waste cannot be booked.
    pub fn is_disabled(&self) -> bool {
        !self.allowed_on_road && !self.allows_heavy_waste
    }

    pub fn is_best_value(&self) -> bool {
        self.size >= BEST_VALUE_MIN_SIZE
    }

    /// Placement and waste-type warnings shown on the card.
    pub fn restrictions(&self) -> Vec<Restriction> {
        let mut notes = Vec::new();
        if !self.allowed_on_road {
            notes.push(Restriction::PrivatePropertyOnly);
        }
        if !self.allows_heavy_waste {
            notes.push(Restriction::NoHeavyWaste);
        }
        notes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restriction {
    PrivatePropertyOnly,
    NoHeavyWaste,
}

impl Restriction {
    pub fn label(&self) -> &'static str {
        match self {
            Restriction::PrivatePropertyOnly => "Private Property Only",
            Restriction::NoHeavyWaste => "Not Suitable for Heavy Waste",
        }
    }
}

/// Service location used to query available skips.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("NR32", "Lowestoft")
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Skip;

    pub fn skip(id: i64, size: u32) -> Skip {
        Skip {
            id,
            size,
            hire_period_days: 14,
            price_before_vat: 220.0,
            vat: 20.0,
            allowed_on_road: true,
            allows_heavy_waste: false,
            transport_cost: Some(50.0),
            per_tonne_cost: Some(10.0),
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
            forbidden: false,
            weight_limit: Some(1000.0),
            lead_time_days: Some(2),
            company_id: Some(1),
            created_at: "2023-01-01".to_string(),
            updated_at: "2023-01-01".to_string(),
        }
    }

    pub fn skip_with(id: i64, size: u32, on_road: bool, heavy: bool) -> Skip {
        Skip {
            allowed_on_road: on_road,
            allows_heavy_waste: heavy,
            ..skip(id, size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{skip, skip_with};
    use super::*;

    #[test]
    fn label_uses_size_in_yards() {
        assert_eq!(skip(1, 6).label(), "6 Yard Skip");
        assert_eq!(skip(1, 6).search_phrase(), "6 yard skip");
    }

    #[test]
    fn skip_without_road_or_heavy_waste_is_disabled() {
        assert!(skip_with(1, 4, false, false).is_disabled());
        assert!(!skip_with(1, 4, true, false).is_disabled());
        assert!(!skip_with(1, 4, false, true).is_disabled());
    }

    #[test]
    fn restrictions_follow_flags() {
        assert_eq!(
            skip_with(1, 4, false, false).restrictions(),
            vec![Restriction::PrivatePropertyOnly, Restriction::NoHeavyWaste]
        );
        assert!(skip_with(1, 4, true, true).restrictions().is_empty());
    }

    #[test]
    fn best_value_threshold() {
        assert!(!skip(1, 6).is_best_value());
        assert!(skip(1, BEST_VALUE_MIN_SIZE).is_best_value());
    }
}
