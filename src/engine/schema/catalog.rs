/// Columns of the `policies` table that carry categorical attributes.
const CATEGORICAL_FIELDS: &[&str] = &[
    "driver_gender",
    "driver_employment",
    "driver_marital",
    "driver_location",
];

/// Numerical columns, including the three metric columns.
const NUMERIC_FIELDS: &[&str] = &[
    "year",
    "month",
    "driver_age",
    "vehicle_age",
    "vehicle_model",
    "insurance_premium",
    "insurance_claims",
    "insurance_losses",
];

/// Aggregation targets. Every metric field is also a numeric field.
const METRIC_FIELDS: &[&str] = &["insurance_premium", "insurance_claims", "insurance_losses"];

/// Field catalog for the policies table.
///
/// Built once at startup and injected wherever membership checks are needed;
/// the sets never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    categorical: &'static [&'static str],
    numeric: &'static [&'static str],
    metrics: &'static [&'static str],
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self {
            categorical: CATEGORICAL_FIELDS,
            numeric: NUMERIC_FIELDS,
            metrics: METRIC_FIELDS,
        }
    }

    pub fn is_categorical(&self, name: &str) -> bool {
        self.categorical.contains(&name)
    }

    pub fn is_numeric(&self, name: &str) -> bool {
        self.numeric.contains(&name)
    }

    pub fn is_metric(&self, name: &str) -> bool {
        self.metrics.contains(&name)
    }

    /// A field may appear in an equality filter if it exists in any set.
    pub fn is_filterable(&self, name: &str) -> bool {
        self.is_categorical(name) || self.is_numeric(name) || self.is_metric(name)
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::new()
    }
}
