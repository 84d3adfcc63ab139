use crate::engine::schema::FieldCatalog;

#[test]
fn test_categorical_membership() {
    let catalog = FieldCatalog::new();

    assert!(catalog.is_categorical("driver_gender"));
    assert!(catalog.is_categorical("driver_location"));
    assert!(!catalog.is_categorical("driver_age"));
    assert!(!catalog.is_categorical("insurance_losses"));
}

#[test]
fn test_numeric_membership() {
    let catalog = FieldCatalog::new();

    assert!(catalog.is_numeric("year"));
    assert!(catalog.is_numeric("driver_age"));
    assert!(catalog.is_numeric("insurance_premium"));
    assert!(!catalog.is_numeric("driver_gender"));
    assert!(!catalog.is_numeric("no_such_field"));
}

#[test]
fn test_every_metric_is_numeric() {
    let catalog = FieldCatalog::new();

    for field in ["insurance_premium", "insurance_claims", "insurance_losses"] {
        assert!(catalog.is_metric(field), "{field} should be a metric");
        assert!(
            catalog.is_numeric(field),
            "metric {field} should also be numeric"
        );
    }
}

#[test]
fn test_filterable_is_union_of_all_sets() {
    let catalog = FieldCatalog::new();

    // One representative from each set
    assert!(catalog.is_filterable("driver_gender"));
    assert!(catalog.is_filterable("vehicle_age"));
    assert!(catalog.is_filterable("insurance_claims"));

    assert!(!catalog.is_filterable("policy_id"));
    assert!(!catalog.is_filterable(""));
}
