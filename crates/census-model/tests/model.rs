//! Tests for census-model types.

use census_model::{
    ChoiceRegistry, ChoiceTable, EntityKind, FormKind, LandParcelRecord, LineItemKind,
    BusinessLineItemRecord, ProcessingOptions, FailureMode, RawSubmission, Record,
};
use serde_json::json;

#[test]
fn land_parcel_shape() {
    let record = LandParcelRecord {
        id: "uuid:land-1".to_string(),
        household_id: "uuid:hh-1".to_string(),
        ward_no: Some(3),
        land_ownership_type: Some("Own".to_string()),
        land_area: Some(6772.63),
        is_land_irrigated: Some(false),
        irrigation_source: None,
        irrigated_area: None,
    };
    insta::assert_json_snapshot!(record, @r#"
    {
      "id": "uuid:land-1",
      "household_id": "uuid:hh-1",
      "ward_no": 3,
      "land_ownership_type": "Own",
      "land_area": 6772.63,
      "is_land_irrigated": false,
      "irrigation_source": null,
      "irrigated_area": null
    }
    "#);
}

#[test]
fn record_reports_kind_and_keys() {
    let mut item = BusinessLineItemRecord::new("uuid:item", "uuid:biz", LineItemKind::Animal);
    item.name = Some("Goat".to_string());
    let record = Record::from(item);
    assert_eq!(record.kind(), EntityKind::BusinessLineItem);
    assert_eq!(record.id(), "uuid:item");
    assert_eq!(record.parent_id(), Some("uuid:biz"));

    let value = record.to_value().unwrap();
    assert_eq!(value["item_kind"], json!("animal"));
}

#[test]
fn every_kind_has_a_distinct_table() {
    let mut tables: Vec<_> = EntityKind::ALL.iter().map(|kind| kind.table()).collect();
    tables.sort_unstable();
    tables.dedup();
    assert_eq!(tables.len(), EntityKind::ALL.len());
}

#[test]
fn parents_precede_children() {
    for (index, kind) in EntityKind::ALL.iter().enumerate() {
        if let Some((parent, _)) = kind.parent() {
            let parent_index = EntityKind::ALL.iter().position(|k| *k == parent).unwrap();
            assert!(parent_index < index, "{kind} listed before {parent}");
        }
    }
}

#[test]
fn form_kind_parses() {
    assert_eq!("Household".parse::<FormKind>().unwrap(), FormKind::Household);
    assert_eq!("business".parse::<FormKind>().unwrap().base_entity(), EntityKind::Business);
    assert!("farm".parse::<FormKind>().is_err());
}

#[test]
fn registry_lookup() {
    let registry = ChoiceRegistry::new("test").with_table(ChoiceTable::with_entries(
        "house_roof",
        [("rcc", "RCC"), ("tin", "Tin sheet")],
    ));
    let table = registry.table("house_roof").unwrap();
    assert_eq!(table.label("tin"), Some("Tin sheet"));
    assert_eq!(table.label("straw"), None);
    assert!(registry.table("missing").is_none());
}

#[test]
fn options_default_to_partial() {
    let options = ProcessingOptions::default();
    assert_eq!(options.failure_mode, FailureMode::Partial);
    assert_eq!(options.marital_status_min_age, 10);
    assert_eq!(ProcessingOptions::strict().failure_mode, FailureMode::Strict);
}

#[test]
fn submission_exposes_root_record() {
    let submission = RawSubmission::new(json!({
        "__id": "uuid:1",
        "id": {"ward_no": "4"}
    }))
    .unwrap();
    let id = submission.record().object("id").unwrap().unwrap();
    assert_eq!(id.integer("ward_no").unwrap(), Some(4));
}
