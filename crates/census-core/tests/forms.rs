//! Business and building submissions through the pipeline.

use census_core::{Pipeline, PipelineContext};
use census_model::{
    ChoiceRegistry, ChoiceTable, EntityKind, FormKind, LineItemKind, RawSubmission, Record,
};
use census_store::{MemoryStore, RecordStore, SqliteStore};
use serde_json::json;

fn pipeline() -> Pipeline {
    let choices = ChoiceRegistry::new("test")
        .with_table(ChoiceTable::with_entries("business_nature", [("retail", "Retail")]))
        .with_table(ChoiceTable::with_entries(
            "business_loaned_organization",
            [("bank", "Commercial bank")],
        ))
        .with_table(ChoiceTable::with_entries(
            "loaned_organization",
            [("bank", "Bank (household)")],
        ))
        .with_table(ChoiceTable::with_entries("cash_crop", [("tea", "Tea")]))
        .with_table(ChoiceTable::with_entries("animal", [("goat", "Goat")]))
        .with_table(ChoiceTable::with_entries("road_status", [("paved", "Paved")]))
        .with_table(ChoiceTable::with_entries(
            "natural_disaster",
            [("flood", "Flood"), ("landslide", "Landslide")],
        ));
    Pipeline::new(PipelineContext::new(choices))
}

fn business() -> RawSubmission {
    RawSubmission::new(json!({
        "__id": "uuid:biz-1",
        "business_id": {
            "ward_no": 2,
            "business_name": "Sagarmatha Traders",
            "business_location": {
                "coordinates": [85.31, 27.71, 1310],
                "properties": {"accuracy": 4.5}
            },
            "date_of_interview": "2024-02-11"
        },
        "business_details": {
            "business_nature": "retail",
            "investment_amount": "250000",
            "is_hotel": "no",
            "has_aquaculture": "yes",
            "has_apiculture": "no"
        },
        "business_loan": {"has_loan": "yes", "loaned_organizations": "bank"},
        "hotel": {"room_count": 10},
        "aquaculture": {"pond_count": 2, "pond_area": {"kattha": 2}},
        "agriculture": {
            "cash_crops": [
                {"__id": "uuid:item-1", "ccrop": "tea", "ccrop_area": {"bigha": 1}, "ccrop_plants_count": 400}
            ]
        },
        "animals": {
            "animal_details": [
                {"__id": "uuid:item-2", "animal_name": "goat", "animal_details": {"total_animals": 12, "animal_revenue": 9000}}
            ],
            "animal_products": [
                {"__id": "uuid:item-3", "animal_product_name": "other_animal_product", "animal_product_name_other": "Wool",
                 "other_animal_product_details": {"o_production_amount": 4}}
            ]
        }
    }))
    .unwrap()
}

#[test]
fn business_sections_and_loans() {
    let mut store = MemoryStore::new();
    let report = pipeline()
        .process(FormKind::Business, &business(), &mut store)
        .unwrap();
    assert!(report.is_complete());
    assert_eq!(report.written(EntityKind::Business), 1);
    assert_eq!(report.written(EntityKind::BusinessLineItem), 3);

    let Some(Record::Business(business)) = store.get(EntityKind::Business, "uuid:biz-1").unwrap()
    else {
        panic!("expected a business record");
    };
    assert_eq!(business.business_nature.as_deref(), Some("Retail"));
    assert_eq!(business.business_location.as_deref(), Some("POINT(85.31 27.71)"));
    assert_eq!(business.business_altitude, Some(1310.0));
    assert_eq!(business.business_gps_accuracy, Some(4.5));
    assert_eq!(business.investment_amount, Some(250000.0));
    assert_eq!(
        business.loaned_organizations,
        Some(vec!["Commercial bank".to_string()])
    );
    assert_eq!(business.is_hotel, Some(false));
    assert_eq!(business.hotel_room_count, None);
    assert_eq!(business.pond_count, Some(2));
    assert_eq!(business.pond_area, Some(677.26));
}

#[test]
fn business_line_items_are_tagged() {
    let mut store = MemoryStore::new();
    pipeline()
        .process(FormKind::Business, &business(), &mut store)
        .unwrap();

    let items: Vec<_> = store
        .records(EntityKind::BusinessLineItem)
        .map(|record| match record {
            Record::BusinessLineItem(item) => item.clone(),
            other => panic!("unexpected record {other:?}"),
        })
        .collect();
    assert_eq!(items.len(), 3);

    let tea = &items[0];
    assert_eq!(tea.item_kind, LineItemKind::Crop);
    assert_eq!(tea.category.as_deref(), Some("cash_crop"));
    assert_eq!(tea.name.as_deref(), Some("Tea"));
    assert_eq!(tea.plant_count, Some(400));
    assert_eq!(tea.business_id, "uuid:biz-1");
    assert_eq!(tea.ward_no, Some(2));

    let goat = &items[1];
    assert_eq!(goat.item_kind, LineItemKind::Animal);
    assert_eq!(goat.name.as_deref(), Some("Goat"));
    assert_eq!(goat.quantity, Some(12.0));
    assert_eq!(goat.revenue, Some(9000.0));

    let wool = &items[2];
    assert_eq!(wool.item_kind, LineItemKind::AnimalProduct);
    assert_eq!(wool.name, None);
    assert_eq!(wool.name_other.as_deref(), Some("Wool"));
    assert_eq!(wool.quantity, Some(4.0));
}

#[test]
fn business_round_trips_through_sqlite() {
    let mut memory = MemoryStore::new();
    let mut sqlite = SqliteStore::open_in_memory().unwrap();
    let pipeline = pipeline();
    let submission = business();
    pipeline
        .process(FormKind::Business, &submission, &mut memory)
        .unwrap();
    pipeline
        .process(FormKind::Business, &submission, &mut sqlite)
        .unwrap();

    for id in ["uuid:item-1", "uuid:item-2", "uuid:item-3"] {
        assert_eq!(
            sqlite.get(EntityKind::BusinessLineItem, id).unwrap(),
            memory.get(EntityKind::BusinessLineItem, id).unwrap()
        );
    }
}

#[test]
fn building_is_a_single_record() {
    let submission = RawSubmission::new(json!({
        "__id": "uuid:bld-1",
        "enumerator_name": "Enumerator B",
        "building": {
            "ward_no": 7,
            "building_location": "POINT (85.2 27.6 1280)",
            "total_floors": "3",
            "road_status": "paved",
            "natural_disasters": "flood landslide",
            "is_map_passed": "no"
        }
    }))
    .unwrap();
    let mut store = MemoryStore::new();
    let report = pipeline()
        .process(FormKind::Building, &submission, &mut store)
        .unwrap();
    assert_eq!(report.total_written(), 1);

    let Some(Record::Building(building)) = store.get(EntityKind::Building, "uuid:bld-1").unwrap()
    else {
        panic!("expected a building record");
    };
    assert_eq!(building.building_location.as_deref(), Some("POINT(85.2 27.6)"));
    assert_eq!(building.total_floors, Some(3));
    assert_eq!(building.road_status.as_deref(), Some("Paved"));
    assert_eq!(
        building.natural_disasters,
        Some(vec!["Flood".to_string(), "Landslide".to_string()])
    );
    assert_eq!(building.is_map_passed, Some(false));
}
