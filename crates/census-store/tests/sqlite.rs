#![allow(missing_docs)]

use census_model::{
    AnimalProductRecord, AnimalRecord, BuildingRecord, BusinessLineItemRecord, BusinessRecord,
    CropRecord, DeathRecord, EntityKind, HouseholdRecord, IndividualRecord, LandParcelRecord,
    LineItemKind, Record,
};
use census_store::{MemoryStore, RecordStore, SqliteStore};

fn household() -> HouseholdRecord {
    HouseholdRecord {
        id: "uuid:hh-1".to_string(),
        ward_no: Some(5),
        tole_name: Some("Bhanu Chowk".to_string()),
        household_location: Some("POINT(85.3 27.7)".to_string()),
        household_altitude: Some(1300.0),
        are_a_family: Some(true),
        house_roof: Some("Tin sheet".to_string()),
        facilities: Some(vec!["Radio".to_string(), "Mobile phone".to_string()]),
        house_symbol_no: Some("007".to_string()),
        ..HouseholdRecord::default()
    }
}

fn business() -> BusinessRecord {
    BusinessRecord {
        id: "uuid:biz-1".to_string(),
        ward_no: Some(2),
        business_name: Some("Sagarmatha Traders".to_string()),
        investment_amount: Some(250000.5),
        registered_bodies: Some(vec!["Ward office".to_string()]),
        is_hotel: Some(false),
        ..BusinessRecord::default()
    }
}

fn sample_records() -> Vec<Record> {
    let mut item = BusinessLineItemRecord::new("uuid:item-1", "uuid:biz-1", LineItemKind::Crop);
    item.category = Some("food_grain".to_string());
    item.name = Some("Paddy".to_string());
    item.area = Some(338.63);

    vec![
        household().into(),
        IndividualRecord {
            id: "uuid:ind-1".to_string(),
            household_id: "uuid:hh-1".to_string(),
            name: Some("Sita".to_string()),
            age: Some(34),
            is_disabled: Some(false),
            ..IndividualRecord::default()
        }
        .into(),
        LandParcelRecord {
            id: "uuid:land-1".to_string(),
            household_id: "uuid:hh-1".to_string(),
            land_area: Some(6772.63),
            is_land_irrigated: Some(true),
            irrigated_area: Some(16.93),
            ..LandParcelRecord::default()
        }
        .into(),
        CropRecord {
            id: "uuid:crop-1".to_string(),
            household_id: "uuid:hh-1".to_string(),
            category: "fruit".to_string(),
            crop_name: Some("Mango".to_string()),
            plant_count: Some(12),
            ..CropRecord::default()
        }
        .into(),
        AnimalRecord {
            id: "uuid:animal-1".to_string(),
            household_id: "uuid:hh-1".to_string(),
            animal_name_other: Some("Rabbit".to_string()),
            total_animals: Some(4),
            ..AnimalRecord::default()
        }
        .into(),
        AnimalProductRecord {
            id: "uuid:product-1".to_string(),
            household_id: "uuid:hh-1".to_string(),
            product_name: Some("Milk".to_string()),
            production_amount: Some(3.5),
            ..AnimalProductRecord::default()
        }
        .into(),
        DeathRecord {
            id: "uuid:death-1".to_string(),
            household_id: "uuid:hh-1".to_string(),
            death_age: Some(80),
            ..DeathRecord::default()
        }
        .into(),
        business().into(),
        item.into(),
        BuildingRecord {
            id: "uuid:bld-1".to_string(),
            total_floors: Some(3),
            natural_disasters: Some(vec!["Flood".to_string(), "Flood".to_string()]),
            is_map_passed: Some(false),
            ..BuildingRecord::default()
        }
        .into(),
    ]
}

#[test]
fn every_kind_round_trips() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let records = sample_records();
    for record in &records {
        store.upsert(record).unwrap();
    }
    for record in &records {
        let stored = store.get(record.kind(), record.id()).unwrap();
        assert_eq!(stored.as_ref(), Some(record), "{}", record.kind());
    }
    for kind in EntityKind::ALL {
        assert_eq!(store.count(kind).unwrap(), 1, "{kind}");
    }
}

#[test]
fn upserting_twice_keeps_one_row_with_latest_values() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.upsert(&household().into()).unwrap();

    let mut updated = household();
    updated.ward_no = Some(6);
    updated.facilities = None;
    store.upsert(&updated.clone().into()).unwrap();

    assert_eq!(store.count(EntityKind::Household).unwrap(), 1);
    assert_eq!(
        store.get(EntityKind::Household, "uuid:hh-1").unwrap(),
        Some(Record::from(updated))
    );
}

#[test]
fn parent_upsert_keeps_children() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.upsert_all(&sample_records()).unwrap();
    store.upsert(&household().into()).unwrap();
    assert_eq!(store.count(EntityKind::Individual).unwrap(), 1);
}

#[test]
fn failed_batch_writes_nothing() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let orphan = DeathRecord {
        id: "uuid:death-9".to_string(),
        household_id: "uuid:missing".to_string(),
        ..DeathRecord::default()
    };
    let result = store.upsert_all(&[household().into(), orphan.into()]);
    assert!(result.is_err());
    assert_eq!(store.count(EntityKind::Household).unwrap(), 0);
    assert_eq!(store.count(EntityKind::Death).unwrap(), 0);
}

#[test]
fn on_disk_database_persists_between_opens() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("census.db");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.upsert_all(&sample_records()).unwrap();
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.count(EntityKind::BusinessLineItem).unwrap(), 1);
    assert_eq!(
        store.get(EntityKind::Business, "uuid:biz-1").unwrap(),
        Some(Record::from(business()))
    );
}

#[test]
fn memory_and_sqlite_agree() {
    let mut memory = MemoryStore::new();
    let mut sqlite = SqliteStore::open_in_memory().unwrap();
    let records = sample_records();
    memory.upsert_all(&records).unwrap();
    sqlite.upsert_all(&records).unwrap();
    for kind in EntityKind::ALL {
        assert_eq!(memory.count(kind).unwrap(), sqlite.count(kind).unwrap());
    }
    for record in memory.records(EntityKind::Crop) {
        assert_eq!(
            sqlite.get(EntityKind::Crop, record.id()).unwrap().as_ref(),
            Some(record)
        );
    }
}
