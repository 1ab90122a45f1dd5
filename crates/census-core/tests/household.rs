//! Household submissions through the pipeline.

use census_core::{Pipeline, PipelineContext, PipelineError};
use census_model::{
    ChoiceRegistry, ChoiceTable, EntityKind, FailureMode, FormKind, ProcessingOptions,
    RawSubmission, Record,
};
use census_store::{MemoryStore, RecordStore, SqliteStore, StoreError};
use serde_json::{Value, json};

fn registry() -> ChoiceRegistry {
    ChoiceRegistry::new("test")
        .with_table(ChoiceTable::with_entries("caste", [("magar", "Magar"), ("brahmin", "Brahmin")]))
        .with_table(ChoiceTable::with_entries("religion", [("hindu", "Hindu")]))
        .with_table(ChoiceTable::with_entries("gender", [("male", "Male"), ("female", "Female")]))
        .with_table(ChoiceTable::with_entries("marital_status", [("married", "Married")]))
        .with_table(ChoiceTable::with_entries("animal", [("cow", "Cow")]))
        .with_table(ChoiceTable::with_entries("food_grain", [("paddy", "Paddy")]))
        .with_table(ChoiceTable::with_entries("facility", [("radio", "Radio"), ("mobile_phone", "Mobile phone")]))
        .with_table(ChoiceTable::with_entries("death_cause", [("old_age", "Old age")]))
}

fn pipeline(mode: FailureMode) -> Pipeline {
    Pipeline::new(
        PipelineContext::new(registry())
            .with_options(ProcessingOptions::default().with_failure_mode(mode)),
    )
}

fn household_json() -> Value {
    json!({
        "__id": "uuid:hh-1",
        "enumerator_name": "Enumerator A",
        "__system": {"submissionDate": "2024-03-05"},
        "id": {
            "ward_no": "5",
            "tole_name": "Bhanu Chowk",
            "household_location": "POINT (85.3 27.7 1300)",
            "total_members": 3,
            "are_a_family": "yes"
        },
        "family_history_info": {"caste": "magar", "religion": "hindu"},
        "water_sanitation": {"facilities": "radio mobile_phone"},
        "individual": [
            {
                "__id": "uuid:ind-1",
                "name": "Ram",
                "age": 40,
                "gender": "male",
                "marital_status": "married",
                "individual_history_info": {"caste": "brahmin"}
            },
            {"__id": "uuid:ind-2", "name": "Sita", "age": "abc"},
            {"__id": "uuid:ind-3", "name": "Hari", "age": 8, "marital_status": "married"}
        ],
        "health": [
            {
                "__id": "uuid:h-1",
                "health_name": "Ram",
                "health_age": 40,
                "chronic_disease": "yes",
                "primary_chronic_disease": "diabetes",
                "is_disabled": "no"
            }
        ],
        "education": [
            {
                "__id": "uuid:e-1",
                "edu_name": "Hari",
                "edu_age": "8",
                "literacy_status": "literate",
                "economy": {"months_worked": "none"}
            }
        ],
        "agriculture": {
            "has_agricultural_land": "yes",
            "agricultural_land": [
                {
                    "__id": "uuid:land-1",
                    "total_land_area": {"bigha": 1, "kattha": 0, "dhur": 0},
                    "is_land_irrigated": "yes",
                    "irrigation": {
                        "irrigation_source": "canal",
                        "irrigated_area": {"dhur": 1}
                    }
                },
                {
                    "__id": "uuid:land-2",
                    "total_land_area": {"kattha": 2},
                    "is_land_irrigated": "no",
                    "irrigation": {"irrigated_area": {"bigha": 1}}
                }
            ],
            "food": {
                "foodgrains": [
                    {"__id": "uuid:crop-1", "fgrain": "paddy", "fgrain_area": {"kattha": 1}, "fgrain_production": 300}
                ]
            }
        },
        "animals": {
            "animal_details": [
                {"__id": "uuid:animal-1", "animal_name": "cow", "animal_details": {"total_animals": 2}},
                {
                    "__id": "uuid:animal-2",
                    "animal_name": "other_animal",
                    "animal_name_other": "Yak",
                    "animal_details": {"total_animals": 50},
                    "other_animal_details": {"o_total_animals": 1}
                }
            ],
            "animal_products": [
                {"__id": "uuid:product-1", "animal_product_name": "milk", "animal_product_details": {"production_amount": 10}}
            ]
        },
        "death": {
            "has_death": "yes",
            "death_records": [
                {"__id": "uuid:death-1", "death_name": "Gopal", "death_gender": "male", "death_age": 70, "death_cause": "old_age"}
            ]
        }
    })
}

fn submission(value: Value) -> RawSubmission {
    RawSubmission::new(value).unwrap()
}

fn get(store: &MemoryStore, kind: EntityKind, id: &str) -> Record {
    store.get(kind, id).unwrap().unwrap()
}

#[test]
fn malformed_individual_only_drops_itself() {
    let mut store = MemoryStore::new();
    let report = pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    assert_eq!(report.written(EntityKind::Household), 1);
    assert_eq!(report.written(EntityKind::Individual), 2);
    assert_eq!(report.written(EntityKind::LandParcel), 2);
    assert_eq!(report.written(EntityKind::Crop), 1);
    assert_eq!(report.written(EntityKind::Animal), 2);
    assert_eq!(report.written(EntityKind::AnimalProduct), 1);
    assert_eq!(report.written(EntityKind::Death), 1);
    assert_eq!(report.total_written(), 10);

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.entity, EntityKind::Individual);
    assert_eq!(failure.group, "individual");
    assert_eq!(failure.index, Some(1));
    assert_eq!(failure.record_id.as_deref(), Some("uuid:ind-2"));
    assert!(store.get(EntityKind::Individual, "uuid:ind-2").unwrap().is_none());
    assert_eq!(store.len(), 10);
}

#[test]
fn household_fields_are_flattened() {
    let mut store = MemoryStore::new();
    pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    let Record::Household(household) = get(&store, EntityKind::Household, "uuid:hh-1") else {
        panic!("expected a household record");
    };
    assert_eq!(household.ward_no, Some(5));
    assert_eq!(household.household_location.as_deref(), Some("POINT(85.3 27.7)"));
    assert_eq!(household.household_altitude, Some(1300.0));
    assert_eq!(household.household_gps_accuracy, None);
    assert_eq!(household.submission_date.as_deref(), Some("2024-03-05"));
    assert_eq!(household.caste.as_deref(), Some("Magar"));
    assert_eq!(
        household.facilities,
        Some(vec!["Radio".to_string(), "Mobile phone".to_string()])
    );
    assert_eq!(household.has_agricultural_land, Some(true));
    assert_eq!(household.has_death, Some(true));
}

#[test]
fn reprocessing_leaves_store_unchanged() {
    let pipeline = pipeline(FailureMode::Partial);
    let submission = submission(household_json());
    let mut store = MemoryStore::new();
    pipeline
        .process(FormKind::Household, &submission, &mut store)
        .unwrap();
    let first = store.clone();
    pipeline
        .process(FormKind::Household, &submission, &mut store)
        .unwrap();
    assert_eq!(store, first);
}

#[test]
fn one_family_members_inherit_family_values() {
    let mut store = MemoryStore::new();
    pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    for record in store.records(EntityKind::Individual) {
        let Record::Individual(individual) = record else {
            panic!("expected an individual record");
        };
        assert_eq!(individual.caste.as_deref(), Some("Magar"));
        assert_eq!(individual.religion.as_deref(), Some("Hindu"));
        assert_eq!(individual.ward_no, Some(5));
        assert_eq!(individual.household_id, "uuid:hh-1");
    }
}

#[test]
fn separate_families_use_member_answers() {
    let mut value = household_json();
    value["id"]["are_a_family"] = json!("no");
    let mut store = MemoryStore::new();
    pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(value), &mut store)
        .unwrap();

    let Record::Individual(ram) = get(&store, EntityKind::Individual, "uuid:ind-1") else {
        panic!("expected an individual record");
    };
    assert_eq!(ram.caste.as_deref(), Some("Brahmin"));
    assert_eq!(ram.religion, None);

    let Record::Household(household) = get(&store, EntityKind::Household, "uuid:hh-1") else {
        panic!("expected a household record");
    };
    assert_eq!(household.caste.as_deref(), Some("Magar"));
}

#[test]
fn siblings_and_age_gate_apply_per_member() {
    let mut store = MemoryStore::new();
    pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    let Record::Individual(ram) = get(&store, EntityKind::Individual, "uuid:ind-1") else {
        panic!("expected an individual record");
    };
    assert_eq!(ram.marital_status.as_deref(), Some("Married"));
    assert_eq!(ram.gender.as_deref(), Some("Male"));
    assert_eq!(ram.has_chronic_disease, Some(true));
    assert_eq!(ram.primary_chronic_disease.as_deref(), Some("diabetes"));
    assert_eq!(ram.is_disabled, Some(false));
    assert_eq!(ram.literacy_status, None);

    let Record::Individual(hari) = get(&store, EntityKind::Individual, "uuid:ind-3") else {
        panic!("expected an individual record");
    };
    assert_eq!(hari.age, Some(8));
    assert_eq!(hari.marital_status, None);
    assert_eq!(hari.is_disabled, None);
    assert_eq!(hari.literacy_status.as_deref(), Some("literate"));
    assert_eq!(hari.months_worked.as_deref(), Some("none"));
}

#[test]
fn irrigated_area_requires_a_yes() {
    let mut store = MemoryStore::new();
    pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    let Record::LandParcel(irrigated) = get(&store, EntityKind::LandParcel, "uuid:land-1") else {
        panic!("expected a land parcel record");
    };
    assert_eq!(irrigated.land_area, Some(6772.63));
    assert_eq!(irrigated.irrigation_source.as_deref(), Some("canal"));
    assert_eq!(irrigated.irrigated_area, Some(16.93));

    let Record::LandParcel(dry) = get(&store, EntityKind::LandParcel, "uuid:land-2") else {
        panic!("expected a land parcel record");
    };
    assert_eq!(dry.is_land_irrigated, Some(false));
    assert_eq!(dry.irrigated_area, None);
}

#[test]
fn other_animal_uses_free_text_branch() {
    let mut store = MemoryStore::new();
    pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    let Record::Animal(cow) = get(&store, EntityKind::Animal, "uuid:animal-1") else {
        panic!("expected an animal record");
    };
    assert_eq!(cow.animal_name.as_deref(), Some("Cow"));
    assert_eq!(cow.total_animals, Some(2));

    let Record::Animal(yak) = get(&store, EntityKind::Animal, "uuid:animal-2") else {
        panic!("expected an animal record");
    };
    assert_eq!(yak.animal_name, None);
    assert_eq!(yak.animal_name_other.as_deref(), Some("Yak"));
    assert_eq!(yak.total_animals, Some(1));

    let Record::Crop(paddy) = get(&store, EntityKind::Crop, "uuid:crop-1") else {
        panic!("expected a crop record");
    };
    assert_eq!(paddy.category, "food_grain");
    assert_eq!(paddy.crop_name.as_deref(), Some("Paddy"));
    assert_eq!(paddy.area, Some(338.63));
}

#[test]
fn death_record_shape() {
    let mut store = MemoryStore::new();
    pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    let death = get(&store, EntityKind::Death, "uuid:death-1");
    insta::assert_json_snapshot!(death, @r#"
    {
      "id": "uuid:death-1",
      "household_id": "uuid:hh-1",
      "ward_no": 5,
      "death_name": "Gopal",
      "death_gender": "Male",
      "death_age": 70,
      "death_cause": "Old age",
      "death_cause_other": null,
      "fertility_death_condition": null
    }
    "#);
}

#[test]
fn strict_mode_writes_nothing_on_element_failure() {
    let mut store = MemoryStore::new();
    let error = pipeline(FailureMode::Strict)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap_err();

    let PipelineError::Strict { failures, .. } = error else {
        panic!("expected a strict mode failure");
    };
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].record_id.as_deref(), Some("uuid:ind-2"));
    assert!(store.is_empty());
}

#[test]
fn strict_mode_writes_clean_submission_in_one_batch() {
    let mut value = household_json();
    value["individual"][1]["age"] = json!(35);
    let mut store = SqliteStore::open_in_memory().unwrap();
    let report = pipeline(FailureMode::Strict)
        .process(FormKind::Household, &submission(value), &mut store)
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.total_written(), 11);
    assert_eq!(store.count(EntityKind::Individual).unwrap(), 3);
    assert_eq!(store.count(EntityKind::Death).unwrap(), 1);
}

#[test]
fn malformed_base_is_fatal() {
    let mut value = household_json();
    value["id"] = json!("not a section");
    let mut store = MemoryStore::new();
    let error = pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(value), &mut store)
        .unwrap_err();

    assert!(matches!(
        error,
        PipelineError::Base {
            entity: EntityKind::Household,
            ..
        }
    ));
    assert!(store.is_empty());
}

#[test]
fn malformed_group_container_is_reported() {
    let mut value = household_json();
    value["death"]["death_records"] = json!({"__id": "not-an-array"});
    let mut store = MemoryStore::new();
    let report = pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(value), &mut store)
        .unwrap();

    let failure = report
        .failures
        .iter()
        .find(|failure| failure.entity == EntityKind::Death)
        .unwrap();
    assert_eq!(failure.group, "death.death_records");
    assert_eq!(failure.index, None);
    assert_eq!(report.written(EntityKind::Death), 0);
}

/// Memory store that refuses to write one record id.
struct RejectingStore {
    inner: MemoryStore,
    reject: &'static str,
}

impl RecordStore for RejectingStore {
    fn upsert(&mut self, record: &Record) -> Result<(), StoreError> {
        if record.id() == self.reject {
            return Err(StoreError::Column {
                table: record.kind().table(),
                column: "id".to_string(),
                message: "rejected".to_string(),
            });
        }
        self.inner.upsert(record)
    }

    fn upsert_all(&mut self, records: &[Record]) -> Result<(), StoreError> {
        self.inner.upsert_all(records)
    }

    fn count(&self, kind: EntityKind) -> Result<usize, StoreError> {
        self.inner.count(kind)
    }

    fn get(&self, kind: EntityKind, id: &str) -> Result<Option<Record>, StoreError> {
        self.inner.get(kind, id)
    }
}

#[test]
fn failed_element_write_only_drops_itself() {
    let mut store = RejectingStore {
        inner: MemoryStore::new(),
        reject: "uuid:ind-1",
    };
    let report = pipeline(FailureMode::Partial)
        .process(FormKind::Household, &submission(household_json()), &mut store)
        .unwrap();

    assert_eq!(report.written(EntityKind::Household), 1);
    assert_eq!(report.written(EntityKind::Individual), 1);
    assert_eq!(report.written(EntityKind::Death), 1);
    assert_eq!(report.total_written(), 9);

    assert_eq!(report.failures.len(), 2);
    let failure = report
        .failures
        .iter()
        .find(|failure| failure.index == Some(0))
        .unwrap();
    assert_eq!(failure.entity, EntityKind::Individual);
    assert_eq!(failure.group, "individual");
    assert_eq!(failure.record_id.as_deref(), Some("uuid:ind-1"));
    assert!(failure.error.contains("rejected"));

    assert!(store.get(EntityKind::Individual, "uuid:ind-1").unwrap().is_none());
    assert!(store.get(EntityKind::Individual, "uuid:ind-3").unwrap().is_some());
    assert!(store.get(EntityKind::Household, "uuid:hh-1").unwrap().is_some());
    assert_eq!(store.inner.len(), 9);
}
