mod common;

use common::CommonTestFixture;
use termfold::{MappingRecord, Scope};

#[test]
fn resolve_direct_and_two_hop_targets_from_loaded_graph() {
    let fixture = CommonTestFixture::new();
    fixture.load_sample_graph();

    let records = fixture
        .node
        .resolver()
        .resolve(&["ICD10:G35".to_string()], &["DOID".to_string()], 3)
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.curie, "DOID:2377");
    assert_eq!(record.label.as_deref(), Some("multiple sclerosis"));
    assert_eq!(record.source_prefixes, vec!["ICD10"]);
    assert_eq!(record.target_prefix, "DOID");
    assert_eq!(record.distance, 2);
    assert_eq!(record.scope, Some(Scope::Exact));
}

#[test]
fn resolve_merges_inputs_reaching_the_same_target() {
    let fixture = CommonTestFixture::new();
    fixture.load_sample_graph();

    let records = fixture
        .node
        .resolver()
        .resolve(
            &["MESH:D009103".to_string(), "ICD10:G35".to_string()],
            &["DOID".to_string()],
            3,
        )
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.source_prefixes, vec!["MESH", "ICD10"]);
    assert_eq!(record.distance, 1, "closest input wins");
}

#[test]
fn resolve_respects_distance_limit() {
    let fixture = CommonTestFixture::new();
    fixture.load_sample_graph();

    let records = fixture
        .node
        .resolver()
        .resolve(&["ICD10:G35".to_string()], &["DOID".to_string()], 1)
        .unwrap();
    assert!(records.is_empty(), "DOID:2377 is two hops from ICD10:G35");
}

#[test]
fn resolved_records_serialize_with_the_wire_field_names() {
    let fixture = CommonTestFixture::new();
    fixture.load_sample_graph();

    let records = fixture
        .node
        .resolver()
        .resolve(&["MESH:D009103".to_string()], &["DOID".to_string()], 3)
        .unwrap();

    let json = serde_json::to_string(&records).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["curie"], "DOID:2377");
    assert_eq!(value[0]["sourcePrefixes"][0], "MESH");
    assert_eq!(value[0]["targetPrefix"], "DOID");
    assert_eq!(value[0]["scope"], "EXACT");

    let back: Vec<MappingRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, records);
}

#[test]
fn resolve_after_wipe_finds_nothing() {
    let fixture = CommonTestFixture::new();
    fixture.load_sample_graph();
    fixture.node.wipe().unwrap();

    let records = fixture
        .node
        .resolver()
        .resolve(&["MESH:D009103".to_string()], &[], 3)
        .unwrap();
    assert!(records.is_empty());
}
