use rattle_frames::*;
use serde_json::json;

fn parse(value: serde_json::Value) -> ReplayDocument {
    serde_json::from_value(value).unwrap()
}

fn sample_document() -> serde_json::Value {
    json!({
        "header": { "properties": [
            ["TeamSize", { "kind": "IntProperty", "value": { "int": 3 } }],
            ["MapName", { "kind": "NameProperty", "value": { "name": "Stadium_P" } }],
            ["RecordFPS", { "kind": "FloatProperty", "value": { "float": 30.0 } }],
            ["PlayerName", { "kind": "StrProperty", "value": { "str": "Hero" } }],
            ["Goals", { "kind": "ArrayProperty", "value": { "array": [] } }]
        ]},
        "frames": [
            { "time": 0.0, "delta": 0.0, "replications": [
                { "actor_id": 0, "value": { "spawned": {
                    "object_id": 290,
                    "object_name": "Archetypes.Ball.Ball_Default",
                    "name": "Ball_Default_0",
                    "initialization": {
                        "location": { "x": 0.0, "y": 0.0, "z": 93.0 }
                    }
                }}},
                { "actor_id": 1, "value": { "spawned": {
                    "object_id": 301,
                    "object_name": "TAGame.Default__PRI_TA",
                    "name": "PRI_TA_1"
                }}}
            ]},
            { "time": 0.033, "delta": 0.033, "replications": [
                { "actor_id": 0, "value": { "updated": [
                    { "name": "TAGame.RBActor_TA:ReplicatedRBState",
                      "value": { "rigid_body_state": {
                          "sleeping": false,
                          "location": { "x": 10.0, "y": -20.0, "z": 93.0 },
                          "rotation": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 },
                          "linear_velocity": null,
                          "angular_velocity": null
                      }}},
                    { "name": "TAGame.Ball_TA:GameEvent",
                      "value": { "flagged_int": { "flag": true, "int": 6 } } }
                ]}},
                { "actor_id": 1, "value": { "updated": [
                    { "name": "Engine.PlayerReplicationInfo:PlayerName",
                      "value": { "string": "Hero" } },
                    { "name": "TAGame.PRI_TA:SomeFutureProperty",
                      "value": { "applied_damage": { "id": 3 } } }
                ]}}
            ]}
        ]
    })
}

#[test]
fn test_decodes_a_rattletrap_shaped_document() {
    let doc = parse(sample_document());
    assert_eq!(doc.frames.len(), 2);

    let spawned = &doc.frames[0].replications[0];
    assert_eq!(spawned.actor_id, ActorId(0));
    match &spawned.value {
        ReplicationValue::Spawned(spawned) => {
            assert_eq!(spawned.object_id, ObjectId(290));
            assert_eq!(spawned.object_name, "Archetypes.Ball.Ball_Default");
            assert_eq!(spawned.name.as_deref(), Some("Ball_Default_0"));
            let initialization = spawned.initialization.unwrap();
            assert_eq!(initialization.location, Some(Vec3::xyz(0.0, 0.0, 93.0)));
            assert_eq!(initialization.rotation, None);
        }
        other => panic!("expected a spawn, got {:?}", other),
    }

    let updated = &doc.frames[1].replications[0];
    match &updated.value {
        ReplicationValue::Updated(updates) => {
            assert_eq!(updates.len(), 2);
            match &updates[0].value {
                Attribute::RigidBodyState(body) => {
                    assert_eq!(body.location, Some(Vec3::xyz(10.0, -20.0, 93.0)));
                    // Explicit nulls decode the same way as absent keys.
                    assert_eq!(body.linear_velocity, None);
                    assert_eq!(body.angular_velocity, None);
                }
                other => panic!("expected a rigid body state, got {:?}", other),
            }
            assert_eq!(
                updates[1].value,
                Attribute::FlaggedInt(FlaggedInt::new(true, 6))
            );
        }
        other => panic!("expected updates, got {:?}", other),
    }
}

#[test]
fn test_unknown_attribute_kinds_decode_as_other() {
    let doc = parse(sample_document());
    let ReplicationValue::Updated(updates) = &doc.frames[1].replications[1].value else {
        panic!("expected updates");
    };
    assert!(matches!(updates[1].value, Attribute::Other(_)));
}

#[test]
fn test_non_object_attribute_values_decode_as_other() {
    let attribute: Attribute = serde_json::from_value(json!(42)).unwrap();
    assert!(matches!(attribute, Attribute::Other(_)));
}

#[test]
fn test_boost_attribute_uses_the_camel_case_keys() {
    let attribute: Attribute =
        serde_json::from_value(json!({ "boost": { "grantCount": 1, "boostAmount": 80 } }))
            .unwrap();
    assert_eq!(attribute, Attribute::Boost(ReplicatedBoost::new(1, 80)));
}

#[test]
fn test_pickup_attribute_tolerates_null_instigators() {
    let attribute: Attribute = serde_json::from_value(
        json!({ "pickup_new": { "instigator_id": null, "picked_up": 1 } }),
    )
    .unwrap();
    assert_eq!(attribute, Attribute::PickupNew(PickupNew::new(None, 1)));
}

#[test]
fn test_find_property_unwraps_typed_kinds() {
    let doc = parse(sample_document());
    let header = &doc.header;
    assert_eq!(
        header.find_property("TeamSize"),
        Some(PropertyValue::Int(3))
    );
    assert_eq!(
        header.find_property("MapName"),
        Some(PropertyValue::Name("Stadium_P".to_string()))
    );
    assert_eq!(
        header.find_property("RecordFPS"),
        Some(PropertyValue::Float(30.0))
    );
    assert_eq!(
        header.find_property("PlayerName"),
        Some(PropertyValue::Str("Hero".to_string()))
    );
    assert_eq!(header.find_property("Nope"), None);
}

#[test]
fn test_find_property_returns_other_kinds_verbatim() {
    let doc = parse(sample_document());
    assert_eq!(
        doc.header.find_property("Goals"),
        Some(PropertyValue::Other(json!({ "array": [] })))
    );
}

#[test]
fn test_find_property_returns_the_first_match() {
    let header = Header::new(vec![
        (
            "MapName".to_string(),
            HeaderProp::new("StrProperty".to_string(), json!({ "str": "first" })),
        ),
        (
            "MapName".to_string(),
            HeaderProp::new("StrProperty".to_string(), json!({ "str": "second" })),
        ),
    ]);
    assert_eq!(
        header.find_property("MapName"),
        Some(PropertyValue::Str("first".to_string()))
    );
}

#[test]
fn test_parsed_document_processes_end_to_end() {
    let doc = parse(sample_document());
    let table = CsvCollector::process_document(&doc).unwrap();
    // Two frames, a ball in both, no player/car pairs.
    assert_eq!(table.lines().count(), 3);
    let ball_row: Vec<&str> = table.lines().nth(2).unwrap().split(',').collect();
    assert_eq!(ball_row[1], "ball");
    assert_eq!(&ball_row[4..7], ["10", "-20", "93"]);
}
