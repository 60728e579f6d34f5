//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use tbn_core::entities::*;
use tbn_core::enums::*;
use tbn_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_series() -> Series {
    Series {
        id: "ser-a3f8b2c1".into(),
        owner_id: "user-1".into(),
        title: "Naruto".into(),
        author: Some("Masashi Kishimoto".into()),
        description: Some("A young ninja seeks recognition.".into()),
        cover_url: Some("https://img.example/naruto.jpg".into()),
        external_catalog_id: Some("30011".into()),
        created_at: Utc::now(),
    }
}

fn sample_volume() -> Volume {
    Volume {
        id: "vol-0badf00d".into(),
        owner_id: "user-1".into(),
        series_id: "ser-a3f8b2c1".into(),
        volume_number: "1".into(),
        edition_type: EditionType::Omnibus,
        language: "en".into(),
        isbn: Some("9781569319000".into()),
        status: ReadingStatus::Reading,
        created_at: Utc::now(),
    }
}

fn sample_collection() -> Collection {
    Collection {
        id: "col-11112222".into(),
        owner_id: "user-1".into(),
        name: "Shelf A".into(),
        created_at: Utc::now(),
    }
}

roundtrip_and_validate!(series_roundtrip, Series, sample_series());

roundtrip_and_validate!(
    series_without_enrichment_roundtrip,
    Series,
    Series {
        author: None,
        description: None,
        cover_url: None,
        external_catalog_id: None,
        ..sample_series()
    }
);

roundtrip_and_validate!(volume_roundtrip, Volume, sample_volume());

roundtrip_and_validate!(
    volume_with_series_roundtrip,
    VolumeWithSeries,
    VolumeWithSeries {
        volume: sample_volume(),
        series: sample_series(),
    }
);

roundtrip_and_validate!(
    volume_listing_roundtrip,
    VolumeListing,
    VolumeListing {
        entry: VolumeWithSeries {
            volume: sample_volume(),
            series: sample_series(),
        },
        in_collection: true,
    }
);

roundtrip_and_validate!(collection_roundtrip, Collection, sample_collection());

roundtrip_and_validate!(
    collection_summary_roundtrip,
    CollectionSummary,
    CollectionSummary {
        collection: sample_collection(),
        volume_count: 2,
        cover_url: None,
    }
);

roundtrip_and_validate!(
    collection_details_roundtrip,
    CollectionDetails,
    CollectionDetails {
        collection: sample_collection(),
        volumes: vec![VolumeWithSeries {
            volume: sample_volume(),
            series: sample_series(),
        }],
    }
);

roundtrip_and_validate!(
    membership_roundtrip,
    CollectionMembership,
    CollectionMembership {
        collection_id: "col-11112222".into(),
        volume_id: "vol-0badf00d".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    import_outcome_roundtrip,
    ImportOutcome,
    ImportOutcome {
        total: 2,
        success_count: 1,
        failure_count: 1,
        errors: vec![r#"Missing title or volume for row: {"Volume":"3"}"#.into()],
    }
);

roundtrip_and_validate!(
    added_volume_roundtrip,
    AddedVolume,
    AddedVolume {
        volume: sample_volume(),
        collection_id: Some("col-11112222".into()),
    }
);

#[test]
fn flattened_volume_keeps_volume_fields_at_top_level() {
    let json = serde_json::to_value(VolumeWithSeries {
        volume: sample_volume(),
        series: sample_series(),
    })
    .unwrap();
    assert_eq!(json["volume_number"], "1");
    assert_eq!(json["edition_type"], "Omnibus");
    assert_eq!(json["status"], "reading");
    assert_eq!(json["series"]["title"], "Naruto");
}
