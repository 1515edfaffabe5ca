//! Serde roundtrip and JsonSchema validation tests for all entity types.

use apis_core::entities::*;
use apis_core::enums::*;
use apis_core::inputs::*;
use apis_core::responses::*;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;

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

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
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

fn sample_alert() -> Alert {
    Alert {
        id: "alr-a3f8b2c1".into(),
        alert_type: AlertType::Pest,
        title: "Varroa Mites Detected".into(),
        message: "Varroa mites detected in Hive hiv-00000001. Consider treatment options.".into(),
        severity: AlertSeverity::Critical,
        timestamp: Utc::now(),
        hive_ids: vec!["hiv-00000001".into()],
        dismissed: false,
    }
}

fn sample_task() -> Task {
    let now = Utc::now();
    Task {
        id: "tsk-0badcafe".into(),
        title: "Add a super".into(),
        description: Some("Colony is filling the brood box".into()),
        task_type: TaskType::AddBoxes,
        due_date: now + Duration::days(3),
        reminder_date: Some(now + Duration::days(2)),
        hive_id: Some("hiv-00000001".into()),
        apiary_id: None,
        user_id: "usr-00000001".into(),
        status: TaskStatus::Pending,
        priority: TaskPriority::High,
        completed_date: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

fn sample_inspection() -> Inspection {
    let now = Utc::now();
    Inspection {
        id: "ins-12345678".into(),
        hive_id: "hiv-00000001".into(),
        user_id: "usr-00000001".into(),
        inspection_date: now - Duration::days(2),
        duration_minutes: Some(25),
        queen_seen: false,
        queen_marked: false,
        queen_cells: QueenCellStatus::SwarmCells,
        brood_pattern: BroodPattern::Spotty,
        temperament: ColonyTemperament::Defensive,
        population: ColonyPopulation::Strong,
        health_status: HealthStatus::Concerning,
        varroa_mites_detected: true,
        disease_detected: true,
        disease_description: Some("chalkbrood".into()),
        pests_notes: Some("small hive beetle near the entrance".into()),
        honey_stores: ResourceLevel::VeryLow,
        pollen_stores: ResourceLevel::Good,
        notes: None,
        next_inspection_date: Some(now + Duration::days(7)),
        created_at: now,
        updated_at: now,
    }
}

roundtrip_and_validate!(alert_roundtrip, Alert, sample_alert());

roundtrip_and_validate!(
    general_alert_roundtrip,
    Alert,
    Alert {
        id: "alr-00000002".into(),
        alert_type: AlertType::Seasonal,
        title: "Swarm Season Alert".into(),
        message: "Spring swarm season is here.".into(),
        severity: AlertSeverity::Info,
        timestamp: Utc::now(),
        hive_ids: vec![],
        dismissed: true,
    }
);

roundtrip_and_validate!(task_roundtrip, Task, sample_task());

roundtrip_and_validate!(inspection_roundtrip, Inspection, sample_inspection());

roundtrip_and_validate!(
    apiary_roundtrip,
    Apiary,
    Apiary {
        id: "api-00c0ffee".into(),
        name: "Orchard".into(),
        location: "North field".into(),
        latitude: Some(45.25),
        longitude: Some(-122.5),
        status: ApiaryStatus::Warning,
        hive_count: 4,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    hive_roundtrip,
    Hive,
    Hive {
        id: "hiv-00000001".into(),
        name: "Queen Bee Palace".into(),
        apiary_id: "api-00c0ffee".into(),
        status: HiveStatus::NeedsInspection,
        last_inspected: None,
        image_url: Some("https://example.invalid/hive.jpg".into()),
        colony_strength: ColonyStrength::Strong,
        queen_status: QueenStatus::Laying,
        temperament: HiveTemperament::Moderate,
        honey_stores: HoneyStores::Low,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    recommendation_roundtrip,
    Recommendation,
    Recommendation {
        id: "rec-00000001".into(),
        hive_id: "hiv-00000001".into(),
        recommendation_type: RecommendationType::ActionRequired,
        title: "Treat for varroa".into(),
        description: "Mite counts are above threshold.".into(),
        priority: Priority::High,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "usr-00000001".into(),
        email: "keeper@example.invalid".into(),
        name: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_alert_roundtrip,
    NewAlert,
    NewAlert {
        alert_type: AlertType::Weather,
        title: "Cold snap".into(),
        message: "Frost expected overnight.".into(),
        severity: AlertSeverity::Warning,
        hive_ids: vec!["hiv-00000001".into(), "hiv-00000002".into()],
    }
);

roundtrip_and_validate!(
    advisor_report_roundtrip,
    AdvisorReport,
    AdvisorReport {
        existing: 1,
        generated: 1,
        suppressed: 0,
        alerts: vec![sample_alert()],
    }
);

roundtrip_and_validate!(
    overdue_sweep_roundtrip,
    OverdueSweep,
    OverdueSweep { marked: 3 }
);

#[test]
fn alert_json_uses_wire_field_names() {
    let json = serde_json::to_value(sample_alert()).unwrap();
    let obj = json.as_object().unwrap();
    let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "dismissed",
            "hiveIds",
            "id",
            "message",
            "severity",
            "timestamp",
            "title",
            "type"
        ]
    );
    assert_eq!(json["type"], "PEST");
    assert_eq!(json["severity"], "CRITICAL");
    assert_eq!(json["hiveIds"], serde_json::json!(["hiv-00000001"]));
}

#[test]
fn alert_defaults_missing_hive_ids_and_dismissed() {
    let alert: Alert = serde_json::from_value(serde_json::json!({
        "id": "alr-00000003",
        "type": "GENERAL",
        "title": "Note",
        "message": "Something happened",
        "severity": "INFO",
        "timestamp": "2025-03-01T08:00:00Z"
    }))
    .unwrap();
    assert!(alert.hive_ids.is_empty());
    assert!(!alert.dismissed);
    assert!(alert.is_active());
}

#[test]
fn task_json_is_camel_case() {
    let json = serde_json::to_value(sample_task()).unwrap();
    assert!(json.get("dueDate").is_some());
    assert!(json.get("taskType").is_some());
    assert_eq!(json["taskType"], "ADD_BOXES");
    assert!(json.get("due_date").is_none());
}

#[test]
fn overdue_requires_pending_and_past_due() {
    let now = Utc::now();
    let mut task = sample_task();
    task.due_date = now - Duration::hours(1);
    assert!(task.is_overdue_at(now));

    task.status = TaskStatus::InProgress;
    assert!(!task.is_overdue_at(now));

    task.status = TaskStatus::Pending;
    task.due_date = now;
    assert!(!task.is_overdue_at(now));
}
