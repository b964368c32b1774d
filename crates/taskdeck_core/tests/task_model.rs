use taskdeck_core::{Category, Priority, Task, DEFAULT_CATEGORY_COLOR};

#[test]
fn task_serde_roundtrip_preserves_all_fields() {
    let mut task = Task::new("Write report", "Work");
    task.description = "quarterly numbers".to_string();
    task.priority = Priority::High;

    let raw = serde_json::to_string(&task).unwrap();
    let restored: Task = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, task);
}

#[test]
fn category_serde_roundtrip_preserves_all_fields() {
    let category = Category::with_color("Fitness", "#22C55E");

    let raw = serde_json::to_string(&category).unwrap();
    let restored: Category = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, category);
}

#[test]
fn task_record_uses_flat_camel_case_layout() {
    let task = Task::new("Buy milk", "Shopping");
    let value = serde_json::to_value(&task).unwrap();
    let record = value.as_object().unwrap();

    for key in [
        "id",
        "title",
        "description",
        "category",
        "priority",
        "isCompleted",
        "createdAt",
        "updatedAt",
    ] {
        assert!(record.contains_key(key), "missing key `{key}`");
    }
    assert_eq!(record.len(), 8);
    assert_eq!(record["priority"], "medium");
}

#[test]
fn timestamps_deserialize_from_text_or_epoch_millis() {
    let raw = serde_json::json!({
        "id": "4f5a1f64-5717-4562-b3fc-2c963f66afa6",
        "title": "Imported",
        "description": "",
        "category": "Work",
        "priority": "high",
        "isCompleted": true,
        "createdAt": 1700000000000_i64,
        "updatedAt": "2024-01-15T10:30:00Z"
    });

    let task: Task = serde_json::from_value(raw).unwrap();
    assert_eq!(task.created_at().timestamp_millis(), 1_700_000_000_000);
    assert_eq!(
        task.updated_at().to_rfc3339(),
        "2024-01-15T10:30:00+00:00"
    );
    assert_eq!(task.priority, Priority::High);
    assert!(task.is_completed);
}

#[test]
fn missing_optional_fields_default_on_load() {
    let raw = serde_json::json!({
        "id": "4f5a1f64-5717-4562-b3fc-2c963f66afa6",
        "title": "Sparse record",
        "category": "Work",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    });

    let task: Task = serde_json::from_value(raw).unwrap();
    assert_eq!(task.description, "");
    assert_eq!(task.priority, Priority::Medium);
    assert!(!task.is_completed);
}

#[test]
fn category_missing_color_defaults_on_load() {
    let raw = serde_json::json!({
        "id": "4f5a1f64-5717-4562-b3fc-2c963f66afa6",
        "name": "Errands",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    });

    let category: Category = serde_json::from_value(raw).unwrap();
    assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
}

#[test]
fn toggle_completion_is_self_inverse_and_advances_updated_at() {
    let mut task = Task::new("Flip me", "Work");
    assert!(!task.is_completed);

    let before_first = task.updated_at();
    std::thread::sleep(std::time::Duration::from_millis(2));
    task.toggle_completion();
    assert!(task.is_completed);
    assert!(task.updated_at() > before_first);

    let before_second = task.updated_at();
    std::thread::sleep(std::time::Duration::from_millis(2));
    task.toggle_completion();
    assert!(!task.is_completed);
    assert!(task.updated_at() > before_second);
}

#[test]
fn unparseable_timestamp_is_a_record_error() {
    let raw = serde_json::json!({
        "id": "4f5a1f64-5717-4562-b3fc-2c963f66afa6",
        "title": "Bad clock",
        "category": "Work",
        "createdAt": "yesterday-ish",
        "updatedAt": "2024-01-01T00:00:00Z"
    });

    assert!(serde_json::from_value::<Task>(raw).is_err());
}
