use taskboard_core::{Action, Attachment, Task, TaskPriority, TaskStatus, User};

#[test]
fn task_new_sets_defaults() {
    let creator = User::new("1", "John Doe", "john@example.com");
    let task = Task::new("101", "1", "Design Homepage", creator.clone(), 42);

    assert_eq!(task.id.as_str(), "101");
    assert_eq!(task.project_id.as_str(), "1");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.creator, creator);
    assert_eq!(task.assignee, None);
    assert_eq!(task.due_date, None);
    assert!(task.is_top_level());
    assert!(task.attachments.is_empty());
    assert!(task.comments.is_empty());
    assert!(task.subtasks.is_empty());
    assert_eq!(task.created_at, 42);
    assert_eq!(task.updated_at, 42);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(
        "102",
        "1",
        "Implement Responsive Layout",
        User::new("1", "John Doe", "john@example.com"),
        1_700_000_000_000,
    );
    task.status = TaskStatus::InProgress;
    task.priority = TaskPriority::High;
    task.attachments.push(Attachment {
        id: "a1".into(),
        name: "mockup.fig".to_string(),
        url: "#".to_string(),
        kind: "figma".to_string(),
        created_at: 1_700_000_000_000,
    });

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], "102");
    assert_eq!(json["project_id"], "1");
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["attachments"][0]["type"], "figma");
    assert!(json.get("parent_id").is_none());
    assert!(json.get("due_date").is_none());
    assert!(json.get("assignee").is_none());
    assert!(json["creator"].get("avatar").is_none());

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "1",
        "title": "x",
        "description": "",
        "status": "blocked",
        "priority": "low",
        "creator": { "id": "1", "name": "J", "email": "j@x.io" },
        "project_id": "1",
        "created_at": 0,
        "updated_at": 0
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(err.to_string().contains("blocked"), "unexpected error: {err}");
}

#[test]
fn deserialize_defaults_missing_collections() {
    let value = serde_json::json!({
        "id": "1",
        "title": "x",
        "description": "",
        "status": "todo",
        "priority": "low",
        "creator": { "id": "1", "name": "J", "email": "j@x.io" },
        "parent_id": "0",
        "project_id": "1",
        "created_at": 0,
        "updated_at": 5
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert!(task.subtasks.is_empty());
    assert_eq!(task.parent_id.as_ref().map(|id| id.as_str()), Some("0"));
    assert!(!task.is_top_level());
}

#[test]
fn action_is_tagged_by_name() {
    let action = Action::DeleteTask {
        project_id: "1".into(),
        task_id: "101".into(),
    };

    let json = serde_json::to_value(&action).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "action": "delete_task", "project_id": "1", "task_id": "101" })
    );
    assert_eq!(action.name(), "delete_task");
    assert_eq!(action.project_id().as_str(), "1");

    let decoded: Action = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, action);
}
