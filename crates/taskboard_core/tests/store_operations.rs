use taskboard_core::{
    Attachment, Comment, Project, ProjectId, Snapshot, StoreError, Task, TaskId, TaskStatus, User,
};

const NOW: i64 = 1_700_000_000_000;

fn owner() -> User {
    User::new("1", "John Doe", "john@example.com")
}

fn task(id: &str, project_id: &str) -> Task {
    Task::new(id, project_id, format!("Task {id}"), owner(), NOW)
}

fn comment(id: &str) -> Comment {
    Comment {
        id: id.into(),
        content: format!("comment {id}"),
        created_at: NOW,
        user: owner(),
    }
}

fn attachment(id: &str) -> Attachment {
    Attachment {
        id: id.into(),
        name: format!("{id}.pdf"),
        url: "#".to_string(),
        kind: "pdf".to_string(),
        created_at: NOW,
    }
}

fn board() -> Snapshot {
    let mut alpha = Project::new("a", "Alpha", "#FF6B6B", NOW);
    alpha.members.push(owner());
    alpha.tasks.push(task("a-1", "a"));
    let mut parent = task("a-2", "a");
    let mut child = task("a-2-1", "a");
    child.parent_id = Some("a-2".into());
    parent.subtasks.push(child);
    alpha.tasks.push(parent);

    let mut beta = Project::new("b", "Beta", "#4ECDC4", NOW);
    beta.tasks.push(task("b-1", "b"));

    Snapshot::new(vec![alpha, beta], Some(owner()))
}

fn pid(value: &str) -> ProjectId {
    ProjectId::from(value)
}

fn tid(value: &str) -> TaskId {
    TaskId::from(value)
}

#[test]
fn add_project_appends_in_order() {
    let before = board();
    let after = before.add_project(Project::new("c", "Gamma", "#95A5A6", NOW));

    assert_eq!(after.project_ids(), vec![pid("a"), pid("b"), pid("c")]);
    assert_eq!(before.project_count(), 2);
}

#[test]
fn update_project_replaces_whole_value_without_merging() {
    let before = board();
    let mut replacement = Project::new("a", "Alpha v2", "#000000", NOW);
    replacement.tasks.push(task("a-9", "a"));

    let after = before.update_project(replacement.clone()).unwrap();

    assert_eq!(after.project(&pid("a")), Some(replacement));
    assert_eq!(after.project_ids(), vec![pid("a"), pid("b")]);
    assert!(after.task(&tid("a-1")).is_none());
    assert!(after.task(&tid("a-2-1")).is_none());
    assert_eq!(after.project(&pid("b")), before.project(&pid("b")));
}

#[test]
fn update_project_with_unknown_id_leaves_snapshot_unchanged() {
    let before = board();
    let err = before
        .update_project(Project::new("zzz", "Ghost", "#000000", NOW))
        .unwrap_err();
    assert_eq!(err, StoreError::ProjectNotFound(pid("zzz")));
}

#[test]
fn delete_project_removes_it_and_its_tasks() {
    let after = board().delete_project(&pid("a")).unwrap();

    assert_eq!(after.project_ids(), vec![pid("b")]);
    assert!(after.task(&tid("a-2")).is_none());
    assert!(after.task(&tid("a-2-1")).is_none());
    assert!(after.task(&tid("b-1")).is_some());
}

#[test]
fn delete_project_with_unknown_id_is_rejected() {
    let err = board().delete_project(&pid("missing")).unwrap_err();
    assert_eq!(err, StoreError::ProjectNotFound(pid("missing")));
}

#[test]
fn set_current_project_keeps_the_given_value() {
    let before = board();
    let alpha = before.project(&pid("a")).unwrap();
    let selected = before.set_current_project(&alpha);
    assert_eq!(selected.current_project(), Some(&alpha));
    assert_eq!(selected.current_project_id(), Some(&pid("a")));

    let grown = selected.add_task(&pid("a"), task("a-3", "a")).unwrap();
    assert_eq!(grown.current_project(), Some(&alpha));
    assert_eq!(grown.project(&pid("a")).unwrap().tasks.len(), 3);

    let deleted = grown.delete_project(&pid("a")).unwrap();
    assert_eq!(deleted.current_project(), Some(&alpha));
}

#[test]
fn set_current_project_accepts_project_outside_the_list() {
    let detached = Project::new("z", "Zeta", "#000000", NOW);
    let selected = board().set_current_project(&detached);

    assert_eq!(selected.current_project(), Some(&detached));
    assert!(selected.project(&pid("z")).is_none());
}

#[test]
fn add_task_isolated_from_other_projects() {
    let before = board();
    let after = before.add_task(&pid("a"), task("a-3", "a")).unwrap();

    let alpha = after.project(&pid("a")).unwrap();
    assert_eq!(alpha.tasks.last().map(|t| t.id.clone()), Some(tid("a-3")));
    assert_eq!(after.project(&pid("b")), before.project(&pid("b")));
}

#[test]
fn add_task_to_unknown_project_is_rejected() {
    let before = board();
    let err = before.add_task(&pid("nope"), task("x", "nope")).unwrap_err();
    assert_eq!(err, StoreError::ProjectNotFound(pid("nope")));
    assert!(before.task(&tid("x")).is_none());
}

#[test]
fn update_task_replaces_top_level_task_in_place() {
    let before = board();
    let mut replacement = task("a-1", "a");
    replacement.title = "Renamed".to_string();
    replacement.status = TaskStatus::Completed;

    let after = before.update_task(&pid("a"), replacement.clone()).unwrap();

    let alpha = after.project(&pid("a")).unwrap();
    assert_eq!(alpha.tasks[0], replacement);
    assert_eq!(alpha.tasks[1], before.project(&pid("a")).unwrap().tasks[1]);
}

#[test]
fn update_task_drops_subtasks_missing_from_replacement() {
    let before = board();
    let after = before.update_task(&pid("a"), task("a-2", "a")).unwrap();

    assert!(after.task(&tid("a-2")).unwrap().subtasks.is_empty());
    assert!(after.task(&tid("a-2-1")).is_none());
}

#[test]
fn update_task_with_unknown_project_is_a_no_op() {
    let before = board();
    let err = before
        .update_task(&pid("unknown"), task("a-1", "unknown"))
        .unwrap_err();
    assert_eq!(err, StoreError::ProjectNotFound(pid("unknown")));
}

#[test]
fn update_task_does_not_descend_into_subtasks() {
    let err = board()
        .update_task(&pid("a"), task("a-2-1", "a"))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::TaskNotFound {
            project_id: pid("a"),
            task_id: tid("a-2-1"),
        }
    );
}

#[test]
fn update_task_in_wrong_project_is_rejected() {
    let err = board().update_task(&pid("b"), task("a-1", "b")).unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound { .. }));
}

#[test]
fn delete_task_removes_task_and_subtree() {
    let after = board().delete_task(&pid("a"), &tid("a-2")).unwrap();

    let alpha = after.project(&pid("a")).unwrap();
    let ids: Vec<TaskId> = alpha.tasks.iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, vec![tid("a-1")]);
    assert!(after.task(&tid("a-2-1")).is_none());
}

#[test]
fn delete_unknown_task_leaves_snapshot_unchanged() {
    let before = board();
    let err = before.delete_task(&pid("a"), &tid("ghost")).unwrap_err();
    assert_eq!(
        err,
        StoreError::TaskNotFound {
            project_id: pid("a"),
            task_id: tid("ghost"),
        }
    );
    assert_eq!(before, board());
}

#[test]
fn add_subtask_appends_to_parent() {
    let before = board();
    let mut subtask = task("a-2-2", "a");
    subtask.parent_id = Some(tid("a-2"));

    let after = before
        .add_subtask(&pid("a"), &tid("a-2"), subtask.clone())
        .unwrap();

    let old = before.task(&tid("a-2")).unwrap().subtasks;
    let new = after.task(&tid("a-2")).unwrap().subtasks;
    assert_eq!(new.len(), old.len() + 1);
    assert_eq!(new[..old.len()], old[..]);
    assert_eq!(new.last(), Some(&subtask));
}

#[test]
fn add_subtask_to_unknown_parent_is_rejected() {
    let err = board()
        .add_subtask(&pid("a"), &tid("nope"), task("s", "a"))
        .unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound { .. }));
}

#[test]
fn add_comment_appends_at_end() {
    let before = board()
        .add_comment(&pid("a"), &tid("a-1"), comment("c1"))
        .unwrap();
    let after = before
        .add_comment(&pid("a"), &tid("a-1"), comment("c2"))
        .unwrap();

    let comments = after.task(&tid("a-1")).unwrap().comments;
    assert_eq!(comments, vec![comment("c1"), comment("c2")]);
    assert_eq!(before.task(&tid("a-1")).unwrap().comments, vec![comment("c1")]);
}

#[test]
fn add_comment_cannot_target_subtask() {
    let err = board()
        .add_comment(&pid("a"), &tid("a-2-1"), comment("c1"))
        .unwrap_err();
    assert!(matches!(err, StoreError::TaskNotFound { .. }));
}

#[test]
fn add_attachment_appends_at_end() {
    let first = board()
        .add_attachment(&pid("b"), &tid("b-1"), attachment("f1"))
        .unwrap();
    let second = first
        .add_attachment(&pid("b"), &tid("b-1"), attachment("f2"))
        .unwrap();

    let attachments = second.task(&tid("b-1")).unwrap().attachments;
    assert_eq!(attachments, vec![attachment("f1"), attachment("f2")]);
}

#[test]
fn add_attachment_with_unknown_task_is_rejected() {
    let err = board()
        .add_attachment(&pid("b"), &tid("a-1"), attachment("f1"))
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::TaskNotFound {
            project_id: pid("b"),
            task_id: tid("a-1"),
        }
    );
}

#[test]
fn prior_snapshot_survives_a_chain_of_writes() {
    let original = board();
    let after = original
        .delete_task(&pid("a"), &tid("a-1"))
        .and_then(|s| s.add_task(&pid("b"), task("b-2", "b")))
        .and_then(|s| s.add_comment(&pid("b"), &tid("b-2"), comment("c9")))
        .unwrap();

    assert_eq!(original, board());
    assert_ne!(original, after);
    assert_eq!(after.task_count(), original.task_count());
}

#[test]
fn colliding_task_ids_stay_scoped_to_their_project() {
    let mut original = task("x", "a");
    original.title = "Original in A".to_string();
    let before = board().add_task(&pid("a"), original.clone()).unwrap();
    let alpha_before = before.project(&pid("a")).unwrap();

    let mut newcomer = task("x", "b");
    newcomer.title = "New in B".to_string();
    let added = before.add_task(&pid("b"), newcomer.clone()).unwrap();
    assert_eq!(added.project(&pid("a")).unwrap(), alpha_before);
    assert_eq!(added.project(&pid("b")).unwrap().tasks.last(), Some(&newcomer));

    let updated = added
        .update_task(&pid("b"), Task { status: TaskStatus::Completed, ..newcomer })
        .unwrap();
    assert_eq!(updated.project(&pid("a")).unwrap(), alpha_before);

    let deleted = updated.delete_task(&pid("b"), &tid("x")).unwrap();
    assert_eq!(deleted.project(&pid("a")).unwrap(), alpha_before);
    assert_eq!(deleted.project(&pid("b")).unwrap().tasks.len(), 1);
}

#[test]
fn moving_a_task_between_projects_with_two_updates_keeps_it() {
    let before = board();
    let moved = before.task(&tid("a-1")).unwrap();

    let mut beta = before.project(&pid("b")).unwrap();
    beta.tasks.push(moved.clone());
    let mut alpha = before.project(&pid("a")).unwrap();
    alpha.tasks.retain(|t| t.id != moved.id);

    let after = before
        .update_project(beta)
        .and_then(|s| s.update_project(alpha))
        .unwrap();

    let beta_tasks = after.project(&pid("b")).unwrap().tasks;
    assert_eq!(beta_tasks.len(), 2);
    assert_eq!(beta_tasks[1], moved);
    assert_eq!(after.project(&pid("a")).unwrap().tasks.len(), 1);
    assert_eq!(after.task_count(), before.task_count());
}

#[test]
fn removals_fit_on_a_default_sized_thread_stack() {
    let worker = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(|| {
            let before = board();
            let mut replacement = before.project(&pid("a")).unwrap();
            replacement.tasks.truncate(1);
            let after = before
                .delete_task(&pid("a"), &tid("a-2"))
                .and_then(|s| s.update_task(&pid("a"), task("a-1", "a")))
                .and_then(|s| s.update_project(replacement))
                .and_then(|s| s.delete_project(&pid("b")))
                .unwrap();
            after.task_count()
        })
        .unwrap();

    assert_eq!(worker.join().unwrap(), 1);
}
