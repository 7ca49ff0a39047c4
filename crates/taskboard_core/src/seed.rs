//! Fixture board used to initialize a fresh store.
//!
//! All timestamps are day offsets from the caller-supplied `now`, so the
//! fixture is deterministic for a given instant.

use crate::model::ids::{EpochMs, DAY_MS};
use crate::model::project::Project;
use crate::model::task::{Attachment, Comment, Task, TaskPriority, TaskStatus};
use crate::model::user::User;
use crate::store::snapshot::Snapshot;

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Fixture users, ids `1`, `2`, `3`.
pub fn users() -> Vec<User> {
    fixture_users().to_vec()
}

/// Fixture snapshot: three projects, current user `1`, nothing selected.
pub fn snapshot(now: EpochMs) -> Snapshot {
    let current_user = users().into_iter().next();
    Snapshot::new(projects(now), current_user)
}

/// Fixture projects with their task trees.
pub fn projects(now: EpochMs) -> Vec<Project> {
    let [john, jane, bob] = fixture_users();
    let days = |offset: i64| now + offset * DAY_MS;

    let mut website = Project::new("1", "Website Redesign", "#FF6B6B", days(-10));
    website.description = "Complete overhaul of the company website with modern design and improved user experience".to_string();
    website.members = vec![john.clone(), jane.clone(), bob.clone()];
    website.updated_at = days(-1);

    let mut homepage = Task::new("101", "1", "Design Homepage", john.clone(), days(-5));
    homepage.description =
        "Create a modern and engaging homepage design with clear call-to-actions".to_string();
    homepage.status = TaskStatus::Completed;
    homepage.priority = TaskPriority::High;
    homepage.assignee = Some(jane.clone());
    homepage.due_date = Some(days(5));
    homepage.attachments.push(Attachment {
        id: "a1".into(),
        name: "homepage-mockup.fig".to_string(),
        url: "#".to_string(),
        kind: "figma".to_string(),
        created_at: days(-2),
    });
    homepage.comments.push(Comment {
        id: "c1".into(),
        content: "Design looks great! Ready for development.".to_string(),
        created_at: days(-1),
        user: bob.clone(),
    });
    homepage.updated_at = days(-1);

    let mut responsive = Task::new("102", "1", "Implement Responsive Layout", john.clone(), days(-4));
    responsive.description = "Ensure website works perfectly on all device sizes".to_string();
    responsive.status = TaskStatus::InProgress;
    responsive.assignee = Some(bob.clone());
    responsive.due_date = Some(days(7));
    responsive.updated_at = days(-2);

    let mut mobile_nav = Task::new("102-1", "1", "Mobile Navigation", john.clone(), days(-3));
    mobile_nav.description = "Implement hamburger menu for mobile devices".to_string();
    mobile_nav.status = TaskStatus::Completed;
    mobile_nav.parent_id = Some("102".into());
    responsive.subtasks.push(mobile_nav);

    website.tasks = vec![homepage, responsive];

    let mut mobile = Project::new("2", "Mobile App Development", "#4ECDC4", days(-5));
    mobile.description =
        "Build a cross-platform mobile app for our service using React Native".to_string();
    mobile.members = vec![john.clone(), jane.clone()];
    mobile.updated_at = days(-1);

    let mut auth = Task::new("201", "2", "User Authentication", jane.clone(), days(-2));
    auth.description = "Implement secure login and registration system".to_string();
    auth.priority = TaskPriority::High;
    auth.assignee = Some(john);
    auth.due_date = Some(days(3));

    let mut push = Task::new("202", "2", "Push Notifications", jane.clone(), days(-1));
    push.description = "Set up push notifications for important updates".to_string();
    push.due_date = Some(days(10));

    mobile.tasks = vec![auth, push];

    let mut marketing = Project::new("3", "Marketing Campaign", "#95A5A6", days(-7));
    marketing.description = "Q4 marketing campaign for product launch".to_string();
    marketing.members = vec![jane.clone(), bob.clone()];
    marketing.updated_at = now;

    let mut social = Task::new("301", "3", "Social Media Strategy", jane.clone(), days(-3));
    social.description = "Develop comprehensive social media strategy for launch".to_string();
    social.status = TaskStatus::Completed;
    social.priority = TaskPriority::High;
    social.assignee = Some(bob);
    social.due_date = Some(days(1));
    social.attachments.push(Attachment {
        id: "a2".into(),
        name: "social-media-plan.pdf".to_string(),
        url: "#".to_string(),
        kind: "pdf".to_string(),
        created_at: days(-1),
    });
    social.comments.push(Comment {
        id: "c2".into(),
        content: "Strategy approved by marketing team".to_string(),
        created_at: now,
        user: jane,
    });
    social.updated_at = now;

    marketing.tasks = vec![social];

    vec![website, mobile, marketing]
}

fn fixture_users() -> [User; 3] {
    [
        User::new("1", "John Doe", "john@example.com").with_avatar(format!("{AVATAR_BASE}John")),
        User::new("2", "Jane Smith", "jane@example.com").with_avatar(format!("{AVATAR_BASE}Jane")),
        User::new("3", "Bob Wilson", "bob@example.com").with_avatar(format!("{AVATAR_BASE}Bob")),
    ]
}
