use super::*;

fn milestone(name: &str, completed: bool) -> Milestone {
    Milestone { name: name.to_owned(), completed }
}

fn sample() -> Project {
    Project {
        id: 7,
        title: "Night Drive".to_owned(),
        description: "Synthwave EP".to_owned(),
        cover_image: None,
        image: "/img/night-drive.jpg".to_owned(),
        milestones: vec![],
        is_public: true,
        disciplines: vec![],
        invited_users: vec![],
        owner: Some("CurrentUser".to_owned()),
        goals: vec![],
        deadlines: vec![],
        links: vec![],
    }
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_of_empty_milestones_is_zero() {
    assert!(progress_percent(&[]).abs() < f64::EPSILON);
}

#[test]
fn progress_two_of_four_is_half() {
    let milestones = [
        milestone("Sound design", true),
        milestone("Mixing", true),
        milestone("Mastering", false),
        milestone("Release", false),
    ];
    assert!((progress_percent(&milestones) - 50.0).abs() < f64::EPSILON);
}

#[test]
fn progress_all_completed_is_hundred() {
    let mut project = sample();
    project.milestones = vec![milestone("a", true), milestone("b", true)];
    assert!((project.progress_percent() - 100.0).abs() < f64::EPSILON);
}

// =============================================================
// Header image and ownership
// =============================================================

#[test]
fn header_image_prefers_cover() {
    let mut project = sample();
    project.cover_image = Some("/img/cover.jpg".to_owned());
    assert_eq!(project.header_image(), "/img/cover.jpg");
}

#[test]
fn header_image_falls_back_to_card_image() {
    let mut project = sample();
    assert_eq!(project.header_image(), "/img/night-drive.jpg");
    project.cover_image = Some(String::new());
    assert_eq!(project.header_image(), "/img/night-drive.jpg");
}

#[test]
fn is_owned_by_matches_owner_name_only() {
    let project = sample();
    assert!(project.is_owned_by("CurrentUser"));
    assert!(!project.is_owned_by("Someone"));

    let unowned = Project { owner: None, ..sample() };
    assert!(!unowned.is_owned_by("CurrentUser"));
}

#[test]
fn project_deserializes_with_missing_optional_fields() {
    let json = r#"{"id":3,"title":"Zine","description":"Collage zine"}"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert_eq!(project.id, 3);
    assert!(project.cover_image.is_none());
    assert!(project.milestones.is_empty());
    assert!(!project.is_public);
    assert!(project.owner.is_none());
}

#[test]
fn placeholder_tracks_are_distinct() {
    let tracks = placeholder_tracks();
    assert_eq!(tracks.len(), 3);
    assert!(tracks.iter().any(|t| t.is_muted));
    let mut ids: Vec<u64> = tracks.iter().map(|t| t.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}
