use super::*;

fn sample(owner: Option<&str>) -> Project {
    Project {
        id: 11,
        title: "Glasshouse".to_owned(),
        description: "Ambient score for a short film".to_owned(),
        cover_image: None,
        image: "/images/glasshouse.jpg".to_owned(),
        milestones: vec![],
        is_public: true,
        disciplines: vec!["Music".to_owned()],
        invited_users: vec![],
        owner: owner.map(str::to_owned),
        goals: vec![],
        deadlines: vec![],
        links: vec![],
    }
}

// =============================================================
// Settings permission checks
// =============================================================

#[test]
fn open_settings_requires_owner() {
    let project = sample(Some("CurrentUser"));
    let mut settings = SettingsModalState::default();

    open_settings(&mut settings, false, &project);
    assert!(!settings.is_open());

    open_settings(&mut settings, true, &project);
    assert!(settings.is_open());
}

#[test]
fn commit_settings_returns_merged_project_for_owner() {
    let project = sample(Some("CurrentUser"));
    let mut settings = SettingsModalState::default();
    open_settings(&mut settings, true, &project);
    settings.edit(|d| d.title = "Glasshouse OST".to_owned());

    let saved = commit_settings(&mut settings, true, &project).unwrap();
    assert_eq!(saved.title, "Glasshouse OST");
    assert_eq!(saved.description, project.description);
    assert!(!settings.is_open());
}

#[test]
fn commit_settings_discards_draft_after_losing_ownership() {
    let project = sample(Some("CurrentUser"));
    let mut settings = SettingsModalState::default();
    open_settings(&mut settings, true, &project);
    settings.edit(|d| d.title = "Hijacked".to_owned());

    assert!(commit_settings(&mut settings, false, &project).is_none());
    assert!(!settings.is_open());
}

// =============================================================
// Ownership
// =============================================================

#[test]
fn claim_ownership_reassigns_project_owner() {
    let project = sample(Some("Alice"));
    let mut membership = MembershipState::for_viewer(&project, "CurrentUser");

    let updated = claim_ownership(&mut membership, &project, "CurrentUser").unwrap();
    assert!(membership.is_owner);
    assert_eq!(updated.owner.as_deref(), Some("CurrentUser"));
    assert_eq!(updated.title, project.title);
}

#[test]
fn claim_ownership_when_already_owner_changes_nothing() {
    let project = sample(Some("CurrentUser"));
    let mut membership = MembershipState::for_viewer(&project, "CurrentUser");
    assert!(claim_ownership(&mut membership, &project, "CurrentUser").is_none());
}

#[test]
fn join_by_owner_releases_stored_owner() {
    let project = sample(Some("CurrentUser"));
    let mut membership = MembershipState::for_viewer(&project, "CurrentUser");

    let updated = join_project(&mut membership, &project, "CurrentUser").unwrap();
    assert!(!membership.is_owner);
    assert!(updated.owner.is_none());

    // Reloading from the stored project must agree with the local flags.
    assert!(!MembershipState::for_viewer(&updated, "CurrentUser").is_owner);
}

#[test]
fn join_by_non_owner_keeps_stored_owner() {
    let project = sample(Some("Mira"));
    let mut membership = MembershipState::for_viewer(&project, "CurrentUser");

    let updated = join_project(&mut membership, &project, "CurrentUser").unwrap();
    assert_eq!(updated, project);
    assert_eq!(membership.team_members, ["CurrentUser"]);
}

#[test]
fn join_twice_returns_none() {
    let project = sample(Some("Mira"));
    let mut membership = MembershipState::for_viewer(&project, "CurrentUser");
    join_project(&mut membership, &project, "CurrentUser");
    assert!(join_project(&mut membership, &project, "CurrentUser").is_none());
    assert_eq!(membership.team_members.len(), 1);
}

#[test]
fn claim_then_join_persists_neither_ownership() {
    let mut repo = InMemoryProjectRepository::new(vec![sample(Some("Mira"))]);
    let project = repo.find_by_id(11).unwrap();
    let mut membership = MembershipState::for_viewer(&project, "CurrentUser");

    let claimed = claim_ownership(&mut membership, &project, "CurrentUser").unwrap();
    repo.upsert(claimed.clone());
    let joined = join_project(&mut membership, &claimed, "CurrentUser").unwrap();
    repo.upsert(joined);

    let reloaded = repo.find_by_id(11).unwrap();
    let fresh = MembershipState::for_viewer(&reloaded, "CurrentUser");
    assert_eq!(fresh.is_owner, membership.is_owner);
    assert!(!fresh.is_owner);
}

#[test]
fn join_then_claim_restores_owner_controls() {
    let project = sample(Some("CurrentUser"));
    let mut membership = MembershipState::for_viewer(&project, "CurrentUser");
    membership.join("CurrentUser");
    assert!(!membership.is_owner);

    let mut settings = SettingsModalState::default();
    open_settings(&mut settings, membership.is_owner, &project);
    assert!(!settings.is_open());

    claim_ownership(&mut membership, &project, "CurrentUser");
    open_settings(&mut settings, membership.is_owner, &project);
    assert!(settings.is_open());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_project_closes_modal_and_removes_project() {
    let project = sample(Some("CurrentUser"));
    let mut repo = InMemoryProjectRepository::new(vec![project.clone(), Project { id: 12, ..sample(None) }]);
    let mut settings = SettingsModalState::default();
    open_settings(&mut settings, true, &project);

    assert!(delete_project(&mut settings, &mut repo, project.id));
    assert!(!settings.is_open());
    assert!(repo.find_by_id(project.id).is_none());
    assert_eq!(repo.list().len(), 1);
}

#[test]
fn delete_project_with_unknown_id_still_closes_modal() {
    let project = sample(Some("CurrentUser"));
    let mut repo = InMemoryProjectRepository::default();
    let mut settings = SettingsModalState::default();
    open_settings(&mut settings, true, &project);

    assert!(!delete_project(&mut settings, &mut repo, project.id));
    assert!(!settings.is_open());
}
