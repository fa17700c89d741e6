use super::*;
use crate::net::types::{Member, Project};

fn member() -> Member {
    Member {
        id: "7".to_owned(),
        full_name: "Asha Karki".to_owned(),
        dob: Some("2001-04-12".to_owned()),
        gender: Some("female".to_owned()),
        mobile: Some("9800000000".to_owned()),
        email: "asha@example.com".to_owned(),
        address: Some("Sindhuli".to_owned()),
        education: Some("Bachelor".to_owned()),
        college: None,
        status: Some("student".to_owned()),
        skill_level: Some("intermediate".to_owned()),
        tools: Some("Figma".to_owned()),
        interests: vec![
            "Web Development".to_owned(),
            "Photography".to_owned(),
            "Cyber Security".to_owned(),
        ],
        agreement: true,
        request_status: crate::net::types::RequestStatus::Approved,
        projects: vec![Project {
            name: "Portfolio".to_owned(),
            link: "https://example.com".to_owned(),
            description: String::new(),
            images: vec!["https://cdn/img1.png".to_owned()],
        }],
        photo: Some("https://cdn/photo.png".to_owned()),
        cit_front: None,
        cit_back: Some(String::new()),
        cv_slug: Some("asha-karki".to_owned()),
    }
}

fn upload(name: &str, size: u64) -> UploadFile {
    UploadFile {
        name: name.to_owned(),
        size,
        ..UploadFile::default()
    }
}

// =============================================================
// from_member
// =============================================================

#[test]
fn from_member_splits_known_and_custom_interests() {
    let draft = EditDraft::from_member(&member());
    assert_eq!(draft.interests, ["Web Development", "Cyber Security"]);
    assert_eq!(draft.custom_interest, "Photography");
}

#[test]
fn from_member_keeps_existing_project_images_as_urls() {
    let draft = EditDraft::from_member(&member());
    assert_eq!(draft.projects.len(), 1);
    assert_eq!(
        draft.projects[0].images[0].preview(),
        Some("https://cdn/img1.png")
    );
}

#[test]
fn from_member_without_projects_gets_one_blank_entry() {
    let mut m = member();
    m.projects.clear();
    let draft = EditDraft::from_member(&m);
    assert_eq!(draft.projects.len(), 1);
    assert!(draft.projects[0].name.is_empty());
}

#[test]
fn from_member_empty_document_urls_become_empty_slots() {
    let draft = EditDraft::from_member(&member());
    assert_eq!(draft.photo.preview(), Some("https://cdn/photo.png"));
    assert!(draft.cit_front.preview().is_none());
    assert!(draft.cit_back.preview().is_none());
}

// =============================================================
// Interests
// =============================================================

#[test]
fn toggle_interest_adds_then_removes() {
    let mut draft = EditDraft::default();
    draft.toggle_interest("AI / Data");
    assert_eq!(draft.interests, ["AI / Data"]);
    draft.toggle_interest("AI / Data");
    assert!(draft.interests.is_empty());
}

#[test]
fn merge_custom_interests_trims_and_dedupes() {
    let mut draft = EditDraft::default();
    draft.interests.push("Robotics".to_owned());
    draft.custom_interest = " Robotics ,  IoT , , IoT".to_owned();
    assert_eq!(draft.merge_custom_interests(), 1);
    assert_eq!(draft.interests, ["Robotics", "IoT"]);
    assert!(draft.custom_interest.is_empty());
}

#[test]
fn final_interests_includes_unmerged_custom_text() {
    let mut draft = EditDraft::default();
    draft.interests.push("Web Development".to_owned());
    draft.custom_interest = "IoT, Web Development".to_owned();
    assert_eq!(draft.final_interests(), ["Web Development", "IoT"]);
    // Non-destructive.
    assert_eq!(draft.custom_interest, "IoT, Web Development");
}

// =============================================================
// Documents
// =============================================================

#[test]
fn oversized_document_is_rejected_and_slot_kept() {
    let mut draft = EditDraft::from_member(&member());
    assert!(!draft.set_document(DocumentKind::Photo, upload("big.png", MAX_FILE_BYTES + 1)));
    assert_eq!(draft.photo.preview(), Some("https://cdn/photo.png"));
}

#[test]
fn document_at_the_limit_is_accepted() {
    let mut draft = EditDraft::default();
    assert!(draft.set_document(DocumentKind::CitizenshipFront, upload("ok.png", MAX_FILE_BYTES)));
    assert!(draft.cit_front.upload().is_some());
}

// =============================================================
// Project images
// =============================================================

#[test]
fn add_project_images_appends_and_counts_rejections() {
    let mut draft = EditDraft::from_member(&member());
    let rejected = draft.add_project_images(
        0,
        vec![upload("a.png", 10), upload("huge.png", MAX_FILE_BYTES * 2)],
    );
    assert_eq!(rejected, 1);
    // Existing URL preserved, valid upload appended.
    assert_eq!(draft.projects[0].images.len(), 2);
}

#[test]
fn add_project_images_to_missing_project_rejects_all() {
    let mut draft = EditDraft::default();
    assert_eq!(draft.add_project_images(5, vec![upload("a.png", 10)]), 1);
}

#[test]
fn remove_project_image_drops_the_slot() {
    let mut draft = EditDraft::from_member(&member());
    draft.remove_project_image(0, 0);
    assert!(draft.projects[0].images.is_empty());
}

#[test]
fn move_project_image_swaps_neighbors_and_clamps() {
    let mut draft = EditDraft::from_member(&member());
    draft.add_project_images(0, vec![upload("b.png", 1)]);

    draft.move_project_image(0, 0, true);
    assert!(matches!(draft.projects[0].images[0], ImageSlot::Upload(_)));
    assert!(matches!(draft.projects[0].images[1], ImageSlot::Url(_)));

    // Moving past either end is ignored.
    draft.move_project_image(0, 1, true);
    draft.move_project_image(0, 0, false);
    assert!(matches!(draft.projects[0].images[0], ImageSlot::Upload(_)));
}

// =============================================================
// Multipart enumeration
// =============================================================

#[test]
fn text_fields_skip_blanks() {
    let draft = EditDraft::from_member(&member());
    let fields = draft.text_fields();
    assert!(fields.iter().any(|(k, v)| *k == "fullName" && *v == "Asha Karki"));
    assert!(!fields.iter().any(|(k, _)| *k == "college"));
}

#[test]
fn interests_json_is_a_json_array() {
    let mut draft = EditDraft::default();
    draft.interests.push("AI / Data".to_owned());
    assert_eq!(draft.interests_json(), r#"["AI / Data"]"#);
}

#[test]
fn multipart_field_names_match_backend_contract() {
    assert_eq!(project_field(2, "name"), "projects[2][name]");
    assert_eq!(project_existing_images_field(0), "projects[0][existingImages][]");
    assert_eq!(project_uploads_field(3), "projectImages_3");
}
