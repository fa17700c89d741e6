use super::*;

fn member_from(value: serde_json::Value) -> Member {
    serde_json::from_value(value).expect("member should deserialize")
}

#[test]
fn member_with_array_columns_parses_directly() {
    let m = member_from(serde_json::json!({
        "id": "abc",
        "fullName": "Ram Thapa",
        "email": "ram@example.com",
        "interests": ["Web Development"],
        "projects": [{"name": "Site", "images": ["u1"]}],
        "agreement": true,
        "requestStatus": "approved",
    }));
    assert_eq!(m.id, "abc");
    assert_eq!(m.interests, ["Web Development"]);
    assert_eq!(m.projects[0].name, "Site");
    assert_eq!(m.projects[0].images, ["u1"]);
    assert_eq!(m.request_status, RequestStatus::Approved);
}

#[test]
fn double_encoded_columns_are_unwrapped() {
    let m = member_from(serde_json::json!({
        "id": 12,
        "fullName": "Sita Rai",
        "email": "sita@example.com",
        "interests": "[\"AI / Data\",\"IoT\"]",
        "projects": "[{\"name\":\"App\",\"link\":\"\",\"description\":\"\",\"images\":[]}]",
    }));
    assert_eq!(m.id, "12");
    assert_eq!(m.interests, ["AI / Data", "IoT"]);
    assert_eq!(m.projects.len(), 1);
    assert_eq!(m.projects[0].name, "App");
}

#[test]
fn malformed_encoded_columns_degrade_to_empty() {
    let m = member_from(serde_json::json!({
        "id": 1,
        "fullName": "X",
        "email": "x@example.com",
        "interests": "not json",
        "projects": "{broken",
    }));
    assert!(m.interests.is_empty());
    assert!(m.projects.is_empty());
}

#[test]
fn null_and_missing_columns_default() {
    let m = member_from(serde_json::json!({
        "id": 3,
        "fullName": "Y",
        "email": "y@example.com",
        "interests": null,
        "projects": null,
    }));
    assert!(m.interests.is_empty());
    assert!(m.projects.is_empty());
    assert!(!m.agreement);
    assert_eq!(m.request_status, RequestStatus::Pending);
    assert!(m.cv_slug.is_none());
}

#[test]
fn numeric_agreement_is_accepted() {
    let m = member_from(serde_json::json!({
        "id": 4,
        "fullName": "Z",
        "email": "z@example.com",
        "agreement": 1,
    }));
    assert!(m.agreement);
}

#[test]
fn envelope_unwraps_data() {
    let body = serde_json::json!({"data": {"pending": 2, "approved": 5, "canceled": 1}});
    let env: Envelope<EnrollmentStats> = serde_json::from_value(body).expect("envelope");
    assert_eq!(env.data.total(), 8);
}

#[test]
fn request_status_round_trips_lowercase() {
    assert_eq!(
        serde_json::to_string(&RequestStatus::Canceled).expect("serialize"),
        "\"canceled\""
    );
    let status: RequestStatus = serde_json::from_str("\"pending\"").expect("deserialize");
    assert_eq!(status, RequestStatus::Pending);
    assert_eq!(RequestStatus::Approved.as_str(), "approved");
}
