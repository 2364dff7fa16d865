//! Group management tests against a wiremock server.

use purpleair::{GroupMemberParams, PurpleAir, SensorFilters};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rt() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().expect("tokio runtime")
}

#[test]
fn test_create_group_posts_name_with_write_key() {
    let rt = rt();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/groups"))
            .and(header("X-API-Key", "write-key"))
            .and(query_param("name", "My Neighborhood"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "group_id": 1234
            })))
            .expect(1)
            .mount(&server),
    );

    let client = PurpleAir::with_base_url(None, Some("write-key"), &server.uri()).unwrap();
    let response = client.create_group("My Neighborhood").unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body["group_id"], 1234);
}

#[test]
fn test_delete_group_returns_raw_text() {
    let rt = rt();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/groups/1234"))
            .and(header("X-API-Key", "write-key"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server),
    );

    let client = PurpleAir::with_base_url(None, Some("write-key"), &server.uri()).unwrap();
    let response = client.delete_group(1234).unwrap();

    assert_eq!(response.status, 204);
    assert_eq!(response.body, "");

    // Deletes carry no query parameters.
    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[test]
fn test_delete_body_passes_through_unparsed() {
    let rt = rt();
    let server = rt.block_on(MockServer::start());

    // Even a JSON-shaped body comes back as the raw string.
    rt.block_on(
        Mock::given(method("DELETE"))
            .and(path("/groups/1234/members/9"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_string(r#"{"error":"GroupMemberNotFoundError"}"#),
            )
            .mount(&server),
    );

    let client = PurpleAir::with_base_url(None, Some("write-key"), &server.uri()).unwrap();
    let response = client.delete_group_member(1234, 9).unwrap();

    assert_eq!(response.status, 404);
    assert_eq!(response.body, r#"{"error":"GroupMemberNotFoundError"}"#);
}

#[test]
fn test_add_group_member_repeats_group_id_in_query() {
    let rt = rt();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/groups/1234/members"))
            .and(header("X-API-Key", "write-key"))
            .and(query_param("group_id", "1234"))
            .and(query_param("sensor_index", "131075"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "member_id": 77
            })))
            .expect(1)
            .mount(&server),
    );

    let member = GroupMemberParams {
        sensor_index: Some(131075),
        ..Default::default()
    };

    let client = PurpleAir::with_base_url(None, Some("write-key"), &server.uri()).unwrap();
    let response = client.add_group_member(1234, &member).unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body["member_id"], 77);
}

#[test]
fn test_get_group_info_uses_read_key() {
    let rt = rt();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/groups/1234"))
            .and(header("X-API-Key", "read-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "group": { "id": 1234, "name": "My Neighborhood" },
                "members": [{ "id": 77, "sensor_index": 131075 }]
            })))
            .expect(1)
            .mount(&server),
    );

    let client =
        PurpleAir::with_base_url(Some("read-key"), Some("write-key"), &server.uri()).unwrap();
    let response = client.get_group_info(1234).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["members"][0]["sensor_index"], 131075);
}

#[test]
fn test_get_owned_groups_issues_one_request_per_call() {
    let rt = rt();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/groups"))
            .and(header("X-API-Key", "read-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "groups": [{ "id": 1234, "name": "My Neighborhood" }]
            })))
            .expect(2)
            .mount(&server),
    );

    let client = PurpleAir::with_base_url(Some("read-key"), None, &server.uri()).unwrap();
    let first = client.get_owned_groups().unwrap();
    let second = client.get_owned_groups().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_get_group_sensors_data_targets_members_endpoint() {
    let rt = rt();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/groups/1234/members"))
            .and(header("X-API-Key", "read-key"))
            .and(query_param("fields", "pm2.5"))
            .and(query_param("max_age", "3600"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fields": ["pm2.5"],
                "data": [[131075, 8.1]]
            })))
            .expect(1)
            .mount(&server),
    );

    let filters = SensorFilters {
        max_age: Some(3600),
        ..Default::default()
    };

    let client = PurpleAir::with_base_url(Some("read-key"), None, &server.uri()).unwrap();
    let response = client.get_group_sensors_data(1234, "pm2.5", &filters).unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["data"][0][0], 131075);

    // group_id travels only in the path, never as a query parameter.
    let requests = rt.block_on(server.received_requests()).unwrap();
    let mut sent: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(name, _)| name.into_owned())
        .collect();
    sent.sort();
    assert_eq!(sent, ["fields", "max_age"]);
}
