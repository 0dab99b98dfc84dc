use mcc_api::{IslandClient, MccError};
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = r#"
    query player($username: String!) {
        playerByUsername(username: $username) { username }
    }
"#;

#[derive(Debug, Deserialize)]
struct PlayerData {
    #[serde(rename = "playerByUsername")]
    player: Option<Player>,
}

#[derive(Debug, Deserialize)]
struct Player {
    username: String,
}

fn island(server: &MockServer) -> IslandClient {
    let mut client = IslandClient::new()
        .unwrap()
        .with_endpoint(format!("{}/graphql", server.uri()));
    client.set_api_key("secret-key").unwrap();
    client
}

#[tokio::test]
async fn execute_sends_key_and_decodes_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("x-api-key", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "playerByUsername": { "username": "Jammy4312" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data: PlayerData = island(&server)
        .execute(QUERY, json!({ "username": "Jammy4312" }))
        .await
        .unwrap();
    assert_eq!(data.player.unwrap().username, "Jammy4312");
}

#[tokio::test]
async fn graphql_errors_are_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Unknown field", "locations": [{ "line": 3, "column": 9 }] }]
        })))
        .mount(&server)
        .await;

    let err = island(&server)
        .execute::<_, PlayerData>(QUERY, json!({ "username": "x" }))
        .await
        .unwrap_err();
    match err {
        MccError::Graphql(errors) => {
            assert_eq!(errors[0].message, "Unknown field");
            assert_eq!(errors[0].locations[0].line, 3);
        }
        other => panic!("expected GraphQL errors, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing API key"))
        .mount(&server)
        .await;

    let client = IslandClient::new()
        .unwrap()
        .with_endpoint(format!("{}/graphql", server.uri()));
    let err = client
        .execute::<_, PlayerData>(QUERY, json!({ "username": "x" }))
        .await
        .unwrap_err();

    let status = err.status().unwrap();
    assert_eq!(status.code, 401);
    assert_eq!(status.reason.as_deref(), Some("missing API key"));
}
