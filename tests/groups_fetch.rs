//! Integration tests for the group fetch against a mock PostgREST server.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use inovaview::components::HomeComponent;
use inovaview::{DataError, GroupsClient, Session};

fn session() -> Session {
    Session {
        access_token: "jwt-token".to_string(),
    }
}

#[tokio::test]
async fn fetch_maps_nested_students_and_evaluations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/grupos"))
        .and(query_param(
            "select",
            "id,nome,descricao,alunos(id,nome,email),avaliacoes(nota,comentario)",
        ))
        .and(header("apikey", "anon-key"))
        .and(header("Authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "nome": "Grupo Alfa",
                "descricao": "Projeto de sensores",
                "alunos": [
                    {"id": 10, "nome": "Ana", "email": "ana@x.com"},
                    {"id": 11, "nome": "Bruno", "email": "bruno@x.com"}
                ],
                "avaliacoes": []
            },
            {
                "id": 2,
                "nome": "Grupo Beta",
                "descricao": "Projeto de drones",
                "alunos": [],
                "avaliacoes": [
                    {"nota": 9.0, "comentario": "Excelente"}
                ]
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = GroupsClient::new(server.uri(), "anon-key");
    let groups = client.fetch_groups(&session()).await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Grupo Alfa");
    assert_eq!(groups[0].students.len(), 2);
    assert!(groups[0].evaluations.is_empty());
    assert_eq!(groups[1].evaluations[0].score, 9.0);
    assert_eq!(groups[1].evaluations[0].comment, "Excelente");
}

#[tokio::test]
async fn fetch_failure_empties_listing_and_sets_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/grupos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = GroupsClient::new(server.uri(), "anon-key");
    let result = client.fetch_groups(&session()).await;
    assert!(matches!(result, Err(DataError::Service { status: 500, .. })));

    let mut home = HomeComponent::new();
    home.apply_fetch(result);
    assert!(home.groups().is_empty());
    assert_eq!(home.fetch_error(), Some("Erro ao buscar grupos."));
}

#[tokio::test]
async fn subsequent_success_clears_error_and_replaces_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/grupos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": "Grupo Alfa", "descricao": "x", "alunos": [], "avaliacoes": []}
        ])))
        .mount(&server)
        .await;

    let mut home = HomeComponent::new();
    home.apply_fetch(Err(DataError::Service {
        status: 500,
        message: "internal error".to_string(),
    }));
    assert!(home.fetch_error().is_some());

    let client = GroupsClient::new(server.uri(), "anon-key");
    home.apply_fetch(client.fetch_groups(&session()).await);

    assert!(home.fetch_error().is_none());
    assert_eq!(home.groups().len(), 1);
    assert_eq!(home.groups()[0].name, "Grupo Alfa");
}

#[tokio::test]
async fn malformed_payload_is_rejected_at_the_boundary() {
    // A payload missing the requested nested collections is a malformed
    // response, not an empty group
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/grupos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": "Grupo Alfa", "descricao": "x"}
        ])))
        .mount(&server)
        .await;

    let client = GroupsClient::new(server.uri(), "anon-key");
    let result = client.fetch_groups(&session()).await;
    assert!(matches!(result, Err(DataError::Malformed(_))));
}
