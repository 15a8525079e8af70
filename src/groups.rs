//! Supabase Data (PostgREST) client and the typed group models.
//!
//! The dynamic response shape is validated at this boundary: payloads map
//! into [`Group`]/[`Student`]/[`Evaluation`] or fail with
//! [`DataError::Malformed`] rather than being trusted field-by-field.

use crate::auth::Session;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

/// Projection for the group query: the nested student and evaluation
/// collections are requested explicitly so the render path and the query
/// always agree on field names.
const GROUPS_SELECT: &str = "id,nome,descricao,alunos(id,nome,email),avaliacoes(nota,comentario)";

/// Error from the remote data service.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{message}")]
    Service { status: u16, message: String },
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    /// The payload did not match the expected group shape.
    #[error("resposta inesperada do servidor: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A group of students with its evaluations.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Group {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "alunos")]
    pub students: Vec<Student>,
    #[serde(rename = "avaliacoes")]
    pub evaluations: Vec<Evaluation>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Evaluation {
    #[serde(rename = "nota")]
    pub score: f64,
    #[serde(rename = "comentario")]
    pub comment: String,
}

/// Supabase PostgREST client for the `grupos` table.
pub struct GroupsClient {
    http_client: Client,
    base_url: String,
    anon_key: String,
}

impl GroupsClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http_client: Client::new(),
            base_url,
            anon_key: anon_key.into(),
        }
    }

    /// Fetch all groups joined with their students and evaluations.
    pub async fn fetch_groups(&self, session: &Session) -> Result<Vec<Group>, DataError> {
        let url = format!("{}/rest/v1/grupos", self.base_url);
        info!("Fetching groups from {}", url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("select", GROUPS_SELECT)])
            .header("apikey", &self.anon_key)
            .header(
                "Authorization",
                format!("Bearer {}", session.access_token),
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Group fetch failed ({}): {}", status, message);
            return Err(DataError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let groups: Vec<Group> = serde_json::from_str(&body)?;
        info!("Fetched {} groups", groups.len());
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_field_names() {
        let json = r#"{
            "id": 3,
            "nome": "Grupo Alfa",
            "descricao": "Projeto de sensores",
            "alunos": [{"id": 1, "nome": "Ana", "email": "ana@x.com"}],
            "avaliacoes": [{"nota": 8.5, "comentario": "Bom trabalho"}]
        }"#;

        let group: Group = serde_json::from_str(json).unwrap();
        assert_eq!(group.id, 3);
        assert_eq!(group.name, "Grupo Alfa");
        assert_eq!(group.description, "Projeto de sensores");
        assert_eq!(group.students.len(), 1);
        assert_eq!(group.students[0].name, "Ana");
        assert_eq!(group.evaluations[0].score, 8.5);
        assert_eq!(group.evaluations[0].comment, "Bom trabalho");
    }

    #[test]
    fn rejects_payload_missing_nested_collections() {
        // The projection always requests alunos and avaliacoes; a payload
        // without them is malformed, not "empty".
        let json = r#"{"id": 1, "nome": "Grupo", "descricao": "x"}"#;
        assert!(serde_json::from_str::<Group>(json).is_err());
    }

    #[test]
    fn empty_collections_are_valid() {
        let json = r#"{
            "id": 1,
            "nome": "Grupo",
            "descricao": "x",
            "alunos": [],
            "avaliacoes": []
        }"#;
        let group: Group = serde_json::from_str(json).unwrap();
        assert!(group.students.is_empty());
        assert!(group.evaluations.is_empty());
    }
}
