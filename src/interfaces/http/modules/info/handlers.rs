//! Service info handler

use std::collections::BTreeMap;

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "API de Gerenciamento de Usuários";
pub const SERVICE_VERSION: &str = "1.0";
pub const SERVICE_DESCRIPTION: &str = "API RESTful simples para gerenciar usuários";
pub const AUTHORS: [&str; 3] = ["Anna Julia Higa Farincho", "Letícia Macedo", "Evelyn Mercês"];
pub const GROUP: u32 = 4;
pub const INSTITUTION: &str = "IMPACTA";
pub const COURSE: &str = "Desenvolvimento de APIs e Microserviços (DAM)";

/// Static description of the service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub authors: Vec<String>,
    pub grupo: u32,
    pub instituicao: String,
    pub disciplina: String,
    /// Route → what it does
    pub endpoints: BTreeMap<String, String>,
}

impl ServiceInfo {
    pub fn current() -> Self {
        let endpoints = [
            ("GET /users", "Listar todos os usuários"),
            ("POST /users", "Criar novo usuário"),
            ("GET /users/<id>", "Buscar usuário específico"),
            ("PUT /users/<id>", "Atualizar usuário"),
            ("DELETE /users/<id>", "Excluir usuário"),
        ]
        .into_iter()
        .map(|(route, what)| (route.to_string(), what.to_string()))
        .collect();

        Self {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            authors: AUTHORS.iter().map(|a| a.to_string()).collect(),
            grupo: GROUP,
            instituicao: INSTITUTION.to_string(),
            disciplina: COURSE.to_string(),
            endpoints,
        }
    }
}

#[utoipa::path(
    get,
    path = "/info",
    tag = "Info",
    operation_id = "api_info",
    responses(
        (status = 200, description = "Informações da API", body = ServiceInfo)
    )
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}
