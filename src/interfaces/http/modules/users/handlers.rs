//! User CRUD handlers
//!
//! Thin wrappers that translate HTTP requests into `UserRegistry` calls.

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{UserDto, UserRequest};
use crate::application::SharedUserRegistry;
use crate::interfaces::http::common::{ApiError, ApiJson, ErrorResponse, MessageResponse, UserId};

pub const USER_DELETED_MESSAGE: &str = "Usuário excluído com sucesso";

#[derive(Clone)]
pub struct UserHandlerState {
    pub registry: SharedUserRegistry,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    operation_id = "list_users",
    responses(
        (status = 200, description = "Lista de usuários retornada com sucesso", body = [UserDto])
    )
)]
pub async fn list_users(State(state): State<UserHandlerState>) -> Json<Vec<UserDto>> {
    let users = state.registry.list().into_iter().map(UserDto::from).collect();
    Json(users)
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    operation_id = "create_user",
    request_body = UserRequest,
    responses(
        (status = 201, description = "Usuário criado com sucesso", body = UserDto),
        (status = 400, description = "Dados inválidos", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ApiJson(request): ApiJson<UserRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state.registry.create(&request.into())?;
    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    operation_id = "get_user",
    params(("id" = u64, Path, description = "Identificador único do usuário")),
    responses(
        (status = 200, description = "Usuário encontrado", body = UserDto),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    UserId(id): UserId,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.registry.get(id)?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    operation_id = "update_user",
    params(("id" = u64, Path, description = "Identificador único do usuário")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Usuário atualizado com sucesso", body = UserDto),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse),
        (status = 400, description = "Dados inválidos", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    UserId(id): UserId,
    ApiJson(request): ApiJson<UserRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.registry.update(id, &request.into())?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    operation_id = "delete_user",
    params(("id" = u64, Path, description = "Identificador único do usuário")),
    responses(
        (status = 200, description = "Usuário excluído com sucesso", body = MessageResponse),
        (status = 404, description = "Usuário não encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    UserId(id): UserId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.registry.delete(id)?;
    Ok(Json(MessageResponse::new(USER_DELETED_MESSAGE)))
}
