//! Director API handlers using repository pattern

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::error::{ApiResult, ErrorBody};
use super::extract::{ApiJson, ApiPath, double_option};
use crate::domain::{Director, DirectorPatch, DomainError, NewDirector};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateDirectorRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDirectorRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
}

impl TryFrom<UpdateDirectorRequest> for DirectorPatch {
    type Error = DomainError;

    fn try_from(r: UpdateDirectorRequest) -> Result<Self, Self::Error> {
        match r.name {
            Some(None) => Err(DomainError::Validation("name cannot be null".to_string())),
            name => Ok(DirectorPatch {
                name: name.flatten(),
            }),
        }
    }
}

#[utoipa::path(
    get,
    path = "/directors/",
    responses((status = 200, description = "All directors", body = [Director]))
)]
pub async fn list_directors(State(state): State<AppState>) -> ApiResult<Json<Vec<Director>>> {
    let directors = state.director_repo.find_all().await?;
    Ok(Json(directors))
}

#[utoipa::path(
    post,
    path = "/directors/",
    request_body = CreateDirectorRequest,
    responses(
        (status = 201, description = "Director created"),
        (status = 400, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create_director(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateDirectorRequest>,
) -> ApiResult<impl IntoResponse> {
    let director = state
        .director_repo
        .create(NewDirector { name: payload.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/directors/{}", director.id))],
        Json(json!({
            "message": "Director created",
            "director": director
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/directors/{id}",
    params(("id" = i32, Path, description = "Director id")),
    responses(
        (status = 200, description = "Director found", body = Director),
        (status = 404, description = "Director not found", body = ErrorBody)
    )
)]
pub async fn get_director(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Director>> {
    let director = state
        .director_repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "Director",
            id,
        })?;

    Ok(Json(director))
}

/// Rename a director. A body without `name` changes nothing and still succeeds.
#[utoipa::path(
    put,
    path = "/directors/{id}",
    params(("id" = i32, Path, description = "Director id")),
    request_body = UpdateDirectorRequest,
    responses(
        (status = 204, description = "Director updated"),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "Director not found", body = ErrorBody)
    )
)]
pub async fn update_director(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateDirectorRequest>,
) -> ApiResult<StatusCode> {
    let patch = DirectorPatch::try_from(payload)?;
    state.director_repo.update(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/directors/{id}",
    params(("id" = i32, Path, description = "Director id")),
    responses(
        (status = 204, description = "Director deleted"),
        (status = 404, description = "Director not found", body = ErrorBody)
    )
)]
pub async fn delete_director(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<StatusCode> {
    state.director_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
