//! Genre API handlers

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
use crate::domain::{DomainError, Genre, GenrePatch, NewGenre};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateGenreRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateGenreRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
}

impl TryFrom<UpdateGenreRequest> for GenrePatch {
    type Error = DomainError;

    fn try_from(r: UpdateGenreRequest) -> Result<Self, Self::Error> {
        match r.name {
            Some(None) => Err(DomainError::Validation("name cannot be null".to_string())),
            name => Ok(GenrePatch {
                name: name.flatten(),
            }),
        }
    }
}

#[utoipa::path(
    get,
    path = "/genres/",
    responses((status = 200, description = "All genres", body = [Genre]))
)]
pub async fn list_genres(State(state): State<AppState>) -> ApiResult<Json<Vec<Genre>>> {
    let genres = state.genre_repo.find_all().await?;
    Ok(Json(genres))
}

#[utoipa::path(
    post,
    path = "/genres/",
    request_body = CreateGenreRequest,
    responses(
        (status = 201, description = "Genre created"),
        (status = 400, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create_genre(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGenreRequest>,
) -> ApiResult<impl IntoResponse> {
    let genre = state
        .genre_repo
        .create(NewGenre { name: payload.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/genres/{}", genre.id))],
        Json(json!({
            "message": "Genre created",
            "genre": genre
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 200, description = "Genre found", body = Genre),
        (status = 404, description = "Genre not found", body = ErrorBody)
    )
)]
pub async fn get_genre(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Genre>> {
    let genre = state
        .genre_repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "Genre",
            id,
        })?;

    Ok(Json(genre))
}

/// Same contract as the director update: absent `name` is a no-op.
#[utoipa::path(
    put,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    request_body = UpdateGenreRequest,
    responses(
        (status = 204, description = "Genre updated"),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "Genre not found", body = ErrorBody)
    )
)]
pub async fn update_genre(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateGenreRequest>,
) -> ApiResult<StatusCode> {
    let patch = GenrePatch::try_from(payload)?;
    state.genre_repo.update(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 404, description = "Genre not found", body = ErrorBody)
    )
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<StatusCode> {
    state.genre_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
