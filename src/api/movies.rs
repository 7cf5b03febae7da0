//! Movie API handlers using repository pattern

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiResult, ErrorBody};
use super::extract::{ApiJson, ApiPath, ApiQuery, double_option};
use crate::domain::{DomainError, Movie, MovieFilter, MoviePatch, NewMovie};
use crate::infrastructure::AppState;

/// Optional equality filters for the movie list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieListQuery {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

impl From<MovieListQuery> for MovieFilter {
    fn from(q: MovieListQuery) -> Self {
        MovieFilter {
            director_id: q.director_id,
            genre_id: q.genre_id,
        }
    }
}

/// Request DTO for creating a movie
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    pub title: String,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<CreateMovieRequest> for NewMovie {
    fn from(r: CreateMovieRequest) -> Self {
        NewMovie {
            title: r.title,
            description: r.description,
            trailer: r.trailer,
            year: r.year,
            rating: r.rating,
            genre_id: r.genre_id,
            director_id: r.director_id,
        }
    }
}

/// DTO for partial movie updates. `null` clears a nullable column.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovieRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub genre_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub director_id: Option<Option<i32>>,
}

impl TryFrom<UpdateMovieRequest> for MoviePatch {
    type Error = DomainError;

    fn try_from(r: UpdateMovieRequest) -> Result<Self, Self::Error> {
        let title = match r.title {
            Some(None) => {
                return Err(DomainError::Validation("title cannot be null".to_string()));
            }
            Some(Some(title)) => Some(title),
            None => None,
        };

        Ok(MoviePatch {
            title,
            description: r.description,
            trailer: r.trailer,
            year: r.year,
            rating: r.rating,
            genre_id: r.genre_id,
            director_id: r.director_id,
        })
    }
}

/// List movies, optionally filtered by director and/or genre
#[utoipa::path(
    get,
    path = "/movies/",
    params(MovieListQuery),
    responses(
        (status = 200, description = "Matching movies", body = [Movie]),
        (status = 400, description = "Non-integer filter value", body = ErrorBody)
    )
)]
pub async fn list_movies(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MovieListQuery>,
) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state.movie_repo.find_all(query.into()).await?;
    Ok(Json(movies))
}

/// Create a movie. Director and genre ids are stored without existence checks.
#[utoipa::path(
    post,
    path = "/movies/",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created"),
        (status = 400, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateMovieRequest>,
) -> ApiResult<impl IntoResponse> {
    let movie = state.movie_repo.create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/movies/{}", movie.id))],
        Json(json!({
            "message": "Movie created",
            "movie": movie
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, description = "Movie not found", body = ErrorBody)
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<Movie>> {
    let movie = state
        .movie_repo
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity: "Movie",
            id,
        })?;

    Ok(Json(movie))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "Malformed or empty body", body = ErrorBody),
        (status = 404, description = "Movie not found", body = ErrorBody),
        (status = 409, description = "Update did not affect exactly one row", body = ErrorBody)
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateMovieRequest>,
) -> ApiResult<StatusCode> {
    let patch = MoviePatch::try_from(payload)?;
    state.movie_repo.update(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found", body = ErrorBody)
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<StatusCode> {
    state.movie_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
