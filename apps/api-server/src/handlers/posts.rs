//! Post handlers.

use actix_web::{HttpResponse, web};

use postboard_core::domain::PostId;
use postboard_shared::ApiResponse;
use postboard_shared::dto::{
    AddPostRequest, ImportPostsRequest, ImportPostsResponse, ListPostsQuery, PageResponse,
    PostResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts/excel
pub async fn import_posts(
    state: web::Data<AppState>,
    body: web::Json<ImportPostsRequest>,
) -> AppResult<HttpResponse> {
    let imported = state
        .posts
        .import_from_file(&body.into_inner().path)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ImportPostsResponse { imported })))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<AddPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state.posts.create(req.title, req.content, req.name).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(PostResponse::from(post))))
}

/// GET /api/posts, or GET /api/posts?page=&criteria= for a sorted page
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    if query.is_paged() {
        let page = state
            .posts
            .list_paged(query.page(), query.criteria())
            .await?;

        return Ok(HttpResponse::Ok().json(ApiResponse::ok(
            PageResponse::<PostResponse>::from(page),
        )));
    }

    let posts: Vec<PostResponse> = state
        .posts
        .list_all()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostResponse::from(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    state.posts.delete_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::empty()))
}
