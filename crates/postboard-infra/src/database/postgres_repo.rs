//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use postboard_core::domain::{NewPost, Page, PageRequest, Post, PostId, SortDirection};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::connections::{DatabaseConfig, connect, ensure_schema};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

impl PostgresPostRepository {
    /// Connect to the database and make sure the `posts` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let db = connect(config)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        ensure_schema(&db).await.map_err(repo_error)?;

        Ok(Self::new(db))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn save(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        Post::try_from(model)
    }

    async fn save_all(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        let txn = self.db.begin().await.map_err(repo_error)?;

        let mut saved = Vec::with_capacity(posts.len());
        for new_post in posts {
            // Dropping `txn` on error rolls the batch back.
            let model = post::ActiveModel::from(new_post)
                .insert(&txn)
                .await
                .map_err(repo_error)?;
            saved.push(Post::try_from(model)?);
        }

        txn.commit().await.map_err(repo_error)?;
        tracing::debug!(count = saved.len(), "Inserted post batch");

        Ok(saved)
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
        let order = match request.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let paginator = PostEntity::find()
            .order_by(post::sort_column(request.sort), order.clone())
            .order_by(post::Column::Id, order)
            .paginate(&self.db, request.size);

        let total_items = paginator.num_items().await.map_err(repo_error)?;
        if request.offset().is_none() {
            return Ok(Page::new(Vec::new(), &request, total_items));
        }

        let items: Vec<Post> = paginator
            .fetch_page(request.page)
            .await
            .map_err(repo_error)?
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Page::new(items, &request, total_items))
    }

    async fn increment_views(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        // Single UPDATE ... RETURNING so concurrent fetches never lose a view.
        let updated = PostEntity::update_many()
            .col_expr(post::Column::Views, Expr::col(post::Column::Views).add(1))
            .filter(post::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(repo_error)?;

        updated.into_iter().next().map(Post::try_from).transpose()
    }
}
