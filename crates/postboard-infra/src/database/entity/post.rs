//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use postboard_core::domain::{NewPost, Post, SortField};
use postboard_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub name: String,
    #[sea_orm(default_value = 0)]
    pub views: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column backing a sortable post attribute.
pub fn sort_column(field: SortField) -> Column {
    match field {
        SortField::Id => Column::Id,
        SortField::Title => Column::Title,
        SortField::Content => Column::Content,
        SortField::Name => Column::Name,
        SortField::Views => Column::Views,
    }
}

/// Conversion from SeaORM Model to Domain Post.
/// A negative view count means the row is corrupt.
impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let views = u64::try_from(model.views).map_err(|_| {
            RepoError::Query(format!(
                "post {} has a negative view count ({})",
                model.id, model.views
            ))
        })?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            name: model.name,
            views,
        })
    }
}

/// Conversion from a Domain NewPost to an insertable ActiveModel.
/// The id is left for the database to generate.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            name: Set(post.name),
            views: Set(0),
        }
    }
}
