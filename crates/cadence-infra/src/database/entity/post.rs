//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub caption: String,
    pub image_url: Option<String>,
    pub scheduled_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for cadence_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            caption: model.caption,
            image_url: model.image_url,
            scheduled_at: model.scheduled_at.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<cadence_core::domain::Post> for ActiveModel {
    fn from(post: cadence_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            caption: Set(post.caption),
            image_url: Set(post.image_url),
            scheduled_at: Set(post.scheduled_at.into()),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
