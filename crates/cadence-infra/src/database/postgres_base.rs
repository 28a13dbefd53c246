use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
};

use cadence_core::error::RepoError;
use cadence_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Classify a SeaORM error into the repository taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => {
            let msg = other.to_string();
            if msg.contains("duplicate") || msg.contains("unique") {
                RepoError::Constraint(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}

#[async_trait]
impl<E, T> BaseRepository<T> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }
}
