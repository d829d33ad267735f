//! Task data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::task::{CreateTaskParam, Task, UpdateTaskParam};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTaskParam) -> Result<Task, DbErr> {
        let entity = entity::task::ActiveModel {
            owner_id: ActiveValue::Set(Some(param.owner_id)),
            level: ActiveValue::Set(param.level),
            mystery_of_place: ActiveValue::Set(param.mystery_of_place),
            place: ActiveValue::Set(param.place),
            answer: ActiveValue::Set(param.answer),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DbErr> {
        let entity = entity::prelude::Task::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Task::from_entity))
    }

    /// Tasks owned by a user, easiest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::task::Column::Level)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    pub async fn update(&self, id: i32, param: UpdateTaskParam) -> Result<Task, DbErr> {
        let task = entity::prelude::Task::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Task {} not found", id)))?;

        let mut active_model: entity::task::ActiveModel = task.into();

        if let Some(level) = param.level {
            active_model.level = ActiveValue::Set(level);
        }
        if let Some(mystery_of_place) = param.mystery_of_place {
            active_model.mystery_of_place = ActiveValue::Set(mystery_of_place);
        }
        if let Some(place) = param.place {
            active_model.place = ActiveValue::Set(place);
        }
        if let Some(answer) = param.answer {
            active_model.answer = ActiveValue::Set(answer);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Task::from_entity(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
