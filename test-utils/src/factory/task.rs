//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    level: i32,
    mystery_of_place: String,
    place: String,
    answer: String,
    owner_id: Option<i32>,
}

impl<'a> TaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            level: 1,
            mystery_of_place: format!("Where the clock stopped at {}", id),
            place: format!("Old tower {}", id),
            answer: format!("answer{}", id),
            owner_id: None,
        }
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            level: ActiveValue::Set(self.level),
            mystery_of_place: ActiveValue::Set(self.mystery_of_place),
            place: ActiveValue::Set(self.place),
            answer: ActiveValue::Set(self.answer),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_task(db: &DatabaseConnection) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db).build().await
}
