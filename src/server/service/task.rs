//! Task service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{task::TaskRepository, user::UserRepository},
    error::AppError,
    model::{
        task::{CreateTaskParam, Task, UpdateTaskParam},
        user::User,
    },
};

pub struct TaskService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTaskParam) -> Result<Task, AppError> {
        let task = TaskRepository::new(self.db).create(param).await?;

        tracing::info!("Created task {} (level {})", task.id, task.level);

        Ok(task)
    }

    pub async fn get(&self, id: i32) -> Result<Task, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    /// Tasks authored by a user.
    ///
    /// # Returns
    /// - `Ok(Vec<Task>)` - Possibly empty
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(TaskRepository::new(self.db).get_by_owner(user_id).await?)
    }

    pub async fn update(&self, id: i32, param: UpdateTaskParam) -> Result<Task, AppError> {
        self.get(id).await?;

        Ok(TaskRepository::new(self.db).update(id, param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TaskRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        tracing::info!("Deleted task {}", id);

        Ok(())
    }

    pub async fn owner(&self, id: i32) -> Result<User, AppError> {
        let task = self.get(id).await?;

        let Some(owner_id) = task.owner_id else {
            return Err(AppError::NotFound("Task has no owner".to_string()));
        };

        UserRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
