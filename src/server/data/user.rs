use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already hashed password
    pub async fn create(
        &self,
        user_name: &str,
        password_hash: &str,
    ) -> Result<entity::wiki_user::Model, DbErr> {
        let user = entity::wiki_user::ActiveModel {
            user_name: ActiveValue::Set(user_name.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<entity::wiki_user::Model>, DbErr> {
        entity::prelude::WikiUser::find()
            .filter(entity::wiki_user::Column::UserName.eq(user_name))
            .one(self.db)
            .await
    }
}
