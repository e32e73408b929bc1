use argon2::{Argon2, PasswordHasher};
use chrono::Utc;
use password_hash::SaltString;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user whose stored hash verifies against `password`
    pub async fn insert_user(
        &self,
        user_name: &str,
        password: &str,
    ) -> Result<entity::wiki_user::Model, TestError> {
        let password_hash = hash(password)?;

        Ok(
            entity::prelude::WikiUser::insert(entity::wiki_user::ActiveModel {
                user_name: ActiveValue::Set(user_name.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a user with a stored hash that is not a valid PHC string
    pub async fn insert_user_with_malformed_hash(
        &self,
        user_name: &str,
    ) -> Result<entity::wiki_user::Model, TestError> {
        Ok(
            entity::prelude::WikiUser::insert(entity::wiki_user::ActiveModel {
                user_name: ActiveValue::Set(user_name.to_string()),
                password_hash: ActiveValue::Set("not-a-hash".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

fn hash(password: &str) -> Result<String, TestError> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| TestError::Fixture(e.to_string()))?;

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| TestError::Fixture(e.to_string()))?
        .to_string())
}
