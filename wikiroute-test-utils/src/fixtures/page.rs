use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn page<'a>(&'a self) -> PageFixtures<'a> {
        PageFixtures { setup: self }
    }
}

pub struct PageFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PageFixtures<'a> {
    /// Inserts a page with a generated body, `alias` without the leading slash
    pub async fn insert_page(
        &self,
        title: &str,
        alias: &str,
    ) -> Result<entity::wiki_page::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::WikiPage::insert(entity::wiki_page::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                alias: ActiveValue::Set(alias.to_string()),
                body: ActiveValue::Set(format!("Content of {}", title)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
