use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// ID and alias of a wiki page, the snapshot used to seed routes at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WikiTitle {
    pub id: i32,
    pub alias: String,
}

pub struct PageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PageRepository<'a, C> {
    /// Creates a new instance of [`PageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new page
    pub async fn create(
        &self,
        title: &str,
        alias: &str,
        body: &str,
    ) -> Result<entity::wiki_page::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let page = entity::wiki_page::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            alias: ActiveValue::Set(alias.to_string()),
            body: ActiveValue::Set(body.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        page.insert(self.db).await
    }

    pub async fn get(&self, page_id: i32) -> Result<Option<entity::wiki_page::Model>, DbErr> {
        entity::prelude::WikiPage::find_by_id(page_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_alias(
        &self,
        alias: &str,
    ) -> Result<Option<entity::wiki_page::Model>, DbErr> {
        entity::prelude::WikiPage::find()
            .filter(entity::wiki_page::Column::Alias.eq(alias))
            .one(self.db)
            .await
    }

    /// Returns the ID and alias of every page, ordered by ID
    pub async fn get_all_titles(&self) -> Result<Vec<WikiTitle>, DbErr> {
        let titles: Vec<(i32, String)> = entity::prelude::WikiPage::find()
            .select_only()
            .column(entity::wiki_page::Column::Id)
            .column(entity::wiki_page::Column::Alias)
            .order_by_asc(entity::wiki_page::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(titles
            .into_iter()
            .map(|(id, alias)| WikiTitle { id, alias })
            .collect())
    }

    /// Returns every page ordered by title, for the wiki index
    pub async fn get_all(&self) -> Result<Vec<entity::wiki_page::Model>, DbErr> {
        entity::prelude::WikiPage::find()
            .order_by_asc(entity::wiki_page::Column::Title)
            .all(self.db)
            .await
    }
}
