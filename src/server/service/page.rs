//! Wiki page service.

use sea_orm::DatabaseConnection;

use crate::{
    model::page::{NewPageDto, NewPageForm, PageDto, PageSummaryDto},
    server::{data::page::PageRepository, error::page::PageError, error::Error},
};

/// Derives the URL alias of a page from its title.
///
/// Letters and digits are lowercased, every other run of characters becomes a single `-`.
/// Returns `None` when the title has no letter or digit.
pub fn alias_for_title(title: &str) -> Option<String> {
    let mut alias = String::with_capacity(title.len());

    for c in title.chars() {
        if c.is_alphanumeric() {
            alias.extend(c.to_lowercase());
        } else if !alias.is_empty() && !alias.ends_with('-') {
            alias.push('-');
        }
    }

    let alias = alias.trim_end_matches('-');

    if alias.is_empty() {
        None
    } else {
        Some(alias.to_string())
    }
}

impl From<entity::wiki_page::Model> for PageDto {
    fn from(page: entity::wiki_page::Model) -> Self {
        Self {
            id: page.id,
            title: page.title,
            alias: format!("/{}", page.alias),
            body: page.body,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a page by ID.
    ///
    /// # Returns
    /// - `Ok(PageDto)` - Page found
    /// - `Err(Error::PageError(PageError::NotFound))` - No page with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_page(&self, page_id: i32) -> Result<PageDto, Error> {
        let page_repo = PageRepository::new(self.db);

        match page_repo.get(page_id).await? {
            Some(page) => Ok(page.into()),
            None => Err(PageError::NotFound(page_id).into()),
        }
    }

    /// Creates a page, deriving its alias from the title.
    ///
    /// The new page is not routable by alias until the route table is synchronized on the next
    /// start; it is reachable by ID right away.
    ///
    /// # Returns
    /// - `Ok(PageDto)` - Page created
    /// - `Err(Error::PageError(PageError::InvalidTitle))` - Title yields an empty alias
    /// - `Err(Error::PageError(PageError::AliasTaken))` - Another page already uses the alias
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_page(&self, form: NewPageForm) -> Result<PageDto, Error> {
        let title = form.title.trim();
        let alias = alias_for_title(title).ok_or(PageError::InvalidTitle)?;

        let page_repo = PageRepository::new(self.db);

        if page_repo.get_by_alias(&alias).await?.is_some() {
            return Err(PageError::AliasTaken(alias).into());
        }

        let page = page_repo.create(title, &alias, &form.body).await?;

        tracing::info!(page_id = page.id, alias = %page.alias, "Created wiki page");

        Ok(page.into())
    }

    /// Lists every page for the wiki index, ordered by title.
    pub async fn get_index(&self) -> Result<Vec<PageSummaryDto>, Error> {
        let page_repo = PageRepository::new(self.db);

        let pages = page_repo
            .get_all()
            .await?
            .into_iter()
            .map(|page| PageSummaryDto {
                id: page.id,
                title: page.title,
                alias: format!("/{}", page.alias),
            })
            .collect();

        Ok(pages)
    }

    /// Prefills the "add page" form for a title taken from the URL.
    pub fn new_page_form(title: &str) -> NewPageDto {
        NewPageDto {
            title: title.to_string(),
            alias: alias_for_title(title)
                .map(|alias| format!("/{}", alias))
                .unwrap_or_default(),
        }
    }
}
