//! SeaORM entities for the wiki database.

pub mod prelude;

pub mod wiki_page;
pub mod wiki_user;
