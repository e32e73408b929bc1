pub use super::wiki_page::Entity as WikiPage;
pub use super::wiki_user::Entity as WikiUser;
