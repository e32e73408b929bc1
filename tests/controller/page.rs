use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use wikiroute::{
    model::{
        auth::AuthResult,
        page::{NewPageForm, PageDto},
    },
    server::{
        controller::page::{create_page, get_page},
        model::session::password::SessionPasswordAuth,
    },
};

use super::*;

fn form(title: &str) -> Json<NewPageForm> {
    Json(NewPageForm {
        title: title.to_string(),
        body: "Body".to_string(),
    })
}

mod get_page {
    use super::*;

    #[tokio::test]
    /// Expect 200 with the page for an existing ID
    async fn returns_page() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page_tables()
            .with_page("FAQ", "faq")
            .build()
            .await?;

        let result = get_page(State(test.password_state()), Path(1)).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        let page: PageDto = json_body(resp).await;
        assert_eq!(page.alias, "/faq");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 not found for a page that does not exist
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_page_tables().build().await?;

        let result = get_page(State(test.password_state()), Path(1)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod create_page {
    use super::*;

    #[tokio::test]
    /// Expect 201 with the created page for a logged in visitor
    async fn creates_page_when_authenticated() -> Result<(), TestError> {
        let test = TestBuilder::new().with_page_tables().build().await?;
        SessionPasswordAuth::insert(&test.session, &AuthResult::authenticated("hidden", "alice"))
            .await
            .unwrap();

        let result = create_page(
            State(test.password_state()),
            test.session.clone(),
            form("Getting Started"),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let page: PageDto = json_body(resp).await;
        assert_eq!(page.alias, "/getting-started");

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 unauthorized for an anonymous visitor
    async fn returns_unauthorized_when_anonymous() -> Result<(), TestError> {
        let test = TestBuilder::new().with_page_tables().build().await?;

        let result = create_page(
            State(test.password_state()),
            test.session.clone(),
            form("Getting Started"),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 409 conflict when the derived alias is taken
    async fn returns_conflict_for_taken_alias() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_page_tables()
            .with_page("FAQ", "faq")
            .build()
            .await?;
        SessionPasswordAuth::insert(&test.session, &AuthResult::authenticated("hidden", "alice"))
            .await
            .unwrap();

        let result = create_page(
            State(test.password_state()),
            test.session.clone(),
            form("faq"),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        Ok(())
    }
}
