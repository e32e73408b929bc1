//! Route table mapping URL paths to wiki handlers.
//!
//! The table is seeded with the built-in routes, then [`sync_routes`] adds one route per stored
//! page before the server starts accepting requests. Entries are only ever appended: a path that is
//! already registered keeps its original target.
//!
//! Paths that match no entry but whose last segment starts with [`ADD_PAGE_PREFIX`] resolve to the
//! "add page" form, so linking to `/wiki-some-topic` offers to create the missing page.

use std::collections::{btree_map::Entry, BTreeMap, HashSet};

use sea_orm::ConnectionTrait;

use crate::server::{
    data::page::{PageRepository, WikiTitle},
    error::Error,
};

/// Segment prefix that turns an unmatched path into an "add page" route.
pub const ADD_PAGE_PREFIX: &str = "wiki-";

/// Paths reserved for the JSON API, never resolved to an "add page" route.
pub const API_PREFIX: &str = "/api";

/// Handler a route dispatches to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Wiki index listing every page
    Index,
    ShowPage { id: i32 },
    /// Form to create a page with the given title
    AddPage { title: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// URL path starting with `/`
    pub alias: String,
    pub target: RouteTarget,
}

impl Route {
    pub fn show_page(title: &WikiTitle) -> Self {
        Self {
            alias: format!("/{}", title.alias),
            target: RouteTarget::ShowPage { id: title.id },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteTarget>,
}

impl RouteTable {
    /// Creates an empty route table
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route table holding the wiki index at `/`
    pub fn with_builtin_routes() -> Self {
        let mut table = Self::new();
        table.add_route(Route {
            alias: "/".to_string(),
            target: RouteTarget::Index,
        });

        table
    }

    /// Every registered path, in lexical order
    pub fn all_aliases(&self) -> Vec<String> {
        self.routes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registers a route unless its path is already taken.
    ///
    /// # Returns
    /// - `true` - Route was added
    /// - `false` - Path already registered, the existing route is left untouched
    pub fn add_route(&mut self, route: Route) -> bool {
        match self.routes.entry(route.alias) {
            Entry::Vacant(entry) => {
                entry.insert(route.target);
                true
            }
            Entry::Occupied(entry) => {
                tracing::debug!(alias = %entry.key(), "Route already registered, skipping");
                false
            }
        }
    }

    /// Resolves a request path.
    ///
    /// The path is percent-decoded and trailing slashes are ignored. Registered paths win over the
    /// `wiki-` fallback, which takes the remainder of the last segment as the title of the page to
    /// add. A bare `wiki-` segment does not match, and paths under [`API_PREFIX`] never fall back.
    pub fn find_route(&self, path: &str) -> Option<Route> {
        let decoded = urlencoding::decode(path).ok()?;
        let path = normalize(&decoded);

        if let Some(target) = self.routes.get(path) {
            return Some(Route {
                alias: path.to_string(),
                target: target.clone(),
            });
        }

        let under_api = path
            .strip_prefix(API_PREFIX)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if under_api {
            return None;
        }

        let segment = path.rsplit('/').next()?;
        let title = segment.strip_prefix(ADD_PAGE_PREFIX)?;

        if title.trim().is_empty() {
            return None;
        }

        Some(Route {
            alias: path.to_string(),
            target: RouteTarget::AddPage {
                title: title.to_string(),
            },
        })
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Computes the routes missing for `titles` given the already registered `existing` paths.
///
/// Titles whose path is registered, or planned earlier in the same batch, are skipped.
pub fn plan_routes(existing: &[String], titles: &[WikiTitle]) -> Vec<Route> {
    let mut taken: HashSet<String> = existing.iter().cloned().collect();
    let mut planned = Vec::new();

    for title in titles {
        let route = Route::show_page(title);

        if !taken.insert(route.alias.clone()) {
            continue;
        }

        planned.push(route);
    }

    planned
}

/// Registers a route for every stored page that does not have one yet.
///
/// Runs once at startup; pages created afterwards get their route on the next start.
///
/// # Returns
/// - `Ok(usize)` - Number of routes added
/// - `Err(Error::DbErr)` - Page titles could not be loaded
pub async fn sync_routes<C: ConnectionTrait>(
    db: &C,
    table: &mut RouteTable,
) -> Result<usize, Error> {
    let titles = PageRepository::new(db).get_all_titles().await?;
    let planned = plan_routes(&table.all_aliases(), &titles);

    let added = planned
        .into_iter()
        .filter(|route| table.add_route(route.clone()))
        .count();

    tracing::info!(
        pages = titles.len(),
        added,
        total = table.len(),
        "Synchronized page routes"
    );

    Ok(added)
}
