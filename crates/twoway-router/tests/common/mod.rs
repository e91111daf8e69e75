//! Shared fixtures for integration tests
//!
//! The sample application: the root path, `home`, `users/:id`,
//! `users/:id/invoice/:id` and `posts/:slug`. [`shape_router`] adds routes
//! made of nothing but free segments.

#![allow(dead_code)]

use twoway_router::{end, int, lit, segment, Location, Match, Router, RouterConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum AppLocation {
    Root,
    Home,
    User { id: i64 },
    Invoice { user_id: i64, invoice_id: i64 },
    Post { slug: String },
    NotFound,
}

impl Location for AppLocation {
    fn not_found() -> Self {
        AppLocation::NotFound
    }
}

/// Writes no segments at all
pub fn root() -> Match<()> {
    end()
}

pub fn home() -> Match<()> {
    lit("home").skip(end())
}

pub fn user() -> Match<i64> {
    lit("users").and(int()).skip(end())
}

pub fn invoice() -> Match<(i64, i64)> {
    lit("users").and(int()).skip(lit("invoice")).then(int()).skip(end())
}

/// The slug may be empty, leaving a trailing separator
pub fn post() -> Match<String> {
    lit("posts").and(segment()).skip(end())
}

/// Most specific route first
pub fn app_router(config: RouterConfig) -> Router<AppLocation> {
    Router::builder()
        .with_config(config)
        .route(
            "root",
            root(),
            |()| AppLocation::Root,
            |location: &AppLocation| matches!(location, AppLocation::Root).then_some(()),
        )
        .route(
            "invoice",
            invoice(),
            |(user_id, invoice_id)| AppLocation::Invoice {
                user_id,
                invoice_id,
            },
            |location: &AppLocation| match location {
                AppLocation::Invoice {
                    user_id,
                    invoice_id,
                } => Some((*user_id, *invoice_id)),
                _ => None,
            },
        )
        .route(
            "user",
            user(),
            |id| AppLocation::User { id },
            |location: &AppLocation| match location {
                AppLocation::User { id } => Some(*id),
                _ => None,
            },
        )
        .route(
            "home",
            home(),
            |()| AppLocation::Home,
            |location: &AppLocation| matches!(location, AppLocation::Home).then_some(()),
        )
        .route(
            "post",
            post(),
            |slug| AppLocation::Post { slug },
            |location: &AppLocation| match location {
                AppLocation::Post { slug } => Some(slug.clone()),
                _ => None,
            },
        )
        .build()
        .unwrap()
}

/// Locations whose routes start with a free segment instead of a literal
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeLocation {
    Root,
    Page { name: String, number: i64 },
    Slug { slug: String },
    NotFound,
}

impl Location for ShapeLocation {
    fn not_found() -> Self {
        ShapeLocation::NotFound
    }
}

/// `""`, `:name/:number` and a lone `:slug`
pub fn shape_router(config: RouterConfig) -> Router<ShapeLocation> {
    Router::builder()
        .with_config(config)
        .route(
            "root",
            end(),
            |()| ShapeLocation::Root,
            |location: &ShapeLocation| matches!(location, ShapeLocation::Root).then_some(()),
        )
        .route(
            "page",
            segment().then(int()).skip(end()),
            |(name, number)| ShapeLocation::Page { name, number },
            |location: &ShapeLocation| match location {
                ShapeLocation::Page { name, number } => Some((name.clone(), *number)),
                _ => None,
            },
        )
        .route(
            "slug",
            segment().skip(end()),
            |slug| ShapeLocation::Slug { slug },
            |location: &ShapeLocation| match location {
                ShapeLocation::Slug { slug } => Some(slug.clone()),
                _ => None,
            },
        )
        .build()
        .unwrap()
}

/// Installs a test subscriber so router debug logs show up with `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
