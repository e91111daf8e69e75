// File: src/locations.rs
// Purpose: The sample location set the CLI routes between

use twoway_router::{end, int, lit, Location, Result, Router, RouterConfig};

/// Every page of the sample application
#[derive(Debug, Clone, PartialEq)]
pub enum AppLocation {
    Home,
    User { id: i64 },
    Invoice { user_id: i64, invoice_id: i64 },
    NotFound,
}

impl Location for AppLocation {
    fn not_found() -> Self {
        AppLocation::NotFound
    }
}

/// Builds the sample router, most specific route first
///
/// | Route | Location |
/// |-------|----------|
/// | `users/:user_id/invoice/:invoice_id` | `Invoice` |
/// | `users/:id` | `User` |
/// | `home` | `Home` |
pub fn router(config: RouterConfig) -> Result<Router<AppLocation>> {
    Router::builder()
        .with_config(config)
        .route(
            "invoice",
            lit("users").and(int()).skip(lit("invoice")).then(int()).skip(end()),
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
            lit("users").and(int()).skip(end()),
            |id| AppLocation::User { id },
            |location: &AppLocation| match location {
                AppLocation::User { id } => Some(*id),
                _ => None,
            },
        )
        .route(
            "home",
            lit("home").skip(end()),
            |()| AppLocation::Home,
            |location: &AppLocation| matches!(location, AppLocation::Home).then_some(()),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_routes() {
        let router = router(RouterConfig::default()).unwrap();

        assert_eq!(router.parse("home"), AppLocation::Home);
        assert_eq!(router.parse("users/1"), AppLocation::User { id: 1 });
        assert_eq!(
            router.parse("users/1/invoice/42"),
            AppLocation::Invoice {
                user_id: 1,
                invoice_id: 42
            }
        );
        assert_eq!(router.parse("foo"), AppLocation::NotFound);
    }

    #[test]
    fn test_empty_separator_is_rejected() {
        assert!(router(RouterConfig::default().with_separator("")).is_err());
    }

    #[test]
    fn test_every_routable_location_round_trips() {
        let router = router(RouterConfig::default().with_leading_separator(true)).unwrap();

        for location in [
            AppLocation::Home,
            AppLocation::User { id: 12 },
            AppLocation::Invoice {
                user_id: 3,
                invoice_id: -4,
            },
        ] {
            let path = router.format(&location).unwrap();
            assert!(path.starts_with('/'));
            assert_eq!(router.parse(&path), location);
        }
    }
}
