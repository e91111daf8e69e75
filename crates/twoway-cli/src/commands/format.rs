use anyhow::{Context, Result};
use twoway_router::Router;

use crate::locations::AppLocation;
use crate::FormatLocation;

pub fn execute(router: &Router<AppLocation>, location: FormatLocation) -> Result<()> {
    let location = match location {
        FormatLocation::Home => AppLocation::Home,
        FormatLocation::User { id } => AppLocation::User { id },
        FormatLocation::Invoice {
            user_id,
            invoice_id,
        } => AppLocation::Invoice {
            user_id,
            invoice_id,
        },
    };

    let path = router
        .format(&location)
        .with_context(|| format!("No route formats {:?}", location))?;
    println!("{}", path);

    Ok(())
}
