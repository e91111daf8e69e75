use anyhow::Result;
use colored::Colorize;
use twoway_router::Router;

use crate::locations::AppLocation;

pub fn execute(router: &Router<AppLocation>, path: &str) -> Result<()> {
    match router.parse(path) {
        AppLocation::NotFound => {
            println!("{} {}", "✗".red(), format!("{path:?} matches no route").yellow());
        }
        location => {
            println!("{} {:?}", "✓".green(), location);
        }
    }

    Ok(())
}
