use anyhow::Result;
use colored::Colorize;
use twoway_router::Router;

use crate::locations::AppLocation;

pub fn execute(router: &Router<AppLocation>) -> Result<()> {
    println!("{}", "Routes (first match wins):".green().bold());

    for (index, name) in router.route_names().enumerate() {
        println!("  {}. {}", index + 1, name.cyan());
    }

    println!();
    println!("Separator: {:?}", router.config().separator);
    println!(
        "Leading separator: {}",
        if router.config().leading_separator { "Yes" } else { "No" }
    );

    Ok(())
}
