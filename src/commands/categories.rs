//! List categories with post counts

use anyhow::Result;

use crate::helpers::list::count_categories;
use crate::Blogcat;

/// Print every category and how many posts it holds
pub async fn run(app: &Blogcat) -> Result<()> {
    let loader = app.loader();
    let catalog = loader.load_catalog().await?;

    let counts = count_categories(&catalog);
    println!("Categories ({}):", counts.len());
    for (name, count) in counts {
        let noun = if count == 1 { "post" } else { "posts" };
        println!("  {} ({} {})", name, count, noun);
    }

    Ok(())
}
