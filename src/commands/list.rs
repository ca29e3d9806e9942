//! List the resolved catalog

use anyhow::Result;

use crate::helpers::date::display_date;
use crate::Blogcat;

/// Print every post in the catalog
pub async fn run(app: &Blogcat) -> Result<()> {
    let loader = app.loader();
    let catalog = loader.load_catalog().await?;

    println!("Posts ({}):", catalog.len());
    for post in &catalog {
        let date = display_date(post.date.as_deref(), &app.config.date_format);
        let category = post.category.as_deref().unwrap_or("-");
        let marker = if post.featured { "*" } else { " " };
        println!("  {} {:<12} {} [{}]", marker, date, post.title, category);
    }

    Ok(())
}
