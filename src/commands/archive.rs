//! Date archive, grouped by month

use anyhow::Result;

use crate::helpers::date::display_date;
use crate::helpers::list::group_by_month;
use crate::Blogcat;

/// Print the catalog grouped by month and year, newest first
pub async fn run(app: &Blogcat) -> Result<()> {
    let loader = app.loader();
    let catalog = loader.load_catalog().await?;

    for (month, posts) in group_by_month(&catalog) {
        println!("{}", month);
        for post in posts {
            println!(
                "  {:<12} {}",
                display_date(post.date.as_deref(), &app.config.date_format),
                post.title
            );
        }
        println!();
    }

    Ok(())
}
