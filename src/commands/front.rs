//! Front-page sections: featured, recent, read-more

use anyhow::Result;
use std::collections::HashSet;

use crate::catalog::query::{find_featured, find_overflow, find_recent};
use crate::helpers::date::display_date;
use crate::Blogcat;

/// Print the three sections the blog front page renders
pub async fn run(app: &Blogcat) -> Result<()> {
    let loader = app.loader();
    let catalog = loader.load_catalog().await?;

    let featured = find_featured(&catalog);
    match featured {
        Some(post) => {
            println!("Featured:");
            println!("  {} - {} ({})", post.id, post.title, post.author_name);
        }
        None => println!("Featured: (none)"),
    }

    let recent = find_recent(
        &catalog,
        featured.map(|p| p.id.as_str()),
        app.config.recent_limit,
    );
    println!();
    println!("Recent posts:");
    for post in &recent {
        println!(
            "  {:<12} {}",
            display_date(post.date.as_deref(), &app.config.date_format),
            post.title
        );
    }

    let shown: HashSet<String> = recent.iter().map(|p| p.id.clone()).collect();
    let overflow = find_overflow(&catalog, &shown, app.config.read_more_limit);
    println!();
    println!("Read more:");
    for post in &overflow {
        println!("  {} - {}", post.id, post.title);
    }

    Ok(())
}
