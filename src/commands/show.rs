//! Show a single post with its related posts

use anyhow::Result;

use crate::catalog::query::find_related;
use crate::helpers::date::display_date;
use crate::Blogcat;

/// Print one post by id, then the posts related to it by category
pub async fn run(app: &Blogcat, id: &str) -> Result<()> {
    let loader = app.loader();

    let Some(post) = loader.load_post(id).await? else {
        println!("Post not found: {}", id);
        return Ok(());
    };

    println!("{}", post.title);
    println!(
        "by {} on {}",
        post.author_name,
        display_date(post.date.as_deref(), &app.config.date_format)
    );
    if let Some(category) = &post.category {
        println!("category: {}", category);
    }
    println!("image: {}", post.image);
    println!();
    if !post.excerpt.is_empty() {
        println!("{}", post.excerpt);
        println!();
    }
    if !post.content.is_empty() {
        println!("{}", post.content);
        println!();
    }

    // Related posts come from the full catalog; an unavailable catalog just
    // means no related section, not a failed page.
    let catalog = loader.load_catalog().await.unwrap_or_default();
    let related = find_related(
        &catalog,
        post.category.as_deref(),
        &post.id,
        app.config.related_limit,
    );

    if !related.is_empty() {
        println!("You might also like:");
        for p in related {
            println!("  {} - {}", p.id, p.title);
        }
    }

    Ok(())
}
