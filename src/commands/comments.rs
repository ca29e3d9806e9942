//! Show the comment thread for a post

use anyhow::Result;

use crate::Blogcat;

/// Print the comments, with replies indented underneath
pub async fn run(app: &Blogcat, post_id: &str) -> Result<()> {
    let loader = app.loader();
    let comments = loader.load_comments(post_id).await;

    if comments.is_empty() {
        println!("No comments for {}", post_id);
        return Ok(());
    }

    println!("Comments ({}):", comments.len());
    for comment in &comments {
        println!(
            "  {} ({}):",
            comment.author,
            comment.created_at.as_deref().unwrap_or("")
        );
        println!("    {}", comment.content);
        for reply in &comment.replies {
            println!(
                "    > {} ({}):",
                reply.author,
                reply.created_at.as_deref().unwrap_or("")
            );
            println!("      {}", reply.content);
        }
    }

    Ok(())
}
