//! Bundled fallback data
//!
//! The static table used when no primary source is available. Records are
//! kept in the table's native shape (author under `author`, `M/D/YY`
//! dates, no `published` flag) and go through the same normalization path
//! as remote records.

use crate::catalog::{RawComment, RawPost, RawReply};

fn post(
    id: &str,
    title: &str,
    author: &str,
    date: &str,
    image: &str,
    excerpt: &str,
    category: &str,
) -> RawPost {
    RawPost {
        id: id.to_string(),
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        date: Some(date.to_string()),
        image: Some(image.to_string()),
        excerpt: Some(excerpt.to_string()),
        category: Some(category.to_string()),
        ..Default::default()
    }
}

/// The bundled post table
pub fn posts() -> Vec<RawPost> {
    let mut table = vec![
        post(
            "scalable-cloud-platform",
            "How We Built a Scalable Cloud Platform for a Fintech Startup",
            "Fortune Ishaku",
            "3/07/24",
            "/assets/images/featured-img.png",
            "Learn how we designed and implemented a cloud-native platform that scales with business growth and handles millions of transactions.",
            "Cloud",
        ),
        post(
            "agile-workflow-jenny",
            "Our Agile Workflow: From Sprint Planning to Retrospective",
            "Jenny Wilson",
            "3/4/24",
            "/assets/images/sideA.png",
            "A detailed look at how our team implements agile methodologies to deliver high-quality software on time.",
            "Agile",
        ),
        post(
            "agile-workflow-dianne",
            "Our Agile Workflow: From Sprint Planning to Retrospective",
            "Dianne Russell",
            "7/11/24",
            "/assets/images/sideA.png",
            "Discover the key components of our agile process and how we continuously improve our development cycle.",
            "Agile",
        ),
        post(
            "agile-workflow-guy",
            "Our Agile Workflow: From Sprint Planning to Retrospective",
            "Guy Hawkins",
            "9/4/24",
            "/assets/images/pics.png",
            "An inside look at our sprint planning, daily standups, and retrospective meetings that drive our development process.",
            "Agile",
        ),
        post(
            "cloud-migration",
            "5 Lessons Learned from Our Cloud Migration Journey",
            "Sarah Chen",
            "2/15/24",
            "/assets/images/pics.png",
            "Key insights and challenges we faced when migrating a legacy system to a modern cloud architecture.",
            "Cloud",
        ),
        post(
            "devops-practices",
            "DevOps Practices That Transformed Our Delivery Pipeline",
            "Marcus Johnson",
            "1/22/24",
            "/assets/images/pics.png",
            "How we implemented CI/CD, infrastructure as code, and monitoring to speed up our development cycle.",
            "DevOps",
        ),
        post(
            "microservices-architecture",
            "Microservices Architecture: Benefits and Challenges",
            "Elena Rodriguez",
            "4/10/24",
            "/assets/images/pics.png",
            "Our experience implementing a microservices architecture and the lessons we learned along the way.",
            "Architecture",
        ),
        post(
            "ai-in-software-development",
            "How We're Using AI to Improve Software Development",
            "David Kim",
            "5/2/24",
            "/assets/images/pics.png",
            "Practical applications of AI and machine learning in our software development process.",
            "AI",
        ),
        post(
            "mobile-app-performance",
            "Optimizing Mobile App Performance: Our Approach",
            "Sophia Patel",
            "3/28/24",
            "/assets/images/pics.png",
            "Techniques and strategies we use to ensure our mobile applications perform well on all devices.",
            "Mobile",
        ),
        post(
            "security-best-practices",
            "Security Best Practices for Modern Web Applications",
            "Michael Brown",
            "2/5/24",
            "/assets/images/pics.png",
            "Essential security measures we implement to protect our web applications from common threats.",
            "Security",
        ),
    ];

    table[0].featured = Some(true);
    table
}

/// Bundled comments for a post
pub fn comments(post_id: &str) -> Vec<RawComment> {
    all_comments()
        .into_iter()
        .filter(|c| c.post_id.as_deref() == Some(post_id))
        .collect()
}

fn comment(id: &str, post_id: &str, author: &str, content: &str, created_at: &str) -> RawComment {
    RawComment {
        id: id.to_string(),
        post_id: Some(post_id.to_string()),
        author: Some(author.to_string()),
        content: Some(content.to_string()),
        created_at: Some(created_at.to_string()),
        replies: None,
    }
}

/// The full bundled comment table
pub fn all_comments() -> Vec<RawComment> {
    let mut table = vec![
        comment(
            "comment-1",
            "scalable-cloud-platform",
            "Alex Morgan",
            "Great breakdown of the scaling strategy. Curious how you handled database sharding during peak loads.",
            "2024-03-10T09:15:00Z",
        ),
        comment(
            "comment-2",
            "scalable-cloud-platform",
            "Priya Nair",
            "We went through a similar migration last year. The all-or-nothing cutover advice resonates.",
            "2024-03-12T14:40:00Z",
        ),
        comment(
            "comment-3",
            "cloud-migration",
            "Tom Eriksen",
            "Lesson three saved us weeks. Wish we had read this before starting.",
            "2024-02-20T08:05:00Z",
        ),
    ];

    table[0].replies = Some(vec![RawReply {
        id: "reply-1".to_string(),
        author: Some("Fortune Ishaku".to_string()),
        content: Some(
            "We moved to consistent hashing with a small routing layer; happy to write a follow-up on it."
                .to_string(),
        ),
        created_at: Some("2024-03-10T16:30:00Z".to_string()),
    }]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_exactly_one_featured_post() {
        let featured: Vec<_> = posts()
            .into_iter()
            .filter(|p| p.featured.unwrap_or(false))
            .collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "scalable-cloud-platform");
    }

    #[test]
    fn test_table_ids_are_unique() {
        let table = posts();
        let mut ids: Vec<_> = table.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), table.len());
    }

    #[test]
    fn test_comments_filtered_by_post() {
        assert_eq!(comments("scalable-cloud-platform").len(), 2);
        assert_eq!(comments("cloud-migration").len(), 1);
        assert!(comments("devops-practices").is_empty());
    }
}
