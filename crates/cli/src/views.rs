//! Plain-text rendering of the essay and review views

use essays_core::{Essay, EssayWithReviews, Review};
use std::fmt::Write;

/// Characters of essay content shown in the list view
const PREVIEW_CHARS: usize = 1000;

fn preview(content: &str) -> String {
    let mut text: String = content.chars().take(PREVIEW_CHARS).collect();
    text.push('…');
    text
}

pub fn essay_list(essays: &[Essay], term: Option<&str>) -> String {
    if essays.is_empty() {
        return match term.map(str::trim).filter(|t| !t.is_empty()) {
            Some(term) => format!("No essays found for \"{term}\""),
            None => "No essays to display.".to_string(),
        };
    }

    let mut out = String::new();
    for essay in essays {
        let _ = writeln!(out, "{}", essay.author);
        let _ = writeln!(out, "  {}", preview(&essay.content));
    }
    out.trim_end().to_string()
}

pub fn essay_detail(essay: &EssayWithReviews, logged_in: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", essay.standing());
    let _ = writeln!(out);
    let _ = writeln!(out, "Essay by {}", essay.author);
    let _ = writeln!(out, "{}", essay.content);
    let _ = writeln!(out);
    let _ = writeln!(out, "Reviews");

    if essay.reviews.is_empty() {
        let _ = writeln!(out, "No reviews yet.");
    }
    for review in &essay.reviews {
        let _ = writeln!(out, "[{}/3] by {}", review.rank, review.author);
        let _ = writeln!(out, "  {}", review.content);
    }

    if !logged_in {
        let _ = writeln!(out);
        let _ = writeln!(out, "Please login to write a review.");
    }
    out.trim_end().to_string()
}

pub fn review_feed(reviews: &[Review]) -> String {
    let mut out = String::from("Latest Reviews");
    for review in reviews {
        let _ = write!(
            out,
            "\n[{}/3] by {}\n  {}",
            review.rank, review.author, review.content
        );
    }
    out
}

pub fn my_reviews(reviews: &[Review]) -> String {
    let mut out = String::from("My Reviews");
    if reviews.is_empty() {
        out.push_str("\nYou haven't written any reviews yet.");
    }
    for review in reviews {
        let _ = write!(
            out,
            "\n[{}/3] on essay #{}\n  {}",
            review.rank, review.essay_id, review.content
        );
    }
    out
}

pub fn my_essay(essay: Option<&EssayWithReviews>) -> String {
    match essay {
        Some(essay) => {
            let length = essay.content.trim().chars().count();
            format!(
                "Edit Your Essay\nLength: {length} characters (1024-4096)\n\n{}",
                essay.content
            )
        }
        None => "Publish Your Essay\nYou have not published an essay yet. Use `publish <file>`."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use essays_core::Rank;

    fn essay(author: &str, content: &str) -> Essay {
        Essay {
            id: 1,
            author: author.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    fn review(rank: i64, author: &str) -> Review {
        Review {
            id: 9,
            essay_id: 1,
            rank: Rank::try_from(rank).unwrap(),
            content: "solid argument".to_string(),
            author: author.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_essay_list_messages() {
        assert_eq!(essay_list(&[], None), "No essays to display.");
        assert_eq!(essay_list(&[], Some("  ")), "No essays to display.");
        assert_eq!(
            essay_list(&[], Some("rust")),
            "No essays found for \"rust\""
        );
    }

    #[test]
    fn test_essay_list_truncates_preview() {
        let long = "b".repeat(1500);
        let rendered = essay_list(&[essay("alice", &long)], None);
        assert!(rendered.starts_with("alice\n"));
        let preview_line = rendered.lines().nth(1).unwrap();
        assert_eq!(preview_line.trim().chars().count(), PREVIEW_CHARS + 1);
    }

    #[test]
    fn test_essay_detail_lists_reviews_and_hint() {
        let detail = EssayWithReviews {
            id: 1,
            author: "alice".to_string(),
            content: "body".to_string(),
            created_at: Utc::now(),
            reviews: vec![review(3, "bob")],
        };
        let rendered = essay_detail(&detail, true);
        assert!(rendered.contains("rank 3 review"));
        assert!(rendered.contains("[3/3] by bob"));
        assert!(!rendered.contains("Please login"));

        let rendered = essay_detail(&detail, false);
        assert!(rendered.ends_with("Please login to write a review."));
    }

    #[test]
    fn test_essay_detail_without_reviews() {
        let detail = EssayWithReviews {
            id: 1,
            author: "alice".to_string(),
            content: "body".to_string(),
            created_at: Utc::now(),
            reviews: vec![],
        };
        let rendered = essay_detail(&detail, true);
        assert!(rendered.contains("No reviews yet."));
        assert!(rendered.contains("no reviews yet, rank it as high as you can"));
    }

    #[test]
    fn test_my_reviews_rendering() {
        assert!(my_reviews(&[]).contains("You haven't written any reviews yet."));
        let rendered = my_reviews(&[review(1, "alice")]);
        assert!(rendered.contains("[1/3] on essay #1"));
    }

    #[test]
    fn test_review_feed_rendering() {
        let rendered = review_feed(&[review(2, "carol")]);
        assert_eq!(
            rendered,
            "Latest Reviews\n[2/3] by carol\n  solid argument"
        );
    }
}
