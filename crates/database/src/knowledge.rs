//! Knowledge-base search and CSV export over articles and ideas.

use serde::Serialize;

use crate::models::{Article, Idea};

/// Header row of the CSV export.
pub const CSV_HEADER: &str = "Type,Title,Content,Category,Votes,Author,Date";

/// Characters of content kept per exported row.
pub const CSV_CONTENT_CHARS: usize = 100;

/// Articles and ideas matching a search term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeResults {
    pub articles: Vec<Article>,
    pub ideas: Vec<Idea>,
}

fn matches(term: &str, fields: [&str; 3]) -> bool {
    fields.iter().any(|field| field.to_lowercase().contains(term))
}

/// Case-insensitive substring search over title, body and category.
///
/// A blank term matches everything. Input order is preserved.
pub fn search(articles: &[Article], ideas: &[Idea], term: &str) -> KnowledgeResults {
    let term = term.trim().to_lowercase();

    KnowledgeResults {
        articles: articles
            .iter()
            .filter(|a| matches(&term, [a.title.as_str(), a.content.as_str(), a.category.as_str()]))
            .cloned()
            .collect(),
        ideas: ideas
            .iter()
            .filter(|i| matches(&term, [i.title.as_str(), i.description.as_str(), i.category.as_str()]))
            .cloned()
            .collect(),
    }
}

/// Render articles, then ideas, as CSV.
///
/// Every field is quoted with embedded quotes doubled. Authors are always
/// `Anonymous` and dates are cut to `YYYY-MM-DD`.
pub fn export_csv(articles: &[Article], ideas: &[Idea]) -> String {
    let rows = articles
        .iter()
        .map(|a| {
            csv_row([
                "Article",
                a.title.as_str(),
                excerpt(&a.content).as_str(),
                a.category.as_str(),
                a.votes.to_string().as_str(),
                "Anonymous",
                day(&a.created_at),
            ])
        })
        .chain(ideas.iter().map(|i| {
            csv_row([
                "Idea",
                i.title.as_str(),
                excerpt(&i.description).as_str(),
                i.category.as_str(),
                i.votes.to_string().as_str(),
                "Anonymous",
                day(&i.created_at),
            ])
        }));

    std::iter::once(CSV_HEADER.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(CSV_CONTENT_CHARS).collect();
    out.push_str("...");
    out
}

fn day(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

fn csv_row(fields: [&str; 7]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, content: &str, category: &str) -> Article {
        Article {
            id: format!("a-{}", title),
            user_id: None,
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            article_type: "user_submitted".to_string(),
            status: "published".to_string(),
            votes: 3,
            created_at: "2024-05-06 10:11:12".to_string(),
        }
    }

    fn idea(title: &str, description: &str, category: &str) -> Idea {
        Idea {
            id: format!("i-{}", title),
            user_id: "u1".to_string(),
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            status: "submitted".to_string(),
            votes: 0,
            created_at: "2024-05-07 08:00:00".to_string(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let articles = vec![
            article("Yard Management", "Trailer moves", "logistics"),
            article("Spend cubes", "Category trees", "procurement"),
        ];
        let ideas = vec![
            idea("Dock slots", "Book YARD time by carrier", "manhattan"),
            idea("Forecast", "Use POS data", "blue_yonder"),
        ];

        let results = search(&articles, &ideas, "yard");
        assert_eq!(results.articles.len(), 1);
        assert_eq!(results.articles[0].title, "Yard Management");
        assert_eq!(results.ideas.len(), 1);
        assert_eq!(results.ideas[0].title, "Dock slots");

        let results = search(&articles, &ideas, "BLUE_YONDER");
        assert!(results.articles.is_empty());
        assert_eq!(results.ideas.len(), 1);
    }

    #[test]
    fn test_blank_term_matches_all() {
        let articles = vec![article("A", "x", "general")];
        let ideas = vec![idea("B", "y", "coupa"), idea("C", "z", "coupa")];

        let results = search(&articles, &ideas, "  ");
        assert_eq!(results.articles.len(), 1);
        assert_eq!(results.ideas.len(), 2);
    }

    #[test]
    fn test_export_empty() {
        assert_eq!(export_csv(&[], &[]), CSV_HEADER);
    }

    #[test]
    fn test_export_rows() {
        let csv = export_csv(
            &[article("Say \"hi\"", "Short", "general")],
            &[idea("Idea, with comma", "Desc", "kinaxis")],
        );
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            r#""Article","Say ""hi""","Short...","general","3","Anonymous","2024-05-06""#
        );
        assert_eq!(
            lines[2],
            r#""Idea","Idea, with comma","Desc...","kinaxis","0","Anonymous","2024-05-07""#
        );
    }

    #[test]
    fn test_export_truncates_content() {
        let long = "é".repeat(150);
        let csv = export_csv(&[article("Long", &long, "general")], &[]);
        let expected = format!("\"{}...\"", "é".repeat(100));
        assert!(csv.contains(&expected));
        assert!(!csv.contains(&"é".repeat(101)));
    }
}
