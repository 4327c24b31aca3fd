use chrono::{TimeZone, Utc};

use notizia_core::{Article, ArticlesRequest, ClassifierScore, LexiconScore};

// One positive, one negative, one neutral; the second article carries a
// label-only classifier and the third none at all, so renderers exercise
// the score fallback and the PENDING path.
const COMPOUNDS: [f64; 3] = [0.64, -0.45, 0.05];

/// Deterministic article list for a normalized request.
#[must_use]
pub fn articles(req: &ArticlesRequest) -> Vec<Article> {
    match req {
        ArticlesRequest::Country(c) if c == "zz" => Vec::new(),
        ArticlesRequest::Search(s) if s == "EMPTY" => Vec::new(),
        ArticlesRequest::Country(c) => {
            let subjects = ["Markets", "Science", "Weather"];
            subjects
                .iter()
                .enumerate()
                .map(|(i, subject)| article(&format!("{subject} headlines for {c}"), i))
                .collect()
        }
        ArticlesRequest::Search(s) => s
            .split('|')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .enumerate()
            .map(|(i, term)| article(&format!("{term} update"), i))
            .collect(),
    }
}

fn article(title: &str, index: usize) -> Article {
    let compound = COMPOUNDS[index % COMPOUNDS.len()];
    let distilbert = match index % 3 {
        0 => Some(ClassifierScore {
            label: Some("POSITIVE".to_string()),
            score: Some(0.97),
        }),
        1 => Some(ClassifierScore {
            label: Some("NEGATIVE".to_string()),
            score: None,
        }),
        _ => None,
    };
    Article {
        title: Some(title.to_string()),
        url: Some(format!(
            "https://news.example/{}",
            title.to_lowercase().replace(' ', "-")
        )),
        source: Some("Notizia Wire".to_string()),
        published_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 9 + index as u32, 30, 0)
            .single(),
        vader: Some(LexiconScore { compound }),
        distilbert,
    }
}
