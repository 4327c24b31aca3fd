mod common;
use common::get_connector;
use notizia::view::FeedView;
use notizia::{FeedQuery, Notizia};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = get_connector();
    let client = Notizia::builder().connector(connector).build()?;

    // Comma-separated terms are rewritten to a pipe-joined search before
    // they hit the endpoint.
    let query = FeedQuery::search("ai, climate, energy");
    println!("Fetching articles for {:?}…", query.search.as_deref().unwrap());

    match client.articles(&query).await {
        Ok(articles) => {
            println!("Showing {} article(s).\n", articles.len());
            println!("{}", FeedView::from_articles(&articles));
        }
        Err(e) => eprintln!("Failed to fetch: {e}"),
    }
    Ok(())
}
