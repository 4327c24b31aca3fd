mod common;
use common::get_connector;
use notizia::view::FeedView;
use notizia::{FeedQuery, Notizia};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create connector (mock unless NOTIZIA_ENDPOINT is set).
    let connector = get_connector();

    // 2. Build the client.
    let client = Notizia::builder().connector(connector).build()?;

    // 3. Fetch top headlines for the default country.
    println!("Fetching articles…");
    let articles = client.articles(&FeedQuery::default()).await?;
    println!("Showing {} article(s).\n", articles.len());

    // 4. Render cards.
    println!("{}", FeedView::from_articles(&articles));
    Ok(())
}
