use std::sync::Arc;

use istocks_core::{
    FmpClient, MarketDataService,
    view::{DetailController, LoadOutcome, NewsController, SearchController},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build a client from FMP_API_KEY (and optional FMP_BASE_URL / FMP_TIMEOUT_SECS).
    let client = FmpClient::from_env()?;
    let service: Arc<dyn MarketDataService> = Arc::new(client.clone());

    // 2. Search by company name.
    let search = SearchController::new(service.clone());
    let outcome = search.search("Apple").await;
    println!("--- Search 'Apple' ({outcome:?}) ---");
    if let Some(msg) = search.error_message() {
        println!("Error: {msg}");
    }
    let results = search.results();
    for quote in &results {
        println!(
            "  {:<8} {:<40} {} ({})",
            quote.symbol, quote.name, quote.exchange, quote.currency
        );
    }
    println!();

    // 3. Load the profile of the first hit.
    let symbol = results.first().map_or("AAPL", |q| q.symbol.as_str());
    let detail = DetailController::new(service.clone());
    if detail.load(symbol).await == LoadOutcome::Loaded
        && let Some(profile) = detail.profile()
    {
        println!("--- Profile for {} ---", profile.symbol);
        println!("Name: {}", profile.company_name);
        println!("Sector: {}", profile.sector.as_deref().unwrap_or_default());
        println!("Price: ${:.2}", profile.price.unwrap_or_default());
        if let Some((low, high)) = profile.range_bounds() {
            println!("52w range: {low:.2} - {high:.2}");
        }
    } else if let Some(msg) = detail.error_message() {
        println!("Profile error: {msg}");
    }
    println!();

    // 4. Refresh the news feed, five articles at a time.
    let news = NewsController::new(service).limit(5);
    news.refresh().await;
    println!("--- Latest articles ---");
    match news.error_message() {
        Some(msg) => println!("Error: {msg}"),
        None => {
            for article in news.articles() {
                println!("  [{}] {}", article.date, article.title);
            }
        }
    }

    // 5. The builder form of the same call, without a controller.
    let page = client.articles().page(1).limit(3).fetch().await?;
    println!("\nPage 1 has {} articles.", page.len());

    Ok(())
}
