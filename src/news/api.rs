use crate::{
    core::{FmpClient, FmpError, client::constants::ARTICLES_PATH, net},
    news::model::NewsArticle,
};

pub(super) async fn fetch_articles(
    client: &FmpClient,
    page: u32,
    limit: u32,
) -> Result<Vec<NewsArticle>, FmpError> {
    let page_s = page.to_string();
    let limit_s = limit.to_string();
    let url = client.resource_url(
        ARTICLES_PATH,
        &[("page", page_s.as_str()), ("limit", limit_s.as_str())],
    )?;

    let key = format!("p{page}_l{limit}");
    let articles: Vec<NewsArticle> =
        net::get_json_array(client, url, ARTICLES_PATH, &key).await?;

    // the feed is replaced wholesale, so an empty page is reported rather than shown
    if articles.is_empty() {
        return Err(FmpError::EmptyResult);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = articles.len(), "decoded articles");

    Ok(articles)
}
