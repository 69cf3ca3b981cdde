use wesichain_perigon::{FilterPredicates, PerigonClient, PerigonConfig, PerigonRetriever};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = PerigonClient::builder()
        .api_key_from_env("PERIGON_API_KEY")
        .base_url_from_env("PERIGON_BASE_URL")
        .build()?;
    let retriever = PerigonRetriever::new(client);

    let config = PerigonConfig::standard().size(5).filter(FilterPredicates {
        language: Some("en".into()),
        category: Some("Sports".into()),
        ..FilterPredicates::default()
    });

    let docs = retriever
        .retrieve("Who won the recent F1 race?", Some(&config))
        .await?;
    println!("Retrieved {} articles", docs.len());
    for doc in &docs {
        println!(
            "- {} ({})",
            doc.metadata_str("title").unwrap_or("<untitled>"),
            doc.metadata_str("topics").unwrap_or_default()
        );
    }

    Ok(())
}
