use page_search::{EngineConfig, SearchEngine, TextProcessing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    structured_logger::Builder::new().init();

    // 创建搜索引擎
    let engine = SearchEngine::new(
        "page_search_demo",
        Some(
            EngineConfig::default()
                .with_stopwords(true)
                .with_text_processing(TextProcessing::Stemmer),
        ),
    )?;

    // 批量添加页面
    let pages = vec![
        (
            "https://example.com/rust".to_string(),
            "Rust is a systems programming language focused on safety and speed".to_string(),
        ),
        (
            "https://example.com/python".to_string(),
            "Python is a dynamic programming language".to_string(),
        ),
        (
            "https://example.com/recipes".to_string(),
            "Cooking recipes: baking bread, roasting vegetables".to_string(),
        ),
    ];
    engine.bulk_index(pages);
    engine.index(
        "https://example.com/async",
        "Asynchronous programming in Rust with futures",
    );

    // 搜索
    for query in ["rust programming", "baked bread", "languages"] {
        let results = engine.search_ranked(query, 3);
        log::info!(action = "search", query = query; "{} results", results.len());
        for (url, score) in results {
            println!("{query:?}: {url}, score: {score:.4}");
        }
    }

    println!(
        "Indexed {} pages, average length {:.1} characters",
        engine.document_count(),
        engine.average_document_length()?
    );
    println!("stats: {:?}", engine.stats());

    Ok(())
}
