use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use page_search::{EngineConfig, SearchEngine, TextProcessing};

const WORDS: &[&str] = &[
    "rust", "systems", "programming", "language", "memory", "safety", "search", "engine",
    "index", "query", "ranking", "documents", "running", "cooking", "recipes", "bread",
    "vegetables", "network", "protocol", "parsing", "compilers", "storage", "caching", "fast",
];

fn corpus(size: usize) -> Vec<(String, String)> {
    (0..size)
        .map(|i| {
            let text: Vec<&str> = (0..40).map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()]).collect();
            (format!("https://example.com/page/{i}"), text.join(" "))
        })
        .collect()
}

// cargo bench --bench engine_search
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(30);

    let modes = [
        TextProcessing::None,
        TextProcessing::Stemmer,
        TextProcessing::LemmatizerPos,
    ];
    for processing in modes {
        let docs = corpus(2000);
        let bytes: usize = docs.iter().map(|(_, text)| text.len()).sum();
        let config = EngineConfig::default().with_text_processing(processing);
        let name = format!("{processing:?}");

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::new("bulk_index", &name), &docs, |b, docs| {
            b.iter(|| {
                let engine = SearchEngine::new("bench", Some(config.clone())).unwrap();
                engine.bulk_index(black_box(docs.clone()));
                black_box(engine.len())
            })
        });

        let engine = SearchEngine::new("bench", Some(config.clone())).unwrap();
        engine.bulk_index(docs);
        group.throughput(Throughput::Elements(1));
        group.bench_function(BenchmarkId::new("search", &name), |b| {
            b.iter(|| black_box(engine.search(black_box("fast rust search engine"))))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
