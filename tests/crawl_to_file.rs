// End-to-end: local shops -> crawl -> output.json -> read back

use product_crawler::output::{write_results, DEFAULT_OUTPUT_FILE};
use product_crawler::{
    CrawlOrchestrator, CrawlResult, HostMatch, PageLinkCollector, ProductClassifier, Session,
    SessionConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn shop(body: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn orchestrator() -> CrawlOrchestrator {
    let config = SessionConfig {
        timeout: Duration::from_secs(2),
        user_agent: None,
    };
    let session = Session::new(config, &mut StdRng::seed_from_u64(2024)).unwrap();
    CrawlOrchestrator::new(
        PageLinkCollector::new(session, HostMatch::Containment),
        ProductClassifier::default(),
    )
}

#[tokio::test]
async fn crawl_writes_only_domains_with_links() {
    let books = shop(
        r#"<a href="/catalogue/page-2.html">next</a>
           <a href="/catalogue/sapiens_996/index.html">Sapiens</a>
           <a href="/index.html">Home</a>"#,
        200,
    )
    .await;
    let empty = shop("<html><body>Under construction</body></html>", 200).await;
    let down = shop("", 502).await;

    let domains = vec![books.uri(), empty.uri(), down.uri()];
    let result = orchestrator().run(&domains).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_OUTPUT_FILE);
    write_results(&path, &result).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let written: CrawlResult = serde_json::from_str(&contents).unwrap();

    let keys: Vec<_> = written.domains().cloned().collect();
    assert_eq!(keys, vec![books.uri()]);

    let mut products = written.get(&books.uri()).unwrap().clone();
    products.sort();
    assert_eq!(
        products,
        vec![
            format!("{}/catalogue/page-2.html", books.uri()),
            format!("{}/catalogue/sapiens_996/index.html", books.uri()),
        ]
    );
    assert!(contents.contains("\n    \""));
}
