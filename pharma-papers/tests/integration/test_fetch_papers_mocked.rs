//! Integration tests for `PaperFinder::fetch_papers` using mocked HTTP responses
//!
//! These tests run complete retrievals against a wiremock server that stands
//! in for the NCBI ESearch and EFetch endpoints.

use pharma_papers::{ClientConfig, OutputRecord, PaperFinder, ProgressObserver};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build one `PubmedArticle` element; authors are `(fore, last, affiliation)`
fn article_xml(pmid: &str, title: &str, authors: &[(&str, &str, &str)]) -> String {
    let authors: String = authors
        .iter()
        .map(|(fore, last, affiliation)| {
            let affiliation = if affiliation.is_empty() {
                String::new()
            } else {
                format!("<AffiliationInfo><Affiliation>{affiliation}</Affiliation></AffiliationInfo>")
            };
            format!(
                "<Author><LastName>{last}</LastName><ForeName>{fore}</ForeName>{affiliation}</Author>"
            )
        })
        .collect();

    format!(
        r#"<PubmedArticle>
    <MedlineCitation>
        <PMID Version="1">{pmid}</PMID>
        <Article>
            <Journal><JournalIssue><PubDate><Year>2023</Year><Month>Apr</Month><Day>15</Day></PubDate></JournalIssue></Journal>
            <ArticleTitle>{title}</ArticleTitle>
            <AuthorList>{authors}</AuthorList>
        </Article>
    </MedlineCitation>
</PubmedArticle>"#
    )
}

fn article_set(articles: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" ?>\n<PubmedArticleSet>{}</PubmedArticleSet>",
        articles.concat()
    )
}

fn esearch_json(ids: &[&str]) -> String {
    let ids: Vec<String> = ids.iter().map(|id| format!("\"{id}\"")).collect();
    format!(
        r#"{{"header": {{"type": "esearch"}}, "esearchresult": {{"count": "{}", "idlist": [{}]}}}}"#,
        ids.len(),
        ids.join(",")
    )
}

async fn mount_esearch(server: &MockServer, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(esearch_json(ids))
                .insert_header("content-type", "application/json"),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_efetch(server: &MockServer, ids: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .and(query_param("id", ids))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/xml"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn create_finder(server: &MockServer, batch_size: usize) -> PaperFinder {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_batch_size(batch_size);

    PaperFinder::with_config(config).expect("finder should build")
}

#[derive(Default)]
struct RecordingObserver {
    queries: Vec<String>,
    ids_found: Option<usize>,
    accepted: Vec<String>,
    finished: Option<usize>,
}

impl ProgressObserver for RecordingObserver {
    fn query_started(&mut self, query: &str) {
        self.queries.push(query.to_string());
    }

    fn ids_found(&mut self, count: usize) {
        self.ids_found = Some(count);
    }

    fn record_accepted(&mut self, record: &OutputRecord) {
        self.accepted.push(record.pmid.clone());
    }

    fn finished(&mut self, count: usize) {
        self.finished = Some(count);
    }
}

#[tokio::test]
#[traced_test]
async fn test_company_paper_end_to_end() {
    let server = MockServer::start().await;
    mount_esearch(&server, &["111"]).await;
    mount_efetch(
        &server,
        "111",
        article_set(&[article_xml(
            "111",
            "Novel kinase inhibitors",
            &[
                ("Jane", "Doe", "PharmaCorp LLC, Boston. jane@pharmacorp.com"),
                ("Ann", "Lee", "Harvard University, Cambridge"),
            ],
        )]),
    )
    .await;

    let papers = create_finder(&server, 50)
        .fetch_papers("kinase inhibitor", false)
        .await
        .expect("retrieval should succeed");

    assert_eq!(
        papers,
        vec![OutputRecord {
            pmid: "111".to_string(),
            title: "Novel kinase inhibitors".to_string(),
            publication_date: "2023-04-15".to_string(),
            non_academic_authors: "Jane Doe".to_string(),
            company_affiliations: "PharmaCorp LLC, Boston. jane@pharmacorp.com".to_string(),
            corresponding_email: "jane@pharmacorp.com".to_string(),
        }]
    );
}

#[tokio::test]
#[traced_test]
async fn test_academic_only_papers_are_dropped() {
    let server = MockServer::start().await;
    mount_esearch(&server, &["201", "202"]).await;
    mount_efetch(
        &server,
        "201,202",
        article_set(&[
            article_xml(
                "201",
                "Academic paper",
                &[("Ann", "Lee", "Department of Biology, Stanford University")],
            ),
            article_xml(
                "202",
                "Company paper",
                &[("Bo", "Kim", "Acme Biotech Inc, San Diego")],
            ),
        ]),
    )
    .await;

    let papers = create_finder(&server, 50)
        .fetch_papers("biology", false)
        .await
        .unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].pmid, "202");
    assert_eq!(papers[0].corresponding_email, "");
}

#[tokio::test]
#[traced_test]
async fn test_ids_are_fetched_in_batches_in_order() {
    let server = MockServer::start().await;
    mount_esearch(&server, &["1", "2", "3", "4", "5"]).await;

    let company = |pmid: &str| article_xml(pmid, &format!("Paper {pmid}"), &[("A", "B", "Acme Pharma")]);
    mount_efetch(&server, "1,2", article_set(&[company("1"), company("2")])).await;
    mount_efetch(&server, "3,4", article_set(&[company("3"), company("4")])).await;
    mount_efetch(&server, "5", article_set(&[company("5")])).await;

    let papers = create_finder(&server, 2)
        .fetch_papers("pharma", false)
        .await
        .unwrap();

    let pmids: Vec<&str> = papers.iter().map(|p| p.pmid.as_str()).collect();
    assert_eq!(pmids, vec!["1", "2", "3", "4", "5"]);

    let requests = server.received_requests().await.unwrap();
    let efetch_count = requests
        .iter()
        .filter(|r| r.url.path() == "/efetch.fcgi")
        .count();
    assert_eq!(efetch_count, 3);
}

#[tokio::test]
#[traced_test]
async fn test_duplicate_pmid_across_batches_is_emitted_once() {
    let server = MockServer::start().await;
    mount_esearch(&server, &["7", "8"]).await;

    mount_efetch(
        &server,
        "7",
        article_set(&[article_xml("7", "First copy", &[("A", "B", "Acme Pharma")])]),
    )
    .await;
    // Second batch repeats PMID 7 alongside the requested one
    mount_efetch(
        &server,
        "8",
        article_set(&[
            article_xml("7", "Second copy", &[("A", "B", "Acme Pharma")]),
            article_xml("8", "Other paper", &[("C", "D", "Beta Therapeutics Inc")]),
        ]),
    )
    .await;

    let papers = create_finder(&server, 1)
        .fetch_papers("dedup", false)
        .await
        .unwrap();

    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].pmid, "7");
    assert_eq!(papers[0].title, "First copy");
    assert_eq!(papers[1].pmid, "8");
}

#[tokio::test]
#[traced_test]
async fn test_empty_search_makes_no_fetch() {
    let server = MockServer::start().await;
    mount_esearch(&server, &[]).await;

    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut observer = RecordingObserver::default();
    let papers = create_finder(&server, 50)
        .fetch_papers_with_observer("nothing matches", &mut observer)
        .await
        .unwrap();

    assert!(papers.is_empty());
    assert_eq!(observer.ids_found, Some(0));
    assert_eq!(observer.finished, Some(0));
}

#[tokio::test]
#[traced_test]
async fn test_esearch_without_idlist_is_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"header": {}}"#))
        .mount(&server)
        .await;

    let papers = create_finder(&server, 50)
        .fetch_papers("anything", false)
        .await
        .unwrap();

    assert!(papers.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_request_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "cancer AND 2023[dp]"))
        .and(query_param("retmax", "100"))
        .and(query_param("retmode", "json"))
        .and(query_param("tool", "get-papers-list"))
        .and(query_param("email", "researcher@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_email("researcher@example.com");
    let papers = PaperFinder::with_config(config)
        .unwrap()
        .fetch_papers("cancer AND 2023[dp]", false)
        .await
        .unwrap();

    assert!(papers.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_observer_sees_progress() {
    let server = MockServer::start().await;
    mount_esearch(&server, &["31", "32"]).await;
    mount_efetch(
        &server,
        "31,32",
        article_set(&[
            article_xml("31", "Kept", &[("A", "B", "Gamma Pharmaceuticals Ltd")]),
            article_xml("32", "Dropped", &[("C", "D", "Oxford University")]),
        ]),
    )
    .await;

    let mut observer = RecordingObserver::default();
    let papers = create_finder(&server, 50)
        .fetch_papers_with_observer("progress", &mut observer)
        .await
        .unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(observer.queries, vec!["progress"]);
    assert_eq!(observer.ids_found, Some(2));
    assert_eq!(observer.accepted, vec!["31"]);
    assert_eq!(observer.finished, Some(1));
}

#[tokio::test]
#[traced_test]
async fn test_debug_flag_does_not_change_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json(&["41"])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_set(&[
            article_xml("41", "Same either way", &[("A", "B", "Delta Corp")]),
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let finder = create_finder(&server, 50);
    let quiet = finder.fetch_papers("same", false).await.unwrap();
    let verbose = finder.fetch_papers("same", true).await.unwrap();

    assert_eq!(quiet, verbose);
    assert_eq!(quiet.len(), 1);
}
