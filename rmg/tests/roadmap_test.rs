//! End-to-end tests: requester output flowing into the renderer

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tempfile::TempDir;

use roadmap::llm::{CompletionRequest, CompletionResponse, LlmClient, LlmError};
use roadmap::prompts::PromptLoader;
use roadmap::{
    DocumentRenderer, GenerationSettings, MSG_MISSING_FIELDS, PageSetup, RoadmapRequester, SkillLevel,
};

/// Backend that always answers with the same text
struct FixedClient {
    reply: String,
    calls: AtomicUsize,
}

impl FixedClient {
    fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl LlmClient for FixedClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CompletionResponse::text(self.reply.clone()))
    }
}

fn requester(client: Arc<FixedClient>) -> RoadmapRequester {
    RoadmapRequester::new(
        Some(client as Arc<dyn LlmClient>),
        PromptLoader::embedded(),
        GenerationSettings::default(),
    )
}

#[tokio::test]
async fn test_data_science_scenario() {
    let reply = "Phase 1 (Weeks 1-4): Python and statistics\n\
                 - Tools: Jupyter, pandas\n\
                 - Practice: analyse a CSV dataset\n\
                 Tips: study a little every day";
    let client = FixedClient::new(reply);
    let requester = requester(client.clone());

    let text = requester
        .generate("Data Science", Some(SkillLevel::Beginner), "3 months")
        .await;

    assert_eq!(text, reply);
    assert!(text.contains("Phase 1"));
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_long_roadmap_renders_to_multiple_pages() {
    let reply = (1..=300).map(|i| format!("- Step {}", i)).collect::<Vec<_>>().join("\n");
    let requester = requester(FixedClient::new(reply));
    let dir = TempDir::new().unwrap();
    let renderer = DocumentRenderer::new(PageSetup::default(), dir.path().join("AI_Learning_Roadmap.pdf"));

    let text = requester.generate("Rust", Some(SkillLevel::Intermediate), "6 months").await;
    let path = renderer.render(&text).expect("document produced");

    assert!(path.exists());
    let layout = renderer.layout(&text);
    assert_eq!(layout.line_count(), 300);
    assert_eq!(layout.page_count(), 6);
}

#[tokio::test]
async fn test_validation_message_is_still_renderable() {
    let client = FixedClient::new("unused");
    let requester = requester(client.clone());
    let dir = TempDir::new().unwrap();
    let renderer = DocumentRenderer::new(PageSetup::default(), dir.path().join("out.pdf"));

    let text = requester.generate("", Some(SkillLevel::Beginner), "1 month").await;

    assert_eq!(text, MSG_MISSING_FIELDS);
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    assert!(renderer.render(&text).is_some());
}

/// Decoded content stream of every page in a written PDF
fn page_streams(path: &std::path::Path) -> Vec<Vec<u8>> {
    let doc = lopdf::Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|id| doc.get_page_content(*id).unwrap())
        .collect()
}

#[test]
fn test_render_twice_same_content() {
    let dir = TempDir::new().unwrap();
    let renderer = DocumentRenderer::new(PageSetup::default(), dir.path().join("AI_Learning_Roadmap.pdf"));
    let text = (1..=60)
        .map(|i| format!("Week {}: caf\u{e9} \u{2022} practice", i))
        .collect::<Vec<_>>()
        .join("\n");

    let first = renderer.render(&text).unwrap();
    let first_layout = renderer.layout(&text);
    let first_pages = page_streams(&first);
    let second = renderer.render(&text).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_layout, renderer.layout(&text));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

    assert_eq!(first_pages.len(), 2);
    assert_eq!(first_pages, page_streams(&second));
}

#[test]
fn test_rerender_replaces_previous_document() {
    let dir = TempDir::new().unwrap();
    let renderer = DocumentRenderer::new(PageSetup::default(), dir.path().join("AI_Learning_Roadmap.pdf"));
    let long = vec!["- task"; 120].join("\n");

    let path = renderer.render(&long).unwrap();
    assert_eq!(page_streams(&path).len(), 3);

    renderer.render("Week 1 only").unwrap();
    assert_eq!(page_streams(&path).len(), 1);
}
