use crate::config::QuizConfig;
use crate::error::Result;
use crate::logger;
use crate::models::{Difficulty, QuestionSet};
use crate::trivia::response::{parse_response, sample_questions};
use std::time::Instant;

/// Produces a fresh question set per call; keeps no state between calls.
pub trait QuestionSource {
    fn fetch(&self, category: u32, difficulty: Difficulty, count: usize) -> Result<QuestionSet>;
}

/// Open Trivia DB over HTTP. Requests run on an owned runtime so callers see
/// a plain blocking call.
#[derive(Debug)]
pub struct OpenTdbClient {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
}

impl OpenTdbClient {
    pub fn new(config: &QuizConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("history-trivia/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let runtime = tokio::runtime::Runtime::new()?;

        Ok(Self {
            client,
            runtime,
            base_url: config.api_url.clone(),
        })
    }

    pub fn query_params(
        category: u32,
        difficulty: Difficulty,
        count: usize,
    ) -> [(&'static str, String); 4] {
        [
            ("amount", count.to_string()),
            ("category", category.to_string()),
            ("type", "multiple".to_string()),
            ("difficulty", difficulty.as_str().to_string()),
        ]
    }

    async fn fetch_body(
        &self,
        category: u32,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<String> {
        let body = self
            .client
            .get(&self.base_url)
            .query(&Self::query_params(category, difficulty, count))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

impl QuestionSource for OpenTdbClient {
    fn fetch(&self, category: u32, difficulty: Difficulty, count: usize) -> Result<QuestionSet> {
        let started = Instant::now();
        logger::log(&format!(
            "Fetching {} {} questions (category {})",
            count, difficulty, category
        ));

        let result = self
            .runtime
            .block_on(self.fetch_body(category, difficulty, count))
            .and_then(|body| parse_response(&body, difficulty))
            .map(|batch| {
                let available = batch.len();
                let set = sample_questions(batch, count, &mut rand::thread_rng());
                logger::log(&format!(
                    "Received {} questions, kept {} ({} ms)",
                    available,
                    set.len(),
                    started.elapsed().as_millis()
                ));
                set
            });

        if let Err(e) = &result {
            logger::log(&format!("Fetch failed: {}", e));
        }
        result
    }
}
