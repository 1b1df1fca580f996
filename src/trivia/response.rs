use crate::error::{QuizError, Result};
use crate::models::{Difficulty, Question, QuestionSet};
use crate::utils::decode_html_entities;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct TriviaResponseRaw {
    response_code: u8,
    #[serde(default)]
    results: Vec<TriviaRecordRaw>,
}

#[derive(Debug, Clone, Deserialize)]
struct TriviaRecordRaw {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

pub fn describe_response_code(code: u8) -> &'static str {
    match code {
        1 => "not enough questions for this query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limited, too many requests",
        _ => "unknown response code",
    }
}

fn decode_record(raw: TriviaRecordRaw) -> Result<Question> {
    let incorrect: [String; 3] = raw
        .incorrect_answers
        .into_iter()
        .map(|a| decode_html_entities(&a))
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|v: Vec<String>| {
            QuizError::MalformedResponse(format!(
                "expected 3 incorrect answers, got {}",
                v.len()
            ))
        })?;

    Ok(Question {
        prompt: decode_html_entities(&raw.question),
        correct_answer: decode_html_entities(&raw.correct_answer),
        incorrect_answers: incorrect,
    })
}

/// Validate a provider body and decode every record into display text.
/// No partial data is returned on failure.
pub fn parse_response(body: &str, difficulty: Difficulty) -> Result<Vec<Question>> {
    let raw: TriviaResponseRaw = serde_json::from_str(body)
        .map_err(|e| QuizError::MalformedResponse(e.to_string()))?;

    if raw.response_code != 0 {
        return Err(QuizError::Provider {
            code: raw.response_code,
            message: describe_response_code(raw.response_code).to_string(),
        });
    }

    if raw.results.is_empty() {
        return Err(QuizError::EmptyResultSet { difficulty });
    }

    raw.results.into_iter().map(decode_record).collect()
}

/// Draw `min(count, batch.len())` questions uniformly without replacement.
pub fn sample_questions<R: Rng + ?Sized>(
    batch: Vec<Question>,
    count: usize,
    rng: &mut R,
) -> QuestionSet {
    let picked = batch
        .choose_multiple(rng, count.min(batch.len()))
        .cloned()
        .collect();
    QuestionSet::new(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(q: &str, correct: &str) -> String {
        format!(
            r#"{{"type":"multiple","difficulty":"easy","category":"History","question":"{}","correct_answer":"{}","incorrect_answers":["A","B","C"]}}"#,
            q, correct
        )
    }

    fn body(code: u8, records: &[String]) -> String {
        format!(
            r#"{{"response_code":{},"results":[{}]}}"#,
            code,
            records.join(",")
        )
    }

    #[test]
    fn test_parse_decodes_all_text_fields() {
        let json = r#"{"response_code":0,"results":[{"question":"Who married in 1796? &quot;Hint&quot;","correct_answer":"Napoleon &amp; Josephine","incorrect_answers":["Louis &amp; Marie","Henry&#039;s wife","Ren&eacute;"]}]}"#;
        let questions = parse_response(json, Difficulty::Easy).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "Who married in 1796? \"Hint\"");
        assert_eq!(questions[0].correct_answer, "Napoleon & Josephine");
        assert_eq!(
            questions[0].incorrect_answers,
            [
                "Louis & Marie".to_string(),
                "Henry's wife".to_string(),
                "René".to_string()
            ]
        );
    }

    #[test]
    fn test_nonzero_code_is_provider_error() {
        let json = body(5, &[record("Q", "A1")]);
        match parse_response(&json, Difficulty::Hard) {
            Err(QuizError::Provider { code, message }) => {
                assert_eq!(code, 5);
                assert!(message.contains("rate limited"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_results_is_empty_result_set() {
        let err = parse_response(r#"{"response_code":0,"results":[]}"#, Difficulty::Medium)
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::EmptyResultSet {
                difficulty: Difficulty::Medium
            }
        ));
        assert!(err.is_provider_error());
    }

    #[test]
    fn test_missing_results_with_error_code() {
        let err = parse_response(r#"{"response_code":1}"#, Difficulty::Easy).unwrap_err();
        assert!(matches!(err, QuizError::Provider { code: 1, .. }));
    }

    #[test]
    fn test_wrong_answer_count_is_malformed() {
        let json = r#"{"response_code":0,"results":[{"question":"Q","correct_answer":"True","incorrect_answers":["False"]}]}"#;
        let err = parse_response(json, Difficulty::Easy).unwrap_err();
        assert!(matches!(err, QuizError::MalformedResponse(_)));
    }

    #[test]
    fn test_garbage_body_is_malformed() {
        let err = parse_response("<html>502</html>", Difficulty::Easy).unwrap_err();
        assert!(matches!(err, QuizError::MalformedResponse(_)));
    }

    #[test]
    fn test_sample_without_replacement() {
        let records: Vec<String> = (0..15).map(|i| record(&format!("Q{}", i), "X")).collect();
        let batch = parse_response(&body(0, &records), Difficulty::Easy).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let set = sample_questions(batch, 10, &mut rng);
        assert_eq!(set.len(), 10);
        let mut prompts: Vec<&str> = (0..set.len())
            .map(|i| set.get(i).unwrap().prompt.as_str())
            .collect();
        prompts.sort();
        prompts.dedup();
        assert_eq!(prompts.len(), 10);
    }

    #[test]
    fn test_sample_short_batch_keeps_everything() {
        let records: Vec<String> = (0..4).map(|i| record(&format!("Q{}", i), "X")).collect();
        let batch = parse_response(&body(0, &records), Difficulty::Easy).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let set = sample_questions(batch, 10, &mut rng);
        assert_eq!(set.len(), 4);
    }
}
