pub mod client;
pub mod response;

pub use client::{OpenTdbClient, QuestionSource};
pub use response::{describe_response_code, parse_response, sample_questions};
