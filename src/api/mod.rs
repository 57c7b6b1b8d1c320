use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    FlashCard,
    SomoError,
    StudyContext,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    grade_level: &'a str,
    subject: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct FlashcardsRequest<'a> {
    subject: &'a str,
    grade_level: &'a str,
}

#[derive(Debug, Deserialize)]
struct FlashcardsResponse {
    flashcards: Vec<FlashCard>,
}

fn ensure_success(resp: &reqwest::Response) -> Result<(), SomoError> {
    if !resp.status().is_success() {
        return Err(SomoError::BackendStatus {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}

/// Asks the backend one curriculum question.
pub async fn ask(
    base_url: &str,
    question: &str,
    context: &StudyContext,
) -> Result<String, SomoError> {
    let body = AskRequest {
        question,
        grade_level: context.grade.as_str(),
        subject: &context.subject,
    };

    let resp = Client::new().post(format!("{}/ask", base_url)).json(&body).send().await?;
    ensure_success(&resp)?;

    let answer: AskResponse = resp.json().await?;
    Ok(answer.response)
}

/// Requests a freshly generated flashcard deck for the given subject.
pub async fn generate_flashcards(
    base_url: &str,
    context: &StudyContext,
) -> Result<Vec<FlashCard>, SomoError> {
    let body = FlashcardsRequest {
        subject: &context.subject,
        grade_level: context.grade.as_str(),
    };

    let resp = Client::new()
        .post(format!("{}/generate-flashcards", base_url))
        .json(&body)
        .send()
        .await?;
    ensure_success(&resp)?;

    let deck: FlashcardsResponse = resp.json().await?;
    Ok(deck.flashcards)
}

/// Connectivity probe for the status indicator. Any HTTP response counts
/// as reachable; only a transport error does not.
pub async fn check_reachable(base_url: &str) -> bool {
    Client::new().get(base_url).send().await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GradeLevel;

    #[test]
    fn ask_request_matches_the_wire_format() {
        let context = StudyContext::new(GradeLevel::Secondary, "physics");
        let body = AskRequest {
            question: "What is velocity?",
            grade_level: context.grade.as_str(),
            subject: &context.subject,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "question": "What is velocity?",
                "grade_level": "secondary",
                "subject": "physics",
            })
        );
    }

    #[test]
    fn flashcards_response_parses() {
        let raw = r#"{"flashcards":[{"question":"2+2?","answer":"4"}]}"#;
        let parsed: FlashcardsResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(parsed.flashcards.len(), 1);
        assert_eq!(parsed.flashcards[0].question, "2+2?");
        assert_eq!(parsed.flashcards[0].answer, "4");
    }
}
