use super::ScenarioFailure;
use crate::session::ApiResponse;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy)]
pub enum MessageExpectation {
    Equals(&'static str),
    Contains(&'static str),
}

impl MessageExpectation {
    pub fn matches(&self, message: &str) -> bool {
        match self {
            MessageExpectation::Equals(expected) => message == *expected,
            MessageExpectation::Contains(phrase) => message.contains(phrase),
        }
    }
}

impl std::fmt::Display for MessageExpectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageExpectation::Equals(expected) => write!(f, "equal to {:?}", expected),
            MessageExpectation::Contains(phrase) => write!(f, "containing {:?}", phrase),
        }
    }
}

pub(super) fn expect_status(
    response: &ApiResponse,
    expected: StatusCode,
) -> Result<(), ScenarioFailure> {
    if response.status == expected {
        Ok(())
    } else {
        Err(ScenarioFailure::UnexpectedStatus {
            expected,
            actual: response.status,
            body: response.body.clone(),
        })
    }
}

pub(super) fn expect_body_contains(
    response: &ApiResponse,
    phrase: &'static str,
) -> Result<(), ScenarioFailure> {
    if response.contains(phrase) {
        Ok(())
    } else {
        Err(ScenarioFailure::MissingPhrase {
            phrase,
            body: response.body.clone(),
        })
    }
}

pub(super) fn expect_message(
    message: Option<&str>,
    expectation: MessageExpectation,
) -> Result<(), ScenarioFailure> {
    match message {
        Some(message) if expectation.matches(message) => Ok(()),
        _ => Err(ScenarioFailure::UnexpectedMessage {
            expected: expectation,
            actual: message.map(str::to_owned),
        }),
    }
}

pub(super) fn parse_body<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ScenarioFailure> {
    response
        .json()
        .map_err(|source| ScenarioFailure::MalformedBody {
            source,
            body: response.body.clone(),
        })
}
