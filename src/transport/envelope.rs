use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::ApiError;

/// Uniform wrapper around every Bot API response body.
///
/// `ok` defaults to `false` when absent; every other field is optional.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub ok: bool,
    pub result: Option<T>,
    pub error_code: Option<i32>,
    pub description: Option<String>,
    pub parameters: Option<ResponseParameters>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseParameters {
    pub retry_after: Option<u64>,
    pub migrate_to_chat_id: Option<i64>,
}

/// Outcome of a well-formed envelope.
#[derive(Debug)]
pub enum EnvelopeOutcome<T> {
    Ok(Option<T>),
    Failed(ApiError),
}

impl<T> Envelope<T> {
    pub fn into_outcome(self) -> EnvelopeOutcome<T> {
        if self.ok {
            return EnvelopeOutcome::Ok(self.result);
        }
        let parameters = self.parameters.unwrap_or_default();
        EnvelopeOutcome::Failed(ApiError::new(
            self.error_code,
            self.description,
            parameters.retry_after,
            parameters.migrate_to_chat_id,
        ))
    }
}

pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<Envelope<T>, serde_json::Error> {
    serde_json::from_slice(body)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::domain::User;

    use super::*;

    fn outcome<T: DeserializeOwned>(body: &str) -> EnvelopeOutcome<T> {
        decode_envelope::<T>(body.as_bytes()).unwrap().into_outcome()
    }

    #[test]
    fn ok_result_is_decoded_into_target_type() {
        match outcome::<User>(r#"{"ok":true,"result":{"id":1,"first_name":"test"}}"#) {
            EnvelopeOutcome::Ok(Some(user)) => {
                assert_eq!(
                    user,
                    User {
                        id: 1,
                        first_name: "test".to_owned(),
                        ..Default::default()
                    }
                );
                assert_eq!(user.username, None);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn ok_without_result_is_reported_as_none() {
        assert!(matches!(
            outcome::<bool>(r#"{"ok":true}"#),
            EnvelopeOutcome::Ok(None)
        ));
    }

    #[test]
    fn failure_keeps_code_description_and_hints() {
        let body = r#"
        {
          "ok": false,
          "error_code": 429,
          "description": "Too Many Requests: retry after 3",
          "parameters": { "retry_after": 3, "migrate_to_chat_id": -1001 }
        }
        "#;
        match outcome::<bool>(body) {
            EnvelopeOutcome::Failed(err) => {
                assert_eq!(err.code(), Some(429));
                assert_eq!(err.to_string(), "Too Many Requests: retry after 3");
                assert_eq!(err.retry_after(), Some(Duration::from_secs(3)));
                assert_eq!(err.migrate_to_chat_id(), Some(-1001));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn description_is_the_display_string() {
        match outcome::<bool>(r#"{"ok":false,"description":"test"}"#) {
            EnvelopeOutcome::Failed(err) => {
                assert_eq!(err.to_string(), "test");
                assert_eq!(err.code(), None);
                assert_eq!(err.retry_after(), None);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_a_failure_with_empty_description() {
        match outcome::<bool>("{}") {
            EnvelopeOutcome::Failed(err) => assert_eq!(err.to_string(), ""),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn malformed_bodies_are_decode_errors() {
        let err = decode_envelope::<bool>(b"").unwrap_err();
        assert!(err.is_eof());

        let err = decode_envelope::<bool>(b"test").unwrap_err();
        assert!(err.is_syntax());

        let err = decode_envelope::<bool>(br#"{"ok":"test"}"#).unwrap_err();
        assert!(err.is_data());
    }
}
