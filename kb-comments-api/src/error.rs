use anyhow::{anyhow, Context};
use serde_json::json;

use crate::CommentId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Comment {0:?} not found")]
    CommentNotFound(CommentId),

    #[error("Comment {comment:?} was modified concurrently (version {expected} expected, {found} found)")]
    VersionConflict {
        comment: CommentId,
        expected: i64,
        found: i64,
    },

    #[error("Request timed out")]
    Timeout,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::CommentNotFound(_) => StatusCode::NOT_FOUND,
            Error::VersionConflict { .. } => StatusCode::CONFLICT,
            Error::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::CommentNotFound(c) => json!({
                "message": "comment not found",
                "type": "comment-not-found",
                "comment": c.0,
            }),
            Error::VersionConflict {
                comment,
                expected,
                found,
            } => json!({
                "message": "comment was modified concurrently",
                "type": "version-conflict",
                "comment": comment.0,
                "expected": expected,
                "found": found,
            }),
            Error::Timeout => json!({
                "message": "request timed out",
                "type": "timeout",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        let int_field = |name: &str| {
            data.get(name)
                .and_then(|v| v.as_i64())
                .ok_or_else(|| anyhow!("error contents has no integer field {name:?}"))
        };
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "permission-denied" => Error::PermissionDenied,
                "comment-not-found" => Error::CommentNotFound(CommentId(int_field("comment")?)),
                "version-conflict" => Error::VersionConflict {
                    comment: CommentId(int_field("comment")?),
                    expected: int_field("expected")?,
                    found: int_field("found")?,
                },
                "timeout" => Error::Timeout,
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
