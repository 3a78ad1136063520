//! Status enums for WordPress content.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a status string fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct StatusParseError(String);

/// Publication status of a WordPress content node.
///
/// WPGraphQL returns `ContentNode.status` as a lowercase string
/// (e.g. `"publish"`); the `where`-argument side uses the uppercase
/// `PostStatusEnum` values. This enum serializes lowercase to match the
/// response side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentStatus {
    #[default]
    Publish,
    Draft,
    Pending,
    Private,
    Future,
    Trash,
    AutoDraft,
    Inherit,
}

impl ContentStatus {
    /// Whether content with this status is publicly visible.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Publish)
    }

    /// The lowercase wire representation WPGraphQL uses in responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Future => "future",
            Self::Trash => "trash",
            Self::AutoDraft => "auto-draft",
            Self::Inherit => "inherit",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(Self::Publish),
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "private" => Ok(Self::Private),
            "future" => Ok(Self::Future),
            "trash" => Ok(Self::Trash),
            "auto-draft" => Ok(Self::AutoDraft),
            "inherit" => Ok(Self::Inherit),
            other => Err(StatusParseError(other.to_owned())),
        }
    }
}

/// Moderation status of a WordPress comment.
///
/// Matches the `CommentStatusEnum` values in the WPGraphQL schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentStatus {
    Approve,
    #[default]
    Hold,
    Spam,
    Trash,
}

impl CommentStatus {
    /// Whether the comment is publicly visible.
    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approve)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_content_status_from_str() {
        assert_eq!(
            "publish".parse::<ContentStatus>().unwrap(),
            ContentStatus::Publish
        );
        assert_eq!(
            "auto-draft".parse::<ContentStatus>().unwrap(),
            ContentStatus::AutoDraft
        );
        assert!("nonsense".parse::<ContentStatus>().is_err());
    }

    #[test]
    fn test_content_status_roundtrip() {
        for status in [
            ContentStatus::Publish,
            ContentStatus::Draft,
            ContentStatus::Pending,
            ContentStatus::Private,
            ContentStatus::Future,
            ContentStatus::Trash,
            ContentStatus::AutoDraft,
            ContentStatus::Inherit,
        ] {
            let parsed: ContentStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_content_status_serde() {
        let json = serde_json::to_string(&ContentStatus::AutoDraft).unwrap();
        assert_eq!(json, "\"auto-draft\"");

        let parsed: ContentStatus = serde_json::from_str("\"publish\"").unwrap();
        assert_eq!(parsed, ContentStatus::Publish);
    }

    #[test]
    fn test_content_status_is_public() {
        assert!(ContentStatus::Publish.is_public());
        assert!(!ContentStatus::Draft.is_public());
        assert!(!ContentStatus::Private.is_public());
    }

    #[test]
    fn test_comment_status_serde() {
        let json = serde_json::to_string(&CommentStatus::Approve).unwrap();
        assert_eq!(json, "\"APPROVE\"");

        let parsed: CommentStatus = serde_json::from_str("\"SPAM\"").unwrap();
        assert_eq!(parsed, CommentStatus::Spam);
    }

    #[test]
    fn test_comment_status_is_approved() {
        assert!(CommentStatus::Approve.is_approved());
        assert!(!CommentStatus::Hold.is_approved());
    }
}
