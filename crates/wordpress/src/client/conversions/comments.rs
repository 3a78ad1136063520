//! Comment type conversion functions.

use vitrine_core::{CommentId, CommentStatus};

use crate::types::Comment;

use super::super::queries::create_comment;
use super::parse_wp_date;

pub fn convert_comment(comment: create_comment::CreateCommentCreateCommentComment) -> Comment {
    Comment {
        id: comment.id,
        database_id: CommentId::new(comment.database_id),
        content: comment.content,
        date: parse_wp_date(comment.date),
        status: comment.status.and_then(convert_status),
    }
}

fn convert_status(status: create_comment::CommentStatusEnum) -> Option<CommentStatus> {
    match status {
        create_comment::CommentStatusEnum::APPROVE => Some(CommentStatus::Approve),
        create_comment::CommentStatusEnum::HOLD => Some(CommentStatus::Hold),
        create_comment::CommentStatusEnum::SPAM => Some(CommentStatus::Spam),
        create_comment::CommentStatusEnum::TRASH => Some(CommentStatus::Trash),
        create_comment::CommentStatusEnum::Other(value) => {
            tracing::warn!(status = %value, "unknown comment status from server");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_comment_held_for_moderation() {
        let data: create_comment::ResponseData = serde_json::from_value(json!({
            "createComment": {
                "clientMutationId": "2fd1b2a8-9f6c-4f6e-8b30-0c5ad5a0f0aa",
                "success": true,
                "comment": {
                    "id": "Y29tbWVudDo4MQ==",
                    "databaseId": 81,
                    "content": "<p>Atendimento excelente.</p>",
                    "date": "2024-06-20T18:45:00",
                    "status": "HOLD"
                }
            }
        }))
        .unwrap();

        let payload = data.create_comment.unwrap();
        assert_eq!(
            payload.client_mutation_id.as_deref(),
            Some("2fd1b2a8-9f6c-4f6e-8b30-0c5ad5a0f0aa")
        );

        let comment = convert_comment(payload.comment.unwrap());
        assert_eq!(comment.database_id, CommentId::new(81));
        assert_eq!(comment.status, Some(CommentStatus::Hold));
        assert!(comment.date.is_some());
    }

    #[test]
    fn test_convert_comment_unknown_status_degrades() {
        let data: create_comment::ResponseData = serde_json::from_value(json!({
            "createComment": {
                "clientMutationId": null,
                "success": true,
                "comment": {
                    "id": "Y29tbWVudDo4Mg==",
                    "databaseId": 82,
                    "content": null,
                    "date": null,
                    "status": "SOMETHING_NEW"
                }
            }
        }))
        .unwrap();

        let comment = convert_comment(data.create_comment.unwrap().comment.unwrap());
        assert!(comment.status.is_none());
        assert!(comment.content.is_none());
    }
}
