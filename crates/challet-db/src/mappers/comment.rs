//! Comment entity <-> model mapper

use challet_core::entities::Comment;
use challet_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            shared_transaction_id: Snowflake::new(model.shared_transaction_id),
            user_id: Snowflake::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
        }
    }
}
