//! SharedTransaction entity <-> model mapper

use challet_core::entities::SharedTransaction;
use challet_core::value_objects::Snowflake;

use crate::models::SharedTransactionModel;

impl From<SharedTransactionModel> for SharedTransaction {
    fn from(model: SharedTransactionModel) -> Self {
        SharedTransaction {
            id: Snowflake::new(model.id),
            challenge_id: Snowflake::new(model.challenge_id),
            user_id: Snowflake::new(model.user_id),
            deposit: model.deposit,
            transaction_amount: model.transaction_amount,
            content: model.content,
            image: model.image,
            transaction_datetime: model.transaction_datetime,
        }
    }
}
