use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::TransactionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::transactions;
use cambio_core::errors::{Error, Result};
use cambio_core::operations::{
    OperationError, Transaction, TransactionRepositoryTrait, TransactionStatus,
};

pub struct TransactionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let transaction_db = transactions::table
            .find(transaction_id)
            .select(TransactionDB::as_select())
            .first::<TransactionDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(OperationError::TransactionNotFound(transaction_id.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(transaction_db.into())
    }

    fn list(&self, status_filter: Option<TransactionStatus>) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = transactions::table
            .select(TransactionDB::as_select())
            .into_boxed();
        if let Some(status) = status_filter {
            query = query.filter(transactions::status.eq(status.as_str()));
        }

        let rows = query
            .order(transactions::created_at.desc())
            .load::<TransactionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    async fn create(&self, transaction: Transaction) -> Result<Transaction> {
        let transaction_db = TransactionDB::from(transaction.clone());
        self.writer
            .exec(move |conn| {
                diesel::insert_into(transactions::table)
                    .values(&transaction_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(transaction)
            })
            .await
    }

    async fn update_status(
        &self,
        transaction_id: &str,
        status: TransactionStatus,
    ) -> Result<Transaction> {
        let transaction_id = transaction_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(transactions::table.find(&transaction_id))
                    .set((
                        transactions::status.eq(status.as_str()),
                        transactions::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(
                        OperationError::TransactionNotFound(transaction_id.clone()).into()
                    );
                }

                let transaction_db = transactions::table
                    .find(&transaction_id)
                    .select(TransactionDB::as_select())
                    .first::<TransactionDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(transaction_db.into())
            })
            .await
    }
}
