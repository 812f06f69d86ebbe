use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{deactivation_as_str, FinancialMethodDB, FinancialMethodDetailDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{financial_method_details, financial_methods};
use cambio_core::errors::{Error, Result};
use cambio_core::methods::{
    DeactivationKind, FinancialMethod, FinancialMethodDetail, MethodError, MethodRepositoryTrait,
    NewFinancialMethod, NewFinancialMethodDetail,
};

pub struct MethodRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MethodRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MethodRepositoryTrait for MethodRepository {
    fn get_method(&self, method_id: &str) -> Result<FinancialMethod> {
        let mut conn = get_connection(&self.pool)?;
        let method_db = financial_methods::table
            .find(method_id)
            .select(FinancialMethodDB::as_select())
            .first::<FinancialMethodDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(MethodError::NotFound(method_id.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(method_db.into())
    }

    fn list_methods(&self, is_active_filter: Option<bool>) -> Result<Vec<FinancialMethod>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = financial_methods::table
            .select(FinancialMethodDB::as_select())
            .into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(financial_methods::is_active.eq(active));
        }

        let rows = query
            .order(financial_methods::name.asc())
            .load::<FinancialMethodDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(FinancialMethod::from).collect())
    }

    async fn create_method(&self, new_method: NewFinancialMethod) -> Result<FinancialMethod> {
        let now = Utc::now().naive_utc();
        let method_db = FinancialMethodDB {
            id: Uuid::new_v4().to_string(),
            name: new_method.name,
            kind: new_method.kind.as_str().to_string(),
            commission_pct: new_method.commission_pct.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(financial_methods::table)
                    .values(&method_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(method_db.into())
            })
            .await
    }

    async fn set_method_active(&self, method_id: &str, active: bool) -> Result<FinancialMethod> {
        let method_id = method_id.to_string();
        self.writer
            .exec(move |conn| {
                let now = Utc::now().naive_utc();

                let affected = diesel::update(financial_methods::table.find(&method_id))
                    .set((
                        financial_methods::is_active.eq(active),
                        financial_methods::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(MethodError::NotFound(method_id.clone()).into());
                }

                if active {
                    // Reactivation restores only the details the earlier
                    // cascade switched off; directly deactivated ones stay.
                    diesel::update(
                        financial_method_details::table
                            .filter(financial_method_details::method_id.eq(&method_id))
                            .filter(
                                financial_method_details::deactivation
                                    .eq(deactivation_as_str(DeactivationKind::Cascade)),
                            ),
                    )
                    .set((
                        financial_method_details::is_active.eq(true),
                        financial_method_details::deactivation
                            .eq(deactivation_as_str(DeactivationKind::None)),
                        financial_method_details::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                } else {
                    diesel::update(
                        financial_method_details::table
                            .filter(financial_method_details::method_id.eq(&method_id))
                            .filter(financial_method_details::is_active.eq(true)),
                    )
                    .set((
                        financial_method_details::is_active.eq(false),
                        financial_method_details::deactivation
                            .eq(deactivation_as_str(DeactivationKind::Cascade)),
                        financial_method_details::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                }

                let method_db = financial_methods::table
                    .find(&method_id)
                    .select(FinancialMethodDB::as_select())
                    .first::<FinancialMethodDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(method_db.into())
            })
            .await
    }

    fn get_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail> {
        let mut conn = get_connection(&self.pool)?;
        let detail_db = financial_method_details::table
            .find(detail_id)
            .select(FinancialMethodDetailDB::as_select())
            .first::<FinancialMethodDetailDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(MethodError::DetailNotFound(detail_id.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(detail_db.into())
    }

    fn list_details(&self, method_id: &str) -> Result<Vec<FinancialMethodDetail>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = financial_method_details::table
            .filter(financial_method_details::method_id.eq(method_id))
            .order(financial_method_details::label.asc())
            .select(FinancialMethodDetailDB::as_select())
            .load::<FinancialMethodDetailDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FinancialMethodDetail::from).collect())
    }

    async fn create_detail(
        &self,
        new_detail: NewFinancialMethodDetail,
    ) -> Result<FinancialMethodDetail> {
        let now = Utc::now().naive_utc();
        let detail_db = FinancialMethodDetailDB {
            id: Uuid::new_v4().to_string(),
            method_id: new_detail.method_id,
            owner: new_detail.owner,
            label: new_detail.label,
            commission_pct: new_detail.commission_pct.map(|c| c.to_string()),
            is_active: true,
            deactivation: deactivation_as_str(DeactivationKind::None).to_string(),
            created_at: now,
            updated_at: now,
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(financial_method_details::table)
                    .values(&detail_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(detail_db.into())
            })
            .await
    }

    async fn set_detail_active(
        &self,
        detail_id: &str,
        active: bool,
        deactivation: DeactivationKind,
    ) -> Result<FinancialMethodDetail> {
        let detail_id = detail_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(financial_method_details::table.find(&detail_id))
                    .set((
                        financial_method_details::is_active.eq(active),
                        financial_method_details::deactivation
                            .eq(deactivation_as_str(deactivation)),
                        financial_method_details::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(MethodError::DetailNotFound(detail_id.clone()).into());
                }

                let detail_db = financial_method_details::table
                    .find(&detail_id)
                    .select(FinancialMethodDetailDB::as_select())
                    .first::<FinancialMethodDetailDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(detail_db.into())
            })
            .await
    }
}
