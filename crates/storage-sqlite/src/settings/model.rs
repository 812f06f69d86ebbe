use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for one settings key/value pair
#[derive(Queryable, Insertable, AsChangeset, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::settings)]
#[serde(rename_all = "camelCase")]
pub struct SettingDB {
    pub setting_key: String,
    pub setting_value: String,
}
