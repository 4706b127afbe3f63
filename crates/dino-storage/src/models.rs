use crate::schema::kv_entries;

use diesel::prelude::*;

#[derive(Debug, Insertable)]
#[diesel(table_name = kv_entries)]
pub struct NewEntryRow<'a> {
  pub key: &'a str,
  pub value: &'a str,
}
