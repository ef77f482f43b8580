use crate::{newtypes::PersonId, schema::person};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A person, who may subscribe to communities.
pub struct Person {
  pub id: PersonId,
  pub name: String,
  pub local: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Insertable)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub name: String,
  pub local: Option<bool>,
  pub published: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonUpdateForm {
  pub name: Option<String>,
  pub local: Option<bool>,
}
