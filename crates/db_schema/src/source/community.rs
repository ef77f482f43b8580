use crate::{
  newtypes::{CommunityId, PersonId},
  schema::{community, community_follower},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = community)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A community.
pub struct Community {
  pub id: CommunityId,
  pub name: String,
  /// A longer title, that can contain other characters, and doesn't have to be unique.
  pub title: String,
  /// Whether the community is local.
  pub local: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Insertable)]
#[diesel(table_name = community)]
pub struct CommunityInsertForm {
  pub name: String,
  pub title: String,
  pub local: Option<bool>,
  pub published: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = community)]
pub struct CommunityUpdateForm {
  pub title: Option<String>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = community_follower)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A membership row: a person subscribed to a community.
pub struct CommunityFollower {
  pub id: i32,
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub published: DateTime<Utc>,
  /// Whether the follow still awaits approval by the community.
  pub pending: bool,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = community_follower)]
pub struct CommunityFollowerForm {
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub pending: bool,
}
