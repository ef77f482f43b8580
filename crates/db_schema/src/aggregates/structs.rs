use crate::{newtypes::CommunityId, schema::community_aggregates};
use chrono::{DateTime, Utc};
use diesel::sql_types::{BigInt, Integer, Nullable};
use serde::{Deserialize, Serialize};

#[derive(
  PartialEq,
  Eq,
  Debug,
  Serialize,
  Deserialize,
  Clone,
  Queryable,
  QueryableByName,
  Selectable,
  Identifiable,
)]
#[diesel(table_name = community_aggregates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// Aggregate data for a community.
pub struct CommunityAggregates {
  pub id: i32,
  pub community_id: CommunityId,
  /// The number of subscriptions, maintained by a trigger on `community_follower`.
  pub subscribers: i64,
  pub published: DateTime<Utc>,
}

#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, QueryableByName)]
/// A community whose stored subscriber count disagrees with its actual number of followers.
pub struct SubscriberDrift {
  #[diesel(sql_type = Integer)]
  pub community_id: CommunityId,
  /// `None` when the community has no aggregate row at all.
  #[diesel(sql_type = Nullable<BigInt>)]
  pub stored: Option<i64>,
  #[diesel(sql_type = BigInt)]
  pub actual: i64,
}
