use crate::{
  aggregates::structs::{CommunityAggregates, SubscriberDrift},
  newtypes::CommunityId,
  schema::{community_aggregates, community_follower},
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::count_star,
  result::Error,
  sql_query,
  sql_types::Integer,
  ExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;
use tracing::warn;

impl CommunityAggregates {
  pub async fn read(pool: &mut DbPool<'_>, community_id: CommunityId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    community_aggregates::table
      .filter(community_aggregates::community_id.eq(community_id))
      .first::<Self>(conn)
      .await
  }

  /// Counts the membership rows directly, without looking at the stored counter.
  pub async fn count_followers(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
  ) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    community_follower::table
      .filter(community_follower::community_id.eq(community_id))
      .select(count_star())
      .first::<i64>(conn)
      .await
  }

  /// Lists every community whose `subscribers` counter differs from its number of followers,
  /// including communities that lost their aggregate row.
  pub async fn find_drifted(pool: &mut DbPool<'_>) -> Result<Vec<SubscriberDrift>, Error> {
    let conn = &mut get_conn(pool).await?;
    sql_query(
      "SELECT c.id AS community_id, a.subscribers AS stored, coalesce(cf.actual, 0) AS actual
       FROM community c
       LEFT JOIN community_aggregates a ON a.community_id = c.id
       LEFT JOIN (
         SELECT community_id, count(*) AS actual
         FROM community_follower
         GROUP BY community_id
       ) cf ON cf.community_id = c.id
       WHERE a.subscribers IS DISTINCT FROM coalesce(cf.actual, 0)
       ORDER BY c.id",
    )
    .load::<SubscriberDrift>(conn)
    .await
  }

  /// Overwrites the counter with a fresh count, in a single statement. A missing aggregate row is
  /// recreated. Fails with `NotFound` if the community doesn't exist.
  pub async fn recount_subscribers(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    sql_query(
      "INSERT INTO community_aggregates (community_id, subscribers, published)
       SELECT c.id, (SELECT count(*) FROM community_follower WHERE community_id = c.id), c.published
       FROM community c
       WHERE c.id = $1
       ON CONFLICT (community_id) DO UPDATE SET subscribers = excluded.subscribers
       RETURNING *",
    )
    .bind::<Integer, _>(community_id)
    .get_result::<Self>(conn)
    .await
  }

  /// Recounts every drifted community and returns how many were fixed.
  pub async fn reconcile_all(pool: &mut DbPool<'_>) -> Result<usize, Error> {
    let drifted = Self::find_drifted(pool).await?;
    for drift in &drifted {
      match drift.stored {
        Some(stored) => warn!(
          "Subscriber count of community {} was {}, recounted to {}",
          drift.community_id, stored, drift.actual
        ),
        None => warn!(
          "Community {} had no aggregate row, recreated with {} subscribers",
          drift.community_id, drift.actual
        ),
      }
      Self::recount_subscribers(pool, drift.community_id).await?;
    }
    Ok(drifted.len())
  }
}
