use crate::{
  newtypes::{CommunityId, PersonId},
  schema::{community, community_follower},
  source::community::{
    Community,
    CommunityFollower,
    CommunityFollowerForm,
    CommunityInsertForm,
    CommunityUpdateForm,
  },
  traits::{Crud, Followable},
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait]
impl Crud for Community {
  type InsertForm = CommunityInsertForm;
  type UpdateForm = CommunityUpdateForm;
  type IdType = CommunityId;

  /// The matching `community_aggregates` row is inserted by a trigger in the same statement.
  async fn create(pool: &mut DbPool<'_>, form: &CommunityInsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(community::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, community_id: CommunityId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    community::table.find(community_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
    form: &CommunityUpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(community::table.find(community_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, community_id: CommunityId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(community::table.find(community_id))
      .execute(conn)
      .await
  }
}

#[async_trait]
impl Followable for CommunityFollower {
  type Form = CommunityFollowerForm;

  /// Following twice updates the existing row, so the subscriber count only moves on the first
  /// follow.
  async fn follow(pool: &mut DbPool<'_>, form: &CommunityFollowerForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(community_follower::table)
      .values(form)
      .on_conflict((community_follower::community_id, community_follower::person_id))
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn follow_accepted(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
    person_id: PersonId,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      community_follower::table
        .filter(community_follower::community_id.eq(community_id))
        .filter(community_follower::person_id.eq(person_id)),
    )
    .set(community_follower::pending.eq(false))
    .get_result::<Self>(conn)
    .await
  }

  async fn unfollow(pool: &mut DbPool<'_>, form: &CommunityFollowerForm) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      community_follower::table
        .filter(community_follower::community_id.eq(form.community_id))
        .filter(community_follower::person_id.eq(form.person_id)),
    )
    .execute(conn)
    .await
  }
}

impl CommunityFollower {
  /// Plain insert without the upsert of [`Followable::follow`]. Fails on an existing
  /// subscription.
  pub async fn insert(pool: &mut DbPool<'_>, form: &CommunityFollowerForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(community_follower::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  pub async fn list_for_community(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    community_follower::table
      .filter(community_follower::community_id.eq(community_id))
      .order_by(community_follower::published)
      .load::<Self>(conn)
      .await
  }
}
