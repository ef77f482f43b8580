use anyhow::Context;
use diesel::{connection::SimpleConnection, Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness};
use lemmy_utils::error::{LemmyErrorExt, LemmyErrorType, LemmyResult};
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// This SQL code sets up the `r` schema, which contains things that can be safely dropped and replaced
/// instead of being changed using migrations. It may not create or modify things outside of the `r` schema
/// (indicated by `r.` before the name), unless a comment says otherwise.
///
/// The triggers that keep `community_aggregates` in sync live here. Dropping the schema with
/// `CASCADE` also drops the triggers attached to tables in `public`.
const REPLACEABLE_SCHEMA: &[&str] = &[
  "BEGIN;",
  "DROP SCHEMA IF EXISTS r CASCADE;",
  "CREATE SCHEMA r;",
  include_str!("../replaceable_schema/triggers.sql"),
  "COMMIT;",
];

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
  revert: bool,
  force_replaceable_schema: bool,
}

impl Options {
  /// Undo every migration instead of running pending ones.
  pub fn revert(mut self) -> Self {
    self.revert = true;
    self
  }

  /// Reinstall the `r` schema even if no migration was pending.
  pub fn force_replaceable_schema(mut self) -> Self {
    self.force_replaceable_schema = true;
    self
  }
}

pub fn run(db_url: &str, options: Options) -> LemmyResult<()> {
  // Migrations don't support async connection
  let mut conn = PgConnection::establish(db_url)
    .with_lemmy_type(LemmyErrorType::CouldntConnectToDatabase)?;

  if options.revert {
    return revert(&mut conn);
  }

  info!("Running Database migrations (This may take a long time)...");
  let executed_migration_versions = conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| anyhow::anyhow!("Couldn't run DB Migrations: {e}"))
    .with_lemmy_type(LemmyErrorType::CouldntRunMigrations)?;
  info!(
    "Database migrations complete, {} applied.",
    executed_migration_versions.len()
  );

  // Replaceable schema (only run if at least 1 migration was run)
  if !executed_migration_versions.is_empty() || options.force_replaceable_schema {
    conn
      .batch_execute(&REPLACEABLE_SCHEMA.join("\n"))
      .context("Couldn't run SQL files in crates/db_schema/replaceable_schema")
      .with_lemmy_type(LemmyErrorType::CouldntRunMigrations)?;
    info!("Replaceable schema installed.");
  }

  Ok(())
}

fn revert(conn: &mut PgConnection) -> LemmyResult<()> {
  info!("Reverting all database migrations...");
  conn
    .batch_execute("DROP SCHEMA IF EXISTS r CASCADE;")
    .with_lemmy_type(LemmyErrorType::CouldntRunMigrations)?;
  conn
    .revert_all_migrations(MIGRATIONS)
    .map_err(|e| anyhow::anyhow!("Couldn't revert DB Migrations: {e}"))
    .with_lemmy_type(LemmyErrorType::CouldntRunMigrations)?;
  info!("Database migrations reverted.");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn options_builder() {
    let options = Options::default();
    assert!(!options.revert && !options.force_replaceable_schema);

    let options = options.force_replaceable_schema().revert();
    assert!(options.revert && options.force_replaceable_schema);
  }

  #[test]
  fn replaceable_schema_is_one_transaction() {
    let sql = REPLACEABLE_SCHEMA.join("\n");
    assert!(sql.starts_with("BEGIN;"));
    assert!(sql.trim_end().ends_with("COMMIT;"));
    assert!(sql.contains("AFTER INSERT OR DELETE ON community_follower"));
    assert!(sql.contains("EXECUTE FUNCTION r.community_aggregates_subscriber_count ()"));
    assert!(sql.contains("RAISE EXCEPTION 'community_aggregates row missing"));
  }

  #[tokio::test]
  #[serial_test::serial]
  async fn test_schema_setup_is_repeatable() -> LemmyResult<()> {
    let db_url = lemmy_utils::settings::SETTINGS.get_database_url();
    tokio::task::spawn_blocking(move || {
      run(&db_url, Options::default())?;
      // Nothing pending the second time, the triggers are reinstalled on request only
      run(&db_url, Options::default())?;
      run(&db_url, Options::default().force_replaceable_schema())
    })
    .await??;
    Ok(())
  }
}
