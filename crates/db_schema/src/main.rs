use clap::Parser;
use lemmy_db_schema::schema_setup;
use lemmy_utils::{error::LemmyResult, init_logging, settings::SETTINGS};

/// Very minimal wrapper around `lemmy_db_schema::schema_setup::run` to allow running migrations
/// and installing the subscriber triggers without a running server.
#[derive(Parser, Debug)]
#[command(name = "lemmy_db_schema_setup")]
struct CmdArgs {
  /// Undo every migration and drop the subscriber triggers.
  #[arg(long)]
  revert: bool,
  /// Reinstall the subscriber triggers even when no migration was pending.
  #[arg(long)]
  force: bool,
}

impl CmdArgs {
  fn options(&self) -> schema_setup::Options {
    let mut options = schema_setup::Options::default();
    if self.revert {
      options = options.revert();
    }
    if self.force {
      options = options.force_replaceable_schema();
    }
    options
  }
}

fn main() -> LemmyResult<()> {
  init_logging();

  let args = CmdArgs::parse();

  schema_setup::run(&SETTINGS.get_database_url(), args.options())
}
