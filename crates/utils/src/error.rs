use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::Display;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum LemmyErrorType {
  NotFound,
  CouldntRunMigrations,
  CouldntConnectToDatabase,
  CouldntLoadSettings,
  Unknown(String),
}

pub type LemmyResult<T> = Result<T, LemmyError>;

pub struct LemmyError {
  pub error_type: LemmyErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for LemmyError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => LemmyErrorType::NotFound,
      _ => LemmyErrorType::Unknown(format!("{}", &cause)),
    };
    LemmyError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for LemmyError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LemmyError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for LemmyError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

pub trait LemmyErrorExt<T, E: Into<anyhow::Error>> {
  fn with_lemmy_type(self, error_type: LemmyErrorType) -> LemmyResult<T>;
}

impl<T, E: Into<anyhow::Error>> LemmyErrorExt<T, E> for Result<T, E> {
  fn with_lemmy_type(self, error_type: LemmyErrorType) -> LemmyResult<T> {
    self.map_err(|error| LemmyError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn serializes_without_message() -> LemmyResult<()> {
    let json = serde_json::to_string(&LemmyErrorType::CouldntRunMigrations)?;
    assert_eq!(&json, "{\"error\":\"couldnt_run_migrations\"}");

    Ok(())
  }

  #[test]
  fn serializes_with_message() -> LemmyResult<()> {
    let json = serde_json::to_string(&LemmyErrorType::Unknown(String::from("reason")))?;
    assert_eq!(&json, "{\"error\":\"unknown\",\"message\":\"reason\"}");

    Ok(())
  }

  #[test]
  fn test_convert_diesel_errors() {
    let not_found_error = LemmyError::from(diesel::NotFound);
    assert_eq!(LemmyErrorType::NotFound, not_found_error.error_type);

    let other_error = LemmyError::from(diesel::result::Error::NotInTransaction);
    assert!(matches!(other_error.error_type, LemmyErrorType::Unknown { .. }));
  }

  #[test]
  fn with_lemmy_type_replaces_error_type() {
    let res: Result<(), diesel::result::Error> = Err(diesel::result::Error::RollbackTransaction);
    let err = res
      .with_lemmy_type(LemmyErrorType::CouldntConnectToDatabase)
      .err();
    assert_eq!(
      Some(LemmyErrorType::CouldntConnectToDatabase),
      err.map(|e| e.error_type)
    );
  }
}
