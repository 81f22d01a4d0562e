use std::fmt;

use crate::remote::{ErrorKind, RemoteError};

pub const MSG_NETWORK: &str = "Could not reach the server. Please try again.";
pub const MSG_ALREADY_OWNED: &str = "This Pokémon is already in your collection!";
pub const MSG_UNAUTHORIZED: &str = "You are not logged in (run `pokedeck login`).";

/// What a screen shows besides its data: a spinner, an error line, a notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub loading: bool,
    pub error: Option<String>,
    pub error_kind: Option<ErrorKind>,
    pub notice: Option<String>,
}

impl DisplayState {
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
        self.error_kind = None;
        self.notice = None;
    }

    pub fn succeed(&mut self, notice: Option<String>) {
        self.loading = false;
        self.notice = notice;
    }

    pub fn fail(&mut self, err: &RemoteError, not_found: &str) {
        self.loading = false;
        self.notice = None;
        self.error_kind = Some(err.kind());
        self.error = Some(user_message(err, not_found));
    }

    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.notice = None;
        self.error_kind = None;
        self.error = Some(message.into());
    }

    pub fn clear(&mut self) {
        *self = DisplayState::default();
    }

    pub fn is_conflict(&self) -> bool {
        self.error_kind == Some(ErrorKind::Conflict)
    }
}

/// Translates a remote failure into the line shown to the user.
/// `not_found` is the operation-specific text for a 404.
pub fn user_message(err: &RemoteError, not_found: &str) -> String {
    match err.kind() {
        ErrorKind::Network => MSG_NETWORK.to_string(),
        ErrorKind::NotFound => not_found.to_string(),
        ErrorKind::Conflict => MSG_ALREADY_OWNED.to_string(),
        ErrorKind::Unauthorized => MSG_UNAUTHORIZED.to_string(),
        ErrorKind::Rejected => err.to_string(),
    }
}

/// A mutating remote call that has been issued but not yet reconciled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingOp {
    Load,
    Delete(i64),
    ToggleFavorite(i64),
    Search(String),
    Add(i64),
    Trade(&'static str, i64),
    CreateTrade,
    AdminLoad(String),
}

impl fmt::Display for PendingOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingOp::Load => write!(f, "loading"),
            PendingOp::Delete(id) => write!(f, "deleting card {}", id),
            PendingOp::ToggleFavorite(id) => write!(f, "toggling favorite on card {}", id),
            PendingOp::Search(q) => write!(f, "searching '{}'", q),
            PendingOp::Add(id) => write!(f, "adding #{}", id),
            PendingOp::Trade(action, id) => write!(f, "{} trade {}", action, id),
            PendingOp::CreateTrade => write!(f, "creating trade"),
            PendingOp::AdminLoad(what) => write!(f, "loading {}", what),
        }
    }
}

/// In-flight guard. At most one operation per session may be outstanding;
/// a second request while one is pending is refused instead of issued twice.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    current: Option<PendingOp>,
}

impl InFlight {
    pub fn begin(&mut self, op: PendingOp) -> Result<(), SessionError> {
        if let Some(current) = &self.current {
            tracing::debug!(%current, refused = %op, "operation already in flight");
            return Err(SessionError::Busy(current.clone()));
        }
        self.current = Some(op);
        Ok(())
    }

    pub fn finish(&mut self) -> Option<PendingOp> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&PendingOp> {
        self.current.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }
}

/// Destructive operations only run with an explicit `Confirmed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        }
    }

    pub(crate) fn require(self) -> Result<(), SessionError> {
        match self {
            Confirmation::Confirmed => Ok(()),
            Confirmation::Declined => Err(SessionError::NotConfirmed),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("busy ({0} still in progress)")]
    Busy(PendingOp),

    #[error("cancelled (not confirmed)")]
    NotConfirmed,

    #[error("nothing staged (search for a Pokémon first)")]
    NothingStaged,

    #[error("enter a Pokémon name or number")]
    EmptyQuery,

    #[error("{0}")]
    Invalid(String),

    #[error("card {0} is not in the collection")]
    UnknownCard(i64),
}

impl SessionError {
    pub fn is_busy(&self) -> bool {
        matches!(self, SessionError::Busy(_))
    }

    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            SessionError::Remote(e) => Some(e),
            _ => None,
        }
    }
}
