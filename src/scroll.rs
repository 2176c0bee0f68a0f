//! Cursor state for scroll (exhaustive) pagination.
//!
//! Scrolling sweeps a whole catalog area page by page: the first request
//! carries no page token, every response carries the token for the next
//! request, and an empty token means the sweep is complete. The server keeps
//! the cursor alive for roughly two minutes of inactivity; presenting an
//! expired token silently restarts the sweep at the first page rather than
//! failing, so slow consumers see a restart, not an error.
//!
//! [`ScrollCursor`] tracks the client side of that protocol: the token to
//! send next and whether iteration has finished. It also remembers every
//! token already seen, because a repeated token can only loop forever; on
//! repetition the cursor aborts with [`ScrollError::RepeatedToken`] instead
//! of iterating again.
//!
//! This type is driven by
//! [`ScrollProductsRequest::next_page`](crate::resources::products::ScrollProductsRequest::next_page);
//! it is public for callers who thread tokens by hand.
//!
//! # Example
//!
//! ```rust
//! use meplato_store::ScrollCursor;
//!
//! let mut cursor = ScrollCursor::new();
//! assert_eq!(cursor.page_token(), None); // first request: no token
//!
//! cursor.advance("T1").unwrap();
//! assert_eq!(cursor.page_token(), Some("T1"));
//!
//! cursor.advance("").unwrap(); // empty token: sweep complete
//! assert!(cursor.is_done());
//! ```

use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by the scroll protocol itself, as opposed to the transport
/// or the service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrollError {
    /// The server returned a page token that was already consumed in this
    /// sweep. Continuing would revisit pages forever.
    #[error("Scroll returned the already-seen page token '{token}'; aborting iteration")]
    RepeatedToken {
        /// The repeated token.
        token: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// No request issued yet; the first request carries no token.
    Start,
    /// Mid-sweep; the contained token goes into the next request verbatim.
    InProgress(String),
    /// The sweep is complete (or was aborted).
    Done,
}

/// Client-side scroll cursor: the token to send next and the tokens already
/// seen.
///
/// The cursor holds no server-side state; it only relays tokens verbatim.
/// Whether the sweep is exhaustive and stable under concurrent writes is the
/// server's guarantee.
#[derive(Debug, Clone)]
pub struct ScrollCursor {
    state: State,
    seen: HashSet<String>,
}

impl ScrollCursor {
    /// Creates a cursor positioned before the first page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Start,
            seen: HashSet::new(),
        }
    }

    /// Creates a cursor resuming from a previously obtained token.
    ///
    /// An empty token means the sweep was already complete.
    #[must_use]
    pub fn starting_at(token: impl Into<String>) -> Self {
        let token = token.into();
        let mut cursor = Self::new();
        if token.is_empty() {
            cursor.state = State::Done;
        } else {
            cursor.seen.insert(token.clone());
            cursor.state = State::InProgress(token);
        }
        cursor
    }

    /// Returns the token for the next request, or `None` before the first
    /// page and after the sweep has finished.
    #[must_use]
    pub fn page_token(&self) -> Option<&str> {
        match &self.state {
            State::InProgress(token) => Some(token),
            State::Start | State::Done => None,
        }
    }

    /// Returns `true` once the sweep has terminated.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// Feeds the token from the latest response into the cursor.
    ///
    /// An empty token terminates the sweep. Advancing a finished cursor is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollError::RepeatedToken`] when the token was already
    /// consumed in this sweep; the cursor terminates so that a retry loop
    /// cannot spin.
    pub fn advance(&mut self, next_token: &str) -> Result<(), ScrollError> {
        if self.is_done() {
            return Ok(());
        }
        if next_token.is_empty() {
            self.state = State::Done;
            return Ok(());
        }
        if !self.seen.insert(next_token.to_string()) {
            self.state = State::Done;
            return Err(ScrollError::RepeatedToken {
                token: next_token.to_string(),
            });
        }
        self.state = State::InProgress(next_token.to_string());
        Ok(())
    }
}

impl Default for ScrollCursor {
    fn default() -> Self {
        Self::new()
    }
}
