//! Check-then-write update flow
//!
//! Renaming a book or changing a customer's email first asks the service
//! whether the new key is taken, and only writes when it is not:
//!
//! ```text
//! Checking --exists--> Aborted
//! Checking --free----> Writing --ok----> Done
//!     |                   \--error--> Failed
//!     \--error--> Failed
//! ```
//!
//! Without a new key the flow starts directly in `Writing`. The check is best
//! effort: another client can take the key between the two requests, and the
//! service has the final word.

use std::future::Future;

use crate::{
    error::{AppError, AppResult},
    models::{ExistsResponse, MessageResponse},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStage {
    Checking,
    Writing,
    Aborted,
    Done,
    Failed,
}

/// What can happen to an in-flight update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateEvent {
    /// The existence check found the new key already in use
    KeyTaken,
    /// The existence check found the new key free
    KeyFree,
    /// The write was accepted
    Written,
    /// A request failed
    RequestFailed,
}

impl UpdateStage {
    pub fn start(has_new_key: bool) -> Self {
        if has_new_key {
            UpdateStage::Checking
        } else {
            UpdateStage::Writing
        }
    }

    /// Next stage. Events that do not apply to the current stage leave it unchanged.
    pub fn next(self, event: UpdateEvent) -> Self {
        match (self, event) {
            (UpdateStage::Checking, UpdateEvent::KeyTaken) => UpdateStage::Aborted,
            (UpdateStage::Checking, UpdateEvent::KeyFree) => UpdateStage::Writing,
            (UpdateStage::Writing, UpdateEvent::Written) => UpdateStage::Done,
            (UpdateStage::Checking | UpdateStage::Writing, UpdateEvent::RequestFailed) => {
                UpdateStage::Failed
            }
            (stage, _) => stage,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            UpdateStage::Aborted | UpdateStage::Done | UpdateStage::Failed
        )
    }
}

/// How an update ended
#[derive(Debug)]
pub enum UpdateEnd {
    /// The new key is taken; nothing was written
    Aborted,
    Done(MessageResponse),
    Failed(AppError),
}

/// Result of one update, with every stage it passed through
#[derive(Debug)]
pub struct UpdateRun {
    pub trail: Vec<UpdateStage>,
    pub end: UpdateEnd,
}

/// Drive an update: await `check` if there is one, and only call `write`
/// when the flow reaches `Writing`.
pub async fn run<C, W, WF>(check: Option<C>, write: W) -> UpdateRun
where
    C: Future<Output = AppResult<ExistsResponse>>,
    W: FnOnce() -> WF,
    WF: Future<Output = AppResult<MessageResponse>>,
{
    let mut stage = UpdateStage::start(check.is_some());
    let mut trail = vec![stage];

    if let Some(check) = check {
        match check.await {
            Ok(answer) => {
                let event = if answer.exists {
                    UpdateEvent::KeyTaken
                } else {
                    UpdateEvent::KeyFree
                };
                stage = stage.next(event);
                trail.push(stage);
            }
            Err(e) => {
                trail.push(stage.next(UpdateEvent::RequestFailed));
                return UpdateRun {
                    trail,
                    end: UpdateEnd::Failed(e),
                };
            }
        }
    }

    if stage == UpdateStage::Aborted {
        return UpdateRun {
            trail,
            end: UpdateEnd::Aborted,
        };
    }

    let end = match write().await {
        Ok(response) => {
            trail.push(stage.next(UpdateEvent::Written));
            UpdateEnd::Done(response)
        }
        Err(e) => {
            trail.push(stage.next(UpdateEvent::RequestFailed));
            UpdateEnd::Failed(e)
        }
    };

    UpdateRun { trail, end }
}
