use crate::{
    api::{Comment, CommentId, EditComment, Error, PageInfo},
    EditFailurePolicy,
};

/// The single edit slot of a comment list: at most one comment is edited
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum EditSlot {
    #[default]
    Idle,
    Editing {
        comment_id: CommentId,
        draft: String,
    },
}

impl EditSlot {
    pub fn target(&self) -> Option<CommentId> {
        match self {
            EditSlot::Idle => None,
            EditSlot::Editing { comment_id, .. } => Some(*comment_id),
        }
    }

    /// The draft buffer, empty when nothing is being edited
    pub fn draft(&self) -> &str {
        match self {
            EditSlot::Idle => "",
            EditSlot::Editing { draft, .. } => draft,
        }
    }

    pub fn is_editing(&self, id: CommentId) -> bool {
        self.target() == Some(id)
    }
}

/// Local transient state of a comment list
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentListState {
    slot: EditSlot,
    in_flight: bool,
    on_failure: EditFailurePolicy,
}

impl CommentListState {
    pub fn new(on_failure: EditFailurePolicy) -> CommentListState {
        CommentListState {
            slot: EditSlot::Idle,
            in_flight: false,
            on_failure,
        }
    }

    pub fn slot(&self) -> &EditSlot {
        &self.slot
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start editing `comment`, seeding the draft with its current text.
    ///
    /// Any other draft in progress is dropped without being saved.
    pub fn enter_edit(&mut self, comment: &Comment) {
        if let EditSlot::Editing { comment_id, draft } = &self.slot {
            if *comment_id != comment.id {
                tracing::debug!(
                    dropped = ?comment_id,
                    draft_len = draft.len(),
                    "switching edit target, discarding draft"
                );
            }
        }
        self.slot = EditSlot::Editing {
            comment_id: comment.id,
            draft: comment.comment.clone(),
        };
    }

    pub fn update_draft(&mut self, text: String) {
        match &mut self.slot {
            EditSlot::Idle => tracing::trace!("ignoring draft update with no comment being edited"),
            EditSlot::Editing { draft, .. } => *draft = text,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.slot = EditSlot::Idle;
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.slot.draft().is_empty()
    }

    /// Mark the edit of `comment` as in flight and return the request to send.
    ///
    /// Returns `None` and leaves the state untouched if `comment` is not being
    /// edited, if the draft is empty or if a submission is already in flight.
    pub fn submit_edit(
        &mut self,
        comment: &Comment,
        page: &PageInfo,
    ) -> Option<(CommentId, EditComment)> {
        if !self.slot.is_editing(comment.id) || !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        Some((
            comment.id,
            EditComment {
                page_id: page.id,
                comment: self.slot.draft().to_string(),
                object_version_number: comment.object_version_number,
            },
        ))
    }

    /// Record the outcome of the submission started by `submit_edit`
    pub fn finish_submit(&mut self, outcome: Result<(), Error>) {
        match outcome {
            Ok(()) => {
                self.in_flight = false;
                self.cancel_edit();
            }
            Err(err) => match self.on_failure {
                EditFailurePolicy::Stall => {
                    tracing::warn!(%err, "comment edit failed, leaving submission pending")
                }
                EditFailurePolicy::Reset => {
                    tracing::warn!(%err, "comment edit failed, allowing resubmission");
                    self.in_flight = false;
                }
            },
        }
    }
}
