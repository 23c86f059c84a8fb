use crate::{
    api::{Error, NewComment, PageInfo},
    EditFailurePolicy,
};

/// State of the box used to write a new comment
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ComposerState {
    draft: String,
    in_flight: bool,
    on_failure: EditFailurePolicy,
}

impl ComposerState {
    pub fn new(on_failure: EditFailurePolicy) -> ComposerState {
        ComposerState {
            draft: String::new(),
            in_flight: false,
            on_failure,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn update(&mut self, text: String) {
        self.draft = text;
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight && !self.draft.trim().is_empty()
    }

    pub fn submit(&mut self, page: &PageInfo) -> Option<NewComment> {
        if !self.can_submit() {
            return None;
        }
        self.in_flight = true;
        Some(NewComment {
            page_id: page.id,
            comment: self.draft.clone(),
        })
    }

    pub fn finish(&mut self, outcome: Result<(), Error>) {
        match outcome {
            Ok(()) => {
                self.in_flight = false;
                self.draft.clear();
            }
            Err(err) => match self.on_failure {
                EditFailurePolicy::Stall => {
                    tracing::warn!(%err, "comment creation failed, leaving submission pending")
                }
                EditFailurePolicy::Reset => {
                    tracing::warn!(%err, "comment creation failed, allowing resubmission");
                    self.in_flight = false;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PageId;

    #[test]
    fn blank_drafts_are_not_sent() {
        let mut c = ComposerState::default();
        assert_eq!(c.submit(&PageInfo { id: PageId(1) }), None);
        c.update(String::from("  \n "));
        assert_eq!(c.submit(&PageInfo { id: PageId(1) }), None);
        assert!(!c.in_flight());
    }

    #[test]
    fn success_clears_draft() {
        let mut c = ComposerState::default();
        c.update(String::from("looks good"));
        let req = c.submit(&PageInfo { id: PageId(1) }).unwrap();
        assert_eq!(req.comment, "looks good");
        assert_eq!(req.page_id, PageId(1));
        assert!(c.in_flight());
        assert_eq!(c.submit(&PageInfo { id: PageId(1) }), None);
        c.finish(Ok(()));
        assert_eq!(c.draft(), "");
        assert!(!c.in_flight());
    }

    #[test]
    fn failure_follows_policy() {
        let mut c = ComposerState::default();
        c.update(String::from("x"));
        c.submit(&PageInfo { id: PageId(1) }).unwrap();
        c.finish(Err(Error::PermissionDenied));
        assert!(c.in_flight());

        let mut c = ComposerState::new(EditFailurePolicy::Reset);
        c.update(String::from("x"));
        c.submit(&PageInfo { id: PageId(1) }).unwrap();
        c.finish(Err(Error::PermissionDenied));
        assert!(!c.in_flight());
        assert_eq!(c.draft(), "x");
    }
}
