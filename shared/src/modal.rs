use crate::view::ModalContent;

pub const ESCAPE_KEY: &str = "Escape";

/// Visibility of one modal. The DOM stores it as the presence of a `hidden` class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Things that can happen to a modal.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent {
    Open,
    CloseButton,
    OverlayClick,
    KeyDown(String),
}

impl ModalState {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Self::Closed
        } else {
            Self::Open
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Next state, or `None` when the event leaves the modal untouched.
    ///
    /// Every close trigger converges on `Closed`; closing a closed modal and
    /// keys other than Escape are no-ops.
    pub fn transition(self, event: &ModalEvent) -> Option<ModalState> {
        let next = match event {
            ModalEvent::Open => Self::Open,
            ModalEvent::CloseButton | ModalEvent::OverlayClick => Self::Closed,
            ModalEvent::KeyDown(key) if key == ESCAPE_KEY => Self::Closed,
            ModalEvent::KeyDown(_) => return None,
        };
        (next != self).then_some(next)
    }
}

/// What opening a modal does: show this content now, then fetch `fetch_id` if any.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPlan {
    pub content: ModalContent,
    pub fetch_id: Option<String>,
}

/// Opening the account modal always shows it; only a resolved id triggers a fetch.
pub fn plan_account_open(resolved_id: Option<String>) -> OpenPlan {
    match resolved_id {
        Some(id) => OpenPlan {
            content: ModalContent::account_loading(),
            fetch_id: Some(id),
        },
        None => OpenPlan {
            content: ModalContent::account_missing(),
            fetch_id: None,
        },
    }
}

/// A ledger row without an id is ignored entirely.
pub fn plan_ledger_open(ledger_id: Option<&str>) -> Option<OpenPlan> {
    let id = ledger_id.filter(|id| !id.is_empty())?;
    Some(OpenPlan {
        content: ModalContent::purchase_loading(),
        fetch_id: Some(id.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ACCOUNT_MISSING_MESSAGE, PURCHASE_LOADING_MESSAGE};

    fn escape() -> ModalEvent {
        ModalEvent::KeyDown(ESCAPE_KEY.to_string())
    }

    #[test]
    fn test_state_from_hidden_class() {
        assert_eq!(ModalState::from_hidden(true), ModalState::Closed);
        assert_eq!(ModalState::from_hidden(false), ModalState::Open);
        assert_eq!(ModalState::default(), ModalState::Closed);
    }

    #[test]
    fn test_open_from_closed() {
        assert_eq!(ModalState::Closed.transition(&ModalEvent::Open), Some(ModalState::Open));
        assert_eq!(ModalState::Open.transition(&ModalEvent::Open), None);
    }

    #[test]
    fn test_close_triggers_converge() {
        for event in [ModalEvent::CloseButton, ModalEvent::OverlayClick, escape()] {
            assert_eq!(ModalState::Open.transition(&event), Some(ModalState::Closed));
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        for event in [ModalEvent::CloseButton, ModalEvent::OverlayClick, escape()] {
            assert_eq!(ModalState::Closed.transition(&event), None);
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(ModalState::Open.transition(&ModalEvent::KeyDown("Enter".to_string())), None);
        assert_eq!(ModalState::Open.transition(&ModalEvent::KeyDown("Esc".to_string())), None);
    }

    #[test]
    fn test_account_open_without_id_skips_fetch() {
        let plan = plan_account_open(None);
        assert_eq!(plan.fetch_id, None);
        assert_eq!(plan.content, ModalContent::Notice(ACCOUNT_MISSING_MESSAGE.to_string()));
    }

    #[test]
    fn test_account_open_with_id_fetches() {
        let plan = plan_account_open(Some("17".to_string()));
        assert_eq!(plan.fetch_id.as_deref(), Some("17"));
        assert_eq!(plan.content, ModalContent::account_loading());
    }

    #[test]
    fn test_ledger_open() {
        assert_eq!(plan_ledger_open(None), None);
        assert_eq!(plan_ledger_open(Some("")), None);

        let plan = plan_ledger_open(Some("5")).unwrap();
        assert_eq!(plan.fetch_id.as_deref(), Some("5"));
        assert_eq!(plan.content, ModalContent::Loading(PURCHASE_LOADING_MESSAGE.to_string()));
    }
}
