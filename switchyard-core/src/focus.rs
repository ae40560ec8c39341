//! Tab focus transfer.

use switchyard_types::FileId;

/// The tab being closed is not in the pane it was closed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    ClosingTabNotFound(FileId),
}

impl std::fmt::Display for FocusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClosingTabNotFound(id) => write!(f, "closing tab {} is not in the pane", id),
        }
    }
}

impl std::error::Error for FocusError {}

/// Decide which tab should hold focus once `closing` is removed from `tab_ids`.
///
/// Closing a background tab keeps the current focus. Closing the focused tab moves
/// focus to the tab after it, or the tab before it when it was last. Returns
/// `Ok(None)` when the pane will be empty.
pub fn resolve_focus<'a>(
    tab_ids: &'a [FileId],
    focused: Option<&FileId>,
    closing: &FileId,
) -> Result<Option<&'a FileId>, FocusError> {
    let index = tab_ids
        .iter()
        .position(|id| id == closing)
        .ok_or_else(|| FocusError::ClosingTabNotFound(closing.clone()))?;

    if let Some(focused) = focused.filter(|f| *f != closing) {
        if let Some(kept) = tab_ids.iter().find(|id| *id == focused) {
            return Ok(Some(kept));
        }
    }

    let next = tab_ids
        .get(index + 1)
        .or_else(|| index.checked_sub(1).and_then(|prev| tab_ids.get(prev)));
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(ids: &[&str]) -> Vec<FileId> {
        ids.iter().map(|id| FileId::from(*id)).collect()
    }

    fn resolve<'a>(tab_ids: &'a [FileId], id: &str) -> Option<&'a str> {
        let id = FileId::from(id);
        resolve_focus(tab_ids, Some(&id), &id).unwrap().map(FileId::as_str)
    }

    #[test]
    fn prefers_following_tab() {
        let t = tabs(&["a", "b", "c"]);
        assert_eq!(resolve(&t, "a"), Some("b"));
        assert_eq!(resolve(&t, "b"), Some("c"));
    }

    #[test]
    fn falls_back_to_preceding_tab_when_last() {
        let t = tabs(&["a", "b", "c"]);
        assert_eq!(resolve(&t, "c"), Some("b"));
    }

    #[test]
    fn only_tab_leaves_nothing() {
        let t = tabs(&["a"]);
        assert_eq!(resolve(&t, "a"), None);
    }

    #[test]
    fn closing_unknown_tab_is_an_error() {
        let t = tabs(&["a", "b"]);
        let ghost = FileId::from("z");
        assert_eq!(
            resolve_focus(&t, Some(&ghost), &ghost),
            Err(FocusError::ClosingTabNotFound(ghost.clone()))
        );
        let empty: Vec<FileId> = Vec::new();
        assert!(resolve_focus(&empty, None, &ghost).is_err());
    }

    #[test]
    fn closing_background_tab_keeps_focus() {
        let t = tabs(&["a", "b", "c"]);
        let focused = FileId::from("c");
        let next = resolve_focus(&t, Some(&focused), &FileId::from("a")).unwrap();
        assert_eq!(next, Some(&focused));
    }

    #[test]
    fn no_focus_uses_neighbour_of_closing_tab() {
        let t = tabs(&["a", "b"]);
        let next = resolve_focus(&t, None, &FileId::from("b")).unwrap();
        assert_eq!(next.map(FileId::as_str), Some("a"));
    }

    #[test]
    fn successor_else_predecessor_for_every_position() {
        for len in 1..=6 {
            let names: Vec<String> = (0..len).map(|i| format!("t{}", i)).collect();
            let t: Vec<FileId> = names.iter().map(|n| FileId::new(n.clone())).collect();
            for (i, closing) in t.iter().enumerate() {
                let got = resolve_focus(&t, Some(closing), closing).unwrap();
                let expected = if i + 1 < len {
                    Some(&t[i + 1])
                } else if i > 0 {
                    Some(&t[i - 1])
                } else {
                    None
                };
                assert_eq!(got, expected, "len {} closing index {}", len, i);
            }
        }
    }
}
