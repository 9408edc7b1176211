use crate::content::GalleryItem;

/// Where a pointer event inside the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed layer behind the dialog, i.e. "outside".
    Backdrop,
    /// The dialog itself or anything nested in it.
    Content,
}

impl ClickTarget {
    /// Classifies a click on the backdrop element: only events whose target is
    /// the backdrop itself count as outside clicks, bubbled ones do not.
    pub fn classify(target_is_backdrop: bool) -> Self {
        if target_is_backdrop {
            Self::Backdrop
        } else {
            Self::Content
        }
    }
}

/// At most one project is open in the modal at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GallerySelection {
    selected: Option<&'static GalleryItem>,
}

impl GallerySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, item: &'static GalleryItem) {
        log::debug!("opening project {}", item.id);
        self.selected = Some(item);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn pointer(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.clear();
        }
    }

    pub fn selected(&self) -> Option<&'static GalleryItem> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_select_replaces_previous() {
        let mut sel = GallerySelection::new();
        assert!(!sel.is_open());
        sel.select(&PROJECTS[0]);
        sel.select(&PROJECTS[1]);
        assert_eq!(sel.selected().map(|p| p.id), Some(PROJECTS[1].id));
    }

    #[test]
    fn test_clear_after_select() {
        let mut sel = GallerySelection::new();
        sel.select(&PROJECTS[2]);
        sel.clear();
        assert!(sel.selected().is_none());
        // clearing an empty selection is a no-op
        sel.clear();
        assert!(!sel.is_open());
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let mut sel = GallerySelection::new();
        sel.select(&PROJECTS[0]);
        sel.pointer(ClickTarget::classify(false));
        assert_eq!(sel.selected().map(|p| p.id), Some(PROJECTS[0].id));
        sel.pointer(ClickTarget::classify(true));
        assert!(!sel.is_open());
    }
}
