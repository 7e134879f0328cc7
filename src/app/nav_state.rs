//! Expansion state for the navbar panel and its accordion groups.
//!
//! Kept free of Dioxus so the toggle/reset rules can be tested directly;
//! the components hold these inside signals.

/// CSS class added to every element that follows an expansion flag
pub const EXPAND_CLASS: &str = "expand";

/// Top-level panel flag. Starts collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    expanded: bool,
}

impl PanelState {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Collapse after an item was activated
    pub fn collapse(&mut self) {
        self.expanded = false;
    }
}

/// Accordion group flag.
///
/// Remembers the last panel flag it saw; whenever the panel flag differs
/// from that, the group collapses. A group can therefore never stay open
/// across a panel collapse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupState {
    expanded: bool,
    seen_panel: bool,
}

impl GroupState {
    pub fn new(panel_expanded: bool) -> Self {
        Self {
            expanded: false,
            seen_panel: panel_expanded,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Feed the current panel flag. Returns true if the group was reset.
    pub fn observe_panel(&mut self, panel_expanded: bool) -> bool {
        if panel_expanded == self.seen_panel {
            return false;
        }
        self.seen_panel = panel_expanded;
        let was_expanded = self.expanded;
        self.expanded = false;
        was_expanded
    }
}

/// Join base classes, appending `expand` when `expanded` is set.
pub fn expand_classes(base: &[&str], expanded: bool) -> String {
    let mut classes: Vec<&str> = base.iter().copied().filter(|c| !c.is_empty()).collect();
    if expanded {
        classes.push(EXPAND_CLASS);
    }
    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_collapsed() {
        assert!(!PanelState::default().is_expanded());
    }

    #[test]
    fn test_panel_double_toggle_is_identity() {
        let mut panel = PanelState::default();
        panel.toggle();
        assert!(panel.is_expanded());
        panel.toggle();
        assert_eq!(panel, PanelState::default());

        let mut open = PanelState::default();
        open.toggle();
        let before = open;
        open.toggle();
        open.toggle();
        assert_eq!(open, before);
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let mut panel = PanelState::default();
        panel.collapse();
        assert!(!panel.is_expanded());
        panel.toggle();
        panel.collapse();
        panel.collapse();
        assert!(!panel.is_expanded());
    }

    #[test]
    fn test_group_resets_on_every_panel_change() {
        let mut panel = PanelState::default();
        let mut group = GroupState::new(panel.is_expanded());

        panel.toggle();
        group.observe_panel(panel.is_expanded());
        group.toggle();
        assert!(group.is_expanded());

        // Collapsing the panel closes the group
        panel.collapse();
        assert!(group.observe_panel(panel.is_expanded()));
        assert!(!group.is_expanded());

        // Re-opening the panel does not bring the group back
        panel.toggle();
        assert!(!group.observe_panel(panel.is_expanded()));
        assert!(!group.is_expanded());

        // Open group, then expand->collapse->expand: reset each time
        group.toggle();
        panel.toggle();
        group.observe_panel(panel.is_expanded());
        assert!(!group.is_expanded());
    }

    #[test]
    fn test_group_unaffected_when_panel_flag_unchanged() {
        let mut group = GroupState::new(true);
        group.toggle();
        assert!(!group.observe_panel(true));
        assert!(group.is_expanded());
    }

    #[test]
    fn test_expand_classes() {
        assert_eq!(expand_classes(&["nav-item", "nav-element"], false), "nav-item nav-element");
        assert_eq!(
            expand_classes(&["nav-item", "nav-element"], true),
            "nav-item nav-element expand"
        );
        assert_eq!(expand_classes(&["separator"], true), "separator expand");
        assert_eq!(expand_classes(&[], true), "expand");
        assert_eq!(expand_classes(&["", "navbar"], false), "navbar");
    }
}
