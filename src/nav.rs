//! Page navigation state: which section is active, whether the mobile menu is
//! open, and whether a section has been revealed yet.
//!
//! This is plain state with no DOM access. Viewport observation arrives as
//! [`Intersection`] events, and scrolling goes through the [`Scroller`]
//! capability, so the browser can be swapped for a fake in tests.

use crate::content::{NavLink, NAV_LINKS};
use crate::motion::{Easing, Pose, Transition, Tween};

/// Root margin for the active-section observer: a zero-height line across
/// the vertical middle of the viewport.
pub const CENTER_BAND_MARGIN: &str = "-50% 0px -50% 0px";

/// Visible fraction of a section that triggers its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Visible fraction for elements that follow visibility both ways: any part
/// on screen counts.
pub const IN_VIEW_THRESHOLD: f64 = 0.0;

/// One visibility change reported by the viewport observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub id: &'static str,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn entering(id: &'static str) -> Self {
        Self {
            id,
            is_intersecting: true,
            ratio: 1.0,
        }
    }

    pub fn leaving(id: &'static str) -> Self {
        Self {
            id,
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Smooth scrolling to a named landmark.
pub trait Scroller {
    /// Start scrolling so the landmark ends up in view. Returns false when no
    /// landmark has that id.
    fn scroll_to(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    links: &'static [NavLink],
    active: &'static str,
    menu_open: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(&NAV_LINKS)
    }
}

impl Navigator {
    pub fn new(links: &'static [NavLink]) -> Self {
        Self {
            links,
            active: links.first().map(|l| l.id).unwrap_or_default(),
            menu_open: false,
        }
    }

    pub fn links(&self) -> &'static [NavLink] {
        self.links
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    /// True once the page has moved past the first section.
    pub fn is_scrolled(&self) -> bool {
        self.links.first().is_some_and(|l| l.id != self.active)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    fn known(&self, id: &str) -> Option<&'static str> {
        self.links.iter().find(|l| l.id == id).map(|l| l.id)
    }

    /// Apply one center-band observation. Returns true if the active
    /// section changed.
    pub fn observe(&mut self, entry: Intersection) -> bool {
        if !entry.is_intersecting {
            return false;
        }
        match self.known(entry.id) {
            Some(id) if id != self.active => {
                self.active = id;
                true
            }
            _ => false,
        }
    }

    /// Apply a batch of observations in delivery order; the last intersecting
    /// one wins.
    pub fn observe_all<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = Intersection>,
    {
        entries
            .into_iter()
            .fold(false, |changed, e| self.observe(e) || changed)
    }

    /// A nav link was clicked: close the menu and scroll to the section.
    /// Returns false if the landmark is missing; nothing else changes then.
    pub fn activate<S: Scroller + ?Sized>(&mut self, id: &str, scroller: &S) -> bool {
        self.close_menu();
        let Some(id) = self.known(id) else {
            return false;
        };
        if !scroller.scroll_to(id) {
            return false;
        }
        self.active = id;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Reveal on first entry and stay revealed.
    #[default]
    Once,
    /// Follow visibility both ways.
    WhileInView,
}

impl RevealMode {
    pub fn threshold(self) -> f64 {
        match self {
            RevealMode::Once => REVEAL_THRESHOLD,
            RevealMode::WhileInView => IN_VIEW_THRESHOLD,
        }
    }
}

/// Entrance state of one element, driven by its visibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    mode: RevealMode,
    tween: Tween,
    shown: bool,
    /// Clock time of the last flip, None until the first one.
    since: Option<f64>,
}

impl Reveal {
    pub fn new(mode: RevealMode, tween: Tween) -> Self {
        Self {
            mode,
            tween,
            shown: false,
            since: None,
        }
    }

    /// Standard section entrance: fade in while rising 50px.
    pub fn section() -> Self {
        Self::new(
            RevealMode::Once,
            Tween::new(
                Pose::hidden().offset_y(50.0),
                Pose::REST,
                Transition::new(0.8).ease(Easing::EaseOut),
            ),
        )
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Visible fraction at which this element counts as in view.
    pub fn threshold(&self) -> f64 {
        self.mode.threshold()
    }

    /// Feed a visibility change seen at clock time `now`. Returns true if the
    /// state flipped.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, now: f64) -> bool {
        let visible = is_intersecting && ratio >= self.threshold();
        let next = match self.mode {
            RevealMode::Once => self.shown || visible,
            RevealMode::WhileInView => visible,
        };
        if next == self.shown {
            return false;
        }
        self.shown = next;
        self.since = Some(now);
        true
    }

    pub fn pose(&self, now: f64) -> Pose {
        let Some(since) = self.since else {
            return self.tween.from;
        };
        let p = self.tween.at(now - since);
        if self.shown {
            p
        } else {
            // run the same curve backwards
            Tween::new(self.tween.to, self.tween.from, self.tween.transition).at(now - since)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A page of stacked sections and a scroll position. Sections are
    /// (id, top, height) in document px.
    struct FakeViewport {
        sections: Vec<(&'static str, f64, f64)>,
        height: f64,
        scroll_y: RefCell<f64>,
        scroll_calls: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn new(ids: &[&'static str], section_height: f64, height: f64) -> Self {
            let sections = ids
                .iter()
                .enumerate()
                .map(|(i, id)| (*id, i as f64 * section_height, section_height))
                .collect();
            Self {
                sections,
                height,
                scroll_y: RefCell::new(0.0),
                scroll_calls: RefCell::new(Vec::new()),
            }
        }

        fn center(&self) -> f64 {
            *self.scroll_y.borrow() + self.height / 2.0
        }

        fn set_scroll(&self, y: f64) {
            *self.scroll_y.borrow_mut() = y;
        }

        /// What a center-band observer reports for the current scroll.
        fn center_band_entries(&self) -> Vec<Intersection> {
            let c = self.center();
            self.sections
                .iter()
                .map(|&(id, top, h)| {
                    if top <= c && c < top + h {
                        Intersection::entering(id)
                    } else {
                        Intersection::leaving(id)
                    }
                })
                .collect()
        }

        fn in_center_band(&self, id: &str) -> bool {
            let c = self.center();
            self.sections
                .iter()
                .any(|&(sid, top, h)| sid == id && top <= c && c < top + h)
        }
    }

    /// `scroll-mt-16` on every section, clearing the fixed nav bar.
    const SCROLL_MARGIN: f64 = 64.0;

    impl Scroller for FakeViewport {
        fn scroll_to(&self, id: &str) -> bool {
            self.scroll_calls.borrow_mut().push(id.to_string());
            match self.sections.iter().find(|(sid, _, _)| *sid == id) {
                Some(&(_, top, _)) => {
                    // scrollIntoView({ block: "start" }), clamped at the top
                    self.set_scroll((top - SCROLL_MARGIN).max(0.0));
                    true
                }
                None => false,
            }
        }
    }

    fn full_page() -> FakeViewport {
        FakeViewport::new(
            &["home", "about", "skills", "projects", "contact"],
            900.0,
            800.0,
        )
    }

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::default();
        assert_eq!(nav.active(), "home");
        assert!(!nav.menu_open());
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_activate_every_link() {
        let page = full_page();
        let mut nav = Navigator::default();
        for link in NAV_LINKS.iter() {
            assert!(nav.activate(link.id, &page));
            assert_eq!(nav.active(), link.id);
            assert!(page.in_center_band(link.id));
            // once the scroll settles the observer agrees
            assert!(!nav.observe_all(page.center_band_entries()));
            assert_eq!(nav.active(), link.id);
            let active = nav
                .links()
                .iter()
                .filter(|l| nav.is_active(l.id))
                .map(|l| l.id)
                .collect::<Vec<_>>();
            assert_eq!(active, vec![link.id]);
        }
        assert_eq!(page.scroll_calls.borrow().len(), NAV_LINKS.len());
    }

    #[test]
    fn test_scrolling_to_skills() {
        let page = full_page();
        let mut nav = Navigator::default();
        // skills spans 1800..2700, so a center of 2000 lands inside it
        page.set_scroll(1600.0);
        assert!(nav.observe_all(page.center_band_entries()));
        assert_eq!(nav.active(), "skills");
        assert!(nav.is_active("skills"));
        assert!(!nav.is_active("about"));
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_last_write_wins() {
        let mut nav = Navigator::default();
        nav.observe_all([
            Intersection::entering("about"),
            Intersection::leaving("home"),
            Intersection::entering("projects"),
        ]);
        assert_eq!(nav.active(), "projects");
    }

    #[test]
    fn test_leaving_and_unknown_ignored() {
        let mut nav = Navigator::default();
        assert!(!nav.observe(Intersection::leaving("about")));
        assert!(!nav.observe(Intersection::entering("blog")));
        assert_eq!(nav.active(), "home");
        // re-entering the active section is not a change
        assert!(!nav.observe(Intersection::entering("home")));
    }

    #[test]
    fn test_missing_landmark_is_noop() {
        let page = FakeViewport::new(&["home", "about"], 900.0, 800.0);
        let mut nav = Navigator::default();
        nav.toggle_menu();
        assert!(!nav.activate("contact", &page));
        assert_eq!(nav.active(), "home");
        assert_eq!(*page.scroll_y.borrow(), 0.0);
        // unknown ids never reach the scroller
        assert!(!nav.activate("nowhere", &page));
        assert_eq!(page.scroll_calls.borrow().as_slice(), ["contact"]);
    }

    #[test]
    fn test_menu_toggle_pairs() {
        let mut nav = Navigator::default();
        let before = nav.menu_open();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert_eq!(nav.menu_open(), before);
    }

    #[test]
    fn test_link_closes_menu() {
        let page = full_page();
        let mut nav = Navigator::default();
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.activate("projects", &page);
        assert!(!nav.menu_open());

        // closing is unconditional, even when the target is missing
        nav.toggle_menu();
        nav.activate("nowhere", &page);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_reveal_once() {
        let mut r = Reveal::section();
        assert_eq!(r.pose(0.0), Pose::hidden().offset_y(50.0));

        // not enough of the section is visible yet
        assert!(!r.observe(true, 0.1, 1.0));
        assert!(!r.is_shown());

        assert!(r.observe(true, 0.25, 2.0));
        assert!(r.is_shown());
        assert_eq!(r.pose(2.0), Pose::hidden().offset_y(50.0));
        let mid = r.pose(2.4);
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert_eq!(r.pose(2.8), Pose::REST);

        // leaving and coming back changes nothing
        assert!(!r.observe(false, 0.0, 5.0));
        assert!(!r.observe(true, 0.9, 6.0));
        assert!(r.is_shown());
        assert_eq!(r.pose(6.1), Pose::REST);
        assert_eq!(r.pose(100.0), Pose::REST);
    }

    #[test]
    fn test_reveal_while_in_view() {
        let tween = Tween::new(
            Pose::hidden().offset_y(40.0),
            Pose::REST,
            Transition::new(0.6).ease(Easing::EaseOut),
        );
        let mut r = Reveal::new(RevealMode::WhileInView, tween);
        assert!(r.observe(true, 0.5, 0.0));
        assert_eq!(r.pose(1.0), Pose::REST);
        assert!(r.observe(false, 0.0, 1.0));
        assert!(!r.is_shown());
        assert_eq!(r.pose(2.0), Pose::hidden().offset_y(40.0));
        assert!(r.observe(true, 0.3, 3.0));
        assert_eq!(r.pose(4.0), Pose::REST);
    }

    #[test]
    fn test_in_view_card_shows_on_any_overlap() {
        let tween = Tween::new(
            Pose::hidden().offset_y(40.0),
            Pose::REST,
            Transition::new(0.6).ease(Easing::EaseOut),
        );
        let mut card = Reveal::new(RevealMode::WhileInView, tween);
        assert_eq!(card.threshold(), 0.0);

        assert!(card.observe(true, 0.1, 0.0));
        assert!(card.is_shown());
        // scrolling away, still partly on screen
        assert!(!card.observe(true, 0.15, 2.0));
        assert!(card.is_shown());
        assert!(card.observe(false, 0.0, 3.0));
        assert!(!card.is_shown());

        // sections still wait for a fifth of themselves
        assert_eq!(Reveal::section().threshold(), REVEAL_THRESHOLD);
    }
}
