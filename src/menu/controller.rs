//! Open/closed state of the dropdowns and the mobile panel.

use egui::{Id, Pos2};
use enum_map::EnumMap;

use crate::error::Result;
use crate::menu::items::{DropdownKey, Surface};
use crate::menu::observer::{ObserverClaim, PointerHub};
use crate::menu::registry::{Region, RegionHandle, RegionRegistry};

/// Interaction state of a navigation bar.
///
/// Holds the open flag of each dropdown, the mobile panel flag, every mounted
/// region, and the outside-click observer. The observer is attached exactly
/// while at least one dropdown is open and is released when the controller is
/// dropped.
#[derive(Debug)]
pub struct MenuController {
    open: EnumMap<DropdownKey, bool>,
    panel_open: bool,
    regions: RegionRegistry,
    observer: ObserverClaim,
}

impl MenuController {
    /// Create a controller with its own private observer hub.
    pub fn new(owner: Id) -> Self {
        Self::from_claim(ObserverClaim::standalone(owner))
    }

    /// Create a controller whose observer lives in a shared `hub`.
    ///
    /// Fails if `owner` already has a controller registered in that hub.
    pub fn with_hub(owner: Id, hub: &PointerHub) -> Result<Self> {
        Ok(Self::from_claim(hub.claim(owner)?))
    }

    fn from_claim(observer: ObserverClaim) -> Self {
        Self {
            open: EnumMap::default(),
            panel_open: false,
            regions: RegionRegistry::new(),
            observer,
        }
    }

    /// Id of the navigation bar this controller belongs to.
    pub fn owner(&self) -> Id {
        self.observer.owner()
    }

    /// Whether the dropdown `key` is open.
    pub fn is_open(&self, key: DropdownKey) -> bool {
        self.open[key]
    }

    /// Value of the `expanded` accessibility state for the triggers of `key`.
    pub fn expanded(&self, key: DropdownKey) -> bool {
        self.is_open(key)
    }

    /// Whether at least one dropdown is open.
    pub fn any_open(&self) -> bool {
        self.open.values().any(|open| *open)
    }

    /// Whether the mobile panel is open.
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Whether the outside-click observer is listening.
    pub fn is_observer_attached(&self) -> bool {
        self.observer.is_attached()
    }

    /// Regions mounted for hit-testing.
    pub fn regions(&self) -> &RegionRegistry {
        &self.regions
    }

    /// Click on a trigger, desktop or mobile.
    pub fn toggle_dropdown(&mut self, key: DropdownKey) {
        self.set_open(key, !self.open[key]);
    }

    /// Hover-enter on the desktop trigger.
    pub fn open_dropdown(&mut self, key: DropdownKey) {
        self.set_open(key, true);
    }

    /// Hover-leave on the desktop trigger.
    pub fn close_dropdown(&mut self, key: DropdownKey) {
        self.set_open(key, false);
    }

    /// Flip the mobile panel.
    ///
    /// Closing unmounts the panel and every mobile submenu region. Dropdown
    /// flags are left as they are, so a submenu expanded before closing is
    /// still expanded when the panel comes back.
    pub fn toggle_mobile_panel(&mut self) {
        self.panel_open = !self.panel_open;
        if !self.panel_open {
            self.regions.set_panel(None);
            let unmounted = self.regions.deregister_surface(Surface::Mobile);
            log::debug!(
                "mobile panel closed, unmounted {unmounted} submenu region(s) on {:?}",
                self.owner()
            );
        } else {
            log::debug!("mobile panel opened on {:?}", self.owner());
        }
    }

    /// Mount or refresh the region of one surface of `key`.
    ///
    /// # Arguments
    /// * `key` - The dropdown the region belongs to
    /// * `handle` - Identifies the surface; registering it again replaces the region
    /// * `region` - Screen area the surface occupies
    pub fn register_region(&mut self, key: DropdownKey, handle: RegionHandle, region: Region) {
        self.regions.register(key, handle, region);
    }

    /// Unmount one surface of `key`. Returns whether it was mounted.
    pub fn deregister_region(&mut self, key: DropdownKey, handle: RegionHandle) -> bool {
        self.regions.deregister(key, handle)
    }

    /// Record where the panel is drawn. Ignored while the panel is closed.
    pub fn mount_panel(&mut self, region: Region) {
        if self.panel_open {
            self.regions.set_panel(Some(region));
        } else {
            log::trace!("ignoring panel mount while closed on {:?}", self.owner());
        }
    }

    /// Forget where the panel is drawn without closing it.
    pub fn unmount_panel(&mut self) {
        self.regions.set_panel(None);
    }

    pub(crate) fn regions_mut(&mut self) -> &mut RegionRegistry {
        &mut self.regions
    }

    /// Run outside-click dismissal for a pointer press at `target`.
    ///
    /// Presses inside the open panel never dismiss anything. Otherwise each
    /// open dropdown closes when `target` misses all of its regions. Returns
    /// the dropdowns that were closed.
    pub fn handle_pointer_down(&mut self, target: Pos2) -> Vec<DropdownKey> {
        if !self.observer.is_attached() {
            return Vec::new();
        }
        if self.regions.panel_contains(target) {
            log::trace!("press at {target:?} inside mobile panel, nothing dismissed");
            return Vec::new();
        }

        // Decide for every key before mutating so one dismissal cannot
        // influence the other.
        let outside: Vec<DropdownKey> = DropdownKey::ALL
            .into_iter()
            .filter(|key| self.open[*key] && !self.regions.contains(*key, target))
            .collect();
        for key in &outside {
            log::trace!("press at {target:?} outside {key}");
            self.set_open(*key, false);
        }
        outside
    }

    fn set_open(&mut self, key: DropdownKey, open: bool) {
        if self.open[key] != open {
            self.open[key] = open;
            log::debug!(
                "{key} {} on {:?}",
                if open { "opened" } else { "closed" },
                self.owner()
            );
        }
        self.sync_observer();
    }

    fn sync_observer(&mut self) {
        if self.any_open() {
            if self.observer.attach() {
                log::debug!("outside-click observer attached for {:?}", self.owner());
            }
        } else if self.observer.detach() {
            log::debug!("outside-click observer detached for {:?}", self.owner());
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::{Rect, Vec2, pos2};

    use super::*;
    use crate::error::NavError;

    const A: DropdownKey = DropdownKey::TourPackage;
    const B: DropdownKey = DropdownKey::TourByDuration;

    fn square(x: f32, y: f32) -> Region {
        Region::from_rect(Rect::from_min_size(pos2(x, y), Vec2::splat(10.0)))
    }

    fn handle(name: &str, surface: Surface) -> RegionHandle {
        RegionHandle::new(Id::new(name), surface)
    }

    fn controller() -> MenuController {
        MenuController::new(Id::new("nav"))
    }

    #[test]
    fn starts_fully_closed() {
        let menu = controller();
        assert!(!menu.is_open(A));
        assert!(!menu.is_open(B));
        assert!(!menu.is_panel_open());
        assert!(!menu.is_observer_attached());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut menu = controller();
        menu.open_dropdown(A);
        menu.open_dropdown(A);
        assert!(menu.is_open(A));
        menu.close_dropdown(A);
        menu.close_dropdown(A);
        assert!(!menu.is_open(A));
        assert!(!menu.is_observer_attached());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut menu = controller();
        menu.toggle_dropdown(A);
        assert!(menu.expanded(A));
        menu.toggle_dropdown(A);
        assert!(!menu.expanded(A));
    }

    #[test]
    fn dropdowns_can_be_open_together() {
        let mut menu = controller();
        menu.toggle_dropdown(A);
        menu.toggle_dropdown(B);
        assert!(menu.is_open(A) && menu.is_open(B));
    }

    #[test]
    fn observer_follows_union_of_open_flags() {
        let mut menu = controller();
        menu.open_dropdown(A);
        menu.open_dropdown(B);
        assert!(menu.is_observer_attached());
        menu.close_dropdown(A);
        assert!(menu.is_observer_attached());
        menu.close_dropdown(B);
        assert!(!menu.is_observer_attached());
    }

    #[test]
    fn press_inside_panel_dismisses_nothing() {
        let mut menu = controller();
        menu.register_region(A, handle("a-desktop", Surface::Desktop), square(0.0, 0.0));
        menu.toggle_mobile_panel();
        menu.mount_panel(Region::from_rect(Rect::from_min_size(
            pos2(500.0, 0.0),
            Vec2::new(200.0, 600.0),
        )));
        menu.open_dropdown(A);

        assert!(menu.handle_pointer_down(pos2(600.0, 500.0)).is_empty());
        assert!(menu.is_open(A));
    }

    #[test]
    fn dropdowns_do_not_shield_each_other() {
        let mut menu = controller();
        menu.register_region(A, handle("a-desktop", Surface::Desktop), square(0.0, 0.0));
        menu.register_region(B, handle("b-desktop", Surface::Desktop), square(50.0, 0.0));
        menu.open_dropdown(A);
        menu.open_dropdown(B);

        assert_eq!(menu.handle_pointer_down(pos2(5.0, 5.0)), vec![B]);
        assert!(menu.is_open(A));
        assert!(!menu.is_open(B));
    }

    #[test]
    fn background_press_closes_open_dropdowns() {
        let mut menu = controller();
        menu.register_region(A, handle("a-desktop", Surface::Desktop), square(0.0, 0.0));
        menu.open_dropdown(A);

        assert_eq!(menu.handle_pointer_down(pos2(300.0, 300.0)), vec![A]);
        assert!(!menu.is_open(A));
        assert!(!menu.is_observer_attached());
    }

    #[test]
    fn press_inside_mobile_copy_keeps_dropdown_open() {
        let mut menu = controller();
        menu.register_region(A, handle("a-desktop", Surface::Desktop), square(0.0, 0.0));
        menu.register_region(A, handle("a-mobile", Surface::Mobile), square(100.0, 100.0));
        menu.open_dropdown(A);

        assert!(menu.handle_pointer_down(pos2(105.0, 105.0)).is_empty());
        assert!(menu.is_open(A));
    }

    #[test]
    fn deregistered_region_no_longer_counts_as_inside() {
        let mut menu = controller();
        let mobile = handle("a-mobile", Surface::Mobile);
        menu.register_region(A, mobile, square(100.0, 100.0));
        menu.open_dropdown(A);
        assert!(menu.deregister_region(A, mobile));

        assert_eq!(menu.handle_pointer_down(pos2(105.0, 105.0)), vec![A]);
        assert!(!menu.is_open(A));
    }

    #[test]
    fn closing_panel_unmounts_mobile_regions_but_keeps_flags() {
        let mut menu = controller();
        menu.toggle_mobile_panel();
        menu.mount_panel(square(100.0, 100.0));
        menu.register_region(A, handle("a-mobile", Surface::Mobile), square(100.0, 100.0));
        menu.register_region(A, handle("a-desktop", Surface::Desktop), square(0.0, 0.0));
        menu.toggle_dropdown(A);

        menu.toggle_mobile_panel();
        assert!(menu.is_open(A));
        assert!(menu.regions().panel().is_none());
        assert_eq!(menu.regions().len(), 1);

        assert_eq!(menu.handle_pointer_down(pos2(105.0, 105.0)), vec![A]);
    }

    #[test]
    fn unmounted_panel_no_longer_shields() {
        let mut menu = controller();
        menu.toggle_mobile_panel();
        menu.mount_panel(square(100.0, 100.0));
        menu.open_dropdown(A);
        assert!(menu.handle_pointer_down(pos2(105.0, 105.0)).is_empty());

        menu.unmount_panel();
        assert!(menu.is_panel_open());
        assert_eq!(menu.handle_pointer_down(pos2(105.0, 105.0)), vec![A]);
    }

    #[test]
    fn panel_mount_ignored_while_closed() {
        let mut menu = controller();
        menu.mount_panel(square(0.0, 0.0));
        assert!(menu.regions().panel().is_none());
    }

    #[test]
    fn press_is_ignored_while_observer_detached() {
        let mut menu = controller();
        assert!(menu.handle_pointer_down(pos2(5.0, 5.0)).is_empty());
        assert!(!menu.is_open(A) && !menu.is_open(B));
    }

    #[test]
    fn shared_hub_rejects_second_controller_for_owner() {
        let hub = PointerHub::new();
        let first = MenuController::with_hub(Id::new("nav"), &hub).unwrap();
        assert_eq!(
            MenuController::with_hub(Id::new("nav"), &hub).unwrap_err(),
            NavError::ObserverConflict(Id::new("nav"))
        );
        drop(first);
        assert!(MenuController::with_hub(Id::new("nav"), &hub).is_ok());
    }

    #[test]
    fn teardown_detaches_observer() {
        let hub = PointerHub::new();
        let mut menu = MenuController::with_hub(Id::new("nav"), &hub).unwrap();
        menu.open_dropdown(A);
        assert_eq!(hub.attached_count(), 1);
        drop(menu);
        assert_eq!(hub.attached_count(), 0);
        assert_eq!(hub.claim_count(), 0);
    }
}
