//! Screen regions used to decide whether a press is inside a dropdown.

use std::collections::HashMap;

use egui::{Id, Pos2, Rect};
use enum_map::EnumMap;

use crate::menu::items::{DropdownKey, Surface};

/// Opaque reference to one mounted presentation surface of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle {
    id: Id,
    surface: Surface,
}

impl RegionHandle {
    /// Create a handle for the surface identified by `id`.
    ///
    /// # Arguments
    /// * `id` - Unique id of the surface, usually derived from the bar id
    /// * `surface` - Whether the region is drawn on the bar or in the panel
    pub fn new(id: Id, surface: Surface) -> Self {
        Self { id, surface }
    }

    /// The egui id this handle was built from.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Surface the region is drawn on.
    pub fn surface(&self) -> Surface {
        self.surface
    }
}

/// Screen area covered by a surface, made of one or more rectangles.
///
/// A desktop dropdown covers its trigger and, while open, the popup hanging
/// below it; those are kept as separate shapes so the gap beside a narrow
/// trigger does not count as inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    shapes: Vec<Rect>,
}

impl Region {
    /// A region made of a single rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        Self { shapes: vec![rect] }
    }

    /// Add another rectangle to the region.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.shapes.push(rect);
        self
    }

    /// Whether `pos` lies in any of the rectangles.
    pub fn contains(&self, pos: Pos2) -> bool {
        self.shapes.iter().any(|rect| rect.contains(pos))
    }

    /// The rectangles, in insertion order.
    pub fn shapes(&self) -> &[Rect] {
        &self.shapes
    }
}

#[derive(Debug, Clone)]
struct Entry {
    region: Region,
    pass: u64,
}

/// Every currently-mounted region, per dropdown key, plus the panel.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    dropdowns: EnumMap<DropdownKey, HashMap<RegionHandle, Entry>>,
    panel: Option<Entry>,
    pass: u64,
}

impl RegionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh the region for `handle`.
    pub fn register(&mut self, key: DropdownKey, handle: RegionHandle, region: Region) {
        let fresh = self.dropdowns[key]
            .insert(
                handle,
                Entry {
                    region,
                    pass: self.pass,
                },
            )
            .is_none();
        if fresh {
            log::trace!("mounted {:?} region for {key}", handle.surface());
        }
    }

    /// Remove `handle`; returns whether it was registered.
    pub fn deregister(&mut self, key: DropdownKey, handle: RegionHandle) -> bool {
        let removed = self.dropdowns[key].remove(&handle).is_some();
        if removed {
            log::trace!("unmounted {:?} region for {key}", handle.surface());
        }
        removed
    }

    /// Remove every dropdown region rendered on `surface`.
    pub fn deregister_surface(&mut self, surface: Surface) -> usize {
        let mut removed = 0;
        for (_, regions) in self.dropdowns.iter_mut() {
            let before = regions.len();
            regions.retain(|handle, _| handle.surface() != surface);
            removed += before - regions.len();
        }
        removed
    }

    /// Mount the panel region, or unmount it with `None`.
    pub fn set_panel(&mut self, region: Option<Region>) {
        self.panel = region.map(|region| Entry {
            region,
            pass: self.pass,
        });
    }

    /// Region of the mounted panel, if any.
    pub fn panel(&self) -> Option<&Region> {
        self.panel.as_ref().map(|entry| &entry.region)
    }

    /// Whether `pos` falls inside the mounted panel.
    pub fn panel_contains(&self, pos: Pos2) -> bool {
        self.panel().is_some_and(|region| region.contains(pos))
    }

    /// Whether `pos` falls inside any region registered for `key`.
    pub fn contains(&self, key: DropdownKey, pos: Pos2) -> bool {
        self.dropdowns[key]
            .values()
            .any(|entry| entry.region.contains(pos))
    }

    /// Every region registered for `key`, in no particular order.
    pub fn regions(&self, key: DropdownKey) -> impl Iterator<Item = (&RegionHandle, &Region)> {
        self.dropdowns[key]
            .iter()
            .map(|(handle, entry)| (handle, &entry.region))
    }

    /// Region registered for `handle` under `key`.
    pub fn region(&self, key: DropdownKey, handle: RegionHandle) -> Option<&Region> {
        self.dropdowns[key].get(&handle).map(|entry| &entry.region)
    }

    /// Number of dropdown regions across both keys (the panel is not counted).
    pub fn len(&self) -> usize {
        self.dropdowns.values().map(HashMap::len).sum()
    }

    /// Whether no dropdown region is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a render pass. Regions registered from here on survive the
    /// matching [`RegionRegistry::end_pass`].
    pub fn begin_pass(&mut self) {
        self.pass = self.pass.wrapping_add(1);
    }

    /// Unmount every region that was not registered since the last
    /// [`RegionRegistry::begin_pass`]. Returns how many were dropped.
    pub fn end_pass(&mut self) -> usize {
        let pass = self.pass;
        let mut removed = 0;
        for (key, regions) in self.dropdowns.iter_mut() {
            let before = regions.len();
            regions.retain(|_, entry| entry.pass == pass);
            let dropped = before - regions.len();
            if dropped > 0 {
                log::trace!("swept {dropped} stale region(s) for {key}");
            }
            removed += dropped;
        }
        if self.panel.as_ref().is_some_and(|entry| entry.pass != pass) {
            self.panel = None;
            removed += 1;
        }
        removed
    }
}
