//! The group store.

use camscope_core::color::group_color;
use camscope_core::convention::UpAxisMode;
use camscope_core::error::{CamscopeError, Result};
use serde_json::Value;

use crate::compose::{compose_visible, Composition};
use crate::group::{cameras_from_source, Group, GroupId};
use crate::source::PoseSource;

/// Result of loading a source into a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Id of the created or replaced group.
    pub id: GroupId,
    /// Whether an existing group with the same name was replaced.
    pub replaced: bool,
}

/// Ordered collection of camera groups.
///
/// Groups keep insertion order; composition follows it.
#[derive(Debug, Default)]
pub struct Scene {
    groups: Vec<Group>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a validated source under `name`.
    ///
    /// If a group called `name` exists, its cameras are replaced and its id,
    /// color and visibility are kept. Otherwise a new visible group is
    /// appended. Its color is keyed by its creation index out of all groups
    /// created so far; removed groups still count, so two live groups never
    /// share a hue.
    pub fn load(&mut self, name: &str, source: &PoseSource) -> LoadOutcome {
        let cameras = cameras_from_source(source);

        if let Some(group) = self.groups.iter_mut().find(|g| g.name() == name) {
            log::info!(
                "replacing cameras of group '{name}' ({} -> {})",
                group.len(),
                cameras.len()
            );
            group.replace_cameras(cameras);
            return LoadOutcome {
                id: group.id(),
                replaced: true,
            };
        }

        let index = self.next_id;
        self.next_id += 1;
        let id = GroupId(index);
        #[allow(clippy::cast_possible_truncation)]
        let color = group_color(index as usize, self.next_id as usize);
        log::info!("loaded group '{name}' with {} cameras", cameras.len());
        self.groups.push(Group::new(id, name, color, cameras));

        LoadOutcome { id, replaced: false }
    }

    /// Validates a parsed JSON record and loads it under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CamscopeError::InputShape`] for a malformed record; the
    /// scene is left unchanged in that case.
    pub fn load_json(&mut self, name: &str, record: &Value) -> Result<LoadOutcome> {
        let source = PoseSource::from_json(record).map_err(|err| {
            log::warn!("failed to load '{name}': {err}");
            err
        })?;
        Ok(self.load(name, &source))
    }

    /// Removes a group. Other groups keep their colors.
    pub fn remove_group(&mut self, id: GroupId) -> Result<Group> {
        let index = self.index_of(id)?;
        let group = self.groups.remove(index);
        log::info!("removed group '{}'", group.name());
        Ok(group)
    }

    /// Sets the visibility of a group.
    pub fn set_visible(&mut self, id: GroupId, visible: bool) -> Result<()> {
        let index = self.index_of(id)?;
        self.groups[index].set_visible(visible);
        Ok(())
    }

    /// Returns a group by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Returns a group by name.
    #[must_use]
    pub fn group_by_name(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name() == name)
    }

    /// Returns all groups in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the scene has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Removes all groups. Ids are not reused.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Composes the render cameras of all visible groups.
    #[must_use]
    pub fn compose(&self, invert_poses: bool, up: UpAxisMode) -> Composition {
        compose_visible(&self.groups, invert_poses, up)
    }

    fn index_of(&self, id: GroupId) -> Result<usize> {
        self.groups
            .iter()
            .position(|g| g.id() == id)
            .ok_or_else(|| CamscopeError::GroupNotFound(id.to_string()))
    }
}
