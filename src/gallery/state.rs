//! Loaded projects and the current filtered view over them.

use std::fmt;

use crate::constants::ALL_FILTER;
use crate::model::Project;

/// Which projects a filter lets through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterKey {
    /// Every project
    #[default]
    All,
    /// Projects whose category equals the value exactly
    Category(String),
}

impl FilterKey {
    /// Interpret the value carried by a filter control.
    pub fn from_control_value(value: &str) -> Self {
        if value == ALL_FILTER {
            FilterKey::All
        } else {
            FilterKey::Category(value.to_string())
        }
    }

    /// The control value for this key.
    pub fn as_str(&self) -> &str {
        match self {
            FilterKey::All => ALL_FILTER,
            FilterKey::Category(category) => category,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Category(category) => project.category == *category,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indices of the projects `key` lets through, in load order.
pub fn filter_indices(projects: &[Project], key: &FilterKey) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, project)| key.matches(project))
        .map(|(index, _)| index)
        .collect()
}

/// Gallery data owned by the controller for the page session.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    /// Set once per load, never mutated afterwards
    all_projects: Vec<Project>,
    /// Indices into `all_projects`, replaced wholesale on each filter
    visible: Vec<usize>,
    active_filter: FilterKey,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the project list and show everything.
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.visible = (0..projects.len()).collect();
        self.all_projects = projects;
        self.active_filter = FilterKey::All;
    }

    /// Make `key` the active filter and recompute the visible set.
    /// Returns the number of visible projects.
    pub fn apply_filter(&mut self, key: FilterKey) -> usize {
        self.visible = filter_indices(&self.all_projects, &key);
        self.active_filter = key;
        self.visible.len()
    }

    pub fn all_projects(&self) -> &[Project] {
        &self.all_projects
    }

    /// Visible projects in load order.
    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.visible.iter().map(|&index| &self.all_projects[index])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn active_filter(&self) -> &FilterKey {
        &self.active_filter
    }
}
