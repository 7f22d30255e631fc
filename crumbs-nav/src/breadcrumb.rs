use crate::directory::Directory;

/// One step of the navigation trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    label: String,
    directory: Directory,
}

impl Crumb {
    /// Create a crumb labelled with the directory display name.
    pub fn new(directory: Directory) -> Self {
        Self {
            label: directory.display_name(),
            directory,
        }
    }

    /// Return the label shown in the breadcrumb strip.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the directory this crumb jumps to.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }
}

/// Ordered trail from the seed directory to the current one, inclusive.
///
/// The trail is never empty and each crumb is the parent of the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumbs {
    crumbs: Vec<Crumb>,
}

impl Breadcrumbs {
    /// Create a trail holding only `seed`.
    pub fn new(seed: Directory) -> Self {
        Self {
            crumbs: vec![Crumb::new(seed)],
        }
    }

    /// Rebuild a trail from the lineage of `directory`.
    pub fn for_directory(directory: &Directory) -> Self {
        let crumbs: Vec<Crumb> =
            directory.lineage().into_iter().map(Crumb::new).collect();
        if crumbs.is_empty() {
            return Self::new(directory.clone());
        }
        Self { crumbs }
    }

    /// Return all crumbs in display order.
    pub fn as_slice(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Return the number of crumbs.
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Return whether the trail holds no crumbs.
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Return the crumb at `index`.
    pub fn get(&self, index: usize) -> Option<&Crumb> {
        self.crumbs.get(index)
    }

    /// Return the index of the last crumb.
    pub fn last_index(&self) -> usize {
        self.crumbs.len().saturating_sub(1)
    }

    /// Return the last crumb, which names the current directory.
    pub fn last(&self) -> &Crumb {
        &self.crumbs[self.last_index()]
    }

    /// Append `directory`, which must be a child of the last crumb.
    pub(crate) fn push(&mut self, directory: Directory) {
        self.crumbs.push(Crumb::new(directory));
    }

    /// Keep crumbs up to and including `index`.
    ///
    /// Returns `None` without touching the trail when `index` is out of range.
    pub(crate) fn truncate_to(&mut self, index: usize) -> Option<&Crumb> {
        if index >= self.crumbs.len() {
            return None;
        }

        self.crumbs.truncate(index + 1);
        self.crumbs.get(index)
    }

    /// Remove the last crumb unless it is the only one.
    pub(crate) fn pop(&mut self) {
        if self.crumbs.len() > 1 {
            self.crumbs.pop();
        }
    }
}
