//! Sidebar data: resources grouped by navigation label, then pages

use dashkit_config::ShellConfig;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub id: String,
    pub name: String,
    /// Group label; None lists the resource at the top level
    pub navigation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub name: String,
    pub icon: Option<String>,
}

/// Already-resolved navigation data the sidebar renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarModel {
    pub resources: Vec<ResourceEntry>,
    pub pages: Vec<PageEntry>,
}

/// One selectable line of the flattened sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    /// Navigation group heading; activating it folds the group
    Group(String),
    Resource(usize),
    Page(usize),
}

/// Top-level entry of the resource section, in first-appearance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceNode<'a> {
    Resource(usize),
    Group { name: &'a str, members: Vec<usize> },
}

impl SidebarModel {
    pub fn from_config(shell: &ShellConfig) -> Self {
        Self {
            resources: shell
                .resources
                .iter()
                .map(|r| ResourceEntry {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    navigation: r.navigation.clone(),
                })
                .collect(),
            pages: shell
                .pages
                .iter()
                .map(|p| PageEntry {
                    name: p.name.clone(),
                    icon: p.icon.clone(),
                })
                .collect(),
        }
    }

    /// Resources with the same navigation label collapsed into one group,
    /// placed where the label first appears
    pub fn resource_tree(&self) -> Vec<ResourceNode<'_>> {
        let mut nodes: Vec<ResourceNode<'_>> = Vec::new();
        for (idx, resource) in self.resources.iter().enumerate() {
            let Some(label) = resource.navigation.as_deref() else {
                nodes.push(ResourceNode::Resource(idx));
                continue;
            };
            let existing = nodes.iter_mut().find_map(|node| match node {
                ResourceNode::Group { name, members } if *name == label => Some(members),
                _ => None,
            });
            match existing {
                Some(members) => members.push(idx),
                None => nodes.push(ResourceNode::Group {
                    name: label,
                    members: vec![idx],
                }),
            }
        }
        nodes
    }

    /// Flatten into selectable rows, leaving out members of folded groups
    pub fn rows(&self, collapsed: &HashSet<String>) -> Vec<SidebarRow> {
        let mut rows = Vec::with_capacity(self.resources.len() + self.pages.len());
        for node in self.resource_tree() {
            match node {
                ResourceNode::Resource(idx) => rows.push(SidebarRow::Resource(idx)),
                ResourceNode::Group { name, members } => {
                    rows.push(SidebarRow::Group(name.to_string()));
                    if !collapsed.contains(name) {
                        rows.extend(members.into_iter().map(SidebarRow::Resource));
                    }
                }
            }
        }
        rows.extend((0..self.pages.len()).map(SidebarRow::Page));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str, navigation: Option<&str>) -> ResourceEntry {
        ResourceEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            navigation: navigation.map(str::to_string),
        }
    }

    fn model() -> SidebarModel {
        SidebarModel {
            resources: vec![
                resource("posts", Some("Content")),
                resource("settings", None),
                resource("users", Some("Access")),
                resource("comments", Some("Content")),
            ],
            pages: vec![PageEntry {
                name: "Dashboard".to_string(),
                icon: None,
            }],
        }
    }

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let model = model();
        assert_eq!(
            model.resource_tree(),
            vec![
                ResourceNode::Group {
                    name: "Content",
                    members: vec![0, 3]
                },
                ResourceNode::Resource(1),
                ResourceNode::Group {
                    name: "Access",
                    members: vec![2]
                },
            ]
        );
    }

    #[test]
    fn test_rows_flatten_with_pages_last() {
        let rows = model().rows(&HashSet::new());
        assert_eq!(
            rows,
            vec![
                SidebarRow::Group("Content".to_string()),
                SidebarRow::Resource(0),
                SidebarRow::Resource(3),
                SidebarRow::Resource(1),
                SidebarRow::Group("Access".to_string()),
                SidebarRow::Resource(2),
                SidebarRow::Page(0),
            ]
        );
    }

    #[test]
    fn test_collapsed_group_hides_members() {
        let collapsed: HashSet<String> = ["Content".to_string()].into_iter().collect();
        let rows = model().rows(&collapsed);
        assert_eq!(rows[0], SidebarRow::Group("Content".to_string()));
        assert_eq!(rows[1], SidebarRow::Resource(1));
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_from_config_defaults() {
        let model = SidebarModel::from_config(&dashkit_config::ShellConfig::default());
        assert!(!model.resources.is_empty());
        assert!(model.pages.iter().any(|p| p.name == "Dashboard"));
    }
}
