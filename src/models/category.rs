//! Category taxonomy used for site navigation.

use std::collections::HashMap;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A flat record from the footer endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterEntry {
    #[serde(rename = "PageCategory")]
    pub category: String,

    #[serde(rename = "PageKeyword")]
    pub keyword: String,

    #[serde(rename = "PageName", default)]
    pub page_name: String,
}

/// A predefined search page listed under a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryLink {
    pub keyword: String,

    #[serde(rename = "pageName")]
    pub page_name: String,
}

impl CategoryLink {
    /// Link text, e.g. `dev jobs in Cambridge`.
    pub fn label(&self, region: &str) -> String {
        format!("{} jobs in {}", self.keyword, capitalize(region))
    }

    /// Site path of the category page.
    pub fn href(&self) -> String {
        format!("/category/{}", self.keyword)
    }
}

/// One category with its links, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub links: Vec<CategoryLink>,
}

/// Footer entries grouped by category.
///
/// Categories keep their first-seen order; links keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTree {
    groups: Vec<CategoryGroup>,
    positions: HashMap<String, usize>,
}

impl CategoryTree {
    /// Group a flat list of footer entries.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FooterEntry>) -> Self {
        let mut tree = Self::default();
        for entry in entries {
            tree.push(entry);
        }
        tree
    }

    fn push(&mut self, entry: &FooterEntry) {
        let link = CategoryLink {
            keyword: entry.keyword.clone(),
            page_name: entry.page_name.clone(),
        };
        match self.positions.get(&entry.category) {
            Some(&idx) => self.groups[idx].links.push(link),
            None => {
                self.positions
                    .insert(entry.category.clone(), self.groups.len());
                self.groups.push(CategoryGroup {
                    name: entry.category.clone(),
                    links: vec![link],
                });
            }
        }
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Links for one category.
    pub fn get(&self, category: &str) -> Option<&[CategoryLink]> {
        self.positions
            .get(category)
            .map(|&idx| self.groups[idx].links.as_slice())
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of links across categories.
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}

impl Serialize for CategoryTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.name, &group.links)?;
        }
        map.end()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
