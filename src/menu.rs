//! Service menu construction: buckets the flat service list into its
//! categories for the navigation dropdown.

use serde::Serialize;

use crate::types::Service;

/// Name of the trailing bucket for services whose record carries no
/// category.
pub const FALLBACK_GROUP_NAME: &str = "Other";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MenuEntry {
    pub id: u32,
    pub heading: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MenuGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub services: Vec<MenuEntry>,
}

/// Groups services by their embedded category id, keeping first-seen
/// category order and input order within each group. Services without a
/// category land in a trailing fallback group rather than faulting.
pub fn group_services(services: &[Service]) -> Vec<MenuGroup> {
    let mut groups: Vec<MenuGroup> = Vec::new();
    let mut uncategorized: Vec<MenuEntry> = Vec::new();

    for service in services {
        let entry = MenuEntry {
            id: service.id,
            heading: service.heading.clone(),
        };
        match &service.category {
            Some(category) => {
                match groups.iter_mut().find(|group| group.id == Some(category.id)) {
                    Some(group) => group.services.push(entry),
                    None => groups.push(MenuGroup {
                        id: Some(category.id),
                        name: category.name.clone(),
                        services: vec![entry],
                    }),
                }
            }
            None => uncategorized.push(entry),
        }
    }

    if !uncategorized.is_empty() {
        groups.push(MenuGroup {
            id: None,
            name: FALLBACK_GROUP_NAME.to_string(),
            services: uncategorized,
        });
    }
    groups
}
