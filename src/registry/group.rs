//! The closed set of CSS groups a registry year is split into

use std::fmt;

/// One of the fixed CSS domains registry data is grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Group {
    Atrules,
    Attributes,
    Classes,
    Elements,
    Values,
}

impl Group {
    pub const ALL: [Group; 5] = [
        Group::Atrules,
        Group::Attributes,
        Group::Classes,
        Group::Elements,
        Group::Values,
    ];

    /// Name used as the top-level key of a snapshot
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Atrules => "atrules",
            Group::Attributes => "attributes",
            Group::Classes => "classes",
            Group::Elements => "elements",
            Group::Values => "values",
        }
    }

    /// File name of this group inside a year directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Resolve a registry file name (`classes.json`) to its group.
    /// Returns `None` for anything outside the fixed lookup.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.file_name() == name)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_name() {
        assert_eq!(Group::from_file_name("atrules.json"), Some(Group::Atrules));
        assert_eq!(Group::from_file_name("values.json"), Some(Group::Values));
        assert_eq!(Group::from_file_name("classes"), None);
        assert_eq!(Group::from_file_name("properties.json"), None);
    }

    #[test]
    fn test_every_group_round_trips_through_file_name() {
        for group in Group::ALL {
            assert_eq!(Group::from_file_name(&group.file_name()), Some(group));
        }
    }
}
