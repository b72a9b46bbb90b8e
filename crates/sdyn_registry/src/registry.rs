use std::collections::HashMap;

use thiserror::Error;

use crate::descriptor::{FunctionDescriptor, Group};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("symbol `{symbol}` is declared in both the `{first}` and `{second}` groups")]
    DuplicateSymbol {
        symbol: &'static str,
        first: Group,
        second: Group,
    },
    #[error("the `{group}` group contains a function with an empty name")]
    EmptyName { group: Group },
    #[error("descriptor `{symbol}` is tagged `{tagged}` but listed under `{listed}`")]
    MisplacedDescriptor {
        symbol: &'static str,
        tagged: Group,
        listed: Group,
    },
}

/// All descriptors of one group, in table order.
#[derive(Debug)]
pub struct DescriptorGroup {
    group: Group,
    descriptors: &'static [&'static FunctionDescriptor],
}

impl DescriptorGroup {
    pub const fn new(group: Group, descriptors: &'static [&'static FunctionDescriptor]) -> Self {
        Self { group, descriptors }
    }

    pub const fn group(&self) -> Group {
        self.group
    }

    pub const fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub const fn descriptors(&self) -> &'static [&'static FunctionDescriptor] {
        self.descriptors
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static FunctionDescriptor> + '_ {
        self.descriptors.iter().copied()
    }
}

/// The active set of groups. Groups left out at build time are simply not
/// listed here.
#[derive(Debug)]
pub struct Registry {
    groups: &'static [&'static DescriptorGroup],
}

impl Registry {
    pub const fn new(groups: &'static [&'static DescriptorGroup]) -> Self {
        Self { groups }
    }

    /// Every descriptor, group by group, each group in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static FunctionDescriptor> + '_ {
        self.groups.iter().flat_map(|group| group.iter())
    }

    pub fn groups(&self) -> impl Iterator<Item = Group> + '_ {
        self.groups.iter().map(|group| group.group())
    }

    pub fn contains_group(&self, group: Group) -> bool {
        self.groups().any(|candidate| candidate == group)
    }

    /// Descriptors of a single group; empty when the group is not active.
    pub fn group(&self, group: Group) -> impl Iterator<Item = &'static FunctionDescriptor> + '_ {
        self.groups
            .iter()
            .filter(move |candidate| candidate.group() == group)
            .flat_map(|candidate| candidate.iter())
    }

    pub fn lookup(&self, name: &str) -> Option<&'static FunctionDescriptor> {
        self.iter().find(|descriptor| descriptor.name() == name)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that names are non-empty and unique across every active group.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen: HashMap<&'static str, Group> = HashMap::with_capacity(self.len());
        for group in self.groups {
            for descriptor in group.iter() {
                if descriptor.name().is_empty() {
                    return Err(RegistryError::EmptyName {
                        group: group.group(),
                    });
                }
                if descriptor.group() != group.group() {
                    return Err(RegistryError::MisplacedDescriptor {
                        symbol: descriptor.name(),
                        tagged: descriptor.group(),
                        listed: group.group(),
                    });
                }
                if let Some(first) = seen.insert(descriptor.name(), group.group()) {
                    return Err(RegistryError::DuplicateSymbol {
                        symbol: descriptor.name(),
                        first,
                        second: group.group(),
                    });
                }
            }
        }
        Ok(())
    }
}
