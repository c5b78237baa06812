//! Static descriptions of Slack methods, and the registry that indexes them.

use std::collections::HashMap;
use std::fmt;

use super::Method;

/// Where a template parameter gets its starting value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotDefault {
    /// The configured authentication token.
    Token,
    /// Must be supplied by the caller.
    Required,
    /// Starts unset, so it is only sent when the caller provides it.
    Optional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub default: SlotDefault,
}

pub const TOKEN: Slot = Slot {
    name: "token",
    default: SlotDefault::Token,
};

pub const fn required(name: &'static str) -> Slot {
    Slot {
        name,
        default: SlotDefault::Required,
    }
}

pub const fn optional(name: &'static str) -> Slot {
    Slot {
        name,
        default: SlotDefault::Optional,
    }
}

/// One Slack method: its URL, verb, and the parameters it knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Method family, e.g. `channels` or `usergroups.users`.
    pub family: &'static str,
    /// Action within the family, e.g. `archive`.
    pub action: &'static str,
    pub method: Method,
    pub template: &'static [Slot],
}

impl EndpointDescriptor {
    pub const fn new(
        family: &'static str,
        action: &'static str,
        method: Method,
        template: &'static [Slot],
    ) -> Self {
        EndpointDescriptor {
            family,
            action,
            method,
            template,
        }
    }

    /// The full Slack method name, e.g. `chat.postMessage`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.family, self.action)
    }

    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.template
            .iter()
            .filter(|slot| slot.default == SlotDefault::Required)
            .map(|slot| slot.name)
    }

    pub fn uses_token(&self) -> bool {
        self.template
            .iter()
            .any(|slot| slot.default == SlotDefault::Token)
    }
}

impl fmt::Display for EndpointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.family, self.action)
    }
}

/// Descriptors keyed by family, then action.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    families: HashMap<&'static str, HashMap<&'static str, EndpointDescriptor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every method this crate wraps.
    pub fn standard() -> Self {
        use super::*;

        let families: &[&[EndpointDescriptor]] = &[
            api::DESCRIPTORS,
            auth::DESCRIPTORS,
            channels::DESCRIPTORS,
            chat::DESCRIPTORS,
            emoji::DESCRIPTORS,
            files::DESCRIPTORS,
            groups::DESCRIPTORS,
            im::DESCRIPTORS,
            mpim::DESCRIPTORS,
            oauth::DESCRIPTORS,
            pins::DESCRIPTORS,
            reactions::DESCRIPTORS,
            rtm::DESCRIPTORS,
            search::DESCRIPTORS,
            stars::DESCRIPTORS,
            usergroups::DESCRIPTORS,
            usergroups_users::DESCRIPTORS,
        ];

        let mut registry = Registry::new();
        for descriptor in families.iter().flat_map(|family| family.iter()) {
            registry.register(*descriptor);
        }
        registry
    }

    /// Adds `descriptor`, replacing (and returning) any previous entry for
    /// the same family and action.
    pub fn register(&mut self, descriptor: EndpointDescriptor) -> Option<EndpointDescriptor> {
        self.families
            .entry(descriptor.family)
            .or_default()
            .insert(descriptor.action, descriptor)
    }

    pub fn get(&self, family: &str, action: &str) -> Option<&EndpointDescriptor> {
        self.families.get(family)?.get(action)
    }

    /// Looks up a full method name such as `usergroups.users.list`.
    pub fn resolve(&self, name: &str) -> Option<&EndpointDescriptor> {
        let dot = name.rfind('.')?;
        self.get(&name[..dot], &name[dot + 1..])
    }

    pub fn len(&self) -> usize {
        self.families.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All descriptors, sorted by method name.
    pub fn iter(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        let mut all: Vec<_> = self.families.values().flat_map(HashMap::values).collect();
        all.sort_by_key(|d| (d.family, d.action));
        all.into_iter()
    }
}
