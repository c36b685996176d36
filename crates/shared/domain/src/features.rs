use crate::constants::{DASHBOARD, FORECASTS, INVENTORY, MAP, SETTINGS, TRANSFERS};
use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Dashboard pages enabled for a deployment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Page: u32 {
        const DASHBOARD = 1 << 0;
        const INVENTORY = 1 << 1;
        const FORECASTS = 1 << 2;
        const TRANSFERS = 1 << 3;
        const MAP = 1 << 4;
        const SETTINGS = 1 << 5;

        const ALL = Self::DASHBOARD.bits()
            | Self::INVENTORY.bits()
            | Self::FORECASTS.bits()
            | Self::TRANSFERS.bits()
            | Self::MAP.bits()
            | Self::SETTINGS.bits();
    }
}

const NAMED: [(&str, Page); 6] = [
    (DASHBOARD, Page::DASHBOARD),
    (INVENTORY, Page::INVENTORY),
    (FORECASTS, Page::FORECASTS),
    (TRANSFERS, Page::TRANSFERS),
    (MAP, Page::MAP),
    (SETTINGS, Page::SETTINGS),
];

impl Page {
    /// Names of the single pages contained in this set, in sidebar order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMED.into_iter().filter(move |(_, page)| self.contains(*page)).map(|(name, _)| name)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for Page {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "*" => Self::ALL,
            other => {
                NAMED.iter().find(|(name, _)| *name == other).map_or(Self::empty(), |(_, p)| *p)
            },
        }
    }
}

impl From<u32> for Page {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for Page {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let names: Vec<&str> = self.names().collect();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

/// Accepts either a list of page names or the raw bit value.
impl<'de> Deserialize<'de> for Page {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PageVisitor;

        impl<'de> Visitor<'de> for PageVisitor {
            type Value = Page;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of page names or a bit mask")
            }

            fn visit_u64<E: serde::de::Error>(self, bits: u64) -> Result<Page, E> {
                u32::try_from(bits).map(Page::from).map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, bits: i64) -> Result<Page, E> {
                u32::try_from(bits).map(Page::from).map_err(E::custom)
            }

            fn visit_str<E: serde::de::Error>(self, name: &str) -> Result<Page, E> {
                Ok(Page::from(name))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Page, A::Error> {
                let mut pages = Page::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    pages |= Page::from(name.as_str());
                }
                Ok(pages)
            }
        }

        deserializer.deserialize_any(PageVisitor)
    }
}
