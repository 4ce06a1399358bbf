//! Page schema kind.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Names accepted in frontmatter, for both `---` and `+++` blocks.
const NAMES: [(&str, PageKind); 10] = [
    ("blog", PageKind::Blog),
    ("post", PageKind::Blog),
    ("BlogPosting", PageKind::Blog),
    ("about", PageKind::About),
    ("AboutPage", PageKind::About),
    ("contact", PageKind::Contact),
    ("ContactPage", PageKind::Contact),
    ("default", PageKind::Default),
    ("page", PageKind::Default),
    ("WebPage", PageKind::Default),
];

/// The schema.org type a page is described as.
///
/// Written in frontmatter and on the command line as `blog`, `about`,
/// `contact` or `default`; serialized as the schema.org type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum PageKind {
    /// A blog post (`BlogPosting`).
    Blog,
    /// `AboutPage`
    About,
    /// `ContactPage`
    Contact,
    /// A generic `WebPage`.
    #[default]
    Default,
}

impl PageKind {
    /// schema.org type name.
    pub const fn schema_type(self) -> &'static str {
        match self {
            Self::Blog => "BlogPosting",
            Self::About => "AboutPage",
            Self::Contact => "ContactPage",
            Self::Default => "WebPage",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_type())
    }
}

impl Serialize for PageKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.schema_type())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| {
                format!("unknown page kind '{name}', expected blog, about, contact or default")
            })
    }
}

impl<'de> Deserialize<'de> for PageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PageKindVisitor)
    }
}

struct PageKindVisitor;

impl Visitor<'_> for PageKindVisitor {
    type Value = PageKind;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a page kind: blog, about, contact or default")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }
}
