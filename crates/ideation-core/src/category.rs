//! Supply-chain categories and the guidance attached to each.
//!
//! Every lookup is an exhaustive `match`, so adding a category forces every
//! table below to be updated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supply-chain platform or problem domain an idea belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DailyHurdles,
    BlueYonder,
    Kinaxis,
    Coupa,
    Manhattan,
    OtherScm,
}

/// Platform facts used to focus the assistant's system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformKnowledge {
    pub description: &'static str,
    #[serde(skip_serializing_if = "is_empty")]
    pub capabilities: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub features: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub areas: &'static [&'static str],
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::DailyHurdles,
        Category::BlueYonder,
        Category::Kinaxis,
        Category::Coupa,
        Category::Manhattan,
        Category::OtherScm,
    ];

    /// The category used for unknown identifiers.
    pub const DEFAULT: Category = Category::OtherScm;

    /// Parse a category identifier, returning `None` for unknown ids.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "daily_hurdles" => Some(Category::DailyHurdles),
            "blue_yonder" => Some(Category::BlueYonder),
            "kinaxis" => Some(Category::Kinaxis),
            "coupa" => Some(Category::Coupa),
            "manhattan" => Some(Category::Manhattan),
            "other_scm" => Some(Category::OtherScm),
            _ => None,
        }
    }

    /// Resolve a category identifier, mapping unknown ids to [`Category::DEFAULT`].
    pub fn lookup(id: &str) -> Self {
        Self::from_id(id).unwrap_or(Self::DEFAULT)
    }

    /// Reverse lookup by human-readable label ("Blue Yonder", "Manhattan", ...).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Stable identifier stored in the database and sent by clients.
    pub fn id(self) -> &'static str {
        match self {
            Category::DailyHurdles => "daily_hurdles",
            Category::BlueYonder => "blue_yonder",
            Category::Kinaxis => "kinaxis",
            Category::Coupa => "coupa",
            Category::Manhattan => "manhattan",
            Category::OtherScm => "other_scm",
        }
    }

    /// Human-readable label, also used as the display name sent to the
    /// idea-generation endpoint.
    pub fn label(self) -> &'static str {
        match self {
            Category::DailyHurdles => "Daily Hurdles",
            Category::BlueYonder => "Blue Yonder",
            Category::Kinaxis => "Kinaxis",
            Category::Coupa => "Coupa",
            Category::Manhattan => "Manhattan",
            Category::OtherScm => "Other SCM",
        }
    }

    /// One-line description shown next to the category picker.
    pub fn description(self) -> &'static str {
        match self {
            Category::DailyHurdles => "Everyday challenges and improvements",
            Category::BlueYonder => "Supply chain optimization platform",
            Category::Kinaxis => "Supply chain planning solutions",
            Category::Coupa => "Business spend management",
            Category::Manhattan => "Supply chain commerce solutions",
            Category::OtherScm => "Other supply chain technologies",
        }
    }

    /// Longer description used when greeting a brainstorming session.
    pub fn focus(self) -> &'static str {
        match self {
            Category::DailyHurdles => "Everyday challenges and lifestyle improvements",
            Category::BlueYonder => "Blue Yonder supply chain optimization",
            Category::Kinaxis => "Kinaxis supply chain planning solutions",
            Category::Coupa => "Coupa business spend management",
            Category::Manhattan => "Manhattan supply chain commerce",
            Category::OtherScm => "General supply chain management",
        }
    }

    /// Prompt guidance conditioning generated ideas.
    pub fn guidance(self) -> &'static str {
        match self {
            Category::DailyHurdles => {
                "Focus on everyday challenges, personal productivity, lifestyle improvements, \
                 and common problems people face in their daily lives."
            }
            Category::BlueYonder => {
                "Focus on supply chain optimization, demand planning, inventory management, \
                 warehouse management, and Blue Yonder platform specific solutions."
            }
            Category::Kinaxis => {
                "Focus on supply chain planning, demand sensing, supply planning, inventory \
                 optimization, and Kinaxis RapidResponse platform capabilities."
            }
            Category::Coupa => {
                "Focus on procurement, spend management, supplier management, contract \
                 management, and business spend optimization using Coupa platform."
            }
            Category::Manhattan => {
                "Focus on warehouse management, transportation management, distributed order \
                 management, and Manhattan Associates solutions."
            }
            Category::OtherScm => {
                "Focus on general supply chain management, logistics, transportation, \
                 distribution, and emerging supply chain technologies."
            }
        }
    }

    /// Platform knowledge for the assistant's focus block, if any.
    pub fn knowledge(self) -> Option<PlatformKnowledge> {
        match self {
            Category::BlueYonder => Some(PlatformKnowledge {
                description: "AI-driven supply chain solutions focusing on demand planning, \
                              inventory optimization, and autonomous supply chains",
                capabilities: &[
                    "Demand sensing",
                    "Inventory optimization",
                    "Supply planning",
                    "Warehouse management",
                    "Transportation optimization",
                    "Price optimization",
                ],
                features: &[
                    "Machine learning algorithms",
                    "Real-time analytics",
                    "Autonomous replenishment",
                    "Multi-echelon inventory optimization",
                ],
                areas: &[],
            }),
            Category::Kinaxis => Some(PlatformKnowledge {
                description: "RapidResponse platform for concurrent supply chain planning with \
                              real-time visibility and scenario modeling",
                capabilities: &[
                    "Demand planning",
                    "Supply planning",
                    "S&OP",
                    "Risk management",
                    "Scenario modeling",
                    "Real-time collaboration",
                ],
                features: &[
                    "Concurrent planning",
                    "What-if analysis",
                    "Supply chain control tower",
                    "Risk monitoring",
                    "Multi-tier visibility",
                ],
                areas: &[],
            }),
            Category::Coupa => Some(PlatformKnowledge {
                description: "Business Spend Management platform covering procurement, \
                              invoicing, expenses, and supply chain collaboration",
                capabilities: &[
                    "Procurement",
                    "Supplier management",
                    "Contract management",
                    "Invoice processing",
                    "Expense management",
                    "Supply chain collaboration",
                ],
                features: &[
                    "AI-powered insights",
                    "Supplier risk management",
                    "Spend analytics",
                    "Contract lifecycle management",
                    "Community intelligence",
                ],
                areas: &[],
            }),
            Category::Manhattan => Some(PlatformKnowledge {
                description: "Supply chain commerce solutions for warehouse management, \
                              transportation, and omnichannel fulfillment",
                capabilities: &[
                    "Warehouse management",
                    "Transportation management",
                    "Distributed order management",
                    "Labor management",
                    "Yard management",
                ],
                features: &[
                    "Real-time inventory tracking",
                    "Advanced fulfillment",
                    "Labor optimization",
                    "Route optimization",
                    "Multi-channel distribution",
                ],
                areas: &[],
            }),
            Category::DailyHurdles => Some(PlatformKnowledge {
                description: "Common operational challenges in supply chain and business \
                              operations",
                capabilities: &[],
                features: &[],
                areas: &[
                    "Process inefficiencies",
                    "Communication gaps",
                    "Resource constraints",
                    "Technology limitations",
                    "Compliance issues",
                ],
            }),
            Category::OtherScm => None,
        }
    }
}

fn is_empty(list: &&'static [&'static str]) -> bool {
    list.is_empty()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
