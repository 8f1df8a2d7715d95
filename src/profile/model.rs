//! Typed shape of the athlete profile descriptor.
//!
//! Field names on the wire are camelCase so the same file can be handed
//! to the page template untouched. Every key is required; a descriptor
//! missing any of them fails to load instead of rendering blanks.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDescriptor {
    pub first_name: String,
    pub last_name: String,
    pub team: String,
    pub discipline: String,
    pub level: String,
    pub share_message: String,
    pub share_image: String,
    pub fundraising: Fundraising,
    pub photos: Vec<Photo>,
    pub events: BTreeMap<Apparatus, Vec<EventScore>>,
    pub sponsors: Vec<Sponsor>,
    pub bio: Bio,
}

impl ProfileDescriptor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Scores recorded for one apparatus, in file order.
    pub fn events_for(&self, apparatus: Apparatus) -> &[EventScore] {
        self.events
            .get(&apparatus)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Apparatus present in the descriptor, vault → bars → beam → floor.
    pub fn apparatus(&self) -> impl Iterator<Item = Apparatus> + '_ {
        self.events.keys().copied()
    }

    pub fn sponsor(&self, name: &str) -> Option<&Sponsor> {
        self.sponsors.iter().find(|sponsor| sponsor.name == name)
    }

    pub fn quick_fact(&self, label: &str) -> Option<&str> {
        self.bio
            .quick_facts
            .iter()
            .find(|fact| fact.label == label)
            .map(|fact| fact.value.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fundraising {
    pub raised: f64,
    pub goal: f64,
    pub subtitle: String,
    pub donate_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

/// Gymnastics event category. Declaration order is display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Apparatus {
    Vault,
    Bars,
    Beam,
    Floor,
}

impl Apparatus {
    pub const ALL: [Apparatus; 4] = [
        Apparatus::Vault,
        Apparatus::Bars,
        Apparatus::Beam,
        Apparatus::Floor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Apparatus::Vault => "vault",
            Apparatus::Bars => "bars",
            Apparatus::Beam => "beam",
            Apparatus::Floor => "floor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Apparatus::Vault => "Vault",
            Apparatus::Bars => "Bars",
            Apparatus::Beam => "Beam",
            Apparatus::Floor => "Floor",
        }
    }
}

impl fmt::Display for Apparatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventScore {
    pub meet: String,
    pub date: NaiveDate,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sponsor {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub blurb: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bio {
    pub photo: String,
    pub story: String,
    pub quick_facts: Vec<QuickFact>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickFact {
    pub label: String,
    pub value: String,
}
