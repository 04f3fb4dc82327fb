use serde::{Deserialize, Serialize};

use super::language::Language;

/// The 7 fixed disposal categories every waste item sorts into.
///
/// This enumeration is load-bearing: the item catalog, the session state
/// machine, and the persisted tables all key on its string form. Do not
/// extend it without migrating all dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BinId {
    Residual,
    Paper,
    Bio,
    Plastic,
    Glass,
    Hazardous,
    Bulky,
}

string_enum!(BinId {
    Residual => "residual",
    Paper => "paper",
    Bio => "bio",
    Plastic => "plastic",
    Glass => "glass",
    Hazardous => "hazardous",
    Bulky => "bulky",
});

impl BinId {
    pub const ALL: [BinId; 7] = [
        BinId::Residual,
        BinId::Paper,
        BinId::Bio,
        BinId::Plastic,
        BinId::Glass,
        BinId::Hazardous,
        BinId::Bulky,
    ];
}

/// One entry of the static bin catalog: id, bilingual display name, and the
/// color the UI paints the bin with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
    pub id: BinId,
    pub name_en: &'static str,
    pub name_de: &'static str,
    pub color: &'static str,
}

const CATALOG: [Bin; 7] = [
    Bin {
        id: BinId::Residual,
        name_en: "Residual Waste",
        name_de: "Restmüll",
        color: "#4b5563",
    },
    Bin {
        id: BinId::Paper,
        name_en: "Paper",
        name_de: "Papier",
        color: "#2563eb",
    },
    Bin {
        id: BinId::Bio,
        name_en: "Organic Waste",
        name_de: "Biomüll",
        color: "#92400e",
    },
    Bin {
        id: BinId::Plastic,
        name_en: "Plastic & Packaging",
        name_de: "Verpackungen",
        color: "#eab308",
    },
    Bin {
        id: BinId::Glass,
        name_en: "Glass",
        name_de: "Glas",
        color: "#16a34a",
    },
    Bin {
        id: BinId::Hazardous,
        name_en: "Hazardous Waste",
        name_de: "Sondermüll",
        color: "#dc2626",
    },
    Bin {
        id: BinId::Bulky,
        name_en: "Bulky Waste",
        name_de: "Sperrmüll",
        color: "#7c3aed",
    },
];

impl Bin {
    /// The process-wide constant catalog, in display order.
    pub fn catalog() -> &'static [Bin; 7] {
        &CATALOG
    }

    /// Look up a catalog entry by id.
    pub fn get(id: BinId) -> &'static Bin {
        &CATALOG[id as usize]
    }

    /// Display-only stand-in when no bin was chosen (timeout resolution).
    pub fn fallback() -> &'static Bin {
        &CATALOG[0]
    }

    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.name_en,
            Language::De => self.name_de,
        }
    }
}
