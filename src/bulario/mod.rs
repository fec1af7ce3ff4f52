//! Static drug information lookup (bulário).
//!
//! Answers `get_bula_info` actions without touching the network. Matching is
//! accent- and case-insensitive and accepts prefixes of a catalog name, so
//! "losart" and "LOSARTANA" both resolve to the same monograph. Every
//! outcome, including misses, is a user-facing pt-BR message.

mod catalog;

pub use catalog::{Monograph, CATALOG};

/// Monograph fields addressable through an action's `info_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulaField {
    Class,
    Dosing,
    Indications,
    AdverseEffects,
    Contraindications,
    Mechanism,
    Interactions,
}

impl BulaField {
    /// Map a normalized query term to a field. The accepted vocabulary is
    /// the one the model is instructed to emit.
    fn from_key(normalized_key: &str) -> Option<Self> {
        match normalized_key {
            "classe terapeutica" => Some(Self::Class),
            "posologia" => Some(Self::Dosing),
            "indicacoes" => Some(Self::Indications),
            "efeitos colaterais" => Some(Self::AdverseEffects),
            "contraindicacoes" => Some(Self::Contraindications),
            "mecanismo de acao" => Some(Self::Mechanism),
            "interacoes medicamentosas" => Some(Self::Interactions),
            _ => None,
        }
    }

    /// Display label, as printed in replies.
    fn label(&self) -> &'static str {
        match self {
            Self::Class => "Classe Farmacológica",
            Self::Dosing => "Posologia",
            Self::Indications => "Indicações",
            Self::AdverseEffects => "Efeitos Colaterais",
            Self::Contraindications => "Contraindicações",
            Self::Mechanism => "Mecanismo de Ação",
            Self::Interactions => "Interações Medicamentosas",
        }
    }

    fn value(&self, monograph: &Monograph) -> &'static str {
        match self {
            Self::Class => monograph.class,
            Self::Dosing => monograph.dosing,
            Self::Indications => monograph.indications,
            Self::AdverseEffects => monograph.adverse_effects,
            Self::Contraindications => monograph.contraindications,
            Self::Mechanism => monograph.mechanism,
            Self::Interactions => monograph.interactions,
        }
    }
}

/// Lowercase and strip the Portuguese diacritics that show up in drug
/// names and query terms, so "Ê" and "e" compare equal.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

fn find(query: &str) -> Option<&'static Monograph> {
    let needle = normalize(query);
    CATALOG
        .iter()
        .find(|monograph| normalize(monograph.name).contains(&needle))
}

/// Fields included in a full report, in presentation order. Warnings are
/// left out to keep the reply readable on a phone screen.
const FULL_REPORT_FIELDS: &[BulaField] = &[
    BulaField::Class,
    BulaField::Mechanism,
    BulaField::Indications,
    BulaField::Dosing,
    BulaField::Contraindications,
    BulaField::AdverseEffects,
    BulaField::Interactions,
];

fn full_report(monograph: &Monograph) -> String {
    let mut reply = format!("Informações completas sobre **{}**:\n\n", monograph.name);
    reply.push_str(&format!(
        "* **Princípio(s) Ativo(s):** {}\n",
        monograph.active_ingredients.join(", ")
    ));
    for field in FULL_REPORT_FIELDS {
        reply.push_str(&format!(
            "* **{}:** {}\n",
            field.label(),
            field.value(monograph)
        ));
    }
    reply
}

/// Resolve a drug query plus an information type into a reply.
pub fn lookup(drug_query: &str, info_type: &str) -> String {
    let Some(monograph) = find(drug_query) else {
        return format!(
            "Não encontrei informações sobre o medicamento '{drug_query}' em nossa base de dados."
        );
    };

    if normalize(info_type) == "tudo" {
        return full_report(monograph);
    }

    let Some(field) = BulaField::from_key(&normalize(info_type)) else {
        return format!(
            "Não tenho a informação específica sobre '{info_type}' para o medicamento '{}'. \
             Por favor, tente termos como 'classe terapeutica', 'posologia', 'indicacoes', \
             'efeitos colaterais', 'contraindicacoes', 'mecanismo de acao', \
             'interacoes medicamentosas' ou 'tudo'.",
            monograph.name
        );
    };

    let value = field.value(monograph);
    if value.is_empty() {
        return format!(
            "Não encontrei a informação de '{}' para o medicamento '{}'.",
            field.label(),
            monograph.name
        );
    }

    format!(
        "* **{}** do medicamento **{}**: {}",
        field.label(),
        monograph.name,
        value
    )
}
