//! # Birth States — Single Source of Truth
//!
//! Defines the [`BirthState`] enum with the 32 RENAPO state codes plus the
//! [`BirthState::Foreign`] sentinel (`NE`, "nacido en el extranjero").
//! This is the single definition used by every crate in the workspace;
//! the compiler enforces exhaustive `match` wherever states are handled.
//!
//! The free-text resolver ([`resolve_state`] / [`try_resolve_state`])
//! maps what people actually type — full names, common abbreviations,
//! bare codes, accented or not — to a canonical code for CURP generation.

use serde::{Deserialize, Serialize};

use crate::normalize::strip_accents_upper;

/// A Mexican federal entity as encoded in the CURP state field.
///
/// Codes are the two-letter RENAPO assignments, which differ from both
/// ISO 3166-2 and postal conventions (Jalisco is `JC`, not `JA`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirthState {
    /// Aguascalientes (AS).
    Aguascalientes,
    /// Baja California (BC).
    BajaCalifornia,
    /// Baja California Sur (BS).
    BajaCaliforniaSur,
    /// Campeche (CC).
    Campeche,
    /// Coahuila de Zaragoza (CL).
    Coahuila,
    /// Colima (CM).
    Colima,
    /// Chiapas (CS).
    Chiapas,
    /// Chihuahua (CH).
    Chihuahua,
    /// Ciudad de México, formerly Distrito Federal (DF).
    CiudadDeMexico,
    /// Durango (DG).
    Durango,
    /// Guanajuato (GT).
    Guanajuato,
    /// Guerrero (GR).
    Guerrero,
    /// Hidalgo (HG).
    Hidalgo,
    /// Jalisco (JC).
    Jalisco,
    /// Estado de México (MC).
    EstadoDeMexico,
    /// Michoacán de Ocampo (MN).
    Michoacan,
    /// Morelos (MS).
    Morelos,
    /// Nayarit (NT).
    Nayarit,
    /// Nuevo León (NL).
    NuevoLeon,
    /// Oaxaca (OC).
    Oaxaca,
    /// Puebla (PL).
    Puebla,
    /// Querétaro (QT).
    Queretaro,
    /// Quintana Roo (QR).
    QuintanaRoo,
    /// San Luis Potosí (SP).
    SanLuisPotosi,
    /// Sinaloa (SL).
    Sinaloa,
    /// Sonora (SR).
    Sonora,
    /// Tabasco (TC).
    Tabasco,
    /// Tamaulipas (TS).
    Tamaulipas,
    /// Tlaxcala (TL).
    Tlaxcala,
    /// Veracruz de Ignacio de la Llave (VZ).
    Veracruz,
    /// Yucatán (YN).
    Yucatan,
    /// Zacatecas (ZS).
    Zacatecas,
    /// Born abroad / unknown entity (NE).
    Foreign,
}

impl BirthState {
    /// The total number of catalog entries, the foreign sentinel included.
    pub const COUNT: usize = 33;

    /// The two-letter RENAPO code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Aguascalientes => "AS",
            Self::BajaCalifornia => "BC",
            Self::BajaCaliforniaSur => "BS",
            Self::Campeche => "CC",
            Self::Coahuila => "CL",
            Self::Colima => "CM",
            Self::Chiapas => "CS",
            Self::Chihuahua => "CH",
            Self::CiudadDeMexico => "DF",
            Self::Durango => "DG",
            Self::Guanajuato => "GT",
            Self::Guerrero => "GR",
            Self::Hidalgo => "HG",
            Self::Jalisco => "JC",
            Self::EstadoDeMexico => "MC",
            Self::Michoacan => "MN",
            Self::Morelos => "MS",
            Self::Nayarit => "NT",
            Self::NuevoLeon => "NL",
            Self::Oaxaca => "OC",
            Self::Puebla => "PL",
            Self::Queretaro => "QT",
            Self::QuintanaRoo => "QR",
            Self::SanLuisPotosi => "SP",
            Self::Sinaloa => "SL",
            Self::Sonora => "SR",
            Self::Tabasco => "TC",
            Self::Tamaulipas => "TS",
            Self::Tlaxcala => "TL",
            Self::Veracruz => "VZ",
            Self::Yucatan => "YN",
            Self::Zacatecas => "ZS",
            Self::Foreign => "NE",
        }
    }

    /// The canonical entity name, uppercase and accent-free, as the
    /// resolver matches it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aguascalientes => "AGUASCALIENTES",
            Self::BajaCalifornia => "BAJA CALIFORNIA",
            Self::BajaCaliforniaSur => "BAJA CALIFORNIA SUR",
            Self::Campeche => "CAMPECHE",
            Self::Coahuila => "COAHUILA",
            Self::Colima => "COLIMA",
            Self::Chiapas => "CHIAPAS",
            Self::Chihuahua => "CHIHUAHUA",
            Self::CiudadDeMexico => "CIUDAD DE MEXICO",
            Self::Durango => "DURANGO",
            Self::Guanajuato => "GUANAJUATO",
            Self::Guerrero => "GUERRERO",
            Self::Hidalgo => "HIDALGO",
            Self::Jalisco => "JALISCO",
            Self::EstadoDeMexico => "ESTADO DE MEXICO",
            Self::Michoacan => "MICHOACAN",
            Self::Morelos => "MORELOS",
            Self::Nayarit => "NAYARIT",
            Self::NuevoLeon => "NUEVO LEON",
            Self::Oaxaca => "OAXACA",
            Self::Puebla => "PUEBLA",
            Self::Queretaro => "QUERETARO",
            Self::QuintanaRoo => "QUINTANA ROO",
            Self::SanLuisPotosi => "SAN LUIS POTOSI",
            Self::Sinaloa => "SINALOA",
            Self::Sonora => "SONORA",
            Self::Tabasco => "TABASCO",
            Self::Tamaulipas => "TAMAULIPAS",
            Self::Tlaxcala => "TLAXCALA",
            Self::Veracruz => "VERACRUZ",
            Self::Yucatan => "YUCATAN",
            Self::Zacatecas => "ZACATECAS",
            Self::Foreign => "NACIDO EN EL EXTRANJERO",
        }
    }

    /// Alternative spellings accepted by the resolver as exact matches.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::CiudadDeMexico => &["DISTRITO FEDERAL", "CDMX"],
            Self::Coahuila => &["COAHUILA DE ZARAGOZA"],
            Self::EstadoDeMexico => &["MEXICO", "EDOMEX"],
            Self::Michoacan => &["MICHOACAN DE OCAMPO"],
            Self::Veracruz => &["VERACRUZ DE IGNACIO DE LA LLAVE"],
            Self::Foreign => &["EXTRANJERO", "NO ESPECIFICADO"],
            _ => &[],
        }
    }

    /// Return all catalog entries as a slice, in catalog order.
    ///
    /// Catalog order is the tie-break for substring resolution, so it is
    /// part of the resolver contract.
    pub fn all() -> &'static [BirthState] {
        &[
            Self::Aguascalientes,
            Self::BajaCalifornia,
            Self::BajaCaliforniaSur,
            Self::Campeche,
            Self::Coahuila,
            Self::Colima,
            Self::Chiapas,
            Self::Chihuahua,
            Self::CiudadDeMexico,
            Self::Durango,
            Self::Guanajuato,
            Self::Guerrero,
            Self::Hidalgo,
            Self::Jalisco,
            Self::EstadoDeMexico,
            Self::Michoacan,
            Self::Morelos,
            Self::Nayarit,
            Self::NuevoLeon,
            Self::Oaxaca,
            Self::Puebla,
            Self::Queretaro,
            Self::QuintanaRoo,
            Self::SanLuisPotosi,
            Self::Sinaloa,
            Self::Sonora,
            Self::Tabasco,
            Self::Tamaulipas,
            Self::Tlaxcala,
            Self::Veracruz,
            Self::Yucatan,
            Self::Zacatecas,
            Self::Foreign,
        ]
    }
}

impl std::fmt::Display for BirthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for BirthState {
    type Err = crate::error::ValidationError;

    /// Parse a two-letter RENAPO code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        BirthState::all()
            .iter()
            .copied()
            .find(|state| state.code() == upper)
            .ok_or(crate::error::ValidationError::InvalidComponent {
                component: "state code",
                reason: format!("\"{s}\" is not a RENAPO state code"),
            })
    }
}

impl Serialize for BirthState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for BirthState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolve free-form state input to a catalog entry, or `None`.
///
/// Matching is accent- and case-insensitive, with this precedence:
/// 1. exact match on the canonical name or an alias;
/// 2. substring match — a catalog name contained in the query, then the
///    query contained in a catalog name; first catalog-order hit wins;
/// 3. exact match on the two-letter code.
///
/// `None` means nothing matched; [`resolve_state`] layers the foreign
/// fallback on top so callers that want to log the miss can.
pub fn try_resolve_state(query: &str) -> Option<BirthState> {
    let folded = strip_accents_upper(query.trim());
    if folded.is_empty() {
        return None;
    }

    for state in BirthState::all() {
        if state.name() == folded || state.aliases().contains(&folded.as_str()) {
            return Some(*state);
        }
    }

    // Substring passes run over full names only; two-letter codes would
    // produce spurious hits inside longer queries.
    if folded.len() > 2 {
        for state in BirthState::all() {
            if folded.contains(state.name()) {
                return Some(*state);
            }
        }
        for state in BirthState::all() {
            if state.name().contains(&folded) {
                return Some(*state);
            }
        }
    }

    BirthState::all()
        .iter()
        .copied()
        .find(|state| state.code() == folded)
}

/// Resolve free-form state input, falling back to [`BirthState::Foreign`].
///
/// The fallback is logged at `warn` — a miss usually means a typo on the
/// caller's side rather than an actual foreign birth.
pub fn resolve_state(query: &str) -> BirthState {
    try_resolve_state(query).unwrap_or_else(|| {
        tracing::warn!(
            query = %query,
            "state did not resolve to a catalog entry — falling back to NE"
        );
        BirthState::Foreign
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete() {
        assert_eq!(BirthState::all().len(), BirthState::COUNT);
    }

    #[test]
    fn codes_are_unique_two_letter() {
        let mut codes: Vec<&str> = BirthState::all().iter().map(|s| s.code()).collect();
        assert!(codes.iter().all(|c| c.len() == 2));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), BirthState::COUNT);
    }

    #[test]
    fn display_is_code() {
        assert_eq!(BirthState::Jalisco.to_string(), "JC");
        assert_eq!(BirthState::Foreign.to_string(), "NE");
    }

    #[test]
    fn from_str_roundtrip() {
        for state in BirthState::all() {
            let parsed: BirthState = state.code().parse().expect("every code parses");
            assert_eq!(parsed, *state);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("XX".parse::<BirthState>().is_err());
        assert!("".parse::<BirthState>().is_err());
    }

    #[test]
    fn serde_as_code() {
        let json = serde_json::to_string(&BirthState::NuevoLeon).expect("serialize");
        assert_eq!(json, "\"NL\"");
        let back: BirthState = serde_json::from_str("\"NL\"").expect("deserialize");
        assert_eq!(back, BirthState::NuevoLeon);
        assert!(serde_json::from_str::<BirthState>("\"ZZ\"").is_err());
    }

    // -- resolver precedence --

    #[test]
    fn exact_name_match() {
        assert_eq!(try_resolve_state("Jalisco"), Some(BirthState::Jalisco));
        assert_eq!(try_resolve_state("JALISCO"), Some(BirthState::Jalisco));
        assert_eq!(
            try_resolve_state("Michoacán"),
            Some(BirthState::Michoacan)
        );
    }

    #[test]
    fn alias_match() {
        assert_eq!(
            try_resolve_state("Distrito Federal"),
            Some(BirthState::CiudadDeMexico)
        );
        assert_eq!(
            try_resolve_state("CDMX"),
            Some(BirthState::CiudadDeMexico)
        );
        assert_eq!(
            try_resolve_state("México"),
            Some(BirthState::EstadoDeMexico)
        );
    }

    #[test]
    fn substring_match() {
        assert_eq!(
            try_resolve_state("Estado libre de Jalisco"),
            Some(BirthState::Jalisco)
        );
        assert_eq!(
            try_resolve_state("Quintana"),
            Some(BirthState::QuintanaRoo)
        );
    }

    #[test]
    fn substring_prefers_catalog_order() {
        // "BAJA CALIFORNIA" precedes "BAJA CALIFORNIA SUR" in the catalog,
        // and the query contains both names' common prefix as a full name.
        assert_eq!(
            try_resolve_state("nacido en baja california sur"),
            Some(BirthState::BajaCalifornia)
        );
        // An exact name still beats the substring pass.
        assert_eq!(
            try_resolve_state("baja california sur"),
            Some(BirthState::BajaCaliforniaSur)
        );
    }

    #[test]
    fn bare_code_passes_through() {
        assert_eq!(try_resolve_state("JC"), Some(BirthState::Jalisco));
        assert_eq!(try_resolve_state("ne"), Some(BirthState::Foreign));
    }

    #[test]
    fn unknown_yields_none_or_foreign() {
        assert_eq!(try_resolve_state("Atlantis"), None);
        assert_eq!(try_resolve_state(""), None);
        assert_eq!(resolve_state("Atlantis"), BirthState::Foreign);
    }
}
