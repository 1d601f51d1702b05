//! Distribution variant lookup by name

use crate::{
    Distribution, FrechetMax, FrechetMin, GumbelMax, GumbelMin, WeibullMax, WeibullMin,
};
use eva_core::EvaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Extreme value family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Frechet,
    Gumbel,
    Weibull,
}

/// Tag of one of the six extreme value variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionKind {
    FrechetMax,
    FrechetMin,
    GumbelMax,
    GumbelMin,
    WeibullMax,
    WeibullMin,
}

/// Canonical name of every variant
static KIND_NAMES: [(&str, DistributionKind); 6] = [
    ("frechet-max", DistributionKind::FrechetMax),
    ("frechet-min", DistributionKind::FrechetMin),
    ("gumbel-max", DistributionKind::GumbelMax),
    ("gumbel-min", DistributionKind::GumbelMin),
    ("weibull-max", DistributionKind::WeibullMax),
    ("weibull-min", DistributionKind::WeibullMin),
];

impl DistributionKind {
    pub const ALL: [DistributionKind; 6] = [
        DistributionKind::FrechetMax,
        DistributionKind::FrechetMin,
        DistributionKind::GumbelMax,
        DistributionKind::GumbelMin,
        DistributionKind::WeibullMax,
        DistributionKind::WeibullMin,
    ];

    pub fn from_family(family: Family, maximum: bool) -> Self {
        match (family, maximum) {
            (Family::Frechet, true) => DistributionKind::FrechetMax,
            (Family::Frechet, false) => DistributionKind::FrechetMin,
            (Family::Gumbel, true) => DistributionKind::GumbelMax,
            (Family::Gumbel, false) => DistributionKind::GumbelMin,
            (Family::Weibull, true) => DistributionKind::WeibullMax,
            (Family::Weibull, false) => DistributionKind::WeibullMin,
        }
    }

    pub fn family(self) -> Family {
        match self {
            DistributionKind::FrechetMax | DistributionKind::FrechetMin => Family::Frechet,
            DistributionKind::GumbelMax | DistributionKind::GumbelMin => Family::Gumbel,
            DistributionKind::WeibullMax | DistributionKind::WeibullMin => Family::Weibull,
        }
    }

    pub fn is_maximum(self) -> bool {
        matches!(
            self,
            DistributionKind::FrechetMax | DistributionKind::GumbelMax | DistributionKind::WeibullMax
        )
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            DistributionKind::FrechetMax => "Fréchet Maximum",
            DistributionKind::FrechetMin => "Fréchet Minimum",
            DistributionKind::GumbelMax => "Gumbel Maximum",
            DistributionKind::GumbelMin => "Gumbel Minimum",
            DistributionKind::WeibullMax => "Weibull Maximum",
            DistributionKind::WeibullMin => "Weibull Minimum",
        }
    }

    /// Canonical lookup name, e.g. "weibull-max"
    pub fn key(self) -> &'static str {
        match self {
            DistributionKind::FrechetMax => "frechet-max",
            DistributionKind::FrechetMin => "frechet-min",
            DistributionKind::GumbelMax => "gumbel-max",
            DistributionKind::GumbelMin => "gumbel-min",
            DistributionKind::WeibullMax => "weibull-max",
            DistributionKind::WeibullMin => "weibull-min",
        }
    }

    /// Whether the variant carries a shape parameter
    pub fn has_shape(self) -> bool {
        self.family() != Family::Gumbel
    }

    /// Fresh fit template with the location fixed
    pub fn build(self, loc: f64) -> Box<dyn Distribution> {
        match self {
            DistributionKind::FrechetMax => Box::new(FrechetMax::with_loc(loc)),
            DistributionKind::FrechetMin => Box::new(FrechetMin::with_loc(loc)),
            DistributionKind::GumbelMax => Box::new(GumbelMax::with_loc(loc)),
            DistributionKind::GumbelMin => Box::new(GumbelMin::with_loc(loc)),
            DistributionKind::WeibullMax => Box::new(WeibullMax::with_loc(loc)),
            DistributionKind::WeibullMin => Box::new(WeibullMin::with_loc(loc)),
        }
    }

    /// Canonical names similar to the given one (for error suggestions)
    pub fn similar(name: &str) -> Vec<String> {
        let query = normalize(name.trim());
        let mut ranked: Vec<(usize, &str)> = KIND_NAMES
            .iter()
            .map(|(candidate, _)| (similarity_score(&query, &normalize(candidate)), *candidate))
            .filter(|(score, _)| *score > 0)
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        ranked.into_iter().take(5).map(|(_, name)| name.to_string()).collect()
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, strip separators and accents so "Fréchet Maximum",
/// "frechet_max" and "FrechetMax" all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| if c == 'é' || c == 'É' { 'e' } else { c })
        .collect::<String>()
        .to_lowercase()
        .replace("maximum", "max")
        .replace("minimum", "min")
}

/// Score two normalized names: the shared leading run counts most, then
/// containment either way, then the overlap of their letters. Zero means
/// nothing in common.
fn similarity_score(query: &str, candidate: &str) -> usize {
    let prefix = query
        .chars()
        .zip(candidate.chars())
        .take_while(|(q, c)| q == c)
        .count();
    let contained = !query.is_empty() && (candidate.contains(query) || query.contains(candidate));
    let containment = if contained { 20 } else { 0 };
    let letters: HashSet<char> = query.chars().collect();
    let shared = candidate
        .chars()
        .collect::<HashSet<char>>()
        .intersection(&letters)
        .count();

    prefix * 10 + containment + shared * 2
}

impl FromStr for DistributionKind {
    type Err = EvaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        KIND_NAMES
            .iter()
            .find(|(name, _)| normalize(name) == wanted)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| EvaError::UnknownDistribution {
                name: s.to_string(),
                suggestions: Self::similar(s),
            })
    }
}

impl FromStr for Family {
    type Err = EvaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s.trim()).as_str() {
            "frechet" => Ok(Family::Frechet),
            "gumbel" => Ok(Family::Gumbel),
            "weibull" => Ok(Family::Weibull),
            _ => Err(EvaError::UnknownDistribution {
                name: s.to_string(),
                suggestions: vec!["weibull".to_string(), "gumbel".to_string(), "frechet".to_string()],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        for (name, kind) in KIND_NAMES.iter() {
            assert_eq!(name.parse::<DistributionKind>().unwrap(), *kind);
            assert_eq!(kind.key(), *name);
        }
    }

    #[test]
    fn test_parse_variants_of_spelling() {
        assert_eq!("WeibullMax".parse::<DistributionKind>().unwrap(), DistributionKind::WeibullMax);
        assert_eq!("weibull_min".parse::<DistributionKind>().unwrap(), DistributionKind::WeibullMin);
        assert_eq!("Fréchet Maximum".parse::<DistributionKind>().unwrap(), DistributionKind::FrechetMax);
        assert_eq!(" gumbel-MIN ".parse::<DistributionKind>().unwrap(), DistributionKind::GumbelMin);
    }

    #[test]
    fn test_display_names_round_trip() {
        for kind in DistributionKind::ALL {
            assert_eq!(kind.name().parse::<DistributionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_has_suggestions() {
        match "weibul".parse::<DistributionKind>() {
            Err(EvaError::UnknownDistribution { name, suggestions }) => {
                assert_eq!(name, "weibul");
                assert!(suggestions.iter().any(|s| s == "weibull-max"));
                assert!(suggestions.len() <= 5);
            }
            other => panic!("expected unknown distribution, got {:?}", other),
        }
    }

    #[test]
    fn test_suggestions_rank_family_first() {
        let suggestions = DistributionKind::similar("gumbl");
        assert_eq!(&suggestions[..2], &["gumbel-max".to_string(), "gumbel-min".to_string()]);
        let suggestions = DistributionKind::similar("Frechet Maxx");
        assert_eq!(suggestions[0], "frechet-max");
    }

    #[test]
    fn test_similarity_score() {
        assert_eq!(similarity_score("", "weibullmax"), 0);
        assert_eq!(similarity_score("zzz", "weibullmax"), 0);
        assert!(similarity_score("weib", "weibullmax") > similarity_score("weib", "gumbelmax"));
        // prefix 4, contained, letters w e i b
        assert_eq!(similarity_score("weib", "weibullmax"), 40 + 20 + 8);
    }

    #[test]
    fn test_keys_parse_back() {
        for kind in DistributionKind::ALL {
            assert_eq!(kind.key().parse::<DistributionKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_from_family() {
        for kind in DistributionKind::ALL {
            assert_eq!(DistributionKind::from_family(kind.family(), kind.is_maximum()), kind);
        }
        assert!(!DistributionKind::GumbelMax.has_shape());
        assert!(DistributionKind::FrechetMin.has_shape());
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("Weibull".parse::<Family>().unwrap(), Family::Weibull);
        assert_eq!("fréchet".parse::<Family>().unwrap(), Family::Frechet);
        assert!("lognormal".parse::<Family>().is_err());
    }

    #[test]
    fn test_build_keeps_loc_and_kind() {
        for kind in DistributionKind::ALL {
            let d = kind.build(3.5);
            assert_eq!(d.kind(), kind);
            assert_eq!(d.loc(), 3.5);
            assert_eq!(d.params().loc(), Some(3.5));
        }
    }
}
