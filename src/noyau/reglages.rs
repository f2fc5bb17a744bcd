//! Réglages du calculateur (garde-fous anti-gel).
//!
//! Aucun fichier, aucune variable d’environnement : des constantes par défaut,
//! modifiables par setters chaînables.

/// Exposant maximal accepté par `puissance` (multiplication répétée, coût linéaire).
pub const EXPOSANT_MAX_DEFAUT: u64 = 4096;

/// Nombre maximal de tours de conjugaison pour rendre un diviseur numérique rationnel.
pub const PROFONDEUR_RATIONALISATION_DEFAUT: usize = 16;

/// Précision maximale (en bits) pour décider exactement le signe d’une somme numérique.
pub const PRECISION_SIGNE_MAX_DEFAUT: u32 = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub exposant_max: u64,
    pub profondeur_rationalisation_max: usize,
    pub precision_signe_max: u32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            exposant_max: EXPOSANT_MAX_DEFAUT,
            profondeur_rationalisation_max: PROFONDEUR_RATIONALISATION_DEFAUT,
            precision_signe_max: PRECISION_SIGNE_MAX_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn avec_exposant_max(mut self, n: u64) -> Self {
        self.exposant_max = n;
        self
    }

    pub fn avec_profondeur_rationalisation(mut self, n: usize) -> Self {
        self.profondeur_rationalisation_max = n;
        self
    }

    /// Plancher : 32 bits.
    pub fn avec_precision_signe(mut self, bits: u32) -> Self {
        self.precision_signe_max = bits.max(32);
        self
    }
}
