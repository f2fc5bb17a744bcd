// src/noyau/erreur.rs
//
// Taxonomie des échecs du calculateur exact.
// - FormeNonSupportee : le résultat exact existe peut-être, mais pas dans notre vocabulaire
// - Indefini          : vraie singularité (tan(π/2), cot(0), 0^0)
// - HorsDomaine       : argument hors domaine (arcsin(2), √(-2))
// - DivisionParZero   : diviseur nul
//
// Tous terminaux : le noyau ne réessaie jamais (sauf replis documentés : chaîne de
// division, arcsin/arctan avec l’opposé).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("forme close non supportée : {0}")]
    FormeNonSupportee(String),

    #[error("indéfini : {0}")]
    Indefini(String),

    #[error("argument hors domaine : {0}")]
    HorsDomaine(String),

    #[error("division par zéro")]
    DivisionParZero,
}

pub type Resultat<T> = Result<T, ErreurCalcul>;

impl ErreurCalcul {
    pub(crate) fn non_supportee(msg: impl Into<String>) -> Self {
        ErreurCalcul::FormeNonSupportee(msg.into())
    }

    pub(crate) fn indefini(msg: impl Into<String>) -> Self {
        ErreurCalcul::Indefini(msg.into())
    }

    pub(crate) fn hors_domaine(msg: impl Into<String>) -> Self {
        ErreurCalcul::HorsDomaine(msg.into())
    }

    /// Vrai pour une limite de représentation (un autre moteur pourrait réussir).
    pub fn est_non_supportee(&self) -> bool {
        matches!(self, ErreurCalcul::FormeNonSupportee(_))
    }
}
