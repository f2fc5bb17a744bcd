//! Noyau exact : sommes de termes + trigonométrie en formes closes
//!
//! Organisation interne :
//! - terme.rs          : monôme exact (coef rationnel, radical sans carré, symboles)
//! - somme.rs          : somme canonique (termes semblables fusionnés, ordre total)
//! - angle.rs          : clé d’angle qπ réduite + réductions sin/cos/tan/cot
//! - table_trig.rs     : table exacte construite une fois (OnceLock)
//! - division.rs       : chaîne de cas de division (monôme, conjugué, heuristiques)
//! - calculateur.rs    : calculateur symbolique complet
//! - contrat.rs        : trait `Calculateur` pour les collaborateurs
//! - simplificateur.rs : simplification par lot (pgcd commun)
//! - format.rs         : affichage EXACT “joli” (√2/2, 2π/3, x^(1/2)…)
//! - erreur.rs / reglages.rs : erreurs typées + garde-fous

pub mod angle;
pub mod calculateur;
pub mod contrat;
pub mod division;
pub mod erreur;
pub mod format;
pub mod reglages;
pub mod simplificateur;
pub mod somme;
pub mod table_trig;
pub mod terme;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique
pub use angle::CleAngle;
pub use calculateur::CalculateurSymbolique;
pub use contrat::Calculateur;
pub use erreur::{ErreurCalcul, Resultat};
pub use reglages::Reglages;
pub use simplificateur::{simplifier_lot, FacteurCommun, SimplificateurTermes};
pub use somme::Somme;
pub use table_trig::TableTrig;
pub use terme::{Terme, SYMBOLE_E, SYMBOLE_PI};
