// src/noyau/simplificateur.rs
//
// Simplification par lot : toutes les sommes sont aplaties en une seule liste de termes
// (avec leurs bornes), simplifiées ensemble, puis reconstruites dans le même découpage.
// Cas d’usage : réduire des coefficients proportionnels (a·x + b·y = c) par leur pgcd.

use super::erreur::{ErreurCalcul, Resultat};
use super::somme::Somme;
use super::terme::Terme;

pub trait SimplificateurTermes {
    /// Doit rendre exactement autant de termes qu’il en reçoit.
    fn simplifier(&self, termes: Vec<Terme>) -> Vec<Terme>;
}

/// Divise chaque terme par le pgcd commun de la liste.
#[derive(Clone, Copy, Debug, Default)]
pub struct FacteurCommun;

impl SimplificateurTermes for FacteurCommun {
    fn simplifier(&self, termes: Vec<Terme>) -> Vec<Terme> {
        let (_, divises) = Terme::pgcd_et_divise(&termes);
        divises
    }
}

pub fn simplifier_lot<S: SimplificateurTermes + ?Sized>(
    sommes: &[Somme],
    simplificateur: &S,
) -> Resultat<Vec<Somme>> {
    let mut bornes = Vec::with_capacity(sommes.len());
    let mut plats = Vec::new();
    for s in sommes {
        plats.extend(s.iter().cloned());
        bornes.push(plats.len());
    }

    let attendu = plats.len();
    let simplifies = simplificateur.simplifier(plats);
    if simplifies.len() != attendu {
        return Err(ErreurCalcul::non_supportee(format!(
            "simplificateur : {} termes rendus pour {attendu}",
            simplifies.len()
        )));
    }

    let mut it = simplifies.into_iter();
    let mut debut = 0;
    let mut out = Vec::with_capacity(sommes.len());
    for fin in bornes {
        out.push(it.by_ref().take(fin - debut).collect::<Somme>());
        debut = fin;
    }
    Ok(out)
}
