// src/noyau/division.rs
//
// Division de sommes : chaîne ordonnée de cas étroits
// ---------------------------------------------------
// 1) diviseur monôme        : division terme à terme (toujours exacte)
// 2) diviseur numérique     : conjugaisons successives jusqu’à un seul terme
// 3) heuristique A          : sommes proportionnelles (quotient monôme)
// 4) heuristique B          : différence de carrés (quotient = conjugué × k)
//
// Aucun cas ne fait de division polynomiale générale : hors de ces formes,
// l’appelant reçoit FormeNonSupportee.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use super::erreur::{ErreurCalcul, Resultat};
use super::somme::Somme;
use super::terme::{plus_petit_facteur, Terme};

/// Reconnaît une forme (dividende, diviseur) et rend le quotient exact.
pub(crate) type Appariement = fn(&Somme, &Somme) -> Option<Somme>;

/// Ordre d’essai des heuristiques symboliques.
pub(crate) const HEURISTIQUES: [(&str, Appariement); 2] = [
    ("proportionnalité", heuristique_proportion),
    ("différence de carrés", heuristique_conjugue),
];

/* ------------------------ Cas directs ------------------------ */

pub(crate) fn diviser_par_monome(dividende: &Somme, diviseur: &Terme) -> Resultat<Somme> {
    let mut q = Somme::zero();
    for t in dividende {
        q.ajouter_terme(t.diviser(diviseur)?);
    }
    q.retirer_zeros();
    Ok(q)
}

/// Diviseur sans symbole : on multiplie haut et bas par un conjugué qui fait
/// disparaître un facteur premier p des radicaux (A + √p·B)(A - √p·B) = A² - p·B².
/// Chaque tour retire p de tous les radicaux : le nombre de tours est fini.
pub(crate) fn rationaliser(
    dividende: &Somme,
    diviseur: &Somme,
    profondeur_max: usize,
) -> Resultat<Somme> {
    let mut num = dividende.clone();
    let mut den = diviseur.clone();

    for tour in 0..=profondeur_max {
        if let Some(t) = den.seul_terme() {
            return diviser_par_monome(&num, t);
        }
        if den.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        if tour == profondeur_max {
            break;
        }

        let Some(p) = premier_des_radicaux(&den) else {
            break;
        };
        let conjugue = conjugue_selon(&den, &p);
        log::trace!("rationalisation : tour {tour}, conjugué selon √{p}");
        num = Somme::produit(&num, &conjugue);
        den = Somme::produit(&den, &conjugue);
    }

    Err(ErreurCalcul::non_supportee(format!(
        "({dividende})/({diviseur}) : rationalisation trop profonde"
    )))
}

fn premier_des_radicaux(s: &Somme) -> Option<BigInt> {
    s.iter()
        .map(Terme::radical)
        .find(|r| !r.is_one())
        .map(plus_petit_facteur)
}

/// Oppose les termes dont le radical contient p.
fn conjugue_selon(s: &Somme, p: &BigInt) -> Somme {
    s.iter()
        .map(|t| {
            if t.radical().is_multiple_of(p) {
                t.oppose()
            } else {
                t.clone()
            }
        })
        .collect()
}

/* ------------------------ Heuristique A ------------------------ */

/// Dividende = k × diviseur terme à terme (k monôme) => quotient 1/k.
///
/// L’ancre est le premier terme du dividende ; chaque terme du diviseur est essayé
/// comme image de l’ancre.
pub(crate) fn heuristique_proportion(dividende: &Somme, diviseur: &Somme) -> Option<Somme> {
    let f1 = dividende.termes();
    let f2 = diviseur.termes();
    if f1.is_empty() || f1.len() != f2.len() {
        return None;
    }

    for image in f2 {
        let k = image.diviser(&f1[0]).ok()?;
        if correspondance(&k, f1, f2) {
            return k.inverse().ok().map(Somme::monome);
        }
    }
    None
}

/// Chaque k·t (t du dividende) doit tomber sur un terme du diviseur non encore pris.
fn correspondance(k: &Terme, f1: &[Terme], f2: &[Terme]) -> bool {
    let mut pris = vec![false; f2.len()];
    for t in f1 {
        let image = k.multiplier(t);
        match (0..f2.len()).find(|&j| !pris[j] && f2[j] == image) {
            Some(j) => pris[j] = true,
            None => return false,
        }
    }
    true
}

/* ------------------------ Heuristique B ------------------------ */

/// (u² - v²)/(u + v) = u - v, à facteurs communs près.
pub(crate) fn heuristique_conjugue(dividende: &Somme, diviseur: &Somme) -> Option<Somme> {
    if dividende.nombre_termes() != 2 || diviseur.nombre_termes() != 2 {
        return None;
    }
    let (g1, p1) = Terme::pgcd_et_divise(dividende.termes());
    let (g2, mut p2) = Terme::pgcd_et_divise(diviseur.termes());

    if p1[0].est_negatif() == p1[1].est_negatif() {
        return None;
    }
    let k = g1.diviser(&g2).ok()?;

    let carres = [p2[0].carre(), p2[1].carre()];
    let a_changer = if carres[0].egal_en_valeur_absolue(&p1[0])
        && carres[1].egal_en_valeur_absolue(&p1[1])
    {
        if p1[0].est_positif() {
            1
        } else {
            0
        }
    } else if carres[0].egal_en_valeur_absolue(&p1[1])
        && carres[1].egal_en_valeur_absolue(&p1[0])
    {
        if p1[0].est_positif() {
            0
        } else {
            1
        }
    } else {
        return None;
    };

    p2[a_changer] = p2[a_changer].oppose();
    Some(p2.iter().map(|t| k.multiplier(t)).collect())
}
