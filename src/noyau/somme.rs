// src/noyau/somme.rs
//
// Somme exacte : liste de termes triée par partie littérale, sans doublon.
// -------------------------------------------------------------------------
// - vide        = 0
// - un seul "1" = 1
// - l’ordre dérivé (lexicographique sur la liste triée) sert de clé de table
//
// Copie de travail : clone() puis ajouter_terme(...) puis retirer_zeros().

use num_traits::Zero;

use super::terme::Terme;

#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Somme {
    termes: Vec<Terme>,
}

impl Somme {
    pub fn zero() -> Somme {
        Somme::default()
    }

    pub fn un() -> Somme {
        Somme::monome(Terme::un())
    }

    pub fn monome(t: Terme) -> Somme {
        Somme::depuis_termes([t])
    }

    /// Fusionne les termes semblables et retire les zéros.
    pub fn depuis_termes<I: IntoIterator<Item = Terme>>(termes: I) -> Somme {
        let mut s = Somme::zero();
        for t in termes {
            s.ajouter_terme(t);
        }
        s.retirer_zeros();
        s
    }

    /// Fusionne `t` avec le terme de même partie littérale (coefficient nul => retiré),
    /// sinon l’insère à sa place triée.
    pub fn ajouter_terme(&mut self, t: Terme) {
        match self
            .termes
            .binary_search_by(|x| x.partie().cmp(t.partie()))
        {
            Ok(i) => {
                let coef = self.termes[i].coef() + t.coef();
                if coef.is_zero() {
                    self.termes.remove(i);
                } else {
                    self.termes[i] = Terme::depuis_partie(t.partie().clone(), coef);
                }
            }
            Err(i) => self.termes.insert(i, t),
        }
    }

    pub fn retirer_zeros(&mut self) {
        self.termes.retain(|t| !t.est_nul());
    }

    /// a + b (ou a - b) : copie de a, ajout terme à terme de b, zéros retirés.
    pub fn fusion(a: &Somme, b: &Somme, soustraire: bool) -> Somme {
        let mut s = a.clone();
        for t in &b.termes {
            if soustraire {
                s.ajouter_terme(t.oppose());
            } else {
                s.ajouter_terme(t.clone());
            }
        }
        s.retirer_zeros();
        s
    }

    /// Produit croisé complet ; les produits nuls ne sont jamais insérés.
    pub(crate) fn produit(a: &Somme, b: &Somme) -> Somme {
        let mut s = Somme::zero();
        for x in &a.termes {
            for y in &b.termes {
                let p = x.multiplier(y);
                if !p.est_nul() {
                    s.ajouter_terme(p);
                }
            }
        }
        s.retirer_zeros();
        s
    }

    pub(crate) fn multiplier_terme(&self, t: &Terme) -> Somme {
        Somme::depuis_termes(self.termes.iter().map(|x| x.multiplier(t)))
    }

    pub fn oppose(&self) -> Somme {
        // la partie littérale est inchangée : l’ordre aussi
        Somme {
            termes: self.termes.iter().map(Terme::oppose).collect(),
        }
    }

    /* ------------------------ Accès ------------------------ */

    pub fn termes(&self) -> &[Terme] {
        &self.termes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Terme> {
        self.termes.iter()
    }

    pub fn nombre_termes(&self) -> usize {
        self.termes.len()
    }

    pub fn premier(&self) -> Option<&Terme> {
        self.termes.first()
    }

    pub fn est_zero(&self) -> bool {
        self.termes.is_empty()
    }

    pub fn est_un(&self) -> bool {
        matches!(self.termes.as_slice(), [t] if t.est_un())
    }

    pub fn est_monome(&self) -> bool {
        self.termes.len() == 1
    }

    /// Aucun symbole : rationnels et radicaux seulement.
    pub fn est_numerique(&self) -> bool {
        self.termes.iter().all(Terme::est_numerique)
    }

    pub fn contient_symbole(&self, nom: &str) -> bool {
        self.termes.iter().any(|t| t.exposant(nom).is_some())
    }

    /// Le terme unique, si la somme est un monôme.
    pub(crate) fn seul_terme(&self) -> Option<&Terme> {
        match self.termes.as_slice() {
            [t] => Some(t),
            _ => None,
        }
    }
}

impl From<Terme> for Somme {
    fn from(t: Terme) -> Somme {
        Somme::monome(t)
    }
}

impl FromIterator<Terme> for Somme {
    fn from_iter<I: IntoIterator<Item = Terme>>(iter: I) -> Somme {
        Somme::depuis_termes(iter)
    }
}

impl<'a> IntoIterator for &'a Somme {
    type Item = &'a Terme;
    type IntoIter = std::slice::Iter<'a, Terme>;

    fn into_iter(self) -> Self::IntoIter {
        self.termes.iter()
    }
}
