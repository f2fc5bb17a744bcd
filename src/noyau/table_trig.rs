// src/noyau/table_trig.rs
//
// Table trigonométrique exacte (formes closes)
// --------------------------------------------
// sin : 0, π/12, π/6, π/4, π/3, 5π/12, π/2
// tan : 0, π/12, π/6, π/4, π/3, 5π/12      (π/2 : singularité)
// arcsin / arctan : tables inverses déduites des tables directes.
//
// Construite une seule fois par processus (OnceLock) ; lecture seule ensuite.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::angle::CleAngle;
use super::somme::Somme;
use super::terme::Terme;

pub struct TableTrig {
    sin: BTreeMap<CleAngle, Somme>,
    tan: BTreeMap<CleAngle, Somme>,
    arcsin: BTreeMap<Somme, Somme>,
    arctan: BTreeMap<Somme, Somme>,
}

static TABLE: OnceLock<TableTrig> = OnceLock::new();

/// (n/d)·√r
fn r(n: i64, d: i64, radical: u64) -> Terme {
    Terme::fraction(n, d).multiplier(&Terme::racine(radical))
}

fn somme(termes: &[Terme]) -> Somme {
    Somme::depuis_termes(termes.iter().cloned())
}

fn inverse_de(directe: &BTreeMap<CleAngle, Somme>) -> BTreeMap<Somme, Somme> {
    directe
        .iter()
        .map(|(cle, valeur)| (valeur.clone(), Somme::monome(cle.en_terme())))
        .collect()
}

impl TableTrig {
    /// Instance partagée, construite au premier appel.
    pub fn globale() -> &'static TableTrig {
        TABLE.get_or_init(TableTrig::construire)
    }

    pub(crate) fn construire() -> TableTrig {
        let a = CleAngle::depuis_i64;

        let mut sin = BTreeMap::new();
        sin.insert(a(0, 1), Somme::zero());
        sin.insert(a(1, 12), somme(&[r(1, 4, 6), r(-1, 4, 2)]));
        sin.insert(a(1, 6), somme(&[Terme::fraction(1, 2)]));
        sin.insert(a(1, 4), somme(&[r(1, 2, 2)]));
        sin.insert(a(1, 3), somme(&[r(1, 2, 3)]));
        sin.insert(a(5, 12), somme(&[r(1, 4, 6), r(1, 4, 2)]));
        sin.insert(a(1, 2), Somme::un());

        let mut tan = BTreeMap::new();
        tan.insert(a(0, 1), Somme::zero());
        tan.insert(a(1, 12), somme(&[Terme::entier(2), r(-1, 1, 3)]));
        tan.insert(a(1, 6), somme(&[r(1, 3, 3)]));
        tan.insert(a(1, 4), Somme::un());
        tan.insert(a(1, 3), somme(&[Terme::racine(3)]));
        tan.insert(a(5, 12), somme(&[Terme::entier(2), Terme::racine(3)]));

        let arcsin = inverse_de(&sin);
        let arctan = inverse_de(&tan);

        log::debug!(
            "table trigonométrique construite : {} sin, {} tan, {} arcsin, {} arctan",
            sin.len(),
            tan.len(),
            arcsin.len(),
            arctan.len()
        );

        TableTrig {
            sin,
            tan,
            arcsin,
            arctan,
        }
    }

    pub fn sin(&self, cle: &CleAngle) -> Option<&Somme> {
        self.sin.get(cle)
    }

    pub fn tan(&self, cle: &CleAngle) -> Option<&Somme> {
        self.tan.get(cle)
    }

    pub fn arcsin(&self, valeur: &Somme) -> Option<&Somme> {
        self.arcsin.get(valeur)
    }

    pub fn arctan(&self, valeur: &Somme) -> Option<&Somme> {
        self.arctan.get(valeur)
    }

    pub fn angles_sin(&self) -> impl Iterator<Item = (&CleAngle, &Somme)> {
        self.sin.iter()
    }

    pub fn angles_tan(&self) -> impl Iterator<Item = (&CleAngle, &Somme)> {
        self.tan.iter()
    }
}
