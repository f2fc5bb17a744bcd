// src/noyau/terme.rs
//
// Terme exact (monôme) : coef · √radical · Π symbole^exposant
// -------------------------------------------------------------
// - coef     : rationnel exact signé (réduit par num_rational)
// - radical  : entier > 0 sans facteur carré (1 = pas de racine)
// - symboles : table triée nom -> exposant rationnel (jamais d’exposant nul)
//
// IMMUABLE : chaque opération rend un nouveau terme.
// Le terme nul est unique : coef 0, radical 1, aucun symbole.

use std::collections::{BTreeMap, BTreeSet};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::{ErreurCalcul, Resultat};

/// Symbole réservé à π.
pub const SYMBOLE_PI: &str = "π";

/// Symbole réservé à la constante d’Euler.
pub const SYMBOLE_E: &str = "e";

/// Partie littérale d’un terme : √radical · Π symbole^exposant.
///
/// Deux termes sont semblables (fusionnables dans une somme) ssi leurs parties sont égales.
/// L’ordre dérivé place les termes purement numériques (aucun symbole) en tête.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Partie {
    symboles: BTreeMap<String, BigRational>,
    radical: BigInt,
}

impl Partie {
    fn vide() -> Self {
        Partie {
            symboles: BTreeMap::new(),
            radical: BigInt::one(),
        }
    }

    pub fn symboles(&self) -> &BTreeMap<String, BigRational> {
        &self.symboles
    }

    pub fn radical(&self) -> &BigInt {
        &self.radical
    }

    pub fn est_vide(&self) -> bool {
        self.symboles.is_empty() && self.radical.is_one()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Terme {
    partie: Partie,
    coef: BigRational,
}

/* ------------------------ Construction ------------------------ */

impl Terme {
    pub fn zero() -> Terme {
        Terme {
            partie: Partie::vide(),
            coef: BigRational::zero(),
        }
    }

    pub fn un() -> Terme {
        Terme::rationnel(BigRational::one())
    }

    pub fn entier(n: i64) -> Terme {
        Terme::rationnel(BigRational::from_integer(BigInt::from(n)))
    }

    pub fn rationnel(r: BigRational) -> Terme {
        normalise(r, BigInt::one(), BTreeMap::new())
    }

    /// n/d.
    ///
    /// # Panics
    ///
    /// Si `d == 0`.
    pub fn fraction(n: i64, d: i64) -> Terme {
        Terme::rationnel(BigRational::new(BigInt::from(n), BigInt::from(d)))
    }

    /// √n, avec extraction des carrés parfaits (√12 -> 2√3).
    pub fn racine(n: u64) -> Terme {
        normalise(BigRational::one(), BigInt::from(n), BTreeMap::new())
    }

    pub fn symbole(nom: &str) -> Terme {
        Terme::puissance_symbole(nom, BigRational::one())
    }

    pub fn puissance_symbole(nom: &str, exposant: BigRational) -> Terme {
        let mut symboles = BTreeMap::new();
        symboles.insert(nom.to_string(), exposant);
        normalise(BigRational::one(), BigInt::one(), symboles)
    }

    pub fn pi() -> Terme {
        Terme::symbole(SYMBOLE_PI)
    }

    pub fn e() -> Terme {
        Terme::symbole(SYMBOLE_E)
    }

    /// (n/d)·π.
    ///
    /// # Panics
    ///
    /// Si `d == 0`.
    pub fn multiple_pi(n: i64, d: i64) -> Terme {
        Terme::fraction(n, d).multiplier(&Terme::pi())
    }

    /// Constructeur général (pour un analyseur externe).
    /// Le radical doit être ≥ 0 : √(négatif) sort du domaine réel.
    pub fn nouveau(
        coef: BigRational,
        radical: BigInt,
        symboles: BTreeMap<String, BigRational>,
    ) -> Resultat<Terme> {
        if radical.is_negative() {
            return Err(ErreurCalcul::hors_domaine(format!("√({radical})")));
        }
        Ok(normalise(coef, radical, symboles))
    }

    pub(crate) fn depuis_partie(partie: Partie, coef: BigRational) -> Terme {
        if coef.is_zero() {
            return Terme::zero();
        }
        Terme { partie, coef }
    }
}

/// Point de passage unique : garantit les invariants (zéro canonique, radical sans carré,
/// aucun exposant nul).
fn normalise(
    coef: BigRational,
    radical: BigInt,
    symboles: BTreeMap<String, BigRational>,
) -> Terme {
    if coef.is_zero() || radical.is_zero() {
        return Terme::zero();
    }
    let (s, t) = extrait_carre_parfait(&radical.abs());
    assemble(coef * BigRational::from_integer(s), t, symboles)
}

/// Comme `normalise`, pour un radical déjà sans facteur carré.
fn assemble(
    coef: BigRational,
    radical: BigInt,
    mut symboles: BTreeMap<String, BigRational>,
) -> Terme {
    if coef.is_zero() {
        return Terme::zero();
    }
    symboles.retain(|_, e| !e.is_zero());
    Terme {
        partie: Partie { symboles, radical },
        coef,
    }
}

/* ------------------------ Accès ------------------------ */

impl Terme {
    pub fn coef(&self) -> &BigRational {
        &self.coef
    }

    pub fn radical(&self) -> &BigInt {
        &self.partie.radical
    }

    pub fn symboles(&self) -> &BTreeMap<String, BigRational> {
        &self.partie.symboles
    }

    pub fn partie(&self) -> &Partie {
        &self.partie
    }

    pub fn exposant(&self, nom: &str) -> Option<&BigRational> {
        self.partie.symboles.get(nom)
    }

    pub fn est_nul(&self) -> bool {
        self.coef.is_zero()
    }

    pub fn est_un(&self) -> bool {
        self.coef.is_one() && self.partie.est_vide()
    }

    pub fn est_negatif(&self) -> bool {
        self.coef.is_negative()
    }

    pub fn est_positif(&self) -> bool {
        self.coef.is_positive()
    }

    /// -1, 0 ou 1.
    pub fn signum(&self) -> i8 {
        if self.coef.is_negative() {
            -1
        } else if self.coef.is_zero() {
            0
        } else {
            1
        }
    }

    /// Aucun symbole (rationnel éventuellement multiplié par un radical).
    pub fn est_numerique(&self) -> bool {
        self.partie.symboles.is_empty()
    }

    /// Aucun symbole, aucun radical.
    pub fn est_rationnel(&self) -> bool {
        self.partie.est_vide()
    }

    /// Égalité au signe près (utilisée par les heuristiques de division).
    pub fn egal_en_valeur_absolue(&self, autre: &Terme) -> bool {
        self.partie == autre.partie && self.coef.abs() == autre.coef.abs()
    }

    /// Si le terme est exactement q·π, rend q.
    pub fn multiple_de_pi(&self) -> Option<&BigRational> {
        let pi_seul = self.partie.radical.is_one()
            && self.partie.symboles.len() == 1
            && self
                .partie
                .symboles
                .get(SYMBOLE_PI)
                .is_some_and(|e| e.is_one());
        pi_seul.then_some(&self.coef)
    }

    pub fn sans_symbole(&self, nom: &str) -> Terme {
        let mut symboles = self.partie.symboles.clone();
        symboles.remove(nom);
        assemble(self.coef.clone(), self.partie.radical.clone(), symboles)
    }
}

/* ------------------------ Arithmétique ------------------------ */

impl Terme {
    pub fn oppose(&self) -> Terme {
        Terme {
            partie: self.partie.clone(),
            coef: -self.coef.clone(),
        }
    }

    /// Coefficient en valeur absolue (la partie littérale est inchangée).
    pub fn valeur_absolue(&self) -> Terme {
        if self.est_negatif() {
            self.oppose()
        } else {
            self.clone()
        }
    }

    pub fn multiplier(&self, autre: &Terme) -> Terme {
        if self.est_nul() || autre.est_nul() {
            return Terme::zero();
        }
        let mut symboles = self.partie.symboles.clone();
        for (nom, e) in &autre.partie.symboles {
            *symboles.entry(nom.clone()).or_insert_with(BigRational::zero) += e.clone();
        }
        // √a·√b = g·√((a/g)(b/g)) avec g = pgcd(a, b) : reste sans carré, sans factoriser
        let (a, b) = (&self.partie.radical, &autre.partie.radical);
        let g = a.gcd(b);
        let radical = (a / &g) * (b / &g);
        assemble(
            &self.coef * &autre.coef * BigRational::from_integer(g),
            radical,
            symboles,
        )
    }

    pub fn multiplier_rationnel(&self, r: &BigRational) -> Terme {
        if r.is_zero() {
            return Terme::zero();
        }
        Terme::depuis_partie(self.partie.clone(), &self.coef * r)
    }

    pub fn carre(&self) -> Terme {
        self.multiplier(self)
    }

    pub fn diviser(&self, autre: &Terme) -> Resultat<Terme> {
        if autre.est_nul() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(self.multiplier(&autre.inverse_non_nul()))
    }

    pub fn inverse(&self) -> Resultat<Terme> {
        Terme::un().diviser(self)
    }

    /// 1/(c·√r·S) = √r/(c·r) · S^-1 ; déjà normalisé.
    fn inverse_non_nul(&self) -> Terme {
        let r = BigRational::from_integer(self.partie.radical.clone());
        let symboles = self
            .partie
            .symboles
            .iter()
            .map(|(nom, e)| (nom.clone(), -e.clone()))
            .collect();
        Terme {
            partie: Partie {
                symboles,
                radical: self.partie.radical.clone(),
            },
            coef: (&self.coef * &r).recip(),
        }
    }

    /// Puissance entière (exponentiation directe : coef^n, radical^n, exposants × n).
    pub fn puissance(&self, n: i64) -> Resultat<Terme> {
        if self.est_nul() {
            return match n.signum() {
                1 => Ok(Terme::zero()),
                0 => Err(ErreurCalcul::indefini("0^0")),
                _ => Err(ErreurCalcul::DivisionParZero),
            };
        }
        if n == 0 {
            return Ok(Terme::un());
        }
        let base = if n < 0 {
            self.inverse_non_nul()
        } else {
            self.clone()
        };
        let e = u32::try_from(n.unsigned_abs())
            .map_err(|_| ErreurCalcul::non_supportee(format!("({self})^{n} : exposant trop grand")))?;

        let coef = BigRational::new(base.coef.numer().pow(e), base.coef.denom().pow(e));
        let r = &base.partie.radical;
        let coef = coef * BigRational::from_integer(r.pow(e / 2));
        let radical = if e % 2 == 1 { r.clone() } else { BigInt::one() };
        let facteur = BigRational::from_integer(BigInt::from(e));
        let symboles = base
            .partie
            .symboles
            .iter()
            .map(|(nom, x)| (nom.clone(), x * &facteur))
            .collect();
        Ok(assemble(coef, radical, symboles))
    }

    /// Racine carrée exacte.
    /// - le rationnel est écrit s/d · √t (t sans carré)
    /// - les exposants des symboles sont divisés par 2
    ///
    /// Échoue si le terme porte déjà un radical (racine quatrième hors vocabulaire)
    /// ou si le coefficient est négatif.
    pub fn racine_carree(&self) -> Resultat<Terme> {
        if self.est_nul() {
            return Ok(Terme::zero());
        }
        if !self.partie.radical.is_one() {
            return Err(ErreurCalcul::non_supportee(format!(
                "√({self}) : racine d’un radical"
            )));
        }
        if self.est_negatif() {
            return Err(if self.est_numerique() {
                ErreurCalcul::hors_domaine(format!("√({self})"))
            } else {
                ErreurCalcul::non_supportee(format!("√({self}) : coefficient négatif"))
            });
        }
        // √(n/d) = √(n·d)/d
        let n = self.coef.numer() * self.coef.denom();
        let d = self.coef.denom().clone();
        let deux = BigRational::from_integer(BigInt::from(2));
        let symboles = self
            .partie
            .symboles
            .iter()
            .map(|(nom, e)| (nom.clone(), e / &deux))
            .collect();
        Ok(normalise(
            BigRational::new(BigInt::one(), d),
            n,
            symboles,
        ))
    }

    /// Racine n-ième exacte : seulement les puissances n-ièmes parfaites de rationnels.
    pub fn racine_n(&self, n: u32) -> Resultat<Terme> {
        match n {
            0 => return Err(ErreurCalcul::indefini(format!("racine 0-ième de {self}"))),
            1 => return Ok(self.clone()),
            2 => return self.racine_carree(),
            _ => {}
        }
        if self.est_nul() {
            return Ok(Terme::zero());
        }
        if !self.partie.radical.is_one() {
            return Err(ErreurCalcul::non_supportee(format!(
                "racine {n}-ième de {self} : radical"
            )));
        }
        if self.est_negatif() && n % 2 == 0 {
            return Err(if self.est_numerique() {
                ErreurCalcul::hors_domaine(format!("racine {n}-ième de {self}"))
            } else {
                ErreurCalcul::non_supportee(format!("racine {n}-ième de {self}"))
            });
        }

        let num = racine_n_exacte(&self.coef.numer().abs(), n);
        let den = racine_n_exacte(self.coef.denom(), n);
        let (Some(num), Some(den)) = (num, den) else {
            return Err(ErreurCalcul::non_supportee(format!(
                "racine {n}-ième de {self} : pas une puissance parfaite"
            )));
        };
        let num = if self.est_negatif() { -num } else { num };

        let diviseur = BigRational::from_integer(BigInt::from(n));
        let symboles = self
            .partie
            .symboles
            .iter()
            .map(|(nom, e)| (nom.clone(), e / &diviseur))
            .collect();
        Ok(normalise(BigRational::new(num, den), BigInt::one(), symboles))
    }

    /// Extrait le PGCD d’une liste de termes et rend (pgcd, liste divisée par le pgcd).
    ///
    /// - coefficient : pgcd des numérateurs / ppcm des dénominateurs (toujours > 0)
    /// - radical     : pgcd des radicaux
    /// - symboles    : exposant minimal (symbole absent = exposant 0)
    ///
    /// Les termes nuls sont ignorés ; une liste sans terme non nul a pour pgcd 1.
    pub fn pgcd_et_divise(termes: &[Terme]) -> (Terme, Vec<Terme>) {
        let non_nuls: Vec<&Terme> = termes.iter().filter(|t| !t.est_nul()).collect();
        if non_nuls.is_empty() {
            return (Terme::un(), termes.to_vec());
        }

        let mut num = BigInt::zero();
        let mut den = BigInt::one();
        let mut rad = BigInt::zero();
        for t in &non_nuls {
            num = num.gcd(t.coef.numer());
            den = den.lcm(t.coef.denom());
            rad = rad.gcd(&t.partie.radical);
        }

        let noms: BTreeSet<&String> = non_nuls
            .iter()
            .flat_map(|t| t.partie.symboles.keys())
            .collect();
        let mut symboles = BTreeMap::new();
        for nom in noms {
            let min = non_nuls
                .iter()
                .map(|t| t.exposant(nom).cloned().unwrap_or_else(BigRational::zero))
                .min()
                .unwrap_or_else(BigRational::zero);
            symboles.insert(nom.clone(), min);
        }

        let pgcd = normalise(BigRational::new(num, den), rad, symboles);
        let inv = pgcd.inverse_non_nul();
        let divises = termes.iter().map(|t| t.multiplier(&inv)).collect();
        (pgcd, divises)
    }
}

/* ------------------------ Outils entiers ------------------------ */

/// Au-delà, l’essai par division s’arrête (grands radicaux : rares ici).
const BORNE_ESSAIS: u64 = 1 << 16;

/// Décompose n >= 0 en n = s² · t, avec t sans facteur carré (essais par division).
///
/// Chaque petit premier est retiré entièrement (paire -> s, impair -> t) ; au-delà de la
/// borne, le cofacteur restant n’est reconnu que s’il est un carré parfait.
pub(crate) fn extrait_carre_parfait(n: &BigInt) -> (BigInt, BigInt) {
    if n.is_zero() {
        return (BigInt::zero(), BigInt::zero());
    }
    if n.is_one() {
        return (BigInt::one(), BigInt::one());
    }

    let mut reste = n.clone();
    let mut s = BigInt::one();
    let mut libre = BigInt::one();

    let mut p: u64 = 2;
    while p <= BORNE_ESSAIS {
        let bp = BigInt::from(p);
        if &bp * &bp > reste {
            break;
        }
        let mut impair = false;
        while reste.is_multiple_of(&bp) {
            reste /= &bp;
            impair = !impair;
            if impair {
                continue;
            }
            s *= &bp;
        }
        if impair {
            libre *= &bp;
        }
        p = if p == 2 { 3 } else { p + 2 };
    }

    let r = reste.sqrt();
    if !reste.is_one() && &r * &r == reste {
        s *= &r;
        reste = BigInt::one();
    }

    (s, libre * reste)
}

/// Plus petit facteur premier de n > 1 (n lui-même au-delà de la borne d’essais).
pub(crate) fn plus_petit_facteur(n: &BigInt) -> BigInt {
    let mut p: u64 = 2;
    while p <= BORNE_ESSAIS {
        let bp = BigInt::from(p);
        if &bp * &bp > *n {
            break;
        }
        if (n % &bp).is_zero() {
            return bp;
        }
        p = if p == 2 { 3 } else { p + 2 };
    }
    n.clone()
}

fn racine_n_exacte(x: &BigInt, n: u32) -> Option<BigInt> {
    if x.is_negative() {
        return None;
    }
    let r = x.nth_root(n);
    (r.pow(n) == *x).then_some(r)
}

/// Entier machine si le rationnel est entier et tient dans un i64.
pub(crate) fn rationnel_vers_i64(r: &BigRational) -> Option<i64> {
    if r.is_integer() {
        r.numer().to_i64()
    } else {
        None
    }
}
