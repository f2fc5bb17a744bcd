// src/noyau/calculateur.rs
//
// Calculateur symbolique exact sur les sommes de termes
// -----------------------------------------------------
// - arithmétique : + - × ÷, puissances entières, racines exactes
// - trig fermée  : sin/cos/tan/cot de qπ, arcsin/arccos/arctan par table inverse
// - extras       : a^b, exp, ln, |x| (signe exact), substitution de symbole
//
// Aucun flottant : les signes de sommes irrationnelles sont décidés par encadrement
// rationnel des radicaux (précision croissante, bornée par les réglages).

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::angle::{self, Reduction};
use super::division::{self, HEURISTIQUES};
use super::erreur::{ErreurCalcul, Resultat};
use super::reglages::Reglages;
use super::somme::Somme;
use super::table_trig::TableTrig;
use super::terme::{rationnel_vers_i64, Terme, SYMBOLE_E, SYMBOLE_PI};

#[derive(Clone, Debug, Default)]
pub struct CalculateurSymbolique {
    reglages: Reglages,
}

impl CalculateurSymbolique {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self { reglages }
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }
}

/* ------------------------ Constantes ------------------------ */

impl CalculateurSymbolique {
    pub fn zero(&self) -> Somme {
        Somme::zero()
    }

    pub fn un(&self) -> Somme {
        Somme::un()
    }

    pub fn de_entier(&self, n: i64) -> Somme {
        Somme::monome(Terme::entier(n))
    }

    pub fn de_fraction(&self, n: i64, d: i64) -> Resultat<Somme> {
        if d == 0 {
            return Err(ErreurCalcul::DivisionParZero);
        }
        Ok(Somme::monome(Terme::fraction(n, d)))
    }

    /// `π` (ou `pi`), `e`.
    pub fn constante(&self, nom: &str) -> Resultat<Somme> {
        match nom.to_lowercase().as_str() {
            "π" | "pi" => Ok(Somme::monome(Terme::pi())),
            "e" => Ok(Somme::monome(Terme::e())),
            _ => Err(ErreurCalcul::non_supportee(format!("constante inconnue : {nom}"))),
        }
    }
}

/* ------------------------ Arithmétique ------------------------ */

impl CalculateurSymbolique {
    pub fn ajouter(&self, a: &Somme, b: &Somme) -> Somme {
        Somme::fusion(a, b, false)
    }

    pub fn soustraire(&self, a: &Somme, b: &Somme) -> Somme {
        Somme::fusion(a, b, true)
    }

    pub fn oppose(&self, a: &Somme) -> Somme {
        a.oppose()
    }

    pub fn somme_liste(&self, termes: &[Somme]) -> Somme {
        let mut s = Somme::zero();
        for x in termes {
            for t in x {
                s.ajouter_terme(t.clone());
            }
        }
        s.retirer_zeros();
        s
    }

    pub fn multiplier(&self, a: &Somme, b: &Somme) -> Somme {
        Somme::produit(a, b)
    }

    pub fn produit_liste(&self, facteurs: &[Somme]) -> Somme {
        facteurs
            .iter()
            .fold(Somme::un(), |acc, f| Somme::produit(&acc, f))
    }

    pub fn multiplier_entier(&self, a: &Somme, n: i64) -> Somme {
        a.multiplier_terme(&Terme::entier(n))
    }

    pub fn diviser_entier(&self, a: &Somme, n: i64) -> Resultat<Somme> {
        division::diviser_par_monome(a, &Terme::entier(n))
    }

    /// Puissance entière par multiplication répétée.
    /// Exposant négatif : base monôme seulement.
    pub fn puissance(&self, x: &Somme, n: i64) -> Resultat<Somme> {
        if n == 0 {
            return if x.est_zero() {
                Err(ErreurCalcul::indefini("0^0"))
            } else {
                Ok(Somme::un())
            };
        }
        if n.unsigned_abs() > self.reglages.exposant_max {
            return Err(ErreurCalcul::non_supportee(format!(
                "({x})^{n} : exposant au-delà de {}",
                self.reglages.exposant_max
            )));
        }

        if n > 0 {
            let mut r = Somme::un();
            for _ in 0..n {
                r = Somme::produit(&r, x);
            }
            return Ok(r);
        }

        if x.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        let Some(t) = x.seul_terme() else {
            return Err(ErreurCalcul::non_supportee(format!(
                "({x})^{n} : exposant négatif d’une somme"
            )));
        };
        let mut r = Terme::un();
        for _ in 0..n.unsigned_abs() {
            r = r.diviser(t)?;
        }
        Ok(Somme::monome(r))
    }

    /// Division exacte, ou FormeNonSupportee si aucun cas connu ne s’applique.
    pub fn diviser(&self, dividende: &Somme, diviseur: &Somme) -> Resultat<Somme> {
        if diviseur.est_zero() {
            return Err(ErreurCalcul::DivisionParZero);
        }
        if dividende.est_zero() {
            return Ok(Somme::zero());
        }
        if let Some(t) = diviseur.seul_terme() {
            return division::diviser_par_monome(dividende, t);
        }
        if diviseur.est_numerique() {
            return division::rationaliser(
                dividende,
                diviseur,
                self.reglages.profondeur_rationalisation_max,
            );
        }
        for (nom, heuristique) in HEURISTIQUES {
            if let Some(q) = heuristique(dividende, diviseur) {
                log::trace!("division ({dividende})/({diviseur}) : {nom}");
                return Ok(q);
            }
        }
        Err(ErreurCalcul::non_supportee(format!(
            "({dividende})/({diviseur})"
        )))
    }

    pub fn inverse(&self, x: &Somme) -> Resultat<Somme> {
        self.diviser(&Somme::un(), x)
    }

    pub fn racine_carree(&self, x: &Somme) -> Resultat<Somme> {
        if x.est_zero() {
            return Ok(Somme::zero());
        }
        match x.seul_terme() {
            Some(t) => Ok(Somme::monome(t.racine_carree()?)),
            None => Err(ErreurCalcul::non_supportee(format!(
                "√({x}) : somme trop complexe"
            ))),
        }
    }

    /// Racine n-ième ; n < 0 donne l’inverse de la racine |n|-ième.
    pub fn racine_n(&self, x: &Somme, n: i64) -> Resultat<Somme> {
        match n {
            0 => return Err(ErreurCalcul::indefini(format!("racine 0-ième de {x}"))),
            1 => return Ok(x.clone()),
            2 => return self.racine_carree(x),
            n if n < 0 => {
                let r = self.racine_n(x, n.saturating_neg())?;
                return self.inverse(&r);
            }
            _ => {}
        }
        if x.est_zero() {
            return Ok(Somme::zero());
        }
        let ordre = u32::try_from(n)
            .map_err(|_| ErreurCalcul::non_supportee(format!("racine {n}-ième : ordre trop grand")))?;
        match x.seul_terme() {
            Some(t) => Ok(Somme::monome(t.racine_n(ordre)?)),
            None => Err(ErreurCalcul::non_supportee(format!(
                "racine {n}-ième de {x} : somme trop complexe"
            ))),
        }
    }
}

/* ------------------------ Signe exact ------------------------ */

impl CalculateurSymbolique {
    /// Signe exact d’une somme numérique (rationnels + radicaux).
    pub fn signe(&self, x: &Somme) -> Resultat<Ordering> {
        if !x.est_numerique() {
            return Err(ErreurCalcul::non_supportee(format!("signe de {x} : symboles")));
        }
        if x.est_zero() {
            return Ok(Ordering::Equal);
        }
        if let Some(t) = x.seul_terme() {
            return Ok(t.coef().cmp(&BigRational::zero()));
        }

        let max = self.reglages.precision_signe_max;
        let mut bits: u32 = 32;
        loop {
            let (bas, haut) = encadrement(x, bits);
            if bas.is_positive() {
                return Ok(Ordering::Greater);
            }
            if haut.is_negative() {
                return Ok(Ordering::Less);
            }
            if bits >= max {
                break;
            }
            bits = bits.saturating_mul(2).min(max);
        }
        Err(ErreurCalcul::non_supportee(format!(
            "signe de {x} : indécidé à {max} bits"
        )))
    }

    /// |x| pour une somme numérique.
    pub fn valeur_absolue(&self, x: &Somme) -> Resultat<Somme> {
        Ok(match self.signe(x)? {
            Ordering::Less => x.oppose(),
            _ => x.clone(),
        })
    }
}

/// Encadrement [bas, haut] de la somme : √r ∈ [s, s+1]/2^bits avec s = ⌊√(r·4^bits)⌋.
fn encadrement(x: &Somme, bits: u32) -> (BigRational, BigRational) {
    let echelle = BigInt::one() << (bits as usize);
    let mut bas = BigRational::zero();
    let mut haut = BigRational::zero();

    for t in x {
        let r = t.radical();
        let (lo, hi) = if r.is_one() {
            (BigRational::one(), BigRational::one())
        } else {
            let s = (r.clone() << (2 * bits as usize)).sqrt();
            (
                BigRational::new(s.clone(), echelle.clone()),
                BigRational::new(s + BigInt::one(), echelle.clone()),
            )
        };
        let c = t.coef();
        if c.is_positive() {
            bas += c * &lo;
            haut += c * &hi;
        } else {
            bas += c * &hi;
            haut += c * &lo;
        }
    }
    (bas, haut)
}

/* ------------------------ Exponentielles ------------------------ */

impl CalculateurSymbolique {
    /// a^b pour b rationnel (entier, ou a monôme dont la racine est exacte).
    pub fn exp_base(&self, a: &Somme, b: &Somme) -> Resultat<Somme> {
        if a.est_zero() {
            if b.est_zero() {
                return Err(ErreurCalcul::indefini("0^0"));
            }
            if !b.est_numerique() {
                return Err(ErreurCalcul::non_supportee(format!("0^({b}) : signe inconnu")));
            }
            return match self.signe(b)? {
                Ordering::Less => Err(ErreurCalcul::DivisionParZero),
                _ => Ok(Somme::zero()),
            };
        }
        if a.est_un() || b.est_zero() {
            return Ok(Somme::un());
        }

        let Some(q) = exposant_rationnel(b) else {
            return Err(ErreurCalcul::non_supportee(format!("({a})^({b})")));
        };
        if let Some(n) = rationnel_vers_i64(&q) {
            return self.puissance(a, n);
        }

        let Some(t) = a.seul_terme() else {
            return Err(ErreurCalcul::non_supportee(format!("({a})^({b})")));
        };
        let (Some(ordre), Some(p)) = (q.denom().to_u32(), q.numer().to_i64()) else {
            return Err(ErreurCalcul::non_supportee(format!("({a})^({b})")));
        };
        let max = self.reglages.exposant_max;
        if p.unsigned_abs() > max || u64::from(ordre) > max {
            return Err(ErreurCalcul::non_supportee(format!(
                "({a})^({b}) : exposant au-delà de {max}"
            )));
        }
        Ok(Somme::monome(t.racine_n(ordre)?.puissance(p)?))
    }

    /// e^x pour x rationnel.
    pub fn exp(&self, x: &Somme) -> Resultat<Somme> {
        if x.est_zero() {
            return Ok(Somme::un());
        }
        match exposant_rationnel(x) {
            Some(q) => Ok(Somme::monome(Terme::puissance_symbole(SYMBOLE_E, q))),
            None => Err(ErreurCalcul::non_supportee(format!("exp({x})"))),
        }
    }

    /// ln 1 = 0, ln(e^q) = q.
    pub fn ln(&self, x: &Somme) -> Resultat<Somme> {
        if x.est_un() {
            return Ok(Somme::zero());
        }
        let Some(t) = x.seul_terme() else {
            return Err(if x.est_zero() {
                ErreurCalcul::hors_domaine("ln(0)")
            } else {
                ErreurCalcul::non_supportee(format!("ln({x})"))
            });
        };
        if t.est_numerique() && t.est_negatif() {
            return Err(ErreurCalcul::hors_domaine(format!("ln({x})")));
        }
        let puissance_de_e = t.coef().is_one() && t.radical().is_one() && t.symboles().len() == 1;
        match t.exposant(SYMBOLE_E) {
            Some(q) if puissance_de_e => Ok(Somme::monome(Terme::rationnel(q.clone()))),
            _ => Err(ErreurCalcul::non_supportee(format!("ln({x})"))),
        }
    }
}

/// b = q (un seul terme rationnel), ou None.
fn exposant_rationnel(b: &Somme) -> Option<BigRational> {
    b.seul_terme()
        .filter(|t| t.est_rationnel())
        .map(|t| t.coef().clone())
}

/* ------------------------ Trigonométrie fermée ------------------------ */

impl CalculateurSymbolique {
    pub fn sin(&self, x: &Somme) -> Resultat<Somme> {
        let Some(q) = coef_de_pi(x, "sin")? else {
            return Ok(Somme::zero());
        };
        let r = angle::reduire_sin(&q);
        lire(TableTrig::globale().sin(&r.cle), &r, "sin", x)
    }

    pub fn cos(&self, x: &Somme) -> Resultat<Somme> {
        let Some(q) = coef_de_pi(x, "cos")? else {
            return Ok(Somme::un());
        };
        let r = angle::reduire_cos(&q);
        lire(TableTrig::globale().sin(&r.cle), &r, "cos", x)
    }

    pub fn tan(&self, x: &Somme) -> Resultat<Somme> {
        let Some(q) = coef_de_pi(x, "tan")? else {
            return Ok(Somme::zero());
        };
        let Some(r) = angle::reduire_tan(&q) else {
            return Err(ErreurCalcul::indefini(format!("tan({x})")));
        };
        lire(TableTrig::globale().tan(&r.cle), &r, "tan", x)
    }

    pub fn cot(&self, x: &Somme) -> Resultat<Somme> {
        let Some(q) = coef_de_pi(x, "cot")? else {
            return Err(ErreurCalcul::indefini("cot(0)"));
        };
        let Some(r) = angle::reduire_cot(&q) else {
            return Err(ErreurCalcul::indefini(format!("cot({x})")));
        };
        lire(TableTrig::globale().tan(&r.cle), &r, "cot", x)
    }

    pub fn arcsin(&self, x: &Somme) -> Resultat<Somme> {
        let table = TableTrig::globale();
        if let Some(v) = table.arcsin(x) {
            return Ok(v.clone());
        }
        if let Some(v) = table.arcsin(&x.oppose()) {
            return Ok(v.oppose());
        }
        if let Some(t) = x.seul_terme().filter(|t| t.est_numerique()) {
            // |c·√r| > 1  <=>  c²·r > 1
            let carre = t.coef() * t.coef() * BigRational::from_integer(t.radical().clone());
            if carre > BigRational::one() {
                return Err(ErreurCalcul::hors_domaine(format!("arcsin({x})")));
            }
        }
        Err(ErreurCalcul::non_supportee(format!("arcsin({x})")))
    }

    pub fn arccos(&self, x: &Somme) -> Resultat<Somme> {
        let demi_pi = Somme::monome(Terme::multiple_pi(1, 2));
        Ok(self.soustraire(&demi_pi, &self.arcsin(x)?))
    }

    pub fn arctan(&self, x: &Somme) -> Resultat<Somme> {
        let table = TableTrig::globale();
        if let Some(v) = table.arctan(x) {
            return Ok(v.clone());
        }
        if let Some(v) = table.arctan(&x.oppose()) {
            return Ok(v.oppose());
        }
        Err(ErreurCalcul::non_supportee(format!("arctan({x})")))
    }
}

/// x = 0 => None ; x = qπ => Some(q) ; sinon non supporté.
fn coef_de_pi(x: &Somme, f: &str) -> Resultat<Option<BigRational>> {
    if x.est_zero() {
        return Ok(None);
    }
    x.seul_terme()
        .and_then(Terme::multiple_de_pi)
        .map(|q| Some(q.clone()))
        .ok_or_else(|| ErreurCalcul::non_supportee(format!("{f}({x}) : pas un multiple rationnel de {SYMBOLE_PI}")))
}

fn lire(valeur: Option<&Somme>, r: &Reduction, f: &str, x: &Somme) -> Resultat<Somme> {
    match valeur {
        Some(v) if r.negatif => Ok(v.oppose()),
        Some(v) => Ok(v.clone()),
        None => Err(ErreurCalcul::non_supportee(format!(
            "{f}({x}) : angle hors table"
        ))),
    }
}

/* ------------------------ Symboles ------------------------ */

impl CalculateurSymbolique {
    /// Remplace `symbole` par `substitution` (exposants entiers seulement).
    pub fn remplacer(&self, symbole: &str, x: &Somme, substitution: &Somme) -> Resultat<Somme> {
        let mut r = Somme::zero();
        for t in x {
            let Some(e) = t.exposant(symbole) else {
                r.ajouter_terme(t.clone());
                continue;
            };
            let Some(n) = rationnel_vers_i64(e) else {
                return Err(ErreurCalcul::non_supportee(format!(
                    "remplacer {symbole} dans {t} : exposant {e}"
                )));
            };
            let reste = Somme::monome(t.sans_symbole(symbole));
            let facteur = self.puissance(substitution, n)?;
            for u in &Somme::produit(&reste, &facteur) {
                r.ajouter_terme(u.clone());
            }
        }
        r.retirer_zeros();
        Ok(r)
    }

    pub fn contient_symbole(&self, x: &Somme, nom: &str) -> bool {
        x.contient_symbole(nom)
    }

    /// Valeur entière si la somme est un entier.
    pub fn valeur_entiere(&self, x: &Somme) -> Option<BigInt> {
        if x.est_zero() {
            return Some(BigInt::zero());
        }
        x.seul_terme()
            .filter(|t| t.est_rationnel() && t.coef().is_integer())
            .map(|t| t.coef().numer().clone())
    }

    /// Ordre total structurel (pas l’ordre des valeurs réelles).
    pub fn comparer(&self, a: &Somme, b: &Somme) -> Ordering {
        a.cmp(b)
    }

    pub fn egal(&self, a: &Somme, b: &Somme) -> bool {
        a == b
    }
}
