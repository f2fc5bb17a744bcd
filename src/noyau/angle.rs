// src/noyau/angle.rs
//
// Angles rationnels (multiples de π) : clé de table + réductions
// --------------------------------------------------------------
// Un angle qπ est manipulé sous la forme (num, den), den > 0.
// - sin : signe extrait, num mod 2·den, [0,π) avec bascule de signe, [0,π/2] par symétrie
// - cos : cos x = sin(π/2 + |x|)
// - tan : num mod den, singularité 2·num == den, symétrie => signe inversé
// - cot : cot x = -tan(x + π/2)
//
// La clé est TOUJOURS réduite avant la recherche en table (4/6 => 2/3).

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::terme::Terme;

/// Clé réduite d’un angle (num/den)·π, avec den > 0 et pgcd(num, den) = 1.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CleAngle {
    num: BigInt,
    den: BigInt,
}

impl CleAngle {
    /// Réduit (num, den) ; 0/d devient 0/1.
    ///
    /// # Panics
    ///
    /// Si `den == 0`.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        assert!(!den.is_zero(), "CleAngle: dénominateur nul");
        let r = BigRational::new(num, den);
        CleAngle {
            num: r.numer().clone(),
            den: r.denom().clone(),
        }
    }

    pub fn depuis_i64(num: i64, den: i64) -> Self {
        CleAngle::new(BigInt::from(num), BigInt::from(den))
    }

    pub fn num(&self) -> &BigInt {
        &self.num
    }

    pub fn den(&self) -> &BigInt {
        &self.den
    }

    /// L’angle lui-même : (num/den)·π.
    pub fn en_terme(&self) -> Terme {
        Terme::rationnel(BigRational::new(self.num.clone(), self.den.clone()))
            .multiplier(&Terme::pi())
    }
}

/// Résultat d’une réduction : clé dans [0, π/2] et signe à appliquer à la valeur de table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    pub cle: CleAngle,
    pub negatif: bool,
}

/* ------------------------ sin / cos ------------------------ */

/// sin(qπ) = ±sin(cle·π), cle ∈ [0, 1/2].
pub fn reduire_sin(q: &BigRational) -> Reduction {
    vers_premier_quadrant(q.abs(), q.is_negative())
}

/// cos(qπ) = sin((|q| + 1/2)π).
pub fn reduire_cos(q: &BigRational) -> Reduction {
    vers_premier_quadrant(q.abs() + demi(), false)
}

fn vers_premier_quadrant(a: BigRational, mut negatif: bool) -> Reduction {
    let den = a.denom().clone();
    let deux_den: BigInt = &den + &den;
    let mut num = a.numer().mod_floor(&deux_den);

    // [π, 2π) -> [0, π) : sin(x) = -sin(x - π)
    if num > den {
        num -= &den;
        negatif = !negatif;
    }
    // (π/2, π) -> (0, π/2) : sin(x) = sin(π - x)
    if &num + &num > den {
        num = &den - &num;
    }

    let r = Reduction {
        cle: CleAngle::new(num, den),
        negatif,
    };
    log::trace!("angle réduit : {}/{} (négatif: {})", r.cle.num, r.cle.den, r.negatif);
    r
}

/* ------------------------ tan / cot ------------------------ */

/// tan(qπ) = ±tan(cle·π), cle ∈ [0, 1/2) ; `None` si qπ ≡ π/2 (mod π).
pub fn reduire_tan(q: &BigRational) -> Option<Reduction> {
    vers_demi_periode(q.abs(), q.is_negative())
}

/// cot(qπ) = -tan((q + 1/2)π) ; `None` si qπ ≡ 0 (mod π).
pub fn reduire_cot(q: &BigRational) -> Option<Reduction> {
    // cot est impaire : le signe de q est traité à part, puis le décalage
    let negatif = q.is_negative();
    let r = vers_demi_periode(q.abs() + demi(), false)?;
    Some(Reduction {
        cle: r.cle,
        negatif: !(negatif ^ r.negatif),
    })
}

fn vers_demi_periode(a: BigRational, mut negatif: bool) -> Option<Reduction> {
    let den = a.denom().clone();
    let mut num = a.numer().mod_floor(&den);

    let double: BigInt = &num + &num;
    if double == den {
        return None;
    }
    // (π/2, π) -> (0, π/2) : tan(x) = -tan(π - x)
    if double > den {
        num = &den - &num;
        negatif = !negatif;
    }

    Some(Reduction {
        cle: CleAngle::new(num, den),
        negatif,
    })
}

fn demi() -> BigRational {
    BigRational::new(BigInt::one(), BigInt::from(2))
}
