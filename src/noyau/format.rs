// src/noyau/format.rs
//
// Affichage EXACT “joli” des termes et des sommes
// - √2/2, -√3/3, 2√3·x, x^(1/2), 2π/3
// - somme : "√6/4 - √2/4", "2 - √3", "0"

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::somme::Somme;
use super::terme::Terme;

/* ------------------------ Helpers ------------------------ */

fn format_rat_pretty(r: &BigRational) -> String {
    if r.denom().is_one() {
        format!("{}", r.numer())
    } else {
        format!("{}/{}", r.numer(), r.denom())
    }
}

fn format_exposant(e: &BigRational) -> String {
    if e.denom().is_one() && e.is_positive() {
        format!("{}", e.numer())
    } else {
        format!("({})", format_rat_pretty(e))
    }
}

/// x, x^2, x^(1/2), x^(-1)
fn format_symboles(t: &Terme) -> String {
    t.symboles()
        .iter()
        .map(|(nom, e)| {
            if e.is_one() {
                nom.clone()
            } else {
                format!("{nom}^{}", format_exposant(e))
            }
        })
        .collect::<Vec<_>>()
        .join("·")
}

/// |p|·√n·symboles / q, sans le signe.
/// Le “1” du numérateur disparaît dès qu’il reste autre chose (√2/2, π/2).
fn format_magnitude(p: &BigInt, q: &BigInt, radical: &BigInt, symboles: &str) -> String {
    let mut num = String::new();
    let reste_quelque_chose = !radical.is_one() || !symboles.is_empty();

    if !p.is_one() || !reste_quelque_chose {
        num.push_str(&p.to_string());
    }
    if !radical.is_one() {
        num.push_str(&format!("√{radical}"));
    }
    if !symboles.is_empty() {
        if !radical.is_one() {
            num.push('·');
        }
        num.push_str(symboles);
    }

    if q.is_one() {
        num
    } else {
        format!("{num}/{q}")
    }
}

/* ------------------------ Display ------------------------ */

impl fmt::Display for Terme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.est_nul() {
            return f.write_str("0");
        }
        let c = self.coef();
        let mag = format_magnitude(
            &c.numer().abs(),
            c.denom(),
            self.radical(),
            &format_symboles(self),
        );
        if c.is_negative() {
            write!(f, "-{mag}")
        } else {
            f.write_str(&mag)
        }
    }
}

impl fmt::Display for Somme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut termes = self.iter();
        let Some(premier) = termes.next() else {
            return f.write_str("0");
        };
        write!(f, "{premier}")?;
        for t in termes {
            if t.est_negatif() {
                write!(f, " - {}", t.oppose())?;
            } else {
                write!(f, " + {t}")?;
            }
        }
        Ok(())
    }
}

/// Affichage d’un coefficient de π seul : π/2, 3π/2, -2π.
pub fn format_coeff_pi(coeff: &BigRational) -> String {
    if coeff.is_zero() {
        return "0".to_string();
    }
    Terme::rationnel(coeff.clone())
        .multiplier(&Terme::pi())
        .to_string()
}
