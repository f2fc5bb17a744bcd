//! Tests scientifiques (campagne) : invariants + exemples + limites contrôlées.
//!
//! But : vérifier le calculateur exact de bout en bout.
//! - affichage exact comparé au texte attendu (√2/2, 2 - √3…)
//! - identités trigonométriques sur toute la table, avec périodicité et symétries
//! - limites documentées des heuristiques de division
//! - budget temps sur les boucles

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;

use super::{CalculateurSymbolique, ErreurCalcul, Somme, Terme};

fn calc() -> CalculateurSymbolique {
    // RUST_LOG=trace pour suivre réductions d’angles et cas de division
    let _ = env_logger::builder().is_test(true).try_init();
    CalculateurSymbolique::new()
}

fn pi(n: i64, d: i64) -> Somme {
    Somme::monome(Terme::multiple_pi(n, d))
}

fn s(termes: &[Terme]) -> Somme {
    Somme::depuis_termes(termes.iter().cloned())
}

fn x() -> Terme {
    Terme::symbole("x")
}

fn y() -> Terme {
    Terme::symbole("y")
}

fn assert_exact_eq(r: Result<Somme, ErreurCalcul>, attendu: &str, contexte: &str) {
    let v = r.unwrap_or_else(|e| panic!("{contexte}: err={e}"));
    assert_eq!(v.to_string(), attendu, "{contexte}");
}

fn assert_indefini(r: Result<Somme, ErreurCalcul>, contexte: &str) {
    assert!(
        matches!(r, Err(ErreurCalcul::Indefini(_))),
        "{contexte}: attendu indéfini, obtenu {r:?}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_identites_additives() {
    let c = calc();
    let a = s(&[x(), Terme::racine(2), Terme::fraction(1, 3)]);
    let b = s(&[y().oppose(), Terme::racine(3)]);

    assert_eq!(c.ajouter(&a, &c.oppose(&b)), c.soustraire(&a, &b));
    assert_eq!(c.ajouter(&a, &c.zero()), a);
    assert_eq!(c.multiplier(&a, &c.un()), a);
    assert!(c.multiplier(&a, &c.zero()).est_zero());
    assert!(c.soustraire(&a, &a).est_zero());
}

#[test]
fn sci_listes() {
    let c = calc();
    let l = vec![
        Somme::monome(x()),
        Somme::monome(x()),
        Somme::monome(Terme::entier(-1)),
    ];
    assert_exact_eq(Ok(c.somme_liste(&l)), "-1 + 2x", "somme_liste");
    assert_exact_eq(Ok(c.produit_liste(&l)), "-x^2", "produit_liste");
    assert!(c.produit_liste(&[]).est_un());
    assert_exact_eq(c.diviser_entier(&Somme::monome(x()), 4), "x/4", "x/4");
    assert_exact_eq(Ok(c.multiplier_entier(&s(&[x(), Terme::un()]), -2)), "-2 - 2x", "-2(x+1)");
}

#[test]
fn sci_division_exemples() {
    let c = calc();

    // (3x - 3y)/(x - y) = 3
    let a = s(&[Terme::entier(3).multiplier(&x()), Terme::entier(-3).multiplier(&y())]);
    let b = s(&[x(), y().oppose()]);
    assert_exact_eq(c.diviser(&a, &b), "3", "(3x-3y)/(x-y)");

    // 1/(√2 - 1) = √2 + 1
    let d = s(&[Terme::racine(2), Terme::entier(-1)]);
    assert_exact_eq(c.inverse(&d), "1 + √2", "1/(√2-1)");

    // (x - y)/(x^½ - y^½) = x^½ + y^½
    let demi = BigRational::new(BigInt::from(1), BigInt::from(2));
    let rx = Terme::puissance_symbole("x", demi.clone());
    let ry = Terme::puissance_symbole("y", demi);
    let b = s(&[rx, ry.oppose()]);
    let a = s(&[x(), y().oppose()]);
    assert_exact_eq(c.diviser(&a, &b), "x^(1/2) + y^(1/2)", "(x-y)/(√x-√y)");

    // (x² - y²)/(x - y) = x + y
    let a = s(&[x().carre(), y().carre().oppose()]);
    let b = s(&[x(), y().oppose()]);
    assert_exact_eq(c.diviser(&a, &b), "x + y", "(x²-y²)/(x-y)");
}

#[test]
fn sci_division_numerique_aller_retour() {
    let c = calc();
    let diviseurs = [
        s(&[Terme::racine(2), Terme::racine(3)]),
        s(&[Terme::un(), Terme::racine(2), Terme::racine(3)]),
        s(&[Terme::racine(6), Terme::entier(-2), Terme::racine(5)]),
        s(&[Terme::fraction(1, 2), Terme::racine(7).oppose()]),
    ];
    let dividende = s(&[x(), Terme::racine(2)]);
    for d in &diviseurs {
        let q = c.diviser(&dividende, d).unwrap_or_else(|e| panic!("d={d} err={e}"));
        assert_eq!(c.multiplier(&q, d), dividende, "d={d}");
    }
}

#[test]
fn sci_division_limites_documentees() {
    let c = calc();

    // (x² + 2xy + y²)/(x + y) = x + y mathématiquement, mais aucune division polynomiale
    let carre = s(&[
        x().carre(),
        Terme::entier(2).multiplier(&x()).multiplier(&y()),
        y().carre(),
    ]);
    let r = c.diviser(&carre, &s(&[x(), y()]));
    assert!(r.unwrap_err().est_non_supportee());

    // (x³ - y³)/(x - y) : idem
    let cubes = s(&[x().puissance(3).unwrap(), y().puissance(3).unwrap().oppose()]);
    let r = c.diviser(&cubes, &s(&[x(), y().oppose()]));
    assert!(r.unwrap_err().est_non_supportee());
}

#[test]
fn sci_puissances_et_racines() {
    let c = calc();
    let a = s(&[x(), Terme::un()]);
    assert_eq!(c.puissance(&a, 0), Ok(c.un()));
    assert_indefini(c.puissance(&c.zero(), 0), "0^0");
    assert_exact_eq(c.puissance(&a, 3), "1 + 3x + 3x^2 + x^3", "(x+1)^3");

    assert_exact_eq(
        c.racine_carree(&Somme::monome(Terme::fraction(8, 9))),
        "2√2/3",
        "√(8/9)",
    );
    assert!(matches!(
        c.racine_carree(&c.de_entier(-2)),
        Err(ErreurCalcul::HorsDomaine(_))
    ));
    assert!(c.racine_carree(&a).unwrap_err().est_non_supportee());

    assert_exact_eq(c.racine_n(&c.de_entier(27), 3), "3", "∛27");
    assert_exact_eq(c.racine_n(&c.de_entier(4), -2), "1/2", "4^(-1/2)");
    assert_indefini(c.racine_n(&c.de_entier(4), 0), "racine 0-ième");
}

/* ------------------------ Trigonométrie ------------------------ */

#[test]
fn sci_trig_valeurs_de_reference() {
    let c = calc();
    assert_exact_eq(c.sin(&c.zero()), "0", "sin 0");
    assert_exact_eq(c.sin(&pi(1, 2)), "1", "sin π/2");
    assert_exact_eq(c.sin(&pi(1, 6)), "1/2", "sin π/6");
    assert_exact_eq(c.sin(&pi(1, 4)), "√2/2", "sin π/4");
    assert_exact_eq(c.sin(&pi(1, 12)), "-√2/4 + √6/4", "sin π/12");
    assert_exact_eq(c.tan(&pi(1, 4)), "1", "tan π/4");
    assert_exact_eq(c.tan(&pi(1, 12)), "2 - √3", "tan π/12");
    assert_exact_eq(c.tan(&pi(5, 12)), "2 + √3", "tan 5π/12");
    assert_exact_eq(c.cos(&pi(1, 3)), "1/2", "cos π/3");
    assert_exact_eq(c.cos(&pi(5, 6)), "-√3/2", "cos 5π/6");
    assert_exact_eq(c.cot(&pi(1, 6)), "√3", "cot π/6");
    assert_exact_eq(c.cot(&pi(-1, 4)), "-1", "cot -π/4");
}

#[test]
fn sci_trig_symetries() {
    let c = calc();
    assert_exact_eq(c.sin(&pi(-1, 4)), "-√2/2", "sin(-π/4)");
    assert_exact_eq(c.cos(&pi(-1, 3)), "1/2", "cos(-π/3)");
    assert_exact_eq(c.tan(&pi(-1, 6)), "-√3/3", "tan(-π/6)");
    assert_exact_eq(c.tan(&pi(2, 3)), "-√3", "tan 2π/3");
}

#[test]
fn sci_trig_periodicite_et_reflexion() {
    let c = calc();
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for d in [1i64, 2, 3, 4, 6, 12] {
        for n in -2 * d..=2 * d {
            budget(t0, max);
            let q = pi(n, d);
            let sin_q = c.sin(&q).unwrap_or_else(|e| panic!("sin({q}) err={e}"));

            // sin(qπ) = sin((q + 2)π)
            assert_eq!(c.sin(&pi(n + 2 * d, d)), Ok(sin_q.clone()), "périodicité q={n}/{d}");
            // sin(qπ) = sin((1 - q)π)
            assert_eq!(c.sin(&pi(d - n, d)), Ok(sin_q.clone()), "réflexion q={n}/{d}");
            // sin(-x) = -sin(x)
            assert_eq!(c.sin(&pi(-n, d)), Ok(sin_q.oppose()), "imparité q={n}/{d}");
            // cos(x) = sin(π/2 - x)
            assert_eq!(c.cos(&q), c.sin(&pi(d - 2 * n, 2 * d)), "cos q={n}/{d}");
        }
    }
}

#[test]
fn sci_trig_pythagore_sur_la_table() {
    let c = calc();
    for d in [1i64, 2, 3, 4, 6, 12] {
        for n in 0..2 * d {
            let q = pi(n, d);
            let sin_q = c.sin(&q).unwrap();
            let cos_q = c.cos(&q).unwrap();
            let somme = c.ajouter(
                &c.puissance(&sin_q, 2).unwrap(),
                &c.puissance(&cos_q, 2).unwrap(),
            );
            assert!(somme.est_un(), "sin²+cos² pour {q}: {somme}");

            // tan = sin/cos hors singularités
            match c.tan(&q) {
                Ok(t) => assert_eq!(c.diviser(&sin_q, &cos_q), Ok(t), "tan {q}"),
                Err(e) => {
                    assert!(matches!(e, ErreurCalcul::Indefini(_)));
                    assert!(cos_q.est_zero(), "tan indéfini mais cos {q} = {cos_q}");
                }
            }
        }
    }
}

#[test]
fn sci_trig_indefinis() {
    let c = calc();
    assert_indefini(c.tan(&pi(1, 2)), "tan(π/2)");
    assert_indefini(c.tan(&pi(3, 2)), "tan(3π/2)");
    assert_indefini(c.tan(&pi(-1, 2)), "tan(-π/2)");
    assert_indefini(c.cot(&c.zero()), "cot 0");
    assert_indefini(c.cot(&pi(2, 1)), "cot 2π");
}

#[test]
fn sci_trig_inverses() {
    let c = calc();
    let demi = Somme::monome(Terme::fraction(1, 2));
    assert_exact_eq(c.arcsin(&demi), "π/6", "arcsin 1/2");
    assert_exact_eq(c.arccos(&demi), "π/3", "arccos 1/2");
    assert_exact_eq(c.arccos(&demi.oppose()), "2π/3", "arccos -1/2");
    assert_exact_eq(c.arctan(&s(&[Terme::entier(2), Terme::racine(3)])), "5π/12", "arctan(2+√3)");
    assert_exact_eq(c.arcsin(&c.zero()), "0", "arcsin 0");
    assert!(matches!(
        c.arcsin(&c.de_entier(2)),
        Err(ErreurCalcul::HorsDomaine(_))
    ));
    assert!(c.arctan(&c.de_entier(2)).unwrap_err().est_non_supportee());

    // arcsin(sin x) = x sur [-π/2, π/2]
    for n in -6i64..=6 {
        let a = pi(n, 12);
        assert_eq!(c.arcsin(&c.sin(&a).unwrap()), Ok(a.clone()), "n={n}");
    }
}

#[test]
fn sci_trig_hors_vocabulaire() {
    let c = calc();
    assert!(c.sin(&Somme::monome(x())).unwrap_err().est_non_supportee());
    assert!(c.sin(&s(&[Terme::pi(), Terme::un()])).unwrap_err().est_non_supportee());
    assert!(c.cos(&pi(1, 5)).unwrap_err().est_non_supportee());
}

/* ------------------------ Transcendantes + symboles ------------------------ */

#[test]
fn sci_exp_ln() {
    let c = calc();
    let e = c.constante("e").unwrap();
    assert_eq!(c.exp(&c.un()), Ok(e.clone()));
    assert_eq!(c.ln(&e), Ok(c.un()));
    assert_exact_eq(c.exp_base(&Somme::monome(x()), &c.de_fraction(1, 3).unwrap()), "x^(1/3)", "x^(1/3)");
    assert_exact_eq(c.exp_base(&c.de_entier(2), &c.de_fraction(1, 2).unwrap()), "√2", "2^(1/2)");
    assert!(c.ln(&c.de_entier(2)).unwrap_err().est_non_supportee());
}

#[test]
fn sci_valeur_absolue() {
    let c = calc();
    // |√2 - √3| = √3 - √2
    let v = s(&[Terme::racine(2), Terme::racine(3).oppose()]);
    assert_exact_eq(c.valeur_absolue(&v), "-√2 + √3", "|√2-√3|");
    // √6 ≈ 2,44949 : écart de l’ordre de 5·10⁻⁴
    let proche = s(&[Terme::racine(6), Terme::fraction(-2449, 1000)]);
    assert_eq!(c.signe(&proche), Ok(std::cmp::Ordering::Greater));
}

#[test]
fn sci_remplacement() {
    let c = calc();
    // x² - 2 avec x := √2  =>  0
    let p = s(&[x().carre(), Terme::entier(-2)]);
    assert!(c
        .remplacer("x", &p, &Somme::monome(Terme::racine(2)))
        .unwrap()
        .est_zero());
    // x/y avec y := 2
    let q = Somme::monome(x().diviser(&y()).unwrap());
    assert_exact_eq(c.remplacer("y", &q, &c.de_entier(2)), "x/2", "x/y, y=2");
    assert_eq!(
        c.remplacer("y", &q, &c.zero()),
        Err(ErreurCalcul::DivisionParZero)
    );
}
