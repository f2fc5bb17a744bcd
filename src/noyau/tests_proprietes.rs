//! Tests de propriétés (proptest) : axiomes d’anneau sur les sommes exactes,
//! aller-retour de division, périodicités trigonométriques.

use proptest::prelude::*;

use super::{simplifier_lot, CalculateurSymbolique, FacteurCommun, Somme, Terme};

// Partie littérale tirée d’un petit alphabet : 1, x, y, xy, x²
fn litteral(i: usize) -> Terme {
    let x = Terme::symbole("x");
    let y = Terme::symbole("y");
    match i {
        0 => Terme::un(),
        1 => x,
        2 => y,
        3 => x.multiplier(&y),
        _ => x.carre(),
    }
}

fn terme() -> impl Strategy<Value = Terme> {
    (
        -6i64..=6,
        1i64..=4,
        prop::sample::select(vec![1u64, 2, 3, 6]),
        0usize..5,
    )
        .prop_map(|(n, d, r, l)| {
            Terme::fraction(n, d)
                .multiplier(&Terme::racine(r))
                .multiplier(&litteral(l))
        })
}

fn somme() -> impl Strategy<Value = Somme> {
    prop::collection::vec(terme(), 0..4).prop_map(|v| Somme::depuis_termes(v))
}

fn somme_numerique() -> impl Strategy<Value = Somme> {
    prop::collection::vec(
        (-6i64..=6, prop::sample::select(vec![1u64, 2, 3, 5])),
        1..4,
    )
    .prop_map(|v| {
        v.into_iter()
            .map(|(n, r)| Terme::entier(n).multiplier(&Terme::racine(r)))
            .collect::<Somme>()
    })
}

fn angle() -> impl Strategy<Value = (i64, i64)> {
    (-50i64..50, prop::sample::select(vec![1i64, 2, 3, 4, 6, 12]))
}

fn pi(n: i64, d: i64) -> Somme {
    Somme::monome(Terme::multiple_pi(n, d))
}

proptest! {
    #[test]
    fn somme_commutative(a in somme(), b in somme()) {
        let c = CalculateurSymbolique::new();
        prop_assert_eq!(c.ajouter(&a, &b), c.ajouter(&b, &a));
    }

    #[test]
    fn somme_associative(a in somme(), b in somme(), d in somme()) {
        let c = CalculateurSymbolique::new();
        prop_assert_eq!(
            c.ajouter(&c.ajouter(&a, &b), &d),
            c.ajouter(&a, &c.ajouter(&b, &d))
        );
    }

    #[test]
    fn produit_commutatif(a in somme(), b in somme()) {
        let c = CalculateurSymbolique::new();
        prop_assert_eq!(c.multiplier(&a, &b), c.multiplier(&b, &a));
    }

    #[test]
    fn produit_associatif(a in somme(), b in somme(), d in somme()) {
        let c = CalculateurSymbolique::new();
        prop_assert_eq!(
            c.multiplier(&c.multiplier(&a, &b), &d),
            c.multiplier(&a, &c.multiplier(&b, &d))
        );
    }

    #[test]
    fn distributivite(a in somme(), b in somme(), d in somme()) {
        let c = CalculateurSymbolique::new();
        prop_assert_eq!(
            c.multiplier(&a, &c.ajouter(&b, &d)),
            c.ajouter(&c.multiplier(&a, &b), &c.multiplier(&a, &d))
        );
    }

    #[test]
    fn neutres_et_absorbant(a in somme()) {
        let c = CalculateurSymbolique::new();
        prop_assert_eq!(c.ajouter(&a, &c.zero()), a.clone());
        prop_assert_eq!(c.multiplier(&a, &c.un()), a.clone());
        prop_assert!(c.multiplier(&a, &c.zero()).est_zero());
    }

    #[test]
    fn soustraction_par_oppose(a in somme(), b in somme()) {
        let c = CalculateurSymbolique::new();
        prop_assert_eq!(c.ajouter(&a, &c.oppose(&b)), c.soustraire(&a, &b));
    }

    #[test]
    fn division_aller_retour(a in somme(), b in somme()) {
        let c = CalculateurSymbolique::new();
        if let Ok(q) = c.diviser(&a, &b) {
            prop_assert_eq!(c.multiplier(&q, &b), a);
        }
    }

    #[test]
    fn division_par_numerique_toujours_possible(a in somme(), b in somme_numerique()) {
        let c = CalculateurSymbolique::new();
        prop_assume!(!b.est_zero());
        let q = c.diviser(&a, &b);
        prop_assert!(q.is_ok(), "a={} b={} err={:?}", a, b, q);
        if let Ok(q) = q {
            prop_assert_eq!(c.multiplier(&q, &b), a);
        }
    }

    #[test]
    fn signe_impair(a in somme_numerique()) {
        let c = CalculateurSymbolique::new();
        let s = c.signe(&a);
        prop_assert!(s.is_ok());
        prop_assert_eq!(c.signe(&c.oppose(&a)), s.map(|o| o.reverse()));
    }

    #[test]
    fn pgcd_reconstruit(v in prop::collection::vec(terme(), 1..5)) {
        let (g, divises) = Terme::pgcd_et_divise(&v);
        prop_assert_eq!(divises.len(), v.len());
        for (t, dv) in v.iter().zip(&divises) {
            prop_assert_eq!(&dv.multiplier(&g), t);
        }
    }

    #[test]
    fn lot_conserve_le_decoupage(v in prop::collection::vec(somme(), 0..4)) {
        let r = simplifier_lot(&v, &FacteurCommun).unwrap();
        prop_assert_eq!(r.len(), v.len());
        for (avant, apres) in v.iter().zip(&r) {
            prop_assert_eq!(avant.nombre_termes(), apres.nombre_termes());
        }
    }

    #[test]
    fn sin_periodique_et_symetrique((n, d) in angle()) {
        let c = CalculateurSymbolique::new();
        let s = c.sin(&pi(n, d)).unwrap();
        prop_assert_eq!(c.sin(&pi(n + 2 * d, d)).unwrap(), s.clone());
        prop_assert_eq!(c.sin(&pi(d - n, d)).unwrap(), s.clone());
        prop_assert_eq!(c.sin(&pi(-n, d)).unwrap(), c.oppose(&s));
    }

    #[test]
    fn tan_periode_pi((n, d) in angle()) {
        let c = CalculateurSymbolique::new();
        // les messages d’erreur citent l’angle : seules les valeurs sont comparées
        prop_assert_eq!(c.tan(&pi(n, d)).ok(), c.tan(&pi(n + d, d)).ok());
        prop_assert_eq!(c.cot(&pi(n, d)).ok(), c.cot(&pi(n - d, d)).ok());
    }
}
