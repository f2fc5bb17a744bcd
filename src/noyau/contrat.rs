// src/noyau/contrat.rs
//
// Contrat du calculateur consommé par les collaborateurs (géométrie, algèbre…).
// Générique sur le type de nombre : un collaborateur écrit contre `Calculateur`
// fonctionne avec n’importe quel moteur exact.

use std::cmp::Ordering;
use std::fmt;

use super::calculateur::CalculateurSymbolique;
use super::erreur::Resultat;
use super::somme::Somme;

pub trait Calculateur {
    type Nombre: Clone + Eq + Ord + fmt::Debug + fmt::Display;

    fn zero(&self) -> Self::Nombre;
    fn un(&self) -> Self::Nombre;

    fn ajouter(&self, a: &Self::Nombre, b: &Self::Nombre) -> Self::Nombre;
    fn soustraire(&self, a: &Self::Nombre, b: &Self::Nombre) -> Self::Nombre;
    fn oppose(&self, a: &Self::Nombre) -> Self::Nombre;
    fn multiplier(&self, a: &Self::Nombre, b: &Self::Nombre) -> Self::Nombre;
    fn diviser(&self, a: &Self::Nombre, b: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn puissance(&self, a: &Self::Nombre, n: i64) -> Resultat<Self::Nombre>;
    fn racine_carree(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn inverse(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn valeur_absolue(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;

    fn comparer(&self, a: &Self::Nombre, b: &Self::Nombre) -> Ordering {
        a.cmp(b)
    }

    fn egal(&self, a: &Self::Nombre, b: &Self::Nombre) -> bool {
        a == b
    }

    fn constante(&self, nom: &str) -> Resultat<Self::Nombre>;

    fn sin(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn cos(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn tan(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn cot(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn arcsin(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn arccos(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
    fn arctan(&self, a: &Self::Nombre) -> Resultat<Self::Nombre>;
}

impl Calculateur for CalculateurSymbolique {
    type Nombre = Somme;

    fn zero(&self) -> Somme {
        CalculateurSymbolique::zero(self)
    }

    fn un(&self) -> Somme {
        CalculateurSymbolique::un(self)
    }

    fn ajouter(&self, a: &Somme, b: &Somme) -> Somme {
        CalculateurSymbolique::ajouter(self, a, b)
    }

    fn soustraire(&self, a: &Somme, b: &Somme) -> Somme {
        CalculateurSymbolique::soustraire(self, a, b)
    }

    fn oppose(&self, a: &Somme) -> Somme {
        CalculateurSymbolique::oppose(self, a)
    }

    fn multiplier(&self, a: &Somme, b: &Somme) -> Somme {
        CalculateurSymbolique::multiplier(self, a, b)
    }

    fn diviser(&self, a: &Somme, b: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::diviser(self, a, b)
    }

    fn puissance(&self, a: &Somme, n: i64) -> Resultat<Somme> {
        CalculateurSymbolique::puissance(self, a, n)
    }

    fn racine_carree(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::racine_carree(self, a)
    }

    fn inverse(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::inverse(self, a)
    }

    fn valeur_absolue(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::valeur_absolue(self, a)
    }

    fn comparer(&self, a: &Somme, b: &Somme) -> Ordering {
        CalculateurSymbolique::comparer(self, a, b)
    }

    fn egal(&self, a: &Somme, b: &Somme) -> bool {
        CalculateurSymbolique::egal(self, a, b)
    }

    fn constante(&self, nom: &str) -> Resultat<Somme> {
        CalculateurSymbolique::constante(self, nom)
    }

    fn sin(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::sin(self, a)
    }

    fn cos(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::cos(self, a)
    }

    fn tan(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::tan(self, a)
    }

    fn cot(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::cot(self, a)
    }

    fn arcsin(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::arcsin(self, a)
    }

    fn arccos(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::arccos(self, a)
    }

    fn arctan(&self, a: &Somme) -> Resultat<Somme> {
        CalculateurSymbolique::arctan(self, a)
    }
}
