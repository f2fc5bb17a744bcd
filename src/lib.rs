// src/lib.rs
//
// Calcul exact — moteur symbolique sur sommes de termes
// ------------------------------------------------------
// - rationnels exacts (BigRational), radicaux √n, symboles à exposant rationnel
// - + - × ÷ exacts, puissances, racines
// - sin/cos/tan/cot de qπ et fonctions inverses en formes closes
//
// Aucun flottant. Aucune E/S : la lecture des littéraux et l’affichage riche
// sont l’affaire des appelants.

pub mod noyau;

pub use noyau::{
    Calculateur, CalculateurSymbolique, ErreurCalcul, Reglages, Resultat, Somme, Terme,
};
