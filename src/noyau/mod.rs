//! Noyau du moteur à pile (postfixe)
//!
//! Organisation interne :
//! - jetons.rs     : jetons du programme (opérande / opérateur / variable)
//! - operateurs.rs : table statique des six opérateurs
//! - erreurs.rs    : erreurs typées du noyau
//! - format.rs     : arrondi 2 décimales + affichage décimal
//! - infixe.rs     : reconstruction infixe depuis la trace
//! - programme.rs  : export/import du programme (liste de symboles)
//! - moteur.rs     : le moteur lui-même (pile + variables + trace)

pub mod erreurs;
pub mod format;
pub mod infixe;
pub mod jetons;
pub mod moteur;
pub mod operateurs;
pub mod programme;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use erreurs::ErreurNoyau;
pub use moteur::Moteur;
