// src/noyau/jetons.rs

use std::fmt;

/// Jeton du programme postfixe.
///
/// Les quatre formes possibles d’une entrée :
/// - `Operande` : littéral numérique (f64)
/// - `OpUnaire` / `OpBinaire` : symbole résolu via la table des opérateurs
/// - `Variable` : nom lié (ou non) dans le moteur
///
/// INVARIANT : un jeton `OpUnaire`/`OpBinaire` n’est construit qu’après une
/// recherche réussie dans la table (chemin `applique_operation` ou import).
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Operande(f64),
    OpUnaire(String),
    OpBinaire(String),
    Variable(String),
}

impl Jeton {
    /// Forme texte du jeton, utilisée pour l’export du programme.
    ///
    /// Les opérandes sortent en pleine précision (`{}` sur f64) : garantit
    /// l’aller-retour export -> import sans perte.
    pub fn description(&self) -> String {
        match self {
            Jeton::Operande(valeur) => format!("{valeur}"),
            Jeton::OpUnaire(symbole) | Jeton::OpBinaire(symbole) => symbole.clone(),
            Jeton::Variable(nom) => nom.clone(),
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
