// src/noyau/programme.rs
//
// Export / import du programme sous forme de liste ordonnée de symboles
// (équivalent “property list” : sérialisable tel quel en JSON).
//
// Import, dans l’ordre d’essai :
//   1. symbole présent dans la table  => jeton opérateur (arité de la table)
//   2. nombre décimal (parse f64)     => opérande
//   3. identifiant [A-Za-z_][A-Za-z0-9_]* => variable
//   4. sinon                          => ErreurNoyau::ImportInvalide
//
// Tout-ou-rien : la moindre entrée invalide rejette l’import entier.

use super::erreurs::ErreurNoyau;
use super::jetons::Jeton;
use super::operateurs::{Operateur, TableOperateurs};

/// Sérialise le programme : la `description` de chaque jeton, dans l’ordre.
pub fn exporte(programme: &[Jeton]) -> Vec<String> {
    programme.iter().map(Jeton::description).collect()
}

/// Reconstruit un programme depuis sa forme exportée.
pub fn importe(
    table: &TableOperateurs,
    symboles: &[String],
) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut programme = Vec::with_capacity(symboles.len());

    for symbole in symboles {
        let jeton = match table.cherche(symbole) {
            Some(Operateur::Unaire { .. }) => Jeton::OpUnaire(symbole.clone()),
            Some(Operateur::Binaire { .. }) => Jeton::OpBinaire(symbole.clone()),
            None => {
                if let Ok(valeur) = symbole.parse::<f64>() {
                    Jeton::Operande(valeur)
                } else if est_identifiant(symbole) {
                    Jeton::Variable(symbole.clone())
                } else {
                    return Err(ErreurNoyau::ImportInvalide {
                        jeton: symbole.clone(),
                    });
                }
            }
        };
        programme.push(jeton);
    }

    Ok(programme)
}

/// Identifiant de variable : mêmes règles que la tokenisation classique,
/// ASCII [a-zA-Z_][a-zA-Z0-9_]*.
fn est_identifiant(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
