// src/noyau/infixe.rs
//
// Reconstruction infixe : relit la trace d’évaluation (de la fin) et
// réassemble UNE expression lisible. Appelée une seule fois par évaluation
// complète, uniquement quand le sommet du programme n’est pas un simple
// opérande (le symbole du sommet vient d’être rajouté sur la trace).
//
// Règles:
// - unaire        : `symbole(operande)`, puis on jette les 2 entrées dessous
// - binaire       : `a symbole b` en ordre de dépilement, puis on jette les
//                   3 entrées dessous
// - inversé (➖ ➗): même ordre de dépilement, SANS échange — l’application
//   inversée (voir operateurs.rs) a déjà rétabli l’ordre de saisie
//
// Les dépilements obligatoires (symbole, opérandes) échouent en
// `TraceIncomplete` ; seuls les rejets tolèrent une trace courte.

use super::erreurs::ErreurNoyau;
use super::operateurs::{Affichage, TableOperateurs};

pub fn reconstruit(
    trace: &mut Vec<String>,
    table: &TableOperateurs,
) -> Result<String, ErreurNoyau> {
    let symbole = trace.pop().ok_or(ErreurNoyau::TraceIncomplete)?;

    let affichage = match table.cherche(&symbole) {
        Some(op) => op.affichage(),
        // le sommet de trace n’est pas un opérateur : état incohérent
        None => return Err(ErreurNoyau::TraceIncomplete),
    };

    match affichage {
        Affichage::PrefixeFonction => {
            let operande = trace.pop().ok_or(ErreurNoyau::TraceIncomplete)?;
            jette(trace, 2);
            Ok(format!("{symbole}({operande})"))
        }
        Affichage::InfixeInverse | Affichage::InfixeNaturel => {
            let a = trace.pop().ok_or(ErreurNoyau::TraceIncomplete)?;
            let b = trace.pop().ok_or(ErreurNoyau::TraceIncomplete)?;
            jette(trace, 3);
            Ok(format!("{a} {symbole} {b}"))
        }
    }
}

/// Rejette jusqu’à `n` entrées (tolère une trace déjà vide).
fn jette(trace: &mut Vec<String>, n: usize) {
    for _ in 0..n {
        if trace.pop().is_none() {
            break;
        }
    }
}
