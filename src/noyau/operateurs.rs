// src/noyau/operateurs.rs
//
// Table des opérateurs : configuration statique, construite une fois,
// jamais modifiée ensuite.
//
// Règles:
// - Un opérateur binaire reçoit ses arguments dans l’ordre de dépilement :
//   (premier dépilé, second dépilé). Les opérateurs “inversés” (➖, ➗)
//   appliquent donc `second OP premier` pour respecter l’ordre de saisie :
//   saisir 10 puis 4 puis ➗ doit donner 10/4 = 2.5, pas 0.4.
// - L’affichage infixe suit le même principe (voir infixe.rs) : pas
//   d’échange d’opérandes pour les inversés, l’application s’en charge déjà.

use std::collections::HashMap;

/* ------------------------ Symboles connus ------------------------ */

pub const MULTIPLIE: &str = "✖️";
pub const DIVISE: &str = "➗";
pub const AJOUTE: &str = "➕";
pub const SOUSTRAIT: &str = "➖";
pub const RACINE: &str = "✔️";
pub const COSINUS: &str = "cos";

/* ------------------------ Définitions ------------------------ */

/// Manière de reconstruire l’affichage infixe d’un opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affichage {
    /// `symbole(x)` — fonctions unaires (✔️, cos).
    PrefixeFonction,
    /// `a symbole b` en ordre de dépilement, SANS échange (➖, ➗).
    InfixeInverse,
    /// `a symbole b` — opérateurs commutatifs (➕, ✖️).
    InfixeNaturel,
}

/// Définition d’un opérateur : arité + fonction d’application + affichage.
#[derive(Clone, Copy)]
pub enum Operateur {
    Unaire {
        applique: fn(f64) -> f64,
    },
    Binaire {
        applique: fn(f64, f64) -> f64,
        affichage: Affichage,
    },
}

impl Operateur {
    pub fn affichage(&self) -> Affichage {
        match self {
            Operateur::Unaire { .. } => Affichage::PrefixeFonction,
            Operateur::Binaire { affichage, .. } => *affichage,
        }
    }
}

/* ------------------------ Table ------------------------ */

pub struct TableOperateurs {
    ops: HashMap<&'static str, Operateur>,
}

impl Default for TableOperateurs {
    /// Les six opérateurs du moteur. Pas d’API de mutation après coup.
    fn default() -> Self {
        let mut ops: HashMap<&'static str, Operateur> = HashMap::new();

        ops.insert(
            MULTIPLIE,
            Operateur::Binaire {
                applique: |a, b| a * b,
                affichage: Affichage::InfixeNaturel,
            },
        );
        ops.insert(
            DIVISE,
            Operateur::Binaire {
                // premier dépilé = dernier saisi => on divise dans l’autre sens
                applique: |premier, second| second / premier,
                affichage: Affichage::InfixeInverse,
            },
        );
        ops.insert(
            AJOUTE,
            Operateur::Binaire {
                applique: |a, b| a + b,
                affichage: Affichage::InfixeNaturel,
            },
        );
        ops.insert(
            SOUSTRAIT,
            Operateur::Binaire {
                applique: |premier, second| second - premier,
                affichage: Affichage::InfixeInverse,
            },
        );
        ops.insert(RACINE, Operateur::Unaire { applique: f64::sqrt });
        ops.insert(COSINUS, Operateur::Unaire { applique: f64::cos });

        Self { ops }
    }
}

impl TableOperateurs {
    pub fn cherche(&self, symbole: &str) -> Option<&Operateur> {
        self.ops.get(symbole)
    }

    pub fn est_connu(&self, symbole: &str) -> bool {
        self.ops.contains_key(symbole)
    }
}
