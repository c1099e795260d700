// src/noyau/erreurs.rs
//
// Erreurs structurelles du noyau. L’absence de valeur (variable non liée,
// programme incomplet) n’est PAS une erreur : elle circule en Option::None.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurNoyau {
    /// `lie_derniere_variable` n’a pas trouvé la forme attendue
    /// (opérande au sommet, variable dessous). Le programme reste intact.
    #[error("pile malformée : attendu {attendu}, trouvé {trouve}")]
    PileMalformee {
        attendu: &'static str,
        trouve: String,
    },

    /// La reconstruction infixe a manqué d’entrées de trace.
    #[error("trace incomplète pendant la reconstruction infixe")]
    TraceIncomplete,

    /// Import de programme : symbole ni opérateur, ni nombre, ni identifiant.
    /// L’import est tout-ou-rien : le programme courant n’est pas touché.
    #[error("jeton non reconnu à l’import : {jeton:?}")]
    ImportInvalide { jeton: String },
}
