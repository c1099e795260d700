// src/noyau/moteur.rs
//
// Moteur à pile : possède le programme postfixe, les liaisons de variables
// et la trace de la dernière évaluation. Objet de session explicite : pas
// de singleton, pas d’état partagé.
//
// Évaluation : descente récursive de droite à gauche sur le programme.
// Chaque étape reçoit la tranche restante et rend (valeur éventuelle,
// tranche encore à consommer) — aucune mutation partagée derrière le dos
// de l’appelant.

use std::collections::HashMap;

use super::erreurs::ErreurNoyau;
use super::format::{arrondi_2, format_nombre};
use super::infixe::reconstruit;
use super::jetons::Jeton;
use super::operateurs::{Operateur, TableOperateurs};
use super::programme::{exporte, importe};

/// Variable servie par `evalue_pour` (échantillonnage y(x) pour un traceur
/// de courbes externe).
pub const VARIABLE_MEMOIRE: &str = "M";

#[derive(Default)]
pub struct Moteur {
    table: TableOperateurs,
    programme: Vec<Jeton>,
    variables: HashMap<String, f64>,
    // Trace de la DERNIÈRE évaluation : reconstruite à chaque appel
    // d’`evalue`, jamais persistée.
    trace: Vec<String>,
    // Journal d’actions libre (alimenté par l’appelant).
    historique: Vec<String>,
}

impl Moteur {
    /* ------------------------ Mutation du programme ------------------------ */

    /// Ajoute un opérande puis ré-évalue tout le programme.
    pub fn pousse_operande(&mut self, valeur: f64) -> Option<f64> {
        self.programme.push(Jeton::Operande(valeur));
        self.evalue()
    }

    /// Ajoute une variable et rend sa liaison COURANTE (ou None).
    ///
    /// Asymétrie voulue : contrairement à `pousse_operande`, PAS de
    /// ré-évaluation ici — l’évaluation est différée au prochain appel.
    pub fn pousse_variable(&mut self, nom: &str) -> Option<f64> {
        self.programme.push(Jeton::Variable(nom.to_string()));
        self.variables.get(nom).copied()
    }

    /// Ajoute un opérateur si le symbole est connu, puis ré-évalue dans
    /// tous les cas. Symbole inconnu : programme inchangé, avertissement.
    pub fn applique_operation(&mut self, symbole: &str) -> Option<f64> {
        match self.table.cherche(symbole) {
            Some(Operateur::Unaire { .. }) => {
                self.programme.push(Jeton::OpUnaire(symbole.to_string()));
            }
            Some(Operateur::Binaire { .. }) => {
                self.programme.push(Jeton::OpBinaire(symbole.to_string()));
            }
            None => {
                log::warn!("opérateur inconnu ignoré : {symbole:?}");
            }
        }
        self.evalue()
    }

    /// Fixe (ou remplace) une liaison ; rend la valeur mémorisée.
    pub fn fixe_variable(&mut self, nom: &str, valeur: f64) -> f64 {
        self.variables.insert(nom.to_string(), valeur);
        valeur
    }

    /// Lie la dernière variable saisie : le sommet du programme doit être
    /// un opérande, le jeton dessous une variable. Les deux sont dépilés et
    /// la liaison posée ; une entrée `"nom = valeur"` rejoint la trace.
    ///
    /// Vérifie AVANT de dépiler : en cas d’échec le programme est intact.
    pub fn lie_derniere_variable(&mut self) -> Result<(), ErreurNoyau> {
        let valeur = match self.programme.last() {
            Some(Jeton::Operande(valeur)) => *valeur,
            autre => {
                return Err(ErreurNoyau::PileMalformee {
                    attendu: "un opérande numérique au sommet",
                    trouve: decrit(autre),
                })
            }
        };

        let dessous = self
            .programme
            .len()
            .checked_sub(2)
            .and_then(|i| self.programme.get(i));
        let nom = match dessous {
            Some(Jeton::Variable(nom)) => nom.clone(),
            autre => {
                return Err(ErreurNoyau::PileMalformee {
                    attendu: "une variable sous le sommet",
                    trouve: decrit(autre),
                })
            }
        };

        self.programme.pop();
        self.programme.pop();
        self.fixe_variable(&nom, valeur);
        self.trace.push(format!("{nom} = {}", format_nombre(valeur)));
        Ok(())
    }

    /// Vide le programme (sans toucher aux liaisons ni à l’historique).
    pub fn vide_programme(&mut self) {
        self.programme.clear();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Ré-évalue tout le programme, de droite à gauche.
    ///
    /// - None (variable non liée, programme incomplet ou vide) : rendu tel
    ///   quel, SANS passer par l’arrondi ni la trace d’affichage.
    /// - Some : arrondi à 2 décimales ; si le sommet du programme n’est pas
    ///   un simple opérande, la trace reçoit `"expression = valeur"`.
    pub fn evalue(&mut self) -> Option<f64> {
        self.trace.clear();

        let (resultat, _reste) = evalue_jetons(
            &self.table,
            &self.variables,
            &self.programme,
            &mut self.trace,
        );

        let resultat = match resultat {
            Some(valeur) => valeur,
            None => {
                log::debug!("évaluation sans valeur (programme : {:?})", self.programme);
                return None;
            }
        };

        let arrondi = arrondi_2(resultat);

        if let Some(dernier) = self.programme.last() {
            if !matches!(dernier, Jeton::Operande(_)) {
                // le symbole du sommet rejoint la trace, puis on reconstruit
                self.trace.push(dernier.description());
                match reconstruit(&mut self.trace, &self.table) {
                    Ok(expression) => {
                        self.trace
                            .push(format!("{expression} = {}", format_nombre(arrondi)));
                    }
                    Err(erreur) => {
                        // état incohérent : on garde la valeur, pas l’affichage
                        log::error!("reconstruction infixe impossible : {erreur}");
                    }
                }
            }
        }

        Some(arrondi)
    }

    /// Échantillonnage y(x) : fixe la variable mémoire puis évalue.
    pub fn evalue_pour(&mut self, x: f64) -> Option<f64> {
        self.fixe_variable(VARIABLE_MEMOIRE, x);
        self.evalue()
    }

    /* ------------------------ Affichage ------------------------ */

    /// Dernière entrée de trace : `"expression = valeur"` après une
    /// évaluation complète, ou le dernier jeton brut sinon. Chaîne vide si
    /// rien n’a encore été évalué. Idempotent.
    pub fn derniere_expression(&self) -> String {
        self.trace.last().cloned().unwrap_or_default()
    }

    /* ------------------------ Export / import ------------------------ */

    /// Le programme courant, sous forme de liste ordonnée de symboles.
    pub fn programme(&self) -> Vec<String> {
        exporte(&self.programme)
    }

    /// Remplace le programme entier depuis une forme exportée.
    /// Tout-ou-rien : sur erreur, le programme courant reste en place.
    pub fn charge_programme(&mut self, symboles: &[String]) -> Result<(), ErreurNoyau> {
        self.programme = importe(&self.table, symboles)?;
        Ok(())
    }

    pub fn table(&self) -> &TableOperateurs {
        &self.table
    }

    /* ------------------------ Historique ------------------------ */

    pub fn ajoute_historique(&mut self, action: impl Into<String>) {
        self.historique.push(action.into());
    }

    pub fn historique(&self) -> &[String] {
        &self.historique
    }

    pub fn vide_historique(&mut self) {
        self.historique.clear();
    }
}

/* ------------------------ Descente récursive ------------------------ */

/// Consomme le programme par la fin : rend (valeur éventuelle, tranche
/// restante). Les jetons consommés laissent leur forme texte sur la trace.
fn evalue_jetons<'a>(
    table: &TableOperateurs,
    variables: &HashMap<String, f64>,
    jetons: &'a [Jeton],
    trace: &mut Vec<String>,
) -> (Option<f64>, &'a [Jeton]) {
    let (dernier, reste) = match jetons.split_last() {
        Some(paire) => paire,
        None => return (None, jetons),
    };

    match dernier {
        Jeton::Operande(valeur) => {
            trace.push(format_nombre(*valeur));
            (Some(*valeur), reste)
        }

        Jeton::Variable(nom) => {
            trace.push(nom.clone());
            (variables.get(nom).copied(), reste)
        }

        Jeton::OpUnaire(symbole) => {
            trace.push(symbole.clone());
            let applique = match table.cherche(symbole) {
                Some(Operateur::Unaire { applique }) => *applique,
                _ => {
                    // impossible si l’invariant de construction tient
                    log::error!("opérateur unaire hors table : {symbole:?}");
                    return (None, reste);
                }
            };

            let (operande, apres) = evalue_jetons(table, variables, reste, trace);
            match operande {
                Some(x) => (Some(applique(x)), apres),
                None => (None, apres),
            }
        }

        Jeton::OpBinaire(symbole) => {
            trace.push(symbole.clone());
            let applique = match table.cherche(symbole) {
                Some(Operateur::Binaire { applique, .. }) => *applique,
                _ => {
                    log::error!("opérateur binaire hors table : {symbole:?}");
                    return (None, reste);
                }
            };

            // premier dépilé = jeton le plus proche de la fin du programme
            let (premier, apres_1) = evalue_jetons(table, variables, reste, trace);
            let premier = match premier {
                Some(valeur) => valeur,
                None => return (None, apres_1),
            };

            let (second, apres_2) = evalue_jetons(table, variables, apres_1, trace);
            let second = match second {
                Some(valeur) => valeur,
                None => return (None, apres_2),
            };

            (Some(applique(premier, second)), apres_2)
        }
    }
}

fn decrit(jeton: Option<&Jeton>) -> String {
    match jeton {
        Some(jeton) => jeton.description(),
        None => "pile vide".to_string(),
    }
}
