// src/session.rs
//
// Session ligne de commande — l’équivalent “présentation” du moteur.
//
// Rôle:
// - interpréter une ligne saisie (nombre, opérateur, ou commande)
// - pousser les jetons dans le moteur et afficher les retours
// - sauvegarder/charger le programme (liste de symboles JSON)
//
// Aucune logique de calcul ici : tout passe par noyau::Moteur.

use std::fs;
use std::path::Path;

use crate::noyau::Moteur;

/// Suite donnée à la boucle après une ligne.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suite {
    Continue,
    Quitte,
}

#[derive(Default)]
pub struct Session {
    moteur: Moteur,
}

impl Session {
    /* ------------------------ Boucle ------------------------ */

    /// Interprète une ligne complète et affiche le résultat sur stdout.
    pub fn traite_ligne(&mut self, ligne: &str) -> Suite {
        let mots: Vec<&str> = ligne.split_whitespace().collect();

        match mots.as_slice() {
            [] => Suite::Continue,

            ["quitte"] | ["q"] => Suite::Quitte,

            ["aide"] => {
                self.affiche_aide();
                Suite::Continue
            }

            // AC : programme + historique remis à zéro (liaisons conservées)
            ["ac"] => {
                self.moteur.vide_programme();
                self.moteur.vide_historique();
                println!("programme vidé");
                Suite::Continue
            }

            ["prog"] => {
                let symboles = self.moteur.programme();
                if symboles.is_empty() {
                    println!("(programme vide)");
                } else {
                    println!("{}", symboles.join(" "));
                }
                Suite::Continue
            }

            ["hist"] => {
                for action in self.moteur.historique() {
                    println!("{action}");
                }
                Suite::Continue
            }

            ["var", nom] => {
                self.moteur.ajoute_historique(format!("var {nom}"));
                match self.moteur.pousse_variable(nom) {
                    Some(valeur) => println!("{nom} -> {valeur}"),
                    None => println!("{nom} -> (non liée)"),
                }
                Suite::Continue
            }

            ["fixe", nom, valeur] => {
                match valeur.parse::<f64>() {
                    Ok(valeur) => {
                        let posee = self.moteur.fixe_variable(nom, valeur);
                        self.moteur.ajoute_historique(format!("fixe {nom} {posee}"));
                        println!("{nom} = {posee}");
                    }
                    Err(_) => println!("valeur invalide : {valeur:?}"),
                }
                Suite::Continue
            }

            // → : lie la dernière variable saisie à l’opérande au sommet
            ["lie"] => {
                match self.moteur.lie_derniere_variable() {
                    Ok(()) => println!("{}", self.moteur.derniere_expression()),
                    Err(erreur) => println!("erreur : {erreur}"),
                }
                Suite::Continue
            }

            ["y", x] => {
                match x.parse::<f64>() {
                    Ok(x) => {
                        let resultat = self.moteur.evalue_pour(x);
                        self.affiche_resultat(resultat);
                    }
                    Err(_) => println!("abscisse invalide : {x:?}"),
                }
                Suite::Continue
            }

            ["sauve", chemin] => {
                match self.sauve(Path::new(chemin)) {
                    Ok(()) => println!("programme sauvé dans {chemin}"),
                    Err(erreur) => println!("erreur : {erreur}"),
                }
                Suite::Continue
            }

            ["charge", chemin] => {
                match self.charge(Path::new(chemin)) {
                    Ok(()) => {
                        let resultat = self.moteur.evalue();
                        self.affiche_resultat(resultat);
                    }
                    Err(erreur) => println!("erreur : {erreur}"),
                }
                Suite::Continue
            }

            [mot] if mot.parse::<f64>().is_ok() => {
                // ligne = un nombre : opérande
                let valeur = mot.parse::<f64>().unwrap_or_default();
                self.moteur.ajoute_historique(*mot);
                let resultat = self.moteur.pousse_operande(valeur);
                self.affiche_resultat(resultat);
                Suite::Continue
            }

            [mot] if self.moteur.table().est_connu(mot) => {
                self.moteur.ajoute_historique(*mot);
                self.moteur.applique_operation(mot);
                println!("{}", self.moteur.derniere_expression());
                Suite::Continue
            }

            _ => {
                println!("commande inconnue (essayez `aide`)");
                Suite::Continue
            }
        }
    }

    /* ------------------------ Affichage ------------------------ */

    fn affiche_resultat(&self, resultat: Option<f64>) {
        match resultat {
            Some(valeur) => println!("{}", crate::noyau::format::format_nombre(valeur)),
            None => println!("(aucune valeur)"),
        }
    }

    fn affiche_aide(&self) {
        println!("saisie postfixe, un élément par ligne :");
        println!("  <nombre>        pousse un opérande (ré-évalue tout)");
        println!("  ✖️ ➗ ➕ ➖ ✔️ cos  applique un opérateur");
        println!("  var <nom>       pousse une variable");
        println!("  fixe <nom> <v>  lie une variable");
        println!("  lie             lie la dernière variable depuis la pile");
        println!("  y <x>           échantillonne y(x) via la variable M");
        println!("  prog            affiche le programme courant");
        println!("  sauve <fichier> / charge <fichier>  programme en JSON");
        println!("  hist / ac / quitte");
    }

    /* ------------------------ Sauvegarde / chargement ------------------------ */

    pub fn sauve(&self, chemin: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&self.moteur.programme())
            .map_err(|e| format!("sérialisation impossible : {e}"))?;
        fs::write(chemin, json).map_err(|e| format!("écriture impossible : {e}"))?;
        Ok(())
    }

    pub fn charge(&mut self, chemin: &Path) -> Result<(), String> {
        let contenu =
            fs::read_to_string(chemin).map_err(|e| format!("lecture impossible : {e}"))?;
        let symboles: Vec<String> =
            serde_json::from_str(&contenu).map_err(|e| format!("JSON invalide : {e}"))?;
        self.moteur
            .charge_programme(&symboles)
            .map_err(|e| e.to_string())?;
        log::debug!("programme chargé depuis {}", chemin.display());
        Ok(())
    }
}
