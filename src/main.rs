// src/main.rs
//
// Calculatrice à pile (postfixe) — point d’entrée.
// ------------------------------------------------
// But:
// - boucle de session sur stdin : un jeton ou une commande par ligne
// - options en ligne de commande : programme à charger au démarrage
// - journalisation via env_logger (RUST_LOG=debug pour le détail)
//
// La logique vit dans noyau/ ; ici, lecture de lignes seulement.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use structopt::StructOpt;

mod noyau;
mod session;

use session::{Session, Suite};

const INVITE: &str = "> ";

#[derive(StructOpt, Debug)]
#[structopt(
    name = "calculatrice_pile",
    about = "Moteur de calculatrice postfixe (RPN), saisie jeton par jeton."
)]
struct Options {
    /// Programme à charger au démarrage (JSON : liste de symboles).
    #[structopt(long, parse(from_os_str))]
    programme: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let options = Options::from_args();

    let mut session = Session::default();

    if let Some(chemin) = options.programme.as_deref() {
        match session.charge(chemin) {
            Ok(()) => log::info!("programme chargé : {}", chemin.display()),
            Err(erreur) => {
                eprintln!("chargement impossible : {erreur}");
                std::process::exit(1);
            }
        }
    }

    println!("calculatrice postfixe — `aide` pour les commandes, `quitte` pour sortir");

    let stdin = io::stdin();
    invite();
    for ligne in stdin.lock().lines() {
        let ligne = match ligne {
            Ok(ligne) => ligne,
            Err(erreur) => {
                log::error!("lecture stdin interrompue : {erreur}");
                break;
            }
        };

        if session.traite_ligne(&ligne) == Suite::Quitte {
            break;
        }
        invite();
    }
}

fn invite() {
    print!("{INVITE}");
    let _ = io::stdout().flush();
}
