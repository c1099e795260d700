//! Tests du moteur : ordre de saisie, affichage infixe, variables,
//! liaison depuis la pile, export/import.

use super::erreurs::ErreurNoyau;
use super::moteur::Moteur;

fn moteur() -> Moteur {
    Moteur::default()
}

/* ------------------------ Ordre de saisie ------------------------ */

#[test]
fn division_respecte_l_ordre_de_saisie() {
    let mut m = moteur();
    m.pousse_operande(10.0);
    m.pousse_operande(4.0);
    // 10 puis 4 puis ➗ : 10/4, pas 4/10
    assert_eq!(m.applique_operation("➗"), Some(2.5));
}

#[test]
fn soustraction_respecte_l_ordre_de_saisie() {
    let mut m = moteur();
    m.pousse_operande(10.0);
    m.pousse_operande(4.0);
    assert_eq!(m.applique_operation("➖"), Some(6.0));
}

#[test]
fn soustraction_negative() {
    let mut m = moteur();
    m.pousse_operande(4.0);
    m.pousse_operande(10.0);
    assert_eq!(m.applique_operation("➖"), Some(-6.0));
    assert_eq!(m.derniere_expression(), "4 ➖ 10 = -6");
}

/* ------------------------ Affichage infixe ------------------------ */

#[test]
fn affichage_addition() {
    let mut m = moteur();
    m.pousse_operande(3.0);
    m.pousse_operande(4.0);
    assert_eq!(m.applique_operation("➕"), Some(7.0));
    assert_eq!(m.derniere_expression(), "3 ➕ 4 = 7");
}

#[test]
fn affichage_racine() {
    let mut m = moteur();
    m.pousse_operande(9.0);
    assert_eq!(m.applique_operation("✔️"), Some(3.0));
    assert_eq!(m.derniere_expression(), "✔️(9) = 3");
}

#[test]
fn affichage_division_arrondie() {
    let mut m = moteur();
    m.pousse_operande(10.0);
    m.pousse_operande(3.0);
    assert_eq!(m.applique_operation("➗"), Some(3.33));
    assert_eq!(m.derniere_expression(), "10 ➗ 3 = 3.33");
}

#[test]
fn affichage_jeton_brut_sur_simple_operande() {
    let mut m = moteur();
    m.pousse_operande(3.0);
    m.pousse_operande(4.5);
    // sommet = opérande : pas de reconstruction, le jeton brut suffit
    assert_eq!(m.derniere_expression(), "4.5");
}

#[test]
fn derniere_expression_idempotente() {
    let mut m = moteur();
    m.pousse_operande(3.0);
    m.pousse_operande(4.0);
    m.applique_operation("➕");
    let premier_appel = m.derniere_expression();
    assert_eq!(m.derniere_expression(), premier_appel);
}

#[test]
fn derniere_expression_vide_au_depart() {
    let m = moteur();
    assert_eq!(m.derniere_expression(), "");
}

/* ------------------------ Variables ------------------------ */

#[test]
fn variable_non_liee_sans_valeur() {
    let mut m = moteur();
    assert_eq!(m.pousse_variable("x"), None);
    assert_eq!(m.evalue(), None);
}

#[test]
fn pousse_variable_ne_reevalue_pas() {
    let mut m = moteur();
    m.pousse_operande(3.0);
    m.pousse_operande(4.0);
    m.applique_operation("➕");
    let affichage_avant = m.derniere_expression();

    // la trace ne bouge pas : pousse_variable n’évalue pas
    m.pousse_variable("x");
    assert_eq!(m.derniere_expression(), affichage_avant);
}

#[test]
fn fixe_variable_rend_la_valeur() {
    let mut m = moteur();
    assert_eq!(m.fixe_variable("x", 5.0), 5.0);
    assert_eq!(m.pousse_variable("x"), Some(5.0));
    assert_eq!(m.evalue(), Some(5.0));
}

#[test]
fn lie_derniere_variable_depuis_la_pile() {
    let mut m = moteur();
    m.pousse_variable("x");
    m.pousse_operande(5.0);

    m.lie_derniere_variable().unwrap();
    assert_eq!(m.derniere_expression(), "x = 5");

    // la liaison est visible au prochain pousse_variable
    assert_eq!(m.pousse_variable("x"), Some(5.0));
    // et le programme ne contient plus que cette variable
    assert_eq!(m.programme(), vec!["x".to_string()]);
    assert_eq!(m.evalue(), Some(5.0));
}

#[test]
fn lie_refuse_une_pile_vide() {
    let mut m = moteur();
    let erreur = m.lie_derniere_variable().unwrap_err();
    assert!(matches!(erreur, ErreurNoyau::PileMalformee { .. }));
}

#[test]
fn lie_refuse_sans_variable_dessous() {
    let mut m = moteur();
    m.pousse_operande(3.0);
    m.pousse_operande(5.0);

    let erreur = m.lie_derniere_variable().unwrap_err();
    assert!(matches!(erreur, ErreurNoyau::PileMalformee { .. }));
    // échec sans dégât : le programme est intact
    assert_eq!(m.programme(), vec!["3".to_string(), "5".to_string()]);
}

#[test]
fn echantillonnage_y_de_x() {
    let mut m = moteur();
    m.pousse_variable("M");
    assert_eq!(m.applique_operation("cos"), None); // M pas encore liée

    assert_eq!(m.evalue_pour(0.0), Some(1.0));
    assert_eq!(m.derniere_expression(), "cos(M) = 1");
}

/* ------------------------ Opérateur inconnu ------------------------ */

#[test]
fn operateur_inconnu_laisse_le_programme_intact() {
    let mut m = moteur();
    m.pousse_operande(3.0);
    // symbole absent de la table : rien d’ajouté, évaluation quand même
    assert_eq!(m.applique_operation("%"), Some(3.0));
    assert_eq!(m.programme(), vec!["3".to_string()]);
}

/* ------------------------ Export / import ------------------------ */

#[test]
fn aller_retour_programme_meme_evaluation() {
    let mut m1 = moteur();
    m1.pousse_variable("x");
    m1.pousse_operande(2.0);
    m1.applique_operation("✖️");

    let symboles = m1.programme();
    assert_eq!(symboles, vec!["x", "2", "✖️"]);

    let mut m2 = moteur();
    m2.charge_programme(&symboles).unwrap();

    m1.fixe_variable("x", 3.0);
    m2.fixe_variable("x", 3.0);
    assert_eq!(m1.evalue(), m2.evalue());
    assert_eq!(m2.evalue(), Some(6.0));
}

#[test]
fn import_invalide_ne_touche_pas_le_programme() {
    let mut m = moteur();
    m.pousse_operande(7.0);

    let erreur = m
        .charge_programme(&["3".to_string(), "@@".to_string()])
        .unwrap_err();
    assert!(matches!(erreur, ErreurNoyau::ImportInvalide { .. }));
    assert_eq!(m.programme(), vec!["7".to_string()]);
}

/* ------------------------ Divers ------------------------ */

#[test]
fn vide_programme_garde_les_liaisons() {
    let mut m = moteur();
    m.fixe_variable("x", 5.0);
    m.pousse_operande(1.0);
    m.vide_programme();

    assert!(m.programme().is_empty());
    assert_eq!(m.evalue(), None);
    // vider deux fois : sans effet
    m.vide_programme();
    assert_eq!(m.pousse_variable("x"), Some(5.0));
}

#[test]
fn programme_incomplet_sans_valeur() {
    let mut m = moteur();
    m.pousse_operande(3.0);
    // ➕ binaire avec un seul opérande : pas de valeur, pas de panique
    assert_eq!(m.applique_operation("➕"), None);
}

#[test]
fn historique_des_actions() {
    let mut m = moteur();
    m.ajoute_historique("3");
    m.ajoute_historique("➕");
    assert_eq!(m.historique(), ["3".to_string(), "➕".to_string()]);

    m.vide_historique();
    assert!(m.historique().is_empty());
}
