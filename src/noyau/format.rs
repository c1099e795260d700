// src/noyau/format.rs

/* ------------------------ Arrondi ------------------------ */

/// Arrondit à 2 décimales, demi-parts loin de zéro (sémantique de
/// `f64::round` sur la valeur mise à l’échelle).
pub fn arrondi_2(valeur: f64) -> f64 {
    (valeur * 100.0).round() / 100.0
}

/* ------------------------ Affichage décimal ------------------------ */

/// Forme décimale avec 0 à 2 chiffres après la virgule :
/// - zéros de fin retirés ("2.50" -> "2.5")
/// - pas de point forcé sur les entiers ("7.00" -> "7")
/// - "-0" normalisé en "0"
///
/// Sert à la trace et à l’affichage, PAS à l’export (pleine précision).
pub fn format_nombre(valeur: f64) -> String {
    let texte = format!("{valeur:.2}");
    let texte = texte.trim_end_matches('0').trim_end_matches('.');
    if texte == "-0" {
        "0".to_string()
    } else {
        texte.to_string()
    }
}
