// src/noyau/format.rs
//
// Affichage d’un résultat (UI / CLI).

/// - NaN        -> "NaN"
/// - ±infini    -> "Infinity" / "-Infinity"
/// - sinon      -> forme décimale la plus courte qui relit la même valeur
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if x == 0.0 {
        // -0 s’affiche 0
        "0".to_string()
    } else {
        format!("{x}")
    }
}
