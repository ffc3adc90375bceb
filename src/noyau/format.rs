// src/noyau/format.rs
//
// Affichage du résultat sur l’écran de la calculatrice.
// Même rendu que l’écran d’origine :
// - 9.0, 512.0, 0.5        (toujours une décimale)
// - 1.0E7, 1.5E-5          (scientifique hors de [10^-3, 10^7[)
// - Infinity, -Infinity, NaN

const BORNE_BASSE: f64 = 1e-3;
const BORNE_HAUTE: f64 = 1e7;

pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let a = x.abs();
    if a == 0.0 || (BORNE_BASSE..BORNE_HAUTE).contains(&a) {
        // Debug garde le ".0" des entiers et la forme décimale dans cette plage
        return format!("{x:?}");
    }

    format_scientifique(x)
}

/// 12345678.0 -> "1.2345678E7" ; 0.00015 -> "1.5E-4"
fn format_scientifique(x: f64) -> String {
    let s = format!("{x:e}");
    let (mantisse, exposant) = s.split_once('e').unwrap_or((s.as_str(), "0"));

    if mantisse.contains('.') {
        format!("{mantisse}E{exposant}")
    } else {
        format!("{mantisse}.0E{exposant}")
    }
}
